//! `stockroom-store` — the record store contract and its in-memory
//! implementation.
//!
//! The store is the single source of truth for inventory records. Callers
//! are expected to gate every write through the domain validator; the store
//! itself only enforces identity and atomicity.

pub mod error;
pub mod in_memory;
pub mod record_store;

pub use error::StoreError;
pub use in_memory::InMemoryRecordStore;
pub use record_store::{RecordPage, RecordStore};
