//! `stockroom-core` — shared primitives for the inventory tracker.
//!
//! Pure types only; no I/O and no infrastructure concerns.

pub mod id;

pub use id::{ItemId, ParseIdError};
