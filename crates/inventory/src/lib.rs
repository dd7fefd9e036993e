//! `stockroom-inventory` — pure inventory domain.
//!
//! Everything here is a stateless transform over explicit inputs: the
//! validator gates candidate records before any write, the aggregator folds a
//! record set into summary statistics, and the filter engine narrows a record
//! set by an AND-combined criteria set. No I/O, no shared state.

pub mod filter;
pub mod record;
pub mod summary;
pub mod validate;

pub use filter::FilterCriteria;
pub use record::{InventoryRecord, RecordDraft, RecordPatch};
pub use summary::{
    LowStockEntry, PriceHighlight, StockHighlight, Summary, LOW_STOCK_THRESHOLD,
};
pub use validate::{validate, validate_patch, ValidationIssue};
