use thiserror::Error;

use stockroom_core::ItemId;

/// Failures originating at the record store boundary.
///
/// The store never retries on its own; callers may re-invoke. Detail in
/// these variants is for logs — user-facing layers surface a generic
/// message instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced id does not exist in the store.
    #[error("record not found: {0}")]
    NotFound(ItemId),

    /// The backend could not be reached or is unhealthy.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the caller's credentials for this operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The request itself was malformed (e.g. zero page size).
    #[error("malformed request: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
