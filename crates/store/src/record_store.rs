use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;
use stockroom_inventory::{filter, FilterCriteria, InventoryRecord, RecordDraft, RecordPatch};

use crate::error::StoreError;

/// One page of records plus the cursor for the next page.
///
/// Pages are ordered by creation time descending. `next_cursor` is the id of
/// the last record on this page; `None` means the walk is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage {
    pub items: Vec<InventoryRecord>,
    pub next_cursor: Option<ItemId>,
}

/// Contract every record store backend satisfies.
///
/// Writes assume validator-passing input; see the service layer for the
/// gate. All operations are synchronous from the caller's point of view and
/// the trait is object safe, so services hold a `dyn RecordStore`.
pub trait RecordStore: Send + Sync {
    /// Insert a new record. The store assigns the id and stamps
    /// `created_at = last_updated = now`, `active = true`.
    fn insert(&self, draft: RecordDraft, now: DateTime<Utc>) -> Result<InventoryRecord, StoreError>;

    /// Full replace of the draft fields of an existing record, refreshing
    /// `last_updated` and preserving `created_at`/`active`.
    fn update_by_id(
        &self,
        id: ItemId,
        draft: RecordDraft,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, StoreError>;

    /// Permanently remove a record.
    fn delete_by_id(&self, id: ItemId) -> Result<(), StoreError>;

    /// Every record, in the store's default order.
    fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError>;

    /// Records satisfying `criteria`.
    ///
    /// The provided implementation fetches everything and filters
    /// client-side, which makes the logical contract hold for any backend;
    /// stores that can push predicates down should override it. Either way
    /// the result set must equal the client-side one, modulo the store's
    /// default ordering.
    fn fetch_where(&self, criteria: &FilterCriteria) -> Result<Vec<InventoryRecord>, StoreError> {
        Ok(filter::apply(&self.fetch_all()?, criteria))
    }

    /// Bounded page of records ordered by creation time descending,
    /// starting after the record identified by `after` (or from the top).
    ///
    /// A cursor whose record has since been deleted still positions the
    /// walk: implementations resume from where that record would have
    /// sorted rather than failing.
    fn fetch_page(
        &self,
        page_size: usize,
        after: Option<ItemId>,
    ) -> Result<RecordPage, StoreError>;

    /// Apply every patch, or none of them: all ids are verified before any
    /// merge happens, and any rejection fails the whole batch.
    ///
    /// Returns the number of distinct records updated; entries sharing an
    /// id all apply (in order) but count their record once.
    fn batch_update(
        &self,
        entries: Vec<(ItemId, RecordPatch)>,
        now: DateTime<Utc>,
    ) -> Result<usize, StoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert(&self, draft: RecordDraft, now: DateTime<Utc>) -> Result<InventoryRecord, StoreError> {
        (**self).insert(draft, now)
    }

    fn update_by_id(
        &self,
        id: ItemId,
        draft: RecordDraft,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, StoreError> {
        (**self).update_by_id(id, draft, now)
    }

    fn delete_by_id(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete_by_id(id)
    }

    fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        (**self).fetch_all()
    }

    fn fetch_where(&self, criteria: &FilterCriteria) -> Result<Vec<InventoryRecord>, StoreError> {
        (**self).fetch_where(criteria)
    }

    fn fetch_page(
        &self,
        page_size: usize,
        after: Option<ItemId>,
    ) -> Result<RecordPage, StoreError> {
        (**self).fetch_page(page_size, after)
    }

    fn batch_update(
        &self,
        entries: Vec<(ItemId, RecordPatch)>,
        now: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        (**self).batch_update(entries, now)
    }
}
