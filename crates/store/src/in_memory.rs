use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use stockroom_core::ItemId;
use stockroom_inventory::{FilterCriteria, InventoryRecord, RecordDraft, RecordPatch};

use crate::error::StoreError;
use crate::record_store::{RecordPage, RecordStore};

/// In-memory record store.
///
/// Intended for tests/dev and as the reference implementation of the
/// [`RecordStore`] contract. Default ordering for reads is creation time
/// descending, id descending as the tie-break (ids are time-ordered, so the
/// tie-break is stable across calls).
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<ItemId, InventoryRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted_newest_first(map: &HashMap<ItemId, InventoryRecord>) -> Vec<InventoryRecord> {
        let mut records: Vec<_> = map.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, draft: RecordDraft, now: DateTime<Utc>) -> Result<InventoryRecord, StoreError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        // now_v7 ids never collide in practice; treat a collision as a
        // malformed request rather than silently overwriting.
        let id = ItemId::new();
        if map.contains_key(&id) {
            return Err(StoreError::malformed(format!("id already in use: {id}")));
        }

        let record = draft.into_record(id, now);
        map.insert(id, record.clone());
        Ok(record)
    }

    fn update_by_id(
        &self,
        id: ItemId,
        draft: RecordDraft,
        now: DateTime<Utc>,
    ) -> Result<InventoryRecord, StoreError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let record = map.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        draft.replace_into(record, now);
        Ok(record.clone())
    }

    fn delete_by_id(&self, id: ItemId) -> Result<(), StoreError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        map.remove(&id).ok_or(StoreError::NotFound(id))?;
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let map = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(Self::sorted_newest_first(&map))
    }

    // Pushdown variant: evaluates the predicate during the scan instead of
    // materializing the full set first. Same criteria semantics as the
    // client-side engine, store-default ordering.
    fn fetch_where(&self, criteria: &FilterCriteria) -> Result<Vec<InventoryRecord>, StoreError> {
        if criteria.is_empty() {
            return self.fetch_all();
        }

        let map = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        let mut records: Vec<_> = map.values().filter(|r| criteria.matches(r)).cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    fn fetch_page(
        &self,
        page_size: usize,
        after: Option<ItemId>,
    ) -> Result<RecordPage, StoreError> {
        if page_size == 0 {
            return Err(StoreError::malformed("page_size must be positive"));
        }

        let ordered = self.fetch_all()?;

        let start = match after {
            Some(cursor) => match ordered.iter().position(|r| r.id == cursor) {
                Some(pos) => pos + 1,
                // Cursor record deleted mid-walk. Ids are time-ordered, so
                // resume at the first record older than the cursor instead
                // of failing the walk.
                None => ordered
                    .iter()
                    .position(|r| r.id < cursor)
                    .unwrap_or(ordered.len()),
            },
            None => 0,
        };

        let items: Vec<_> = ordered.into_iter().skip(start).take(page_size).collect();
        let next_cursor = if items.len() == page_size {
            items.last().map(|r| r.id)
        } else {
            None
        };

        Ok(RecordPage { items, next_cursor })
    }

    fn batch_update(
        &self,
        entries: Vec<(ItemId, RecordPatch)>,
        now: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        let mut map = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        // Verify the whole batch before touching anything, so a rejection
        // leaves the store exactly as it was.
        for (id, _) in &entries {
            if !map.contains_key(id) {
                return Err(StoreError::NotFound(*id));
            }
        }

        // Entries apply in order; duplicate ids patch the same record and
        // count it once.
        let mut touched = HashSet::new();
        for (id, patch) in entries {
            if let Some(record) = map.get_mut(&id) {
                patch.merge_into(record, now);
                touched.insert(id);
            }
        }
        Ok(touched.len())
    }
}
