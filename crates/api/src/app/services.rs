use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use stockroom_core::ItemId;
use stockroom_inventory::{
    validate, validate_patch, FilterCriteria, InventoryRecord, RecordDraft, RecordPatch, Summary,
    ValidationIssue,
};
use stockroom_store::{InMemoryRecordStore, RecordPage, RecordStore, StoreError};

/// Default page size for [`InventoryService::list_items`].
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Failure result of a service operation.
///
/// Expected validation failures are values here, never panics; store faults
/// carry only a generic safe message — the detail goes to the log at the
/// point of failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation failed")]
    Invalid(Vec<ValidationIssue>),

    #[error("item not found")]
    NotFound,

    #[error("{message}")]
    Backend { message: String },
}

impl ServiceError {
    fn backend(message: &str) -> Self {
        Self::Backend {
            message: message.to_string(),
        }
    }
}

/// One entry of a bulk update request, before pre-filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    /// Absent when the caller did not identify the record; such entries are
    /// skipped, not failed.
    pub id: Option<ItemId>,
    pub patch: RecordPatch,
}

/// Outcome of a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BulkOutcome {
    /// Distinct records the store updated.
    pub applied: usize,
    /// Entries dropped by the pre-filter (unidentified or invalid).
    pub skipped: usize,
}

/// Thin service over a record store: gates writes through the validator and
/// turns store faults into caller-safe failure results.
pub struct InventoryService {
    store: Arc<dyn RecordStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Service backed by the in-memory store (dev server and tests).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecordStore::new()))
    }

    /// Validate and insert a new record.
    pub fn add_item(&self, draft: RecordDraft) -> Result<InventoryRecord, ServiceError> {
        let issues = validate(&draft);
        if !issues.is_empty() {
            return Err(ServiceError::Invalid(issues));
        }

        self.store.insert(draft, Utc::now()).map_err(|e| {
            tracing::error!(error = %e, "failed to add item");
            ServiceError::backend("failed to add item")
        })
    }

    /// Validate and fully replace an existing record.
    pub fn update_item(
        &self,
        id: ItemId,
        draft: RecordDraft,
    ) -> Result<InventoryRecord, ServiceError> {
        let issues = validate(&draft);
        if !issues.is_empty() {
            return Err(ServiceError::Invalid(issues));
        }

        self.store
            .update_by_id(id, draft, Utc::now())
            .map_err(|e| match e {
                StoreError::NotFound(_) => ServiceError::NotFound,
                other => {
                    tracing::error!(error = %other, item_id = %id, "failed to update item");
                    ServiceError::backend("failed to update item")
                }
            })
    }

    /// Permanently remove a record.
    pub fn delete_item(&self, id: ItemId) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).map_err(|e| match e {
            StoreError::NotFound(_) => ServiceError::NotFound,
            other => {
                tracing::error!(error = %other, item_id = %id, "failed to delete item");
                ServiceError::backend("failed to delete item")
            }
        })
    }

    /// Bulk-patch records. Entries without an id or with validator-failing
    /// patches are skipped with a warning; the survivors go to the store as
    /// one all-or-nothing batch.
    pub fn bulk_update(&self, entries: Vec<BulkEntry>) -> Result<BulkOutcome, ServiceError> {
        let mut batch = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for entry in entries {
            let Some(id) = entry.id else {
                tracing::warn!("skipping bulk entry without id");
                skipped += 1;
                continue;
            };
            let issues = validate_patch(&entry.patch);
            if !issues.is_empty() {
                let detail: Vec<String> = issues.iter().map(ToString::to_string).collect();
                tracing::warn!(item_id = %id, issues = ?detail, "skipping invalid bulk entry");
                skipped += 1;
                continue;
            }
            batch.push((id, entry.patch));
        }

        let applied = if batch.is_empty() {
            0
        } else {
            self.store.batch_update(batch, Utc::now()).map_err(|e| {
                tracing::error!(error = %e, "bulk update failed");
                ServiceError::backend("failed to perform bulk update")
            })?
        };

        Ok(BulkOutcome { applied, skipped })
    }

    /// Summary statistics over the full record set.
    pub fn summary(&self) -> Result<Summary, ServiceError> {
        let records = self.store.fetch_all().map_err(|e| {
            tracing::error!(error = %e, "failed to fetch records for summary");
            ServiceError::backend("failed to generate inventory summary")
        })?;
        Ok(stockroom_inventory::summary::summarize(&records))
    }

    /// Records satisfying `criteria`, via the store's pushdown path.
    pub fn filter_items(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<InventoryRecord>, ServiceError> {
        self.store.fetch_where(criteria).map_err(|e| {
            tracing::error!(error = %e, "failed to filter items");
            ServiceError::backend("failed to filter items")
        })
    }

    /// One page of records, newest first.
    pub fn list_items(
        &self,
        page_size: Option<usize>,
        after: Option<ItemId>,
    ) -> Result<RecordPage, ServiceError> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        self.store.fetch_page(page_size, after).map_err(|e| {
            tracing::error!(error = %e, "failed to fetch items");
            ServiceError::backend("failed to fetch items")
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn draft(name: &str, category: &str, quantity: i64, price_cents: i64) -> RecordDraft {
        RecordDraft {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price_cents,
            description: None,
        }
    }

    /// Store stub whose every operation fails as unavailable.
    struct DownStore;

    impl RecordStore for DownStore {
        fn insert(
            &self,
            _draft: RecordDraft,
            _now: DateTime<Utc>,
        ) -> Result<InventoryRecord, StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }

        fn update_by_id(
            &self,
            _id: ItemId,
            _draft: RecordDraft,
            _now: DateTime<Utc>,
        ) -> Result<InventoryRecord, StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }

        fn delete_by_id(&self, _id: ItemId) -> Result<(), StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }

        fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }

        fn fetch_page(
            &self,
            _page_size: usize,
            _after: Option<ItemId>,
        ) -> Result<RecordPage, StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }

        fn batch_update(
            &self,
            _entries: Vec<(ItemId, RecordPatch)>,
            _now: DateTime<Utc>,
        ) -> Result<usize, StoreError> {
            Err(StoreError::unavailable("connection refused (internal)"))
        }
    }

    #[test]
    fn add_item_persists_and_stamps() {
        let service = InventoryService::in_memory();
        let record = service.add_item(draft("Chair", "Furniture", 4, 4999)).unwrap();

        assert!(record.active);
        assert_eq!(record.created_at, record.last_updated);

        let all = service.filter_items(&FilterCriteria::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, record.id);
    }

    #[test]
    fn invalid_draft_never_reaches_the_store() {
        let service = InventoryService::in_memory();
        let err = service
            .add_item(draft("", "", -1, -2))
            .unwrap_err();

        match err {
            ServiceError::Invalid(issues) => assert_eq!(issues.len(), 4),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(service.summary().unwrap().total_items == 0);
    }

    #[test]
    fn update_item_missing_id_is_not_found() {
        let service = InventoryService::in_memory();
        let err = service
            .update_item(ItemId::new(), draft("Chair", "Furniture", 1, 100))
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_then_delete_again_is_not_found() {
        let service = InventoryService::in_memory();
        let record = service.add_item(draft("Chair", "Furniture", 1, 100)).unwrap();

        service.delete_item(record.id).unwrap();
        assert_eq!(service.delete_item(record.id), Err(ServiceError::NotFound));
    }

    #[test]
    fn bulk_update_skips_invalid_and_unidentified_entries() {
        let service = InventoryService::in_memory();
        let a = service.add_item(draft("A", "misc", 1, 100)).unwrap();
        let b = service.add_item(draft("B", "misc", 2, 200)).unwrap();

        let outcome = service
            .bulk_update(vec![
                BulkEntry {
                    id: Some(a.id),
                    patch: RecordPatch {
                        quantity: Some(50),
                        ..RecordPatch::default()
                    },
                },
                // No id: skipped.
                BulkEntry {
                    id: None,
                    patch: RecordPatch::default(),
                },
                // Negative quantity: skipped.
                BulkEntry {
                    id: Some(b.id),
                    patch: RecordPatch {
                        quantity: Some(-3),
                        ..RecordPatch::default()
                    },
                },
            ])
            .unwrap();

        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.skipped, 2);

        let summary = service.summary().unwrap();
        assert_eq!(summary.highest_stock_item.unwrap().quantity, 50);
    }

    #[test]
    fn bulk_update_counts_a_twice_patched_record_once() {
        let service = InventoryService::in_memory();
        let a = service.add_item(draft("A", "misc", 1, 100)).unwrap();

        let outcome = service
            .bulk_update(vec![
                BulkEntry {
                    id: Some(a.id),
                    patch: RecordPatch {
                        quantity: Some(10),
                        ..RecordPatch::default()
                    },
                },
                BulkEntry {
                    id: Some(a.id),
                    patch: RecordPatch {
                        quantity: Some(20),
                        ..RecordPatch::default()
                    },
                },
                BulkEntry {
                    id: None,
                    patch: RecordPatch::default(),
                },
            ])
            .unwrap();

        // Two entries touched one record; only the id-less entry was skipped.
        assert_eq!(outcome.applied, 1);
        assert_eq!(outcome.skipped, 1);

        let summary = service.summary().unwrap();
        assert_eq!(summary.highest_stock_item.unwrap().quantity, 20);
    }

    #[test]
    fn bulk_update_with_nothing_applicable_touches_no_store() {
        let service = InventoryService::new(Arc::new(DownStore));
        let outcome = service
            .bulk_update(vec![BulkEntry {
                id: None,
                patch: RecordPatch::default(),
            }])
            .unwrap();
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn store_faults_surface_generic_messages_only() {
        let service = InventoryService::new(Arc::new(DownStore));

        let err = service.add_item(draft("Chair", "Furniture", 1, 100)).unwrap_err();
        match err {
            ServiceError::Backend { message } => {
                assert_eq!(message, "failed to add item");
                assert!(!message.contains("internal"));
            }
            other => panic!("expected Backend, got {other:?}"),
        }

        let err = service.summary().unwrap_err();
        assert!(matches!(err, ServiceError::Backend { .. }));
    }

    #[test]
    fn filter_items_uses_the_criteria() {
        let service = InventoryService::in_memory();
        service.add_item(draft("Espresso", "Food", 8, 1250)).unwrap();
        service.add_item(draft("Hammer", "Tools", 15, 2200)).unwrap();

        let out = service
            .filter_items(&FilterCriteria {
                category: Some("FOOD".to_string()),
                ..FilterCriteria::default()
            })
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Espresso");
    }

    #[test]
    fn list_items_pages_newest_first_with_default_size() {
        let service = InventoryService::in_memory();
        for i in 0..12 {
            service.add_item(draft(&format!("item-{i}"), "misc", i, 100)).unwrap();
        }

        let first = service.list_items(None, None).unwrap();
        assert_eq!(first.items.len(), DEFAULT_PAGE_SIZE);
        let cursor = first.next_cursor.expect("more pages expected");

        let second = service.list_items(None, Some(cursor)).unwrap();
        assert_eq!(second.items.len(), 2);
        assert!(second.next_cursor.is_none());
    }
}
