use serde::Deserialize;

use stockroom_core::ItemId;
use stockroom_inventory::{RecordDraft, RecordPatch};

use crate::app::services::BulkEntry;

// -------------------------
// Request DTOs
// -------------------------

/// Payload for create and full-replace item requests.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price_cents: i64,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemRequest {
    pub fn into_draft(self) -> RecordDraft {
        RecordDraft {
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price_cents: self.price_cents,
            description: self.description,
        }
    }
}

/// One entry of a bulk update request.
#[derive(Debug, Deserialize)]
pub struct BulkItemRequest {
    /// Record id as a string. Missing or unparseable ids mark the entry as
    /// unidentified; the service skips those instead of failing the batch.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub patch: RecordPatch,
}

impl BulkItemRequest {
    pub fn into_entry(self) -> BulkEntry {
        BulkEntry {
            id: self.id.and_then(|s| s.parse::<ItemId>().ok()),
            patch: self.patch,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkUpdateRequest {
    pub items: Vec<BulkItemRequest>,
}

/// Query string for the paginated item listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page_size: Option<usize>,
    /// Cursor: id of the last item of the previous page.
    #[serde(default)]
    pub after: Option<String>,
}
