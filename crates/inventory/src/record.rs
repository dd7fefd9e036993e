use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// A stored inventory record.
///
/// The store is the single source of truth for these; the aggregator and
/// filter engine only read them. Monetary amounts are integer minor units
/// (cents), so value sums are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    /// Set true at creation. Reserved soft-delete flag; nothing flips it yet.
    pub active: bool,
}

impl InventoryRecord {
    /// Current stock value of this record, in cents.
    ///
    /// Saturates at `i64::MAX`: the validator bounds quantity and price
    /// below at zero but not above, so the product must not be allowed to
    /// overflow.
    pub fn value_cents(&self) -> i64 {
        self.quantity.saturating_mul(self.price_cents)
    }
}

/// Caller-supplied portion of a record, used for create and for the
/// full replace-by-id update path. Must pass [`crate::validate`] before it
/// reaches a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordDraft {
    /// Materialize a full record from this draft. Both timestamps start at
    /// `now`; `active` starts true.
    pub fn into_record(self, id: ItemId, now: DateTime<Utc>) -> InventoryRecord {
        InventoryRecord {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price_cents: self.price_cents,
            description: self.description,
            created_at: now,
            last_updated: now,
            active: true,
        }
    }

    /// Replace the draft fields of `record`, refreshing `last_updated` and
    /// preserving `id`, `created_at`, and `active`.
    pub fn replace_into(self, record: &mut InventoryRecord, now: DateTime<Utc>) {
        record.name = self.name;
        record.category = self.category;
        record.quantity = self.quantity;
        record.price_cents = self.price_cents;
        record.description = self.description;
        record.last_updated = now;
    }
}

/// Partial update used by the bulk path: absent fields are left untouched.
///
/// A patch cannot clear `description`; `None` means "unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RecordPatch {
    /// Apply the present fields over `record` and refresh `last_updated`.
    pub fn merge_into(&self, record: &mut InventoryRecord, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(price_cents) = self.price_cents {
            record.price_cents = price_cents;
        }
        if let Some(description) = &self.description {
            record.description = Some(description.clone());
        }
        record.last_updated = now;
    }
}
