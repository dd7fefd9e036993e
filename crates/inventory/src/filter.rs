//! Filter engine: narrow a record set by an AND-combined criteria set.

use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// Optional, independently-applied constraints on a record set.
///
/// Every supplied field must hold for a record to pass (logical AND); an
/// absent field imposes nothing, so the default value is the identity
/// filter. Deserializes from query strings, so the HTTP layer can bind it
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the record name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Case-insensitive exact match against the record category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive lower bound on quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<i64>,
    /// Inclusive upper bound on quantity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<i64>,
    /// Inclusive lower bound on price, in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price_cents: Option<i64>,
    /// Inclusive upper bound on price, in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price_cents: Option<i64>,
}

impl FilterCriteria {
    /// True when no constraint is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.min_quantity.is_none()
            && self.max_quantity.is_none()
            && self.min_price_cents.is_none()
            && self.max_price_cents.is_none()
    }

    /// Evaluate every supplied constraint against one record.
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        if let Some(name) = &self.name {
            if !record.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !record.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_quantity {
            if record.quantity < min {
                return false;
            }
        }
        if let Some(max) = self.max_quantity {
            if record.quantity > max {
                return false;
            }
        }
        if let Some(min) = self.min_price_cents {
            if record.price_cents < min {
                return false;
            }
        }
        if let Some(max) = self.max_price_cents {
            if record.price_cents > max {
                return false;
            }
        }
        true
    }
}

/// Keep the records satisfying `criteria`, preserving input order.
pub fn apply(records: &[InventoryRecord], criteria: &FilterCriteria) -> Vec<InventoryRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}
