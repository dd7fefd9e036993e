//! Aggregation of a record set into summary statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

use crate::record::InventoryRecord;

/// Quantity below which an item is flagged as low stock.
///
/// Fixed policy value, deliberately not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A record flagged by the low-stock rule, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockEntry {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
}

/// Holder of the strictly highest price seen so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHighlight {
    pub id: ItemId,
    pub name: String,
    pub price_cents: i64,
}

/// Holder of the strictly highest quantity seen so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockHighlight {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
}

/// Derived view of a full record set. Never stored; recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_items: usize,
    /// Σ quantity × price, in cents. Integer arithmetic, so the sum is exact
    /// up to `i64::MAX`, where it saturates instead of wrapping.
    pub total_value_cents: i64,
    /// Category label → number of records bearing it. Each record lands in
    /// exactly one bucket, so the counts sum to `total_items`.
    pub categories: BTreeMap<String, usize>,
    pub low_stock_items: Vec<LowStockEntry>,
    pub most_expensive_item: Option<PriceHighlight>,
    pub highest_stock_item: Option<StockHighlight>,
}

/// Compute every summary statistic in one pass over `records`.
///
/// Extremal picks use a strict `>` comparison accumulated left to right, so
/// the first record holding the maximum wins ties. Empty input is a valid
/// state and yields the all-empty summary.
pub fn summarize(records: &[InventoryRecord]) -> Summary {
    let mut summary = Summary {
        total_items: records.len(),
        ..Summary::default()
    };

    for record in records {
        summary.total_value_cents = summary.total_value_cents.saturating_add(record.value_cents());

        *summary.categories.entry(record.category.clone()).or_insert(0) += 1;

        if record.quantity < LOW_STOCK_THRESHOLD {
            summary.low_stock_items.push(LowStockEntry {
                id: record.id,
                name: record.name.clone(),
                category: record.category.clone(),
                quantity: record.quantity,
            });
        }

        let beats_price = summary
            .most_expensive_item
            .as_ref()
            .is_none_or(|held| record.price_cents > held.price_cents);
        if beats_price {
            summary.most_expensive_item = Some(PriceHighlight {
                id: record.id,
                name: record.name.clone(),
                price_cents: record.price_cents,
            });
        }

        let beats_stock = summary
            .highest_stock_item
            .as_ref()
            .is_none_or(|held| record.quantity > held.quantity);
        if beats_stock {
            summary.highest_stock_item = Some(StockHighlight {
                id: record.id,
                name: record.name.clone(),
                quantity: record.quantity,
            });
        }
    }

    summary
}

/// Render a cent amount as a two-decimal currency string, e.g. `"90.00"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
