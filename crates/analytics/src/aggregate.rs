//! Aggregate counts, totals and rankings.
//!
//! Single pass plus one stable sort per ranking; all containers are ordered
//! (`BTreeMap`, sorted `Vec`) so identical inputs yield identical output.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockpulse_core::{ItemId, ValueObject};
use stockpulse_inventory::{Item, Movement, StockStatus};

use crate::valuation::ValuedItem;

/// Default length of the top-items-by-value ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// How many movements the recent-movements view keeps, newest first.
pub const RECENT_MOVEMENTS_LIMIT: usize = 20;

/// Breakdown key for items with a blank category. Such items are grouped,
/// never dropped.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One row of the top-value ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopItem {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total_value: Decimal,
}

impl ValueObject for TopItem {}

/// Sum of per-item values. Full precision, no rounding.
pub fn total_inventory_value(valued: &[ValuedItem<'_>]) -> Decimal {
    valued.iter().map(|v| v.total_value).sum()
}

/// Count of alert-eligible items (low stock or out of stock).
pub fn low_stock_count(valued: &[ValuedItem<'_>]) -> usize {
    valued
        .iter()
        .filter(|v| matches!(v.status, StockStatus::LowStock | StockStatus::OutOfStock))
        .count()
}

pub fn damaged_count(valued: &[ValuedItem<'_>]) -> usize {
    valued
        .iter()
        .filter(|v| v.status == StockStatus::Damaged)
        .count()
}

/// Item count per category. Covers every record, including ones excluded
/// from value-derived outputs; blank categories group under
/// [`UNCATEGORIZED`].
pub fn category_breakdown(items: &[Item]) -> BTreeMap<String, usize> {
    let mut breakdown: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        let category = item.category.trim();
        let key = if category.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            category.to_string()
        };
        *breakdown.entry(key).or_default() += 1;
    }
    breakdown
}

/// Item count per derived stock status.
pub fn status_breakdown(valued: &[ValuedItem<'_>]) -> BTreeMap<StockStatus, usize> {
    let mut breakdown: BTreeMap<StockStatus, usize> = BTreeMap::new();
    for v in valued {
        *breakdown.entry(v.status).or_default() += 1;
    }
    breakdown
}

/// Rank items by descending value, ties broken by ascending name (then id),
/// truncated to `top_n`.
pub fn top_items_by_value(valued: &[ValuedItem<'_>], top_n: usize) -> Vec<TopItem> {
    let mut ranked: Vec<&ValuedItem<'_>> = valued.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.item.name.cmp(&b.item.name))
            .then_with(|| a.item.id.cmp(&b.item.id))
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|v| TopItem {
            item_id: v.item.id,
            name: v.item.name.clone(),
            quantity: v.item.quantity,
            unit_price: v.item.unit_price,
            total_value: v.total_value,
        })
        .collect()
}

/// The newest movements from the append-only log, newest first, truncated
/// to [`RECENT_MOVEMENTS_LIMIT`].
pub fn recent_movements(movements: &[Movement]) -> Vec<Movement> {
    let mut recent: Vec<Movement> = movements.to_vec();
    recent.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    recent.truncate(RECENT_MOVEMENTS_LIMIT);
    recent
}
