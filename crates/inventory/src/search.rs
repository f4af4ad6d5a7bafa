//! Search and filter helpers for item lists.
//!
//! Mirrors the list-view filters: a free-text query matched against name,
//! SKU and category, combinable with a status filter. Matching is
//! case-insensitive throughout.

use crate::item::{Item, StockStatus};

/// Case-insensitive SKU equality (SKUs are unique up to case).
pub fn sku_equals(item: &Item, sku: &str) -> bool {
    item.sku.eq_ignore_ascii_case(sku)
}

/// Case-insensitive substring match against name, SKU and category.
/// An empty query matches everything.
pub fn matches_query(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    item.name.to_lowercase().contains(&query)
        || item.sku.to_lowercase().contains(&query)
        || item.category.to_lowercase().contains(&query)
}

/// Filter items by query and/or derived status, preserving input order.
pub fn filter_items<'a>(
    items: &'a [Item],
    query: &str,
    status: Option<StockStatus>,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_query(item, query))
        .filter(|item| status.is_none_or(|wanted| item.status() == wanted))
        .collect()
}
