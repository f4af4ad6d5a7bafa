//! Snapshot assembly.
//!
//! Composes valuation, alerts, aggregation and ABC classification into one
//! immutable [`AnalyticsSnapshot`]. Pure composition: valuation runs once
//! per item and the resulting table is shared by every consumer.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockpulse_core::{ItemId, ValueObject};
use stockpulse_inventory::{Item, Movement, StockStatus};

use crate::abc::{self, AbcClassCounts, AbcEntry};
use crate::aggregate::{self, TopItem, DEFAULT_TOP_N};
use crate::alerts::{self, StockAlert};
use crate::valuation::{self, RecordDiagnostic};

/// One fully-computed analytics result for a point-in-time pull of item and
/// movement records.
///
/// A snapshot is a pure function of its inputs: it has no lifecycle of its
/// own, is never mutated in place, and identical inputs produce identical
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_item_count: usize,
    pub total_inventory_value: Decimal,
    /// Low-stock plus out-of-stock items (alert-eligible).
    pub low_stock_count: usize,
    pub damaged_count: usize,
    pub category_breakdown: BTreeMap<String, usize>,
    pub status_breakdown: BTreeMap<StockStatus, usize>,
    pub top_items_by_value: Vec<TopItem>,
    pub alerts: Vec<StockAlert>,
    pub abc_classification: BTreeMap<ItemId, AbcEntry>,
    pub abc_class_counts: AbcClassCounts,
    pub movement_count: usize,
    pub recent_movements: Vec<Movement>,
    /// Records excluded from value- and status-derived outputs, one entry
    /// per malformed record. Partial results over aborted computations.
    pub diagnostics: Vec<RecordDiagnostic>,
}

impl ValueObject for AnalyticsSnapshot {}

/// Per-item view for list/table display: the record plus its derived
/// status and value, attached once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub item_id: ItemId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub reorder_point: i64,
    pub unit_price: Decimal,
    pub location: String,
    pub supplier: String,
    pub status: StockStatus,
    pub total_value: Decimal,
}

impl ValueObject for ItemSummary {}

/// Attach derived status and value to each item for display. Malformed
/// records are returned separately as diagnostics.
pub fn summarize_items(items: &[Item]) -> (Vec<ItemSummary>, Vec<RecordDiagnostic>) {
    let (valued, diagnostics) = valuation::value_items(items);
    let summaries = valued
        .iter()
        .map(|v| ItemSummary {
            item_id: v.item.id,
            name: v.item.name.clone(),
            sku: v.item.sku.clone(),
            category: v.item.category.clone(),
            quantity: v.item.quantity,
            reorder_point: v.item.reorder_point,
            unit_price: v.item.unit_price,
            location: v.item.location.clone(),
            supplier: v.item.supplier.clone(),
            status: v.status,
            total_value: v.total_value,
        })
        .collect();
    (summaries, diagnostics)
}

/// Compute a full analytics snapshot with the default top-N ranking length.
pub fn compute_analytics(items: &[Item], movements: &[Movement]) -> AnalyticsSnapshot {
    compute_analytics_with_top_n(items, movements, DEFAULT_TOP_N)
}

/// Compute a full analytics snapshot.
///
/// Operates on the collections as handed in (a point-in-time copy pulled by
/// the caller); nothing is re-read mid-computation. Empty input is not an
/// error and yields an all-zero snapshot.
pub fn compute_analytics_with_top_n(
    items: &[Item],
    movements: &[Movement],
    top_n: usize,
) -> AnalyticsSnapshot {
    if items.is_empty() {
        tracing::debug!("no items supplied; snapshot will be all-zero");
    }

    let (valued, diagnostics) = valuation::value_items(items);

    let abc_classification = abc::classify_abc(&valued);
    let abc_class_counts = abc::class_counts(&abc_classification);

    AnalyticsSnapshot {
        total_item_count: items.len(),
        total_inventory_value: aggregate::total_inventory_value(&valued),
        low_stock_count: aggregate::low_stock_count(&valued),
        damaged_count: aggregate::damaged_count(&valued),
        category_breakdown: aggregate::category_breakdown(items),
        status_breakdown: aggregate::status_breakdown(&valued),
        top_items_by_value: aggregate::top_items_by_value(&valued, top_n),
        alerts: alerts::generate_alerts(&valued),
        abc_classification,
        abc_class_counts,
        movement_count: movements.len(),
        recent_movements: aggregate::recent_movements(movements),
        diagnostics,
    }
}
