//! Per-item valuation.
//!
//! Values are computed once per snapshot and shared by the aggregator and
//! the ABC classifier; nothing downstream re-multiplies quantity and price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult, ItemId, ValueObject};
use stockpulse_inventory::{Item, StockStatus};

/// Full-precision monetary value of one item: `quantity × unit_price`.
///
/// Fails on negative quantity or price rather than clamping; upstream
/// validation should prevent this, but the core never trusts that.
pub fn item_total_value(item: &Item) -> DomainResult<Decimal> {
    if item.quantity < 0 {
        return Err(DomainError::invalid_value(format!(
            "negative quantity for {}: {}",
            item.sku, item.quantity
        )));
    }
    if item.unit_price < Decimal::ZERO {
        return Err(DomainError::invalid_value(format!(
            "negative unit price for {}: {}",
            item.sku, item.unit_price
        )));
    }
    Ok(Decimal::from(item.quantity) * item.unit_price)
}

/// An item joined with its computed status and value for this snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedItem<'a> {
    pub item: &'a Item,
    pub status: StockStatus,
    pub total_value: Decimal,
}

/// A record excluded from derived outputs, retained for the diagnostics
/// list instead of aborting the whole computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDiagnostic {
    pub item_id: ItemId,
    pub item_name: String,
    pub error: DomainError,
}

impl ValueObject for RecordDiagnostic {}

/// Run valuation and status classification once over the pulled records.
///
/// Malformed records land in the diagnostics side channel; partial results
/// beat no results for a dashboard.
pub fn value_items(items: &[Item]) -> (Vec<ValuedItem<'_>>, Vec<RecordDiagnostic>) {
    let mut valued = Vec::with_capacity(items.len());
    let mut diagnostics = Vec::new();

    for item in items {
        match item_total_value(item) {
            Ok(total_value) => valued.push(ValuedItem {
                item,
                status: item.status(),
                total_value,
            }),
            Err(error) => {
                tracing::warn!(item_id = %item.id, %error, "record excluded from analytics");
                diagnostics.push(RecordDiagnostic {
                    item_id: item.id,
                    item_name: item.name.clone(),
                    error,
                });
            }
        }
    }

    (valued, diagnostics)
}
