//! Reorder alerts.
//!
//! Alerts cover the "needs restocking" signal only. Damaged items are a
//! "needs disposal/write-off" signal and are surfaced via the damaged
//! count, never the alert list.

use serde::{Deserialize, Serialize};

use stockpulse_core::{ItemId, ValueObject};
use stockpulse_inventory::StockStatus;

use crate::valuation::ValuedItem;

/// Alert severity. `Critical` sorts before `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
}

/// One reorder alert, ready for dashboard display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlert {
    pub item_id: ItemId,
    pub item_name: String,
    pub current_stock: i64,
    pub reorder_point: i64,
    pub severity: AlertSeverity,
}

impl ValueObject for StockAlert {}

/// Emit alerts for every low-stock or out-of-stock item.
///
/// Ordering is deterministic: critical before warning, then ascending item
/// name (item id as the final tie-break for duplicate names).
pub fn generate_alerts(valued: &[ValuedItem<'_>]) -> Vec<StockAlert> {
    let mut alerts: Vec<StockAlert> = valued
        .iter()
        .filter(|v| matches!(v.status, StockStatus::LowStock | StockStatus::OutOfStock))
        .map(|v| StockAlert {
            item_id: v.item.id,
            item_name: v.item.name.clone(),
            current_stock: v.item.quantity,
            reorder_point: v.item.reorder_point,
            severity: if v.item.quantity == 0 {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            },
        })
        .collect();

    alerts.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.item_name.cmp(&b.item_name))
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockpulse_inventory::Item;

    use crate::valuation::value_items;

    fn alerts_for(items: &[Item]) -> Vec<StockAlert> {
        let (valued, _) = value_items(items);
        generate_alerts(&valued)
    }

    #[test]
    fn alerts_only_for_low_and_out_of_stock() {
        let items = vec![
            Item::new("Plenty", "A", "C", 100, 20, Decimal::ONE),
            Item::new("Low", "B", "C", 5, 20, Decimal::ONE),
            Item::new("Gone", "C", "C", 0, 5, Decimal::ONE),
        ];
        let alerts = alerts_for(&items);
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.item_name != "Plenty"));
    }

    #[test]
    fn critical_sorts_before_warning_then_by_name() {
        let items = vec![
            Item::new("Zeta", "A", "C", 0, 5, Decimal::ONE),
            Item::new("Alpha", "B", "C", 2, 5, Decimal::ONE),
            Item::new("Beta", "C", "C", 0, 5, Decimal::ONE),
        ];
        let alerts = alerts_for(&items);
        let names: Vec<_> = alerts.iter().map(|a| a.item_name.as_str()).collect();
        assert_eq!(names, ["Beta", "Zeta", "Alpha"]);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[1].severity, AlertSeverity::Critical);
        assert_eq!(alerts[2].severity, AlertSeverity::Warning);
    }

    #[test]
    fn damaged_items_never_alert() {
        // Damaged wins the status precedence even at zero quantity, so no
        // restocking alert is raised for it.
        let items = vec![Item::new("Broken", "A", "C", 0, 5, Decimal::ONE).with_damaged(true)];
        assert!(alerts_for(&items).is_empty());
    }

    #[test]
    fn alert_carries_stock_and_threshold() {
        let items = vec![Item::new("Low", "A", "C", 3, 10, Decimal::ONE)];
        let alerts = alerts_for(&items);
        assert_eq!(alerts[0].current_stock, 3);
        assert_eq!(alerts[0].reorder_point, 10);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AlertSeverity::Critical).unwrap(),
            "\"critical\""
        );
    }
}
