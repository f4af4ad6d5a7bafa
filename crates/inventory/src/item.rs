use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult, Entity, ItemId};

/// Derived stock status of an item.
///
/// Serialized with the display labels the dashboard contract already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Damaged")]
    Damaged,
}

impl StockStatus {
    /// Classify an item, in precedence order: damaged flag first, then
    /// empty stock, then the reorder threshold.
    ///
    /// Pure function of `(damaged, quantity, reorder_point)`.
    pub fn classify(item: &Item) -> Self {
        if item.damaged {
            StockStatus::Damaged
        } else if item.quantity == 0 {
            StockStatus::OutOfStock
        } else if item.quantity <= item.reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Inventory item record, as supplied by the external record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Stock-keeping unit. Unique per store; compared case-insensitively
    /// for search.
    pub sku: String,
    /// Free-text category label; empty means uncategorized.
    pub category: String,
    pub quantity: i64,
    /// Threshold at or below which restocking is recommended.
    pub reorder_point: i64,
    pub unit_price: Decimal,
    pub location: String,
    pub supplier: String,
    /// Explicit damage flag owned by the record store. Not derived from
    /// the movement log; see `Movement` for the open question there.
    pub damaged: bool,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        reorder_point: i64,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
            quantity,
            reorder_point,
            unit_price,
            location: String::new(),
            supplier: String::new(),
            damaged: false,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = supplier.into();
        self
    }

    pub fn with_damaged(mut self, damaged: bool) -> Self {
        self.damaged = damaged;
        self
    }

    /// Derived stock status (never stored).
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self)
    }

    /// Upstream validation: the record store should never hand the core a
    /// record that fails this.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::invalid_value(format!(
                "quantity cannot be negative: {}",
                self.quantity
            )));
        }
        if self.reorder_point < 0 {
            return Err(DomainError::invalid_value(format!(
                "reorder point cannot be negative: {}",
                self.reorder_point
            )));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::invalid_value(format!(
                "unit price cannot be negative: {}",
                self.unit_price
            )));
        }
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, reorder_point: i64) -> Item {
        Item::new("Widget", "SKU-001", "Hardware", quantity, reorder_point, Decimal::from(10))
    }

    #[test]
    fn in_stock_above_reorder_point() {
        assert_eq!(item(100, 20).status(), StockStatus::InStock);
    }

    #[test]
    fn low_stock_at_or_below_reorder_point() {
        assert_eq!(item(20, 20).status(), StockStatus::LowStock);
        assert_eq!(item(5, 20).status(), StockStatus::LowStock);
    }

    #[test]
    fn out_of_stock_at_zero() {
        assert_eq!(item(0, 20).status(), StockStatus::OutOfStock);
    }

    #[test]
    fn damaged_flag_wins_over_quantity() {
        // Damaged takes precedence even at zero quantity.
        assert_eq!(item(0, 20).with_damaged(true).status(), StockStatus::Damaged);
        assert_eq!(item(100, 20).with_damaged(true).status(), StockStatus::Damaged);
    }

    #[test]
    fn zero_reorder_point_never_flags_low_stock() {
        assert_eq!(item(1, 0).status(), StockStatus::InStock);
        assert_eq!(item(0, 0).status(), StockStatus::OutOfStock);
    }

    #[test]
    fn validate_rejects_blank_name_and_sku() {
        let mut it = item(10, 2);
        it.name = "   ".to_string();
        assert!(matches!(it.validate(), Err(DomainError::Validation(_))));

        let mut it = item(10, 2);
        it.sku = String::new();
        assert!(matches!(it.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_negative_numerics() {
        let mut it = item(-1, 2);
        assert!(matches!(it.validate(), Err(DomainError::InvalidValue(_))));

        it = item(10, -2);
        assert!(matches!(it.validate(), Err(DomainError::InvalidValue(_))));

        it = item(10, 2);
        it.unit_price = Decimal::from(-5);
        assert!(matches!(it.validate(), Err(DomainError::InvalidValue(_))));
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"Out of Stock\"");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification is total and consistent with the
            /// precedence rule for every non-negative input.
            #[test]
            fn classification_matches_precedence(
                quantity in 0i64..10_000,
                reorder_point in 0i64..10_000,
                damaged: bool,
            ) {
                let it = Item::new("P", "S", "C", quantity, reorder_point, Decimal::ONE)
                    .with_damaged(damaged);
                let status = it.status();

                if damaged {
                    prop_assert_eq!(status, StockStatus::Damaged);
                } else if quantity == 0 {
                    prop_assert_eq!(status, StockStatus::OutOfStock);
                } else if quantity <= reorder_point {
                    prop_assert_eq!(status, StockStatus::LowStock);
                } else {
                    prop_assert_eq!(status, StockStatus::InStock);
                }
            }

            /// Property: valid records always pass validation.
            #[test]
            fn non_negative_records_validate(
                quantity in 0i64..10_000,
                reorder_point in 0i64..10_000,
                price in 0i64..1_000_000,
            ) {
                let it = Item::new("P", "S", "C", quantity, reorder_point, Decimal::from(price));
                prop_assert!(it.validate().is_ok());
            }
        }
    }
}
