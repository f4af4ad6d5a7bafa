//! Inventory record model.
//!
//! This crate contains the item/movement record types and the per-item
//! stock-status rule, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage). Records are supplied by an external
//! record store; analytics over them live in `stockpulse-analytics`.

pub mod item;
pub mod movement;
pub mod search;

pub use item::{Item, StockStatus};
pub use movement::{Movement, MovementType};
pub use search::{filter_items, matches_query, sku_equals};
