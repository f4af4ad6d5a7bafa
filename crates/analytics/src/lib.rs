//! Inventory analytics core.
//!
//! Derives one immutable [`AnalyticsSnapshot`] from a point-in-time pull of
//! item and movement records: valuation, reorder alerts, category and status
//! breakdowns, top-value rankings and Pareto (ABC) classification.
//!
//! Everything here is a pure function over the collections handed in; the
//! core owns no storage, re-reads nothing mid-computation and holds no state
//! between invocations. Callers recompute snapshots, never mutate them.

pub mod abc;
pub mod aggregate;
pub mod alerts;
pub mod snapshot;
pub mod valuation;

pub use abc::{AbcClass, AbcClassCounts, AbcEntry};
pub use aggregate::{TopItem, DEFAULT_TOP_N, RECENT_MOVEMENTS_LIMIT, UNCATEGORIZED};
pub use alerts::{AlertSeverity, StockAlert};
pub use snapshot::{
    compute_analytics, compute_analytics_with_top_n, summarize_items, AnalyticsSnapshot,
    ItemSummary,
};
pub use valuation::{item_total_value, value_items, RecordDiagnostic, ValuedItem};
