//! ABC (Pareto) classification.
//!
//! Items ranked by descending value contribution; the leading ~70% of total
//! value is class A, the next band up to 90% class B, the long tail class C.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockpulse_core::{ItemId, ValueObject};

use crate::valuation::ValuedItem;

/// Pareto class of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

/// Classification result for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbcEntry {
    /// 1-based position in the value-descending order.
    pub rank: usize,
    /// Share of total inventory value accumulated up to and including this
    /// item, in percent. Full precision.
    pub cumulative_percent: Decimal,
    pub class: AbcClass,
}

impl ValueObject for AbcEntry {}

/// Items per class, for dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbcClassCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl ValueObject for AbcClassCounts {}

/// Class boundary evaluated against the cumulative percent after including
/// the current item. Inclusive on the upper end: exactly 70.0 is still A,
/// exactly 90.0 still B.
fn class_for(cumulative_percent: Decimal) -> AbcClass {
    if cumulative_percent <= Decimal::from(70) {
        AbcClass::A
    } else if cumulative_percent <= Decimal::from(90) {
        AbcClass::B
    } else {
        AbcClass::C
    }
}

/// Classify every item by its cumulative value contribution.
///
/// The order is strict and deterministic: descending value, ties broken by
/// ascending name, then id. A zero total value defines every cumulative
/// percent as 0 and drops every item to class C instead of dividing by
/// zero.
pub fn classify_abc(valued: &[ValuedItem<'_>]) -> BTreeMap<ItemId, AbcEntry> {
    let mut ranked: Vec<&ValuedItem<'_>> = valued.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_value
            .cmp(&a.total_value)
            .then_with(|| a.item.name.cmp(&b.item.name))
            .then_with(|| a.item.id.cmp(&b.item.id))
    });

    let total: Decimal = ranked.iter().map(|v| v.total_value).sum();

    let mut classification = BTreeMap::new();
    if total.is_zero() {
        for (index, v) in ranked.iter().enumerate() {
            classification.insert(
                v.item.id,
                AbcEntry {
                    rank: index + 1,
                    cumulative_percent: Decimal::ZERO,
                    class: AbcClass::C,
                },
            );
        }
        return classification;
    }

    let mut running = Decimal::ZERO;
    for (index, v) in ranked.iter().enumerate() {
        running += v.total_value;
        let cumulative_percent = running / total * Decimal::ONE_HUNDRED;
        classification.insert(
            v.item.id,
            AbcEntry {
                rank: index + 1,
                cumulative_percent,
                class: class_for(cumulative_percent),
            },
        );
    }
    classification
}

/// Count items per class.
pub fn class_counts(classification: &BTreeMap<ItemId, AbcEntry>) -> AbcClassCounts {
    let mut counts = AbcClassCounts::default();
    for entry in classification.values() {
        match entry.class {
            AbcClass::A => counts.a += 1,
            AbcClass::B => counts.b += 1,
            AbcClass::C => counts.c += 1,
        }
    }
    counts
}
