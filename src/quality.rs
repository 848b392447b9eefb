//! Quality scoring module.
//!
//! Turns resolved stat ranges into percentages of the best roll an item of
//! its slot can have, after projecting every stat onto the reference power
//! level with the quality curve.

use crate::curve::QualityCurve;
use crate::item::Item;
use crate::slot::EquipmentSlot;
use crate::stat_kind::StatKind;

/// Highest single-stat base value seen per slot.
const BASE_STAT_CEILINGS: &[(EquipmentSlot, i32)] = &[
    // the manifest reports 48, but rolls top out at 46
    (EquipmentSlot::Helmet, 46),
    // the manifest reports 43, but rolls top out at 41
    (EquipmentSlot::Gauntlets, 41),
    (EquipmentSlot::Chest, 61),
    (EquipmentSlot::Legs, 56),
    (EquipmentSlot::ClassItem, 25),
    (EquipmentSlot::Ghost, 25),
    (EquipmentSlot::Artifact, 38),
];

/// Get the base stat ceiling of a slot.
///
/// Slots without a ceiling cannot be scored.
pub fn base_stat_ceiling(slot: EquipmentSlot) -> Option<i32> {
    BASE_STAT_CEILINGS
        .iter()
        .find(|(ceiling_slot, _)| *ceiling_slot == slot)
        .map(|(_, ceiling)| *ceiling)
}

/// `floor(100 * value / max)`, clamped to `0..=100`.
fn percentage(value: i64, max: i64) -> u32 {
    let pct = value.saturating_mul(100).div_euclid(max);
    pct.clamp(0, 100) as u32
}

/// What happened when an item was scored.
///
/// None of these are errors: an unscored item keeps `quality == 0` and
/// every range's quality unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// The item was scored; carries the aggregate quality.
    Scored { quality: u32 },
    /// The item's slot has no base stat ceiling.
    NoCeiling,
    /// The item's power level is outside the quality curve.
    OutsideCurve,
}

/// Scores items against their slot's base stat ceiling.
///
/// # Examples
///
/// ```rust
/// use gearstat::{Item, QualityScorer, ScoreOutcome, StatKind, StatRange};
///
/// let mut item = Item::new("1", 1, 3448274439, 335);
/// item.set_range(StatKind::Intellect, Some(StatRange::new(23, 39)));
///
/// let outcome = QualityScorer::default().score_item(&mut item);
///
/// assert_eq!(outcome, ScoreOutcome::Scored { quality: 25 });
/// assert_eq!(item.intellect.unwrap().quality, Some(50));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    curve: QualityCurve,
}

impl QualityScorer {
    /// Create a scorer with a custom curve.
    pub fn new(curve: QualityCurve) -> Self {
        Self { curve }
    }

    /// Get the curve in use.
    pub fn curve(&self) -> &QualityCurve {
        &self.curve
    }

    /// Score every stat range of an item and the item as a whole.
    ///
    /// Each stat is scored from its range minimum. A stat normalized above
    /// the ceiling is scored against twice the ceiling, and the aggregate
    /// is the normalized sum against twice the ceiling.
    pub fn score_item(&self, item: &mut Item) -> ScoreOutcome {
        item.quality = 0;
        for stat in StatKind::ALL {
            if let Some(range) = item.range_mut(stat) {
                range.quality = None;
            }
        }

        let Some(ceiling) = base_stat_ceiling(item.slot) else {
            tracing::debug!(
                item_id = %item.item_id,
                slot = ?item.slot,
                "no base stat ceiling; quality skipped"
            );
            return ScoreOutcome::NoCeiling;
        };

        let power = item.primary_stat;
        let mut normalized = Vec::with_capacity(StatKind::ALL.len());
        for (stat, range) in item.ranges() {
            match self.curve.normalize(range.min, power) {
                Some(value) => normalized.push((stat, value)),
                None => {
                    tracing::debug!(
                        item_id = %item.item_id,
                        power,
                        "power level outside quality curve; quality skipped"
                    );
                    return ScoreOutcome::OutsideCurve;
                }
            }
        }
        if normalized.is_empty() && self.curve.normalize(0, power).is_none() {
            return ScoreOutcome::OutsideCurve;
        }

        let ceiling = i64::from(ceiling);
        let mut sum: i64 = 0;
        for (stat, value) in normalized {
            let value = i64::from(value);
            let effective_max = if value <= ceiling { ceiling } else { ceiling * 2 };
            if let Some(range) = item.range_mut(stat) {
                range.quality = Some(percentage(value, effective_max));
            }
            sum += value;
        }

        item.quality = if sum == 0 {
            0
        } else {
            percentage(sum, ceiling * 2)
        };

        ScoreOutcome::Scored {
            quality: item.quality,
        }
    }
}
