//! Assembled item model.

use crate::equippable::EquippableItem;
use crate::range::StatRange;
use crate::slot::EquipmentSlot;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};

/// An equipped item with its stat ranges and quality.
///
/// Created per inventory response and replaced wholesale on refresh.
///
/// # Examples
///
/// ```rust
/// use gearstat::{EquipmentSlot, Item, StatKind, StatRange};
///
/// let mut item = Item::new("42", 100, 3448274439, 320);
/// assert_eq!(item.slot, EquipmentSlot::Helmet);
///
/// item.set_range(StatKind::Strength, Some(StatRange::new(10, 26)));
/// assert_eq!(item.range(StatKind::Strength).map(|r| r.max), Some(26));
/// assert!(item.range(StatKind::Intellect).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub item_hash: u32,
    pub bucket_hash: u32,
    pub slot: EquipmentSlot,
    /// Power level; exact.
    pub primary_stat: u32,
    pub discipline: Option<StatRange>,
    pub intellect: Option<StatRange>,
    pub strength: Option<StatRange>,
    /// Aggregate quality percentage, `0` when not computable.
    pub quality: u32,
}

impl Item {
    /// Create an item shell with no stat ranges.
    pub fn new(
        item_id: impl Into<String>,
        item_hash: u32,
        bucket_hash: u32,
        primary_stat: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_hash,
            bucket_hash,
            slot: EquipmentSlot::from_bucket_hash(bucket_hash),
            primary_stat,
            discipline: None,
            intellect: None,
            strength: None,
            quality: 0,
        }
    }

    /// Create an item shell from a raw record in a bucket.
    pub fn from_record(bucket_hash: u32, record: &EquippableItem) -> Self {
        Self::new(
            record.item_id.clone(),
            record.item_hash,
            bucket_hash,
            record.power_level(),
        )
    }

    /// Get the range of a stat.
    pub fn range(&self, stat: StatKind) -> Option<&StatRange> {
        match stat {
            StatKind::Discipline => self.discipline.as_ref(),
            StatKind::Intellect => self.intellect.as_ref(),
            StatKind::Strength => self.strength.as_ref(),
        }
    }

    /// Get the range of a stat mutably.
    pub fn range_mut(&mut self, stat: StatKind) -> Option<&mut StatRange> {
        match stat {
            StatKind::Discipline => self.discipline.as_mut(),
            StatKind::Intellect => self.intellect.as_mut(),
            StatKind::Strength => self.strength.as_mut(),
        }
    }

    /// Replace the range of a stat.
    pub fn set_range(&mut self, stat: StatKind, range: Option<StatRange>) {
        match stat {
            StatKind::Discipline => self.discipline = range,
            StatKind::Intellect => self.intellect = range,
            StatKind::Strength => self.strength = range,
        }
    }

    /// Iterate over stats that have a range.
    pub fn ranges(&self) -> impl Iterator<Item = (StatKind, &StatRange)> {
        StatKind::ALL
            .into_iter()
            .filter_map(move |stat| self.range(stat).map(|range| (stat, range)))
    }

    /// Whether any stat has a range.
    pub fn has_ranges(&self) -> bool {
        self.ranges().next().is_some()
    }
}
