//! Loadout profiles.
//!
//! An [`Inventory`] holds the item equipped in each slot. Every armour
//! piece contributes its full range to one stat of the player's choosing
//! and its worst case to the others, so a loadout admits several stat
//! totals. [`Inventory::stat_profiles`] enumerates them and keeps one
//! profile per distinct tier outcome.

use crate::item::Item;
use crate::slot::EquipmentSlot;
use crate::stat_kind::StatKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Stat points per tier.
pub const TIER_SIZE: i32 = 60;

/// Highest tier a stat can reach.
pub const MAX_TIER: u32 = 5;

/// A stat total and the tier it reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatTotal {
    pub value: i32,
    pub tier: u32,
}

impl StatTotal {
    fn calculate_tier(&mut self) {
        self.tier = u32::try_from(self.value / TIER_SIZE)
            .unwrap_or(0)
            .min(MAX_TIER);
    }
}

/// What one item contributed to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub item_id: String,
    pub slot: EquipmentSlot,
    pub selected: StatKind,
    pub discipline: Option<i32>,
    pub intellect: Option<i32>,
    pub strength: Option<i32>,
}

/// Stat totals for one choice of selected stat per item.
///
/// # Examples
///
/// ```rust
/// use gearstat::{Item, StatKind, StatProfile, StatRange};
///
/// let mut chest = Item::new("1", 1, 14239492, 335);
/// chest.set_range(StatKind::Discipline, Some(StatRange::new(40, 70)));
/// chest.set_range(StatKind::Strength, Some(StatRange::new(50, 80)));
///
/// let mut profile = StatProfile::new();
/// profile.add(&chest, StatKind::Strength).calculate_tiers();
///
/// assert_eq!(profile.total(StatKind::Strength).value, 80);
/// assert_eq!(profile.total(StatKind::Discipline).value, 40);
/// assert_eq!(profile.tier_count, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatProfile {
    pub discipline: StatTotal,
    pub intellect: StatTotal,
    pub strength: StatTotal,
    pub tier_count: u32,
    pub entries: Vec<ProfileEntry>,
}

impl StatProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total of a stat.
    pub fn total(&self, stat: StatKind) -> &StatTotal {
        match stat {
            StatKind::Discipline => &self.discipline,
            StatKind::Intellect => &self.intellect,
            StatKind::Strength => &self.strength,
        }
    }

    fn total_mut(&mut self, stat: StatKind) -> &mut StatTotal {
        match stat {
            StatKind::Discipline => &mut self.discipline,
            StatKind::Intellect => &mut self.intellect,
            StatKind::Strength => &mut self.strength,
        }
    }

    /// Add an item, taking `selected` at its range maximum and every other
    /// ranged stat at its minimum.
    ///
    /// A selected stat without a range contributes nothing.
    pub fn add(&mut self, item: &Item, selected: StatKind) -> &mut Self {
        let mut entry = ProfileEntry {
            item_id: item.item_id.clone(),
            slot: item.slot,
            selected,
            discipline: None,
            intellect: None,
            strength: None,
        };

        for (stat, range) in item.ranges() {
            let value = if stat == selected { range.max } else { range.min };
            self.total_mut(stat).value += value;
            match stat {
                StatKind::Discipline => entry.discipline = Some(value),
                StatKind::Intellect => entry.intellect = Some(value),
                StatKind::Strength => entry.strength = Some(value),
            }
        }

        self.entries.push(entry);
        self
    }

    /// Recompute every tier and the tier count.
    pub fn calculate_tiers(&mut self) -> &mut Self {
        self.discipline.calculate_tier();
        self.intellect.calculate_tier();
        self.strength.calculate_tier();
        self.tier_count = self.discipline.tier + self.intellect.tier + self.strength.tier;
        self
    }

    /// Whether both profiles reach the same tier in every stat.
    pub fn same_tiers(&self, other: &StatProfile) -> bool {
        self.discipline.tier == other.discipline.tier
            && self.intellect.tier == other.intellect.tier
            && self.strength.tier == other.strength.tier
    }
}

/// The items a character has equipped, one per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    items: BTreeMap<EquipmentSlot, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from assembled items; later items replace
    /// earlier ones in the same slot.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::new();
        for item in items {
            inventory.set_item(item);
        }
        inventory
    }

    /// Place an item in its slot.
    ///
    /// Returns `false`, dropping the item, when its slot is unrecognised.
    pub fn set_item(&mut self, item: Item) -> bool {
        if item.slot == EquipmentSlot::Unknown {
            tracing::debug!(
                item_id = %item.item_id,
                bucket_hash = item.bucket_hash,
                "item not placed"
            );
            return false;
        }
        self.items.insert(item.slot, item);
        true
    }

    /// Get the item in a slot.
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.items.get(&slot)
    }

    /// Iterate over equipped items in display order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        EquipmentSlot::EQUIPPABLE
            .into_iter()
            .filter_map(move |slot| self.items.get(&slot))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enumerate the stat profiles the armour in this inventory admits.
    ///
    /// Every armour item with at least one range picks one of its ranged
    /// stats as the selected stat. Profiles reaching the same tiers as an
    /// earlier one are dropped; the rest are ordered by tier count, highest
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gearstat::{Inventory, Item, StatKind, StatRange};
    ///
    /// let mut helmet = Item::new("h", 1, 3448274439, 335);
    /// helmet.set_range(StatKind::Discipline, Some(StatRange::new(30, 60)));
    /// helmet.set_range(StatKind::Intellect, Some(StatRange::new(30, 60)));
    ///
    /// let inventory = Inventory::from_items([helmet]);
    /// let profiles = inventory.stat_profiles();
    ///
    /// // Either choice reaches one tier, in different stats
    /// assert_eq!(profiles.len(), 2);
    /// assert_eq!(profiles[0].tier_count, 1);
    /// ```
    pub fn stat_profiles(&self) -> Vec<StatProfile> {
        let armor: Vec<&Item> = self
            .items()
            .filter(|item| item.slot.is_armor() && item.has_ranges())
            .collect();

        let mut choices: Vec<Vec<(&Item, StatKind)>> = vec![Vec::new()];
        for &item in &armor {
            choices = choices
                .into_iter()
                .flat_map(move |picked| {
                    item.ranges().map(move |(stat, _)| {
                        let mut next = picked.clone();
                        next.push((item, stat));
                        next
                    })
                })
                .collect();
        }

        let mut profiles: Vec<StatProfile> = Vec::new();
        for picked in choices {
            let mut profile = StatProfile::new();
            for (item, stat) in picked {
                profile.add(item, stat);
            }
            profile.calculate_tiers();

            if !profiles.iter().any(|existing| existing.same_tiers(&profile)) {
                profiles.push(profile);
            }
        }

        profiles.sort_by(|a, b| b.tier_count.cmp(&a.tier_count));
        tracing::debug!(items = armor.len(), profiles = profiles.len(), "stat profiles");
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::StatRange;

    fn armor(bucket_hash: u32, ranges: &[(StatKind, i32, i32)]) -> Item {
        let mut item = Item::new(bucket_hash.to_string(), 1, bucket_hash, 335);
        for &(stat, min, max) in ranges {
            item.set_range(stat, Some(StatRange::new(min, max)));
        }
        item
    }

    #[test]
    fn test_tier_calculation() {
        let mut total = StatTotal {
            value: 59,
            tier: 0,
        };
        total.calculate_tier();
        assert_eq!(total.tier, 0);

        total.value = 120;
        total.calculate_tier();
        assert_eq!(total.tier, 2);

        total.value = 400;
        total.calculate_tier();
        assert_eq!(total.tier, MAX_TIER);

        total.value = -30;
        total.calculate_tier();
        assert_eq!(total.tier, 0);
    }

    #[test]
    fn test_add_records_entry() {
        let item = armor(
            3448274439,
            &[(StatKind::Discipline, 20, 36), (StatKind::Strength, 10, 26)],
        );

        let mut profile = StatProfile::new();
        profile.add(&item, StatKind::Discipline);

        assert_eq!(profile.discipline.value, 36);
        assert_eq!(profile.strength.value, 10);
        assert_eq!(profile.intellect.value, 0);

        let entry = &profile.entries[0];
        assert_eq!(entry.selected, StatKind::Discipline);
        assert_eq!(entry.discipline, Some(36));
        assert_eq!(entry.intellect, None);
        assert_eq!(entry.strength, Some(10));
    }

    #[test]
    fn test_selected_stat_without_range() {
        let item = armor(3448274439, &[(StatKind::Strength, 10, 26)]);

        let mut profile = StatProfile::new();
        profile.add(&item, StatKind::Intellect);

        assert_eq!(profile.intellect.value, 0);
        assert_eq!(profile.strength.value, 10);
    }

    #[test]
    fn test_set_item_ignores_unknown_slot() {
        let mut inventory = Inventory::new();
        assert!(!inventory.set_item(Item::new("x", 1, 7, 300)));
        assert!(inventory.is_empty());

        assert!(inventory.set_item(Item::new("a", 1, 3448274439, 300)));
        assert!(inventory.set_item(Item::new("b", 1, 3448274439, 310)));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(EquipmentSlot::Helmet).unwrap().item_id, "b");
    }

    #[test]
    fn test_items_in_display_order() {
        let inventory = Inventory::from_items([
            Item::new("class", 1, 1585787867, 300),
            Item::new("primary", 1, 1498876634, 300),
            Item::new("helmet", 1, 3448274439, 300),
        ]);

        let ids: Vec<_> = inventory.items().map(|item| item.item_id.as_str()).collect();
        assert_eq!(ids, vec!["primary", "helmet", "class"]);
    }

    #[test]
    fn test_stat_profiles_dedupe_and_order() {
        let inventory = Inventory::from_items([
            armor(
                3448274439,
                &[(StatKind::Discipline, 30, 46), (StatKind::Intellect, 25, 41)],
            ),
            armor(14239492, &[(StatKind::Discipline, 40, 65)]),
            armor(20886954, &[(StatKind::Intellect, 30, 55)]),
        ]);

        let profiles = inventory.stat_profiles();

        // disc selected on helmet: disc 46+65=111, int 25+55=80 -> 1 + 1
        // int selected on helmet: disc 30+65=95, int 41+55=96 -> 1 + 1
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].tier_count, 2);
        assert_eq!(profiles[0].entries.len(), 3);
    }

    #[test]
    fn test_stat_profiles_sorted_by_tier_count() {
        let inventory = Inventory::from_items([
            armor(
                14239492,
                &[(StatKind::Discipline, 10, 70), (StatKind::Strength, 50, 130)],
            ),
            // weapons never take part
            armor(1498876634, &[(StatKind::Discipline, 500, 500)]),
        ]);

        let profiles = inventory.stat_profiles();
        assert_eq!(profiles.len(), 2);
        // strength selected: disc 10 (0), str 130 (2)
        assert_eq!(profiles[0].tier_count, 2);
        assert_eq!(profiles[0].strength.tier, 2);
        // discipline selected: disc 70 (1), str 50 (0)
        assert_eq!(profiles[1].tier_count, 1);
        assert_eq!(profiles[1].discipline.tier, 1);
    }

    #[test]
    fn test_stat_profiles_without_ranges() {
        let inventory = Inventory::from_items([Item::new("h", 1, 3448274439, 300)]);
        let profiles = inventory.stat_profiles();

        // one empty profile
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].tier_count, 0);
        assert!(profiles[0].entries.is_empty());
    }
}
