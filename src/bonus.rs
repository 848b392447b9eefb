//! Bonus table module.
//!
//! A stat node on a talent grid grants a flat bonus whose magnitude
//! depends on the item's slot and power level. The magnitudes are game
//! constants observed in the wild, so each slot's ladder is stored as
//! plain data and can be audited on its own.

use crate::slot::EquipmentSlot;

/// A single rung of a bonus ladder.
///
/// Applies to power levels strictly below `below`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderStep {
    pub below: u32,
    pub bonus: i32,
}

const fn step(below: u32, bonus: i32) -> LadderStep {
    LadderStep { below, bonus }
}

/// A strictly increasing step ladder of bonuses for one slot.
///
/// # Examples
///
/// ```rust
/// use gearstat::bonus::{Ladder, LadderStep};
///
/// const STEPS: &[LadderStep] = &[LadderStep { below: 10, bonus: 1 }];
/// let ladder = Ladder::new(STEPS, 2);
///
/// assert_eq!(ladder.bonus(9), 1);
/// assert_eq!(ladder.bonus(10), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    steps: &'static [LadderStep],
    top: i32,
}

impl Ladder {
    /// Create a ladder from its rungs (ascending thresholds) and the bonus
    /// used once the power level reaches the last threshold.
    pub const fn new(steps: &'static [LadderStep], top: i32) -> Self {
        Self { steps, top }
    }

    /// Get the bonus for a power level.
    ///
    /// Returns the bonus of the first rung whose threshold is strictly
    /// greater than `power_level`, or the top bonus past every threshold.
    pub fn bonus(&self, power_level: u32) -> i32 {
        self.steps
            .iter()
            .find(|step| power_level < step.below)
            .map(|step| step.bonus)
            .unwrap_or(self.top)
    }

    /// Get the rungs of this ladder.
    pub fn steps(&self) -> &'static [LadderStep] {
        self.steps
    }

    /// Get the bonus past the final threshold.
    pub fn top(&self) -> i32 {
        self.top
    }
}

const HELMET_STEPS: &[LadderStep] = &[step(292, 15), step(307, 16), step(319, 17), step(332, 18)];
const HELMET: Ladder = Ladder::new(HELMET_STEPS, 19);

const GAUNTLETS_STEPS: &[LadderStep] =
    &[step(287, 13), step(305, 14), step(319, 15), step(333, 16)];
const GAUNTLETS: Ladder = Ladder::new(GAUNTLETS_STEPS, 17);

const CHEST_STEPS: &[LadderStep] = &[
    step(287, 20),
    step(300, 21),
    step(310, 22),
    step(319, 23),
    step(328, 24),
];
const CHEST: Ladder = Ladder::new(CHEST_STEPS, 25);

const LEGS_STEPS: &[LadderStep] = &[
    step(284, 18),
    step(298, 19),
    step(309, 20),
    step(319, 21),
    step(329, 22),
];
const LEGS: Ladder = Ladder::new(LEGS_STEPS, 23);

// Class items and ghosts share a ladder.
const CLASS_ITEM_STEPS: &[LadderStep] = &[step(295, 8), step(319, 9)];
const CLASS_ITEM: Ladder = Ladder::new(CLASS_ITEM_STEPS, 10);

const ARTIFACT_STEPS: &[LadderStep] = &[
    step(287, 34),
    step(295, 35),
    step(302, 36),
    step(308, 37),
    step(314, 38),
    step(319, 39),
    step(325, 40),
    step(330, 41),
];
const ARTIFACT: Ladder = Ladder::new(ARTIFACT_STEPS, 42);

const STANDARD_LADDERS: &[(EquipmentSlot, Ladder)] = &[
    (EquipmentSlot::Helmet, HELMET),
    (EquipmentSlot::Gauntlets, GAUNTLETS),
    (EquipmentSlot::Chest, CHEST),
    (EquipmentSlot::Legs, LEGS),
    (EquipmentSlot::ClassItem, CLASS_ITEM),
    (EquipmentSlot::Ghost, CLASS_ITEM),
    (EquipmentSlot::Artifact, ARTIFACT),
];

/// Lookup of per-node stat bonuses by slot and power level.
///
/// # Examples
///
/// ```rust
/// use gearstat::{BonusTable, EquipmentSlot};
///
/// let table = BonusTable::standard();
/// assert_eq!(table.bonus(EquipmentSlot::Helmet, 300), 16);
/// assert_eq!(table.bonus(EquipmentSlot::PrimaryWeapon, 300), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BonusTable {
    ladders: &'static [(EquipmentSlot, Ladder)],
}

impl BonusTable {
    /// The table of observed in-game bonuses.
    pub const fn standard() -> Self {
        Self {
            ladders: STANDARD_LADDERS,
        }
    }

    /// Get the ladder for a slot, if it has one.
    pub fn ladder(&self, slot: EquipmentSlot) -> Option<&Ladder> {
        self.ladders
            .iter()
            .find(|(ladder_slot, _)| *ladder_slot == slot)
            .map(|(_, ladder)| ladder)
    }

    /// Get the bonus a single stat node grants for an item.
    ///
    /// Slots without a ladder (weapons, unknown buckets) grant `0`.
    pub fn bonus(&self, slot: EquipmentSlot, power_level: u32) -> i32 {
        match self.ladder(slot) {
            Some(ladder) => ladder.bonus(power_level),
            None => {
                tracing::debug!(?slot, power_level, "no stat bonus ladder for slot");
                0
            }
        }
    }
}

impl Default for BonusTable {
    fn default() -> Self {
        Self::standard()
    }
}
