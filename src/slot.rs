//! Equipment slot module.
//!
//! Items arrive tagged with a bucket hash; the slot decides which bonus
//! ladder and which base stat ceiling apply to them.

use serde::{Deserialize, Serialize};

/// The equipment slot an item occupies.
///
/// `Unknown` covers bucket hashes that are not in the table, so that new
/// slot types degrade gracefully instead of failing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
    Ghost,
    Artifact,
    PrimaryWeapon,
    SpecialWeapon,
    HeavyWeapon,
    Unknown,
}

/// Bucket hash of every known slot.
const BUCKET_HASHES: &[(u32, EquipmentSlot)] = &[
    (434908299, EquipmentSlot::Artifact),
    (14239492, EquipmentSlot::Chest),
    (1585787867, EquipmentSlot::ClassItem),
    (3551918588, EquipmentSlot::Gauntlets),
    (4023194814, EquipmentSlot::Ghost),
    (953998645, EquipmentSlot::HeavyWeapon),
    (3448274439, EquipmentSlot::Helmet),
    (20886954, EquipmentSlot::Legs),
    (1498876634, EquipmentSlot::PrimaryWeapon),
    (2465295065, EquipmentSlot::SpecialWeapon),
];

impl EquipmentSlot {
    /// Every slot an inventory can hold, in display order.
    pub const EQUIPPABLE: [EquipmentSlot; 10] = [
        EquipmentSlot::PrimaryWeapon,
        EquipmentSlot::SpecialWeapon,
        EquipmentSlot::HeavyWeapon,
        EquipmentSlot::Ghost,
        EquipmentSlot::Helmet,
        EquipmentSlot::Gauntlets,
        EquipmentSlot::Chest,
        EquipmentSlot::Legs,
        EquipmentSlot::Artifact,
        EquipmentSlot::ClassItem,
    ];

    /// Map a bucket hash to its slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gearstat::EquipmentSlot;
    ///
    /// assert_eq!(EquipmentSlot::from_bucket_hash(3448274439), EquipmentSlot::Helmet);
    /// assert_eq!(EquipmentSlot::from_bucket_hash(1), EquipmentSlot::Unknown);
    /// ```
    pub fn from_bucket_hash(bucket_hash: u32) -> Self {
        BUCKET_HASHES
            .iter()
            .find(|(hash, _)| *hash == bucket_hash)
            .map(|(_, slot)| *slot)
            .unwrap_or(EquipmentSlot::Unknown)
    }

    /// Get the bucket hash for this slot, if it has one.
    pub fn bucket_hash(self) -> Option<u32> {
        BUCKET_HASHES
            .iter()
            .find(|(_, slot)| *slot == self)
            .map(|(hash, _)| *hash)
    }

    /// Whether this slot carries the three range-reconstructed stats.
    pub fn is_armor(self) -> bool {
        matches!(
            self,
            EquipmentSlot::Helmet
                | EquipmentSlot::Gauntlets
                | EquipmentSlot::Chest
                | EquipmentSlot::Legs
                | EquipmentSlot::ClassItem
                | EquipmentSlot::Ghost
                | EquipmentSlot::Artifact
        )
    }
}
