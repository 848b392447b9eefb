//! Stat kind module.
//!
//! Provides the `StatKind` type for the three armour stats whose exact
//! rolls are hidden by the source API. Every other stat (the primary
//! power stat included) is read directly and is exact.

use serde::{Deserialize, Serialize};

/// A stat subject to range reconstruction.
///
/// Each kind is identified in raw records by its stat hash.
///
/// # Examples
///
/// ```rust
/// use gearstat::StatKind;
///
/// let kind = StatKind::from_hash(144602215);
/// assert_eq!(kind, Some(StatKind::Intellect));
/// assert_eq!(StatKind::Intellect.hash(), 144602215);
/// assert_eq!(StatKind::from_hash(1), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    Discipline,
    Intellect,
    Strength,
}

impl StatKind {
    /// All stat kinds, in display order.
    pub const ALL: [StatKind; 3] = [StatKind::Discipline, StatKind::Intellect, StatKind::Strength];

    /// Get the stat hash identifying this kind in raw records.
    pub fn hash(self) -> u32 {
        match self {
            StatKind::Discipline => 1735777505,
            StatKind::Intellect => 144602215,
            StatKind::Strength => 4244567218,
        }
    }

    /// Look up a stat kind by its stat hash.
    ///
    /// Returns `None` for hashes of stats that are not range-reconstructed.
    pub fn from_hash(hash: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hash() == hash)
    }

    /// Get the lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKind::Discipline => "discipline",
            StatKind::Intellect => "intellect",
            StatKind::Strength => "strength",
        }
    }

    /// Get the short label used in compact listings.
    pub fn abbreviation(self) -> &'static str {
        match self {
            StatKind::Discipline => "disc",
            StatKind::Intellect => "int",
            StatKind::Strength => "str",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_hash(kind.hash()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_hash() {
        // Armor (defense) stat hash is not range-reconstructed
        assert_eq!(StatKind::from_hash(3897883278), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatKind::Discipline.to_string(), "discipline");
        assert_eq!(StatKind::Strength.abbreviation(), "str");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StatKind::Intellect).unwrap();
        assert_eq!(json, "\"intellect\"");
    }
}
