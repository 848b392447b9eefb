//! Reference data for stat resolution.
//!
//! The talent grid catalog and the stat bonus map are produced offline
//! from the game's content database and loaded once. Everything here is
//! read-only after loading and can be shared freely between threads.

use crate::error::ReferenceError;
use crate::grid::TalentGridDefinition;
use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Maps each stat to the node step hash that signals "this node
/// increases the stat".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonusMap {
    pub discipline: u32,
    pub intellect: u32,
    pub strength: u32,
}

impl StatBonusMap {
    /// Get the bonus step hash for a stat.
    pub fn step_hash(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Discipline => self.discipline,
            StatKind::Intellect => self.intellect,
            StatKind::Strength => self.strength,
        }
    }
}

impl Default for StatBonusMap {
    fn default() -> Self {
        Self {
            discipline: 1263323987,
            intellect: 1034209669,
            strength: 193091484,
        }
    }
}

/// The talent grid catalog plus the stat bonus map.
///
/// # Examples
///
/// ```rust
/// use gearstat::ReferenceData;
///
/// let data = ReferenceData::from_json_str(r#"{
///     "talentGrids": {
///         "4001": { "nodes": [ { "steps": [ { "nodeStepHash": 1263323987 } ] } ] }
///     }
/// }"#).unwrap();
///
/// let grid = data.talent_grid(4001).unwrap();
/// assert_eq!(grid.grid_hash, 4001);
/// assert!(data.talent_grid(4002).is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    /// Grid definitions keyed by talent grid hash.
    #[serde(default)]
    talent_grids: HashMap<u32, TalentGridDefinition>,

    #[serde(default)]
    stat_bonus_map: StatBonusMap,
}

impl ReferenceData {
    /// Create an empty catalog using the default stat bonus map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse reference data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceError> {
        let mut data: ReferenceData = serde_json::from_str(json)?;
        data.stamp_grid_hashes();
        tracing::debug!(grids = data.talent_grids.len(), "loaded reference data");
        Ok(data)
    }

    /// Read and parse reference data from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Add or replace a grid definition, keyed by its own hash.
    pub fn insert_grid(&mut self, grid: TalentGridDefinition) {
        self.talent_grids.insert(grid.grid_hash, grid);
    }

    /// Look up a grid definition.
    ///
    /// Returns `None` for grids the dataset does not know, which is
    /// expected when the game content is newer than the dataset.
    pub fn talent_grid(&self, grid_hash: u32) -> Option<&TalentGridDefinition> {
        self.talent_grids.get(&grid_hash)
    }

    /// Get the stat bonus map.
    pub fn stat_bonus_map(&self) -> &StatBonusMap {
        &self.stat_bonus_map
    }

    /// Number of grid definitions.
    pub fn grid_count(&self) -> usize {
        self.talent_grids.len()
    }

    fn stamp_grid_hashes(&mut self) {
        for (hash, grid) in self.talent_grids.iter_mut() {
            grid.grid_hash = *hash;
        }
    }
}
