//! Talent grid definitions.
//!
//! A talent grid is the static topology shared by every instance of an
//! item: an ordered list of nodes, each an ordered list of steps. Item
//! records only carry the index of the active step per node, so the
//! definition is needed to learn what each node currently grants.

use crate::error::StatError;
use serde::{Deserialize, Serialize};

/// One step of a talent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStep {
    /// Identifies the effect this step grants, e.g. "Increases Discipline".
    pub node_step_hash: u32,
}

/// A node of a talent grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TalentNode {
    pub steps: Vec<NodeStep>,
}

/// The static definition of a talent grid.
///
/// # Examples
///
/// ```rust
/// use gearstat::grid::{NodeStep, TalentGridDefinition, TalentNode};
///
/// let grid = TalentGridDefinition::new(
///     77,
///     vec![TalentNode { steps: vec![NodeStep { node_step_hash: 5 }] }],
/// );
///
/// assert_eq!(grid.step_hash(0, 0), Ok(5));
/// assert!(grid.step_hash(0, 1).is_err());
/// assert!(grid.step_hash(1, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentGridDefinition {
    /// Filled in from the catalog key when loaded as part of reference data.
    #[serde(default)]
    pub grid_hash: u32,
    pub nodes: Vec<TalentNode>,
}

impl TalentGridDefinition {
    /// Create a grid definition.
    pub fn new(grid_hash: u32, nodes: Vec<TalentNode>) -> Self {
        Self { grid_hash, nodes }
    }

    /// Get the step hash at a node and step position.
    ///
    /// A position the definition does not have means the item record and
    /// the reference data disagree, which cannot be recovered from locally.
    pub fn step_hash(&self, node_index: usize, step_index: usize) -> Result<u32, StatError> {
        let node = self.nodes.get(node_index).ok_or(StatError::MalformedGrid {
            grid_hash: self.grid_hash,
            node_index,
            step_index: None,
        })?;

        node.steps
            .get(step_index)
            .map(|step| step.node_step_hash)
            .ok_or(StatError::MalformedGrid {
                grid_hash: self.grid_hash,
                node_index,
                step_index: Some(step_index),
            })
    }

    /// Number of nodes in the grid.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the grid has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
