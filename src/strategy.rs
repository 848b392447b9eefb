//! Range resolution strategies.
//!
//! A strategy widens a range seeded from the stat's current value. Which
//! one applies depends on what the inputs carry: a talent grid definition
//! for the item's grid, or per-node stat deltas on the record itself.
//! Both follow the same rule: `min` tracks the worst case if nothing
//! further activates and `max` the best case if every inactive stat node
//! were activated.

use crate::equippable::EquippableItem;
use crate::error::StatError;
use crate::grid::TalentGridDefinition;
use crate::range::StatRange;
use crate::reference::StatBonusMap;
use crate::stat_kind::StatKind;

/// Trait for the ways a stat range can be widened from node state.
///
/// # Examples
///
/// ```rust
/// use gearstat::strategy::{HiddenNodeStrategy, RangeResolutionStrategy};
/// use gearstat::{EquippableItem, StatKind, StatRange};
///
/// let item = EquippableItem::default();
/// let mut range = StatRange::exact(10);
///
/// HiddenNodeStrategy.apply(StatKind::Discipline, &item, &mut range).unwrap();
/// assert_eq!((range.min, range.max), (10, 10));
/// ```
pub trait RangeResolutionStrategy: Send + Sync {
    /// Widen `range` for `stat` according to the item's node state.
    ///
    /// `range` arrives seeded with the stat's current value.
    fn apply(
        &self,
        stat: StatKind,
        item: &EquippableItem,
        range: &mut StatRange,
    ) -> Result<(), StatError>;

    /// Get a human-readable description of this strategy.
    fn description(&self) -> String;
}

/// Widens ranges by walking the item's nodes against the grid definition.
///
/// A node whose active step is the stat's bonus step is a toggle for that
/// stat. If it is activated the roll could have been lower before it was,
/// so `min` drops by the bonus; if not, activating it would raise `max` by
/// the bonus.
#[derive(Debug, Clone, Copy)]
pub struct GridDefinitionStrategy<'a> {
    grid: &'a TalentGridDefinition,
    stat_bonus_map: &'a StatBonusMap,
    bonus: i32,
}

impl<'a> GridDefinitionStrategy<'a> {
    /// Create a strategy for one item.
    ///
    /// `bonus` is the per-node magnitude for the item's slot and power level.
    pub fn new(
        grid: &'a TalentGridDefinition,
        stat_bonus_map: &'a StatBonusMap,
        bonus: i32,
    ) -> Self {
        Self {
            grid,
            stat_bonus_map,
            bonus,
        }
    }
}

impl RangeResolutionStrategy for GridDefinitionStrategy<'_> {
    fn apply(
        &self,
        stat: StatKind,
        item: &EquippableItem,
        range: &mut StatRange,
    ) -> Result<(), StatError> {
        let target = self.stat_bonus_map.step_hash(stat);

        for (index, node) in item.nodes.iter().enumerate() {
            if self.grid.step_hash(index, node.step_index)? != target {
                continue;
            }

            if node.is_activated {
                range.lower_min(index, self.bonus);
            } else {
                range.raise_max(index, self.bonus);
            }
            tracing::trace!(
                %stat,
                node = index,
                activated = node.is_activated,
                bonus = self.bonus,
                "stat node"
            );
        }

        Ok(())
    }

    fn description(&self) -> String {
        format!("grid {} (±{})", self.grid.grid_hash, self.bonus)
    }
}

/// Widens ranges from the stat deltas recorded on each node.
///
/// Used when no grid definition is available. A hidden node's delta is
/// taken as the floor of the roll; a visible node that is not yet
/// activated could add its delta on top of the floor. Every floor is
/// applied before any raise, so node order never changes the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenNodeStrategy;

impl RangeResolutionStrategy for HiddenNodeStrategy {
    fn apply(
        &self,
        stat: StatKind,
        item: &EquippableItem,
        range: &mut StatRange,
    ) -> Result<(), StatError> {
        let deltas = || {
            item.nodes.iter().enumerate().flat_map(move |(index, node)| {
                item.node_stats(node)
                    .into_iter()
                    .flat_map(|node_stats| node_stats.all())
                    .filter(move |raw| raw.stat_hash == stat.hash())
                    .map(move |raw| (index, node, raw.value))
            })
        };

        for (index, _, value) in deltas().filter(|(_, node, _)| node.hidden) {
            range.lower_min_to(index, value);
        }

        let floor = range.min;
        let raisable = deltas().filter(|(_, node, _)| !node.hidden && !node.is_activated);
        for (index, _, value) in raisable {
            range.raise_max_to(index, floor.saturating_add(value));
        }

        Ok(())
    }

    fn description(&self) -> String {
        "hidden node deltas".to_string()
    }
}
