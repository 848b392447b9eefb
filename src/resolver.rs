//! Stat range resolver module.
//!
//! Provides the `StatRangeResolver` type, which reconstructs the range a
//! hidden stat can take from an item's current stat value and its talent
//! node state.

use crate::bonus::BonusTable;
use crate::equippable::EquippableItem;
use crate::error::StatError;
use crate::range::StatRange;
use crate::reference::ReferenceData;
use crate::slot::EquipmentSlot;
use crate::stat_kind::StatKind;
use crate::strategy::{GridDefinitionStrategy, HiddenNodeStrategy, RangeResolutionStrategy};

/// Resolves stat ranges for item records against shared reference data.
///
/// Resolution per stat:
/// 1. Read the stat's current value; a stat the item lacks has no range
/// 2. Seed `{min, max}` with the current value
/// 3. Pick a strategy from the inputs available; with none, the range is unknown
/// 4. Let the strategy widen the range
/// 5. Report the range only if some bound is above zero
///
/// # Examples
///
/// ```rust
/// use gearstat::grid::{NodeStep, TalentGridDefinition, TalentNode};
/// use gearstat::{
///     EquipmentSlot, EquippableItem, NodeState, RawStat, ReferenceData, StatKind,
///     StatRangeResolver,
/// };
///
/// let mut reference = ReferenceData::new();
/// let disc_step = reference.stat_bonus_map().step_hash(StatKind::Discipline);
/// reference.insert_grid(TalentGridDefinition::new(
///     4001,
///     vec![TalentNode { steps: vec![NodeStep { node_step_hash: disc_step }] }],
/// ));
///
/// let item = EquippableItem {
///     talent_grid_hash: 4001,
///     primary_stat: Some(RawStat { stat_hash: 3897883278, value: 300 }),
///     stats: vec![RawStat { stat_hash: StatKind::Discipline.hash(), value: 20 }],
///     nodes: vec![NodeState { step_index: 0, is_activated: true, ..NodeState::default() }],
///     ..EquippableItem::default()
/// };
///
/// let resolver = StatRangeResolver::new(&reference);
/// let range = resolver
///     .resolve(StatKind::Discipline, &item, EquipmentSlot::Helmet)
///     .unwrap()
///     .unwrap();
///
/// assert_eq!((range.min, range.max), (4, 20));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatRangeResolver<'a> {
    reference: &'a ReferenceData,
    bonus_table: BonusTable,
}

impl<'a> StatRangeResolver<'a> {
    /// Create a resolver using the standard bonus table.
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            bonus_table: BonusTable::standard(),
        }
    }

    /// Pick the strategy the item's inputs support.
    ///
    /// A grid definition wins over per-node deltas; with neither, `None`.
    pub fn strategy_for(
        &self,
        item: &EquippableItem,
        slot: EquipmentSlot,
    ) -> Option<Box<dyn RangeResolutionStrategy + 'a>> {
        if let Some(grid) = self.reference.talent_grid(item.talent_grid_hash) {
            let bonus = self.bonus_table.bonus(slot, item.power_level());
            return Some(Box::new(GridDefinitionStrategy::new(
                grid,
                self.reference.stat_bonus_map(),
                bonus,
            )));
        }

        if item.has_node_stats() {
            return Some(Box::new(HiddenNodeStrategy));
        }

        None
    }

    /// Resolve the range of one stat.
    ///
    /// Returns `Ok(None)` when the item lacks the stat, when no strategy
    /// applies, or when the range is provably zero.
    pub fn resolve(
        &self,
        stat: StatKind,
        item: &EquippableItem,
        slot: EquipmentSlot,
    ) -> Result<Option<StatRange>, StatError> {
        if item.stat_value(stat).is_none() {
            return Ok(None);
        }

        let strategy = self.strategy_for(item, slot);
        self.resolve_with(stat, item, strategy.as_deref())
    }

    /// Resolve the range of every stat, in `StatKind::ALL` order.
    ///
    /// The strategy is picked once for the item.
    pub fn resolve_all(
        &self,
        item: &EquippableItem,
        slot: EquipmentSlot,
    ) -> Result<Vec<(StatKind, Option<StatRange>)>, StatError> {
        let has_any = StatKind::ALL
            .iter()
            .any(|&stat| item.stat_value(stat).is_some());
        let strategy = if has_any {
            self.strategy_for(item, slot)
        } else {
            None
        };

        StatKind::ALL
            .into_iter()
            .map(|stat| {
                self.resolve_with(stat, item, strategy.as_deref())
                    .map(|range| (stat, range))
            })
            .collect()
    }

    fn resolve_with(
        &self,
        stat: StatKind,
        item: &EquippableItem,
        strategy: Option<&(dyn RangeResolutionStrategy + 'a)>,
    ) -> Result<Option<StatRange>, StatError> {
        let Some(current) = item.stat_value(stat) else {
            return Ok(None);
        };

        let Some(strategy) = strategy else {
            tracing::debug!(
                item_id = %item.item_id,
                grid = item.talent_grid_hash,
                %stat,
                "no talent grid definition or node stats; range unknown"
            );
            return Ok(None);
        };

        let mut range = StatRange::exact(current);
        strategy.apply(stat, item, &mut range)?;

        tracing::debug!(
            item_id = %item.item_id,
            %stat,
            strategy = %strategy.description(),
            min = range.min,
            max = range.max,
            "resolved stat range"
        );

        Ok(range.is_meaningful().then_some(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equippable::{NodeState, NodeStats, RawStat};
    use crate::grid::{NodeStep, TalentGridDefinition, TalentNode};

    const GRID: u32 = 4001;

    fn reference() -> ReferenceData {
        let map = *ReferenceData::new().stat_bonus_map();
        let steps = |hashes: &[u32]| TalentNode {
            steps: hashes
                .iter()
                .map(|&node_step_hash| NodeStep { node_step_hash })
                .collect(),
        };

        let mut data = ReferenceData::new();
        data.insert_grid(TalentGridDefinition::new(
            GRID,
            vec![
                steps(&[11, 12]),
                steps(&[map.step_hash(StatKind::Discipline), map.step_hash(StatKind::Intellect)]),
                steps(&[map.step_hash(StatKind::Strength), map.step_hash(StatKind::Discipline)]),
            ],
        ));
        data
    }

    fn item(stats: &[(StatKind, i32)], nodes: &[(usize, bool)]) -> EquippableItem {
        EquippableItem {
            item_id: "1".to_string(),
            talent_grid_hash: GRID,
            primary_stat: Some(RawStat {
                stat_hash: 3897883278,
                value: 300,
            }),
            stats: stats
                .iter()
                .map(|&(kind, value)| RawStat {
                    stat_hash: kind.hash(),
                    value,
                })
                .collect(),
            nodes: nodes
                .iter()
                .map(|&(step_index, is_activated)| NodeState {
                    step_index,
                    is_activated,
                    ..NodeState::default()
                })
                .collect(),
            ..EquippableItem::default()
        }
    }

    #[test]
    fn test_activated_node_lowers_min() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(&[(StatKind::Discipline, 20)], &[(0, true), (0, true), (0, false)]);

        let range = resolver
            .resolve(StatKind::Discipline, &item, EquipmentSlot::Helmet)
            .unwrap()
            .unwrap();

        assert_eq!((range.min, range.max), (4, 20));
        assert_eq!(range.current, Some(20));
    }

    #[test]
    fn test_inactive_node_raises_max() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(&[(StatKind::Discipline, 20)], &[(0, true), (0, false), (1, false)]);

        let range = resolver
            .resolve(StatKind::Discipline, &item, EquipmentSlot::Helmet)
            .unwrap()
            .unwrap();

        assert_eq!((range.min, range.max), (20, 52));
    }

    #[test]
    fn test_missing_stat_is_none() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(&[(StatKind::Discipline, 20)], &[(0, true), (0, true), (0, true)]);

        let range = resolver
            .resolve(StatKind::Intellect, &item, EquipmentSlot::Helmet)
            .unwrap();
        assert_eq!(range, None);
    }

    #[test]
    fn test_unknown_grid_is_none() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let mut item = item(&[(StatKind::Discipline, 20)], &[(0, true)]);
        item.talent_grid_hash = 9999;

        assert!(resolver.strategy_for(&item, EquipmentSlot::Helmet).is_none());
        assert_eq!(
            resolver
                .resolve(StatKind::Discipline, &item, EquipmentSlot::Helmet)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_zero_range_is_none() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(&[(StatKind::Strength, 0)], &[(0, true), (0, true), (1, true)]);

        assert_eq!(
            resolver
                .resolve(StatKind::Strength, &item, EquipmentSlot::Helmet)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_zero_current_with_inactive_node_is_meaningful() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(&[(StatKind::Strength, 0)], &[(0, true), (0, true), (0, false)]);

        let range = resolver
            .resolve(StatKind::Strength, &item, EquipmentSlot::Helmet)
            .unwrap()
            .unwrap();
        assert_eq!((range.min, range.max), (0, 16));
    }

    #[test]
    fn test_falls_back_to_hidden_strategy() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let mut item = item(&[(StatKind::Intellect, 30)], &[]);
        item.talent_grid_hash = 9999;
        item.nodes = vec![NodeState {
            node_hash: Some(8),
            ..NodeState::default()
        }];
        item.stats_on_nodes.insert(
            8,
            NodeStats {
                current_node_stats: Vec::new(),
                next_node_stats: vec![RawStat {
                    stat_hash: StatKind::Intellect.hash(),
                    value: 12,
                }],
            },
        );

        let range = resolver
            .resolve(StatKind::Intellect, &item, EquipmentSlot::Chest)
            .unwrap()
            .unwrap();
        assert_eq!((range.min, range.max), (30, 42));
    }

    #[test]
    fn test_malformed_grid_is_error() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(
            &[(StatKind::Discipline, 20)],
            &[(0, true), (0, true), (0, true), (0, true)],
        );

        let result = resolver.resolve(StatKind::Discipline, &item, EquipmentSlot::Helmet);
        assert_eq!(
            result,
            Err(StatError::MalformedGrid {
                grid_hash: GRID,
                node_index: 3,
                step_index: None,
            })
        );
    }

    #[test]
    fn test_resolve_all_order() {
        let data = reference();
        let resolver = StatRangeResolver::new(&data);
        let item = item(
            &[(StatKind::Strength, 25), (StatKind::Discipline, 20)],
            &[(0, true), (0, true), (0, false)],
        );

        let ranges = resolver.resolve_all(&item, EquipmentSlot::Helmet).unwrap();
        let kinds: Vec<_> = ranges.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, StatKind::ALL.to_vec());

        assert_eq!(ranges[0].1.as_ref().map(|r| (r.min, r.max)), Some((4, 20)));
        assert_eq!(ranges[1].1, None);
        assert_eq!(ranges[2].1.as_ref().map(|r| (r.min, r.max)), Some((25, 41)));
    }
}
