//! Raw equipment records.
//!
//! These mirror the camelCase JSON the inventory service returns for each
//! equipped bucket. Only the fields the engine reads are modelled; serde
//! ignores the rest.

use crate::stat_kind::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stat as reported on an item or a talent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStat {
    pub stat_hash: u32,
    pub value: i32,
}

/// Activation state of one talent node on an item instance.
///
/// Entries are ordered exactly like the grid definition's nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub step_index: usize,
    pub is_activated: bool,
    #[serde(default)]
    pub hidden: bool,
    /// Keys the node into `statsOnNodes`, when the record carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_hash: Option<u32>,
}

/// Stat deltas a node grants now and after its next step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStats {
    #[serde(default)]
    pub current_node_stats: Vec<RawStat>,
    #[serde(default)]
    pub next_node_stats: Vec<RawStat>,
}

impl NodeStats {
    /// Every delta the node reports, current stats first.
    pub fn all(&self) -> impl Iterator<Item = &RawStat> {
        self.current_node_stats
            .iter()
            .chain(self.next_node_stats.iter())
    }
}

/// One item instance.
///
/// # Examples
///
/// ```rust
/// use gearstat::{EquippableItem, StatKind};
///
/// let item: EquippableItem = serde_json::from_str(r#"{
///     "itemId": "6917529033189743362",
///     "itemHash": 2193494688,
///     "talentGridHash": 4001,
///     "primaryStat": { "statHash": 3897883278, "value": 320 },
///     "stats": [ { "statHash": 144602215, "value": 57 } ],
///     "nodes": [ { "stepIndex": 0, "isActivated": true } ]
/// }"#).unwrap();
///
/// assert_eq!(item.power_level(), 320);
/// assert_eq!(item.stat_value(StatKind::Intellect), Some(57));
/// assert_eq!(item.stat_value(StatKind::Strength), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquippableItem {
    pub item_id: String,
    pub item_hash: u32,
    #[serde(default)]
    pub talent_grid_hash: u32,
    #[serde(default)]
    pub primary_stat: Option<RawStat>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub nodes: Vec<NodeState>,
    /// Per-node stat deltas keyed by node hash.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub stats_on_nodes: HashMap<u32, NodeStats>,
}

impl EquippableItem {
    /// Get the current value of a stat, if the item has it.
    pub fn stat_value(&self, stat: StatKind) -> Option<i32> {
        self.stats
            .iter()
            .find(|raw| raw.stat_hash == stat.hash())
            .map(|raw| raw.value)
    }

    /// The item's power level, `0` when it has no primary stat.
    pub fn power_level(&self) -> u32 {
        self.primary_stat
            .map(|stat| u32::try_from(stat.value).unwrap_or(0))
            .unwrap_or(0)
    }

    /// Stat deltas recorded for a node, if any.
    pub fn node_stats(&self, node: &NodeState) -> Option<&NodeStats> {
        node.node_hash.and_then(|hash| self.stats_on_nodes.get(&hash))
    }

    /// Whether the record carries per-node stat deltas.
    pub fn has_node_stats(&self) -> bool {
        !self.stats_on_nodes.is_empty()
    }
}

/// An equipped bucket: the bucket hash plus the item occupying it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equippable {
    pub bucket_hash: u32,
    #[serde(default)]
    pub items: Vec<EquippableItem>,
}

impl Equippable {
    /// The equipped item, if the bucket holds one.
    pub fn item(&self) -> Option<&EquippableItem> {
        self.items.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_level_without_primary_stat() {
        let item = EquippableItem::default();
        assert_eq!(item.power_level(), 0);
    }

    #[test]
    fn test_node_stats_lookup() {
        let mut item = EquippableItem::default();
        item.stats_on_nodes.insert(
            99,
            NodeStats {
                current_node_stats: vec![RawStat {
                    stat_hash: StatKind::Strength.hash(),
                    value: 12,
                }],
                next_node_stats: Vec::new(),
            },
        );

        let keyed = NodeState {
            node_hash: Some(99),
            ..NodeState::default()
        };
        let unkeyed = NodeState::default();

        assert!(item.has_node_stats());
        assert_eq!(item.node_stats(&keyed).unwrap().all().count(), 1);
        assert!(item.node_stats(&unkeyed).is_none());
    }

    #[test]
    fn test_deserialize_bucket() {
        let json = r#"{
            "bucketHash": 3448274439,
            "items": [ {
                "itemId": "1",
                "itemHash": 2,
                "talentGridHash": 3,
                "nodes": [ { "stepIndex": 1, "isActivated": false, "hidden": true } ],
                "statsOnNodes": {
                    "55": { "currentNodeStats": [ { "statHash": 1735777505, "value": 9 } ] }
                }
            } ]
        }"#;

        let bucket: Equippable = serde_json::from_str(json).unwrap();
        let item = bucket.item().unwrap();
        assert!(item.nodes[0].hidden);
        assert_eq!(item.stats_on_nodes[&55].next_node_stats.len(), 0);
    }
}
