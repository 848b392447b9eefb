//! Stat range module.
//!
//! Contains the `StatRange` type: the interval a hidden stat can take,
//! together with the node adjustments that produced it.

use serde::{Deserialize, Serialize};

/// A single widening of a range by one talent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeAdjustment {
    /// Position of the node in the item's node list.
    pub node_index: usize,
    /// Signed change: negative values lowered `min`, positive raised `max`.
    pub delta: i32,
}

/// The possible values of a hidden stat.
///
/// `min` is the worst case if nothing further activates, `max` the best
/// case if every inactive stat node were activated. An absent range
/// (`Option::None` wherever ranges are stored) means the stat could not
/// be evaluated, which is not the same as a zero-width `{0, 0}` range.
///
/// # Examples
///
/// ```rust
/// use gearstat::StatRange;
///
/// let mut range = StatRange::exact(20);
/// range.lower_min(0, 16);
///
/// assert_eq!(range.min, 4);
/// assert_eq!(range.max, 20);
/// assert_eq!(range.current, Some(20));
/// assert_eq!(range.adjustments.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRange {
    pub min: i32,
    pub max: i32,

    /// The value the record reports right now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<i32>,

    /// Quality percentage, set by the scorer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,

    /// Node adjustments in the order they were applied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<RangeAdjustment>,
}

impl StatRange {
    /// Create a range with explicit bounds and no known current value.
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            current: None,
            quality: None,
            adjustments: Vec::new(),
        }
    }

    /// Create a zero-width range seeded from a known current value.
    pub fn exact(current: i32) -> Self {
        Self {
            current: Some(current),
            ..Self::new(current, current)
        }
    }

    /// Lower `min` by `amount` for the node at `node_index`.
    pub fn lower_min(&mut self, node_index: usize, amount: i32) {
        self.min = self.min.saturating_sub(amount);
        self.adjustments.push(RangeAdjustment {
            node_index,
            delta: amount.saturating_neg(),
        });
    }

    /// Raise `max` by `amount` for the node at `node_index`.
    pub fn raise_max(&mut self, node_index: usize, amount: i32) {
        self.max = self.max.saturating_add(amount);
        self.adjustments.push(RangeAdjustment {
            node_index,
            delta: amount,
        });
    }

    /// Lower `min` to `value` for the node at `node_index`, if `value` is
    /// below it.
    pub fn lower_min_to(&mut self, node_index: usize, value: i32) {
        if value < self.min {
            let delta = value.saturating_sub(self.min);
            self.min = value;
            self.adjustments.push(RangeAdjustment { node_index, delta });
        }
    }

    /// Raise `max` to `value` for the node at `node_index`, if `value` is
    /// above it.
    pub fn raise_max_to(&mut self, node_index: usize, value: i32) {
        if value > self.max {
            let delta = value.saturating_sub(self.max);
            self.max = value;
            self.adjustments.push(RangeAdjustment { node_index, delta });
        }
    }

    /// Whether the range is worth reporting: some bound is above zero.
    pub fn is_meaningful(&self) -> bool {
        self.min > 0 || self.max > 0
    }

    /// Whether `value` lies within the bounds.
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}
