//! # gearstat - Item Stat Range & Quality Engine
//!
//! Reconstructs the hidden stat rolls of equipped gear from talent grid
//! state and scores them against the best roll an item of the same slot
//! can have:
//! - **Range resolution** from talent grid definitions or per-node stat deltas
//! - **Power-normalized quality** so items of different power levels compare
//! - **Loadout profiles** enumerating the stat tiers an inventory can reach
//!
//! ## Core Concepts
//!
//! ### Assembly Pipeline
//!
//! Each equipped record flows through a simple pipeline:
//!
//! ```text
//! [EquippableItem] → [StatRangeResolver] → [QualityScorer] → [Item]
//! ```
//!
//! 1. **Resolution** seeds each stat at its current value, then widens the
//!    range by the slot's bonus for every stat node that toggles it
//! 2. **Scoring** normalizes each range minimum to the reference power
//!    level and compares it with the slot's base stat ceiling
//! 3. **Item** carries the ranges, per-stat and aggregate quality
//!
//! ### Key Features
//!
//! - **Graceful degradation**: unknown grids, slots and out-of-curve power
//!   levels yield absent ranges or zero quality, never errors
//! - **Shared reference data**: grid catalog and tables are read-only and
//!   can be shared across threads
//! - **Debug-friendly**: every range records the node adjustments behind it
//!
//! ## Example
//!
//! ```rust
//! use gearstat::grid::{NodeStep, TalentGridDefinition, TalentNode};
//! use gearstat::*;
//!
//! let mut reference = ReferenceData::new();
//! let disc_step = reference.stat_bonus_map().step_hash(StatKind::Discipline);
//! reference.insert_grid(TalentGridDefinition::new(
//!     4001,
//!     vec![TalentNode { steps: vec![NodeStep { node_step_hash: disc_step }] }],
//! ));
//!
//! let helmet = Equippable {
//!     bucket_hash: 3448274439,
//!     items: vec![EquippableItem {
//!         item_id: "1".to_string(),
//!         talent_grid_hash: 4001,
//!         primary_stat: Some(RawStat { stat_hash: 3897883278, value: 300 }),
//!         stats: vec![RawStat { stat_hash: StatKind::Discipline.hash(), value: 20 }],
//!         nodes: vec![NodeState { step_index: 0, is_activated: true, ..NodeState::default() }],
//!         ..EquippableItem::default()
//!     }],
//! };
//!
//! let assembler = ItemStatAssembler::new(&reference);
//! let item = assembler.assemble_bucket(&helmet).unwrap().unwrap();
//!
//! let disc = item.discipline.unwrap();
//! assert_eq!((disc.min, disc.max), (4, 20));
//! assert_eq!(disc.quality, Some(8));
//! assert_eq!(item.quality, 4);
//! ```
//!
//! ## Modules
//!
//! - [`stat_kind`] - The three tracked stats
//! - [`slot`] - Equipment slots and bucket hashes
//! - [`bonus`] - Per-slot stat bonus ladders
//! - [`curve`] - Power level quality curve
//! - [`grid`] - Talent grid definitions
//! - [`reference`] - Reference dataset
//! - [`equippable`] - Raw equipment records
//! - [`range`] - Stat ranges
//! - [`strategy`] - Range resolution strategies
//! - [`resolver`] - Stat range resolver
//! - [`quality`] - Quality scoring
//! - [`item`] - Assembled items
//! - [`assembler`] - Item assembly
//! - [`profile`] - Inventories and stat profiles
//! - [`error`] - Error types

pub mod assembler;
pub mod bonus;
pub mod curve;
pub mod equippable;
pub mod error;
pub mod grid;
pub mod item;
pub mod profile;
pub mod quality;
pub mod range;
pub mod reference;
pub mod resolver;
pub mod slot;
pub mod stat_kind;
pub mod strategy;

// Re-export main types for convenience
pub use assembler::ItemStatAssembler;
pub use error::{ReferenceError, StatError};
pub use item::Item;
pub use resolver::StatRangeResolver;
pub use slot::EquipmentSlot;
pub use stat_kind::StatKind;

// Re-export records and reference data
pub use equippable::{Equippable, EquippableItem, NodeState, NodeStats, RawStat};
pub use grid::TalentGridDefinition;
pub use reference::{ReferenceData, StatBonusMap};

// Re-export ranges and scoring
pub use bonus::{BonusTable, Ladder};
pub use curve::QualityCurve;
pub use quality::{base_stat_ceiling, QualityScorer, ScoreOutcome};
pub use range::{RangeAdjustment, StatRange};
pub use strategy::{GridDefinitionStrategy, HiddenNodeStrategy, RangeResolutionStrategy};

// Re-export profiles
pub use profile::{Inventory, ProfileEntry, StatProfile, StatTotal};
