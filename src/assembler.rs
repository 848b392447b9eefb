//! Item assembly.
//!
//! Drives resolution and scoring for whole inventory responses.

use crate::equippable::{Equippable, EquippableItem};
use crate::error::StatError;
use crate::item::Item;
use crate::quality::QualityScorer;
use crate::reference::ReferenceData;
use crate::resolver::StatRangeResolver;
use crate::slot::EquipmentSlot;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds scored [`Item`]s from raw equipment records.
///
/// Each record is independent: one item's ranges and quality never depend
/// on another item in the same response.
///
/// # Examples
///
/// ```rust
/// use gearstat::{Equippable, ItemStatAssembler, ReferenceData};
///
/// let reference = ReferenceData::new();
/// let assembler = ItemStatAssembler::new(&reference);
///
/// let buckets: Vec<Equippable> = serde_json::from_str(r#"[
///     { "bucketHash": 3448274439, "items": [ {
///         "itemId": "1",
///         "itemHash": 2,
///         "talentGridHash": 777,
///         "primaryStat": { "statHash": 3897883278, "value": 320 },
///         "stats": [ { "statHash": 1735777505, "value": 40 } ]
///     } ] },
///     { "bucketHash": 3551918588, "items": [] }
/// ]"#).unwrap();
///
/// let items = assembler.assemble_all(&buckets).unwrap();
///
/// // The empty bucket yields nothing; the unknown grid yields no ranges
/// assert_eq!(items.len(), 1);
/// assert!(items[0].discipline.is_none());
/// assert_eq!(items[0].quality, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ItemStatAssembler<'a> {
    resolver: StatRangeResolver<'a>,
    scorer: QualityScorer,
}

impl<'a> ItemStatAssembler<'a> {
    /// Create an assembler with the standard bonus table and quality curve.
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            resolver: StatRangeResolver::new(reference),
            scorer: QualityScorer::default(),
        }
    }

    /// Replace the quality scorer.
    pub fn with_scorer(mut self, scorer: QualityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Get the quality scorer in use.
    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    /// Assemble one item record found in the bucket `bucket_hash`.
    ///
    /// Stats are resolved in `StatKind::ALL` order, then the item is
    /// scored. An item that cannot be scored keeps `quality == 0`.
    pub fn assemble(&self, bucket_hash: u32, record: &EquippableItem) -> Result<Item, StatError> {
        let mut item = Item::from_record(bucket_hash, record);
        if item.slot == EquipmentSlot::Unknown {
            tracing::warn!(bucket_hash, item_id = %item.item_id, "unrecognised bucket");
        }

        for (stat, range) in self.resolver.resolve_all(record, item.slot)? {
            item.set_range(stat, range);
        }

        let outcome = self.scorer.score_item(&mut item);
        tracing::debug!(item_id = %item.item_id, slot = ?item.slot, ?outcome, "assembled item");

        Ok(item)
    }

    /// Assemble the item equipped in a bucket.
    ///
    /// Returns `Ok(None)` when the bucket is empty.
    pub fn assemble_bucket(&self, equippable: &Equippable) -> Result<Option<Item>, StatError> {
        equippable
            .item()
            .map(|record| self.assemble(equippable.bucket_hash, record))
            .transpose()
    }

    /// Assemble every non-empty bucket of an inventory response, in order.
    ///
    /// The first malformed record aborts the whole response.
    pub fn assemble_all(&self, equippables: &[Equippable]) -> Result<Vec<Item>, StatError> {
        #[cfg(feature = "parallel")]
        let assembled: Result<Vec<Option<Item>>, StatError> = equippables
            .par_iter()
            .map(|equippable| self.assemble_bucket(equippable))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let assembled: Result<Vec<Option<Item>>, StatError> = equippables
            .iter()
            .map(|equippable| self.assemble_bucket(equippable))
            .collect();

        Ok(assembled?.into_iter().flatten().collect())
    }
}
