//! Position-indexed partition of a sequence expression by item kind.
//!
//! Built once per query and read-only afterwards. Ordered containers are
//! used throughout so iteration is always by ascending original position.

use std::collections::{BTreeMap, BTreeSet};

use crate::item::{Item, ItemKind};

/// The items of one query grouped by kind, each keyed by original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    ints: BTreeMap<usize, i64>,
    gaps: BTreeSet<usize>,
    others: BTreeMap<usize, String>,
}

impl Partition {
    pub fn from_items(items: &[Item]) -> Self {
        let mut partition = Partition::default();
        for (position, item) in items.iter().enumerate() {
            match item {
                Item::Int(n) => {
                    partition.ints.insert(position, *n);
                }
                Item::Gap => {
                    partition.gaps.insert(position);
                }
                Item::Other(s) => {
                    partition.others.insert(position, s.clone());
                }
            }
        }
        partition
    }

    /// The integer at `position`, if that position holds one.
    pub fn int_at(&self, position: usize) -> Option<i64> {
        self.ints.get(&position).copied()
    }

    /// The kind of the item at `position`, or `None` past the end.
    pub fn kind_at(&self, position: usize) -> Option<ItemKind> {
        if self.ints.contains_key(&position) {
            Some(ItemKind::Int)
        } else if self.gaps.contains(&position) {
            Some(ItemKind::Gap)
        } else if self.others.contains_key(&position) {
            Some(ItemKind::Other)
        } else {
            None
        }
    }

    /// Positions holding a gap marker, in ascending order.
    pub fn gap_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.gaps.iter().copied()
    }

    pub fn has_gap(&self) -> bool {
        !self.gaps.is_empty()
    }

    /// Integer items by ascending position.
    pub fn ints(&self) -> &BTreeMap<usize, i64> {
        &self.ints
    }

    /// Unrecognised items by ascending position.
    pub fn others(&self) -> &BTreeMap<usize, String> {
        &self.others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(expr: &str) -> Vec<Item> {
        crate::parse_expr(expr).unwrap()
    }

    #[test]
    fn groups_by_kind_and_position() {
        let partition = Partition::from_items(&items("1, x, .., 4"));
        assert_eq!(partition.int_at(0), Some(1));
        assert_eq!(partition.int_at(1), None);
        assert_eq!(partition.kind_at(1), Some(ItemKind::Other));
        assert_eq!(partition.kind_at(2), Some(ItemKind::Gap));
        assert_eq!(partition.int_at(3), Some(4));
        assert_eq!(partition.kind_at(4), None);
        assert!(partition.has_gap());
    }

    #[test]
    fn gap_positions_ascend() {
        let partition = Partition::from_items(&items("1, .., 2, .., 3"));
        assert_eq!(partition.gap_positions().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn empty_query() {
        let partition = Partition::from_items(&[]);
        assert!(!partition.has_gap());
        assert!(partition.ints().is_empty());
        assert!(partition.others().is_empty());
    }
}
