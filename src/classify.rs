//! The sequence-gap classifier.
//!
//! For each gap marker in a query, collects the maximal contiguous run of
//! integer items on either side of it. A run stops silently at the first
//! position that is missing or holds a non-integer; no error is ever raised.

use std::collections::BTreeMap;

use crate::item::Item;
use crate::partition::Partition;

/// The integer runs adjacent to one gap position, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapRuns {
    /// Integers immediately preceding the gap, left to right.
    pub before: Vec<i64>,
    /// Integers immediately following the gap, left to right.
    pub after: Vec<i64>,
}

/// The result of classifying one query: its partition plus one [`GapRuns`]
/// per gap position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    partition: Partition,
    runs: BTreeMap<usize, GapRuns>,
}

/// Classify a query: partition it by kind, then collect the integer runs
/// around every gap marker.
///
/// Each gap position gets its own independent [`GapRuns`]; see
/// [`Classification::before`] and [`Classification::after`] for the
/// single-gap convenience view.
pub fn classify(items: &[Item]) -> Classification {
    let partition = Partition::from_items(items);
    let mut runs = BTreeMap::new();

    for gap in partition.gap_positions() {
        let mut after = Vec::new();
        let mut position = gap + 1;
        while let Some(n) = partition.int_at(position) {
            after.push(n);
            position += 1;
        }

        let mut before = Vec::new();
        let mut position = gap;
        while position > 0 {
            position -= 1;
            match partition.int_at(position) {
                Some(n) => before.push(n),
                None => break,
            }
        }
        // Backward scan collected right-to-left.
        before.reverse();

        runs.insert(gap, GapRuns { before, after });
    }

    Classification { partition, runs }
}

impl Classification {
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// All gap runs, keyed by gap position in ascending order.
    pub fn runs(&self) -> &BTreeMap<usize, GapRuns> {
        &self.runs
    }

    /// The highest-position gap and its runs, if the query has a gap at all.
    pub fn last_gap(&self) -> Option<(usize, &GapRuns)> {
        self.runs.iter().next_back().map(|(p, r)| (*p, r))
    }

    /// Before-run of the last gap; empty when the query has no gap marker.
    pub fn before(&self) -> &[i64] {
        self.last_gap().map_or(&[], |(_, r)| r.before.as_slice())
    }

    /// After-run of the last gap; empty when the query has no gap marker.
    pub fn after(&self) -> &[i64] {
        self.last_gap().map_or(&[], |(_, r)| r.after.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_expr;

    fn classified(expr: &str) -> Classification {
        classify(&parse_expr(expr).unwrap())
    }

    #[test]
    fn gap_at_end() {
        let c = classified("1, 2, ..");
        assert_eq!(c.before(), &[1, 2]);
        assert!(c.after().is_empty());
    }

    #[test]
    fn gap_at_start() {
        let c = classified(".., 2, 4");
        assert!(c.before().is_empty());
        assert_eq!(c.after(), &[2, 4]);
    }

    #[test]
    fn gap_in_middle() {
        let c = classified("1, 2, .., 3, 4");
        assert_eq!(c.before(), &[1, 2]);
        assert_eq!(c.after(), &[3, 4]);
    }

    #[test]
    fn no_gap_marker() {
        let c = classified("1, 2, 3");
        assert!(c.before().is_empty());
        assert!(c.after().is_empty());
        assert!(c.runs().is_empty());
        assert_eq!(c.last_gap(), None);
    }

    #[test]
    fn non_integer_stops_scan() {
        // The scan stops at "x" immediately, so the before-run is empty even
        // though an integer sits one position further out.
        let c = classified("1, x, .., 2");
        assert!(c.before().is_empty());
        assert_eq!(c.after(), &[2]);
    }

    #[test]
    fn runs_do_not_cross_another_gap() {
        let c = classified("1, .., 2, .., 3");
        let runs = c.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[&1], GapRuns { before: vec![1], after: vec![2] });
        assert_eq!(runs[&3], GapRuns { before: vec![2], after: vec![3] });
        // Convenience accessors report the last gap.
        assert_eq!(c.before(), &[2]);
        assert_eq!(c.after(), &[3]);
    }

    #[test]
    fn negative_terms() {
        let c = classified("-4, -2, .., 2");
        assert_eq!(c.before(), &[-4, -2]);
        assert_eq!(c.after(), &[2]);
    }

    #[test]
    fn adjacent_gaps() {
        let c = classified("1, .., ..");
        assert_eq!(c.runs()[&1], GapRuns { before: vec![1], after: vec![] });
        assert_eq!(c.runs()[&2], GapRuns { before: vec![], after: vec![] });
    }

    #[test]
    fn empty_query() {
        let c = classify(&[]);
        assert!(c.runs().is_empty());
        assert!(c.before().is_empty());
        assert!(c.after().is_empty());
    }
}
