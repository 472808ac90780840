//! Disjoint half-open integer intervals and the piecewise-offset tables that
//! rewrite them. Day 5 pushes its seed ranges through a chain of these; day 19
//! borrows `Interval` for its four-axis part cubes.

/// Half-open integer range `[start, stop)`. `start == stop` means empty, and
/// all empty intervals are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Interval {
    pub start: i64,
    pub stop: i64,
}

impl Interval {
    pub fn new(start: i64, stop: i64) -> Interval {
        assert!(start <= stop, "interval start {} exceeds stop {}", start, stop);
        Interval {start, stop}
    }

    /// The singleton interval `[n, n + 1)`.
    pub fn point(n: i64) -> Interval {
        Interval {start: n, stop: n + 1}
    }

    pub fn len(&self) -> i64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Splits into `[start, at)` and `[at, stop)`, with `at` clamped to the
    /// interval; one half is empty when `at` falls outside.
    pub fn split_at(&self, at: i64) -> (Interval, Interval) {
        let at = at.clamp(self.start, self.stop);
        (Interval {start: self.start, stop: at}, Interval {start: at, stop: self.stop})
    }
}

/// Adds a constant offset to every integer in its source interval. Identity
/// outside the source is the table's business, not the rule's.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    source: Interval,
    offset: i64,
}

impl Rule {
    /// From an input row `destination_start source_start length`.
    pub fn from_endpoints(destination_start: i64, source_start: i64, length: i64) -> Rule {
        Rule {
            source: Interval::new(source_start, source_start + length),
            offset: destination_start - source_start,
        }
    }

    pub fn from_delta_and_range(offset: i64, source: Interval) -> Rule {
        Rule {source, offset}
    }

    /// The part of `interval` this rule applies to; empty if they are
    /// disjoint.
    pub fn restrict(&self, interval: Interval) -> Interval {
        let start = self.source.start.max(interval.start);
        let stop = self.source.stop.min(interval.stop);
        Interval {start, stop: stop.max(start)}
    }

    /// Where `interval` lands. Callers only pass subsets of the source.
    pub fn image(&self, interval: Interval) -> Interval {
        Interval {start: interval.start + self.offset, stop: interval.stop + self.offset}
    }
}

/// An ordered collection of rules acting as a piecewise function: each rule's
/// offset over its source, the identity everywhere else. Rule sources within
/// one table must not overlap; that is a malformed table and is not checked.
pub struct Table {
    rules: Vec<Rule>,
}

impl Table {
    pub fn new(rules: Vec<Rule>) -> Table {
        Table {rules}
    }

    /// Maps a single value through the table.
    pub fn lookup_scalar(&self, n: i64) -> i64 {
        self.rules.iter()
            .find(|rule| rule.source.start <= n && n < rule.source.stop)
            .map_or(n, |rule| n + rule.offset)
    }

    /// Maps a whole interval through the table. Pieces covered by a rule are
    /// offset; the gaps between rule sources pass through unchanged, so the
    /// result is the exact pointwise image.
    pub fn lookup_range(&self, interval: Interval) -> Vec<Interval> {
        let mut covered: Vec<(Interval, i64)> = self.rules.iter()
            .map(|rule| (rule.restrict(interval), rule.offset))
            .filter(|(piece, _)| !piece.is_empty())
            .collect();
        covered.sort_unstable_by_key(|(piece, _)| piece.start);

        let mut out = vec![];
        let mut cursor = interval.start;
        for (piece, offset) in covered {
            if cursor < piece.start {
                out.push(Interval {start: cursor, stop: piece.start});
            }
            out.push(Interval {start: piece.start + offset, stop: piece.stop + offset});
            cursor = piece.stop;
        }
        if cursor < interval.stop {
            out.push(Interval {start: cursor, stop: interval.stop});
        }
        out
    }
}

/// A set of integers as a collection of disjoint intervals. Order is
/// irrelevant; empty intervals are dropped on construction.
#[derive(Clone, Debug)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new(intervals: Vec<Interval>) -> IntervalSet {
        IntervalSet {intervals: intervals.into_iter().filter(|iv| !iv.is_empty()).collect()}
    }

    pub fn from_points(points: &[i64]) -> IntervalSet {
        IntervalSet {intervals: points.iter().map(|&n| Interval::point(n)).collect()}
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// How many integers the set holds.
    pub fn count(&self) -> i64 {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// `None` when no non-empty interval remains, which means the rule chain
    /// or the parse upstream went wrong.
    pub fn min_value(&self) -> Option<i64> {
        self.intervals.iter().map(|iv| iv.start).min()
    }
}

/// One rewrite stage. Builds a brand-new set; the input is left untouched.
pub fn apply_table(table: &Table, set: &IntervalSet) -> IntervalSet {
    IntervalSet::new(set.intervals.iter().flat_map(|&iv| table.lookup_range(iv)).collect())
}

/// Folds `apply_table` over the tables, left to right. Order matters.
pub fn apply_chain(tables: &[Table], set: IntervalSet) -> IntervalSet {
    tables.iter().fold(set, |set, table| apply_table(table, &set))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(i64, i64, i64)]) -> Table {
        Table::new(rows.iter().map(|&(dest, src, len)| Rule::from_endpoints(dest, src, len)).collect())
    }

    fn assert_disjoint(set: &IntervalSet) {
        let mut sorted = set.intervals().to_vec();
        sorted.sort_unstable_by_key(|iv| iv.start);
        for pair in sorted.windows(2) {
            assert!(pair[0].stop <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn scalar_lookup_is_identity_outside_rule_sources() {
        let t = table(&[(50, 98, 2), (52, 50, 48)]);
        assert_eq!(t.lookup_scalar(98), 50);
        assert_eq!(t.lookup_scalar(99), 51);
        assert_eq!(t.lookup_scalar(53), 55);
        assert_eq!(t.lookup_scalar(10), 10);
        assert_eq!(t.lookup_scalar(100), 100);
    }

    #[test]
    fn contained_interval_maps_whole() {
        let t = table(&[(50, 98, 2)]);
        assert_eq!(t.lookup_range(Interval::new(98, 100)), vec![Interval::new(50, 52)]);
    }

    #[test]
    fn rule_inside_interval_splits_into_three_pieces() {
        // source [98, 102) sits inside [90, 110)
        let t = table(&[(50, 98, 4)]);
        let pieces = t.lookup_range(Interval::new(90, 110));
        assert_eq!(pieces, vec![
            Interval::new(90, 98), Interval::new(50, 54), Interval::new(102, 110),
        ]);
        assert_eq!(pieces.iter().map(Interval::len).sum::<i64>(), 20);
    }

    #[test]
    fn uncovered_interval_passes_through_unchanged() {
        let t = table(&[(50, 98, 2)]);
        assert_eq!(t.lookup_range(Interval::new(0, 10)), vec![Interval::new(0, 10)]);
    }

    #[test]
    fn zero_length_interval_contributes_nothing() {
        let t = table(&[(50, 98, 2)]);
        assert_eq!(t.lookup_range(Interval::new(98, 98)), vec![]);
        let out = apply_table(&t, &IntervalSet::new(vec![Interval::new(99, 99)]));
        assert_eq!(out.count(), 0);
        assert_eq!(out.min_value(), None);
    }

    #[test]
    fn apply_table_preserves_count_and_disjointness() {
        let t = table(&[(0, 15, 37), (37, 52, 2), (39, 0, 15)]);
        let set = IntervalSet::new(vec![
            Interval::new(10, 20), Interval::new(40, 60), Interval::new(90, 95),
        ]);
        let out = apply_table(&t, &set);
        assert_eq!(out.count(), set.count());
        assert_disjoint(&out);
    }

    #[test]
    fn empty_chain_is_the_identity() {
        let set = IntervalSet::new(vec![Interval::new(5, 9), Interval::new(20, 21)]);
        assert_eq!(apply_chain(&[], set.clone()).intervals(), set.intervals());
    }

    #[test]
    fn singleton_chain_equals_one_application() {
        let tables = [table(&[(50, 98, 2), (52, 50, 48)])];
        let set = IntervalSet::new(vec![Interval::new(79, 93), Interval::new(55, 68)]);
        assert_eq!(
            apply_chain(&tables, set.clone()).intervals(),
            apply_table(&tables[0], &set).intervals(),
        );
    }

    #[test]
    fn both_rule_constructors_agree() {
        let a = Rule::from_endpoints(50, 98, 2);
        let b = Rule::from_delta_and_range(-48, Interval::new(98, 100));
        let probe = Interval::new(0, 200);
        assert_eq!(a.restrict(probe), b.restrict(probe));
        assert_eq!(a.image(Interval::new(98, 100)), b.image(Interval::new(98, 100)));
    }

    #[test]
    fn restricting_a_disjoint_interval_is_empty() {
        let rule = Rule::from_endpoints(50, 98, 2);
        assert!(rule.restrict(Interval::new(0, 98)).is_empty());
        assert!(rule.restrict(Interval::new(100, 200)).is_empty());
    }

    #[test]
    fn point_seeds_become_singleton_intervals() {
        let set = IntervalSet::from_points(&[79, 14, 55, 13]);
        assert_eq!(set.count(), 4);
        assert_eq!(set.min_value(), Some(13));
    }

    #[test]
    fn split_at_clamps_to_the_interval() {
        let iv = Interval::new(1, 4001);
        let (below, above) = iv.split_at(1351);
        assert_eq!((below, above), (Interval::new(1, 1351), Interval::new(1351, 4001)));
        let (below, above) = iv.split_at(5000);
        assert!(above.is_empty());
        assert_eq!(below, iv);
    }
}
