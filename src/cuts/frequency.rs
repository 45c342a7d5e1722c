use std::collections::HashMap;

use itertools::Itertools;

use crate::cuts::path::Path;
use crate::wiring::Node;

/// Undirected wire, stored with the smaller endpoint first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(Node, Node);

impl Edge {
    pub fn new(a: Node, b: Node) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(&self) -> (Node, Node) {
        (self.0, self.1)
    }
}

/// How often each wire appeared on a path that reached its target.
#[derive(Clone, Debug, Default)]
pub struct EdgeFrequencies {
    counts: HashMap<Edge, usize>,
}

impl EdgeFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, edge: Edge) {
        *self.counts.entry(edge).or_insert(0) += 1;
    }

    /// Count every wire of `path` once, plus the wire from its tail to `target`.
    pub fn record_path(&mut self, path: &Path, target: Node) {
        // seen edges hold both directions; keep one of each pair
        for &(a, b) in path.seen_edges().iter().filter(|(a, b)| a < b) {
            self.record(Edge::new(a, b));
        }
        self.record(Edge::new(path.tail(), target));
    }

    pub fn merge(&mut self, other: EdgeFrequencies) {
        for (edge, count) in other.counts {
            *self.counts.entry(edge).or_insert(0) += count;
        }
    }

    pub fn count(&self, edge: Edge) -> usize {
        self.counts.get(&edge).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Wires by descending count; ties fall back to edge order so the ranking is stable.
    pub fn ranked(&self) -> Vec<(Edge, usize)> {
        self.counts
            .iter()
            .map(|(&edge, &count)| (edge, count))
            .sorted_by(|(edge_a, count_a), (edge_b, count_b)| {
                count_b.cmp(count_a).then(edge_a.cmp(edge_b))
            })
            .collect()
    }

    /// The `k` most frequent wires, fewer if not enough were seen.
    pub fn top(&self, k: usize) -> Vec<Edge> {
        self.ranked().into_iter().take(k).map(|(edge, _)| edge).collect()
    }

    /// Whether the `k`-th most frequent wire outnumbers the next one by at least `ratio`.
    ///
    /// Never true while `k` or fewer wires have been seen, since there is nothing
    /// to be separated from yet.
    pub fn is_separated(&self, k: usize, ratio: f64) -> bool {
        if k == 0 {
            return false;
        }
        let ranked = self.ranked();
        match (ranked.get(k - 1), ranked.get(k)) {
            (Some(&(_, weakest)), Some(&(_, strongest_rest))) => {
                weakest as f64 >= ratio * strongest_rest as f64
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cuts::frequency::{Edge, EdgeFrequencies};
    use crate::cuts::path::Path;

    #[test]
    fn edge_is_unordered() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        assert_eq!((1, 3), Edge::new(3, 1).endpoints());
    }

    #[test]
    fn record_path_counts_each_wire_once() {
        let mut path = Path::new(0);
        path.step(1);
        path.step(2);
        let mut frequencies = EdgeFrequencies::new();
        frequencies.record_path(&path, 3);
        assert_eq!(3, frequencies.len());
        assert_eq!(1, frequencies.count(Edge::new(0, 1)));
        assert_eq!(1, frequencies.count(Edge::new(1, 2)));
        assert_eq!(1, frequencies.count(Edge::new(3, 2)));
        assert_eq!(0, frequencies.count(Edge::new(0, 3)));
    }

    #[test]
    fn direct_neighbor_records_only_closing_wire() {
        let mut frequencies = EdgeFrequencies::new();
        frequencies.record_path(&Path::new(5), 2);
        assert_eq!(vec![(Edge::new(2, 5), 1)], frequencies.ranked());
    }

    #[test]
    fn ranking_breaks_ties_by_edge() {
        let mut frequencies = EdgeFrequencies::new();
        for edge in [Edge::new(4, 5), Edge::new(0, 1), Edge::new(2, 3), Edge::new(4, 5)] {
            frequencies.record(edge);
        }
        let expected = vec![Edge::new(4, 5), Edge::new(0, 1), Edge::new(2, 3)];
        assert_eq!(expected, frequencies.top(10));
        assert_eq!(vec![Edge::new(4, 5)], frequencies.top(1));
    }

    #[test]
    fn merge_sums_counts() {
        let mut left = EdgeFrequencies::new();
        left.record(Edge::new(0, 1));
        left.record(Edge::new(1, 2));
        let mut right = EdgeFrequencies::new();
        right.record(Edge::new(1, 0));
        right.record(Edge::new(2, 3));
        left.merge(right);
        assert_eq!(2, left.count(Edge::new(0, 1)));
        assert_eq!(1, left.count(Edge::new(1, 2)));
        assert_eq!(1, left.count(Edge::new(2, 3)));
        assert_eq!(3, left.len());
    }

    #[test]
    fn separation_needs_a_gap_after_k() {
        let mut frequencies = EdgeFrequencies::new();
        for _ in 0..4 {
            frequencies.record(Edge::new(0, 1));
            frequencies.record(Edge::new(1, 2));
        }
        // only two wires seen, nothing to separate from
        assert!(!frequencies.is_separated(2, 1.5));
        frequencies.record(Edge::new(2, 3));
        frequencies.record(Edge::new(2, 3));
        assert!(frequencies.is_separated(2, 2.0));
        assert!(!frequencies.is_separated(2, 2.5));
        assert!(!frequencies.is_separated(0, 1.0));
    }
}
