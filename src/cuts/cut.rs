use log::warn;

use crate::connectivity::reachable_from;
use crate::cuts::frequency::Edge;
use crate::wiring::{Node, Wiring};

/// Two groups of components and the wires removed between them.
#[derive(Clone, Debug)]
pub struct Cut {
    pub source_set: Vec<Node>,
    pub destination_set: Vec<Node>,
    pub cut_set: Vec<Edge>,
    pub size: usize,
}

impl Cut {
    pub fn new(source_set: Vec<Node>, destination_set: Vec<Node>, cut_set: Vec<Edge>) -> Self {
        let size = cut_set.len();
        Self {
            source_set,
            destination_set,
            cut_set,
            size,
        }
    }

    /// Remove `cut_set` from a copy of the wiring and split the nodes into those
    /// reachable from `start` and the rest.
    pub fn from_removal(wiring: &Wiring, cut_set: Vec<Edge>, start: Node) -> Self {
        if wiring.is_empty() {
            return Self::new(vec![], vec![], cut_set);
        }

        let remaining = wiring.without_edges(&cut_set);
        let reachable = reachable_from(&remaining, start);
        let (mut source_set, mut destination_set): (Vec<Node>, Vec<Node>) =
            remaining.nodes().partition(|node| reachable.contains(node));
        source_set.sort_unstable();
        destination_set.sort_unstable();

        // the unreached side should be a single group too
        if let Some(&other) = destination_set.first() {
            if reachable_from(&remaining, other).len() < destination_set.len() {
                warn!("removing {:?} left more than two groups", cut_set);
            }
        }

        Self::new(source_set, destination_set, cut_set)
    }

    /// Whether the removal actually split the wiring.
    pub fn is_split(&self) -> bool {
        !self.source_set.is_empty() && !self.destination_set.is_empty()
    }

    /// Product of the two group sizes.
    pub fn product(&self) -> usize {
        self.source_set.len() * self.destination_set.len()
    }
}

impl PartialEq for Cut {
    fn eq(&self, other: &Self) -> bool {
        self.source_set == other.source_set
            && self.destination_set == other.destination_set
            && self.cut_set == other.cut_set
    }
}
