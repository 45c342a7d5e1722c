use std::collections::HashSet;
use std::hash::Hash;

use petgraph::prelude::Bfs;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, NodeCount, Visitable};

/// All nodes reachable from `start`, `start` included.
pub fn reachable_from<G>(graph: G, start: G::NodeId) -> HashSet<G::NodeId>
where
    G: IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    let mut reachable = HashSet::new();

    // plain BFS over the symmetric adjacency
    let mut bfs = Bfs::new(graph, start);
    while let Some(node) = bfs.next(graph) {
        reachable.insert(node);
    }

    reachable
}

/// Whether every node can reach every other node. An empty graph is connected.
pub fn is_fully_connected<G>(graph: G) -> bool
where
    G: IntoNeighbors + IntoNodeIdentifiers + NodeCount + Visitable,
    G::NodeId: Hash + Eq,
{
    match graph.node_identifiers().next() {
        Some(first) => reachable_from(graph, first).len() == graph.node_count(),
        None => true,
    }
}
