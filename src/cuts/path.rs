use std::collections::HashSet;

use crate::wiring::Node;

/// A walk from a fixed start that never reuses a wire.
///
/// Nodes may repeat as long as they are entered through a different wire.
#[derive(Clone, Debug)]
pub struct Path {
    nodes: Vec<Node>,
    seen: HashSet<(Node, Node)>,
}

impl Path {
    pub fn new(start: Node) -> Self {
        Self {
            nodes: vec![start],
            seen: HashSet::new(),
        }
    }

    /// The node the path currently ends at.
    pub fn tail(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether moving to `node` avoids every wire already walked, in either direction.
    pub fn can_step(&self, node: Node) -> bool {
        let tail = self.tail();
        !self.seen.contains(&(tail, node)) && !self.seen.contains(&(node, tail))
    }

    /// Extend the path to `node`. Callers check [`Path::can_step`] first.
    pub fn step(&mut self, node: Node) {
        let tail = self.tail();
        debug_assert!(self.can_step(node), "wire {}-{} walked twice", tail, node);
        self.seen.insert((tail, node));
        self.seen.insert((node, tail));
        self.nodes.push(node);
    }

    /// Walked wires, both directions of each.
    pub fn seen_edges(&self) -> &HashSet<(Node, Node)> {
        &self.seen
    }
}

#[cfg(test)]
mod tests {
    use crate::cuts::path::Path;

    #[test]
    fn new_path_has_no_edges() {
        let path = Path::new(4);
        assert_eq!(4, path.tail());
        assert_eq!(&[4], path.nodes());
        assert!(path.seen_edges().is_empty());
    }

    #[test]
    fn step_records_both_directions() {
        let mut path = Path::new(0);
        path.step(1);
        path.step(2);
        assert_eq!(2, path.tail());
        assert_eq!(&[0, 1, 2], path.nodes());
        let expected = [(0, 1), (1, 0), (1, 2), (2, 1)];
        assert_eq!(4, path.seen_edges().len());
        assert!(expected.iter().all(|edge| path.seen_edges().contains(edge)));
    }

    #[test]
    fn cannot_walk_back_over_the_same_wire() {
        let mut path = Path::new(0);
        path.step(1);
        assert!(!path.can_step(0));
        path.step(2);
        assert!(!path.can_step(1));
        assert!(path.can_step(0));
    }

    #[test]
    fn node_may_repeat_through_another_wire() {
        // 0 - 1 - 2 - 0 closes a triangle back at the start
        let mut path = Path::new(0);
        path.step(1);
        path.step(2);
        path.step(0);
        assert_eq!(&[0, 1, 2, 0], path.nodes());
        assert!(!path.can_step(1));
        assert!(!path.can_step(2));
        assert!(path.can_step(3));
    }

    #[test]
    fn clones_grow_independently() {
        let mut path = Path::new(0);
        path.step(1);
        let mut branch = path.clone();
        branch.step(2);
        assert_eq!(1, path.tail());
        assert!(path.can_step(2));
        assert!(!branch.can_step(1));
    }
}
