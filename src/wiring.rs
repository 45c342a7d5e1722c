use std::collections::HashMap;
use std::str::FromStr;

use log::debug;
use petgraph::graphmap::UnGraphMap;

use crate::connectivity::is_fully_connected;
use crate::cuts::Edge;
use crate::error::{ParseError, ParseErrorKind};

/// Compact identifier of a component, assigned in discovery order.
pub type Node = usize;

pub type WiringGraph = UnGraphMap<Node, ()>;

/// An undirected component wiring diagram.
///
/// Labels only live at the boundary; the graph itself is keyed by [`Node`].
/// Nodes are inserted in identifier order, so node `0` is the first label seen
/// in the input.
#[derive(Clone, Debug)]
pub struct Wiring {
    graph: WiringGraph,
    labels: Vec<String>,
    index: HashMap<String, Node>,
}

impl Wiring {
    /// Build a wiring from `<label>: <label> <label> ...` lines.
    ///
    /// Blank lines are skipped. The first malformed line aborts the build.
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut labels: Vec<String> = vec![];
        let mut index: HashMap<String, Node> = HashMap::new();
        let mut edges: Vec<(Node, Node)> = vec![];

        let mut intern = |label: &str| -> Node {
            if let Some(&node) = index.get(label) {
                return node;
            }
            let node = labels.len();
            labels.push(label.to_string());
            index.insert(label.to_string(), node);
            node
        };

        for (number, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let (source, targets) = split_line(number + 1, line)?;
            let source = intern(source);
            for target in targets {
                edges.push((source, intern(target)));
            }
        }

        let mut graph = WiringGraph::with_capacity(labels.len(), edges.len());
        for node in 0..labels.len() {
            graph.add_node(node);
        }
        for (a, b) in edges {
            // repeated declarations collapse onto the existing edge
            graph.add_edge(a, b, ());
        }
        debug!(
            "built wiring with {} components and {} wires",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            labels,
            index,
        })
    }

    pub fn graph(&self) -> &WiringGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, node: Node) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    pub fn node(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Whether every component can reach every other one.
    pub fn is_connected(&self) -> bool {
        is_fully_connected(&self.graph)
    }

    /// Labels in identifier order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Derive a separate graph with `cut` removed; `self` stays untouched.
    pub fn without_edges(&self, cut: &[Edge]) -> WiringGraph {
        let mut graph = self.graph.clone();
        for edge in cut {
            let (a, b) = edge.endpoints();
            if graph.remove_edge(a, b).is_none() {
                debug!("wire {}-{} was not present", a, b);
            }
        }
        graph
    }
}

impl FromStr for Wiring {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

/// Split a non-blank line into its source label and target labels.
fn split_line(number: usize, line: &str) -> Result<(&str, Vec<&str>), ParseError> {
    let error = |kind| ParseError::new(number, line, kind);

    let mut parts = line.split(':');
    let source = parts.next().unwrap_or_default().trim();
    let targets = parts.next().ok_or_else(|| error(ParseErrorKind::MissingColon))?;
    if parts.next().is_some() {
        return Err(error(ParseErrorKind::MultipleColons));
    }
    if source.is_empty() || source.contains(char::is_whitespace) {
        return Err(error(ParseErrorKind::InvalidSource));
    }

    let targets: Vec<&str> = targets.split_whitespace().collect();
    if targets.is_empty() {
        return Err(error(ParseErrorKind::NoTargets));
    }
    if targets.contains(&source) {
        return Err(error(ParseErrorKind::SelfLoop));
    }
    Ok((source, targets))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::cuts::Edge;
    use crate::error::ParseErrorKind;
    use crate::wiring::Wiring;

    fn triangle_with_tail() -> Wiring {
        Wiring::parse(["a: b c", "b: c", "c: a", "d: a"]).unwrap()
    }

    #[test]
    fn triangle_with_tail_shape() {
        let wiring = triangle_with_tail();
        assert_eq!(4, wiring.node_count());
        // c: a repeats a: c
        assert_eq!(4, wiring.edge_count());
        assert!(wiring.is_connected());
    }

    #[test]
    fn adjacency_is_symmetric_without_self_loops() {
        let wiring = Wiring::parse([
            "jqt: rhn xhk nvd",
            "rsh: frs pzl lsr",
            "xhk: hfx",
            "cmg: qnr nvd lhk bvb",
            "rhn: xhk bvb hfx",
        ])
        .unwrap();
        let graph = wiring.graph();
        for a in graph.nodes() {
            for b in graph.neighbors(a) {
                assert_ne!(a, b);
                assert!(graph.neighbors(b).any(|n| n == a));
            }
        }
    }

    #[test]
    fn identifiers_follow_discovery_order() {
        let wiring = triangle_with_tail();
        let expected = vec!["a", "b", "c", "d"];
        assert_eq!(expected, wiring.labels());
        assert_eq!(Some(0), wiring.node("a"));
        assert_eq!(Some(3), wiring.node("d"));
        assert_eq!(None, wiring.node("e"));
    }

    #[test]
    fn label_mapping_is_bijective() {
        let wiring = Wiring::parse(["x: y z w", "y: v", "u: x z"]).unwrap();
        let mut seen = HashSet::new();
        for node in wiring.graph().nodes() {
            let label = wiring.label(node).unwrap();
            assert!(seen.insert(label.to_string()));
            assert_eq!(Some(node), wiring.node(label));
        }
        assert_eq!(wiring.node_count(), seen.len());
        assert_eq!(None, wiring.label(wiring.node_count()));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let wiring: Wiring = "a: b\n\nb: c\n   \n".parse().unwrap();
        assert_eq!(3, wiring.node_count());
        assert_eq!(2, wiring.edge_count());
    }

    #[test]
    fn empty_input_builds_empty_graph() {
        let wiring = Wiring::parse(Vec::<String>::new()).unwrap();
        assert!(wiring.is_empty());
        assert_eq!(0, wiring.node_count());
    }

    #[test]
    fn malformed_lines_are_rejected_with_line_number() {
        let cases = [
            ("a b c", ParseErrorKind::MissingColon),
            ("a: b: c", ParseErrorKind::MultipleColons),
            (": b c", ParseErrorKind::InvalidSource),
            ("a x: b", ParseErrorKind::InvalidSource),
            ("a:", ParseErrorKind::NoTargets),
            ("a:   ", ParseErrorKind::NoTargets),
            ("a: b a", ParseErrorKind::SelfLoop),
        ];
        for (line, kind) in cases {
            let err = Wiring::parse(["x: y", "", line]).unwrap_err();
            assert_eq!(kind, err.kind, "line {:?}", line);
            assert_eq!(3, err.line);
            assert_eq!(line, err.content);
        }
    }

    #[test]
    fn without_edges_leaves_base_graph_intact() {
        let wiring = triangle_with_tail();
        let a = wiring.node("a").unwrap();
        let d = wiring.node("d").unwrap();
        let cut = wiring.without_edges(&[Edge::new(d, a)]);
        assert!(!cut.contains_edge(a, d));
        assert_eq!(3, cut.edge_count());
        assert!(wiring.graph().contains_edge(a, d));
        assert_eq!(4, wiring.edge_count());
    }
}
