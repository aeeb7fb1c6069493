use std::fmt::{Display, Formatter};
use std::str::FromStr;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Incoming, Outgoing};
use thiserror::Error;

/// Node identifier. Identical across a network and every network randomized from it.
pub type Node = NodeIndex;

/// Sign of a synaptic connection.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Polarity {
    /// An excitatory connection, written `+`.
    Excitatory,
    /// An inhibitory connection, written `-`.
    Inhibitory,
    /// A connection with mixed or unclear sign, written `complex`.
    Complex,
}

impl Polarity {
    /// The textual symbol of the polarity.
    pub fn symbol(&self) -> &'static str {
        match self {
            Polarity::Excitatory => "+",
            Polarity::Inhibitory => "-",
            Polarity::Complex => "complex",
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A polarity could not be parsed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown polarity (got {0})")]
pub struct UnknownPolarityError(pub String);

impl FromStr for Polarity {
    type Err = UnknownPolarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "e" | "excitatory" => Ok(Polarity::Excitatory),
            "-" | "i" | "inhibitory" => Ok(Polarity::Inhibitory),
            "complex" | "c" => Ok(Polarity::Complex),
            _ => Err(UnknownPolarityError(s.to_string())),
        }
    }
}

/// Edge attributes of a [Network].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Synapse {
    /// Sign of the connection, if known.
    pub polarity: Option<Polarity>,
    /// Number of chemical synapses.
    pub synapses: u32,
    /// Number of gap junctions.
    pub gap_junctions: u32,
}

impl Synapse {
    /// A connection with the given polarity and no counters.
    pub fn with_polarity(polarity: Polarity) -> Self {
        Self { polarity: Some(polarity), ..Self::default() }
    }

    fn merge(&mut self, other: Synapse) {
        self.synapses += other.synapses;
        self.gap_junctions += other.gap_junctions;
        if self.polarity.is_none() {
            self.polarity = other.polarity;
        }
    }
}

/// A simple directed network with optional node names and edge attributes.
///
/// Nodes are numbered `0..node_count()`. There is at most one edge per ordered pair of nodes.
#[derive(Clone, Debug, Default)]
pub struct Network {
    graph: DiGraph<(), Synapse>,
    names: Vec<String>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network with `n` nodes and no edges.
    pub fn with_nodes(n: usize) -> Self {
        let mut graph = DiGraph::with_capacity(n, 0);
        for _ in 0..n {
            graph.add_node(());
        }
        Self { graph, names: vec![] }
    }

    /// Create a network from a list of directed edges. Node `i` of the result is the integer `i`.
    ///
    /// ```rust
    /// use network_motifs::Network;
    ///
    /// let network = Network::from_edges([(1, 2), (2, 3), (1, 3)]);
    /// assert_eq!(network.node_count(), 4);
    /// assert_eq!(network.edge_count(), 3);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut network = Self::new();
        for (u, v) in edges {
            network.add_edge(u as usize, v as usize, Synapse::default());
        }
        network
    }

    pub(crate) fn from_parts(graph: DiGraph<(), Synapse>, names: Vec<String>) -> Self {
        Self { graph, names }
    }

    /// Add a node and return its index.
    pub fn add_node(&mut self) -> Node {
        self.graph.add_node(())
    }

    fn ensure_node(&mut self, u: usize) {
        while self.graph.node_count() <= u {
            self.graph.add_node(());
        }
    }

    /// Add the edge `source -> target`, creating missing nodes.
    ///
    /// If the edge already exists, the counters are added to the existing edge and its polarity is kept.
    pub fn add_edge(&mut self, source: usize, target: usize, synapse: Synapse) {
        self.ensure_node(source.max(target));
        let (u, v) = (Node::new(source), Node::new(target));
        match self.graph.find_edge(u, v) {
            Some(e) => self.graph[e].merge(synapse),
            None => {
                self.graph.add_edge(u, v, synapse);
            }
        }
    }

    /// Attach names to the nodes. The `i`-th name belongs to node `i`.
    pub fn set_names(&mut self, names: Vec<String>) {
        if !names.is_empty() {
            self.ensure_node(names.len() - 1);
        }
        self.names = names;
    }

    /// The name of a node, if one was attached.
    pub fn name(&self, u: Node) -> Option<&str> {
        self.names.get(u.index()).map(String::as_str)
    }

    /// The name of a node, or its index when it is unnamed.
    pub fn label(&self, u: Node) -> String {
        match self.name(u) {
            Some(name) => name.to_string(),
            None => u.index().to_string(),
        }
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    /// Return the number of nodes.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all nodes in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        self.graph.node_indices()
    }

    /// Iterate over all edges as `(source, target)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }

    /// Iterate over all edges together with their attributes.
    pub fn synapses(&self) -> impl Iterator<Item = (Node, Node, &Synapse)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target(), e.weight()))
    }

    /// Returns whether the edge `u -> v` exists.
    #[inline]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.contains_edge(u, v)
    }

    /// The attributes of the edge `u -> v`.
    pub fn synapse(&self, u: Node, v: Node) -> Option<&Synapse> {
        self.graph.find_edge(u, v).map(|e| &self.graph[e])
    }

    /// The polarity of the edge `u -> v`.
    pub fn polarity(&self, u: Node, v: Node) -> Option<Polarity> {
        self.synapse(u, v).and_then(|s| s.polarity)
    }

    /// Targets of the edges leaving `u`.
    pub fn successors(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_directed(u, Outgoing)
    }

    /// Sources of the edges entering `u`.
    pub fn predecessors(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_directed(u, Incoming)
    }

    /// Number of edges leaving `u`.
    pub fn out_degree(&self, u: Node) -> usize {
        self.graph.edges_directed(u, Outgoing).count()
    }

    /// Number of edges entering `u`.
    pub fn in_degree(&self, u: Node) -> usize {
        self.graph.edges_directed(u, Incoming).count()
    }

    /// Sorted neighbors of `u` ignoring edge directions. `u` itself is never included.
    pub fn neighbors_undirected(&self, u: Node) -> Vec<Node> {
        let mut neighbors: Vec<_> = self.graph.neighbors_undirected(u).filter(|&v| v != u).collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// The sorted edges of the subgraph induced by `nodes`.
    pub fn induced_edges(&self, nodes: &[Node]) -> Vec<(Node, Node)> {
        let mut edges = vec![];
        for &u in nodes {
            for v in self.successors(u) {
                if nodes.contains(&v) {
                    edges.push((u, v));
                }
            }
        }
        edges.sort_unstable();
        edges
    }

    /// Number of edges `u -> u`.
    pub fn self_loop_count(&self) -> usize {
        self.edges().filter(|(u, v)| u == v).count()
    }

    /// Returns whether every edge carries a polarity.
    pub fn uses_polarity(&self) -> bool {
        self.edge_count() > 0 && self.graph.edge_weights().all(|s| s.polarity.is_some())
    }

    /// The sorted set of polarities occurring in the network.
    pub fn polarity_alphabet(&self) -> Vec<Polarity> {
        let mut alphabet: Vec<_> = self.graph.edge_weights().filter_map(|s| s.polarity).collect();
        alphabet.sort_unstable();
        alphabet.dedup();
        alphabet
    }

    /// The ratio of excitatory to inhibitory edges.
    ///
    /// Returns `None` if there are no inhibitory edges.
    pub fn polarity_ratio(&self) -> Option<f64> {
        let count = |p: Polarity| self.graph.edge_weights().filter(|s| s.polarity == Some(p)).count();
        let inhibitory = count(Polarity::Inhibitory);
        if inhibitory == 0 {
            return None;
        }
        Some(count(Polarity::Excitatory) as f64 / inhibitory as f64)
    }

    /// Summary statistics of the network.
    pub fn properties(&self) -> NetworkProperties {
        let n = self.node_count();
        let m = self.edge_count();
        let density = if n > 1 { m as f64 / (n * (n - 1)) as f64 } else { 0.0 };
        let mutual_pairs = self.edges().filter(|&(u, v)| u < v && self.has_edge(v, u)).count();
        let max_in_degree = self.nodes().map(|u| self.in_degree(u)).max().unwrap_or(0);
        let max_out_degree = self.nodes().map(|u| self.out_degree(u)).max().unwrap_or(0);
        let mean_degree = if n > 0 { 2.0 * m as f64 / n as f64 } else { 0.0 };
        NetworkProperties {
            nodes: n,
            edges: m,
            density,
            self_loops: self.self_loop_count(),
            mutual_pairs,
            mean_degree,
            max_in_degree,
            max_out_degree,
            polarity_ratio: self.polarity_ratio(),
        }
    }

    /// The underlying `petgraph` graph.
    pub fn graph(&self) -> &DiGraph<(), Synapse> {
        &self.graph
    }
}

/// Summary statistics of a [Network].
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkProperties {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Fraction of possible directed edges (without self-loops) that are present.
    pub density: f64,
    /// Number of self-loops.
    pub self_loops: usize,
    /// Number of node pairs connected in both directions.
    pub mutual_pairs: usize,
    /// Mean total degree.
    pub mean_degree: f64,
    /// Maximum in-degree.
    pub max_in_degree: usize,
    /// Maximum out-degree.
    pub max_out_degree: usize,
    /// Ratio of excitatory to inhibitory edges.
    pub polarity_ratio: Option<f64>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parallel_edges_are_merged() {
        let mut network = Network::new();
        network.add_edge(0, 1, Synapse { polarity: Some(Polarity::Excitatory), synapses: 3, gap_junctions: 0 });
        network.add_edge(0, 1, Synapse { polarity: Some(Polarity::Inhibitory), synapses: 2, gap_junctions: 1 });
        assert_eq!(network.edge_count(), 1);
        let synapse = network.synapse(Node::new(0), Node::new(1)).unwrap();
        assert_eq!(synapse.synapses, 5);
        assert_eq!(synapse.gap_junctions, 1);
        assert_eq!(synapse.polarity, Some(Polarity::Excitatory));
    }

    #[test]
    fn induced_edges_are_sorted() {
        let network = Network::from_edges([(2, 0), (0, 1), (1, 2), (2, 3)]);
        let nodes = [Node::new(0), Node::new(1), Node::new(2)];
        assert_eq!(
            network.induced_edges(&nodes),
            [(0, 1), (1, 2), (2, 0)].map(|(u, v)| (Node::new(u), Node::new(v)))
        );
    }

    #[test]
    fn undirected_neighbors() {
        let network = Network::from_edges([(0, 1), (1, 0), (2, 0), (0, 0)]);
        assert_eq!(network.neighbors_undirected(Node::new(0)), [Node::new(1), Node::new(2)]);
    }

    #[test]
    fn polarity_parsing() {
        assert_eq!("+".parse::<Polarity>(), Ok(Polarity::Excitatory));
        assert_eq!(" - ".parse::<Polarity>(), Ok(Polarity::Inhibitory));
        assert_eq!("Complex".parse::<Polarity>(), Ok(Polarity::Complex));
        assert_eq!("x".parse::<Polarity>(), Err(UnknownPolarityError("x".to_string())));
    }

    #[test]
    fn properties() {
        let mut network = Network::from_edges([(0, 1), (1, 0), (1, 2)]);
        network.set_names(vec!["AVAL".to_string(), "AVAR".to_string()]);
        let properties = network.properties();
        assert_eq!(properties.nodes, 3);
        assert_eq!(properties.edges, 3);
        assert_eq!(properties.mutual_pairs, 1);
        assert_eq!(properties.max_out_degree, 2);
        assert_eq!(properties.polarity_ratio, None);
        assert!((properties.density - 0.5).abs() < 1e-12);
        assert_eq!(network.label(Node::new(1)), "AVAR");
        assert_eq!(network.label(Node::new(2)), "2");
    }

    #[test]
    fn polarity_ratio() {
        let mut network = Network::new();
        network.add_edge(0, 1, Synapse::with_polarity(Polarity::Excitatory));
        network.add_edge(1, 2, Synapse::with_polarity(Polarity::Excitatory));
        network.add_edge(2, 0, Synapse::with_polarity(Polarity::Inhibitory));
        assert!(network.uses_polarity());
        assert_eq!(network.polarity_ratio(), Some(2.0));
        assert_eq!(network.polarity_alphabet(), [Polarity::Excitatory, Polarity::Inhibitory]);
    }
}
