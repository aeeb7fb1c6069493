use std::fmt::{Display, Formatter};

use crate::census::Occurrence;
use crate::labeling::{nodes_of, permutations, subgraph_of, AdjacencyMatrix, SubgraphId};
use crate::network::{Node, Polarity};
use crate::significance::MotifVerdict;

/// Subgraphs with an established name in the motif literature.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum MotifName {
    /// `a <-> b`
    MutualRegulation,
    /// `a -> b, a -> c`, also known as SIM-2.
    FanOut,
    /// `b -> a, c -> a`
    FanIn,
    /// `a -> b, b -> c`
    Cascade,
    /// `a -> b, a -> c, b -> c`
    FeedForward,
    /// `a -> c, a -> d, b -> c, b -> d`
    BiFan,
    /// `a -> b, a -> c, b -> d, c -> d`
    BiParallel,
    /// `a -> b, a -> c, a -> d`
    Sim3,
}

impl MotifName {
    /// All named motifs.
    pub const ALL: [MotifName; 8] = [
        MotifName::MutualRegulation,
        MotifName::FanOut,
        MotifName::FanIn,
        MotifName::Cascade,
        MotifName::FeedForward,
        MotifName::BiFan,
        MotifName::BiParallel,
        MotifName::Sim3,
    ];

    /// Number of nodes.
    pub fn size(&self) -> usize {
        match self {
            MotifName::MutualRegulation => 2,
            MotifName::FanOut | MotifName::FanIn | MotifName::Cascade | MotifName::FeedForward => 3,
            MotifName::BiFan | MotifName::BiParallel | MotifName::Sim3 => 4,
        }
    }

    /// The edges of the motif on the nodes `0..size()`.
    pub fn pattern(&self) -> &'static [(usize, usize)] {
        match self {
            MotifName::MutualRegulation => &[(0, 1), (1, 0)],
            MotifName::FanOut => &[(0, 1), (0, 2)],
            MotifName::FanIn => &[(1, 0), (2, 0)],
            MotifName::Cascade => &[(0, 1), (1, 2)],
            MotifName::FeedForward => &[(0, 1), (0, 2), (1, 2)],
            MotifName::BiFan => &[(0, 2), (0, 3), (1, 2), (1, 3)],
            MotifName::BiParallel => &[(0, 1), (0, 2), (1, 3), (2, 3)],
            MotifName::Sim3 => &[(0, 1), (0, 2), (0, 3)],
        }
    }

    /// The adjacency matrix of [MotifName::pattern].
    pub fn matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(self.size(), self.pattern().iter().copied())
    }

    /// The representative of the isomorphism class of the motif.
    pub fn class_id(&self) -> SubgraphId {
        self.matrix().smallest_relabeling()
    }

    /// The name of the class with representative `class` among subgraphs with `k` nodes.
    pub fn identify(class: SubgraphId, k: usize) -> Option<MotifName> {
        MotifName::ALL.into_iter().find(|name| name.size() == k && name.class_id() == class)
    }

    /// The name in snake case.
    pub fn label(&self) -> &'static str {
        match self {
            MotifName::MutualRegulation => "mutual_regulation",
            MotifName::FanOut => "fan_out",
            MotifName::FanIn => "fan_in",
            MotifName::Cascade => "cascade",
            MotifName::FeedForward => "feed_forward",
            MotifName::BiFan => "bi_fan",
            MotifName::BiParallel => "bi_parallel",
            MotifName::Sim3 => "sim_3",
        }
    }
}

impl Display for MotifName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A role in a motif, named `'a'`, `'b'`, ... after the node of the representative matrix that fills it.
pub type Role = char;

/// The letter of the `i`-th role.
pub fn role(i: usize) -> Role {
    debug_assert!(i < 26);
    (b'a' + i as u8) as char
}

/// The edges of `matrix` as pairs of roles, in row-major order.
///
/// ```rust
/// use network_motifs::motif::{role_pattern, MotifName};
///
/// assert_eq!(role_pattern(&MotifName::Cascade.matrix()), [('a', 'b'), ('b', 'c')]);
/// ```
pub fn role_pattern(matrix: &AdjacencyMatrix) -> Vec<(Role, Role)> {
    matrix.edges().map(|(i, j)| (role(i), role(j))).collect()
}

/// Assigns a node of `occurrence` to every role of `matrix`.
///
/// Returns `nodes` with `nodes[i]` filling role `i`, or `None` if the occurrence is not isomorphic to the matrix.
/// If several assignments exist, the first one in lexicographic order of permutations is returned.
pub fn role_mapping(occurrence: &[(Node, Node)], matrix: &AdjacencyMatrix) -> Option<Vec<Node>> {
    let nodes = nodes_of(occurrence);
    if nodes.len() != matrix.k() || occurrence.len() != matrix.edge_count() {
        return None;
    }
    permutations(matrix.k()).into_iter().find_map(|permutation| {
        let mapping: Vec<Node> = permutation.iter().map(|&p| nodes[p]).collect();
        matrix.edges().all(|(i, j)| occurrence.contains(&(mapping[i], mapping[j]))).then_some(mapping)
    })
}

/// A subgraph class together with everything that is known about it after a search.
#[derive(Clone, Debug)]
pub struct Motif {
    /// Representative of the class.
    pub id: SubgraphId,
    /// Number of nodes.
    pub k: usize,
    /// Name of the class, if it has one.
    pub name: Option<MotifName>,
    /// Adjacency matrix of the representative.
    pub adjacency: AdjacencyMatrix,
    /// Occurrences in the real network.
    pub n_real: u64,
    /// Occurrences in each randomized network.
    pub random_counts: Vec<u64>,
    /// Edges of the occurrences in the real network.
    pub occurrences: Vec<Occurrence>,
    /// Result of the significance tests. Only present if randomized networks were evaluated.
    pub verdict: Option<MotifVerdict>,
    /// The class split by the polarity of its edges.
    pub polarity_motifs: Vec<PolarityMotif>,
}

impl Motif {
    /// A motif of class `id` with `k` nodes that has not been counted yet.
    pub fn new(id: SubgraphId, k: usize) -> Self {
        Self {
            id,
            k,
            name: MotifName::identify(id, k),
            adjacency: subgraph_of(id, k),
            n_real: 0,
            random_counts: vec![],
            occurrences: vec![],
            verdict: None,
            polarity_motifs: vec![],
        }
    }

    /// The name of the motif, or its identifier if it has none.
    pub fn label(&self) -> String {
        match self.name {
            Some(name) => name.to_string(),
            None => self.id.to_string(),
        }
    }

    /// The edges of the motif as pairs of roles.
    pub fn role_pattern(&self) -> Vec<(Role, Role)> {
        role_pattern(&self.adjacency)
    }
}

/// The occurrences of a motif whose edges carry a fixed sequence of polarities.
#[derive(Clone, Debug)]
pub struct PolarityMotif {
    /// Polarity of every edge of the motif, in the order of [Motif::role_pattern].
    pub polarity: Vec<Polarity>,
    /// Occurrences in the real network.
    pub n_real: u64,
    /// Occurrences in each randomized network.
    pub random_counts: Vec<u64>,
    /// Edges of the occurrences in the real network.
    pub occurrences: Vec<Occurrence>,
    /// Result of the significance tests.
    pub verdict: Option<MotifVerdict>,
}

impl PolarityMotif {
    /// The polarities as a compact string, e.g. `"[+, -]"`.
    pub fn polarity_label(&self) -> String {
        let symbols: Vec<_> = self.polarity.iter().map(Polarity::symbol).collect();
        format!("[{}]", symbols.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::isomorphism::IsomorphismTable;

    #[test]
    fn class_ids() {
        let expected = [6, 6, 36, 12, 38, 204, 904, 14];
        for (name, expected) in MotifName::ALL.into_iter().zip(expected) {
            assert_eq!(name.class_id(), SubgraphId::new(expected), "{name}");
        }
    }

    #[test]
    fn names_belong_to_tables() {
        for k in 2..=4 {
            let table = IsomorphismTable::build(k, false).unwrap();
            for name in MotifName::ALL.into_iter().filter(|name| name.size() == k) {
                assert_eq!(table.class_of(name.matrix().id()), Some(name.class_id()), "{name}");
                assert_eq!(MotifName::identify(name.class_id(), k), Some(name));
            }
        }
        assert_eq!(MotifName::identify(SubgraphId::new(6), 2), Some(MotifName::MutualRegulation));
        assert_eq!(MotifName::identify(SubgraphId::new(6), 3), Some(MotifName::FanOut));
        assert_eq!(MotifName::identify(SubgraphId::new(238), 3), None);
    }

    #[test]
    fn roles_of_feed_forward_loop() {
        let matrix = subgraph_of(MotifName::FeedForward.class_id(), 3);
        // representative 38: c -> b, c -> a, b -> a
        assert_eq!(role_pattern(&matrix), [('b', 'a'), ('c', 'a'), ('c', 'b')]);

        let [x, y, z] = [Node::new(10), Node::new(20), Node::new(30)];
        let occurrence = [(x, y), (x, z), (y, z)];
        assert_eq!(role_mapping(&occurrence, &matrix), Some(vec![z, y, x]));
        assert_eq!(role_mapping(&occurrence[..2], &matrix), None);
    }

    #[test]
    fn motif_labels() {
        assert_eq!(Motif::new(SubgraphId::new(38), 3).label(), "feed_forward");
        assert_eq!(Motif::new(SubgraphId::new(238), 3).label(), "238");
        assert_eq!(role(2), 'c');
    }
}
