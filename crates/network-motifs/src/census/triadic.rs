//! Triad census of Batagelj and Mrvar.
//!
//! + \[BM01\]: Vladimir Batagelj and Andrej Mrvar. "A subquadratic triad census algorithm for large sparse
//!   networks with small maximum degree". <https://doi.org/10.1016/S0378-8733(01)00035-1>.

use std::fmt::{Display, Formatter};

use rayon::prelude::*;
use tracing::{info, instrument};

use crate::census::{Occurrence, Recorder};
use crate::error::MotifError;
use crate::isomorphism::IsomorphismTable;
use crate::labeling::{AdjacencyMatrix, SubgraphId};
use crate::network::{Network, Node};

/// The 16 isomorphism classes of directed graphs on three nodes in MAN notation.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TriadType {
    T003,
    T012,
    T102,
    T021D,
    T021U,
    T021C,
    T111D,
    T111U,
    T030T,
    T030C,
    T201,
    T120D,
    T120U,
    T120C,
    T210,
    T300,
}

impl TriadType {
    /// All triad types in the conventional order.
    pub const ALL: [TriadType; 16] = [
        TriadType::T003,
        TriadType::T012,
        TriadType::T102,
        TriadType::T021D,
        TriadType::T021U,
        TriadType::T021C,
        TriadType::T111D,
        TriadType::T111U,
        TriadType::T030T,
        TriadType::T030C,
        TriadType::T201,
        TriadType::T120D,
        TriadType::T120U,
        TriadType::T120C,
        TriadType::T210,
        TriadType::T300,
    ];

    /// The position of the type in [TriadType::ALL].
    #[inline(always)]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The MAN label, e.g. `"030T"`.
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 16] = [
            "003", "012", "102", "021D", "021U", "021C", "111D", "111U", "030T", "030C", "201", "120D", "120U",
            "120C", "210", "300",
        ];
        LABELS[self.index()]
    }

    /// Returns whether the three nodes are connected when edge directions are ignored.
    pub fn is_connected(&self) -> bool {
        self.index() >= TriadType::T021D.index()
    }

    /// A labeled representative on the nodes `0, 1, 2`.
    pub fn matrix(&self) -> AdjacencyMatrix {
        let code = (0..64).find(|&code| TRITYPES[code] as usize == self.index()).unwrap_or(0);
        matrix_of(code)
    }
}

impl Display for TriadType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a tricode to the index of its triad type.
const TRITYPES: [u8; 64] = [
    0, 1, 1, 2, 1, 3, 5, 7, 1, 5, 4, 6, 2, 7, 6, 10, 1, 5, 3, 7, 4, 8, 8, 12, 5, 9, 8, 13, 6, 13, 11, 14, 1, 4, 5, 6,
    5, 8, 9, 13, 3, 8, 8, 11, 7, 12, 13, 14, 2, 6, 7, 10, 6, 11, 13, 14, 7, 13, 12, 14, 10, 14, 14, 15,
];

/// The edges of a triad `(v, u, w)` in the order of the tricode bits.
fn tricode_edges<T: Copy>(v: T, u: T, w: T) -> [(T, T); 6] {
    [(v, u), (u, v), (v, w), (w, v), (u, w), (w, u)]
}

fn tricode(network: &Network, v: Node, u: Node, w: Node) -> usize {
    tricode_edges(v, u, w)
        .into_iter()
        .enumerate()
        .filter(|&(_, (x, y))| network.has_edge(x, y))
        .fold(0, |code, (bit, _)| code | (1 << bit))
}

fn matrix_of(code: usize) -> AdjacencyMatrix {
    AdjacencyMatrix::from_edges(
        3,
        tricode_edges(0, 1, 2).into_iter().enumerate().filter(|&(bit, _)| (code >> bit) & 1 == 1).map(|(_, e)| e),
    )
}

/// Number of triads of each [TriadType].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TriadicCensus {
    census: [u64; 16],
}

impl TriadicCensus {
    /// The number of triads of the given type.
    #[inline(always)]
    pub fn get(&self, triad_type: TriadType) -> u64 {
        self.census[triad_type.index()]
    }

    /// The counts in the order of [TriadType::ALL].
    pub fn as_slice(&self) -> &[u64] {
        &self.census[..]
    }

    fn add(&mut self, triad_type: usize, count: u64) {
        self.census[triad_type] += count;
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.census.iter_mut().zip(other.census) {
            *a += b;
        }
        self
    }
}

/// Counts the triads of every type. Self-loops are ignored.
///
/// ```rust
/// use network_motifs::census::{triad_census, TriadType};
/// use network_motifs::Network;
///
/// let network = Network::from_edges([(0, 1), (1, 2), (0, 2)]);
/// let census = triad_census(&network);
/// assert_eq!(census.get(TriadType::T030T), 1);
/// assert_eq!(census.as_slice().iter().sum::<u64>(), 1);
/// ```
#[instrument(skip_all)]
pub fn triad_census(network: &Network) -> TriadicCensus {
    let (census, _) = visit_triads(network, false);
    census
}

fn visit_triads(network: &Network, record: bool) -> (TriadicCensus, Vec<(usize, Occurrence)>) {
    let n = network.node_count() as u64;
    let neighbors: Vec<Vec<Node>> = network.nodes().map(|u| network.neighbors_undirected(u)).collect();
    let adjacent = |x: Node, y: Node| neighbors[x.index()].binary_search(&y).is_ok();

    let (mut census, triads) = network
        .nodes()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|v| {
            let mut census = TriadicCensus::default();
            let mut triads = vec![];
            for &u in neighbors[v.index()].iter().filter(|&&u| v < u) {
                let mut s: Vec<Node> = neighbors[u.index()].iter().chain(&neighbors[v.index()]).copied().collect();
                s.sort_unstable();
                s.dedup();
                s.retain(|&x| x != u && x != v);

                let dyad = if network.has_edge(v, u) && network.has_edge(u, v) { 2 } else { 1 };
                census.add(dyad, n - s.len() as u64 - 2);

                for &w in &s {
                    if u < w || (v < w && w < u && !adjacent(v, w)) {
                        let code = tricode(network, v, u, w);
                        census.add(TRITYPES[code] as usize, 1);
                        if record {
                            let mut edges: Occurrence = tricode_edges(v, u, w)
                                .into_iter()
                                .enumerate()
                                .filter(|&(bit, _)| (code >> bit) & 1 == 1)
                                .map(|(_, e)| e)
                                .collect();
                            edges.sort_unstable();
                            triads.push((TRITYPES[code] as usize, edges));
                        }
                    }
                }
            }
            (census, triads)
        })
        .reduce(
            || (TriadicCensus::default(), vec![]),
            |(a, mut triads_a), (b, triads_b)| {
                triads_a.extend(triads_b);
                (a.merge(b), triads_a)
            },
        );

    let total = if n >= 3 { n * (n - 1) * (n - 2) / 6 } else { 0 };
    let counted: u64 = census.census[1..].iter().sum();
    census.census[0] = total - counted;
    (census, triads)
}

/// The class of every triad type in `table`. Disconnected types have no class.
fn classes_of_types(table: &IsomorphismTable) -> [Option<SubgraphId>; 16] {
    TriadType::ALL.map(|t| if t.is_connected() { table.class_of(t.matrix().id()) } else { None })
}

#[instrument(skip_all)]
pub(crate) fn triadic(network: &Network, k: usize, recorder: &mut Recorder<'_>) -> Result<(), MotifError> {
    if k != 3 {
        return Err(MotifError::UnsupportedSize { algorithm: "triadic census", k });
    }
    // the triad types ignore self-loops
    if recorder.table().allows_self_loops() {
        return Err(MotifError::SelfLoopsUnsupported("triadic census"));
    }
    let classes = classes_of_types(recorder.table());
    let record = recorder.is_recording();
    let (census, triads) = visit_triads(network, record);
    info!(triads = ?census.as_slice());

    for (triad_type, &class) in classes.iter().enumerate() {
        if let Some(class) = class {
            recorder.add(class, census.census[triad_type]);
        }
    }
    for (triad_type, edges) in triads {
        if let Some(class) = classes[triad_type] {
            recorder.push(class, edges);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn growing_graph() {
        let mut network = Network::with_nodes(3);
        assert_eq!(triad_census(&network).get(TriadType::T003), 1);
        network.add_edge(0, 2, Default::default());
        assert_eq!(triad_census(&network).get(TriadType::T012), 1);
        network.add_edge(2, 0, Default::default());
        assert_eq!(triad_census(&network).get(TriadType::T102), 1);
        network.add_edge(1, 2, Default::default());
        assert_eq!(triad_census(&network).get(TriadType::T111D), 1);
    }

    #[test]
    fn sums_to_all_triads() {
        let network = crate::tests::random_digraph(30, 0.1, 11);
        let census = triad_census(&network);
        assert_eq!(census.as_slice().iter().sum::<u64>(), 30 * 29 * 28 / 6);
    }

    #[test]
    fn triad_types_map_to_canonical_classes() {
        let table = IsomorphismTable::build(3, false).unwrap();
        let classes: Vec<_> = classes_of_types(&table).iter().map(|c| c.map(|c| c.value())).collect();
        let expected = [0, 0, 0, 6, 36, 12, 74, 14, 38, 98, 78, 108, 46, 102, 110, 238];
        for (class, expected) in classes.into_iter().zip(expected) {
            assert_eq!(class, if expected == 0 { None } else { Some(expected) });
        }
    }

    #[test]
    fn wrong_size() {
        let table = IsomorphismTable::build(4, false).unwrap();
        let mut recorder = Recorder::new(&table, false);
        assert_eq!(
            triadic(&Network::new(), 4, &mut recorder),
            Err(MotifError::UnsupportedSize { algorithm: "triadic census", k: 4 })
        );
    }

    #[test]
    fn tables_with_self_loops() {
        let mut network = crate::tests::random_digraph(12, 0.2, 2);
        network.add_edge(1, 1, Default::default());
        let table = IsomorphismTable::build(3, true).unwrap();
        let mut recorder = Recorder::new(&table, false);
        assert_eq!(
            triadic(&network, 3, &mut recorder),
            Err(MotifError::SelfLoopsUnsupported("triadic census"))
        );

        let table = IsomorphismTable::build(3, false).unwrap();
        let mut recorder = Recorder::new(&table, false);
        assert_eq!(triadic(&network, 3, &mut recorder), Ok(()));
    }
}
