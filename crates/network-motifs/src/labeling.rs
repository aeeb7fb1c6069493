use petgraph::graph::DiGraph;

use crate::index::make_id;
use crate::network::Node;

make_id!(
    /// Canonical identifier of a labeled subgraph.
    ///
    /// The `k x k` adjacency matrix (rows are sources, nodes in increasing order) is read row by row as a
    /// big-endian bit vector, i.e. the entry `(0, 0)` is the most significant bit. The identifier depends on the
    /// node order, so isomorphic subgraphs generally have different identifiers.
    pub SubgraphId
);

/// Largest subgraph size whose identifier fits into a [SubgraphId].
pub const MAX_SUBGRAPH_SIZE: usize = 8;

/// Dense adjacency matrix of a subgraph on the nodes `0..k`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AdjacencyMatrix {
    k: usize,
    bits: Vec<bool>,
}

impl AdjacencyMatrix {
    /// A matrix with `k` nodes and no edges.
    pub fn empty(k: usize) -> Self {
        Self { k, bits: vec![false; k * k] }
    }

    /// A matrix with `k` nodes and the given edges.
    pub fn from_edges<I>(k: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = Self::empty(k);
        for (i, j) in edges {
            matrix.set_edge(i, j);
        }
        matrix
    }

    /// Number of nodes.
    #[inline(always)]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether the edge `i -> j` is present.
    #[inline(always)]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.bits[i * self.k + j]
    }

    /// Add the edge `i -> j`.
    pub fn set_edge(&mut self, i: usize, j: usize) {
        assert!(i < self.k && j < self.k, "edge ({i}, {j}) out of bounds for k={}", self.k);
        self.bits[i * self.k + j] = true;
    }

    /// Iterate over the edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let k = self.k;
        self.bits.iter().enumerate().filter(|&(_, &bit)| bit).map(move |(f, _)| (f / k, f % k))
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Returns whether some node has an edge to itself.
    pub fn has_self_loops(&self) -> bool {
        (0..self.k).any(|i| self.has_edge(i, i))
    }

    /// Returns whether the matrix is connected when edge directions are ignored.
    ///
    /// A matrix without nodes is not connected.
    pub fn is_connected(&self) -> bool {
        if self.k == 0 {
            return false;
        }
        let mut seen = vec![false; self.k];
        seen[0] = true;
        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            for j in 0..self.k {
                if !seen[j] && (self.has_edge(i, j) || self.has_edge(j, i)) {
                    seen[j] = true;
                    stack.push(j);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// The canonical identifier of the matrix.
    ///
    /// ```rust
    /// use network_motifs::AdjacencyMatrix;
    ///
    /// // 0 -> 1 and 1 -> 0 on two nodes: bits 0110
    /// let mutual = AdjacencyMatrix::from_edges(2, [(0, 1), (1, 0)]);
    /// assert_eq!(mutual.id().value(), 6);
    /// ```
    pub fn id(&self) -> SubgraphId {
        debug_assert!(self.k <= MAX_SUBGRAPH_SIZE);
        let id = self.bits.iter().fold(0_u64, |id, &bit| (id << 1) | bit as u64);
        SubgraphId::new(id)
    }

    /// The matrix obtained by renaming node `i` to `permutation[i]`.
    pub fn relabel(&self, permutation: &[usize]) -> Self {
        debug_assert_eq!(permutation.len(), self.k);
        Self::from_edges(self.k, self.edges().map(|(i, j)| (permutation[i], permutation[j])))
    }

    /// The smallest identifier over all relabelings of the matrix.
    ///
    /// Two matrices are isomorphic exactly if their smallest relabelings agree.
    pub fn smallest_relabeling(&self) -> SubgraphId {
        permutations(self.k).iter().map(|p| self.relabel(p).id()).min().unwrap_or_default()
    }

    /// Sorted `(out-degree, in-degree, self-loop)` triples of the nodes. Isomorphic matrices have equal
    /// signatures.
    pub(crate) fn degree_signature(&self) -> Vec<(usize, usize, bool)> {
        let mut signature: Vec<_> = (0..self.k)
            .map(|i| {
                let out_degree = (0..self.k).filter(|&j| j != i && self.has_edge(i, j)).count();
                let in_degree = (0..self.k).filter(|&j| j != i && self.has_edge(j, i)).count();
                (out_degree, in_degree, self.has_edge(i, i))
            })
            .collect();
        signature.sort_unstable();
        signature
    }

    /// Convert into a `petgraph` graph with nodes `0..k`.
    pub fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.k, self.edge_count());
        for _ in 0..self.k {
            graph.add_node(());
        }
        graph.extend_with_edges(self.edges().map(|(i, j)| (i as u32, j as u32)));
        graph
    }
}

/// The identifier of the subgraph with the given nodes and edges.
///
/// `nodes` must be sorted and contain the endpoints of all `edges`. Sorting the nodes makes the identifier
/// independent of the order in which an enumeration discovered them.
pub fn id_of(nodes: &[Node], edges: &[(Node, Node)]) -> SubgraphId {
    debug_assert!(nodes.windows(2).all(|w| w[0] < w[1]), "nodes must be sorted and distinct");
    let mut matrix = AdjacencyMatrix::empty(nodes.len());
    for &(u, v) in edges {
        match (nodes.binary_search(&u), nodes.binary_search(&v)) {
            (Ok(i), Ok(j)) => matrix.set_edge(i, j),
            _ => debug_assert!(false, "edge ({u:?}, {v:?}) leaves the node set"),
        }
    }
    matrix.id()
}

/// The identifier of the subgraph spanned by `edges`. Its nodes are the endpoints of the edges.
pub fn id_of_edges(edges: &[(Node, Node)]) -> SubgraphId {
    id_of(&nodes_of(edges), edges)
}

/// The sorted endpoints of `edges`.
pub fn nodes_of(edges: &[(Node, Node)]) -> Vec<Node> {
    let mut nodes: Vec<_> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

/// The adjacency matrix with identifier `id` on `k` nodes.
///
/// This is the inverse of [AdjacencyMatrix::id]:
/// ```rust
/// use network_motifs::{subgraph_of, SubgraphId};
///
/// // the feed-forward loop 0 -> 1, 0 -> 2, 1 -> 2
/// let matrix = subgraph_of(SubgraphId::new(200), 3);
/// assert_eq!(matrix.edges().collect::<Vec<_>>(), [(0, 1), (0, 2), (1, 2)]);
/// assert_eq!(matrix.id(), SubgraphId::new(200));
/// ```
pub fn subgraph_of(id: SubgraphId, k: usize) -> AdjacencyMatrix {
    let n = k * k;
    debug_assert!(k <= MAX_SUBGRAPH_SIZE);
    debug_assert!(n == 64 || id.value() >> n == 0, "id {id} has more than {n} bits");
    let bits = (0..n).map(|f| (id.value() >> (n - 1 - f)) & 1 == 1).collect();
    AdjacencyMatrix { k, bits }
}

/// All permutations of `0..k` in lexicographic order.
pub(crate) fn permutations(k: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }
    let mut out = vec![];
    extend(&mut Vec::with_capacity(k), &mut vec![false; k], &mut out);
    out
}
