use std::collections::{BTreeMap, HashMap};

use petgraph::algo::is_isomorphic;
use petgraph::graph::DiGraph;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::error::MotifError;
use crate::labeling::{subgraph_of, AdjacencyMatrix, SubgraphId};

/// Largest subgraph size for which [IsomorphismTable::build] enumerates all `2^(k²)` adjacency matrices.
pub const MAX_TABLE_SIZE: usize = 4;

/// Partition of all connected labeled subgraphs of size `k` into isomorphism classes.
///
/// Each class is keyed by its representative, the smallest identifier among its members. The table only depends
/// on `k` and the self-loop policy and can be shared by every census run with these parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IsomorphismTable {
    k: usize,
    allow_self_loops: bool,
    membership: HashMap<SubgraphId, SubgraphId>,
    classes: BTreeMap<SubgraphId, Vec<SubgraphId>>,
}

struct Candidate {
    id: SubgraphId,
    key: (usize, Vec<(usize, usize, bool)>),
    graph: DiGraph<(), ()>,
}

impl IsomorphismTable {
    /// Builds the isomorphism classes of all connected subgraphs with `k` nodes.
    ///
    /// Subgraphs with self-loops are only included if `allow_self_loops` is set.
    ///
    /// ```rust
    /// # use std::error::Error;
    /// #
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use network_motifs::IsomorphismTable;
    ///
    /// let table = IsomorphismTable::build(3, false)?;
    /// assert_eq!(table.class_count(), 13);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SizeTooSmall` if `k < 2` and `IntractableSize` if `k > MAX_TABLE_SIZE`.
    #[instrument(skip_all, fields(k = k, allow_self_loops = allow_self_loops))]
    pub fn build(k: usize, allow_self_loops: bool) -> Result<Self, MotifError> {
        if k < 2 {
            return Err(MotifError::SizeTooSmall(k));
        }
        if k > MAX_TABLE_SIZE {
            return Err(MotifError::IntractableSize { k, max: MAX_TABLE_SIZE });
        }

        let candidates: Vec<Candidate> = (0..1_u64 << (k * k))
            .into_par_iter()
            .filter_map(|id| {
                let id = SubgraphId::new(id);
                let matrix = subgraph_of(id, k);
                if !matrix.is_connected() || (!allow_self_loops && matrix.has_self_loops()) {
                    return None;
                }
                let key = (matrix.edge_count(), matrix.degree_signature());
                Some(Candidate { id, key, graph: matrix.to_digraph() })
            })
            .collect();
        debug!(candidates = candidates.len());

        // Candidates arrive in increasing order, so the first member of a class is its smallest.
        let mut representatives: HashMap<_, Vec<Candidate>> = HashMap::new();
        let mut membership = HashMap::with_capacity(candidates.len());
        let mut classes: BTreeMap<SubgraphId, Vec<SubgraphId>> = BTreeMap::new();
        for candidate in candidates {
            let bucket = representatives.entry(candidate.key.clone()).or_default();
            match bucket.iter().find(|r| is_isomorphic(&r.graph, &candidate.graph)) {
                Some(representative) => {
                    membership.insert(candidate.id, representative.id);
                    classes.entry(representative.id).or_default().push(candidate.id);
                }
                None => {
                    membership.insert(candidate.id, candidate.id);
                    classes.insert(candidate.id, vec![candidate.id]);
                    bucket.push(candidate);
                }
            }
        }

        info!(number_of_classes = classes.len(), number_of_subgraphs = membership.len());
        Ok(Self { k, allow_self_loops, membership, classes })
    }

    /// The subgraph size of the table.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether subgraphs with self-loops are included.
    pub fn allows_self_loops(&self) -> bool {
        self.allow_self_loops
    }

    /// The representative of the class containing `id`, or `None` if `id` is not part of any class, e.g. if it is
    /// disconnected or contains a disallowed self-loop.
    #[inline]
    pub fn class_of(&self, id: SubgraphId) -> Option<SubgraphId> {
        self.membership.get(&id).copied()
    }

    /// The members of the class with the given representative in increasing order.
    pub fn members(&self, representative: SubgraphId) -> Option<&[SubgraphId]> {
        self.classes.get(&representative).map(Vec::as_slice)
    }

    /// Iterate over the classes as `(representative, members)` in increasing order of representatives.
    pub fn classes(&self) -> impl Iterator<Item = (SubgraphId, &[SubgraphId])> + '_ {
        self.classes.iter().map(|(&r, members)| (r, members.as_slice()))
    }

    /// Iterate over the representatives in increasing order.
    pub fn representatives(&self) -> impl Iterator<Item = SubgraphId> + '_ {
        self.classes.keys().copied()
    }

    /// Number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of subgraphs over all classes.
    pub fn subgraph_count(&self) -> usize {
        self.membership.len()
    }

    /// The mapping from every member to its representative.
    pub fn membership(&self) -> &HashMap<SubgraphId, SubgraphId> {
        &self.membership
    }

    /// The adjacency matrix of a class representative.
    pub fn subgraph(&self, representative: SubgraphId) -> AdjacencyMatrix {
        subgraph_of(representative, self.k)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_sizes() {
        assert_eq!(IsomorphismTable::build(1, false), Err(MotifError::SizeTooSmall(1)));
        assert_eq!(IsomorphismTable::build(5, false), Err(MotifError::IntractableSize { k: 5, max: 4 }));
    }

    #[test]
    fn two_nodes() {
        let table = IsomorphismTable::build(2, false).unwrap();
        assert_eq!(table.class_count(), 2);
        assert_eq!(table.members(SubgraphId::new(2)), Some(&[SubgraphId::new(2), SubgraphId::new(4)][..]));
        assert_eq!(table.members(SubgraphId::new(6)), Some(&[SubgraphId::new(6)][..]));
        assert_eq!(table.class_of(SubgraphId::new(4)), Some(SubgraphId::new(2)));
        assert_eq!(table.class_of(SubgraphId::new(0)), None);
        assert_eq!(table.class_of(SubgraphId::new(12)), None);
    }

    #[test]
    fn two_nodes_with_self_loops() {
        let table = IsomorphismTable::build(2, true).unwrap();
        // one edge or two edges, each with 0, 1 or 2 self-loops; the single edge has two kinds of one self-loop
        assert_eq!(table.class_count(), 7);
        assert_eq!(table.class_of(SubgraphId::new(12)), Some(SubgraphId::new(3)));
        assert_eq!(table.class_of(SubgraphId::new(5)), Some(SubgraphId::new(5)));
    }

    #[test]
    fn three_nodes() {
        let table = IsomorphismTable::build(3, false).unwrap();
        assert_eq!(table.class_count(), 13);
        assert_eq!(table.subgraph_count(), 54);
        let representatives: Vec<_> = table.representatives().map(|r| r.value()).collect();
        assert_eq!(representatives, [6, 12, 14, 36, 38, 46, 74, 78, 98, 102, 108, 110, 238]);
    }

    #[test]
    fn representatives_are_smallest_relabelings() {
        let table = IsomorphismTable::build(3, true).unwrap();
        for (representative, members) in table.classes() {
            assert_eq!(members[0], representative);
            for &member in members {
                assert_eq!(subgraph_of(member, 3).smallest_relabeling(), representative);
            }
        }
    }

    #[test]
    fn four_nodes() {
        let table = IsomorphismTable::build(4, false).unwrap();
        assert_eq!(table.class_count(), 199);
        assert_eq!(table.class_of(SubgraphId::new(204)), Some(SubgraphId::new(204)));
    }
}
