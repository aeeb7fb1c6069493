//! Edge-extension backtracking in the style of mfinder.
//!
//! Both variants start from every edge and repeatedly add one edge incident to the current subgraph. Partial
//! subgraphs that were already extended are kept in a visited set, so every partial subgraph is extended at most
//! once no matter in which order its edges were found.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::census::Recorder;
use crate::labeling::nodes_of;
use crate::network::{Network, Node};

struct Search<'n, 'r, 't, S> {
    network: &'n Network,
    k: usize,
    recorder: &'r mut Recorder<'t>,
    visited: HashSet<S>,
    counted: HashSet<S>,
}

/// Induced variant. The state is the sorted set of nodes. Counted subgraphs are the induced subgraphs of the
/// node sets with `k` nodes.
#[instrument(skip_all)]
pub(crate) fn induced(network: &Network, k: usize, recorder: &mut Recorder<'_>) {
    let mut search = Search { network, k, recorder, visited: HashSet::new(), counted: HashSet::new() };
    for (u, v) in network.edges() {
        let mut nodes = vec![u, v];
        nodes.sort_unstable();
        nodes.dedup();
        search.extend_nodes(nodes);
    }
    debug!(visited = search.visited.len(), counted = search.counted.len());
}

impl Search<'_, '_, '_, Vec<Node>> {
    fn extend_nodes(&mut self, nodes: Vec<Node>) {
        if nodes.len() > self.k {
            return;
        }
        if nodes.len() == self.k {
            if !self.counted.contains(&nodes) {
                let edges = self.network.induced_edges(&nodes);
                self.recorder.record(&nodes, edges);
                self.counted.insert(nodes);
            }
            return;
        }
        self.visited.insert(nodes.clone());

        let network = self.network;
        for &i in &nodes {
            for w in network.successors(i).chain(network.predecessors(i)) {
                self.try_node(&nodes, w);
            }
        }
    }

    fn try_node(&mut self, nodes: &[Node], w: Node) {
        let Err(position) = nodes.binary_search(&w) else {
            return;
        };
        let mut extended = Vec::with_capacity(nodes.len() + 1);
        extended.extend_from_slice(&nodes[..position]);
        extended.push(w);
        extended.extend_from_slice(&nodes[position..]);
        if self.visited.contains(&extended) {
            return;
        }
        self.extend_nodes(extended);
    }
}

/// Non-induced variant. The state is the sorted set of edges, and a counted subgraph consists of exactly the
/// visited edges.
///
/// For `k > 2` a branch stops after counting its first subgraph with `k` nodes. A subgraph with `k` nodes that was
/// counted before is extended further by edges between its nodes.
#[instrument(skip_all)]
pub(crate) fn non_induced(network: &Network, k: usize, recorder: &mut Recorder<'_>) {
    let mut search = Search { network, k, recorder, visited: HashSet::new(), counted: HashSet::new() };
    for edge in network.edges() {
        search.extend_edges(vec![edge]);
    }
    debug!(visited = search.visited.len(), counted = search.counted.len());
}

impl Search<'_, '_, '_, Vec<(Node, Node)>> {
    fn extend_edges(&mut self, edges: Vec<(Node, Node)>) {
        let nodes = nodes_of(&edges);
        if nodes.len() > self.k {
            return;
        }
        if nodes.len() == self.k && self.counted.insert(edges.clone()) {
            self.recorder.record(&nodes, edges.clone());
            if self.k > 2 {
                return;
            }
        }
        self.visited.insert(edges.clone());

        let network = self.network;
        for &i in &nodes {
            for w in network.successors(i) {
                self.try_edge(&edges, (i, w));
            }
            for w in network.predecessors(i) {
                self.try_edge(&edges, (w, i));
            }
        }
    }

    fn try_edge(&mut self, edges: &[(Node, Node)], edge: (Node, Node)) {
        let Err(position) = edges.binary_search(&edge) else {
            return;
        };
        let mut extended = Vec::with_capacity(edges.len() + 1);
        extended.extend_from_slice(&edges[..position]);
        extended.push(edge);
        extended.extend_from_slice(&edges[position..]);
        if self.visited.contains(&extended) {
            return;
        }
        self.extend_edges(extended);
    }
}

#[cfg(test)]
mod test {
    use crate::census::{census, Algorithm, CensusOptions};
    use crate::isomorphism::IsomorphismTable;
    use crate::labeling::SubgraphId;
    use crate::network::Network;
    use crate::tests::complete_digraph;

    #[test]
    fn self_loops_with_two_nodes() {
        let network = Network::from_edges([(1, 2), (1, 1), (1, 3), (3, 2), (3, 4), (4, 4)]);
        let table = IsomorphismTable::build(2, true).unwrap();
        let result =
            census(&network, 2, &table, Algorithm::BacktrackingInduced, &CensusOptions::default()).unwrap();
        let counts: Vec<_> = result.counts().iter().map(|(id, &count)| (id.value(), count)).collect();
        assert_eq!(counts, [(2, 1), (3, 2), (5, 1)]);
    }

    #[test]
    fn self_loops_are_skipped_without_table_entries() {
        let network = Network::from_edges([(1, 2), (1, 1), (1, 3), (3, 2), (3, 4), (4, 4)]);
        let table = IsomorphismTable::build(2, false).unwrap();
        let result =
            census(&network, 2, &table, Algorithm::BacktrackingInduced, &CensusOptions::default()).unwrap();
        assert_eq!(result.count(SubgraphId::new(2)), 1);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn complete_digraph_has_one_class() {
        let network = complete_digraph(5);
        let table = IsomorphismTable::build(3, false).unwrap();
        let result =
            census(&network, 3, &table, Algorithm::BacktrackingInduced, &CensusOptions::default()).unwrap();
        assert_eq!(result.counts().len(), 1);
        assert_eq!(result.count(SubgraphId::new(238)), 10);
    }

    #[test]
    fn non_induced_mutual_pair() {
        let network = Network::from_edges([(0, 1), (1, 0)]);
        let table = IsomorphismTable::build(2, false).unwrap();
        let result =
            census(&network, 2, &table, Algorithm::BacktrackingNonInduced, &CensusOptions::default()).unwrap();
        // both single edges and the mutual pair
        assert_eq!(result.count(SubgraphId::new(2)), 2);
        assert_eq!(result.count(SubgraphId::new(6)), 1);
    }
}
