//! Enumeration of connected node sets (ESU), as used by FANMOD.
//!
//! Every connected node set with `k` nodes is enumerated exactly once: a node set is only grown from its smallest
//! node `v`, and a node joins the extension only through the first node of the current set it is adjacent to.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::census::Recorder;
use crate::network::{Network, Node};

struct Esu<'n, 'r, 't> {
    network: &'n Network,
    k: usize,
    neighbors: Vec<Vec<Node>>,
    rng: StdRng,
    recorder: &'r mut Recorder<'t>,
    enumerated: u64,
}

#[instrument(skip_all)]
pub(crate) fn esu(network: &Network, k: usize, seed: u64, recorder: &mut Recorder<'_>) {
    let neighbors = network.nodes().map(|u| network.neighbors_undirected(u)).collect();
    let mut esu = Esu { network, k, neighbors, rng: StdRng::seed_from_u64(seed), recorder, enumerated: 0 };

    for v in network.nodes() {
        let extension: Vec<Node> = esu.neighbors[v.index()].iter().copied().filter(|&u| u > v).collect();
        esu.extend(&mut vec![v], extension, v);
    }
    debug!(enumerated = esu.enumerated);
}

impl Esu<'_, '_, '_> {
    fn extend(&mut self, subgraph: &mut Vec<Node>, mut extension: Vec<Node>, v: Node) {
        if subgraph.len() == self.k {
            self.enumerated += 1;
            let mut nodes = subgraph.clone();
            nodes.sort_unstable();
            let edges = self.network.induced_edges(&nodes);
            self.recorder.record(&nodes, edges);
            return;
        }
        while !extension.is_empty() {
            let w = extension.swap_remove(self.rng.gen_range(0..extension.len()));

            let mut next_extension = extension.clone();
            for &u in &self.neighbors[w.index()] {
                if u > v && !next_extension.contains(&u) && self.is_exclusive(subgraph, u) {
                    next_extension.push(u);
                }
            }

            subgraph.push(w);
            self.extend(subgraph, next_extension, v);
            subgraph.pop();
        }
    }

    /// Returns whether `u` is neither in `subgraph` nor adjacent to one of its nodes.
    fn is_exclusive(&self, subgraph: &[Node], u: Node) -> bool {
        subgraph.iter().all(|&x| x != u && self.neighbors[x.index()].binary_search(&u).is_err())
    }
}
