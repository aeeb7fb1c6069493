#![allow(dead_code)]

use network_motifs::{Network, Polarity, Synapse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn random_digraph(n: usize, p: f64, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::with_nodes(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(p) {
                let polarity = if rng.gen_bool(0.75) { Polarity::Excitatory } else { Polarity::Inhibitory };
                network.add_edge(u, v, Synapse::with_polarity(polarity));
            }
        }
    }
    network
}

/// `count` disjoint feed-forward loops.
pub fn disjoint_feed_forward_loops(count: u32) -> Network {
    Network::from_edges((0..count).flat_map(|i| {
        let x = 3 * i;
        [(x, x + 1), (x, x + 2), (x + 1, x + 2)]
    }))
}
