//! Random networks for the null model of the motif criteria.
//!
//! + \[KTV99\]: Ravi Kannan, Prasad Tetali, and Santosh Vempala. "Simple Markov-chain algorithms for generating
//!   bipartite graphs and tournaments". <https://doi.org/10.1002/(SICI)1098-2418(199907)14:4%3C293::AID-RSA1%3E3.0.CO;2-G>.
//! + \[MKI03\]: Ron Milo, Nadav Kashtan, Shalev Itzkovitz, Mark Newman, and Uri Alon. "On the uniform generation of
//!   random graphs with prescribed degree sequences". <https://arxiv.org/abs/cond-mat/0312028>.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;

use petgraph::graph::DiGraph;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, instrument};

use crate::network::{Network, Node, Synapse};

/// How randomized networks are generated.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum NullModel {
    /// Double-edge swaps that keep the in- and out-degree of every node.
    #[default]
    MarkovChainSwitching,
    /// Directed G(n, p) with the expected number of edges of the real network. Degrees are not kept.
    ErdosRenyi,
}

impl Display for NullModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NullModel::MarkovChainSwitching => "markov-chain",
            NullModel::ErdosRenyi => "erdos-renyi",
        })
    }
}

/// Parameters of the randomizer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RandomizerConfig {
    /// The null model.
    pub model: NullModel,
    /// The Markov chain performs `switch_factor` swap attempts per edge.
    pub switch_factor: usize,
    /// Allow swaps that create self-loops.
    pub allow_self_loops: bool,
    /// Network `i` of an ensemble is generated from the seed `seed + i`.
    pub seed: u64,
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self { model: NullModel::default(), switch_factor: 10, allow_self_loops: false, seed: 42 }
    }
}

/// Counters of the Markov chain.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SwitchStats {
    /// Swap attempts.
    pub attempted: u64,
    /// Swaps that were performed.
    pub accepted: u64,
}

impl SwitchStats {
    /// Fraction of attempts that were performed. Zero if there were no attempts.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.accepted as f64 / self.attempted as f64
        }
    }
}

impl AddAssign for SwitchStats {
    fn add_assign(&mut self, other: Self) {
        self.attempted += other.attempted;
        self.accepted += other.accepted;
    }
}

/// Randomized networks with the same nodes as the real network.
#[derive(Clone, Debug, Default)]
pub struct Ensemble {
    /// The networks in the order of their seeds.
    pub networks: Vec<Network>,
    /// Counters of the Markov chain over all networks.
    pub stats: SwitchStats,
}

/// Generates `amount` randomized versions of `network`.
///
/// Every network is generated independently from a fresh copy of `network`, so the result does not depend on the
/// number of threads.
///
/// ```rust
/// use network_motifs::randomizer::{randomize, RandomizerConfig};
/// use network_motifs::Network;
///
/// let network = Network::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
/// let ensemble = randomize(&network, 4, &RandomizerConfig::default());
///
/// assert_eq!(ensemble.networks.len(), 4);
/// for random in &ensemble.networks {
///     assert_eq!(random.edge_count(), network.edge_count());
///     for u in network.nodes() {
///         assert_eq!(random.out_degree(u), network.out_degree(u));
///         assert_eq!(random.in_degree(u), network.in_degree(u));
///     }
/// }
/// ```
#[instrument(skip_all, fields(amount = amount, model = %config.model))]
pub fn randomize(network: &Network, amount: usize, config: &RandomizerConfig) -> Ensemble {
    let generated: Vec<(Network, SwitchStats)> = (0..amount)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            match config.model {
                NullModel::MarkovChainSwitching => markov_chain(network, config, &mut rng),
                NullModel::ErdosRenyi => (erdos_renyi(network, &mut rng), SwitchStats::default()),
            }
        })
        .collect();

    let mut ensemble = Ensemble::default();
    for (random, stats) in generated {
        ensemble.networks.push(random);
        ensemble.stats += stats;
    }

    let mean_edges = if amount > 0 {
        ensemble.networks.iter().map(Network::edge_count).sum::<usize>() as f64 / amount as f64
    } else {
        0.0
    };
    info!(
        attempted = ensemble.stats.attempted,
        accepted = ensemble.stats.accepted,
        acceptance_rate = ensemble.stats.acceptance_rate(),
        mean_edges
    );
    ensemble
}

/// Returns whether replacing `x1 -> y1` and `x2 -> y2` by `x1 -> y2` and `x2 -> y1` keeps the network simple.
fn can_switch(edges: &HashSet<(Node, Node)>, (x1, y1): (Node, Node), (x2, y2): (Node, Node), loops: bool) -> bool {
    if x1 == x2 || y1 == y2 {
        return false;
    }
    if !loops && (x1 == y2 || x2 == y1) {
        return false;
    }
    !edges.contains(&(x1, y2)) && !edges.contains(&(x2, y1))
}

/// Performs `E * switch_factor` swap attempts on a copy of `network`.
pub(crate) fn markov_chain(network: &Network, config: &RandomizerConfig, rng: &mut StdRng) -> (Network, SwitchStats) {
    let mut edges: Vec<(Node, Node, Synapse)> = network.synapses().map(|(u, v, s)| (u, v, s.clone())).collect();
    let mut present: HashSet<(Node, Node)> = edges.iter().map(|&(u, v, _)| (u, v)).collect();
    let m = edges.len();

    let mut stats = SwitchStats { attempted: (m * config.switch_factor) as u64, accepted: 0 };
    if m >= 2 {
        for _ in 0..m * config.switch_factor {
            let sample = index::sample(rng, m, 2);
            let (i, j) = (sample.index(0), sample.index(1));
            let (x1, y1) = (edges[i].0, edges[i].1);
            let (x2, y2) = (edges[j].0, edges[j].1);
            if !can_switch(&present, (x1, y1), (x2, y2), config.allow_self_loops) {
                continue;
            }
            present.remove(&(x1, y1));
            present.remove(&(x2, y2));
            present.insert((x1, y2));
            present.insert((x2, y1));
            edges[i].1 = y2;
            edges[j].1 = y1;
            stats.accepted += 1;
        }
    }

    (rebuild(network, edges), stats)
}

/// Directed G(n, p) with `p = E / (n (n - 1))` and attributes drawn from the edges of `network`.
pub(crate) fn erdos_renyi(network: &Network, rng: &mut StdRng) -> Network {
    let n = network.node_count();
    let synapses: Vec<&Synapse> = network.synapses().map(|(_, _, s)| s).collect();
    let p = if n > 1 { (network.edge_count() as f64 / (n * (n - 1)) as f64).min(1.0) } else { 0.0 };

    let mut edges = vec![];
    for u in network.nodes() {
        for v in network.nodes() {
            if u != v && rng.gen_bool(p) {
                let synapse = synapses.choose(rng).map(|&s| s.clone()).unwrap_or_default();
                edges.push((u, v, synapse));
            }
        }
    }
    rebuild(network, edges)
}

/// A network with the nodes and names of `network` and the given edges.
fn rebuild(network: &Network, edges: Vec<(Node, Node, Synapse)>) -> Network {
    let mut graph = DiGraph::with_capacity(network.node_count(), edges.len());
    for _ in 0..network.node_count() {
        graph.add_node(());
    }
    for (u, v, synapse) in edges {
        graph.add_edge(u, v, synapse);
    }
    Network::from_parts(graph, network.names().to_vec())
}
