mod fixtures;

use fixtures::random_digraph;
use network_motifs::randomizer::{randomize, NullModel, RandomizerConfig};
use network_motifs::{Network, Synapse};

#[test]
fn switching_keeps_degrees_and_edge_count() {
    let network = random_digraph(50, 0.06, 1);
    let ensemble = randomize(&network, 10, &RandomizerConfig::default());
    assert!(ensemble.stats.acceptance_rate() > 0.0);
    for random in &ensemble.networks {
        assert_eq!(random.edge_count(), network.edge_count());
        for u in network.nodes() {
            assert_eq!(random.in_degree(u), network.in_degree(u));
            assert_eq!(random.out_degree(u), network.out_degree(u));
        }
        for (u, v) in random.edges() {
            assert_ne!(u, v);
            assert_eq!(random.edges().filter(|&e| e == (u, v)).count(), 1);
        }
    }
}

#[test]
fn self_loops_are_never_created() {
    let mut network = random_digraph(30, 0.1, 2);
    for u in [0, 5, 9] {
        network.add_edge(u, u, Synapse::default());
    }
    let ensemble = randomize(&network, 5, &RandomizerConfig::default());
    for random in &ensemble.networks {
        assert!(random.self_loop_count() <= 3);
        for u in network.nodes() {
            assert_eq!(random.in_degree(u), network.in_degree(u));
            assert_eq!(random.out_degree(u), network.out_degree(u));
        }
    }
}

#[test]
fn self_loops_appear_when_allowed() {
    let network = random_digraph(20, 0.15, 1);
    assert_eq!(network.self_loop_count(), 0);
    let config = RandomizerConfig { allow_self_loops: true, ..RandomizerConfig::default() };
    let ensemble = randomize(&network, 5, &config);
    for random in &ensemble.networks {
        assert_eq!(random.edge_count(), network.edge_count());
        for u in network.nodes() {
            assert_eq!(random.in_degree(u), network.in_degree(u));
            assert_eq!(random.out_degree(u), network.out_degree(u));
        }
        let mut edges: Vec<_> = random.edges().collect();
        edges.sort_unstable();
        edges.dedup();
        assert_eq!(edges.len(), network.edge_count());
    }
    assert!(ensemble.networks.iter().map(Network::self_loop_count).sum::<usize>() > 0);
}

#[test]
fn independent_of_ensemble_size() {
    let network = random_digraph(30, 0.1, 3);
    let config = RandomizerConfig { seed: 11, ..RandomizerConfig::default() };
    let small = randomize(&network, 2, &config);
    let large = randomize(&network, 6, &config);
    for (a, b) in small.networks.iter().zip(&large.networks) {
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }
}

#[test]
fn erdos_renyi_density() {
    let network = random_digraph(60, 0.1, 4);
    let config = RandomizerConfig { model: NullModel::ErdosRenyi, ..RandomizerConfig::default() };
    let ensemble = randomize(&network, 10, &config);
    let mean = ensemble.networks.iter().map(Network::edge_count).sum::<usize>() as f64 / 10.0;
    let expected = network.edge_count() as f64;
    assert!((mean - expected).abs() < 0.1 * expected, "mean {mean}, expected {expected}");
}
