mod fixtures;

use fixtures::random_digraph;
use network_motifs::census::{census, triad_census, Algorithm, CensusOptions, CensusResult, TriadType};
use network_motifs::{id_of_edges, IsomorphismTable, MotifName, Network};

fn run(network: &Network, table: &IsomorphismTable, algorithm: Algorithm) -> CensusResult {
    census(network, table.k(), table, algorithm, &CensusOptions::default()).unwrap()
}

#[test]
fn induced_and_esu_agree_on_three_nodes() {
    let table = IsomorphismTable::build(3, false).unwrap();
    for seed in 0..5 {
        let network = random_digraph(30, 0.08, seed);
        let induced = run(&network, &table, Algorithm::BacktrackingInduced);
        let esu = run(&network, &table, Algorithm::Esu);
        assert_eq!(induced.counts(), esu.counts(), "seed {seed}");
        assert!(induced.total() > 0);
    }
}

#[test]
fn induced_and_esu_agree_on_four_nodes() {
    let table = IsomorphismTable::build(4, false).unwrap();
    for seed in 0..3 {
        let network = random_digraph(16, 0.15, seed);
        let induced = run(&network, &table, Algorithm::BacktrackingInduced);
        let esu = run(&network, &table, Algorithm::Esu);
        assert_eq!(induced.counts(), esu.counts(), "seed {seed}");
    }
}

#[test]
fn triadic_census_agrees_with_enumeration() {
    let table = IsomorphismTable::build(3, false).unwrap();
    for seed in 0..5 {
        let network = random_digraph(25, 0.15, seed);
        let induced = run(&network, &table, Algorithm::BacktrackingInduced);
        let triadic = run(&network, &table, Algorithm::TriadicCensus);
        assert_eq!(induced.counts(), triadic.counts(), "seed {seed}");

        let triads = triad_census(&network);
        let connected: u64 = TriadType::ALL.iter().filter(|t| t.is_connected()).map(|&t| triads.get(t)).sum();
        assert_eq!(connected, induced.total());
    }
}

#[test]
fn specific_search_agrees_on_named_motifs() {
    for k in [2, 3, 4] {
        let table = IsomorphismTable::build(k, false).unwrap();
        let network = random_digraph(14, 0.2, k as u64);
        let induced = run(&network, &table, Algorithm::BacktrackingInduced);
        let specific = run(&network, &table, Algorithm::Specific);
        for name in MotifName::ALL.into_iter().filter(|name| name.size() == k) {
            let class = name.class_id();
            assert_eq!(specific.count(class), induced.count(class), "{name}");
        }
    }
}

#[test]
fn occurrences_belong_to_their_class() {
    let table = IsomorphismTable::build(3, false).unwrap();
    let network = random_digraph(20, 0.15, 3);
    for algorithm in [Algorithm::BacktrackingInduced, Algorithm::Esu, Algorithm::TriadicCensus, Algorithm::Specific] {
        let result = run(&network, &table, algorithm);
        for (&class, occurrences) in result.all_occurrences() {
            assert_eq!(occurrences.len() as u64, result.count(class), "{algorithm}");
            for occurrence in occurrences {
                assert_eq!(table.class_of(id_of_edges(occurrence)), Some(class), "{algorithm}");
            }
        }
    }
}

#[test]
fn smaller_than_k() {
    let table = IsomorphismTable::build(4, false).unwrap();
    let network = Network::from_edges([(0, 1), (1, 2)]);
    for algorithm in [Algorithm::BacktrackingInduced, Algorithm::BacktrackingNonInduced, Algorithm::Esu] {
        assert_eq!(run(&network, &table, algorithm).total(), 0, "{algorithm}");
    }
}
