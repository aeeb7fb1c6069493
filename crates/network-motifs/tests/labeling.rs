use petgraph::algo::is_isomorphic;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use network_motifs::{subgraph_of, AdjacencyMatrix, IsomorphismTable, SubgraphId};

#[test]
fn identifiers_round_trip() {
    let mut rng = StdRng::seed_from_u64(0);
    for k in 2..=6 {
        for _ in 0..100 {
            let mut matrix = AdjacencyMatrix::empty(k);
            for i in 0..k {
                for j in 0..k {
                    if rng.gen_bool(0.4) {
                        matrix.set_edge(i, j);
                    }
                }
            }
            assert_eq!(subgraph_of(matrix.id(), k), matrix);
        }
    }
}

#[test]
fn classes_are_isomorphism_classes() {
    for k in [2, 3] {
        let table = IsomorphismTable::build(k, false).unwrap();
        let representatives: Vec<SubgraphId> = table.representatives().collect();
        for (representative, members) in table.classes() {
            let graph = subgraph_of(representative, k).to_digraph();
            assert!(members.contains(&representative));
            for &member in members {
                assert!(member >= representative);
                assert!(is_isomorphic(&graph, &subgraph_of(member, k).to_digraph()));
            }
            for &other in representatives.iter().filter(|&&other| other != representative) {
                assert!(!is_isomorphic(&graph, &subgraph_of(other, k).to_digraph()));
            }
        }
    }
}

#[test]
fn every_connected_subgraph_has_a_class() {
    for k in [2, 3, 4] {
        let table = IsomorphismTable::build(k, false).unwrap();
        let connected = (0..1_u64 << (k * k))
            .map(|id| subgraph_of(SubgraphId::new(id), k))
            .filter(|matrix| matrix.is_connected() && !matrix.has_self_loops())
            .count();
        assert_eq!(table.subgraph_count(), connected);
    }
}

#[test]
fn self_loops_extend_the_table() {
    let without = IsomorphismTable::build(3, false).unwrap();
    let with = IsomorphismTable::build(3, true).unwrap();
    assert!(with.class_count() > without.class_count());
    for representative in without.representatives() {
        assert_eq!(with.class_of(representative), Some(representative));
    }
}
