mod fixtures;

use fixtures::{disjoint_feed_forward_loops, random_digraph};
use network_motifs::census::Algorithm;
use network_motifs::significance::{classify, MotifCriteria, MotifType};
use network_motifs::{motif_search, MotifName, SearchConfig};

#[test]
fn feed_forward_loops_are_over_represented() {
    let network = disjoint_feed_forward_loops(30);
    let config = SearchConfig { network_amount: 50, ..SearchConfig::default() };
    let result = motif_search(&network, &config.table().unwrap(), &config).unwrap();

    let feed_forward = result.get(MotifName::FeedForward.class_id()).unwrap();
    assert_eq!(feed_forward.n_real, 30);
    assert_eq!(feed_forward.random_counts.len(), 50);
    let verdict = feed_forward.verdict.as_ref().unwrap();
    assert!(verdict.n_rand < 5.0);
    assert!(verdict.is_frequent);
    assert!(verdict.z_score.map_or(true, |z| z > 0.0));

    let cascade = result.get(MotifName::Cascade.class_id()).unwrap();
    assert_eq!(cascade.n_real, 0);
}

#[test]
fn engines_give_the_same_verdicts() {
    let network = random_digraph(25, 0.1, 9);
    let verdicts = |algorithm| {
        let config = SearchConfig { algorithm, network_amount: 8, polarity_search: false, ..SearchConfig::default() };
        let result = motif_search(&network, &config.table().unwrap(), &config).unwrap();
        result.motifs.into_values().map(|motif| (motif.n_real, motif.random_counts, motif.verdict)).collect::<Vec<_>>()
    };
    let induced = verdicts(Algorithm::BacktrackingInduced);
    assert_eq!(induced, verdicts(Algorithm::Esu));
    assert_eq!(induced, verdicts(Algorithm::TriadicCensus));
}

#[test]
fn classification_is_pure() {
    let counts = [14, 9, 11, 10, 12, 8, 13, 10];
    let criteria = MotifCriteria::default();
    let first = classify(25, &counts, &[], &criteria);
    for _ in 0..3 {
        assert_eq!(classify(25, &counts, &[], &criteria), first);
    }
    assert_eq!(first.kind, MotifType::Motif);

    let flat = classify(25, &[10; 8], &[], &criteria);
    assert_eq!(flat.std, 0.0);
    assert_eq!(flat.p_value, None);
    assert_eq!(flat.kind, MotifType::None);
}
