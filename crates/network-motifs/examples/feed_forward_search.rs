use network_motifs::census::{census, Algorithm, CensusOptions};
use network_motifs::motif::role_pattern;
use network_motifs::{motif_search, Network, SearchConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // ten feed-forward loops hanging off a cycle
    let mut edges = vec![];
    for i in 0..10 {
        let x = 3 * i;
        edges.extend([(x, x + 1), (x, x + 2), (x + 1, x + 2), (x + 2, (x + 3) % 30)]);
    }
    let network = Network::from_edges(edges);

    let config = SearchConfig { network_amount: 200, ..SearchConfig::default() };
    let table = config.table()?;

    let real = census(&network, config.k, &table, Algorithm::Esu, &CensusOptions::default())?;
    for (class, count) in real.counts() {
        println!("{:>4} {count:>4} {:?}", class.value(), role_pattern(&table.subgraph(*class)));
    }

    let result = motif_search(&network, &table, &config)?;
    for motif in result.motifs.values().filter(|motif| motif.n_real > 0) {
        let Some(verdict) = &motif.verdict else { continue };
        println!(
            "{:<14} n_real {:>3} n_rand {:>7.2} z {:>8} {}",
            motif.label(),
            motif.n_real,
            verdict.n_rand,
            verdict.z_score.map(|z| format!("{z:.2}")).unwrap_or_else(|| "-".to_string()),
            verdict.kind
        );
    }
    println!("acceptance rate {:.3}", result.switching.acceptance_rate());
    Ok(())
}
