//! The motif search pipeline: census of the real network, census of randomized networks and classification.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{info, instrument};

use crate::analysis::{polarity_counts, polarity_frequencies};
use crate::census::{census, Algorithm, CensusOptions};
use crate::error::MotifError;
use crate::isomorphism::IsomorphismTable;
use crate::labeling::SubgraphId;
use crate::motif::{Motif, PolarityMotif};
use crate::network::{Network, Polarity};
use crate::randomizer::{randomize, RandomizerConfig, SwitchStats};
use crate::significance::{classify, MotifCriteria};

/// Parameters of [motif_search].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Number of nodes of the subgraphs.
    pub k: usize,
    /// Census engine for the real and the randomized networks.
    pub algorithm: Algorithm,
    /// Count subgraphs with self-loops.
    pub allow_self_loops: bool,
    /// Number of randomized networks. With zero, only the real network is counted.
    pub network_amount: usize,
    /// Generation of the randomized networks.
    pub randomizer: RandomizerConfig,
    /// Thresholds of the classification.
    pub criteria: MotifCriteria,
    /// Split every class by the polarity of its edges if the network has polarities.
    pub polarity_search: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 3,
            algorithm: Algorithm::default(),
            allow_self_loops: false,
            network_amount: 1000,
            randomizer: RandomizerConfig::default(),
            criteria: MotifCriteria::default(),
            polarity_search: true,
        }
    }
}

impl SearchConfig {
    /// Builds the isomorphism table for `k` and the self-loop policy of this configuration.
    pub fn table(&self) -> Result<IsomorphismTable, MotifError> {
        IsomorphismTable::build(self.k, self.allow_self_loops)
    }
}

/// The outcome of [motif_search].
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    /// Every class of the table, keyed by its representative.
    pub motifs: BTreeMap<SubgraphId, Motif>,
    /// Counters of the Markov chain over all randomized networks.
    pub switching: SwitchStats,
}

impl SearchResult {
    /// The motif of the class with representative `id`.
    pub fn get(&self, id: SubgraphId) -> Option<&Motif> {
        self.motifs.get(&id)
    }

    /// The classes that were classified as motifs.
    pub fn significant(&self) -> impl Iterator<Item = &Motif> + '_ {
        self.motifs.values().filter(|motif| motif.verdict.as_ref().is_some_and(|verdict| verdict.is_motif()))
    }
}

/// Counts of one randomized network.
struct RandomCounts {
    classes: BTreeMap<SubgraphId, u64>,
    polarities: BTreeMap<SubgraphId, Vec<u64>>,
}

/// Finds the motifs of `network` among the classes of `table`.
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use network_motifs::search::{motif_search, SearchConfig};
/// use network_motifs::{MotifName, Network};
///
/// let network = Network::from_edges([(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)]);
/// let config = SearchConfig { network_amount: 20, ..SearchConfig::default() };
/// let result = motif_search(&network, &config.table()?, &config)?;
///
/// let feed_forward = result.get(MotifName::FeedForward.class_id()).unwrap();
/// assert_eq!(feed_forward.n_real, 2);
/// assert_eq!(feed_forward.random_counts.len(), 20);
/// assert!(feed_forward.verdict.is_some());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the errors of [census].
#[instrument(skip_all, fields(k = config.k, algorithm = %config.algorithm, network_amount = config.network_amount))]
pub fn motif_search(
    network: &Network,
    table: &IsomorphismTable,
    config: &SearchConfig,
) -> Result<SearchResult, MotifError> {
    let options = CensusOptions { record_occurrences: true, seed: config.randomizer.seed };
    let real = census(network, config.k, table, config.algorithm, &options)?;

    let alphabet = if config.polarity_search && network.uses_polarity() { network.polarity_alphabet() } else { vec![] };

    let mut motifs: BTreeMap<SubgraphId, Motif> = table
        .representatives()
        .map(|id| {
            let mut motif = Motif::new(id, config.k);
            motif.n_real = real.count(id);
            motif.occurrences = real.occurrences(id).to_vec();
            if !alphabet.is_empty() {
                motif.polarity_motifs = polarity_frequencies(&motif.occurrences, &motif.adjacency, network, &alphabet)
                    .into_iter()
                    .map(|frequency| PolarityMotif {
                        polarity: frequency.polarity,
                        n_real: frequency.occurrences.len() as u64,
                        random_counts: vec![],
                        occurrences: frequency.occurrences,
                        verdict: None,
                    })
                    .collect();
            }
            (id, motif)
        })
        .collect();

    let mut result = SearchResult::default();
    if config.network_amount == 0 {
        info!(number_of_classes = motifs.len(), "skipping randomized networks");
        result.motifs = motifs;
        return Ok(result);
    }

    let ensemble = randomize(network, config.network_amount, &config.randomizer);
    let random_counts = random_census(&ensemble.networks, table, &motifs, &alphabet, config)?;
    for counts in &random_counts {
        for motif in motifs.values_mut() {
            motif.random_counts.push(counts.classes.get(&motif.id).copied().unwrap_or(0));
            let polarities = counts.polarities.get(&motif.id);
            for (i, polarity_motif) in motif.polarity_motifs.iter_mut().enumerate() {
                polarity_motif.random_counts.push(polarities.and_then(|c| c.get(i)).copied().unwrap_or(0));
            }
        }
    }

    classify_motifs(&mut motifs, &config.criteria);
    result.motifs = motifs;
    result.switching = ensemble.stats;
    Ok(result)
}

/// Runs the census on every randomized network in parallel.
#[instrument(skip_all, fields(networks = networks.len()))]
fn random_census(
    networks: &[Network],
    table: &IsomorphismTable,
    motifs: &BTreeMap<SubgraphId, Motif>,
    alphabet: &[Polarity],
    config: &SearchConfig,
) -> Result<Vec<RandomCounts>, MotifError> {
    let options = CensusOptions { record_occurrences: !alphabet.is_empty(), seed: config.randomizer.seed };
    networks
        .par_iter()
        .map(|random| -> Result<RandomCounts, MotifError> {
            let result = census(random, config.k, table, config.algorithm, &options)?;
            let polarities = result
                .all_occurrences()
                .iter()
                .filter_map(|(class, occurrences)| {
                    let motif = motifs.get(class)?;
                    Some((*class, polarity_counts(occurrences, &motif.adjacency, random, alphabet)))
                })
                .collect();
            Ok(RandomCounts { classes: result.counts().clone(), polarities })
        })
        .collect()
}

#[instrument(skip_all)]
fn classify_motifs(motifs: &mut BTreeMap<SubgraphId, Motif>, criteria: &MotifCriteria) {
    for motif in motifs.values_mut() {
        let verdict = classify(motif.n_real, &motif.random_counts, &motif.occurrences, criteria);
        info!(
            id = motif.id.value(),
            name = %motif.label(),
            n_real = verdict.n_real,
            n_rand = verdict.n_rand,
            z_score = ?verdict.z_score,
            kind = %verdict.kind
        );
        motif.verdict = Some(verdict);

        for polarity_motif in &mut motif.polarity_motifs {
            let verdict =
                classify(polarity_motif.n_real, &polarity_motif.random_counts, &polarity_motif.occurrences, criteria);
            polarity_motif.verdict = Some(verdict);
        }
    }
    info!(number_of_motifs = motifs.values().filter(|m| m.verdict.as_ref().is_some_and(|v| v.is_motif())).count());
}
