//! Subgraph census engines.
//!
//! Every engine enumerates the connected subgraphs with `k` nodes of a [Network] and aggregates them by
//! isomorphism class. Occurrences whose identifier is not part of the [IsomorphismTable] are skipped.

mod backtracking;
mod esu;
mod specific;
mod triadic;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, instrument, trace};

use crate::error::MotifError;
use crate::isomorphism::IsomorphismTable;
use crate::labeling::{id_of, SubgraphId};
use crate::network::{Network, Node};

pub use triadic::{triad_census, TriadType, TriadicCensus};

/// The edges of one occurrence of a subgraph, sorted.
pub type Occurrence = Vec<(Node, Node)>;

/// Census engine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// Edge-extension backtracking over node sets. Counts induced subgraphs.
    #[default]
    BacktrackingInduced,
    /// Edge-extension backtracking over edge sets. Counts the visited edge sets themselves.
    BacktrackingNonInduced,
    /// Randomized enumeration of connected node sets (ESU). Counts induced subgraphs.
    Esu,
    /// Batagelj-Mrvar triad census. Only for `k = 3`.
    TriadicCensus,
    /// Hand-coded search for the named motifs of size 2, 3 and 4. Counts induced subgraphs.
    Specific,
}

impl Algorithm {
    /// All census engines.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BacktrackingInduced,
        Algorithm::BacktrackingNonInduced,
        Algorithm::Esu,
        Algorithm::TriadicCensus,
        Algorithm::Specific,
    ];

    /// A short name of the engine.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BacktrackingInduced => "induced",
            Algorithm::BacktrackingNonInduced => "non-induced",
            Algorithm::Esu => "esu",
            Algorithm::TriadicCensus => "triadic",
            Algorithm::Specific => "specific",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm name could not be parsed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown census algorithm (got {0})")]
pub struct UnknownAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithmError(s.to_string()))
    }
}

/// Options shared by all census engines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CensusOptions {
    /// Keep the edges of every counted occurrence.
    pub record_occurrences: bool,
    /// Seed for engines that make random choices.
    pub seed: u64,
}

impl Default for CensusOptions {
    fn default() -> Self {
        Self { record_occurrences: true, seed: 42 }
    }
}

/// Occurrence counts per isomorphism class.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CensusResult {
    counts: BTreeMap<SubgraphId, u64>,
    occurrences: BTreeMap<SubgraphId, Vec<Occurrence>>,
}

impl CensusResult {
    /// The number of occurrences of the class. Classes that were never found have count zero.
    pub fn count(&self, class: SubgraphId) -> u64 {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    /// The counts of all classes that were found at least once.
    pub fn counts(&self) -> &BTreeMap<SubgraphId, u64> {
        &self.counts
    }

    /// The recorded occurrences of the class.
    pub fn occurrences(&self, class: SubgraphId) -> &[Occurrence] {
        self.occurrences.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The recorded occurrences of all classes.
    pub fn all_occurrences(&self) -> &BTreeMap<SubgraphId, Vec<Occurrence>> {
        &self.occurrences
    }

    /// Total number of occurrences over all classes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub(crate) fn add(&mut self, class: SubgraphId, count: u64) {
        if count > 0 {
            *self.counts.entry(class).or_default() += count;
        }
    }

    pub(crate) fn push(&mut self, class: SubgraphId, occurrence: Occurrence) {
        self.occurrences.entry(class).or_default().push(occurrence);
    }
}

/// Counts the connected subgraphs with `k` nodes of `network` per isomorphism class of `table`.
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use network_motifs::census::{census, Algorithm, CensusOptions};
/// use network_motifs::{IsomorphismTable, MotifName, Network};
///
/// // a feed-forward loop
/// let network = Network::from_edges([(1, 2), (2, 3), (1, 3)]);
/// let table = IsomorphismTable::build(3, false)?;
/// let result = census(&network, 3, &table, Algorithm::Esu, &CensusOptions::default())?;
///
/// assert_eq!(result.count(MotifName::FeedForward.class_id()), 1);
/// assert_eq!(result.total(), 1);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns `SizeTooSmall` if `k < 2`, `TableMismatch` if the table was built for another size, and
/// `UnsupportedSize` if the algorithm does not support `k`. The triadic census returns `SelfLoopsUnsupported` for
/// tables with self-loop classes.
#[instrument(skip_all, fields(k = k, algorithm = %algorithm))]
pub fn census(
    network: &Network,
    k: usize,
    table: &IsomorphismTable,
    algorithm: Algorithm,
    options: &CensusOptions,
) -> Result<CensusResult, MotifError> {
    if k < 2 {
        return Err(MotifError::SizeTooSmall(k));
    }
    if table.k() != k {
        return Err(MotifError::TableMismatch { table: table.k(), requested: k });
    }
    let mut recorder = Recorder::new(table, options.record_occurrences);
    match algorithm {
        Algorithm::BacktrackingInduced => backtracking::induced(network, k, &mut recorder),
        Algorithm::BacktrackingNonInduced => backtracking::non_induced(network, k, &mut recorder),
        Algorithm::Esu => esu::esu(network, k, options.seed, &mut recorder),
        Algorithm::TriadicCensus => triadic::triadic(network, k, &mut recorder)?,
        Algorithm::Specific => specific::specific(network, k, &mut recorder)?,
    }
    let result = recorder.finish();
    info!(number_of_classes = result.counts.len(), number_of_occurrences = result.total());
    Ok(result)
}

/// Counts occurrences by class and optionally keeps their edges.
#[derive(Debug)]
pub(crate) struct Recorder<'a> {
    table: &'a IsomorphismTable,
    record_occurrences: bool,
    skipped: u64,
    result: CensusResult,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(table: &'a IsomorphismTable, record_occurrences: bool) -> Self {
        Self { table, record_occurrences, skipped: 0, result: CensusResult::default() }
    }

    pub(crate) fn table(&self) -> &IsomorphismTable {
        self.table
    }

    /// Counts the subgraph on the sorted `nodes` with the given `edges`. Returns the class, if there is one.
    pub(crate) fn record(&mut self, nodes: &[Node], edges: Occurrence) -> Option<SubgraphId> {
        let id = id_of(nodes, &edges);
        match self.table.class_of(id) {
            Some(class) => {
                self.record_class(class, edges);
                Some(class)
            }
            None => {
                trace!(id = id.value(), "skipping unmapped subgraph");
                self.skipped += 1;
                None
            }
        }
    }

    /// Counts an occurrence whose class is already known.
    pub(crate) fn record_class(&mut self, class: SubgraphId, edges: Occurrence) {
        self.result.add(class, 1);
        if self.record_occurrences {
            self.result.push(class, edges);
        }
    }

    /// Counts `count` occurrences of a class without recording them.
    pub(crate) fn add(&mut self, class: SubgraphId, count: u64) {
        self.result.add(class, count);
    }

    /// Records an occurrence that was already counted with [Recorder::add].
    pub(crate) fn push(&mut self, class: SubgraphId, edges: Occurrence) {
        if self.record_occurrences {
            self.result.push(class, edges);
        }
    }

    pub(crate) fn is_recording(&self) -> bool {
        self.record_occurrences
    }

    pub(crate) fn finish(self) -> CensusResult {
        if self.skipped > 0 {
            info!(skipped = self.skipped, "skipped subgraphs outside of the isomorphism table");
        }
        self.result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::motif::MotifName;
    use crate::tests::{cycle_graph, feed_forward_example, path_graph, random_digraph};

    fn run(network: &Network, k: usize, algorithm: Algorithm) -> CensusResult {
        let table = IsomorphismTable::build(k, false).unwrap();
        census(network, k, &table, algorithm, &CensusOptions::default()).unwrap()
    }

    #[test]
    fn table_mismatch() {
        let table = IsomorphismTable::build(3, false).unwrap();
        let network = path_graph(4);
        assert_eq!(
            census(&network, 4, &table, Algorithm::Esu, &CensusOptions::default()),
            Err(MotifError::TableMismatch { table: 3, requested: 4 })
        );
        assert_eq!(
            census(&network, 1, &table, Algorithm::Esu, &CensusOptions::default()),
            Err(MotifError::SizeTooSmall(1))
        );
    }

    #[test]
    fn parse_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert!("fanmod".parse::<Algorithm>().is_err());
    }

    #[test]
    fn feed_forward_loop() {
        let network = feed_forward_example();
        for algorithm in Algorithm::ALL.into_iter().filter(|&a| a != Algorithm::BacktrackingNonInduced) {
            let result = run(&network, 3, algorithm);
            assert_eq!(result.count(MotifName::FeedForward.class_id()), 1, "{algorithm}");
            assert_eq!(result.count(MotifName::Cascade.class_id()), 0, "{algorithm}");
            assert_eq!(result.count(MotifName::FanOut.class_id()), 0, "{algorithm}");
            assert_eq!(result.count(MotifName::FanIn.class_id()), 0, "{algorithm}");
        }
    }

    #[test]
    fn non_induced_counts_every_connected_edge_set() {
        let network = feed_forward_example();
        let result = run(&network, 3, Algorithm::BacktrackingNonInduced);
        for name in [MotifName::FeedForward, MotifName::Cascade, MotifName::FanOut, MotifName::FanIn] {
            assert_eq!(result.count(name.class_id()), 1, "{name}");
        }
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn mutual_regulation() {
        let network = Network::from_edges([(1, 2), (2, 1)]);
        for algorithm in [Algorithm::BacktrackingInduced, Algorithm::Esu, Algorithm::Specific] {
            let result = run(&network, 2, algorithm);
            assert_eq!(result.count(MotifName::MutualRegulation.class_id()), 1, "{algorithm}");
            assert_eq!(result.total(), 1, "{algorithm}");
        }
    }

    #[test]
    fn cycle_is_a_chain_of_cascades() {
        let network = cycle_graph(5);
        let result = run(&network, 3, Algorithm::BacktrackingInduced);
        assert_eq!(result.count(MotifName::Cascade.class_id()), 5);
        assert_eq!(result.total(), 5);
        assert_eq!(result.occurrences(MotifName::Cascade.class_id()).len(), 5);
    }

    #[test]
    fn occurrences_are_optional() {
        let network = random_digraph(20, 0.2, 1);
        let table = IsomorphismTable::build(3, false).unwrap();
        let options = CensusOptions { record_occurrences: false, ..CensusOptions::default() };
        let result = census(&network, 3, &table, Algorithm::Esu, &options).unwrap();
        assert!(result.total() > 0);
        assert!(result.all_occurrences().is_empty());
    }

    #[test]
    fn recorded_occurrences_match_their_class() {
        let network = random_digraph(15, 0.25, 7);
        let table = IsomorphismTable::build(3, false).unwrap();
        let result = census(&network, 3, &table, Algorithm::BacktrackingInduced, &CensusOptions::default()).unwrap();
        for (&class, occurrences) in result.all_occurrences() {
            assert_eq!(occurrences.len() as u64, result.count(class));
            for occurrence in occurrences {
                let id = crate::labeling::id_of_edges(occurrence);
                assert_eq!(table.class_of(id), Some(class));
            }
        }
    }
}
