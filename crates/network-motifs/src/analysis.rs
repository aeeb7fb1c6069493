//! Statistics over the occurrences of a motif.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::census::Occurrence;
use crate::labeling::{nodes_of, AdjacencyMatrix};
use crate::motif::{role, role_mapping, Role};
use crate::network::{Network, Node, Polarity};

fn sort_by_frequency(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_unstable_by(|(a, x), (b, y)| y.cmp(x).then_with(|| a.cmp(b)));
    counts
}

/// How often every node takes part in one of the occurrences, most frequent first. Nodes are given by their label.
pub fn node_appearances(occurrences: &[Occurrence], network: &Network) -> Vec<(String, usize)> {
    let mut counts = HashMap::new();
    for occurrence in occurrences {
        for u in nodes_of(occurrence) {
            *counts.entry(network.label(u)).or_default() += 1;
        }
    }
    sort_by_frequency(counts)
}

/// For every role of `matrix`, how often each node fills it, most frequent first.
pub fn node_roles(
    occurrences: &[Occurrence],
    matrix: &AdjacencyMatrix,
    network: &Network,
) -> BTreeMap<Role, Vec<(String, usize)>> {
    let mut counts: Vec<HashMap<String, usize>> = vec![HashMap::new(); matrix.k()];
    for occurrence in occurrences {
        let Some(mapping) = role_mapping(occurrence, matrix) else {
            warn!(?occurrence, "occurrence does not match its motif");
            continue;
        };
        for (i, u) in mapping.into_iter().enumerate() {
            *counts[i].entry(network.label(u)).or_default() += 1;
        }
    }
    counts.into_iter().enumerate().map(|(i, counts)| (role(i), sort_by_frequency(counts))).collect()
}

/// The occurrences of a motif whose edges have the given polarities.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolarityFrequency {
    /// Polarity of every edge, in the order of the role pattern.
    pub polarity: Vec<Polarity>,
    /// The matching occurrences.
    pub occurrences: Vec<Occurrence>,
}

impl PolarityFrequency {
    /// Number of matching occurrences.
    pub fn frequency(&self) -> usize {
        self.occurrences.len()
    }
}

/// All sequences of `length` polarities from `alphabet` in lexicographic order.
pub fn polarity_combinations(alphabet: &[Polarity], length: usize) -> Vec<Vec<Polarity>> {
    let mut combinations = vec![vec![]];
    for _ in 0..length {
        combinations = combinations
            .into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&p| {
                    let mut next = prefix.clone();
                    next.push(p);
                    next
                })
            })
            .collect();
    }
    combinations
}

/// Splits the occurrences of the motif `matrix` by the polarities of their edges.
///
/// The result has one entry for each of the `|alphabet|^edges` combinations, in the order of
/// [polarity_combinations]. Occurrences with an edge whose polarity is unknown or not in `alphabet` are dropped.
pub fn polarity_frequencies(
    occurrences: &[Occurrence],
    matrix: &AdjacencyMatrix,
    network: &Network,
    alphabet: &[Polarity],
) -> Vec<PolarityFrequency> {
    let mut frequencies: Vec<_> = polarity_combinations(alphabet, matrix.edge_count())
        .into_iter()
        .map(|polarity| PolarityFrequency { polarity, occurrences: vec![] })
        .collect();

    for occurrence in occurrences {
        let Some(index) = polarity_index(occurrence, matrix, network, alphabet) else {
            continue;
        };
        frequencies[index].occurrences.push(occurrence.clone());
    }
    frequencies
}

/// Like [polarity_frequencies], but only counts.
pub(crate) fn polarity_counts(
    occurrences: &[Occurrence],
    matrix: &AdjacencyMatrix,
    network: &Network,
    alphabet: &[Polarity],
) -> Vec<u64> {
    let mut counts = vec![0; alphabet.len().pow(matrix.edge_count() as u32)];
    for occurrence in occurrences {
        if let Some(index) = polarity_index(occurrence, matrix, network, alphabet) {
            counts[index] += 1;
        }
    }
    counts
}

/// The position of the polarity sequence of `occurrence` in [polarity_combinations].
fn polarity_index(
    occurrence: &[(Node, Node)],
    matrix: &AdjacencyMatrix,
    network: &Network,
    alphabet: &[Polarity],
) -> Option<usize> {
    let mapping = role_mapping(occurrence, matrix)?;
    matrix.edges().try_fold(0, |index, (i, j)| {
        let polarity = network.polarity(mapping[i], mapping[j])?;
        let digit = alphabet.iter().position(|&p| p == polarity)?;
        Some(index * alphabet.len() + digit)
    })
}
