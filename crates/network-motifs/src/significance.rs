//! Decides whether a subgraph class is a motif by comparing its count in the real network with the counts in
//! randomized networks.
//!
//! + \[MSI02\]: Ron Milo, Shai Shen-Orr, Shalev Itzkovitz, Nadav Kashtan, Dmitri Chklovskii, and Uri Alon. "Network
//!   Motifs: Simple Building Blocks of Complex Networks". <https://doi.org/10.1126/science.298.5594.824>.

use std::fmt::{Display, Formatter};

use petgraph::unionfind::UnionFind;
use rand::seq::SliceRandom;
use rand::Rng;
use statrs::function::erf::erfc;
use tracing::debug;

use crate::census::Occurrence;
use crate::labeling::nodes_of;

/// Thresholds of the motif criteria.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotifCriteria {
    /// Significance level of the z-test.
    pub alpha: f64,
    /// Relative difference between real and mean random count required for a (anti-)motif.
    pub frequency_threshold: f64,
    /// Minimum number of node-disjoint occurrences of a motif.
    pub uniqueness_threshold: usize,
    /// Apply the uniqueness test.
    pub use_uniqueness: bool,
}

impl Default for MotifCriteria {
    fn default() -> Self {
        Self { alpha: 0.01, frequency_threshold: 0.1, uniqueness_threshold: 3, use_uniqueness: false }
    }
}

/// Final classification of a subgraph class.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum MotifType {
    /// Significantly over-represented.
    Motif,
    /// Significantly under-represented.
    AntiMotif,
    /// Neither.
    None,
}

impl Display for MotifType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MotifType::Motif => "motif",
            MotifType::AntiMotif => "anti-motif",
            MotifType::None => "none",
        })
    }
}

/// The outcome of the motif criteria for one subgraph class.
#[derive(Clone, Debug, PartialEq)]
pub struct MotifVerdict {
    /// The classification.
    pub kind: MotifType,
    /// Count in the real network.
    pub n_real: u64,
    /// Mean count in the randomized networks.
    pub n_rand: f64,
    /// Standard deviation of the counts in the randomized networks.
    pub std: f64,
    /// `(n_real - n_rand) / std`. `None` if the deviation is zero.
    pub z_score: Option<f64>,
    /// One-sided tail at `|z_score|`: the probability of a standard normal variable exceeding it. Not doubled.
    pub p_value: Option<f64>,
    /// Number of node-disjoint occurrences. Only computed if the uniqueness test is used.
    pub uniq: Option<usize>,
    /// `p_value < alpha`.
    pub is_significant: bool,
    /// The real count exceeds the mean random count by the frequency threshold.
    pub is_frequent: bool,
    /// The mean random count exceeds the real count by the frequency threshold.
    pub is_anti_frequent: bool,
    /// Enough node-disjoint occurrences. Always true if the uniqueness test is not used.
    pub is_unique: bool,
}

impl MotifVerdict {
    /// Returns whether the class is a motif.
    pub fn is_motif(&self) -> bool {
        self.kind == MotifType::Motif
    }
}

/// Mean and population standard deviation.
pub fn mean_std(samples: &[u64]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Survival function of the standard normal distribution.
fn normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// Number of groups of occurrences that share no node, i.e. the weakly connected components of the union of all
/// occurrences.
pub fn disjoint_occurrences(occurrences: &[Occurrence]) -> usize {
    let nodes = nodes_of(&occurrences.concat());
    if nodes.is_empty() {
        return 0;
    }
    let index = |u| nodes.binary_search(&u).unwrap_or_default();
    let mut components = UnionFind::new(nodes.len());
    for &(u, v) in occurrences.iter().flatten() {
        components.union(index(u), index(v));
    }
    let mut roots = components.into_labeling();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Applies the motif criteria to a class with `n_real` occurrences in the real network and `random_counts`
/// occurrences in the randomized networks.
///
/// The result only depends on the arguments.
///
/// ```rust
/// use network_motifs::significance::{classify, MotifCriteria, MotifType};
///
/// let verdict = classify(30, &[10, 12, 8, 11, 9], &[], &MotifCriteria::default());
/// assert_eq!(verdict.kind, MotifType::Motif);
/// assert_eq!(verdict.n_rand, 10.0);
///
/// // no variation in the randomized networks
/// let verdict = classify(30, &[10, 10, 10], &[], &MotifCriteria::default());
/// assert!(!verdict.is_significant);
/// assert_eq!(verdict.kind, MotifType::None);
/// ```
pub fn classify(
    n_real: u64,
    random_counts: &[u64],
    occurrences: &[Occurrence],
    criteria: &MotifCriteria,
) -> MotifVerdict {
    let (n_rand, std) = mean_std(random_counts);
    let real = n_real as f64;

    let (z_score, p_value) = if std > 0.0 {
        let z = (real - n_rand) / std;
        (Some(z), Some(normal_sf(z.abs())))
    } else {
        (None, None)
    };
    let is_significant = p_value.is_some_and(|p| p < criteria.alpha);
    let is_frequent = real - n_rand > criteria.frequency_threshold * n_rand;
    let is_anti_frequent = n_rand - real > criteria.frequency_threshold * n_rand;

    let uniq = criteria.use_uniqueness.then(|| disjoint_occurrences(occurrences));
    let is_unique = uniq.map_or(true, |uniq| uniq >= criteria.uniqueness_threshold);

    let kind = if is_unique && is_significant && is_frequent {
        MotifType::Motif
    } else if is_significant && is_anti_frequent {
        MotifType::AntiMotif
    } else {
        MotifType::None
    };
    debug!(n_real, n_rand, std, ?z_score, ?p_value, %kind);

    MotifVerdict {
        kind,
        n_real,
        n_rand,
        std,
        z_score,
        p_value,
        uniq,
        is_significant,
        is_frequent,
        is_anti_frequent,
        is_unique,
    }
}

/// Distribution of z-scores obtained by resampling `random_counts` with replacement.
///
/// Every iteration draws `sample_size` counts. Iterations whose sample has no variation are skipped.
pub fn z_score_bootstrap<R: Rng + ?Sized>(
    n_real: u64,
    random_counts: &[u64],
    iterations: usize,
    sample_size: usize,
    rng: &mut R,
) -> Vec<f64> {
    if random_counts.is_empty() {
        return vec![];
    }
    let mut sample = Vec::with_capacity(sample_size);
    (0..iterations)
        .filter_map(|_| {
            sample.clear();
            sample.extend((0..sample_size).filter_map(|_| random_counts.choose(rng)));
            let (mean, std) = mean_std(&sample);
            (std > 0.0).then(|| (n_real as f64 - mean) / std)
        })
        .collect()
}
