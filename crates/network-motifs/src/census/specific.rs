//! Hand-coded search for the named motifs.
//!
//! Each pattern is matched directly on the adjacency structure and only counted if the subgraph induced by its
//! nodes consists of exactly the pattern edges. The counts therefore agree with the induced census engines and
//! serve as an independent check for them.

use tracing::{debug, instrument};

use crate::census::Recorder;
use crate::error::MotifError;
use crate::motif::MotifName;
use crate::network::{Network, Node};

struct Matcher<'n, 'r, 't> {
    network: &'n Network,
    recorder: &'r mut Recorder<'t>,
}

impl Matcher<'_, '_, '_> {
    /// Counts the pattern on `nodes` if the induced subgraph has exactly `pattern_edges` edges.
    fn count(&mut self, name: MotifName, nodes: &[Node], pattern_edges: usize) {
        let mut nodes = nodes.to_vec();
        nodes.sort_unstable();
        let edges = self.network.induced_edges(&nodes);
        if edges.len() != pattern_edges {
            return;
        }
        debug!(motif = %name, nodes = ?nodes);
        self.recorder.record(&nodes, edges);
    }

    fn successors(&self, x: Node) -> Vec<Node> {
        let mut successors: Vec<_> = self.network.successors(x).filter(|&y| y != x).collect();
        successors.sort_unstable();
        successors
    }

    fn predecessors(&self, x: Node) -> Vec<Node> {
        let mut predecessors: Vec<_> = self.network.predecessors(x).filter(|&y| y != x).collect();
        predecessors.sort_unstable();
        predecessors
    }

    /// `x <-> y`, each pair once.
    fn mutual_regulation(&mut self) {
        for x in self.network.nodes() {
            for y in self.successors(x) {
                if x < y && self.network.has_edge(y, x) {
                    self.count(MotifName::MutualRegulation, &[x, y], 2);
                }
            }
        }
    }

    /// `x -> y, x -> z`.
    fn fan_out(&mut self) {
        for x in self.network.nodes() {
            let successors = self.successors(x);
            for (i, &y) in successors.iter().enumerate() {
                for &z in &successors[i + 1..] {
                    self.count(MotifName::FanOut, &[x, y, z], 2);
                }
            }
        }
    }

    /// `y -> x, z -> x`.
    fn fan_in(&mut self) {
        for x in self.network.nodes() {
            let predecessors = self.predecessors(x);
            for (i, &y) in predecessors.iter().enumerate() {
                for &z in &predecessors[i + 1..] {
                    self.count(MotifName::FanIn, &[x, y, z], 2);
                }
            }
        }
    }

    /// `x -> y, y -> z`.
    fn cascade(&mut self) {
        for x in self.network.nodes() {
            for y in self.successors(x) {
                for z in self.successors(y) {
                    if z != x {
                        self.count(MotifName::Cascade, &[x, y, z], 2);
                    }
                }
            }
        }
    }

    /// `x -> y, x -> z, y -> z`.
    fn feed_forward(&mut self) {
        for x in self.network.nodes() {
            for y in self.successors(x) {
                for z in self.successors(y) {
                    if z != x && self.network.has_edge(x, z) {
                        self.count(MotifName::FeedForward, &[x, y, z], 3);
                    }
                }
            }
        }
    }

    /// `x -> w, x -> z, y -> w, y -> z` with `x < y` and `w < z`.
    fn bi_fan(&mut self) {
        for x in self.network.nodes() {
            let targets = self.successors(x);
            for (i, &w) in targets.iter().enumerate() {
                for &z in &targets[i + 1..] {
                    for y in self.predecessors(w) {
                        if y > x && y != z && self.network.has_edge(y, z) {
                            self.count(MotifName::BiFan, &[x, y, w, z], 4);
                        }
                    }
                }
            }
        }
    }

    /// `x -> y, x -> z, y -> w, z -> w` with `y < z`.
    fn bi_parallel(&mut self) {
        for x in self.network.nodes() {
            let targets = self.successors(x);
            for (i, &y) in targets.iter().enumerate() {
                for &z in &targets[i + 1..] {
                    for w in self.successors(y) {
                        if w != x && w != z && self.network.has_edge(z, w) {
                            self.count(MotifName::BiParallel, &[x, y, z, w], 4);
                        }
                    }
                }
            }
        }
    }

    /// `x -> y, x -> z, x -> w`.
    fn sim_3(&mut self) {
        for x in self.network.nodes() {
            let targets = self.successors(x);
            for (i, &y) in targets.iter().enumerate() {
                for (j, &z) in targets.iter().enumerate().skip(i + 1) {
                    for &w in &targets[j + 1..] {
                        self.count(MotifName::Sim3, &[x, y, z, w], 3);
                    }
                }
            }
        }
    }
}

#[instrument(skip_all)]
pub(crate) fn specific(network: &Network, k: usize, recorder: &mut Recorder<'_>) -> Result<(), MotifError> {
    let mut matcher = Matcher { network, recorder };
    match k {
        2 => matcher.mutual_regulation(),
        3 => {
            matcher.fan_out();
            matcher.fan_in();
            matcher.cascade();
            matcher.feed_forward();
        }
        4 => {
            matcher.bi_fan();
            matcher.bi_parallel();
            matcher.sim_3();
        }
        _ => return Err(MotifError::UnsupportedSize { algorithm: "specific", k }),
    }
    Ok(())
}
