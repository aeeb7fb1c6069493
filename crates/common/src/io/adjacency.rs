use network_motifs::{Network, Synapse};
use crate::io::fits_node_index;
use std::fs::File;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadAdjacencyError {
    #[error("invalid line (expected 'v1 v2 w', got {0})")]
    InvalidLine(String),
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads the simple adjacency format of the classic motif papers: one edge `v1 v2 w` per line.
///
/// The edge is `v1 -> v2` and `w` is its number of synapses. Node indices are used as they are, so a file with
/// indices starting at one has an isolated node zero.
pub fn read_adjacency<P>(path: P) -> Result<Network, ReadAdjacencyError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_adjacency(std::io::BufReader::new(file))
}

pub(crate) fn parse_adjacency<R: BufRead>(reader: R) -> Result<Network, ReadAdjacencyError> {
    let mut network = Network::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let tokens: Vec<_> = line.split_ascii_whitespace().collect();
        let [a, b, w] = tokens.as_slice() else {
            return Err(ReadAdjacencyError::InvalidLine(line.clone()));
        };
        let u: usize = a.parse()?;
        let v: usize = b.parse()?;
        if !fits_node_index(u.max(v)) {
            return Err(ReadAdjacencyError::InvalidLine(line.clone()));
        }
        let synapses: u32 = w.parse()?;
        network.add_edge(u, v, Synapse { polarity: None, synapses, gap_junctions: 0 });
    }
    Ok(network)
}

#[cfg(test)]
mod test {
    use super::*;
    use network_motifs::Node;

    #[test]
    fn one_based() {
        let network = parse_adjacency("1 2 1\n2 3 4\n1 3 1\n".as_bytes()).unwrap();
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.in_degree(Node::new(0)) + network.out_degree(Node::new(0)), 0);
        assert_eq!(network.synapse(Node::new(2), Node::new(3)).unwrap().synapses, 4);
    }

    #[test]
    fn missing_weight() {
        assert!(matches!(parse_adjacency("1 2\n".as_bytes()), Err(ReadAdjacencyError::InvalidLine(_))));
    }

    #[test]
    fn node_index_out_of_range() {
        let err = parse_adjacency("5000000000 1 1\n".as_bytes());
        assert!(matches!(err, Err(ReadAdjacencyError::InvalidLine(_))));
    }
}
