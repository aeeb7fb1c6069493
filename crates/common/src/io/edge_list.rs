use network_motifs::{Network, Polarity, Synapse, UnknownPolarityError};
use crate::io::fits_node_index;
use std::fs::File;
use std::io::BufRead;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line (got {0})")]
    InvalidLine(String),
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("invalid polarity")]
    Polarity(#[from] UnknownPolarityError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a directed network with one edge `source target [polarity]` per line.
///
/// Nodes are integers starting at zero. The polarity is one of `+`, `-` and `complex`. Empty lines and lines
/// starting with `%` or `#` are skipped.
pub fn read_edge_list<P>(path: P) -> Result<Network, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_edge_list(std::io::BufReader::new(file))
}

pub(crate) fn parse_edge_list<R: BufRead>(reader: R) -> Result<Network, ReadEdgeListError> {
    let mut network = Network::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
            continue;
        }
        let mut tokens = trimmed.split_ascii_whitespace();
        let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        let polarity = tokens.next().map(str::parse::<Polarity>).transpose()?;
        if tokens.next().is_some() {
            return Err(ReadEdgeListError::InvalidLine(line));
        }

        let u: usize = a.parse()?;
        let v: usize = b.parse()?;
        if !fits_node_index(u.max(v)) {
            return Err(ReadEdgeListError::InvalidLine(line));
        }
        network.add_edge(u, v, Synapse { polarity, synapses: 1, gap_junctions: 0 });
    }
    Ok(network)
}
