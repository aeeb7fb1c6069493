mod adjacency;
mod edge_list;
mod names;

use std::path::Path;

use clap::ValueEnum;
use network_motifs::Network;
use thiserror::Error;
use tracing::info;

pub use adjacency::{read_adjacency, ReadAdjacencyError};
pub use edge_list::{read_edge_list, ReadEdgeListError};
pub use names::{read_names, ReadNamesError};

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum NetworkFileType {
    EdgeList,
    Adjacency,
}

#[derive(Error, Debug)]
pub enum ReadNetworkError {
    #[error(transparent)]
    EdgeList(#[from] ReadEdgeListError),
    #[error(transparent)]
    Adjacency(#[from] ReadAdjacencyError),
    #[error(transparent)]
    Names(#[from] ReadNamesError),
}

/// Node indices must stay below `u32::MAX`, the limit of the graph's index type.
pub(crate) fn fits_node_index(u: usize) -> bool {
    u < u32::MAX as usize
}

/// Reads a network in the given format and attaches the names from `names`, if given.
pub fn read_network<P, Q>(path: P, file_type: NetworkFileType, names: Option<Q>) -> Result<Network, ReadNetworkError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut network = match file_type {
        NetworkFileType::EdgeList => read_edge_list(path)?,
        NetworkFileType::Adjacency => read_adjacency(path)?,
    };
    if let Some(names) = names {
        let names = read_names(names)?;
        info!(number_of_names = names.len(), number_of_nodes = network.node_count());
        network.set_names(names);
    }
    Ok(network)
}
