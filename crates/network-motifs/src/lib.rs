//! This is a library to detect [network motifs](https://en.wikipedia.org/wiki/Network_motif) in directed networks.
//!
//! A *network motif* is a small connected subgraph that occurs significantly more often in a network than in
//! randomized networks with the same degree sequence. Subgraphs that occur significantly less often are
//! *anti-motifs*.
//!
//! # Examples
//!
//! Counting the connected subgraphs with three nodes of a network.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use network_motifs::census::{census, Algorithm, CensusOptions};
//! use network_motifs::{IsomorphismTable, MotifName, Network};
//!
//! // two feed-forward loops sharing the node 2
//! let network = Network::from_edges([(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)]);
//! let table = IsomorphismTable::build(3, false)?;
//! let result = census(&network, 3, &table, Algorithm::BacktrackingInduced, &CensusOptions::default())?;
//!
//! assert_eq!(result.count(MotifName::FeedForward.class_id()), 2);
//! # Ok(())
//! # }
//! ```
//!
//! Every connected labeled subgraph is identified by its adjacency matrix.
//! ```rust
//! use network_motifs::{subgraph_of, AdjacencyMatrix, SubgraphId};
//!
//! // 0 -> 1, 0 -> 2, 1 -> 2
//! let matrix = AdjacencyMatrix::from_edges(3, [(0, 1), (0, 2), (1, 2)]);
//! assert_eq!(matrix.id(), SubgraphId::new(200));
//! assert_eq!(subgraph_of(SubgraphId::new(200), 3), matrix);
//!
//! // the representative of the class is the smallest identifier over all relabelings
//! assert_eq!(matrix.smallest_relabeling(), SubgraphId::new(38));
//! ```
//!
//! # References
//! + \[MSI02\]: Ron Milo, Shai Shen-Orr, Shalev Itzkovitz, Nadav Kashtan, Dmitri Chklovskii, and Uri Alon. "Network
//!   Motifs: Simple Building Blocks of Complex Networks". <https://doi.org/10.1126/science.298.5594.824>.
//! + \[Wer06\]: Sebastian Wernicke. "Efficient Detection of Network Motifs".
//!   <https://doi.org/10.1109/TCBB.2006.51>.
//! + \[BM01\]: Vladimir Batagelj and Andrej Mrvar. "A subquadratic triad census algorithm for large sparse
//!   networks with small maximum degree". <https://doi.org/10.1016/S0378-8733(01)00035-1>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

pub mod analysis;
pub mod census;
mod error;
mod index;
mod isomorphism;
mod labeling;
/// Named subgraphs, roles and the records of a motif search.
pub mod motif;
mod network;
pub mod randomizer;
pub mod search;
pub mod significance;

pub use error::MotifError;
pub use isomorphism::{IsomorphismTable, MAX_TABLE_SIZE};
pub use labeling::{id_of, id_of_edges, nodes_of, subgraph_of, AdjacencyMatrix, SubgraphId, MAX_SUBGRAPH_SIZE};
pub use motif::{Motif, MotifName};
pub use network::{Network, NetworkProperties, Node, Polarity, Synapse, UnknownPolarityError};
pub use search::{motif_search, SearchConfig, SearchResult};
