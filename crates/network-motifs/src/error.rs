use thiserror::Error;

/// Errors of the motif search.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MotifError {
    /// Subgraphs need at least two nodes.
    #[error("subgraph size must be at least 2 (got {0})")]
    SizeTooSmall(usize),
    /// Building the isomorphism table is infeasible for the requested size.
    #[error("isomorphism table for size {k} is intractable (at most {max} supported)")]
    IntractableSize {
        /// Requested subgraph size.
        k: usize,
        /// Largest supported subgraph size.
        max: usize,
    },
    /// The algorithm only supports certain subgraph sizes.
    #[error("{algorithm} does not support subgraph size {k}")]
    UnsupportedSize {
        /// Name of the census algorithm.
        algorithm: &'static str,
        /// Requested subgraph size.
        k: usize,
    },
    /// The algorithm cannot tell subgraphs with self-loops apart from those without.
    #[error("{0} does not support isomorphism tables with self-loops")]
    SelfLoopsUnsupported(&'static str),
    /// The isomorphism table was built for a different subgraph size.
    #[error("isomorphism table is for size {table}, but size {requested} was requested")]
    TableMismatch {
        /// Subgraph size of the table.
        table: usize,
        /// Requested subgraph size.
        requested: usize,
    },
}
