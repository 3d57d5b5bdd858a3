//! Error types for the `brigada-world` crate.
//!
//! Only graph construction can fail. Route queries never return an error:
//! an unreachable destination is reported through an infinite distance.

/// Errors that can occur while building the location graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A location was not found in the graph.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// A location with the same name already exists.
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// Edge weights must be finite and strictly positive.
    #[error("invalid weight {weight} for edge {from} -- {to}")]
    InvalidWeight {
        /// One endpoint of the edge.
        from: String,
        /// The other endpoint of the edge.
        to: String,
        /// The rejected weight.
        weight: f64,
    },
}
