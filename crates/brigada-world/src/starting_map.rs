//! Default dispatch map: six locations joined by seven weighted links.
//!
//! ```text
//!  Zona Norte ----7---- Mata Alta
//!      |                    |
//!     10                    3
//!      |                    |
//! Base Central ---5--- Vila Verde
//!      |                    |
//!      8                    6
//!      |                    |
//!   Zona Sul -----4---- Parque Nacional
//! ```

use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::location_graph::LocationGraph;

/// An undirected edge as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// One endpoint.
    pub from: String,
    /// The other endpoint.
    pub to: String,
    /// Travel cost (distance units).
    pub weight: f64,
}

/// Default location names, in insertion (tie-break) order.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Base Central",
    "Zona Norte",
    "Vila Verde",
    "Zona Sul",
    "Mata Alta",
    "Parque Nacional",
];

/// Default edges as `(from, to, weight)`.
pub const DEFAULT_EDGES: &[(&str, &str, f64)] = &[
    ("Base Central", "Zona Norte", 10.0),
    ("Base Central", "Vila Verde", 5.0),
    ("Base Central", "Zona Sul", 8.0),
    ("Zona Norte", "Mata Alta", 7.0),
    ("Vila Verde", "Mata Alta", 3.0),
    ("Vila Verde", "Parque Nacional", 6.0),
    ("Zona Sul", "Parque Nacional", 4.0),
];

/// Default edges as owned [`EdgeSpec`] values.
pub fn default_edge_specs() -> Vec<EdgeSpec> {
    DEFAULT_EDGES
        .iter()
        .map(|&(from, to, weight)| EdgeSpec {
            from: from.to_owned(),
            to: to.to_owned(),
            weight,
        })
        .collect()
}

/// Build a graph from an ordered list of locations and a list of edges.
///
/// # Errors
///
/// Returns [`WorldError`] on duplicate locations, edges with unknown
/// endpoints, or non-positive weights.
pub fn build_map<S: AsRef<str>>(
    locations: &[S],
    edges: &[EdgeSpec],
) -> Result<LocationGraph, WorldError> {
    let mut graph = LocationGraph::new();
    for name in locations {
        graph.add_location(name.as_ref())?;
    }
    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, edge.weight)?;
    }
    tracing::debug!(
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "dispatch map built"
    );
    Ok(graph)
}

/// Build the default six-location dispatch map.
///
/// # Errors
///
/// Returns [`WorldError`] only if the built-in tables are inconsistent.
pub fn create_dispatch_map() -> Result<LocationGraph, WorldError> {
    build_map(DEFAULT_LOCATIONS, &default_edge_specs())
}
