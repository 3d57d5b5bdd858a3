//! Static geography for the Brigada wildfire dispatch engine.
//!
//! # Modules
//!
//! - [`error`] -- Error types for map construction.
//! - [`location_graph`] -- [`LocationGraph`]: named locations joined by
//!   weighted undirected edges, with Dijkstra shortest paths.
//! - [`region`] -- [`RegionHierarchy`]: the state / municipality / zone tree.
//! - [`starting_map`] -- Default six-location dispatch map.

pub mod error;
pub mod location_graph;
pub mod region;
pub mod starting_map;

// Re-export primary types at crate root.
pub use error::WorldError;
pub use location_graph::{LocationGraph, TIME_UNITS_PER_DISTANCE};
pub use region::RegionHierarchy;
pub use starting_map::{
    DEFAULT_EDGES, DEFAULT_LOCATIONS, EdgeSpec, build_map, create_dispatch_map,
    default_edge_specs,
};
