//! Location graph: named places as nodes, travel links as weighted
//! undirected edges.
//!
//! The [`LocationGraph`] is the dispatch map teams travel over. It stores
//! nodes in an arena (`Vec`) indexed by insertion order, with a name index
//! for lookups and an adjacency list per node. Insertion order doubles as
//! the deterministic tie-break for equal tentative distances in
//! [`LocationGraph::shortest_path`].

use std::collections::BTreeMap;

use brigada_types::RouteResult;

use crate::error::WorldError;

/// Time units per distance unit used for travel estimates.
pub const TIME_UNITS_PER_DISTANCE: f64 = 2.0;

/// One direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    /// Arena index of the neighbor.
    to: usize,
    /// Travel cost. Always finite and positive.
    weight: f64,
}

/// Weighted undirected graph of named locations.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    /// Node names in insertion order.
    names: Vec<String>,
    /// Name -> arena index.
    index: BTreeMap<String, usize>,
    /// Arena index -> outgoing edges.
    adjacency: Vec<Vec<Edge>>,
}

impl LocationGraph {
    /// Create an empty graph.
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            index: BTreeMap::new(),
            adjacency: Vec::new(),
        }
    }

    // -------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------

    /// Add a location to the graph.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateLocation`] if the name is taken.
    pub fn add_location(&mut self, name: impl Into<String>) -> Result<(), WorldError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(WorldError::DuplicateLocation(name));
        }
        let idx = self.names.len();
        self.index.insert(name.clone(), idx);
        self.names.push(name);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Connect two locations with an undirected edge.
    ///
    /// Connecting an already connected pair replaces the weight.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::LocationNotFound`] if either endpoint is
    /// missing, or [`WorldError::InvalidWeight`] if the weight is not
    /// finite and strictly positive.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), WorldError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(WorldError::InvalidWeight {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            });
        }
        let a = self.lookup(from)?;
        let b = self.lookup(to)?;
        self.upsert_directed(a, b, weight);
        if a != b {
            self.upsert_directed(b, a, weight);
        }
        Ok(())
    }

    fn upsert_directed(&mut self, from: usize, to: usize, weight: f64) {
        let Some(edges) = self.adjacency.get_mut(from) else {
            return;
        };
        if let Some(edge) = edges.iter_mut().find(|e| e.to == to) {
            edge.weight = weight;
        } else {
            edges.push(Edge { to, weight });
        }
    }

    fn lookup(&self, name: &str) -> Result<usize, WorldError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::LocationNotFound(name.to_owned()))
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Whether a location with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of locations.
    pub const fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.adjacency.iter().map(Vec::len).sum();
        directed.div_ceil(2)
    }

    /// Location names in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Neighbors of a location with the connecting edge weight.
    ///
    /// Unknown locations have no neighbors.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, f64)> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        self.adjacency
            .get(idx)
            .into_iter()
            .flatten()
            .filter_map(|e| self.names.get(e.to).map(|n| (n.as_str(), e.weight)))
            .collect()
    }

    /// Compute the shortest route between two locations with Dijkstra's
    /// algorithm.
    ///
    /// - If either endpoint is missing, the result is the degenerate
    ///   `[origin, destination]` path with infinite distance and time.
    /// - If the destination is unreachable, the distance is infinite and
    ///   the path holds only the destination.
    /// - `origin == destination` yields distance 0 and path `[origin]`.
    ///
    /// The unvisited node with the smallest tentative distance is selected
    /// by a linear scan; among equal distances the earliest inserted node
    /// wins. The search stops once the destination is selected or the
    /// smallest remaining distance is infinite.
    pub fn shortest_path(&self, origin: &str, destination: &str) -> RouteResult {
        let (Some(&start), Some(&goal)) = (self.index.get(origin), self.index.get(destination))
        else {
            tracing::debug!(origin, destination, "route endpoint not on the dispatch map");
            return RouteResult {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
                path: vec![origin.to_owned(), destination.to_owned()],
                distance: f64::INFINITY,
                estimated_time: f64::INFINITY,
            };
        };

        let node_count = self.names.len();
        let mut dist = vec![f64::INFINITY; node_count];
        let mut prev: Vec<Option<usize>> = vec![None; node_count];
        let mut visited = vec![false; node_count];
        if let Some(d) = dist.get_mut(start) {
            *d = 0.0;
        }

        loop {
            // Select the closest unvisited node; strict `<` keeps the
            // earliest inserted node on ties.
            let mut closest: Option<(usize, f64)> = None;
            for (idx, (&d, &seen)) in dist.iter().zip(visited.iter()).enumerate() {
                if seen {
                    continue;
                }
                if closest.is_none_or(|(_, best)| d < best) {
                    closest = Some((idx, d));
                }
            }
            let Some((current, current_dist)) = closest else {
                break;
            };
            if current == goal || current_dist.is_infinite() {
                break;
            }
            if let Some(seen) = visited.get_mut(current) {
                *seen = true;
            }

            for edge in self.adjacency.get(current).into_iter().flatten() {
                let candidate = current_dist + edge.weight;
                let Some(best) = dist.get_mut(edge.to) else {
                    continue;
                };
                if candidate < *best {
                    *best = candidate;
                    if let Some(p) = prev.get_mut(edge.to) {
                        *p = Some(current);
                    }
                }
            }
        }

        let distance = dist.get(goal).copied().unwrap_or(f64::INFINITY);
        let path = self.reconstruct(&prev, goal);

        if distance.is_infinite() {
            tracing::debug!(origin, destination, "destination unreachable from origin");
        }

        RouteResult {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            path,
            distance,
            estimated_time: distance * TIME_UNITS_PER_DISTANCE,
        }
    }

    /// Walk predecessor links back from `goal` and return names in
    /// origin-to-destination order.
    fn reconstruct(&self, prev: &[Option<usize>], goal: usize) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        // A predecessor chain can never be longer than the node count.
        for _ in 0..=self.names.len() {
            let Some(idx) = current else {
                break;
            };
            if let Some(name) = self.names.get(idx) {
                path.push(name.clone());
            }
            current = prev.get(idx).copied().flatten();
        }
        path.reverse();
        path
    }
}
