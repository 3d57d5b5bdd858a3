//! Administrative region hierarchy: state -> municipalities -> zones.
//!
//! Nodes live in an arena with explicit child index lists, so the tree has
//! no back-pointers. The root is always slot 0 once the tree is built.

use brigada_types::{RegionLevel, RegionNode};

/// One arena slot.
#[derive(Debug, Clone)]
struct RegionSlot {
    name: String,
    level: RegionLevel,
    /// Arena indices of the children, in insertion order.
    children: Vec<usize>,
}

/// Read-only tree of administrative regions.
#[derive(Debug, Clone, Default)]
pub struct RegionHierarchy {
    slots: Vec<RegionSlot>,
}

/// Root of the default hierarchy.
pub const DEFAULT_STATE: &str = "São Paulo";

/// Default municipalities with their zones, in display order.
pub const DEFAULT_MUNICIPALITIES: &[(&str, &[&str])] = &[
    ("Campinas", &["Zona Norte", "Zona Sul", "Parque Nacional"]),
    ("São José dos Campos", &["Vila Verde", "Mata Alta"]),
];

impl RegionHierarchy {
    /// Create an empty, unbuilt hierarchy.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create a hierarchy holding the default tree.
    pub fn with_default() -> Self {
        let mut tree = Self::new();
        tree.build_default();
        tree
    }

    /// Whether the tree has been built.
    pub const fn is_built(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Number of regions in the tree.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the tree has no regions.
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build the fixed three-level default tree. Does nothing if the tree
    /// is already built.
    pub fn build_default(&mut self) {
        if self.is_built() {
            return;
        }
        let root = self.push(DEFAULT_STATE, RegionLevel::State, None);
        for (municipality, zones) in DEFAULT_MUNICIPALITIES {
            let m = self.push(municipality, RegionLevel::Municipality, Some(root));
            for zone in *zones {
                self.push(zone, RegionLevel::Zone, Some(m));
            }
        }
        tracing::debug!(regions = self.slots.len(), "default region hierarchy built");
    }

    fn push(&mut self, name: &str, level: RegionLevel, parent: Option<usize>) -> usize {
        let idx = self.slots.len();
        self.slots.push(RegionSlot {
            name: name.to_owned(),
            level,
            children: Vec::new(),
        });
        if let Some(parent) = parent.and_then(|p| self.slots.get_mut(p)) {
            parent.children.push(idx);
        }
        idx
    }

    /// Return the whole tree as nested records, or `None` if unbuilt.
    pub fn full_tree(&self) -> Option<RegionNode> {
        self.node_at(0)
    }

    fn node_at(&self, idx: usize) -> Option<RegionNode> {
        let slot = self.slots.get(idx)?;
        Some(RegionNode {
            name: slot.name.clone(),
            level: slot.level,
            children: slot
                .children
                .iter()
                .filter_map(|&child| self.node_at(child))
                .collect(),
        })
    }

    /// Find the chain of region names from the root down to the first
    /// region named `name`, inclusive.
    ///
    /// The search is a pre-order depth-first walk with children visited in
    /// insertion order, so on duplicate names the first one reached wins.
    pub fn find_path_to(&self, name: &str) -> Option<Vec<String>> {
        if !self.is_built() {
            return None;
        }
        let mut path = Vec::new();
        self.search(0, name, &mut path).then_some(path)
    }

    fn search(&self, idx: usize, target: &str, path: &mut Vec<String>) -> bool {
        let Some(slot) = self.slots.get(idx) else {
            return false;
        };
        path.push(slot.name.clone());
        if slot.name == target {
            return true;
        }
        if slot
            .children
            .iter()
            .any(|&child| self.search(child, target, path))
        {
            return true;
        }
        path.pop();
        false
    }
}
