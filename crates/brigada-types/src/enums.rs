//! Enumeration types for the dispatch engine.
//!
//! Every enum serializes as `snake_case` so the dashboard and any external
//! store see the same labels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Vegetation
// ---------------------------------------------------------------------------

/// Dominant vegetation at the site of an emergency.
///
/// The vegetation type scales the severity of a call into its dispatch
/// priority. Biomes that burn faster or are harder to reach weigh more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum VegetationType {
    /// Tropical savanna.
    Cerrado,
    /// Atlantic rainforest.
    MataAtlantica,
    /// Tropical wetland.
    Pantanal,
    /// Anything not listed above. Uses the neutral weight.
    Other,
}

impl VegetationType {
    /// Multiplier applied to severity when computing priority.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Cerrado => 1.2,
            Self::MataAtlantica => 1.5,
            Self::Pantanal => 2.0,
            Self::Other => 1.0,
        }
    }

    /// Parse a boundary label. Unknown labels map to [`VegetationType::Other`]
    /// instead of failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "cerrado" => Self::Cerrado,
            "mata_atlantica" => Self::MataAtlantica,
            "pantanal" => Self::Pantanal,
            _ => Self::Other,
        }
    }

    /// The `snake_case` label used on the wire.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cerrado => "cerrado",
            Self::MataAtlantica => "mata_atlantica",
            Self::Pantanal => "pantanal",
            Self::Other => "other",
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle states
// ---------------------------------------------------------------------------

/// Lifecycle of an emergency call. `InProgress` is terminal for the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CallStatus {
    /// Registered, no team assigned yet.
    Pending,
    /// A team has been dispatched.
    InProgress,
}

/// Status of the area affected by an emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AreaStatus {
    /// Fire is active and unattended.
    Active,
    /// A team is working on containment.
    ContainmentInProgress,
    /// The area is under control.
    Resolved,
}

/// Availability of a field team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TeamStatus {
    /// Ready to be dispatched.
    Available,
    /// Assigned to at least one unresolved emergency.
    OnMission,
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// Administrative level of a node in the region hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RegionLevel {
    /// Federal state (root of the tree).
    State,
    /// Municipality within a state.
    Municipality,
    /// Operational zone within a municipality.
    Zone,
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

/// Category of a failure reported to the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ErrorKind {
    /// An emergency, team or zone does not exist.
    NotFound,
    /// A request carried a value outside its valid range.
    InvalidInput,
    /// The engine could not complete the request (e.g. poisoned lock).
    Internal,
}
