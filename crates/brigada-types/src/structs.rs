//! Core records exchanged between the dispatch engine and its callers.
//!
//! The boundary layer (HTTP, dashboard, external store) only ever sees
//! these plain records; the engine never depends on their wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AreaStatus, CallStatus, ErrorKind, RegionLevel, TeamStatus, VegetationType};
use crate::ids::{EmergencyId, TeamId};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Lowest accepted severity.
pub const MIN_SEVERITY: u8 = 1;

/// Highest accepted severity.
pub const MAX_SEVERITY: u8 = 5;

/// Reported severity of a fire, always within 1..=5.
///
/// The only way to obtain a value is through [`Severity::new`] or
/// [`TryFrom<u8>`], so every [`EmergencyCall`] carries a valid severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

/// A severity outside 1..=5 was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("severity must be between {MIN_SEVERITY} and {MAX_SEVERITY}, got {0}")]
pub struct InvalidSeverity(pub u8);

impl Severity {
    /// Validate a raw severity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverity`] if `value` is outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, InvalidSeverity> {
        if value >= MIN_SEVERITY && value <= MAX_SEVERITY {
            Ok(Self(value))
        } else {
            Err(InvalidSeverity(value))
        }
    }

    /// Return the raw value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Emergency calls
// ---------------------------------------------------------------------------

/// Caller-supplied fields for a new emergency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewEmergency {
    /// Name of the place where the fire was reported.
    pub location: String,
    /// Reported severity.
    #[ts(type = "number")]
    pub severity: Severity,
    /// Dominant vegetation at the site.
    pub vegetation_type: VegetationType,
    /// Free-form weather description supplied by the caller.
    pub weather_condition: String,
}

/// A registered emergency call.
///
/// Created once by the coordinator. `status` is the only field that
/// changes afterwards; records are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EmergencyCall {
    /// Monotonic identifier, starting at 1.
    pub id: EmergencyId,
    /// Name of the place where the fire was reported.
    pub location: String,
    /// Reported severity (1..=5).
    #[ts(type = "number")]
    pub severity: Severity,
    /// Dominant vegetation at the site.
    pub vegetation_type: VegetationType,
    /// Free-form weather description.
    pub weather_condition: String,
    /// Severity scaled by the vegetation weight. Always positive.
    pub priority: f64,
    /// Current lifecycle state.
    pub status: CallStatus,
    /// When the call was registered.
    pub created_at: DateTime<Utc>,
}

/// Status of the area affected by one emergency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AffectedArea {
    /// The emergency this area belongs to.
    pub emergency_id: EmergencyId,
    /// Name of the affected place.
    pub location: String,
    /// Current containment status.
    pub status: AreaStatus,
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// A field team in the dispatch roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Team {
    /// Roster identifier.
    pub id: TeamId,
    /// Display name.
    pub name: String,
    /// Location graph node the team departs from.
    pub home_base: String,
    /// Current availability.
    pub status: TeamStatus,
}

/// One entry in a team's action history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TeamAction {
    /// The team that performed the action.
    pub team_id: TeamId,
    /// The emergency the action belongs to, if any.
    pub emergency_id: Option<EmergencyId>,
    /// What the team did.
    pub description: String,
    /// When the action was recorded.
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A node of the administrative region tree, with its children in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionNode {
    /// Region name.
    pub name: String,
    /// Administrative level.
    pub level: RegionLevel,
    /// Child regions, in display order.
    pub children: Vec<Self>,
}

// ---------------------------------------------------------------------------
// Routing and assignment results
// ---------------------------------------------------------------------------

/// Result of a shortest-path query on the location graph.
///
/// An infinite `distance` means the destination cannot be reached; in
/// that case `path` is only a placeholder and must not be followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RouteResult {
    /// Requested origin.
    pub origin: String,
    /// Requested destination.
    pub destination: String,
    /// Node names from origin to destination.
    pub path: Vec<String>,
    /// Total edge weight, or infinity when unroutable.
    pub distance: f64,
    /// Travel time estimate derived from `distance`.
    pub estimated_time: f64,
}

impl RouteResult {
    /// Whether a real path was found.
    pub const fn is_routable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Composite result of a successful team assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AssignmentResult {
    /// The emergency that was assigned.
    pub emergency_id: EmergencyId,
    /// The team dispatched to it.
    pub team_id: TeamId,
    /// Priority of the emergency.
    pub priority: f64,
    /// Actions recorded for the team, in the order given.
    pub actions: Vec<String>,
    /// Route from the team's home base to the emergency location.
    pub route: RouteResult,
    /// Estimated travel time along `route`.
    pub estimated_time: f64,
    /// Area status after the assignment.
    pub area_status: AreaStatus,
}

/// Structured failure handed to the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FailureReport {
    /// Always `false`; mirrors the `success` flag of successful replies.
    pub success: bool,
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable explanation.
    pub message: String,
}

impl FailureReport {
    /// Build a failure report.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind,
            message: message.into(),
        }
    }
}

/// A consistent view of every dispatch structure, read under one lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DispatchSnapshot {
    /// Calls in dispatch order (highest priority first).
    pub prioritized_calls: Vec<EmergencyCall>,
    /// Calls in arrival order (oldest first).
    pub arrival_order: Vec<EmergencyCall>,
    /// Affected areas in registration order.
    pub affected_areas: Vec<AffectedArea>,
    /// The team roster.
    pub teams: Vec<Team>,
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn severity_bounds() {
        assert!(Severity::new(0).is_err());
        assert!(Severity::new(6).is_err());
        for raw in MIN_SEVERITY..=MAX_SEVERITY {
            assert_eq!(Severity::new(raw).map(Severity::get), Ok(raw));
        }
        assert_eq!(Severity::try_from(9), Err(InvalidSeverity(9)));
    }

    #[test]
    fn severity_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Severity>("3").is_ok());
        assert!(serde_json::from_str::<Severity>("0").is_err());
        assert!(serde_json::from_str::<Severity>("42").is_err());
    }

    #[test]
    fn route_routability() {
        let route = RouteResult {
            origin: "A".to_owned(),
            destination: "B".to_owned(),
            path: vec!["A".to_owned(), "B".to_owned()],
            distance: f64::INFINITY,
            estimated_time: f64::INFINITY,
        };
        assert!(!route.is_routable());

        let route = RouteResult {
            distance: 4.0,
            estimated_time: 8.0,
            ..route
        };
        assert!(route.is_routable());
    }

    #[test]
    fn failure_report_is_never_successful() {
        let report = FailureReport::new(ErrorKind::NotFound, "team 9 not found");
        assert!(!report.success);
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["kind"], "not_found");
        assert_eq!(json["success"], false);
    }
}
