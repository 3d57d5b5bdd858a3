//! Scenario files: a scripted sequence of dispatch operations.
//!
//! A scenario is a YAML document with a `steps` list. Each step names an
//! operation with its `step` tag:
//!
//! ```yaml
//! steps:
//!   - step: create_emergency
//!     location: Mata Alta
//!     severity: 4
//!     vegetation_type: mata_atlantica
//!     weather_condition: dry, 34C
//!   - step: assign_team
//!     team_id: 1
//!     emergency_id: 1
//!     actions: ["contain east flank"]
//! ```
//!
//! Replay stops only on an internal failure. Rejected steps are logged,
//! reported and skipped.

use brigada_dispatch::{DispatchEngine, DispatchError};
use brigada_types::{
    AreaStatus, EmergencyId, ErrorKind, FailureReport, NewEmergency, Severity, TeamId, TeamStatus,
    VegetationType,
};
use serde::Deserialize;
use tracing::{info, warn};

/// A parsed scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    /// Steps in execution order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Parse a scenario from YAML.
    pub fn parse(yaml: &str) -> Result<Self, serde_yml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(yaml)
    }
}

/// One scripted operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Register a new emergency. Severity is validated on replay.
    CreateEmergency {
        /// Where the fire is.
        location: String,
        /// Raw severity, expected in 1..=5.
        severity: u8,
        /// Vegetation label; unknown labels count as `other`.
        #[serde(default)]
        vegetation_type: String,
        /// Free-form weather description.
        #[serde(default)]
        weather_condition: String,
    },
    /// Send a team to an emergency.
    AssignTeam {
        /// Team to send.
        team_id: TeamId,
        /// Target emergency.
        emergency_id: EmergencyId,
        /// Actions to record, in order.
        #[serde(default)]
        actions: Vec<String>,
    },
    /// Record a free-standing team action.
    RecordAction {
        /// Acting team.
        team_id: TeamId,
        /// Related emergency, if any.
        #[serde(default)]
        emergency_id: Option<EmergencyId>,
        /// What the team did.
        description: String,
    },
    /// Change an affected area's status.
    UpdateArea {
        /// Emergency whose area changes.
        emergency_id: EmergencyId,
        /// New status.
        status: AreaStatus,
    },
    /// Change a team's availability.
    UpdateTeam {
        /// Team to update.
        team_id: TeamId,
        /// New status.
        status: TeamStatus,
    },
    /// Compute a route between two locations.
    Route {
        /// Start location.
        origin: String,
        /// End location.
        destination: String,
    },
    /// Resolve a region's path from the root.
    ZonePath {
        /// Region name.
        name: String,
    },
}

/// Outcome of replaying a scenario.
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    /// Steps that completed.
    pub succeeded: usize,
    /// Failure records of rejected steps, with their step index.
    pub failures: Vec<(usize, FailureReport)>,
}

/// Run every step against the engine in order.
///
/// # Errors
///
/// Returns the first [`ErrorKind::Internal`] failure; any other failure
/// is recorded in the report and replay continues.
pub fn replay(engine: &DispatchEngine, scenario: &Scenario) -> Result<ReplayReport, DispatchError> {
    let mut report = ReplayReport::default();
    for (index, step) in scenario.steps.iter().enumerate() {
        match run_step(engine, step) {
            Ok(()) => report.succeeded = report.succeeded.saturating_add(1),
            Err(err) if err.kind() == ErrorKind::Internal => return Err(err),
            Err(err) => {
                warn!(step = index, error = %err, "scenario step rejected");
                report.failures.push((index, err.to_failure()));
            }
        }
    }
    Ok(report)
}

fn run_step(engine: &DispatchEngine, step: &Step) -> Result<(), DispatchError> {
    match step {
        Step::CreateEmergency {
            location,
            severity,
            vegetation_type,
            weather_condition,
        } => {
            let call = engine.create_emergency(NewEmergency {
                location: location.clone(),
                severity: Severity::new(*severity)?,
                vegetation_type: VegetationType::from_label(vegetation_type),
                weather_condition: weather_condition.clone(),
            })?;
            info!(emergency_id = %call.id, priority = call.priority, "created emergency");
        }
        Step::AssignTeam {
            team_id,
            emergency_id,
            actions,
        } => {
            let result = engine.assign_team(*team_id, *emergency_id, actions.clone())?;
            info!(
                team_id = %result.team_id,
                emergency_id = %result.emergency_id,
                path = ?result.route.path,
                estimated_time = result.estimated_time,
                "assigned team"
            );
        }
        Step::RecordAction {
            team_id,
            emergency_id,
            description,
        } => {
            engine.record_team_action(*team_id, *emergency_id, description.clone())?;
            info!(%team_id, "recorded action");
        }
        Step::UpdateArea {
            emergency_id,
            status,
        } => {
            engine.update_area_status(*emergency_id, *status)?;
            info!(%emergency_id, ?status, "updated area");
        }
        Step::UpdateTeam { team_id, status } => {
            engine.update_team_status(*team_id, *status)?;
            info!(%team_id, ?status, "updated team");
        }
        Step::Route {
            origin,
            destination,
        } => {
            let route = engine.route(origin, destination)?;
            info!(
                %origin,
                %destination,
                path = ?route.path,
                distance = route.distance,
                estimated_time = route.estimated_time,
                "computed route"
            );
        }
        Step::ZonePath { name } => {
            let path = engine.zone_path(name)?;
            info!(%name, ?path, "resolved zone");
        }
    }
    Ok(())
}
