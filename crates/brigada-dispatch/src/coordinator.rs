//! The dispatch coordinator: one owner for every dispatch structure.
//!
//! [`DispatchCoordinator`] creates emergencies, assigns teams and applies
//! manual status changes. Every operation validates all referenced
//! entities before mutating anything, so a failed call leaves state
//! untouched.

use std::collections::BTreeSet;

use brigada_types::{
    AffectedArea, AreaStatus, AssignmentResult, CallStatus, DispatchSnapshot, EmergencyCall,
    EmergencyId, NewEmergency, RegionNode, RouteResult, Team, TeamAction, TeamId, TeamStatus,
};
use brigada_world::{LocationGraph, RegionHierarchy, build_map, create_dispatch_map};
use chrono::Utc;

use crate::action_log::TeamActionLog;
use crate::area_ledger::AreaLedger;
use crate::arrival_queue::ArrivalQueue;
use crate::call_table::CallTable;
use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::priority_queue::{PriorityDispatchQueue, compute_priority};
use crate::team_registry::TeamRegistry;

/// Owns the call table, both call orderings, the area ledger, the team
/// roster, the action log and the static geography.
#[derive(Debug, Clone)]
pub struct DispatchCoordinator {
    next_id: EmergencyId,
    calls: CallTable,
    priority_queue: PriorityDispatchQueue,
    arrival_queue: ArrivalQueue,
    areas: AreaLedger,
    actions: TeamActionLog,
    teams: TeamRegistry,
    regions: RegionHierarchy,
    map: LocationGraph,
}

impl DispatchCoordinator {
    /// Create a coordinator over the given roster and map. The region
    /// hierarchy is built with its default contents.
    pub fn new(teams: TeamRegistry, map: LocationGraph) -> Self {
        Self {
            next_id: EmergencyId::FIRST,
            calls: CallTable::new(),
            priority_queue: PriorityDispatchQueue::new(),
            arrival_queue: ArrivalQueue::new(),
            areas: AreaLedger::new(),
            actions: TeamActionLog::new(),
            teams,
            regions: RegionHierarchy::with_default(),
            map,
        }
    }

    /// Create a coordinator with the default roster and map.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::World`] if the built-in map is rejected.
    pub fn with_defaults() -> Result<Self, DispatchError> {
        Ok(Self::new(
            TeamRegistry::with_default_roster(),
            create_dispatch_map()?,
        ))
    }

    /// Create a coordinator from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidInput`] if two roster entries share
    /// an id, or [`DispatchError::World`] if the map is malformed.
    pub fn from_config(config: &DispatchConfig) -> Result<Self, DispatchError> {
        let map = build_map(config.map.locations.as_slice(), &config.map.edges)?;

        let mut seen = BTreeSet::new();
        for team in &config.teams {
            if !seen.insert(team.id) {
                return Err(DispatchError::InvalidInput(format!(
                    "duplicate team id {} in roster",
                    team.id
                )));
            }
            if !map.contains(&team.home_base) {
                tracing::warn!(
                    team_id = %team.id,
                    home_base = %team.home_base,
                    "team home base is not on the dispatch map; its routes will be unroutable"
                );
            }
        }

        Ok(Self::new(TeamRegistry::new(config.roster()), map))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Register a new emergency.
    ///
    /// The call is stored once and indexed by both orderings; an active
    /// affected area is opened for its location.
    pub fn create_emergency(&mut self, request: NewEmergency) -> EmergencyCall {
        let id = self.next_id;
        self.next_id = id.next();

        let priority = compute_priority(request.severity, request.vegetation_type);
        let call = EmergencyCall {
            id,
            location: request.location,
            severity: request.severity,
            vegetation_type: request.vegetation_type,
            weather_condition: request.weather_condition,
            priority,
            status: CallStatus::Pending,
            created_at: Utc::now(),
        };

        self.priority_queue.insert(&call);
        self.arrival_queue.enqueue(id);
        self.areas.append(id, call.location.clone(), AreaStatus::Active);
        self.calls.insert(call.clone());

        tracing::info!(
            emergency_id = %id,
            location = %call.location,
            severity = %call.severity,
            priority,
            "emergency registered"
        );
        call
    }

    /// Send a team to an emergency.
    ///
    /// Marks the team on mission, the call in progress and the area under
    /// containment, records `actions` in order and routes the team from
    /// its home base. A team already on a mission may be reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] or
    /// [`DispatchError::TeamNotFound`] without changing any state.
    pub fn assign_team(
        &mut self,
        team_id: TeamId,
        emergency_id: EmergencyId,
        actions: Vec<String>,
    ) -> Result<AssignmentResult, DispatchError> {
        let Some(call) = self.priority_queue.find_by_id(emergency_id, &self.calls) else {
            tracing::warn!(%team_id, %emergency_id, "assignment rejected: unknown emergency");
            return Err(DispatchError::EmergencyNotFound(emergency_id));
        };
        let (location, priority) = (call.location.clone(), call.priority);

        let Some(team) = self.teams.find_by_id(team_id) else {
            tracing::warn!(%team_id, %emergency_id, "assignment rejected: unknown team");
            return Err(DispatchError::TeamNotFound(team_id));
        };
        let home_base = team.home_base.clone();

        self.teams.set_status(team_id, TeamStatus::OnMission);
        self.priority_queue
            .update_status(emergency_id, CallStatus::InProgress, &mut self.calls);
        self.areas
            .update_status(emergency_id, AreaStatus::ContainmentInProgress);
        for action in &actions {
            self.actions.push(team_id, Some(emergency_id), action.clone());
        }

        let route = self.map.shortest_path(&home_base, &location);
        if route.is_routable() {
            tracing::info!(
                %team_id,
                %emergency_id,
                distance = route.distance,
                estimated_time = route.estimated_time,
                "team assigned"
            );
        } else {
            tracing::warn!(
                %team_id,
                %emergency_id,
                origin = %home_base,
                destination = %location,
                "team assigned but no route exists"
            );
        }

        Ok(AssignmentResult {
            emergency_id,
            team_id,
            priority,
            actions,
            estimated_time: route.estimated_time,
            route,
            area_status: AreaStatus::ContainmentInProgress,
        })
    }

    /// Record a free-standing action in a team's history.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::TeamNotFound`] for an unknown team, or
    /// [`DispatchError::EmergencyNotFound`] if a referenced emergency does
    /// not exist.
    pub fn record_team_action(
        &mut self,
        team_id: TeamId,
        emergency_id: Option<EmergencyId>,
        description: impl Into<String>,
    ) -> Result<TeamAction, DispatchError> {
        if self.teams.find_by_id(team_id).is_none() {
            tracing::warn!(%team_id, "action rejected: unknown team");
            return Err(DispatchError::TeamNotFound(team_id));
        }
        if let Some(id) = emergency_id.filter(|&id| self.calls.get(id).is_none()) {
            tracing::warn!(%team_id, emergency_id = %id, "action rejected: unknown emergency");
            return Err(DispatchError::EmergencyNotFound(id));
        }

        self.actions.push(team_id, emergency_id, description);
        tracing::debug!(%team_id, "team action recorded");
        self.actions
            .history(team_id)
            .next()
            .cloned()
            .ok_or(DispatchError::TeamNotFound(team_id))
    }

    /// Change the status of an emergency's affected area. The call status
    /// is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] if no area exists for
    /// the id.
    pub fn update_area_status(
        &mut self,
        emergency_id: EmergencyId,
        status: AreaStatus,
    ) -> Result<AffectedArea, DispatchError> {
        if !self.areas.update_status(emergency_id, status) {
            tracing::warn!(%emergency_id, "area update rejected: unknown emergency");
            return Err(DispatchError::EmergencyNotFound(emergency_id));
        }
        tracing::debug!(%emergency_id, ?status, "area status updated");
        self.areas
            .find_by_id(emergency_id)
            .cloned()
            .ok_or(DispatchError::EmergencyNotFound(emergency_id))
    }

    /// Change a team's availability.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::TeamNotFound`] for an unknown team.
    pub fn update_team_status(
        &mut self,
        team_id: TeamId,
        status: TeamStatus,
    ) -> Result<Team, DispatchError> {
        if !self.teams.set_status(team_id, status) {
            tracing::warn!(%team_id, "team update rejected: unknown team");
            return Err(DispatchError::TeamNotFound(team_id));
        }
        tracing::debug!(%team_id, ?status, "team status updated");
        self.team(team_id)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Every team in roster order.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.all().to_vec()
    }

    /// Look up one team.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::TeamNotFound`] for an unknown team.
    pub fn team(&self, team_id: TeamId) -> Result<Team, DispatchError> {
        self.teams
            .find_by_id(team_id)
            .cloned()
            .ok_or(DispatchError::TeamNotFound(team_id))
    }

    /// Look up one emergency.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] for an unknown id.
    pub fn emergency(&self, emergency_id: EmergencyId) -> Result<EmergencyCall, DispatchError> {
        self.priority_queue
            .find_by_id(emergency_id, &self.calls)
            .cloned()
            .ok_or(DispatchError::EmergencyNotFound(emergency_id))
    }

    /// Calls highest priority first.
    pub fn prioritized_calls(&self) -> Vec<EmergencyCall> {
        self.priority_queue.snapshot_ordered(&self.calls)
    }

    /// Calls in registration order.
    pub fn arrival_order(&self) -> Vec<EmergencyCall> {
        self.arrival_queue.to_sequence(&self.calls)
    }

    /// Affected areas in registration order.
    pub fn affected_areas(&self) -> Vec<AffectedArea> {
        self.areas.all().cloned().collect()
    }

    /// The affected area of one emergency.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] for an unknown id.
    pub fn affected_area(&self, emergency_id: EmergencyId) -> Result<AffectedArea, DispatchError> {
        self.areas
            .find_by_id(emergency_id)
            .cloned()
            .ok_or(DispatchError::EmergencyNotFound(emergency_id))
    }

    /// The full region tree, or `None` if it has not been built.
    pub fn region_tree(&self) -> Option<RegionNode> {
        self.regions.full_tree()
    }

    /// Names from the root region down to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ZoneNotFound`] if no region has that name.
    pub fn zone_path(&self, name: &str) -> Result<Vec<String>, DispatchError> {
        self.regions
            .find_path_to(name)
            .ok_or_else(|| DispatchError::ZoneNotFound(name.to_owned()))
    }

    /// Shortest route between two map locations. Unknown or disconnected
    /// locations produce an unroutable result rather than an error.
    pub fn route(&self, origin: &str, destination: &str) -> RouteResult {
        self.map.shortest_path(origin, destination)
    }

    /// A team's actions, most recent first. Empty for a team with no
    /// recorded actions, including teams not on the roster.
    pub fn team_actions(&self, team_id: TeamId) -> Vec<TeamAction> {
        self.actions.history(team_id).cloned().collect()
    }

    /// Every view at once.
    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            prioritized_calls: self.prioritized_calls(),
            arrival_order: self.arrival_order(),
            affected_areas: self.affected_areas(),
            teams: self.teams(),
        }
    }

    /// Number of registered emergencies.
    pub fn emergency_count(&self) -> usize {
        self.calls.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use brigada_types::{Severity, VegetationType};

    use super::*;

    fn coordinator() -> DispatchCoordinator {
        DispatchCoordinator::with_defaults().unwrap()
    }

    fn request(location: &str, severity: u8, vegetation: VegetationType) -> NewEmergency {
        NewEmergency {
            location: location.to_owned(),
            severity: Severity::new(severity).unwrap(),
            vegetation_type: vegetation,
            weather_condition: "dry".to_owned(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut c = coordinator();
        let a = c.create_emergency(request("Zona Norte", 3, VegetationType::Cerrado));
        let b = c.create_emergency(request("Mata Alta", 5, VegetationType::Pantanal));
        assert_eq!(a.id, EmergencyId(1));
        assert_eq!(b.id, EmergencyId(2));
        assert_eq!(a.status, CallStatus::Pending);
        assert!((b.priority - 10.0).abs() < 1e-9);
        assert_eq!(c.emergency_count(), 2);
        assert_eq!(
            c.affected_area(EmergencyId(2)).unwrap().status,
            AreaStatus::Active
        );
    }

    #[test]
    fn assignment_updates_every_view() {
        let mut c = coordinator();
        let call = c.create_emergency(request("Mata Alta", 4, VegetationType::MataAtlantica));
        let result = c
            .assign_team(TeamId(1), call.id, vec!["contain east flank".to_owned()])
            .unwrap();

        assert_eq!(result.route.path, vec!["Base Central", "Vila Verde", "Mata Alta"]);
        assert!((result.route.distance - 8.0).abs() < 1e-9);
        assert!((result.estimated_time - 16.0).abs() < 1e-9);
        assert_eq!(result.area_status, AreaStatus::ContainmentInProgress);

        assert_eq!(c.team(TeamId(1)).unwrap().status, TeamStatus::OnMission);
        assert_eq!(c.emergency(call.id).unwrap().status, CallStatus::InProgress);
        assert_eq!(c.prioritized_calls()[0].status, CallStatus::InProgress);
        assert_eq!(c.arrival_order()[0].status, CallStatus::InProgress);
        let history = c.team_actions(TeamId(1));
        assert_eq!(history[0].description, "contain east flank");
        assert_eq!(history[0].emergency_id, Some(call.id));
    }

    #[test]
    fn failed_assignment_changes_nothing() {
        let mut c = coordinator();
        let call = c.create_emergency(request("Zona Sul", 2, VegetationType::Other));
        let before = c.snapshot();

        let err = c.assign_team(TeamId(9), call.id, vec!["x".to_owned()]);
        assert!(matches!(err, Err(DispatchError::TeamNotFound(TeamId(9)))));
        let err = c.assign_team(TeamId(1), EmergencyId(42), vec!["x".to_owned()]);
        assert!(matches!(err, Err(DispatchError::EmergencyNotFound(EmergencyId(42)))));

        assert_eq!(c.snapshot(), before);
        assert!(c.team_actions(TeamId(1)).is_empty());
    }

    #[test]
    fn reassigning_a_busy_team_succeeds() {
        let mut c = coordinator();
        let a = c.create_emergency(request("Zona Norte", 3, VegetationType::Cerrado));
        let b = c.create_emergency(request("Zona Sul", 3, VegetationType::Cerrado));
        assert!(c.assign_team(TeamId(2), a.id, Vec::new()).is_ok());
        assert!(c.assign_team(TeamId(2), b.id, Vec::new()).is_ok());
        assert_eq!(c.emergency(b.id).unwrap().status, CallStatus::InProgress);
    }

    #[test]
    fn area_update_leaves_call_status_alone() {
        let mut c = coordinator();
        let call = c.create_emergency(request("Zona Norte", 1, VegetationType::Other));
        let area = c.update_area_status(call.id, AreaStatus::Resolved).unwrap();
        assert_eq!(area.status, AreaStatus::Resolved);
        assert_eq!(c.emergency(call.id).unwrap().status, CallStatus::Pending);
        assert!(matches!(
            c.update_area_status(EmergencyId(5), AreaStatus::Resolved),
            Err(DispatchError::EmergencyNotFound(_))
        ));
    }

    #[test]
    fn team_release_and_free_standing_actions() {
        let mut c = coordinator();
        let call = c.create_emergency(request("Vila Verde", 2, VegetationType::Cerrado));
        c.assign_team(TeamId(3), call.id, vec!["arrive".to_owned()]).unwrap();
        let team = c.update_team_status(TeamId(3), TeamStatus::Available).unwrap();
        assert_eq!(team.status, TeamStatus::Available);
        assert!(c.update_team_status(TeamId(8), TeamStatus::Available).is_err());

        let action = c.record_team_action(TeamId(3), None, "return to base").unwrap();
        assert_eq!(action.emergency_id, None);
        assert!(matches!(
            c.record_team_action(TeamId(3), Some(EmergencyId(77)), "x"),
            Err(DispatchError::EmergencyNotFound(_))
        ));
        assert!(matches!(
            c.record_team_action(TeamId(8), None, "x"),
            Err(DispatchError::TeamNotFound(_))
        ));
        let history: Vec<String> = c
            .team_actions(TeamId(3))
            .into_iter()
            .map(|a| a.description)
            .collect();
        assert_eq!(history, vec!["return to base", "arrive"]);
    }

    #[test]
    fn region_and_route_queries() {
        let c = coordinator();
        assert_eq!(
            c.zone_path("Zona Norte").unwrap(),
            vec!["São Paulo", "Campinas", "Zona Norte"]
        );
        assert!(matches!(
            c.zone_path("Nonexistent"),
            Err(DispatchError::ZoneNotFound(_))
        ));
        assert_eq!(c.region_tree().map(|t| t.name), Some("São Paulo".to_owned()));
        let route = c.route("Base Central", "Atlantis");
        assert!(!route.is_routable());
        assert_eq!(route.path, vec!["Base Central", "Atlantis"]);
    }

    #[test]
    fn unroutable_assignment_still_succeeds() {
        let mut c = coordinator();
        let call = c.create_emergency(request("Serra Distante", 5, VegetationType::Other));
        let result = c.assign_team(TeamId(1), call.id, Vec::new()).unwrap();
        assert!(!result.route.is_routable());
        assert!(result.estimated_time.is_infinite());
    }

    #[test]
    fn config_with_duplicate_team_ids_is_rejected() {
        let yaml = r"
teams:
  - id: 1
    name: A
    home_base: Base Central
  - id: 1
    name: B
    home_base: Vila Verde
";
        let config = DispatchConfig::parse(yaml).unwrap();
        assert!(matches!(
            DispatchCoordinator::from_config(&config),
            Err(DispatchError::InvalidInput(_))
        ));
    }

    #[test]
    fn default_config_matches_defaults() {
        let from_config = DispatchCoordinator::from_config(&DispatchConfig::default()).unwrap();
        assert_eq!(from_config.teams(), coordinator().teams());
    }
}
