//! Thread-safe handle to a [`DispatchCoordinator`].
//!
//! Every operation takes the lock once, runs to completion and releases
//! it, so concurrent callers observe operations in lock-acquisition order
//! and never see a partially applied assignment. Nothing inside the lock
//! performs I/O.

use std::sync::{Arc, Mutex};

use brigada_types::{
    AffectedArea, AreaStatus, AssignmentResult, DispatchSnapshot, EmergencyCall, EmergencyId,
    NewEmergency, RegionNode, RouteResult, Team, TeamAction, TeamId, TeamStatus,
};

use crate::config::DispatchConfig;
use crate::coordinator::DispatchCoordinator;
use crate::error::DispatchError;

/// Cloneable, shareable dispatch engine.
///
/// Clones share the same coordinator.
#[derive(Debug, Clone)]
pub struct DispatchEngine {
    inner: Arc<Mutex<DispatchCoordinator>>,
}

impl DispatchEngine {
    /// Wrap a coordinator.
    pub fn new(coordinator: DispatchCoordinator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(coordinator)),
        }
    }

    /// Build an engine from loaded configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`DispatchCoordinator::from_config`] failures.
    pub fn from_config(config: &DispatchConfig) -> Result<Self, DispatchError> {
        DispatchCoordinator::from_config(config).map(Self::new)
    }

    /// Build an engine with the default roster and map.
    ///
    /// # Errors
    ///
    /// Propagates [`DispatchCoordinator::with_defaults`] failures.
    pub fn with_defaults() -> Result<Self, DispatchError> {
        DispatchCoordinator::with_defaults().map(Self::new)
    }

    fn write<T>(&self, f: impl FnOnce(&mut DispatchCoordinator) -> T) -> Result<T, DispatchError> {
        let Ok(mut coordinator) = self.inner.lock() else {
            tracing::error!("dispatch engine lock poisoned");
            return Err(DispatchError::LockPoisoned);
        };
        Ok(f(&mut coordinator))
    }

    fn read<T>(&self, f: impl FnOnce(&DispatchCoordinator) -> T) -> Result<T, DispatchError> {
        self.write(|coordinator| f(coordinator))
    }

    /// See [`DispatchCoordinator::create_emergency`].
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn create_emergency(&self, request: NewEmergency) -> Result<EmergencyCall, DispatchError> {
        self.write(|c| c.create_emergency(request))
    }

    /// See [`DispatchCoordinator::assign_team`].
    ///
    /// # Errors
    ///
    /// Returns the coordinator's error, or [`DispatchError::LockPoisoned`].
    pub fn assign_team(
        &self,
        team_id: TeamId,
        emergency_id: EmergencyId,
        actions: Vec<String>,
    ) -> Result<AssignmentResult, DispatchError> {
        self.write(|c| c.assign_team(team_id, emergency_id, actions))?
    }

    /// See [`DispatchCoordinator::record_team_action`].
    ///
    /// # Errors
    ///
    /// Returns the coordinator's error, or [`DispatchError::LockPoisoned`].
    pub fn record_team_action(
        &self,
        team_id: TeamId,
        emergency_id: Option<EmergencyId>,
        description: impl Into<String>,
    ) -> Result<TeamAction, DispatchError> {
        self.write(|c| c.record_team_action(team_id, emergency_id, description))?
    }

    /// See [`DispatchCoordinator::update_area_status`].
    ///
    /// # Errors
    ///
    /// Returns the coordinator's error, or [`DispatchError::LockPoisoned`].
    pub fn update_area_status(
        &self,
        emergency_id: EmergencyId,
        status: AreaStatus,
    ) -> Result<AffectedArea, DispatchError> {
        self.write(|c| c.update_area_status(emergency_id, status))?
    }

    /// See [`DispatchCoordinator::update_team_status`].
    ///
    /// # Errors
    ///
    /// Returns the coordinator's error, or [`DispatchError::LockPoisoned`].
    pub fn update_team_status(
        &self,
        team_id: TeamId,
        status: TeamStatus,
    ) -> Result<Team, DispatchError> {
        self.write(|c| c.update_team_status(team_id, status))?
    }

    /// Every team in roster order.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn teams(&self) -> Result<Vec<Team>, DispatchError> {
        self.read(DispatchCoordinator::teams)
    }

    /// Look up one emergency.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] or
    /// [`DispatchError::LockPoisoned`].
    pub fn emergency(&self, emergency_id: EmergencyId) -> Result<EmergencyCall, DispatchError> {
        self.read(|c| c.emergency(emergency_id))?
    }

    /// Calls highest priority first.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn prioritized_calls(&self) -> Result<Vec<EmergencyCall>, DispatchError> {
        self.read(DispatchCoordinator::prioritized_calls)
    }

    /// Calls in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn arrival_order(&self) -> Result<Vec<EmergencyCall>, DispatchError> {
        self.read(DispatchCoordinator::arrival_order)
    }

    /// Affected areas in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn affected_areas(&self) -> Result<Vec<AffectedArea>, DispatchError> {
        self.read(DispatchCoordinator::affected_areas)
    }

    /// The affected area of one emergency.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::EmergencyNotFound`] or
    /// [`DispatchError::LockPoisoned`].
    pub fn affected_area(&self, emergency_id: EmergencyId) -> Result<AffectedArea, DispatchError> {
        self.read(|c| c.affected_area(emergency_id))?
    }

    /// The full region tree.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn region_tree(&self) -> Result<Option<RegionNode>, DispatchError> {
        self.read(DispatchCoordinator::region_tree)
    }

    /// Names from the root region down to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ZoneNotFound`] or
    /// [`DispatchError::LockPoisoned`].
    pub fn zone_path(&self, name: &str) -> Result<Vec<String>, DispatchError> {
        self.read(|c| c.zone_path(name))?
    }

    /// Shortest route between two map locations.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn route(&self, origin: &str, destination: &str) -> Result<RouteResult, DispatchError> {
        self.read(|c| c.route(origin, destination))
    }

    /// A team's actions, most recent first. Unknown teams have an empty
    /// history.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn team_actions(&self, team_id: TeamId) -> Result<Vec<TeamAction>, DispatchError> {
        self.read(|c| c.team_actions(team_id))
    }

    /// Every view, read under a single lock acquisition.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::LockPoisoned`] if another holder panicked.
    pub fn snapshot(&self) -> Result<DispatchSnapshot, DispatchError> {
        self.read(DispatchCoordinator::snapshot)
    }
}
