//! Error types for the `brigada-dispatch` crate.
//!
//! [`DispatchError`] covers every failure a caller can observe. Failed
//! operations never leave shared state partially mutated: existence of
//! every referenced entity is checked before anything changes.

use brigada_types::{EmergencyId, ErrorKind, FailureReport, InvalidSeverity, TeamId};
use brigada_world::WorldError;

/// Errors that can occur during dispatch operations.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No emergency with this id has been registered.
    #[error("emergency {0} not found")]
    EmergencyNotFound(EmergencyId),

    /// No team with this id is on the roster.
    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    /// No region with this name exists in the hierarchy.
    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    /// A request or configuration value is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A severity outside 1..=5 was supplied.
    #[error("invalid input: {source}")]
    InvalidSeverity {
        /// The underlying validation error.
        #[from]
        source: InvalidSeverity,
    },

    /// The dispatch map could not be built.
    #[error("map error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// A thread panicked while holding the engine lock.
    #[error("dispatch engine lock poisoned")]
    LockPoisoned,
}

impl DispatchError {
    /// Failure category reported to the boundary layer.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmergencyNotFound(_) | Self::TeamNotFound(_) | Self::ZoneNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::InvalidInput(_) | Self::InvalidSeverity { .. } | Self::World { .. } => {
                ErrorKind::InvalidInput
            }
            Self::LockPoisoned => ErrorKind::Internal,
        }
    }

    /// Build the structured `success = false` record for this error.
    pub fn to_failure(&self) -> FailureReport {
        FailureReport::new(self.kind(), self.to_string())
    }
}
