//! Shared type definitions for the Brigada wildfire dispatch engine.
//!
//! This crate is the single source of truth for the records exchanged
//! between the dispatch core and the boundary layer. Types flow to
//! `TypeScript` via `ts-rs` for the dispatch dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe numeric identifiers for emergencies and teams
//! - [`enums`] -- Vegetation, lifecycle states, region levels, failure kinds
//! - [`structs`] -- Calls, areas, teams, actions, regions, routes, results

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AreaStatus, CallStatus, ErrorKind, RegionLevel, TeamStatus, VegetationType};
pub use ids::{EmergencyId, TeamId};
pub use structs::{
    AffectedArea, AssignmentResult, DispatchSnapshot, EmergencyCall, FailureReport,
    InvalidSeverity, MAX_SEVERITY, MIN_SEVERITY, NewEmergency, RegionNode, RouteResult, Severity,
    Team, TeamAction,
};

#[cfg(test)]
mod tests {
    //! Binding generation for the dispatch dashboard.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EmergencyId::export_all();
        let _ = crate::ids::TeamId::export_all();

        // Enums
        let _ = crate::enums::VegetationType::export_all();
        let _ = crate::enums::CallStatus::export_all();
        let _ = crate::enums::AreaStatus::export_all();
        let _ = crate::enums::TeamStatus::export_all();
        let _ = crate::enums::RegionLevel::export_all();
        let _ = crate::enums::ErrorKind::export_all();

        // Structs
        let _ = crate::structs::NewEmergency::export_all();
        let _ = crate::structs::EmergencyCall::export_all();
        let _ = crate::structs::AffectedArea::export_all();
        let _ = crate::structs::Team::export_all();
        let _ = crate::structs::TeamAction::export_all();
        let _ = crate::structs::RegionNode::export_all();
        let _ = crate::structs::RouteResult::export_all();
        let _ = crate::structs::AssignmentResult::export_all();
        let _ = crate::structs::FailureReport::export_all();
        let _ = crate::structs::DispatchSnapshot::export_all();
    }
}
