//! End-to-end dispatch scenarios against the shared engine handle.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]

use brigada_dispatch::{DispatchEngine, DispatchError};
use brigada_types::{
    AreaStatus, CallStatus, EmergencyId, ErrorKind, NewEmergency, Severity, TeamId, TeamStatus,
    VegetationType,
};

fn engine() -> DispatchEngine {
    DispatchEngine::with_defaults().unwrap()
}

fn report(
    engine: &DispatchEngine,
    location: &str,
    severity: u8,
    vegetation: VegetationType,
) -> EmergencyId {
    engine
        .create_emergency(NewEmergency {
            location: location.to_owned(),
            severity: Severity::new(severity).unwrap(),
            vegetation_type: vegetation,
            weather_condition: "hot and windy".to_owned(),
        })
        .unwrap()
        .id
}

#[test]
fn priority_grows_with_severity() {
    let engine = engine();
    for vegetation in [
        VegetationType::Cerrado,
        VegetationType::MataAtlantica,
        VegetationType::Pantanal,
        VegetationType::Other,
    ] {
        for severity in 1..=5 {
            report(&engine, "Zona Norte", severity, vegetation);
        }
    }
    let calls = engine.arrival_order().unwrap();
    for call in &calls {
        let expected = f64::from(call.severity.get()) * call.vegetation_type.weight();
        assert!((call.priority - expected).abs() < 1e-9);
    }
    for pair in calls.chunks(5) {
        assert!(pair.windows(2).all(|w| w[0].priority < w[1].priority));
    }
}

#[test]
fn prioritized_view_is_sorted_and_idempotent() {
    let engine = engine();
    report(&engine, "Zona Norte", 2, VegetationType::Cerrado);
    report(&engine, "Mata Alta", 5, VegetationType::Pantanal);
    report(&engine, "Zona Sul", 4, VegetationType::Other);
    report(&engine, "Vila Verde", 4, VegetationType::Other);

    let first = engine.prioritized_calls().unwrap();
    let second = engine.prioritized_calls().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert!(first.windows(2).all(|w| w[0].priority >= w[1].priority));
    // Equal priority: lower id first.
    assert_eq!(first[1].id, EmergencyId(3));
    assert_eq!(first[2].id, EmergencyId(4));
}

#[test]
fn arrival_order_matches_creation() {
    let engine = engine();
    let ids: Vec<EmergencyId> = (1..=5)
        .map(|s| report(&engine, "Zona Sul", s, VegetationType::Cerrado))
        .collect();
    assert_eq!(ids, (1..=5).map(EmergencyId).collect::<Vec<_>>());
    let arrival: Vec<EmergencyId> = engine.arrival_order().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(arrival, ids);
}

#[test]
fn assignment_is_visible_in_every_view() {
    let engine = engine();
    for _ in 0..4 {
        report(&engine, "Zona Norte", 1, VegetationType::Other);
    }
    let target = report(&engine, "Mata Alta", 3, VegetationType::Cerrado);
    assert_eq!(target, EmergencyId(5));

    let result = engine
        .assign_team(TeamId(1), target, vec!["contain east flank".to_owned()])
        .unwrap();
    assert_eq!(result.route.distance, 8.0);
    assert_eq!(result.estimated_time, 16.0);
    assert_eq!(result.route.path, vec!["Base Central", "Vila Verde", "Mata Alta"]);

    let snapshot = engine.snapshot().unwrap();
    let in_queue = snapshot.prioritized_calls.iter().find(|c| c.id == target).unwrap();
    let in_arrival = snapshot.arrival_order.iter().find(|c| c.id == target).unwrap();
    assert_eq!(in_queue.status, CallStatus::InProgress);
    assert_eq!(in_arrival.status, CallStatus::InProgress);
    assert_eq!(engine.emergency(target).unwrap().status, CallStatus::InProgress);
    assert_eq!(
        engine.affected_area(target).unwrap().status,
        AreaStatus::ContainmentInProgress
    );
    let team = snapshot.teams.iter().find(|t| t.id == TeamId(1)).unwrap();
    assert_eq!(team.status, TeamStatus::OnMission);
    assert_eq!(
        engine.team_actions(TeamId(1)).unwrap()[0].description,
        "contain east flank"
    );
    // Other calls untouched.
    assert!(
        snapshot
            .arrival_order
            .iter()
            .filter(|c| c.id != target)
            .all(|c| c.status == CallStatus::Pending)
    );
}

#[test]
fn unknown_ids_report_not_found_and_change_nothing() {
    let engine = engine();
    let id = report(&engine, "Zona Sul", 3, VegetationType::Cerrado);
    let before = engine.snapshot().unwrap();

    let err = engine.assign_team(TeamId(99), id, vec!["x".to_owned()]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let failure = err.to_failure();
    assert!(!failure.success);
    assert_eq!(failure.kind, ErrorKind::NotFound);

    let err = engine
        .assign_team(TeamId(1), EmergencyId(99), vec!["x".to_owned()])
        .unwrap_err();
    assert!(matches!(err, DispatchError::EmergencyNotFound(_)));

    assert_eq!(engine.snapshot().unwrap(), before);
    assert!(engine.team_actions(TeamId(1)).unwrap().is_empty());
}

#[test]
fn history_of_unknown_team_is_empty() {
    let engine = engine();
    let id = report(&engine, "Zona Norte", 2, VegetationType::Cerrado);
    engine.assign_team(TeamId(1), id, vec!["engage".to_owned()]).unwrap();

    assert!(engine.team_actions(TeamId(99)).unwrap().is_empty());
    assert!(engine.team_actions(TeamId(2)).unwrap().is_empty());
    assert_eq!(engine.team_actions(TeamId(1)).unwrap().len(), 1);
}

#[test]
fn route_edge_cases() {
    let engine = engine();
    let same = engine.route("Zona Sul", "Zona Sul").unwrap();
    assert_eq!(same.distance, 0.0);
    assert_eq!(same.path, vec!["Zona Sul"]);

    let absent = engine.route("Base Central", "Nowhere").unwrap();
    assert!(absent.distance.is_infinite());
    assert_eq!(absent.path, vec!["Base Central", "Nowhere"]);
}

#[test]
fn zone_paths() {
    let engine = engine();
    assert_eq!(
        engine.zone_path("Zona Norte").unwrap(),
        vec!["São Paulo", "Campinas", "Zona Norte"]
    );
    let err = engine.zone_path("Nonexistent").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn invalid_severity_is_invalid_input() {
    let err = DispatchError::from(Severity::new(6).unwrap_err());
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(Severity::new(0).is_err());
}

#[test]
fn snapshot_serializes_with_wire_labels() {
    let engine = engine();
    let id = report(&engine, "Zona Norte", 3, VegetationType::MataAtlantica);
    engine.assign_team(TeamId(2), id, Vec::new()).unwrap();

    let json = serde_json::to_value(engine.snapshot().unwrap()).unwrap();
    assert_eq!(json["prioritized_calls"][0]["status"], "in_progress");
    assert_eq!(json["prioritized_calls"][0]["vegetation_type"], "mata_atlantica");
    assert_eq!(json["prioritized_calls"][0]["severity"], 3);
    assert_eq!(json["affected_areas"][0]["status"], "containment_in_progress");
    assert_eq!(json["teams"][1]["status"], "on_mission");
}
