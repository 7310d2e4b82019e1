use epirt_core::{ContactEvent, EpiError, EpidemicModel, HealthStatus, PersonId};
use epirt_track::{DaySnapshot, PopulationTrace, ScriptedModel};

fn snapshot(codes: &[u8]) -> DaySnapshot {
    DaySnapshot {
        statuses: codes.iter().map(|code| HealthStatus::from_code(*code)).collect(),
        networks: Vec::new(),
    }
}

fn two_day_trace() -> PopulationTrace {
    PopulationTrace {
        population_size: 3,
        days: vec![snapshot(&[0, 4, 0]), snapshot(&[0, 4, 3])],
        contact_events: vec![
            ContactEvent::new(1, 2, 2, false, 1),
            ContactEvent::new(1, 2, 1, true, 1),
        ],
        ..PopulationTrace::default()
    }
}

#[test]
fn snapshot_size_mismatch_is_a_model_error() {
    let mut trace = two_day_trace();
    trace.days[1].statuses.pop();
    match ScriptedModel::new(trace).expect_err("short snapshot") {
        EpiError::Model(info) => {
            assert_eq!(info.code, "population-mismatch");
            assert_eq!(info.context.get("day").map(String::as_str), Some("2"));
            assert_eq!(info.context.get("found").map(String::as_str), Some("2"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn event_past_horizon_is_a_model_error() {
    let mut trace = two_day_trace();
    trace.contact_events.push(ContactEvent::new(1, 0, 3, false, 1));
    let err = ScriptedModel::new(trace).expect_err("day 3 of 2");
    assert_eq!(err.info().code, "event-outside-horizon");
}

#[test]
fn stepping_reveals_events_and_stops_at_horizon() {
    let mut model = ScriptedModel::new(two_day_trace()).expect("valid trace");
    assert_eq!(model.total_days(), 2);
    assert!(model.contact_events().is_empty());
    assert_eq!(
        model.status(PersonId::from_raw(2)).expect("status"),
        HealthStatus::Susceptible
    );

    model.step().expect("day 1");
    assert_eq!(model.contact_events().len(), 1);
    assert_eq!(
        model.status(PersonId::from_raw(2)).expect("status"),
        HealthStatus::Asymptomatic
    );

    model.step().expect("day 2");
    let days: Vec<u32> = model.contact_events().iter().map(|event| event.day).collect();
    assert_eq!(days, vec![1, 2]);

    assert!(matches!(model.status(PersonId::from_raw(0)), Err(EpiError::Model(_))));
    assert!(matches!(model.step(), Err(EpiError::Model(_))));
}

#[test]
fn unknown_person_is_a_model_error() {
    let model = ScriptedModel::new(two_day_trace()).expect("valid trace");
    let err = model.status(PersonId::from_raw(3)).expect_err("outside population");
    assert_eq!(err.info().code, "person-out-of-range");
}

#[test]
fn trace_decodes_from_json() {
    let json = br#"{
        "population_size": 2,
        "days": [
            {"statuses": [0, 4], "networks": [{"id": 0, "category": 0, "multiplier": 1.0}]},
            {"statuses": [9, 21]}
        ],
        "contact_events": [
            {"infector_id": 1, "contact_id": 0, "day": 1, "infection_caused": false, "network_id": 0}
        ],
        "series": {"R_inst": [0.0, 1.1]}
    }"#;
    let model = ScriptedModel::from_json_slice(json).expect("decode");
    assert_eq!(model.population_size(), 2);
    assert_eq!(model.trace().days[1].statuses[1], HealthStatus::Mortuary);
    assert_eq!(model.networks().count(), 1);
    assert_eq!(model.named_series("R_inst"), Some(&[0.0, 1.1][..]));
    assert!(model.named_series("missing").is_none());
}
