use crate::error::EngineError;
use crate::models::pathway::PathwayId;
use crate::models::stage::StageId;
use crate::models::state::PathwayState;
use crate::transitions::TransitionId;

#[test]
fn test_json_round_trip_is_identity() {
    let state = PathwayState::new(PathwayId::FmUploaded).unwrap();
    let state = state
        .complete_stage(StageId::MediationType, PathwayId::FmUploaded)
        .unwrap()
        .mark_transition_shown(TransitionId::TransitionToAssessment);

    let json = state.to_json().unwrap();
    let restored = PathwayState::restore(&json).unwrap();
    assert_eq!(state, restored);
}

#[test]
fn test_restore_rejects_corrupted_json() {
    let err = PathwayState::restore("{not json").unwrap_err();
    assert!(matches!(err, EngineError::MalformedState { .. }));
}

#[test]
fn test_restore_rejects_unknown_stage_strings() {
    let state = PathwayState::new(PathwayId::FmExisting).unwrap();
    let json = state
        .to_json()
        .unwrap()
        .replace("mediation_type", "negotiation_kickoff");

    let err = PathwayState::restore(&json).unwrap_err();
    assert!(matches!(err, EngineError::MalformedState { .. }));
}

#[test]
fn test_restore_rejects_current_stage_in_skip_set() {
    let state = PathwayState::new(PathwayId::StcExisting).unwrap();
    let mut tampered = state.clone();
    tampered.current_stage = StageId::QuickIntake;

    let err = PathwayState::restore(&tampered.to_json().unwrap()).unwrap_err();
    assert!(matches!(err, EngineError::MalformedState { .. }));
}

#[test]
fn test_restore_rejects_completed_stage_in_skip_set() {
    let state = PathwayState::new(PathwayId::StcExisting).unwrap();
    let mut tampered = state.clone();
    tampered.completed_stages.push(StageId::StrategicAssessment);

    let err = PathwayState::restore(&tampered.to_json().unwrap()).unwrap_err();
    assert!(matches!(err, EngineError::MalformedState { .. }));
}

#[test]
fn test_restore_rejects_completion_before_start() {
    let state = PathwayState::new(PathwayId::FmExisting).unwrap();
    let mut tampered = state.clone();
    let stamps = tampered
        .stage_timestamps
        .get_mut(&StageId::MediationType)
        .unwrap();
    stamps.completed_at = Some(stamps.started_at - chrono::Duration::seconds(30));

    let err = PathwayState::restore(&tampered.to_json().unwrap()).unwrap_err();
    assert!(matches!(err, EngineError::MalformedState { .. }));
}

#[test]
fn test_restored_state_keeps_working() {
    let state = PathwayState::new(PathwayId::PmModified).unwrap();
    let state = state
        .complete_stage(StageId::MediationType, PathwayId::PmModified)
        .unwrap();

    let restored = PathwayState::restore(&state.to_json().unwrap()).unwrap();
    let advanced = restored
        .complete_stage(StageId::ContractType, PathwayId::PmModified)
        .unwrap();
    assert_eq!(advanced.current_stage, StageId::QuickIntake);
}
