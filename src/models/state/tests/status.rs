use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, StageStatus};
use crate::models::state::PathwayState;
use crate::transitions::TransitionId;

#[test]
fn test_status_precedence_from_initial_state() {
    let state = PathwayState::new(PathwayId::StcExisting).unwrap();

    assert_eq!(
        state.stage_status(StageId::MediationType),
        StageStatus::Active
    );
    assert_eq!(
        state.stage_status(StageId::ContractType),
        StageStatus::Pending
    );
    assert_eq!(
        state.stage_status(StageId::QuickIntake),
        StageStatus::Skipped
    );
    assert_eq!(
        state.stage_status(StageId::StrategicAssessment),
        StageStatus::Skipped
    );
}

#[test]
fn test_status_reflects_completion() {
    let state = PathwayState::new(PathwayId::FmExisting).unwrap();
    let state = state
        .complete_stage(StageId::MediationType, PathwayId::FmExisting)
        .unwrap();

    assert_eq!(
        state.stage_status(StageId::MediationType),
        StageStatus::Completed
    );
    assert_eq!(
        state.stage_status(StageId::ContractType),
        StageStatus::Active
    );
}

#[test]
fn test_skipped_wins_over_everything() {
    // The skip set is evaluated first; a stage the pathway never visits
    // reports skipped no matter where the session is.
    let state = PathwayState::new(PathwayId::StcScratch).unwrap();
    for stage in &state.skipped_stages {
        assert_eq!(state.stage_status(*stage), StageStatus::Skipped);
    }
}

#[test]
fn test_mark_transition_shown_is_idempotent() {
    let state = PathwayState::new(PathwayId::FmExisting).unwrap();
    assert!(!state.has_shown_transition(TransitionId::TransitionToStudio));

    let once = state.mark_transition_shown(TransitionId::TransitionToStudio);
    let twice = once.mark_transition_shown(TransitionId::TransitionToStudio);

    assert!(once.has_shown_transition(TransitionId::TransitionToStudio));
    assert_eq!(once, twice);
}

#[test]
fn test_marking_a_new_transition_replaces_the_last() {
    let state = PathwayState::new(PathwayId::FmExisting).unwrap();
    let state = state.mark_transition_shown(TransitionId::TransitionToAssessment);
    let state = state.mark_transition_shown(TransitionId::TransitionToPrep);

    assert!(state.has_shown_transition(TransitionId::TransitionToPrep));
    assert!(!state.has_shown_transition(TransitionId::TransitionToAssessment));
}
