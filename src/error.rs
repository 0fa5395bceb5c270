//! Error types for the pathway engine.

use thiserror::Error;

use crate::models::pathway::PathwayId;
use crate::models::stage::StageId;

/// Errors surfaced by the pathway engine.
///
/// `InvalidPathway` indicates a configuration defect (a hole in the
/// requirement table) and should abort startup rather than be handled.
/// `MalformedState` is recoverable: regenerate the session's state with
/// [`PathwayState::new`](crate::models::state::PathwayState::new) instead
/// of guessing at a stage to resume from.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requirement table has no entry for a (pathway, stage) pair.
    #[error("no requirement configured for stage '{stage}' in pathway '{pathway}'")]
    InvalidPathway { pathway: PathwayId, stage: StageId },

    /// `complete_stage` was called for a stage other than the active one.
    #[error("cannot complete '{got}': the active stage is '{expected}'")]
    OutOfOrderCompletion { expected: StageId, got: StageId },

    /// `complete_stage` was called for the pathway destination.
    #[error("'{0}' is where the pathway lands, not a completable stage")]
    TerminalStage(StageId),

    /// A persisted state blob failed to decode or violates an invariant.
    #[error("malformed pathway state: {reason}")]
    MalformedState { reason: String },
}
