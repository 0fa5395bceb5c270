use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::graph;
use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, StageStatus, STAGE_ORDER};
use crate::transitions::TransitionId;

use super::types::{PathwayState, StageTimestamps};

impl PathwayState {
    /// Create the initial state for a freshly resolved pathway.
    ///
    /// The first stage in total order is the starting point for every
    /// pathway (all twelve require it), and the skip set is frozen here
    /// for the life of the session.
    pub fn new(pathway: PathwayId) -> Result<Self, EngineError> {
        let now = Utc::now();
        let first = STAGE_ORDER[0];

        let mut stage_timestamps = BTreeMap::new();
        stage_timestamps.insert(first, StageTimestamps::started(now));

        Ok(Self {
            current_stage: first,
            completed_stages: Vec::new(),
            skipped_stages: graph::skipped_stages(pathway)?,
            stage_timestamps,
            last_transition_shown: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Complete the active stage and advance to the next required one.
    ///
    /// Pure transform: returns a new state value and never mutates in
    /// place; the caller persists the result before the next render.
    ///
    /// Contract:
    /// - an already-completed stage is a no-op returning the state
    ///   unchanged, never a duplicate append
    /// - the pathway destination is not a completable step
    /// - any stage other than the active one is rejected with the state
    ///   left unchanged
    ///
    /// When no required stage remains, `current_stage` lands on the
    /// `contract_studio` terminal sentinel.
    pub fn complete_stage(
        &self,
        stage: StageId,
        pathway: PathwayId,
    ) -> Result<PathwayState, EngineError> {
        if self.completed_stages.contains(&stage) {
            warn!(stage = %stage, "stage already completed, ignoring repeat completion");
            return Ok(self.clone());
        }
        if stage == StageId::ContractStudio {
            return Err(EngineError::TerminalStage(stage));
        }
        if stage != self.current_stage {
            return Err(EngineError::OutOfOrderCompletion {
                expected: self.current_stage,
                got: stage,
            });
        }

        let now = Utc::now();
        let mut next = self.clone();

        next.stage_timestamps
            .entry(stage)
            .or_insert_with(|| StageTimestamps::started(now))
            .completed_at = Some(now);
        next.completed_stages.push(stage);

        let next_stage = graph::next_stage(pathway, stage)?.unwrap_or(StageId::ContractStudio);
        next.current_stage = next_stage;
        // First entry only: a revisit must not reset the original start time.
        next.stage_timestamps
            .entry(next_stage)
            .or_insert_with(|| StageTimestamps::started(now));
        next.updated_at = now;

        debug!(stage = %stage, next = %next_stage, pathway = %pathway, "stage completed");
        Ok(next)
    }

    /// Derive the display status of a stage.
    ///
    /// Precedence: skipped > completed > active > pending, always against
    /// the frozen skip set.
    pub fn stage_status(&self, stage: StageId) -> StageStatus {
        if self.skipped_stages.contains(&stage) {
            StageStatus::Skipped
        } else if self.completed_stages.contains(&stage) {
            StageStatus::Completed
        } else if stage == self.current_stage {
            StageStatus::Active
        } else {
            StageStatus::Pending
        }
    }

    /// Record that an interstitial has been displayed, so a page reload
    /// does not re-show it. Idempotent.
    pub fn mark_transition_shown(&self, transition: TransitionId) -> PathwayState {
        if self.last_transition_shown == Some(transition) {
            return self.clone();
        }
        let mut next = self.clone();
        next.last_transition_shown = Some(transition);
        next.updated_at = Utc::now();
        next
    }

    /// Whether an interstitial has already been displayed this session.
    pub fn has_shown_transition(&self, transition: TransitionId) -> bool {
        self.last_transition_shown == Some(transition)
    }

    /// Whether the session has landed in the contract studio.
    pub fn is_terminal(&self) -> bool {
        self.current_stage == StageId::ContractStudio
    }

    /// Elapsed seconds between a stage's start and completion stamps.
    pub fn stage_duration_secs(&self, stage: StageId) -> Option<i64> {
        let stamps = self.stage_timestamps.get(&stage)?;
        let completed_at = stamps.completed_at?;
        Some(
            completed_at
                .signed_duration_since(stamps.started_at)
                .num_seconds(),
        )
    }

    /// Decode a persisted state blob.
    ///
    /// Corrupted JSON, unrecognized stage strings, or an invariant
    /// violation all surface as the recoverable
    /// [`EngineError::MalformedState`]; the recommended recovery is
    /// [`PathwayState::new`] for the session's known pathway, not guessing
    /// a stage to clamp into.
    pub fn restore(json: &str) -> Result<PathwayState, EngineError> {
        let state: PathwayState =
            serde_json::from_str(json).map_err(|e| EngineError::MalformedState {
                reason: e.to_string(),
            })?;
        state.check_invariants()?;
        Ok(state)
    }

    /// Encode this state for the host to persist.
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::MalformedState {
            reason: e.to_string(),
        })
    }

    fn check_invariants(&self) -> Result<(), EngineError> {
        if self.skipped_stages.contains(&self.current_stage) {
            return Err(EngineError::MalformedState {
                reason: format!(
                    "current stage '{}' is in the skip set",
                    self.current_stage
                ),
            });
        }
        for stage in &self.completed_stages {
            if self.skipped_stages.contains(stage) {
                return Err(EngineError::MalformedState {
                    reason: format!("completed stage '{stage}' is in the skip set"),
                });
            }
        }
        for (stage, stamps) in &self.stage_timestamps {
            if let Some(completed_at) = stamps.completed_at {
                if completed_at < stamps.started_at {
                    return Err(EngineError::MalformedState {
                        reason: format!("stage '{stage}' completed before it started"),
                    });
                }
            }
        }
        Ok(())
    }
}
