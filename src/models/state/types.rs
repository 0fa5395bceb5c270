use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::stage::StageId;
use crate::transitions::TransitionId;

/// The full navigable state of one wizard session.
///
/// Created once when the pathway is first determined, then changed only
/// through [`PathwayState::complete_stage`] and
/// [`PathwayState::mark_transition_shown`] — both pure transforms that
/// return a new value for the host to persist. Reaches its terminal shape
/// when `current_stage` is `contract_studio`.
///
/// Invariants:
/// - `completed_stages` is append-only and holds only required stages
/// - `current_stage` is never in `skipped_stages`
/// - `skipped_stages` is frozen at creation; reassigning the pathway means
///   creating a new state, not mutating this one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayState {
    pub current_stage: StageId,
    pub completed_stages: Vec<StageId>,
    pub skipped_stages: Vec<StageId>,
    pub stage_timestamps: BTreeMap<StageId, StageTimestamps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_shown: Option<TransitionId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Timestamp trail for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTimestamps {
    /// When the stage first became the active stage.
    pub started_at: DateTime<Utc>,
    /// When the stage was completed. Always >= `started_at`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl StageTimestamps {
    pub(crate) fn started(at: DateTime<Utc>) -> Self {
        Self {
            started_at: at,
            completed_at: None,
        }
    }
}
