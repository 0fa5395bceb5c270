//! Progress projections derived from pathway state.
//!
//! Two views: an overall percentage for the progress bar, and a coarser
//! seven-group projection for the compact step indicator.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::graph;
use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, StageStatus};
use crate::models::state::PathwayState;

/// Coarser grouping of the eleven stages for the compact step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressGroup {
    Setup,
    Context,
    Source,
    Review,
    Assess,
    Prep,
    Invite,
}

impl ProgressGroup {
    /// Get all groups in display order
    pub fn all() -> &'static [ProgressGroup] {
        &[
            ProgressGroup::Setup,
            ProgressGroup::Context,
            ProgressGroup::Source,
            ProgressGroup::Review,
            ProgressGroup::Assess,
            ProgressGroup::Prep,
            ProgressGroup::Invite,
        ]
    }

    /// The stages this group covers. Together the seven groups cover all
    /// eleven stages; the studio belongs to the invite group because that
    /// is the phase the session is in when it lands there.
    pub fn stages(&self) -> &'static [StageId] {
        match self {
            ProgressGroup::Setup => &[StageId::MediationType, StageId::ContractType],
            ProgressGroup::Context => &[StageId::QuickIntake],
            ProgressGroup::Source => &[
                StageId::TemplateSource,
                StageId::TemplateSelection,
                StageId::DocumentUpload,
            ],
            ProgressGroup::Review => &[StageId::PathwayReview],
            ProgressGroup::Assess => &[StageId::StrategicAssessment],
            ProgressGroup::Prep => &[StageId::ContractPrep],
            ProgressGroup::Invite => &[StageId::InviteProviders, StageId::ContractStudio],
        }
    }

    /// Get a display name for this group
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgressGroup::Setup => "Setup",
            ProgressGroup::Context => "Context",
            ProgressGroup::Source => "Source",
            ProgressGroup::Review => "Review",
            ProgressGroup::Assess => "Assess",
            ProgressGroup::Prep => "Prep",
            ProgressGroup::Invite => "Invite",
        }
    }
}

impl std::fmt::Display for ProgressGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressGroup::Setup => write!(f, "setup"),
            ProgressGroup::Context => write!(f, "context"),
            ProgressGroup::Source => write!(f, "source"),
            ProgressGroup::Review => write!(f, "review"),
            ProgressGroup::Assess => write!(f, "assess"),
            ProgressGroup::Prep => write!(f, "prep"),
            ProgressGroup::Invite => write!(f, "invite"),
        }
    }
}

/// Progress of one UI group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProgress {
    pub group: ProgressGroup,
    pub status: StageStatus,
    /// Required stages in this group the session has completed.
    pub completed: usize,
    /// Required stages in this group for this pathway.
    pub required: usize,
}

/// Overall progress as a whole percentage.
///
/// Completed count over the pathway's required-stage count, excluding the
/// contract studio from the denominator: the studio is where the workflow
/// lands, not a step the user completes. Rounded to the nearest percent.
pub fn percent_complete(
    pathway: PathwayId,
    state: &PathwayState,
) -> Result<u8, EngineError> {
    let mut steps = graph::required_stages(pathway)?;
    steps.retain(|stage| *stage != StageId::ContractStudio);
    if steps.is_empty() {
        return Ok(0);
    }

    let completed = steps
        .iter()
        .filter(|stage| state.completed_stages.contains(stage))
        .count();

    Ok(((completed as f32 / steps.len() as f32) * 100.0).round() as u8)
}

/// Per-group progress for the compact step indicator.
///
/// A group is skipped iff it has zero required stages in this pathway,
/// completed iff every required stage in it is completed, and active when
/// the current stage sits in it or it has partial completion. Folding
/// partial-but-not-current into active is an intentional simplification.
pub fn group_progress(
    pathway: PathwayId,
    state: &PathwayState,
) -> Result<Vec<GroupProgress>, EngineError> {
    let mut groups = Vec::with_capacity(ProgressGroup::all().len());

    for group in ProgressGroup::all() {
        let mut required = Vec::new();
        for stage in group.stages() {
            if graph::is_required(pathway, *stage)? {
                required.push(*stage);
            }
        }
        let completed = required
            .iter()
            .filter(|stage| state.completed_stages.contains(stage))
            .count();

        let status = if required.is_empty() {
            StageStatus::Skipped
        } else if completed == required.len() {
            StageStatus::Completed
        } else if group.stages().contains(&state.current_stage) || completed > 0 {
            StageStatus::Active
        } else {
            StageStatus::Pending
        };

        groups.push(GroupProgress {
            group: *group,
            status,
            completed,
            required: required.len(),
        });
    }

    Ok(groups)
}
