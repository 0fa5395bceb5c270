//! The stage graph: which stages each pathway requires, and the forward
//! and backward scans over the shared total order.
//!
//! The per-pathway configuration lives in [`requirements`] as an explicit
//! data table; [`crate::validation`] checks it for totality at startup.

pub mod requirements;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, STAGE_ORDER};

/// Whether a stage is part of a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageRequirement {
    /// The stage must be visited on this pathway.
    Required,
    /// The stage is never visited on this pathway.
    Skipped,
    /// Reserved. No shipped pathway uses it; the table validator rejects
    /// any row that does, so a pathway that needs it comes with engine work.
    Conditional,
}

/// One pathway's row of the requirement table.
#[derive(Debug, Clone, Copy)]
pub struct PathwayRule {
    pub pathway: PathwayId,
    pub entries: &'static [(StageId, StageRequirement)],
}

/// Look up the requirement for a (pathway, stage) pair.
///
/// A miss means the table itself has a hole. That is a configuration
/// defect, never a runtime condition, so it surfaces as
/// [`EngineError::InvalidPathway`] instead of a default.
pub fn requirement(pathway: PathwayId, stage: StageId) -> Result<StageRequirement, EngineError> {
    let rule = requirements::PATHWAY_RULES
        .iter()
        .find(|rule| rule.pathway == pathway)
        .ok_or(EngineError::InvalidPathway { pathway, stage })?;

    rule.entries
        .iter()
        .find(|(entry_stage, _)| *entry_stage == stage)
        .map(|(_, requirement)| *requirement)
        .ok_or(EngineError::InvalidPathway { pathway, stage })
}

/// Check whether a stage must be visited on this pathway.
pub fn is_required(pathway: PathwayId, stage: StageId) -> Result<bool, EngineError> {
    Ok(requirement(pathway, stage)? == StageRequirement::Required)
}

/// The first required stage strictly after `from` in total order, or
/// `None` when no required stage remains.
///
/// Never lands on a skipped stage, and `from` may be any stage (including
/// a skipped one), so jump navigation works as well as linear advance.
pub fn next_stage(pathway: PathwayId, from: StageId) -> Result<Option<StageId>, EngineError> {
    for stage in STAGE_ORDER.iter().filter(|stage| **stage > from) {
        if is_required(pathway, *stage)? {
            return Ok(Some(*stage));
        }
    }
    Ok(None)
}

/// The first required stage strictly before `from` in total order, or
/// `None` when the pathway has no earlier required stage.
pub fn previous_stage(pathway: PathwayId, from: StageId) -> Result<Option<StageId>, EngineError> {
    for stage in STAGE_ORDER.iter().rev().filter(|stage| **stage < from) {
        if is_required(pathway, *stage)? {
            return Ok(Some(*stage));
        }
    }
    Ok(None)
}

/// All stages this pathway requires, in total order.
pub fn required_stages(pathway: PathwayId) -> Result<Vec<StageId>, EngineError> {
    let mut stages = Vec::new();
    for stage in STAGE_ORDER {
        if is_required(pathway, stage)? {
            stages.push(stage);
        }
    }
    Ok(stages)
}

/// All stages this pathway skips, in total order.
///
/// The pathway-review screen uses this projection to explain which steps
/// the session will never see.
pub fn skipped_stages(pathway: PathwayId) -> Result<Vec<StageId>, EngineError> {
    let mut stages = Vec::new();
    for stage in STAGE_ORDER {
        if requirement(pathway, stage)? == StageRequirement::Skipped {
            stages.push(stage);
        }
    }
    Ok(stages)
}
