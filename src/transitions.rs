//! One-time interstitials shown when a session crosses a phase boundary.
//!
//! The catalogue isolates all user-facing copy selection from the core
//! transition logic: the state store decides *that* a stage completed, this
//! module decides *whether* that unlocked edge has a message worth showing
//! for the session's pathway.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::graph;
use crate::models::pathway::PathwayId;
use crate::models::stage::StageId;

/// Identifier for a catalogued interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionId {
    /// pathway_review → strategic_assessment
    TransitionToAssessment,
    /// strategic_assessment → contract_prep
    TransitionToPrep,
    /// contract_prep → invite_providers
    TransitionToInvite,
    /// invite_providers → contract_studio
    TransitionToStudio,
}

impl TransitionId {
    /// Get all catalogued transitions
    pub fn all() -> &'static [TransitionId] {
        &[
            TransitionId::TransitionToAssessment,
            TransitionId::TransitionToPrep,
            TransitionId::TransitionToInvite,
            TransitionId::TransitionToStudio,
        ]
    }

    /// The (from, to) stage edge this interstitial sits on.
    pub fn edge(&self) -> (StageId, StageId) {
        match self {
            TransitionId::TransitionToAssessment => {
                (StageId::PathwayReview, StageId::StrategicAssessment)
            }
            TransitionId::TransitionToPrep => {
                (StageId::StrategicAssessment, StageId::ContractPrep)
            }
            TransitionId::TransitionToInvite => {
                (StageId::ContractPrep, StageId::InviteProviders)
            }
            TransitionId::TransitionToStudio => {
                (StageId::InviteProviders, StageId::ContractStudio)
            }
        }
    }
}

impl std::fmt::Display for TransitionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionId::TransitionToAssessment => write!(f, "transition_to_assessment"),
            TransitionId::TransitionToPrep => write!(f, "transition_to_prep"),
            TransitionId::TransitionToInvite => write!(f, "transition_to_invite"),
            TransitionId::TransitionToStudio => write!(f, "transition_to_studio"),
        }
    }
}

/// The payload the hosting UI renders as an interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionMessage {
    pub id: TransitionId,
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
    pub cta_label: &'static str,
}

const CATALOGUE: [TransitionMessage; 4] = [
    TransitionMessage {
        id: TransitionId::TransitionToAssessment,
        title: "Next: strategic assessment",
        body: "Before any terms are drafted, we size up each side's position \
               so the mediation starts from an honest picture.",
        bullets: &[
            "Score your leverage on the points that matter",
            "Flag clauses likely to be contested",
            "Set priorities for the negotiation ahead",
        ],
        cta_label: "Start assessment",
    },
    TransitionMessage {
        id: TransitionId::TransitionToPrep,
        title: "Next: contract preparation",
        body: "Your assessment is done. Now shape the clauses and fallback \
               positions before anyone else is at the table.",
        bullets: &[
            "Draft clause language from your assessment",
            "Mark must-haves and trade-aways",
            "Set a fallback position for each contested point",
        ],
        cta_label: "Prepare the contract",
    },
    TransitionMessage {
        id: TransitionId::TransitionToInvite,
        title: "Ready to bring in the other side",
        body: "The groundwork is in place. Invite the providers who will \
               negotiate this contract with you.",
        bullets: &[
            "Send invitations by email",
            "Each provider gets their own secure view",
            "You control what they see before the studio opens",
        ],
        cta_label: "Invite providers",
    },
    TransitionMessage {
        id: TransitionId::TransitionToStudio,
        title: "Welcome to the contract studio",
        body: "Everything from here happens in one place: the live contract, \
               the people on it, and the record of what changed.",
        bullets: &[
            "Edit clauses with every change tracked",
            "Discuss terms without leaving the document",
            "Finalize when all parties agree",
        ],
        cta_label: "Open the studio",
    },
];

/// Look up the catalogued message for a transition.
pub fn message(id: TransitionId) -> &'static TransitionMessage {
    match id {
        TransitionId::TransitionToAssessment => &CATALOGUE[0],
        TransitionId::TransitionToPrep => &CATALOGUE[1],
        TransitionId::TransitionToInvite => &CATALOGUE[2],
        TransitionId::TransitionToStudio => &CATALOGUE[3],
    }
}

/// Whether an interstitial is eligible for a pathway.
///
/// True only if both endpoints of the catalogued edge are required stages
/// for that pathway; a transition into or out of a skipped stage must
/// never surface.
pub fn should_show(pathway: PathwayId, id: TransitionId) -> Result<bool, EngineError> {
    let (from, to) = id.edge();
    Ok(graph::is_required(pathway, from)? && graph::is_required(pathway, to)?)
}

/// The interstitial unlocked by completing `completed_stage`, if any.
///
/// Called right after a `complete_stage`. Returns the catalogued,
/// pathway-eligible message whose edge starts at the completed stage, or
/// `None`. One-time display across reloads is the host's job via
/// [`PathwayState::mark_transition_shown`](crate::models::state::PathwayState::mark_transition_shown).
pub fn next_transition(
    pathway: PathwayId,
    completed_stage: StageId,
) -> Result<Option<&'static TransitionMessage>, EngineError> {
    for id in TransitionId::all() {
        if id.edge().0 == completed_stage && should_show(pathway, *id)? {
            return Ok(Some(message(*id)));
        }
    }
    Ok(None)
}
