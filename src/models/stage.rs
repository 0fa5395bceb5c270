//! The eleven wizard stages and their fixed total order.
//!
//! Every pathway walks a subsequence of the same order; which stages are
//! required for a given pathway lives in [`crate::graph`].

use serde::{Deserialize, Serialize};

/// One discrete workflow step.
///
/// Declaration order is the total order shared by all pathways, so the
/// derived `Ord` compares stages by their position in the wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// Choose how much of the contract is open to negotiation.
    MediationType,
    /// Select the kind of agreement being created.
    ContractType,
    /// Capture the context the mediation will draw on.
    QuickIntake,
    /// Decide where the contract's starting content comes from.
    TemplateSource,
    /// Pick a template from the library.
    TemplateSelection,
    /// Upload the document the contract is built from.
    DocumentUpload,
    /// Review the steps ahead and what this pathway skips.
    PathwayReview,
    /// Size up each side's position before terms are negotiated.
    StrategicAssessment,
    /// Prepare clauses and negotiation points.
    ContractPrep,
    /// Invite the other parties to the contract.
    InviteProviders,
    /// The destination: negotiate and finalize the contract.
    ContractStudio,
}

/// The fixed total order of all eleven stages.
pub const STAGE_ORDER: [StageId; 11] = [
    StageId::MediationType,
    StageId::ContractType,
    StageId::QuickIntake,
    StageId::TemplateSource,
    StageId::TemplateSelection,
    StageId::DocumentUpload,
    StageId::PathwayReview,
    StageId::StrategicAssessment,
    StageId::ContractPrep,
    StageId::InviteProviders,
    StageId::ContractStudio,
];

impl StageId {
    /// Get all stages in total order
    pub fn all() -> &'static [StageId] {
        &STAGE_ORDER
    }

    /// Zero-based position of this stage in the total order.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// Get a display name for this stage
    pub fn display_name(&self) -> &'static str {
        match self {
            StageId::MediationType => "Mediation type",
            StageId::ContractType => "Contract type",
            StageId::QuickIntake => "Quick intake",
            StageId::TemplateSource => "Template source",
            StageId::TemplateSelection => "Template selection",
            StageId::DocumentUpload => "Document upload",
            StageId::PathwayReview => "Pathway review",
            StageId::StrategicAssessment => "Strategic assessment",
            StageId::ContractPrep => "Contract preparation",
            StageId::InviteProviders => "Invite providers",
            StageId::ContractStudio => "Contract studio",
        }
    }

    /// One-line description, used by the pathway-review screen to explain
    /// what each step does and what a pathway skips.
    pub fn description(&self) -> &'static str {
        match self {
            StageId::MediationType => "Choose how much of the contract is open to negotiation",
            StageId::ContractType => "Select the kind of agreement being created",
            StageId::QuickIntake => "Capture the context the mediation will draw on",
            StageId::TemplateSource => "Decide where the contract's starting content comes from",
            StageId::TemplateSelection => "Pick a template from the library",
            StageId::DocumentUpload => "Upload the document the contract is built from",
            StageId::PathwayReview => "Review the steps ahead and what this pathway skips",
            StageId::StrategicAssessment => "Size up each side's position before terms are negotiated",
            StageId::ContractPrep => "Prepare clauses and negotiation points",
            StageId::InviteProviders => "Invite the other parties to the contract",
            StageId::ContractStudio => "Negotiate and finalize the contract",
        }
    }

    /// Route slug for the page that hosts this stage.
    ///
    /// The engine only supplies the lookup table; building concrete URLs
    /// from it is the hosting UI's concern.
    pub fn route(&self) -> &'static str {
        match self {
            StageId::MediationType => "/auth/mediation-type",
            StageId::ContractType => "/auth/contract-type",
            StageId::QuickIntake => "/auth/quick-intake",
            StageId::TemplateSource => "/auth/template-source",
            StageId::TemplateSelection => "/auth/template-selection",
            StageId::DocumentUpload => "/auth/document-upload",
            StageId::PathwayReview => "/auth/pathway-review",
            StageId::StrategicAssessment => "/auth/strategic-assessment",
            StageId::ContractPrep => "/auth/contract-prep",
            StageId::InviteProviders => "/auth/invite-providers",
            StageId::ContractStudio => "/auth/create-contract",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StageId::MediationType => "mediation_type",
            StageId::ContractType => "contract_type",
            StageId::QuickIntake => "quick_intake",
            StageId::TemplateSource => "template_source",
            StageId::TemplateSelection => "template_selection",
            StageId::DocumentUpload => "document_upload",
            StageId::PathwayReview => "pathway_review",
            StageId::StrategicAssessment => "strategic_assessment",
            StageId::ContractPrep => "contract_prep",
            StageId::InviteProviders => "invite_providers",
            StageId::ContractStudio => "contract_studio",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for StageId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STAGE_ORDER
            .iter()
            .find(|stage| stage.to_string() == s)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Invalid stage id: {s}"))
    }
}

/// Display status of a stage, derived on demand from the pathway state.
///
/// Precedence when deriving: skipped > completed > active > pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// Not part of this pathway; never visited.
    Skipped,
    /// Finished and stamped in the timestamp trail.
    Completed,
    /// The stage the session is currently on.
    Active,
    /// Required, but not reached yet.
    Pending,
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Skipped => write!(f, "skipped"),
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Active => write!(f, "active"),
            StageStatus::Pending => write!(f, "pending"),
        }
    }
}
