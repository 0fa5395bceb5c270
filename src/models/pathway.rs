//! Pathway identity: the two session-start choices and their cross product.
//!
//! A pathway is fixed once at session start and never reassigned; changing
//! it means creating a fresh [`PathwayState`](crate::models::state::PathwayState).

use serde::{Deserialize, Serialize};

/// How much of the eventual contract is open to negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediationType {
    /// Every clause is on the table.
    FullMediation,
    /// A fixed core with negotiable sections.
    PartialMediation,
    /// No negotiation phase; the contract goes out as prepared.
    StraightToContract,
}

impl MediationType {
    /// Get all mediation types
    pub fn all() -> &'static [MediationType] {
        &[
            MediationType::FullMediation,
            MediationType::PartialMediation,
            MediationType::StraightToContract,
        ]
    }

    /// Get a display name for this mediation type
    pub fn display_name(&self) -> &'static str {
        match self {
            MediationType::FullMediation => "Full mediation",
            MediationType::PartialMediation => "Partial mediation",
            MediationType::StraightToContract => "Straight to contract",
        }
    }
}

impl std::fmt::Display for MediationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediationType::FullMediation => write!(f, "full_mediation"),
            MediationType::PartialMediation => write!(f, "partial_mediation"),
            MediationType::StraightToContract => write!(f, "straight_to_contract"),
        }
    }
}

impl std::str::FromStr for MediationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_mediation" => Ok(MediationType::FullMediation),
            "partial_mediation" => Ok(MediationType::PartialMediation),
            "straight_to_contract" => Ok(MediationType::StraightToContract),
            _ => anyhow::bail!(
                "Invalid mediation type: {s}. Use: full_mediation, partial_mediation, straight_to_contract"
            ),
        }
    }
}

/// How the contract's initial content is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    /// Use a library template as-is.
    ExistingTemplate,
    /// Start from a library template, then edit it.
    ModifiedTemplate,
    /// Build the contract from an uploaded document.
    UploadedTemplate,
    /// Draft everything from a blank page.
    FromScratch,
}

impl TemplateSource {
    /// Get all template sources
    pub fn all() -> &'static [TemplateSource] {
        &[
            TemplateSource::ExistingTemplate,
            TemplateSource::ModifiedTemplate,
            TemplateSource::UploadedTemplate,
            TemplateSource::FromScratch,
        ]
    }

    /// Get a display name for this template source
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateSource::ExistingTemplate => "Existing template",
            TemplateSource::ModifiedTemplate => "Modified template",
            TemplateSource::UploadedTemplate => "Uploaded document",
            TemplateSource::FromScratch => "From scratch",
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::ExistingTemplate => write!(f, "existing_template"),
            TemplateSource::ModifiedTemplate => write!(f, "modified_template"),
            TemplateSource::UploadedTemplate => write!(f, "uploaded_template"),
            TemplateSource::FromScratch => write!(f, "from_scratch"),
        }
    }
}

impl std::str::FromStr for TemplateSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "existing_template" => Ok(TemplateSource::ExistingTemplate),
            "modified_template" => Ok(TemplateSource::ModifiedTemplate),
            "uploaded_template" => Ok(TemplateSource::UploadedTemplate),
            "from_scratch" => Ok(TemplateSource::FromScratch),
            _ => anyhow::bail!(
                "Invalid template source: {s}. Use: existing_template, modified_template, uploaded_template, from_scratch"
            ),
        }
    }
}

/// One of the 12 fixed pathway configurations, crossing mediation type
/// with template source. Assigned once per session.
///
/// The literal form is `<FM|PM|STC>-<EXISTING|MODIFIED|UPLOADED|SCRATCH>`,
/// e.g. `PM-MODIFIED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathwayId {
    #[serde(rename = "FM-EXISTING")]
    FmExisting,
    #[serde(rename = "FM-MODIFIED")]
    FmModified,
    #[serde(rename = "FM-UPLOADED")]
    FmUploaded,
    #[serde(rename = "FM-SCRATCH")]
    FmScratch,
    #[serde(rename = "PM-EXISTING")]
    PmExisting,
    #[serde(rename = "PM-MODIFIED")]
    PmModified,
    #[serde(rename = "PM-UPLOADED")]
    PmUploaded,
    #[serde(rename = "PM-SCRATCH")]
    PmScratch,
    #[serde(rename = "STC-EXISTING")]
    StcExisting,
    #[serde(rename = "STC-MODIFIED")]
    StcModified,
    #[serde(rename = "STC-UPLOADED")]
    StcUploaded,
    #[serde(rename = "STC-SCRATCH")]
    StcScratch,
}

impl PathwayId {
    /// Resolve the pathway for a pair of session-start choices.
    ///
    /// Total and deterministic; every combination maps to exactly one
    /// pathway, so there is no failure mode.
    pub fn resolve(mediation: MediationType, source: TemplateSource) -> PathwayId {
        match (mediation, source) {
            (MediationType::FullMediation, TemplateSource::ExistingTemplate) => {
                PathwayId::FmExisting
            }
            (MediationType::FullMediation, TemplateSource::ModifiedTemplate) => {
                PathwayId::FmModified
            }
            (MediationType::FullMediation, TemplateSource::UploadedTemplate) => {
                PathwayId::FmUploaded
            }
            (MediationType::FullMediation, TemplateSource::FromScratch) => PathwayId::FmScratch,
            (MediationType::PartialMediation, TemplateSource::ExistingTemplate) => {
                PathwayId::PmExisting
            }
            (MediationType::PartialMediation, TemplateSource::ModifiedTemplate) => {
                PathwayId::PmModified
            }
            (MediationType::PartialMediation, TemplateSource::UploadedTemplate) => {
                PathwayId::PmUploaded
            }
            (MediationType::PartialMediation, TemplateSource::FromScratch) => PathwayId::PmScratch,
            (MediationType::StraightToContract, TemplateSource::ExistingTemplate) => {
                PathwayId::StcExisting
            }
            (MediationType::StraightToContract, TemplateSource::ModifiedTemplate) => {
                PathwayId::StcModified
            }
            (MediationType::StraightToContract, TemplateSource::UploadedTemplate) => {
                PathwayId::StcUploaded
            }
            (MediationType::StraightToContract, TemplateSource::FromScratch) => {
                PathwayId::StcScratch
            }
        }
    }

    /// Get all pathways
    pub fn all() -> &'static [PathwayId] {
        &[
            PathwayId::FmExisting,
            PathwayId::FmModified,
            PathwayId::FmUploaded,
            PathwayId::FmScratch,
            PathwayId::PmExisting,
            PathwayId::PmModified,
            PathwayId::PmUploaded,
            PathwayId::PmScratch,
            PathwayId::StcExisting,
            PathwayId::StcModified,
            PathwayId::StcUploaded,
            PathwayId::StcScratch,
        ]
    }

    /// The mediation choice this pathway was resolved from.
    pub fn mediation(&self) -> MediationType {
        self.parts().0
    }

    /// The template-source choice this pathway was resolved from.
    pub fn template_source(&self) -> TemplateSource {
        self.parts().1
    }

    /// Both session-start choices; the exact inverse of [`PathwayId::resolve`].
    pub fn parts(&self) -> (MediationType, TemplateSource) {
        match self {
            PathwayId::FmExisting => (
                MediationType::FullMediation,
                TemplateSource::ExistingTemplate,
            ),
            PathwayId::FmModified => (
                MediationType::FullMediation,
                TemplateSource::ModifiedTemplate,
            ),
            PathwayId::FmUploaded => (
                MediationType::FullMediation,
                TemplateSource::UploadedTemplate,
            ),
            PathwayId::FmScratch => (MediationType::FullMediation, TemplateSource::FromScratch),
            PathwayId::PmExisting => (
                MediationType::PartialMediation,
                TemplateSource::ExistingTemplate,
            ),
            PathwayId::PmModified => (
                MediationType::PartialMediation,
                TemplateSource::ModifiedTemplate,
            ),
            PathwayId::PmUploaded => (
                MediationType::PartialMediation,
                TemplateSource::UploadedTemplate,
            ),
            PathwayId::PmScratch => (MediationType::PartialMediation, TemplateSource::FromScratch),
            PathwayId::StcExisting => (
                MediationType::StraightToContract,
                TemplateSource::ExistingTemplate,
            ),
            PathwayId::StcModified => (
                MediationType::StraightToContract,
                TemplateSource::ModifiedTemplate,
            ),
            PathwayId::StcUploaded => (
                MediationType::StraightToContract,
                TemplateSource::UploadedTemplate,
            ),
            PathwayId::StcScratch => (
                MediationType::StraightToContract,
                TemplateSource::FromScratch,
            ),
        }
    }

    /// The pathway's literal identifier, e.g. `STC-EXISTING`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathwayId::FmExisting => "FM-EXISTING",
            PathwayId::FmModified => "FM-MODIFIED",
            PathwayId::FmUploaded => "FM-UPLOADED",
            PathwayId::FmScratch => "FM-SCRATCH",
            PathwayId::PmExisting => "PM-EXISTING",
            PathwayId::PmModified => "PM-MODIFIED",
            PathwayId::PmUploaded => "PM-UPLOADED",
            PathwayId::PmScratch => "PM-SCRATCH",
            PathwayId::StcExisting => "STC-EXISTING",
            PathwayId::StcModified => "STC-MODIFIED",
            PathwayId::StcUploaded => "STC-UPLOADED",
            PathwayId::StcScratch => "STC-SCRATCH",
        }
    }

    /// Get a display name for this pathway, e.g. "Full mediation · Existing template"
    pub fn display_name(&self) -> String {
        let (mediation, source) = self.parts();
        format!("{} · {}", mediation.display_name(), source.display_name())
    }

    /// True when this pathway has no negotiation phase.
    ///
    /// Used only for UI copy branching, never for state mutation.
    pub fn is_straight_to_contract(&self) -> bool {
        self.mediation() == MediationType::StraightToContract
    }

    /// True for the fastest possible pathway: straight to contract from an
    /// existing template, with nothing to edit, upload or draft.
    ///
    /// Used only for UI copy branching, never for state mutation.
    pub fn is_true_fast_track(&self) -> bool {
        self.is_straight_to_contract() && self.template_source() == TemplateSource::ExistingTemplate
    }
}

impl std::fmt::Display for PathwayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PathwayId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathwayId::all()
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid pathway id: {s}. Expected one of the 12 fixed ids like FM-EXISTING or STC-SCRATCH")
            })
    }
}
