//! The requirement table: for every (pathway, stage) pair, whether the
//! stage is required or skipped.
//!
//! Kept as explicit data rather than derivation rules so a reviewer can
//! read a pathway's row top to bottom and see exactly what a session will
//! walk through. [`crate::validation::validate`] asserts totality: 12 rows,
//! each covering all 11 stages exactly once.

use crate::models::pathway::PathwayId;
use crate::models::stage::StageId;

use super::PathwayRule;
use super::StageRequirement::{Required, Skipped};

pub const PATHWAY_RULES: [PathwayRule; 12] = [
    PathwayRule {
        pathway: PathwayId::FmExisting,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::FmModified,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::FmUploaded,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Required),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::FmScratch,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::PmExisting,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::PmModified,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::PmUploaded,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Required),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::PmScratch,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Required),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Required),
            (StageId::ContractPrep, Required),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::StcExisting,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Skipped),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Skipped),
            (StageId::ContractPrep, Skipped),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::StcModified,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Skipped),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Required),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Skipped),
            (StageId::ContractPrep, Skipped),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::StcUploaded,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Skipped),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Required),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Skipped),
            (StageId::ContractPrep, Skipped),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
    PathwayRule {
        pathway: PathwayId::StcScratch,
        entries: &[
            (StageId::MediationType, Required),
            (StageId::ContractType, Required),
            (StageId::QuickIntake, Skipped),
            (StageId::TemplateSource, Required),
            (StageId::TemplateSelection, Skipped),
            (StageId::DocumentUpload, Skipped),
            (StageId::PathwayReview, Required),
            (StageId::StrategicAssessment, Skipped),
            (StageId::ContractPrep, Skipped),
            (StageId::InviteProviders, Required),
            (StageId::ContractStudio, Required),
        ],
    },
];
