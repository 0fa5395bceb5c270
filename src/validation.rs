//! Requirement-table validation.
//!
//! The 12×11 table in [`crate::graph::requirements`] is hand-written data.
//! Hosts call [`validate`] once at startup so a hole in the table surfaces
//! as a named configuration error instead of a mid-session lookup miss.

use crate::graph::requirements::PATHWAY_RULES;
use crate::graph::{PathwayRule, StageRequirement};
use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, STAGE_ORDER};

/// A single defect found in the requirement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub pathway: Option<PathwayId>,
}

/// Validate the shipped requirement table.
pub fn validate() -> Result<(), Vec<ValidationError>> {
    validate_rules(&PATHWAY_RULES)
}

/// Validate a requirement table for totality.
///
/// Checks:
/// - every pathway has exactly one row
/// - every row covers all 11 stages exactly once
/// - no row uses the reserved `Conditional` kind
/// - every row requires the shared endpoints (mediation_type and
///   contract_studio)
pub fn validate_rules(rules: &[PathwayRule]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for pathway in PathwayId::all() {
        let rows = rules.iter().filter(|rule| rule.pathway == *pathway).count();
        if rows == 0 {
            errors.push(ValidationError {
                message: "No requirement row for pathway".to_string(),
                pathway: Some(*pathway),
            });
        } else if rows > 1 {
            errors.push(ValidationError {
                message: format!("Duplicate requirement rows ({rows}) for pathway"),
                pathway: Some(*pathway),
            });
        }
    }

    for rule in rules {
        for stage in STAGE_ORDER {
            let entries = rule
                .entries
                .iter()
                .filter(|(entry_stage, _)| *entry_stage == stage)
                .count();
            if entries == 0 {
                errors.push(ValidationError {
                    message: format!("Missing requirement for stage '{stage}'"),
                    pathway: Some(rule.pathway),
                });
            } else if entries > 1 {
                errors.push(ValidationError {
                    message: format!("Duplicate requirement entries for stage '{stage}'"),
                    pathway: Some(rule.pathway),
                });
            }
        }

        for (stage, requirement) in rule.entries {
            if *requirement == StageRequirement::Conditional {
                errors.push(ValidationError {
                    message: format!(
                        "Stage '{stage}' uses the reserved conditional requirement kind"
                    ),
                    pathway: Some(rule.pathway),
                });
            }
        }

        for anchor in [StageId::MediationType, StageId::ContractStudio] {
            let required = rule
                .entries
                .iter()
                .any(|(stage, req)| *stage == anchor && *req == StageRequirement::Required);
            if !required {
                errors.push(ValidationError {
                    message: format!("Stage '{anchor}' must be required in every pathway"),
                    pathway: Some(rule.pathway),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_is_total() {
        assert!(validate().is_ok());
    }

    #[test]
    fn test_missing_row_is_reported() {
        let rules: Vec<PathwayRule> = PATHWAY_RULES
            .iter()
            .filter(|rule| rule.pathway != PathwayId::PmUploaded)
            .copied()
            .collect();

        let errors = validate_rules(&rules).unwrap_err();
        assert!(errors.iter().any(|e| {
            e.pathway == Some(PathwayId::PmUploaded) && e.message.contains("No requirement row")
        }));
    }

    #[test]
    fn test_missing_stage_entry_is_reported() {
        let mut rules: Vec<PathwayRule> = PATHWAY_RULES.to_vec();
        rules[0] = PathwayRule {
            pathway: rules[0].pathway,
            entries: &[(StageId::MediationType, StageRequirement::Required)],
        };

        let errors = validate_rules(&rules).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("Missing requirement for stage 'contract_type'")));
    }

    #[test]
    fn test_duplicate_stage_entry_is_reported() {
        let mut rules: Vec<PathwayRule> = PATHWAY_RULES.to_vec();
        rules[0] = PathwayRule {
            pathway: rules[0].pathway,
            entries: &[
                (StageId::MediationType, StageRequirement::Required),
                (StageId::MediationType, StageRequirement::Required),
            ],
        };

        let errors = validate_rules(&rules).unwrap_err();
        assert!(errors.iter().any(|e| e
            .message
            .contains("Duplicate requirement entries for stage 'mediation_type'")));
    }

    #[test]
    fn test_conditional_use_is_reported() {
        let mut rules: Vec<PathwayRule> = PATHWAY_RULES.to_vec();
        rules[0] = PathwayRule {
            pathway: rules[0].pathway,
            entries: &[
                (StageId::MediationType, StageRequirement::Required),
                (StageId::ContractType, StageRequirement::Conditional),
                (StageId::QuickIntake, StageRequirement::Required),
                (StageId::TemplateSource, StageRequirement::Required),
                (StageId::TemplateSelection, StageRequirement::Required),
                (StageId::DocumentUpload, StageRequirement::Skipped),
                (StageId::PathwayReview, StageRequirement::Required),
                (StageId::StrategicAssessment, StageRequirement::Required),
                (StageId::ContractPrep, StageRequirement::Required),
                (StageId::InviteProviders, StageRequirement::Required),
                (StageId::ContractStudio, StageRequirement::Required),
            ],
        };

        let errors = validate_rules(&rules).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("reserved conditional requirement kind")));
    }

    #[test]
    fn test_skipped_anchor_is_reported() {
        let mut rules: Vec<PathwayRule> = PATHWAY_RULES.to_vec();
        rules[0] = PathwayRule {
            pathway: rules[0].pathway,
            entries: &[
                (StageId::MediationType, StageRequirement::Skipped),
                (StageId::ContractType, StageRequirement::Required),
                (StageId::QuickIntake, StageRequirement::Required),
                (StageId::TemplateSource, StageRequirement::Required),
                (StageId::TemplateSelection, StageRequirement::Required),
                (StageId::DocumentUpload, StageRequirement::Skipped),
                (StageId::PathwayReview, StageRequirement::Required),
                (StageId::StrategicAssessment, StageRequirement::Required),
                (StageId::ContractPrep, StageRequirement::Required),
                (StageId::InviteProviders, StageRequirement::Required),
                (StageId::ContractStudio, StageRequirement::Required),
            ],
        };

        let errors = validate_rules(&rules).unwrap_err();
        assert!(errors.iter().any(|e| e
            .message
            .contains("'mediation_type' must be required in every pathway")));
    }
}
