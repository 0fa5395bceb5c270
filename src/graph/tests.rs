use crate::models::pathway::PathwayId;
use crate::models::stage::{StageId, STAGE_ORDER};

use super::{
    next_stage, previous_stage, required_stages, requirement, skipped_stages, StageRequirement,
};

#[test]
fn test_requirement_table_covers_every_pair() {
    for pathway in PathwayId::all() {
        for stage in StageId::all() {
            let req = requirement(*pathway, *stage).expect("table should cover every pair");
            assert!(matches!(
                req,
                StageRequirement::Required | StageRequirement::Skipped
            ));
        }
    }
}

#[test]
fn test_every_pathway_requires_the_shared_endpoints() {
    for pathway in PathwayId::all() {
        assert_eq!(
            requirement(*pathway, StageId::MediationType).unwrap(),
            StageRequirement::Required
        );
        assert_eq!(
            requirement(*pathway, StageId::ContractStudio).unwrap(),
            StageRequirement::Required
        );
    }
}

#[test]
fn test_next_stage_never_lands_on_a_skipped_stage() {
    for pathway in PathwayId::all() {
        for stage in StageId::all() {
            if let Some(next) = next_stage(*pathway, *stage).unwrap() {
                assert_eq!(
                    requirement(*pathway, next).unwrap(),
                    StageRequirement::Required,
                    "next_stage({pathway}, {stage}) landed on skipped {next}"
                );
                assert!(next > *stage);
            }
        }
    }
}

#[test]
fn test_previous_stage_never_lands_on_a_skipped_stage() {
    for pathway in PathwayId::all() {
        for stage in StageId::all() {
            if let Some(previous) = previous_stage(*pathway, *stage).unwrap() {
                assert_eq!(
                    requirement(*pathway, previous).unwrap(),
                    StageRequirement::Required,
                    "previous_stage({pathway}, {stage}) landed on skipped {previous}"
                );
                assert!(previous < *stage);
            }
        }
    }
}

#[test]
fn test_stc_existing_required_stages() {
    let required = required_stages(PathwayId::StcExisting).unwrap();
    assert_eq!(
        required,
        vec![
            StageId::MediationType,
            StageId::ContractType,
            StageId::TemplateSource,
            StageId::TemplateSelection,
            StageId::PathwayReview,
            StageId::InviteProviders,
            StageId::ContractStudio,
        ]
    );
}

#[test]
fn test_stc_existing_skipped_stages() {
    let skipped = skipped_stages(PathwayId::StcExisting).unwrap();
    assert_eq!(
        skipped,
        vec![
            StageId::QuickIntake,
            StageId::DocumentUpload,
            StageId::StrategicAssessment,
            StageId::ContractPrep,
        ]
    );
}

#[test]
fn test_fm_uploaded_scans_past_template_selection() {
    let next = next_stage(PathwayId::FmUploaded, StageId::TemplateSource).unwrap();
    assert_eq!(next, Some(StageId::DocumentUpload));
}

#[test]
fn test_stc_existing_scans_past_the_assessment_block() {
    let next = next_stage(PathwayId::StcExisting, StageId::PathwayReview).unwrap();
    assert_eq!(next, Some(StageId::InviteProviders));
}

#[test]
fn test_next_stage_tolerates_starting_on_a_skipped_stage() {
    // Jump navigation can hand the scan any stage, including one the
    // pathway never visits.
    let next = next_stage(PathwayId::StcExisting, StageId::StrategicAssessment).unwrap();
    assert_eq!(next, Some(StageId::InviteProviders));

    let previous = previous_stage(PathwayId::StcExisting, StageId::QuickIntake).unwrap();
    assert_eq!(previous, Some(StageId::ContractType));
}

#[test]
fn test_scan_endpoints_return_none() {
    for pathway in PathwayId::all() {
        assert_eq!(next_stage(*pathway, StageId::ContractStudio).unwrap(), None);
        assert_eq!(
            previous_stage(*pathway, StageId::MediationType).unwrap(),
            None
        );
    }
}

#[test]
fn test_required_and_skipped_partition_the_order() {
    for pathway in PathwayId::all() {
        let required = required_stages(*pathway).unwrap();
        let skipped = skipped_stages(*pathway).unwrap();
        assert_eq!(required.len() + skipped.len(), STAGE_ORDER.len());
        for stage in &required {
            assert!(!skipped.contains(stage));
        }
    }
}
