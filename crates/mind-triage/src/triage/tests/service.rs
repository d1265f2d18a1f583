use super::common::*;
use crate::triage::domain::RiskLevel;
use crate::triage::repository::{RepositoryError, ReportId};
use crate::triage::validation::ValidationError;
use crate::triage::{TriageService, TriageServiceError};
use std::sync::Arc;

#[test]
fn submit_stores_report_under_generated_id() {
    let (service, repository) = build_service();

    let stored = service
        .submit(submission(uniform_answers(1)))
        .expect("submission succeeds");

    assert_eq!(repository.len(), 1);
    assert!(!stored.report_id.as_str().is_empty());
    assert_eq!(stored.report.level(), RiskLevel::Mild);

    let fetched = service.report(&stored.report_id).expect("report stored");
    assert_eq!(fetched, stored);
}

#[test]
fn identical_submissions_differ_only_by_report_id() {
    let (service, repository) = build_service();

    let first = service
        .submit(submission(uniform_answers(2)))
        .expect("first submission");
    let second = service
        .submit(submission(uniform_answers(2)))
        .expect("second submission");

    assert_ne!(first.report_id, second.report_id);
    assert_eq!(first.report, second.report);
    assert_eq!(repository.len(), 2);
}

#[test]
fn submit_rejects_invalid_input_before_scoring() {
    let (service, repository) = build_service();

    match service.submit(submission(Vec::new())) {
        Err(TriageServiceError::Validation(ValidationError::EmptySubmission)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(repository.len(), 0, "no partial report is stored");
}

#[test]
fn submit_assigns_patient_id_when_blank() {
    let (service, _) = build_service();
    let mut request = submission(uniform_answers(0));
    request.patient_data.id = String::new();

    let stored = service.submit(request).expect("submission succeeds");

    assert_eq!(
        stored.report.patient_id,
        format!("PAT-{}", completed_at().timestamp_millis())
    );
}

#[test]
fn report_propagates_not_found() {
    let (service, _) = build_service();

    match service.report(&ReportId("missing".to_string())) {
        Err(TriageServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn submit_surfaces_repository_failures() {
    let service = TriageService::new(Arc::new(UnavailableRepository), clock());

    match service.submit(submission(uniform_answers(1))) {
        Err(TriageServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "offline");
        }
        other => panic!("expected repository error, got {other:?}"),
    }
}
