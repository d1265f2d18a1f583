use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::triage::catalog::QuestionCatalog;
use crate::triage::domain::{Answer, PatientProfile, Submission};
use crate::triage::report::FixedClock;
use crate::triage::repository::{RepositoryError, ReportId, ReportRepository, StoredReport};
use crate::triage::{triage_router, TriageService};

pub(super) fn completed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn clock() -> FixedClock {
    FixedClock(completed_at())
}

pub(super) fn patient() -> PatientProfile {
    PatientProfile::new("PAT-1001", "Jordan Reyes", 29)
}

/// One answer per catalog question, each with the same value.
pub(super) fn uniform_answers(value: u8) -> Vec<Answer> {
    QuestionCatalog::standard()
        .list_questions()
        .iter()
        .map(|question| Answer::new(question.id, question.category, value))
        .collect()
}

/// Uniform answers with selected questions overridden.
pub(super) fn answers_with(value: u8, overrides: &[(u32, u8)]) -> Vec<Answer> {
    uniform_answers(value)
        .into_iter()
        .map(|mut answer| {
            if let Some((_, value)) = overrides.iter().find(|(id, _)| *id == answer.question_id) {
                answer.value = *value;
            }
            answer
        })
        .collect()
}

pub(super) fn submission(answers: Vec<Answer>) -> Submission {
    Submission {
        patient_data: patient(),
        answers,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ReportId, StoredReport>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("mutex poisoned").len()
    }
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self.records.lock().expect("mutex poisoned");
        if guard.contains_key(&record.report_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.report_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self.records.lock().expect("mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: StoredReport) -> Result<StoredReport, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    TriageService<MemoryRepository, FixedClock>,
    MemoryRepository,
) {
    let repository = MemoryRepository::default();
    let service = TriageService::new(Arc::new(repository.clone()), clock());
    (service, repository)
}

pub(super) fn router_with_service(
    service: TriageService<MemoryRepository, FixedClock>,
) -> axum::Router {
    triage_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
