use metrics_exporter_prometheus::PrometheusHandle;
use mind_triage::triage::{
    Answer, QuestionCatalog, RepositoryError, ReportId, ReportRepository, StoredReport,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide report table guarded by a mutex.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<ReportId, StoredReport>>>,
}

impl InMemoryReportRepository {
    pub(crate) fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("report table poisoned".to_string()))?;
        if guard.contains_key(&record.report_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.report_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("report table poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}

/// Pairs positional values with catalog questions, taking the category from the catalog.
pub(crate) fn answers_from_values(catalog: &QuestionCatalog, values: &[u8]) -> Vec<Answer> {
    catalog
        .list_questions()
        .iter()
        .zip(values)
        .map(|(question, value)| Answer::new(question.id, question.category, *value))
        .collect()
}
