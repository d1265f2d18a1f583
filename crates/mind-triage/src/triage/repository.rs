use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::report::TriageReport;

/// Opaque handle under which a report is stored for later retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl ReportId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub report_id: ReportId,
    pub report: TriageReport,
}

/// Storage abstraction for generated reports; the service crate supplies an in-memory table.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report already exists")]
    Conflict,
    #[error("report not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
