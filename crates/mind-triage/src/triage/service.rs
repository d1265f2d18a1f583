use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::QuestionCatalog;
use super::classifier::ClassificationError;
use super::domain::Submission;
use super::report::{Clock, ReportAssembler};
use super::repository::{RepositoryError, ReportId, ReportRepository, StoredReport};
use super::validation::{SubmissionValidator, ValidationError};

/// Service composing the validator, report assembler, and report repository.
pub struct TriageService<R, C> {
    catalog: &'static QuestionCatalog,
    repository: Arc<R>,
    assembler: ReportAssembler<C>,
}

impl<R, C> TriageService<R, C>
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    pub fn new(repository: Arc<R>, clock: C) -> Self {
        Self::with_catalog(QuestionCatalog::standard(), repository, clock)
    }

    pub fn with_catalog(catalog: &'static QuestionCatalog, repository: Arc<R>, clock: C) -> Self {
        Self {
            catalog,
            repository,
            assembler: ReportAssembler::new(clock),
        }
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.catalog
    }

    /// Validate, score, and store a submission, returning the stored report.
    pub fn submit(&self, submission: Submission) -> Result<StoredReport, TriageServiceError> {
        if let Err(error) = SubmissionValidator::new(self.catalog).validate(&submission) {
            warn!(%error, "rejected assessment submission");
            return Err(error.into());
        }

        let Submission {
            mut patient_data,
            answers,
        } = submission;

        if patient_data.id.trim().is_empty() {
            let stamp = self.assembler.clock().now().timestamp_millis();
            patient_data.id = format!("PAT-{stamp}");
        }

        let report = self.assembler.build(&patient_data, &answers)?;
        let record = StoredReport {
            report_id: ReportId::generate(),
            report,
        };

        let stored = self.repository.insert(record)?;
        info!(
            report_id = %stored.report_id,
            level = %stored.report.level(),
            score = stored.report.scores.total_score,
            "triage report generated"
        );
        Ok(stored)
    }

    /// Fetch a previously generated report.
    pub fn report(&self, report_id: &ReportId) -> Result<StoredReport, TriageServiceError> {
        let record = self
            .repository
            .fetch(report_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the triage service.
#[derive(Debug, thiserror::Error)]
pub enum TriageServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
