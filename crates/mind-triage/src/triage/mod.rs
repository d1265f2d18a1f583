//! Questionnaire scoring, risk classification, and report assembly.
//!
//! The engine (catalog, scoring, classifier, recommendations, report) is pure apart
//! from the injected clock. Validation, storage and routing sit around it so the
//! service binary only has to pick a repository and a clock.

pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod recommendations;
pub mod report;
pub mod repository;
pub mod resources;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerOption, CatalogError, Question, QuestionCatalog, MAX_OPTION_VALUE};
pub use classifier::{
    classify, tier_for, ClassificationError, CriticalAssessment, Percentage, RiskAssessment,
    TieredAssessment,
};
pub use domain::{Answer, Category, PatientProfile, RiskLevel, Submission};
pub use recommendations::{recommend, Recommendation};
pub use report::{
    next_steps, Clock, FixedClock, NextStep, ReportAssembler, SystemClock, TriageReport,
};
pub use repository::{RepositoryError, ReportId, ReportRepository, StoredReport};
pub use resources::{emergency_resources, resources_for, EmergencyResources, LevelResources};
pub use router::triage_router;
pub use scoring::{score, CategoryScores, ScoreSummary};
pub use service::{TriageService, TriageServiceError};
pub use validation::{SubmissionValidator, ValidationError};
