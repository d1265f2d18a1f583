use std::collections::BTreeSet;

use super::catalog::QuestionCatalog;
use super::domain::{Category, PatientProfile, Submission};

pub const MIN_PATIENT_AGE: u16 = 1;
pub const MAX_PATIENT_AGE: u16 = 150;

/// Reasons a submission is rejected before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("patient name is required")]
    MissingPatientName,
    #[error("patient age {0} is outside 1-150")]
    InvalidPatientAge(u16),
    #[error("assessment questions must be answered")]
    EmptySubmission,
    #[error("answer references unknown question {0}")]
    UnknownQuestion(u32),
    #[error("question {0} was answered more than once")]
    DuplicateAnswer(u32),
    #[error("question {question_id} belongs to {expected}, not {submitted}")]
    CategoryMismatch {
        question_id: u32,
        expected: Category,
        submitted: Category,
    },
    #[error("answer {value} for question {question_id} is outside 0-3")]
    ValueOutOfRange { question_id: u32, value: u8 },
    #[error("missing answers for questions {}", join_ids(.0))]
    MissingAnswers(Vec<u32>),
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks a submission covers the catalog exactly once with in-range values.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionValidator<'a> {
    catalog: &'a QuestionCatalog,
}

impl Default for SubmissionValidator<'static> {
    fn default() -> Self {
        Self::new(QuestionCatalog::standard())
    }
}

impl<'a> SubmissionValidator<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn validate(&self, submission: &Submission) -> Result<(), ValidationError> {
        validate_patient(&submission.patient_data)?;

        if submission.answers.is_empty() {
            return Err(ValidationError::EmptySubmission);
        }

        let mut answered = BTreeSet::new();
        for answer in &submission.answers {
            let question = self
                .catalog
                .get_question(answer.question_id)
                .map_err(|_| ValidationError::UnknownQuestion(answer.question_id))?;

            if !answered.insert(answer.question_id) {
                return Err(ValidationError::DuplicateAnswer(answer.question_id));
            }

            if question.category != answer.category {
                return Err(ValidationError::CategoryMismatch {
                    question_id: question.id,
                    expected: question.category,
                    submitted: answer.category,
                });
            }

            if !question.accepts(answer.value) {
                return Err(ValidationError::ValueOutOfRange {
                    question_id: question.id,
                    value: answer.value,
                });
            }
        }

        let missing: Vec<u32> = self
            .catalog
            .list_questions()
            .iter()
            .map(|question| question.id)
            .filter(|id| !answered.contains(id))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingAnswers(missing));
        }

        Ok(())
    }
}

fn validate_patient(patient: &PatientProfile) -> Result<(), ValidationError> {
    if patient.name.trim().is_empty() {
        return Err(ValidationError::MissingPatientName);
    }
    if !(MIN_PATIENT_AGE..=MAX_PATIENT_AGE).contains(&patient.age) {
        return Err(ValidationError::InvalidPatientAge(patient.age));
    }
    Ok(())
}
