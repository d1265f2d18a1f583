use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classifier::{classify, ClassificationError, RiskAssessment};
use super::domain::{Answer, PatientProfile, RiskLevel};
use super::recommendations::{recommend, Recommendation};
use super::scoring::{score, ScoreSummary};

/// Source of the `completedAt` timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextStep {
    pub step: u8,
    pub action: &'static str,
}

const CRITICAL_STEPS: &[&str] = &[
    "Seek emergency care immediately",
    "Contact emergency services or go to ER",
    "Inform family members",
    "Follow hospital treatment plan",
];

const SEVERE_STEPS: &[&str] = &[
    "Contact mental health professional",
    "Schedule urgent appointment",
    "Begin treatment (therapy/medication)",
    "Establish support network",
    "Follow treatment plan consistently",
];

const MODERATE_STEPS: &[&str] = &[
    "Schedule therapy appointment",
    "Begin regular sessions",
    "Implement coping strategies",
    "Monitor progress",
];

const MILD_STEPS: &[&str] = &[
    "Maintain healthy habits",
    "Consider preventive counseling",
    "Monitor mental health",
    "Seek help if symptoms worsen",
];

const LOW_STEPS: &[&str] = &[
    "Continue healthy lifestyle",
    "Regular self-care",
    "Periodic check-ins",
];

/// Numbered checklist for a tier, starting at step 1.
pub fn next_steps(level: RiskLevel) -> Vec<NextStep> {
    let actions = match level {
        RiskLevel::Critical => CRITICAL_STEPS,
        RiskLevel::Severe => SEVERE_STEPS,
        RiskLevel::Moderate => MODERATE_STEPS,
        RiskLevel::Mild => MILD_STEPS,
        RiskLevel::Low => LOW_STEPS,
    };

    actions
        .iter()
        .zip(1u8..)
        .map(|(&action, step)| NextStep { step, action })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    pub patient_id: String,
    pub patient_name: String,
    pub patient_age: u16,
    pub completed_at: DateTime<Utc>,
    pub scores: ScoreSummary,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<NextStep>,
}

impl TriageReport {
    pub fn level(&self) -> RiskLevel {
        self.risk_assessment.level()
    }
}

/// Runs scorer, classifier and recommendation generator for one submission.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler<C> {
    clock: C,
}

impl<C: Clock> ReportAssembler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn build(
        &self,
        patient: &PatientProfile,
        answers: &[Answer],
    ) -> Result<TriageReport, ClassificationError> {
        let scores = score(answers);
        let risk_assessment = classify(&scores)?;
        let recommendations = recommend(&risk_assessment);
        let next_steps = next_steps(risk_assessment.level());

        Ok(TriageReport {
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            patient_age: patient.age,
            completed_at: self.clock.now(),
            scores,
            risk_assessment,
            recommendations,
            next_steps,
        })
    }
}
