use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::domain::{Category, RiskLevel};
use super::scoring::{CategoryScores, ScoreSummary};

/// Risk-category subtotal at which the critical override fires.
pub const CRITICAL_RISK_THRESHOLD: u32 = 2;

const SEVERE_THRESHOLD: Percentage = Percentage::from_tenths(700);
const MODERATE_THRESHOLD: Percentage = Percentage::from_tenths(500);
const MILD_THRESHOLD: Percentage = Percentage::from_tenths(250);

/// Share of the maximum score, held in tenths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage {
    tenths: u32,
}

impl Percentage {
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    /// `part / whole * 100`, rounded half-up to one decimal place.
    pub fn from_ratio(part: u32, whole: u32) -> Option<Self> {
        if whole == 0 {
            return None;
        }
        let part = u64::from(part);
        let whole = u64::from(whole);
        let tenths = (part * 2000 + whole) / (2 * whole);
        u32::try_from(tenths).ok().map(Self::from_tenths)
    }

    pub const fn tenths(self) -> u32 {
        self.tenths
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Fixed crisis response returned whenever the risk override fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalAssessment {
    pub description: &'static str,
    pub recommendation: &'static str,
    pub actions: &'static [&'static str],
}

const CRITICAL_RESPONSE: CriticalAssessment = CriticalAssessment {
    description: "Immediate risk of self-harm or harm to others detected",
    recommendation: "EMERGENCY: Contact emergency services (911) or go to the nearest emergency room immediately",
    actions: &[
        "Call 911",
        "Go to emergency room",
        "Contact crisis hotline: 988",
    ],
};

/// Percentage-tiered outcome for submissions without a risk override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredAssessment {
    level: RiskLevel,
    score: u32,
    max_score: u32,
    percentage: Percentage,
    category_breakdown: CategoryScores,
}

impl TieredAssessment {
    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn percentage(&self) -> Percentage {
        self.percentage
    }

    pub fn category_breakdown(&self) -> &CategoryScores {
        &self.category_breakdown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskAssessment {
    Critical(CriticalAssessment),
    Tiered(TieredAssessment),
}

impl RiskAssessment {
    pub fn level(&self) -> RiskLevel {
        match self {
            Self::Critical(_) => RiskLevel::Critical,
            Self::Tiered(tiered) => tiered.level,
        }
    }

    pub fn severity(&self) -> u8 {
        self.level().severity()
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical(_))
    }

    pub fn category_breakdown(&self) -> Option<&CategoryScores> {
        match self {
            Self::Critical(_) => None,
            Self::Tiered(tiered) => Some(&tiered.category_breakdown),
        }
    }

    pub fn percentage(&self) -> Option<Percentage> {
        match self {
            Self::Critical(_) => None,
            Self::Tiered(tiered) => Some(tiered.percentage),
        }
    }
}

impl Serialize for RiskAssessment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level = self.level();
        match self {
            Self::Critical(critical) => {
                let mut state = serializer.serialize_struct("RiskAssessment", 5)?;
                state.serialize_field("level", &level)?;
                state.serialize_field("severity", &level.severity())?;
                state.serialize_field("description", critical.description)?;
                state.serialize_field("recommendation", critical.recommendation)?;
                state.serialize_field("actions", critical.actions)?;
                state.end()
            }
            Self::Tiered(tiered) => {
                let mut state = serializer.serialize_struct("RiskAssessment", 6)?;
                state.serialize_field("level", &level)?;
                state.serialize_field("severity", &level.severity())?;
                state.serialize_field("score", &tiered.score)?;
                state.serialize_field("maxScore", &tiered.max_score)?;
                state.serialize_field("percentage", &tiered.percentage)?;
                state.serialize_field("categoryBreakdown", &tiered.category_breakdown)?;
                state.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    #[error("cannot classify a submission with a maximum score of zero")]
    EmptyScore,
}

/// Maps a rounded percentage onto the non-critical tiers.
pub fn tier_for(percentage: Percentage) -> RiskLevel {
    if percentage >= SEVERE_THRESHOLD {
        RiskLevel::Severe
    } else if percentage >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else if percentage >= MILD_THRESHOLD {
        RiskLevel::Mild
    } else {
        RiskLevel::Low
    }
}

/// Applies the risk override first, then the percentage tiers.
pub fn classify(scores: &ScoreSummary) -> Result<RiskAssessment, ClassificationError> {
    // An absent risk category counts as zero.
    if scores.category_scores.subtotal(Category::Risk) >= CRITICAL_RISK_THRESHOLD {
        return Ok(RiskAssessment::Critical(CRITICAL_RESPONSE));
    }

    let percentage = Percentage::from_ratio(scores.total_score, scores.max_score)
        .ok_or(ClassificationError::EmptyScore)?;

    Ok(RiskAssessment::Tiered(TieredAssessment {
        level: tier_for(percentage),
        score: scores.total_score,
        max_score: scores.max_score,
        percentage,
        category_breakdown: scores.category_scores.clone(),
    }))
}
