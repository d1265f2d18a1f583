use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Symptom domain grouping one or more catalog questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mood,
    Anxiety,
    Sleep,
    Cognitive,
    Social,
    Physical,
    Risk,
    Functioning,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Mood,
            Self::Anxiety,
            Self::Sleep,
            Self::Cognitive,
            Self::Social,
            Self::Physical,
            Self::Risk,
            Self::Functioning,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Anxiety => "anxiety",
            Self::Sleep => "sleep",
            Self::Cognitive => "cognitive",
            Self::Social => "social",
            Self::Physical => "physical",
            Self::Risk => "risk",
            Self::Functioning => "functioning",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Anxiety => "Anxiety",
            Self::Sleep => "Sleep",
            Self::Cognitive => "Cognitive",
            Self::Social => "Social",
            Self::Physical => "Physical",
            Self::Risk => "Risk",
            Self::Functioning => "Functioning",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Risk tier, ascending in severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Low,
            Self::Mild,
            Self::Moderate,
            Self::Severe,
            Self::Critical,
        ]
    }

    pub const fn severity(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
            Self::Critical => 4,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Mild => "MILD",
            Self::Moderate => "MODERATE",
            Self::Severe => "SEVERE",
            Self::Critical => "CRITICAL",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One answered question as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub category: Category,
    pub value: u8,
}

impl Answer {
    pub const fn new(question_id: u32, category: Category, value: u8) -> Self {
        Self {
            question_id,
            category,
            value,
        }
    }
}

/// Identity block stamped onto every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_age")]
    pub age: u16,
}

impl PatientProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u16) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

/// Payload accepted by the submit endpoint and the triage service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub patient_data: PatientProfile,
    pub answers: Vec<Answer>,
}

// Form clients post the age field as text.
fn deserialize_age<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeInput {
        Number(u64),
        Text(String),
    }

    let raw = match AgeInput::deserialize(deserializer)? {
        AgeInput::Number(value) => value,
        AgeInput::Text(text) => text.trim().parse::<u64>().map_err(|err| {
            serde::de::Error::custom(format!("failed to parse age '{text}' ({err})"))
        })?,
    };

    u16::try_from(raw).map_err(|_| serde::de::Error::custom(format!("age {raw} is out of range")))
}
