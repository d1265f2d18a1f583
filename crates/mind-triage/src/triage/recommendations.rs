use serde::Serialize;

use super::classifier::RiskAssessment;
use super::domain::{Category, RiskLevel};

/// Subtotal at which a category narrative switches to its severe wording.
pub const SEVERE_NARRATIVE_THRESHOLD: u32 = 6;
/// Subtotal at which a category narrative switches to its moderate wording.
pub const MODERATE_NARRATIVE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Recommendation {
    General {
        level: RiskLevel,
        title: &'static str,
        actions: &'static [&'static str],
        timeframe: &'static str,
    },
    Category {
        category: Category,
        description: &'static str,
    },
}

/// General action plan attached to a risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPlan {
    pub description: &'static str,
    pub actions: &'static [&'static str],
    pub timeframe: &'static str,
}

/// Three-band narrative for a symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryNarrative {
    pub severe: &'static str,
    pub moderate: &'static str,
    pub stable: &'static str,
}

impl CategoryNarrative {
    pub fn select(&self, subtotal: u32) -> &'static str {
        if subtotal >= SEVERE_NARRATIVE_THRESHOLD {
            self.severe
        } else if subtotal >= MODERATE_NARRATIVE_THRESHOLD {
            self.moderate
        } else {
            self.stable
        }
    }
}

const CRITICAL_PLAN: LevelPlan = LevelPlan {
    description: "URGENT CRISIS INTERVENTION NEEDED",
    actions: &[
        "Call 911 or emergency services immediately",
        "Go to the nearest emergency room",
        "Call National Suicide Prevention Lifeline: 988",
        "Text \"HELLO\" to 741741 (Crisis Text Line)",
        "Inform a trusted family member or friend",
        "Remove access to means of self-harm if possible",
    ],
    timeframe: "Immediate (within minutes)",
};

const SEVERE_PLAN: LevelPlan = LevelPlan {
    description: "Professional mental health intervention required",
    actions: &[
        "Schedule urgent appointment with psychiatrist or psychologist",
        "Consider inpatient hospitalization evaluation",
        "Call crisis hotline for immediate support",
        "Develop a safety plan with a mental health professional",
        "Regular therapy sessions (multiple times per week)",
        "Medication evaluation may be necessary",
    ],
    timeframe: "Within 24-48 hours",
};

const MODERATE_PLAN: LevelPlan = LevelPlan {
    description: "Professional mental health evaluation recommended",
    actions: &[
        "Schedule appointment with mental health professional",
        "Begin weekly therapy sessions",
        "Consider medication evaluation",
        "Practice stress management and coping strategies",
        "Increase social support and connection",
        "Maintain regular sleep and exercise habits",
    ],
    timeframe: "Within 1-2 weeks",
};

const MILD_PLAN: LevelPlan = LevelPlan {
    description: "Self-care and preventive mental health support recommended",
    actions: &[
        "Consider speaking with a counselor or therapist",
        "Practice stress management techniques",
        "Maintain healthy lifestyle (sleep, exercise, nutrition)",
        "Build social connections and support network",
        "Use mindfulness or meditation apps",
        "Monitor symptoms for changes",
    ],
    timeframe: "Within 1 month",
};

const LOW_PLAN: LevelPlan = LevelPlan {
    description: "Continue healthy lifestyle habits",
    actions: &[
        "Maintain regular exercise and healthy diet",
        "Stay socially connected",
        "Practice stress management",
        "Get adequate sleep",
        "Monitor mental health regularly",
        "Seek help if symptoms worsen",
    ],
    timeframe: "Ongoing maintenance",
};

pub fn plan_for(level: RiskLevel) -> &'static LevelPlan {
    match level {
        RiskLevel::Critical => &CRITICAL_PLAN,
        RiskLevel::Severe => &SEVERE_PLAN,
        RiskLevel::Moderate => &MODERATE_PLAN,
        RiskLevel::Mild => &MILD_PLAN,
        RiskLevel::Low => &LOW_PLAN,
    }
}

/// `risk` and `functioning` have no narrative and are skipped.
pub fn narrative_for(category: Category) -> Option<&'static CategoryNarrative> {
    let narrative = match category {
        Category::Mood => &CategoryNarrative {
            severe: "Mood symptoms are significant. Antidepressant medication and/or therapy are commonly recommended.",
            moderate: "Monitor mood changes. Consider speaking with a mental health professional.",
            stable: "Mood appears stable. Continue healthy practices.",
        },
        Category::Anxiety => &CategoryNarrative {
            severe: "Anxiety symptoms are elevated. CBT and medication management may be beneficial.",
            moderate: "Some anxiety present. Relaxation techniques and therapy may help.",
            stable: "Anxiety levels are manageable.",
        },
        Category::Sleep => &CategoryNarrative {
            severe: "Sleep disturbances are significant. Sleep hygiene and professional evaluation recommended.",
            moderate: "Sleep quality has declined. Establish consistent sleep schedule and routines.",
            stable: "Sleep appears adequate.",
        },
        Category::Cognitive => &CategoryNarrative {
            severe: "Cognitive difficulties are impacting functioning. Professional assessment needed.",
            moderate: "Mild concentration issues. Break tasks into smaller steps and minimize distractions.",
            stable: "Cognitive function appears intact.",
        },
        Category::Social => &CategoryNarrative {
            severe: "Social withdrawal is significant. Actively increase social engagement and support.",
            moderate: "Some social withdrawal noted. Schedule time with supportive friends and family.",
            stable: "Social engagement is healthy.",
        },
        Category::Physical => &CategoryNarrative {
            severe: "Significant physical symptoms. Medical evaluation recommended to rule out physical causes.",
            moderate: "Some physical symptoms present. Discuss with healthcare provider.",
            stable: "Physical health appears good.",
        },
        Category::Risk | Category::Functioning => return None,
    };
    Some(narrative)
}

/// One general recommendation, then one per narrated category in breakdown order.
pub fn recommend(assessment: &RiskAssessment) -> Vec<Recommendation> {
    let level = assessment.level();
    let plan = plan_for(level);

    let mut recommendations = vec![Recommendation::General {
        level,
        title: plan.description,
        actions: plan.actions,
        timeframe: plan.timeframe,
    }];

    if let Some(breakdown) = assessment.category_breakdown() {
        recommendations.extend(breakdown.iter().filter_map(|(category, subtotal)| {
            narrative_for(category).map(|narrative| Recommendation::Category {
                category,
                description: narrative.select(subtotal),
            })
        }));
    }

    recommendations
}
