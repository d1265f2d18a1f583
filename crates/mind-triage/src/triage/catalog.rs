use std::sync::OnceLock;

use serde::Serialize;

use super::domain::Category;

/// Highest value on the shared four-point answer scale.
pub const MAX_OPTION_VALUE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub category: Category,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    pub options: [AnswerOption; 4],
}

impl Question {
    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question {0} not found")]
    QuestionNotFound(u32),
}

/// Read-only question set, ordered by id.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|question| question.id);
        questions.dedup_by_key(|question| question.id);
        Self { questions }
    }

    /// The screening questionnaire served by the API, built on first use.
    pub fn standard() -> &'static QuestionCatalog {
        static CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| QuestionCatalog::new(standard_questions()))
    }

    pub fn list_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get_question(&self, id: u32) -> Result<&Question, CatalogError> {
        self.questions
            .binary_search_by_key(&id, |question| question.id)
            .map(|index| &self.questions[index])
            .map_err(|_| CatalogError::QuestionNotFound(id))
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    /// Categories in order of first appearance.
    pub fn list_categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for question in &self.questions {
            if !categories.contains(&question.category) {
                categories.push(question.category);
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

const fn scale(labels: [&'static str; 4]) -> [AnswerOption; 4] {
    [
        AnswerOption {
            value: 0,
            label: labels[0],
        },
        AnswerOption {
            value: 1,
            label: labels[1],
        },
        AnswerOption {
            value: 2,
            label: labels[2],
        },
        AnswerOption {
            value: MAX_OPTION_VALUE,
            label: labels[3],
        },
    ]
}

const FREQUENCY_SCALE: [AnswerOption; 4] = scale([
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
]);

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            category: Category::Mood,
            prompt: "Over the past two weeks, how often have you felt down, depressed, or hopeless?",
            options: FREQUENCY_SCALE,
        },
        Question {
            id: 2,
            category: Category::Mood,
            prompt: "Over the past two weeks, how often have you felt little interest or pleasure in doing things?",
            options: FREQUENCY_SCALE,
        },
        Question {
            id: 3,
            category: Category::Sleep,
            prompt: "Have you experienced significant changes in your sleep patterns?",
            options: scale(["No changes", "Mild changes", "Moderate changes", "Severe changes"]),
        },
        Question {
            id: 4,
            category: Category::Anxiety,
            prompt: "How often do you feel anxious or worried?",
            options: scale(["Rarely", "Sometimes", "Often", "Most of the time"]),
        },
        Question {
            id: 5,
            category: Category::Anxiety,
            prompt: "Do you experience panic attacks or sudden intense fear?",
            options: scale(["Never", "Rarely", "Sometimes", "Frequently"]),
        },
        Question {
            id: 6,
            category: Category::Cognitive,
            prompt: "How often do you have difficulty concentrating or making decisions?",
            options: scale(["Never", "Occasionally", "Frequently", "Always"]),
        },
        Question {
            id: 7,
            category: Category::Social,
            prompt: "Have you withdrawn from social activities or friends?",
            options: scale([
                "No withdrawal",
                "Mild withdrawal",
                "Moderate withdrawal",
                "Significant withdrawal",
            ]),
        },
        Question {
            id: 8,
            category: Category::Physical,
            prompt: "Have you experienced unexplained physical symptoms (fatigue, pain, etc.)?",
            options: scale([
                "No symptoms",
                "Mild symptoms",
                "Moderate symptoms",
                "Severe symptoms",
            ]),
        },
        Question {
            id: 9,
            category: Category::Risk,
            prompt: "Have you had thoughts of harming yourself or others?",
            options: scale(["Never", "Rarely", "Sometimes", "Frequently"]),
        },
        Question {
            id: 10,
            category: Category::Functioning,
            prompt: "How much do these symptoms affect your daily functioning?",
            options: scale([
                "Not at all",
                "Minimal impact",
                "Moderate impact",
                "Severe impact",
            ]),
        },
    ]
}
