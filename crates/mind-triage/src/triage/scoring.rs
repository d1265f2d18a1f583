use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::catalog::MAX_OPTION_VALUE;
use super::domain::{Answer, Category};

/// Per-category subtotals, kept in the order categories were first encountered.
///
/// Categories that never appeared in a submission are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScores {
    entries: Vec<(Category, u32)>,
}

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, value: u32) {
        match self.entries.iter_mut().find(|(seen, _)| *seen == category) {
            Some((_, subtotal)) => *subtotal += value,
            None => self.entries.push((category, value)),
        }
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == category)
            .map(|(_, subtotal)| *subtotal)
    }

    /// Subtotal with absent categories counted as zero.
    pub fn subtotal(&self, category: Category) -> u32 {
        self.get(category).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Category, u32)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (category, value) in iter {
            scores.add(category, value);
        }
        scores
    }
}

impl Serialize for CategoryScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, subtotal) in &self.entries {
            map.serialize_entry(category, subtotal)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub total_score: u32,
    pub category_scores: CategoryScores,
    pub max_score: u32,
}

/// Sums answer values overall and per category.
///
/// Callers reject empty submissions beforehand; an empty slice yields a zero
/// `max_score`, which the classifier refuses.
pub fn score(answers: &[Answer]) -> ScoreSummary {
    let mut category_scores = CategoryScores::new();
    let mut total_score = 0u32;

    for answer in answers {
        let value = u32::from(answer.value);
        total_score += value;
        category_scores.add(answer.category, value);
    }

    ScoreSummary {
        total_score,
        category_scores,
        max_score: answers.len() as u32 * u32::from(MAX_OPTION_VALUE),
    }
}
