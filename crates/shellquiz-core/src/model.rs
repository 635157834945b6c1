//! Core data model types for shellquiz.
//!
//! Questions are immutable records loaded from the catalog; stats are the
//! mutable per-(category, difficulty) counters kept by the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter value that matches every category or difficulty.
pub const ALL: &str = "All";

/// A single quiz question.
///
/// Identity is structural: two questions with the same fields are
/// indistinguishable, and the catalog may contain such duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown to the user.
    pub question: String,
    /// Accepted answers. The first one is canonical.
    pub answer: Vec<String>,
    /// Category label (e.g. "Networking").
    pub category: String,
    /// Difficulty label (e.g. "Easy").
    pub difficulty: String,
}

impl Question {
    /// Ledger key for this question's (category, difficulty) pair.
    pub fn stat_key(&self) -> String {
        stat_key(&self.category, &self.difficulty)
    }

    /// The answer shown when the user gets this question wrong.
    pub fn canonical_answer(&self) -> &str {
        self.answer.first().map(String::as_str).unwrap_or_default()
    }
}

/// Build the ledger key for a (category, difficulty) pair.
pub fn stat_key(category: &str, difficulty: &str) -> String {
    format!("{category}_{difficulty}")
}

/// Cumulative grading counters for one (category, difficulty) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub correct: u64,
    pub wrong: u64,
}

impl Stat {
    pub const fn new(correct: u64, wrong: u64) -> Self {
        Self { correct, wrong }
    }

    /// Total graded answers.
    pub fn attempts(&self) -> u64 {
        self.correct.saturating_add(self.wrong)
    }

    /// Fraction of correct answers, or `None` before the first attempt.
    pub fn accuracy(&self) -> Option<f64> {
        match self.attempts() {
            0 => None,
            n => Some(self.correct as f64 / n as f64),
        }
    }

    /// Bump the counter matching `outcome`.
    pub fn bump(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct = self.correct.saturating_add(1),
            Outcome::Wrong => self.wrong = self.wrong.saturating_add(1),
        }
    }
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Wrong,
}

impl Outcome {
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Wrong => write!(f, "wrong"),
        }
    }
}

/// Category/difficulty selection. Either side may be [`ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default = "default_all")]
    pub category: String,
    #[serde(default = "default_all")]
    pub difficulty: String,
}

impl Filter {
    pub fn new(category: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Whether `question` passes this filter.
    pub fn matches(&self, question: &Question) -> bool {
        (self.category == ALL || question.category == self.category)
            && (self.difficulty == ALL || question.difficulty == self.difficulty)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(ALL, ALL)
    }
}

fn default_all() -> String {
    ALL.to_string()
}
