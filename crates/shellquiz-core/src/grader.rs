//! Free-text answer grading.
//!
//! Both the user's input and every accepted answer are whitespace-normalized
//! before an exact, case-sensitive comparison.

use serde::{Deserialize, Serialize};

use crate::model::{Outcome, Question};

/// Trim the ends and collapse internal whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Outcome of grading one answer, with the text needed for feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub outcome: Outcome,
    /// The normalized canonical answer.
    pub canonical: String,
    /// The normalized user input.
    pub given: String,
}

/// Grade `raw_answer` against the accepted answers of `question`.
pub fn grade(question: &Question, raw_answer: &str) -> Grade {
    let given = normalize(raw_answer);
    let accepted: Vec<String> = question.answer.iter().map(|a| normalize(a)).collect();

    let outcome = if accepted.iter().any(|a| *a == given) {
        Outcome::Correct
    } else {
        Outcome::Wrong
    };

    Grade {
        outcome,
        canonical: accepted.into_iter().next().unwrap_or_default(),
        given,
    }
}
