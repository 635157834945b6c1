//! Quiz session orchestration.
//!
//! [`Trainer`] owns the catalog, the ledger and the random source. Front-ends
//! keep a [`RunState`] per user session and feed it, together with one
//! [`Action`] at a time, through [`Trainer::step`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{EmptyPoolError, LedgerError};
use crate::grader::grade;
use crate::ledger::Ledger;
pub use crate::model::Filter;
use crate::model::{Outcome, Question};
use crate::selector::choose;

/// Per-session state owned by the front-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    #[serde(default)]
    pub filter: Filter,
    /// The question currently on screen.
    #[serde(default)]
    pub current: Option<Question>,
    /// Correct answers this session.
    #[serde(default)]
    pub score: u32,
    /// Graded answers this session.
    #[serde(default)]
    pub total: u32,
}

impl RunState {
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch to a new filter and pick a question from it.
    Apply(Filter),
    /// Grade a raw answer against the current question.
    Check(String),
    /// Skip to another question.
    Next,
    /// Only make sure a question is showing.
    Show,
}

/// What the user sees after an answer is graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub outcome: Outcome,
    /// Normalized canonical answer.
    pub canonical: String,
    /// Normalized user input.
    pub given: String,
    pub score: u32,
    pub total: u32,
}

impl Feedback {
    /// One-line result message.
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Correct => "Correct ✅".to_string(),
            Outcome::Wrong => format!("Wrong ❌ | Correct: {}", self.canonical),
        }
    }
}

/// The adaptive quiz engine.
pub struct Trainer<R = StdRng> {
    catalog: Catalog,
    ledger: Ledger,
    rng: R,
}

impl Trainer<StdRng> {
    /// Build a trainer seeded from the OS, or from `seed` when given.
    pub fn new(catalog: Catalog, ledger: Ledger, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(catalog, ledger, rng)
    }
}

impl<R: Rng> Trainer<R> {
    pub fn with_rng(catalog: Catalog, ledger: Ledger, rng: R) -> Self {
        Self {
            catalog,
            ledger,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.distinct_categories()
    }

    pub fn difficulties(&self) -> Vec<String> {
        self.catalog.distinct_difficulties()
    }

    /// Questions matching `filter`.
    pub fn pool(&self, filter: &Filter) -> Vec<&Question> {
        self.catalog.filter(filter)
    }

    /// Draw a question for `filter`.
    pub fn pick(&mut self, filter: &Filter) -> Result<Question, EmptyPoolError> {
        let pool = self.catalog.filter(filter);
        choose(&pool, &self.ledger, &mut self.rng).cloned()
    }

    /// Apply one action to `state`.
    ///
    /// Returns feedback when an answer was graded. Every action finishes by
    /// putting a question on screen if none is showing and the pool allows.
    pub fn step(
        &mut self,
        state: &mut RunState,
        action: Action,
    ) -> Result<Option<Feedback>, LedgerError> {
        let mut feedback = None;

        match action {
            Action::Apply(filter) => {
                state.filter = filter;
                state.current = self.pick(&state.filter).ok();
            }
            Action::Check(raw) => {
                feedback = self.check(state, &raw)?;
            }
            Action::Next => {
                state.current = self.pick(&state.filter).ok();
            }
            Action::Show => {}
        }

        if state.current.is_none() {
            state.current = self.pick(&state.filter).ok();
        }

        Ok(feedback)
    }

    /// Grade `raw` against the current question and record the result.
    ///
    /// Does nothing when no question is showing.
    pub fn check(
        &mut self,
        state: &mut RunState,
        raw: &str,
    ) -> Result<Option<Feedback>, LedgerError> {
        let Some(question) = state.current.as_ref() else {
            tracing::debug!("answer submitted with no current question, ignoring");
            return Ok(None);
        };

        let grade = grade(question, raw);
        let key = question.stat_key();
        state.total = state.total.saturating_add(1);
        if grade.outcome.is_correct() {
            state.score = state.score.saturating_add(1);
        }
        self.ledger.record(&key, grade.outcome)?;

        Ok(Some(Feedback {
            outcome: grade.outcome,
            canonical: grade.canonical,
            given: grade.given,
            score: state.score,
            total: state.total,
        }))
    }
}
