//! The `shellquiz turn` command: one request/response step.
//!
//! The session lives in a JSON file between invocations, the way a web
//! front-end would keep it in a cookie. Each call applies one action and
//! prints everything a page needs to render as JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use shellquiz_core::model::{Filter, Outcome};
use shellquiz_core::session::{Action, Feedback, RunState};

use super::{load_settings, open_trainer, Overrides};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TurnAction {
    Show,
    Apply,
    Check,
    Next,
}

/// The question as shown to the user; accepted answers stay hidden.
#[derive(Debug, Serialize)]
struct QuestionView<'a> {
    question: &'a str,
    category: &'a str,
    difficulty: &'a str,
}

#[derive(Debug, Serialize)]
struct TurnView<'a> {
    question: Option<QuestionView<'a>>,
    result: Option<String>,
    outcome: Option<Outcome>,
    score: u32,
    total: u32,
    categories: Vec<String>,
    difficulties: Vec<String>,
    selected_category: &'a str,
    selected_difficulty: &'a str,
}

pub fn execute(
    overrides: &Overrides,
    state_path: PathBuf,
    action: TurnAction,
    category: Option<String>,
    difficulty: Option<String>,
    answer: Option<String>,
) -> Result<()> {
    let config = load_settings(overrides)?;
    let mut trainer = open_trainer(&config)?;

    let mut state = load_state(&state_path, config.default_filter());
    if let Some(category) = category {
        state.filter.category = category;
    }
    if let Some(difficulty) = difficulty {
        state.filter.difficulty = difficulty;
    }

    let action = match action {
        TurnAction::Show => Action::Show,
        TurnAction::Apply => Action::Apply(state.filter.clone()),
        TurnAction::Check => Action::Check(answer.unwrap_or_default()),
        TurnAction::Next => Action::Next,
    };
    let feedback = trainer.step(&mut state, action)?;

    save_state(&state_path, &state)?;

    let view = TurnView {
        question: state.current.as_ref().map(|q| QuestionView {
            question: &q.question,
            category: &q.category,
            difficulty: &q.difficulty,
        }),
        result: feedback.as_ref().map(Feedback::message),
        outcome: feedback.as_ref().map(|f| f.outcome),
        score: state.score,
        total: state.total,
        categories: trainer.categories(),
        difficulties: trainer.difficulties(),
        selected_category: &state.filter.category,
        selected_difficulty: &state.filter.difficulty,
    };
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

/// Read a saved session; a missing or unreadable file starts a fresh one.
fn load_state(path: &Path, default_filter: Filter) -> RunState {
    let fresh = || RunState::with_filter(default_filter.clone());
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("discarding unreadable session {}: {}", path.display(), e);
            fresh()
        }),
        Err(_) => fresh(),
    }
}

fn save_state(path: &Path, state: &RunState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("failed to serialize session")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write session to {}", path.display()))
}
