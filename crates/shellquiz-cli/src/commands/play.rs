//! The `shellquiz play` command: an interactive terminal session.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use shellquiz_core::model::{Filter, ALL};
use shellquiz_core::session::{Action, RunState, Trainer};

use super::{load_settings, open_trainer, stats, Overrides};

const HELP: &str = "Type your answer and press Enter. Commands: \
:next  :category NAME  :difficulty NAME  :stats  :help  :quit";

pub fn execute(
    overrides: &Overrides,
    category: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    let config = load_settings(overrides)?;
    let mut trainer = open_trainer(&config)?;

    let mut state = RunState::with_filter(config.default_filter());
    if let Some(category) = category {
        state.filter.category = category;
    }
    if let Some(difficulty) = difficulty {
        state.filter.difficulty = difficulty;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut trainer, &mut state, stdin.lock(), stdout.lock())
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Answer(&'a str),
    Next,
    Category(&'a str),
    Difficulty(&'a str),
    Stats,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (trimmed, ""),
    };
    let label = if arg.is_empty() { ALL } else { arg };

    match command {
        ":next" | ":n" => Input::Next,
        ":category" | ":c" => Input::Category(label),
        ":difficulty" | ":d" => Input::Difficulty(label),
        ":stats" => Input::Stats,
        ":help" | ":h" => Input::Help,
        ":quit" | ":q" => Input::Quit,
        _ if command.starts_with(':') => Input::Unknown(command),
        _ => Input::Answer(line),
    }
}

/// Drive the quiz loop over arbitrary input/output streams.
pub fn run<R: BufRead, W: Write>(
    trainer: &mut Trainer,
    state: &mut RunState,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(
        out,
        "shellquiz: {} questions | categories: {} | difficulties: {}",
        trainer.catalog().len(),
        trainer.categories().join(", "),
        trainer.difficulties().join(", "),
    )?;
    writeln!(out, "{HELP}")?;

    trainer.step(state, Action::Show)?;

    let mut line = String::new();
    loop {
        match &state.current {
            Some(q) => writeln!(out, "\n[{} / {}] {}", q.category, q.difficulty, q.question)?,
            None => writeln!(
                out,
                "\nNo questions for selected filters ({} / {}).",
                state.filter.category, state.filter.difficulty
            )?,
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let raw = line.trim_end_matches(['\n', '\r']);

        match parse_input(raw) {
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Unknown(command) => {
                writeln!(out, "Unknown command {command}.")?;
                writeln!(out, "{HELP}")?;
            }
            Input::Stats => stats::write_table(&mut out, trainer.ledger())?,
            Input::Next => {
                trainer.step(state, Action::Next)?;
            }
            Input::Category(label) => {
                let mut filter = state.filter.clone();
                filter.category = label.to_string();
                apply(trainer, state, filter, &mut out)?;
            }
            Input::Difficulty(label) => {
                let mut filter = state.filter.clone();
                filter.difficulty = label.to_string();
                apply(trainer, state, filter, &mut out)?;
            }
            Input::Answer(answer) => {
                if let Some(feedback) = trainer.step(state, Action::Check(answer.to_string()))? {
                    writeln!(out, "{}", feedback.message())?;
                    writeln!(out, "Score: {}/{}", feedback.score, feedback.total)?;
                    trainer.step(state, Action::Next)?;
                }
            }
        }
    }

    writeln!(out, "Final score: {}/{}", state.score, state.total)?;
    Ok(())
}

fn apply<W: Write>(
    trainer: &mut Trainer,
    state: &mut RunState,
    filter: Filter,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Filters: {} / {} ({} questions)",
        filter.category,
        filter.difficulty,
        trainer.pool(&filter).len()
    )?;
    trainer.step(state, Action::Apply(filter))?;
    Ok(())
}
