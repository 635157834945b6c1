//! Subcommand implementations and the setup they share.

use std::path::PathBuf;

use anyhow::{Context, Result};

use shellquiz_core::catalog::Catalog;
use shellquiz_core::config::{load_config_from, QuizConfig};
use shellquiz_core::ledger::Ledger;
use shellquiz_core::session::Trainer;

pub mod categories;
pub mod init;
pub mod play;
pub mod stats;
pub mod turn;
pub mod validate;

/// Global flags that take precedence over the config file.
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub questions: Option<PathBuf>,
    pub stats: Option<PathBuf>,
}

/// Resolve the effective configuration.
pub fn load_settings(overrides: &Overrides) -> Result<QuizConfig> {
    let mut config = load_config_from(overrides.config.as_deref())?;
    if let Some(questions) = &overrides.questions {
        config.questions = questions.clone();
    }
    if let Some(stats) = &overrides.stats {
        config.stats = stats.clone();
    }
    Ok(config)
}

/// Load the catalog; failing here stops the program.
pub fn load_catalog(config: &QuizConfig) -> Result<Catalog> {
    Catalog::load(&config.questions).context("cannot start without a question catalog")
}

/// Load catalog and ledger and build the quiz engine.
pub fn open_trainer(config: &QuizConfig) -> Result<Trainer> {
    let catalog = load_catalog(config)?;
    let ledger = Ledger::open(&config.stats);
    Ok(Trainer::new(catalog, ledger, config.seed))
}
