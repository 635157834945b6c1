//! shellquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Filter, ALL};

/// Top-level shellquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question catalog (`.json` or `.toml`).
    #[serde(default = "default_questions")]
    pub questions: PathBuf,
    /// Ledger file.
    #[serde(default = "default_stats")]
    pub stats: PathBuf,
    /// Category selected at startup.
    #[serde(default = "default_all")]
    pub default_category: String,
    /// Difficulty selected at startup.
    #[serde(default = "default_all")]
    pub default_difficulty: String,
    /// Fixed seed for reproducible question order.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_questions() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_stats() -> PathBuf {
    PathBuf::from("stats.json")
}
fn default_all() -> String {
    ALL.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            stats: default_stats(),
            default_category: default_all(),
            default_difficulty: default_all(),
            seed: None,
        }
    }
}

impl QuizConfig {
    /// The filter a fresh session starts with.
    pub fn default_filter(&self) -> Filter {
        Filter::new(&self.default_category, &self.default_difficulty)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `shellquiz.toml` in the current directory
/// 2. `~/.config/shellquiz/config.toml`
///
/// Environment variable overrides: `SHELLQUIZ_QUESTIONS`, `SHELLQUIZ_STATS`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("shellquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(questions) = std::env::var("SHELLQUIZ_QUESTIONS") {
        config.questions = PathBuf::from(questions);
    }
    if let Ok(stats) = std::env::var("SHELLQUIZ_STATS") {
        config.stats = PathBuf::from(stats);
    }

    config.questions = resolve_path(&config.questions);
    config.stats = resolve_path(&config.stats);

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("shellquiz"))
}
