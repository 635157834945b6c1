//! Error types for the quiz core.
//!
//! Catalog failures are fatal to startup. Ledger *load* failures never show
//! up here because an unreadable ledger is replaced with an empty one; only
//! persistence failures are reported.

use std::path::PathBuf;

use thiserror::Error;

/// The question catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file is missing or unreadable.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog content is not a valid list of questions.
    #[error("failed to parse catalog {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported catalog format: {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A question has an empty `answer` list.
    #[error("question #{index} in {} has no accepted answers", .path.display())]
    NoAnswers { path: PathBuf, index: usize },
}

/// A question was requested from an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no questions match the selected filters")]
pub struct EmptyPoolError;

/// The ledger could not be written to durable storage.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to serialize ledger: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write ledger to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_path() {
        let err = CatalogLoadError::NoAnswers {
            path: PathBuf::from("questions.json"),
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "question #3 in questions.json has no accepted answers"
        );
        assert_eq!(
            EmptyPoolError.to_string(),
            "no questions match the selected filters"
        );
    }
}
