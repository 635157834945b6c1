//! Question catalog loading, filtering and validation.
//!
//! Catalogs are JSON arrays of question records, or TOML files with a
//! `[[questions]]` table per record. A catalog that cannot be read or parsed
//! is a fatal error.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogLoadError;
use crate::grader::normalize;
use crate::model::{Filter, Question};

/// Intermediate record shared by both catalog formats.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    answer: Vec<String>,
    category: String,
    difficulty: String,
}

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

/// The immutable set of all known questions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Wrap an already-built list of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a catalog file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content, path)?,
            Some("toml") => Self::from_toml_str(&content, path)?,
            _ => return Err(CatalogLoadError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(
            "loaded {} questions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a JSON catalog (useful for testing).
    pub fn from_json_str(content: &str, source_path: &Path) -> Result<Self, CatalogLoadError> {
        let raw: Vec<RawQuestion> =
            serde_json::from_str(content).map_err(|e| CatalogLoadError::Parse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_raw(raw, source_path)
    }

    /// Parse a TOML catalog (useful for testing).
    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self, CatalogLoadError> {
        let parsed: TomlCatalogFile =
            toml::from_str(content).map_err(|e| CatalogLoadError::Parse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_raw(parsed.questions, source_path)
    }

    fn from_raw(raw: Vec<RawQuestion>, source_path: &Path) -> Result<Self, CatalogLoadError> {
        let questions = raw
            .into_iter()
            .enumerate()
            .map(|(index, q)| {
                if q.answer.is_empty() {
                    return Err(CatalogLoadError::NoAnswers {
                        path: source_path.to_path_buf(),
                        index,
                    });
                }
                Ok(Question {
                    question: q.question,
                    answer: q.answer,
                    category: q.category,
                    difficulty: q.difficulty,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sorted, de-duplicated category labels.
    pub fn distinct_categories(&self) -> Vec<String> {
        distinct(self.questions.iter().map(|q| q.category.as_str()))
    }

    /// Sorted, de-duplicated difficulty labels.
    pub fn distinct_difficulties(&self) -> Vec<String> {
        distinct(self.questions.iter().map(|q| q.difficulty.as_str()))
    }

    /// The pool of questions matching `filter`, in catalog order.
    pub fn filter(&self, filter: &Filter) -> Vec<&Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Keep the questions matching `category` and `difficulty` (either may be
/// `"All"`), preserving order.
pub fn filter<'a>(
    questions: &'a [Question],
    category: &str,
    difficulty: &str,
) -> Vec<&'a Question> {
    let filter = Filter::new(category, difficulty);
    questions.iter().filter(|q| filter.matches(q)).collect()
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based position of the offending question.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for issues that do not prevent loading.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_prompts = HashSet::new();

    for (index, q) in catalog.questions().iter().enumerate() {
        let prompt = normalize(&q.question);
        if prompt.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question text is empty".into(),
            });
        } else if !seen_prompts.insert(prompt) {
            warnings.push(ValidationWarning {
                index,
                message: format!("duplicate question: {}", q.question.trim()),
            });
        }

        let mut seen_answers = HashSet::new();
        for answer in &q.answer {
            let normalized = normalize(answer);
            if normalized.is_empty() {
                warnings.push(ValidationWarning {
                    index,
                    message: "accepted answer is empty after normalization".into(),
                });
            } else if !seen_answers.insert(normalized) {
                warnings.push(ValidationWarning {
                    index,
                    message: format!("duplicate accepted answer: {}", answer.trim()),
                });
            }
        }

        if q.category.trim().is_empty() || q.difficulty.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "category or difficulty label is blank".into(),
            });
        }
    }

    warnings
}
