//! Persisted per-(category, difficulty) accuracy ledger.
//!
//! The ledger is read once at startup and rewritten in full after every
//! graded answer. A missing or unparseable source yields an empty ledger so
//! corrupt stats never keep anyone from playing; write failures, on the other
//! hand, are surfaced to the caller.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::error::LedgerError;
use crate::model::{Outcome, Question, Stat};
use crate::traits::LedgerStore;

/// Stats keyed by `"{category}_{difficulty}"`.
pub type StatMap = BTreeMap<String, Stat>;

/// The in-memory ledger plus the store it persists to.
pub struct Ledger {
    stats: StatMap,
    store: Box<dyn LedgerStore>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("store", &self.store.describe())
            .field("stats", &self.stats)
            .finish()
    }
}

impl Ledger {
    /// Load the ledger from `store`, falling back to empty on any read or
    /// parse failure.
    pub fn load(store: impl LedgerStore + 'static) -> Self {
        let stats = match store.read() {
            Ok(Some(content)) => match serde_json::from_str::<StatMap>(&content) {
                Ok(stats) => {
                    tracing::debug!(
                        "loaded {} ledger entries from {}",
                        stats.len(),
                        store.describe()
                    );
                    stats
                }
                Err(e) => {
                    tracing::warn!(
                        "ignoring unparseable ledger {}: {}; starting empty",
                        store.describe(),
                        e
                    );
                    StatMap::new()
                }
            },
            Ok(None) => {
                tracing::debug!("no ledger at {}, starting empty", store.describe());
                StatMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    "ignoring unreadable ledger {}: {}; starting empty",
                    store.describe(),
                    e
                );
                StatMap::new()
            }
        };

        Self {
            stats,
            store: Box::new(store),
        }
    }

    /// Load the ledger kept in a JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::load(JsonFileStore::new(path))
    }

    /// An empty ledger that persists to memory only.
    pub fn in_memory() -> Self {
        Self::load(MemoryStore::default())
    }

    /// The stat for `key`, zero-valued when absent.
    pub fn get(&self, key: &str) -> Stat {
        self.stats.get(key).copied().unwrap_or_default()
    }

    /// The stat for the pair `question` belongs to.
    pub fn stat_for(&self, question: &Question) -> Stat {
        self.get(&question.stat_key())
    }

    /// Count one graded answer for `key`, then persist the whole ledger.
    ///
    /// Returns the updated stat. The in-memory counter is bumped even when
    /// persisting fails.
    pub fn record(&mut self, key: &str, outcome: Outcome) -> Result<Stat, LedgerError> {
        let stat = self.stats.entry(key.to_string()).or_default();
        stat.bump(outcome);
        let updated = *stat;
        tracing::debug!(
            "recorded {outcome} for {key} ({}/{})",
            updated.correct,
            updated.attempts()
        );

        self.save()?;
        Ok(updated)
    }

    /// Write every entry to the backing store.
    pub fn save(&self) -> Result<(), LedgerError> {
        let contents = to_pretty_json(&self.stats)?;
        self.store.write(&contents)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Stat)> {
        self.stats.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn stats(&self) -> &StatMap {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json(stats: &StatMap) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stats.serialize(&mut serializer)?;
    Ok(buf)
}

/// Ledger kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &[u8]) -> Result<(), LedgerError> {
        let to_error = |source: std::io::Error| LedgerError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
        std::fs::write(&self.path, contents).map_err(to_error)
    }
}

/// Ledger contents held in memory. Clones share the same buffer, so a test
/// can keep a handle and inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// A store that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// The last persisted contents, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LedgerStore for MemoryStore {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &[u8]) -> Result<(), LedgerError> {
        let text = String::from_utf8_lossy(contents).into_owned();
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text);
        Ok(())
    }
}
