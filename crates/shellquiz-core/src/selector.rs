//! Accuracy-weighted question selection.
//!
//! Each question in the pool gets an integer weight from the ledger stat of
//! its (category, difficulty) pair, and one question is drawn with
//! probability proportional to its weight:
//!
//! | stat                         | weight |
//! |------------------------------|--------|
//! | no attempts                  | 3      |
//! | accuracy below 0.6           | 5      |
//! | accuracy 0.6 or above        | 1      |
//!
//! Every weight is non-zero, so mastered pairs still come up occasionally.

use rand::Rng;

use crate::error::EmptyPoolError;
use crate::ledger::Ledger;
use crate::model::{Question, Stat};

/// Weight for pairs that have never been graded.
pub const UNSEEN_WEIGHT: u32 = 3;
/// Weight for pairs with accuracy below [`MASTERY_THRESHOLD`].
pub const STRUGGLING_WEIGHT: u32 = 5;
/// Weight for pairs at or above [`MASTERY_THRESHOLD`].
pub const MASTERED_WEIGHT: u32 = 1;
/// Accuracy at which a pair counts as mastered (inclusive).
pub const MASTERY_THRESHOLD: f64 = 0.6;

/// Selection weight for a stat.
pub fn weight(stat: &Stat) -> u32 {
    match stat.accuracy() {
        None => UNSEEN_WEIGHT,
        Some(accuracy) if accuracy < MASTERY_THRESHOLD => STRUGGLING_WEIGHT,
        Some(_) => MASTERED_WEIGHT,
    }
}

/// Weights for every question in `pool`, in pool order.
pub fn pool_weights(pool: &[&Question], ledger: &Ledger) -> Vec<u32> {
    pool.iter().map(|q| weight(&ledger.stat_for(q))).collect()
}

/// Draw one question from `pool`, weighted by the ledger.
///
/// Equivalent to replicating each question `weight` times and picking
/// uniformly, done as a single draw over the cumulative weights.
pub fn choose<'a, R>(
    pool: &[&'a Question],
    ledger: &Ledger,
    rng: &mut R,
) -> Result<&'a Question, EmptyPoolError>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(EmptyPoolError);
    }

    let weights = pool_weights(pool, ledger);
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let mut ticket = rng.random_range(0..total);

    for (question, &w) in pool.iter().zip(&weights) {
        let w = u64::from(w);
        if ticket < w {
            tracing::debug!(
                "selected {} (weight {w} of {total})",
                question.stat_key()
            );
            return Ok(question);
        }
        ticket -= w;
    }

    // Unreachable while every weight is non-zero; fall back to the last entry.
    pool.last().copied().ok_or(EmptyPoolError)
}
