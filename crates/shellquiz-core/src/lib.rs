//! shellquiz-core: Question catalog, performance ledger and adaptive selection.
//!
//! This crate holds everything with actual decision logic: loading the
//! question catalog, keeping the per-(category, difficulty) accuracy ledger,
//! weighting selection toward weak spots, and grading free-text answers.
//! Front-ends drive it through [`session::Trainer`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod grader;
pub mod ledger;
pub mod model;
pub mod selector;
pub mod session;
pub mod traits;
