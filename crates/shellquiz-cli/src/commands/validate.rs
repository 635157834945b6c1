//! The `shellquiz validate` command.

use anyhow::Result;

use shellquiz_core::catalog::validate_catalog;

use super::{load_catalog, load_settings, Overrides};

pub fn execute(overrides: &Overrides) -> Result<()> {
    let config = load_settings(overrides)?;
    let catalog = load_catalog(&config)?;

    println!(
        "Catalog: {} ({} questions, {} categories, {} difficulties)",
        config.questions.display(),
        catalog.len(),
        catalog.distinct_categories().len(),
        catalog.distinct_difficulties().len(),
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        println!("  [#{}] WARNING: {}", w.index, w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
