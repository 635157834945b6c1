//! The `shellquiz categories` command.

use anyhow::Result;

use shellquiz_core::model::{Filter, ALL};

use super::{load_catalog, load_settings, Overrides};

pub fn execute(overrides: &Overrides) -> Result<()> {
    let config = load_settings(overrides)?;
    let catalog = load_catalog(&config)?;

    println!("Categories:");
    for category in catalog.distinct_categories() {
        let count = catalog.filter(&Filter::new(&category, ALL)).len();
        println!("  {category} ({count} questions)");
    }

    println!("Difficulties:");
    for difficulty in catalog.distinct_difficulties() {
        let count = catalog.filter(&Filter::new(ALL, &difficulty)).len();
        println!("  {difficulty} ({count} questions)");
    }

    Ok(())
}
