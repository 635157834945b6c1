//! The `shellquiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("shellquiz.toml", SAMPLE_CONFIG)?;
    write_if_missing("questions.json", SAMPLE_CATALOG)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: shellquiz validate");
    println!("  3. Run: shellquiz play");

    Ok(())
}

fn write_if_missing(path: &str, contents: &str) -> Result<()> {
    if Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, contents)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# shellquiz configuration

questions = "questions.json"
stats = "stats.json"

default_category = "All"
default_difficulty = "All"

# Uncomment for a reproducible question order.
# seed = 42
"#;

const SAMPLE_CATALOG: &str = include_str!("../../../../catalogs/linux-basics.json");
