//! The `shellquiz stats` command.

use std::io::{self, Write};

use anyhow::Result;
use comfy_table::{Cell, Table};

use shellquiz_core::ledger::Ledger;
use shellquiz_core::selector::weight;

use super::{load_settings, Overrides};

pub fn execute(overrides: &Overrides, json: bool) -> Result<()> {
    let config = load_settings(overrides)?;
    let ledger = Ledger::open(&config.stats);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(ledger.stats())?)?;
    } else {
        write_table(&mut out, &ledger)?;
    }
    Ok(())
}

/// Render the ledger as a table, weakest pairs first.
pub fn write_table<W: Write>(out: &mut W, ledger: &Ledger) -> Result<()> {
    if ledger.is_empty() {
        writeln!(out, "No answers recorded yet.")?;
        return Ok(());
    }

    let mut entries: Vec<_> = ledger.entries().collect();
    entries.sort_by(|(ka, a), (kb, b)| {
        let acc_a = a.accuracy().unwrap_or(0.0);
        let acc_b = b.accuracy().unwrap_or(0.0);
        acc_a.total_cmp(&acc_b).then_with(|| ka.cmp(kb))
    });

    let mut table = Table::new();
    table.set_header(vec!["Pair", "Correct", "Wrong", "Accuracy", "Weight"]);
    for (key, stat) in entries {
        let accuracy = stat
            .accuracy()
            .map(|a| format!("{:.1}%", a * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(key),
            Cell::new(stat.correct),
            Cell::new(stat.wrong),
            Cell::new(accuracy),
            Cell::new(weight(&stat)),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}
