//! Shared output helpers for the three `--format` modes

use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Pretty-printed JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// CSV with a header row on stdout. Prints nothing for an empty slice.
pub fn print_csv<R: Serialize>(rows: &[R]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Horizontal rule under table headers
pub(crate) fn rule(width: usize) -> String {
    "-".repeat(width)
}
