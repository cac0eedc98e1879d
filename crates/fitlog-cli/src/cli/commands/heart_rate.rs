//! Heart-rate commands for fitlog

use serde_json::json;

use super::dashboard::print_dashboard;
use crate::cli::output::rule;
use crate::cli::{open_tracker, print_csv, print_json, today, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::validation::{resolve_date, HeartRateInput};
use crate::views::{self, HeartRateInfo};

/// Record a reading, then show the latest reading and dashboard
pub fn add(
    bpm: u32,
    date: Option<String>,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let input = HeartRateInput {
        date: resolve_date(date.as_deref(), today())?,
        heart_rate_bpm: bpm,
    };

    let mut tracker = open_tracker(settings)?;
    let record = tracker.submit_heart_rate(&input)?;
    let views = views::render_all(&tracker, today())?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "record": record,
            "heart_rate": views.heart_rate,
            "dashboard": views.dashboard,
        })),
        OutputFormat::Csv => print_csv(&[record]),
        OutputFormat::Table => {
            print_info(views.heart_rate.as_ref());
            println!();
            print_dashboard(&views.dashboard);
            Ok(())
        }
    }
}

/// Show the latest reading with its comment
pub fn show(settings: &Settings, format: OutputFormat) -> Result<()> {
    let tracker = open_tracker(settings)?;
    let info = views::heart_rate_info(&tracker.heart_rates()?);

    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Csv => print_csv(info.as_slice()),
        OutputFormat::Table => {
            print_info(info.as_ref());
            Ok(())
        }
    }
}

/// List every reading, most recently entered first
pub fn history(settings: &Settings, format: OutputFormat) -> Result<()> {
    let tracker = open_tracker(settings)?;
    let table = views::heart_rate_history(&tracker.heart_rates()?);

    match format {
        OutputFormat::Json => print_json(&table),
        OutputFormat::Csv => print_csv(&table.rows),
        OutputFormat::Table => {
            println!("{:<12} {:>5}  {}", "Date", "BPM", "Comment");
            println!("{}", rule(60));
            if let Some(placeholder) = table.placeholder {
                println!("{:^60}", placeholder);
                return Ok(());
            }
            for row in &table.rows {
                println!("{:<12} {:>5}  {}", row.date, row.bpm, row.comment);
            }
            println!("\n{} reading(s)", table.rows.len());
            Ok(())
        }
    }
}

fn print_info(info: Option<&HeartRateInfo>) {
    match info {
        Some(info) => {
            println!("Latest heart rate: {} bpm ({})", info.bpm, info.date);
            println!("{}", info.comment);
        }
        None => println!("No heart rate readings yet."),
    }
}
