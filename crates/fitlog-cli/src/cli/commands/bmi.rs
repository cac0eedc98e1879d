//! BMI commands for fitlog

use serde_json::json;

use super::dashboard::print_dashboard;
use crate::cli::output::rule;
use crate::cli::{open_tracker, print_csv, print_json, today, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::validation::BmiInput;
use crate::views::{self, BmiHistoryRow, BmiResult, HistoryTable};

/// Record a BMI measurement, then show the result, history and dashboard
pub fn add(input: BmiInput, settings: &Settings, format: OutputFormat) -> Result<()> {
    let mut tracker = open_tracker(settings)?;
    let record = tracker.submit_bmi(&input)?;
    let result = views::bmi_result(&record);
    let views = views::render_all(&tracker, today())?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "record": record,
            "result": result,
            "bmi_history": views.bmi_history,
            "dashboard": views.dashboard,
        })),
        OutputFormat::Csv => print_csv(&[record]),
        OutputFormat::Table => {
            print_result(&result);
            println!();
            print_history_table(&views.bmi_history);
            println!();
            print_dashboard(&views.dashboard);
            Ok(())
        }
    }
}

/// Show BMI history, newest first
pub fn history(settings: &Settings, format: OutputFormat) -> Result<()> {
    let tracker = open_tracker(settings)?;
    let table = views::bmi_history(&tracker.bmi_history()?);

    match format {
        OutputFormat::Json => print_json(&table),
        OutputFormat::Csv => print_csv(&table.rows),
        OutputFormat::Table => {
            print_history_table(&table);
            Ok(())
        }
    }
}

fn print_result(result: &BmiResult) {
    println!("Your BMI: {}", result.bmi);
    println!("Category: {} {}", result.marker, result.category);
    println!("{}", result.advice);
}

fn print_history_table(table: &HistoryTable<BmiHistoryRow>) {
    println!(
        "{:<17} {:>11} {:>11} {:>6}  {:<12}",
        "Date", "Height (cm)", "Weight (kg)", "BMI", "Category"
    );
    println!("{}", rule(62));

    if let Some(placeholder) = table.placeholder {
        println!("{:^62}", placeholder);
        return;
    }

    for row in &table.rows {
        println!(
            "{:<17} {:>11} {:>11} {:>6}  {:<12}",
            row.recorded_at, row.height_cm, row.weight_kg, row.bmi, row.category
        );
    }

    println!("\n{} measurement(s)", table.rows.len());
}
