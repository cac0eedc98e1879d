//! Activity commands for fitlog

use serde_json::json;

use super::dashboard::print_dashboard;
use crate::cli::output::rule;
use crate::cli::{open_tracker, print_csv, print_json, today, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::models::ActivityType;
use crate::validation::{resolve_date, ActivityInput};
use crate::views::{self, ActivityRow, HistoryTable};

/// Log a walk or run, then show the activity list and dashboard
pub fn add(
    activity_type: ActivityType,
    distance_km: f64,
    duration_min: f64,
    date: Option<String>,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let input = ActivityInput {
        date: resolve_date(date.as_deref(), today())?,
        activity_type,
        distance_km,
        duration_min,
    };

    let mut tracker = open_tracker(settings)?;
    let record = tracker.submit_activity(&input)?;
    let views = views::render_all(&tracker, today())?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "record": record,
            "activities": views.activities,
            "dashboard": views.dashboard,
        })),
        OutputFormat::Csv => print_csv(&[record]),
        OutputFormat::Table => {
            println!(
                "Logged {} of {} km in {} min: {} cal burned",
                record.activity_type.display_name().to_lowercase(),
                record.distance_km,
                record.duration_min,
                record.calories
            );
            println!();
            print_activity_table(&views.activities);
            println!();
            print_dashboard(&views.dashboard);
            Ok(())
        }
    }
}

/// List activities, newest first
pub fn list(settings: &Settings, format: OutputFormat) -> Result<()> {
    let tracker = open_tracker(settings)?;
    let table = views::activity_list(&tracker.activities()?);

    match format {
        OutputFormat::Json => print_json(&table),
        OutputFormat::Csv => print_csv(&table.rows),
        OutputFormat::Table => {
            print_activity_table(&table);
            Ok(())
        }
    }
}

fn print_activity_table(table: &HistoryTable<ActivityRow>) {
    println!(
        "{:<12} {:<10} {:>10} {:>10} {:>10}",
        "Date", "Type", "Distance", "Duration", "Calories"
    );
    println!("{}", rule(56));

    if let Some(placeholder) = table.placeholder {
        println!("{:^56}", placeholder);
        return;
    }

    for row in &table.rows {
        println!(
            "{:<12} {:<10} {:>10} {:>10} {:>10}",
            row.date,
            row.activity,
            format!("{} km", row.distance_km),
            format!("{} min", row.duration_min),
            row.calories
        );
    }

    println!("\nShowing {} activities", table.rows.len());
}
