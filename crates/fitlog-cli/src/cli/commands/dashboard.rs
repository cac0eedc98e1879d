//! Dashboard command for fitlog

use crate::cli::output::rule;
use crate::cli::{open_tracker, print_csv, print_json, today, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::views::{self, Dashboard};

/// Show current BMI, today's totals and the latest heart rate
pub fn show(settings: &Settings, format: OutputFormat) -> Result<()> {
    let tracker = open_tracker(settings)?;
    let views = views::render_all(&tracker, today())?;

    match format {
        OutputFormat::Json => print_json(&views.dashboard),
        OutputFormat::Csv => print_csv(&[DashboardCsv::from(&views.dashboard)]),
        OutputFormat::Table => {
            print_dashboard(&views.dashboard);
            Ok(())
        }
    }
}

pub(super) fn print_dashboard(dashboard: &Dashboard) {
    println!("Dashboard");
    println!("{}", rule(30));
    println!("Current BMI:   {}", dashboard.bmi_display());
    println!("Today:         {}", dashboard.km_display());
    println!("Burned today:  {}", dashboard.calories_display());
    println!("Heart rate:    {}", dashboard.heart_rate_display());
}

/// Flat row; CSV cannot carry the nested `today` struct
#[derive(serde::Serialize)]
struct DashboardCsv {
    current_bmi: Option<f64>,
    today_km: f64,
    today_calories: u64,
    latest_heart_rate: Option<u32>,
}

impl From<&Dashboard> for DashboardCsv {
    fn from(d: &Dashboard) -> Self {
        Self {
            current_bmi: d.current_bmi,
            today_km: d.today.total_km,
            today_calories: d.today.total_calories,
            latest_heart_rate: d.latest_heart_rate,
        }
    }
}
