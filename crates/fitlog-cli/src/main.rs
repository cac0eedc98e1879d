use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fitlog_cli::cli::{commands, OutputFormat};
use fitlog_cli::config::{Settings, StorageBackend};
use fitlog_cli::models::ActivityType;
use fitlog_cli::validation::{BmiInput, Gender};

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(author, version, about = "Personal fitness tracker: BMI, activities and heart rate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Directory holding the record store
    #[arg(long, global = true, env = "FITLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, env = "FITLOG_BACKEND", default_value = "file")]
    backend: StorageBackend,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// BMI commands
    Bmi {
        #[command(subcommand)]
        command: BmiCommands,
    },
    /// Activity commands
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Heart rate commands
    HeartRate {
        #[command(subcommand)]
        command: HeartRateCommands,
    },
    /// Show the dashboard
    Dashboard,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum BmiCommands {
    /// Calculate and record BMI
    Add {
        /// Height in cm (50-250)
        #[arg(long)]
        height: f64,
        /// Weight in kg (20-300)
        #[arg(long)]
        weight: f64,
        /// Age in years (1-120)
        #[arg(long)]
        age: u32,
        /// Gender
        #[arg(long)]
        gender: Option<Gender>,
    },
    /// Show BMI history
    History,
}

#[derive(Subcommand)]
enum ActivityCommands {
    /// Log a walk or run
    Add {
        /// Activity type
        #[arg(short = 't', long = "type")]
        activity_type: ActivityType,
        /// Distance in km
        #[arg(long)]
        distance: f64,
        /// Duration in minutes
        #[arg(long)]
        duration: f64,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List activities
    List,
}

#[derive(Subcommand)]
enum HeartRateCommands {
    /// Record a heart rate reading
    Add {
        /// Beats per minute (30-220)
        #[arg(long)]
        bpm: u32,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the latest reading
    Show,
    /// List all readings
    History,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show resolved settings
    Show,
}

fn main() {
    let cli = Cli::parse();
    fitlog_cli::logging::init(cli.verbose);

    let result = Settings::resolve(cli.data_dir, cli.backend).and_then(|settings| {
        let format = cli.format;
        match cli.command {
            Commands::Bmi { command } => match command {
                BmiCommands::Add {
                    height,
                    weight,
                    age,
                    gender,
                } => {
                    let input = BmiInput {
                        height_cm: height,
                        weight_kg: weight,
                        age,
                        gender,
                    };
                    commands::add_bmi(input, &settings, format)
                }
                BmiCommands::History => commands::bmi_history(&settings, format),
            },
            Commands::Activity { command } => match command {
                ActivityCommands::Add {
                    activity_type,
                    distance,
                    duration,
                    date,
                } => commands::add_activity(
                    activity_type,
                    distance,
                    duration,
                    date,
                    &settings,
                    format,
                ),
                ActivityCommands::List => commands::list_activities(&settings, format),
            },
            Commands::HeartRate { command } => match command {
                HeartRateCommands::Add { bpm, date } => {
                    commands::add_heart_rate(bpm, date, &settings, format)
                }
                HeartRateCommands::Show => commands::show_heart_rate(&settings, format),
                HeartRateCommands::History => commands::heart_rate_history(&settings, format),
            },
            Commands::Dashboard => commands::show_dashboard(&settings, format),
            Commands::Config { command } => match command {
                ConfigCommands::Show => commands::show_config(&settings, format),
            },
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", fitlog_cli::error::format_user_error(&e));
        std::process::exit(1);
    }
}
