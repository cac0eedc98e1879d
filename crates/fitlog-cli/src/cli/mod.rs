pub mod commands;
mod output;

pub use output::{print_csv, print_json, OutputFormat};

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::Result;
use crate::storage::{self, KeyValueStore};
use crate::tracker::Tracker;

/// Tracker over whichever backend the settings name
pub type CliTracker = Tracker<Box<dyn KeyValueStore>>;

/// Open the configured store and wrap it in a tracker
pub fn open_tracker(settings: &Settings) -> Result<CliTracker> {
    tracing::debug!(
        data_dir = %settings.data_dir.display(),
        backend = %settings.backend,
        "opening store"
    );
    let backend = storage::open_backend(settings.backend, &settings.data_dir)?;
    Tracker::open(backend)
}

/// Today's local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
