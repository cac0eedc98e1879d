//! Config command for fitlog

use crate::cli::{print_json, OutputFormat};
use crate::config::{self, Settings};
use crate::error::Result;
use crate::storage::{Collection, CURRENT_WEIGHT_KEY, SQLITE_FILENAME};

/// Show where records are stored
pub fn show(settings: &Settings, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(settings),
        OutputFormat::Csv | OutputFormat::Table => {
            println!("Data directory: {}", settings.data_dir.display());
            println!("Backend:        {}", settings.backend);
            if let Ok(dir) = config::config_dir() {
                println!("Config dir:     {}", dir.display());
            }

            println!("\nEntries:");
            match settings.backend {
                config::StorageBackend::File => {
                    for key in Collection::ALL
                        .iter()
                        .map(|c| c.key())
                        .chain(std::iter::once(CURRENT_WEIGHT_KEY))
                    {
                        println!("  {}", settings.data_dir.join(format!("{}.json", key)).display());
                    }
                }
                config::StorageBackend::Sqlite => {
                    println!("  {} (table kv_store)", settings.data_dir.join(SQLITE_FILENAME).display());
                }
            }
            Ok(())
        }
    }
}
