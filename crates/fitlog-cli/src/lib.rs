pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod tracker;
pub mod validation;
pub mod views;

pub use error::{Result, TrackerError, ValidationError};
pub use tracker::Tracker;
