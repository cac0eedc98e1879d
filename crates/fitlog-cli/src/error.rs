use thiserror::Error;

/// Main error type for fitlog
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a database error from a message
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an invalid parameter error from a message
    pub fn invalid_param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// True when the error is a rejected form input rather than an environment failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A submitted value fell outside its accepted range.
///
/// Raised before anything is computed or written, so a rejected submission
/// never leaves a trace in the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Height must be between 50 and 250 cm (got {0})")]
    HeightOutOfRange(f64),

    #[error("Weight must be between 20 and 300 kg (got {0})")]
    WeightOutOfRange(f64),

    #[error("Age must be between 1 and 120 (got {0})")]
    AgeOutOfRange(u32),

    #[error("Distance must be greater than 0 (got {0})")]
    DistanceNotPositive(f64),

    #[error("Duration must be greater than 0 (got {0})")]
    DurationNotPositive(f64),

    #[error("Activity is too long to estimate calories for (got {0} cal)")]
    CaloriesOutOfRange(f64),

    #[error("Heart rate must be between 30 and 220 bpm (got {0})")]
    HeartRateOutOfRange(u32),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// One-line message printed by the binary for a failed command
pub fn format_user_error(err: &TrackerError) -> String {
    match err {
        TrackerError::Validation(e) => e.to_string(),
        TrackerError::Database(_) => format!(
            "{}. The store may be locked or corrupt; try --backend file or another --data-dir.",
            err
        ),
        other => other.to_string(),
    }
}
