//! Error type shared by the library modules.

use std::path::PathBuf;

use thiserror::Error;

/// Everything the library can reject. Event generation itself never fails;
/// these errors come from building configuration or writing output.
#[derive(Debug, Error)]
pub enum LeadeaError {
    #[error("category weights must not be empty")]
    EmptyWeights,

    #[error("category weight for '{category}' must be greater than zero")]
    ZeroWeight { category: String },

    #[error("category weights must sum to 100, got {sum}")]
    WeightSum { sum: u64 },

    #[error("invalid hour range {first}..{last} (expected 0 <= first < last <= 24)")]
    HourRange { first: u32, last: u32 },

    #[error("invalid events per day range {min}..={max}")]
    EventsRange { min: u32, max: u32 },

    #[error("events_max {max} exceeds the {slots} time slots in a day")]
    TooManyEvents { max: u32, slots: u32 },

    #[error("{field} must be at least 1")]
    MustBePositive { field: &'static str },

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LeadeaError>;
