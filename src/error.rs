// Error types
// Library-level failures surfaced to the chart host

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the Gantt core and its loaders
#[derive(Debug, Error)]
pub enum GanttError {
    /// The visible calendar window ends before it starts
    #[error("invalid calendar range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A base event failed validation
    #[error("invalid event '{id}': {reason}")]
    InvalidEvent { id: String, reason: String },

    /// Chart input or change log JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GanttError>;
