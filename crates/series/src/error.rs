//! Error types for the hydrosos-series crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the hydrosos-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a daily series holds no observations.
    #[error("daily series is empty")]
    Empty,

    /// Returned when the same calendar day appears more than once.
    #[error("duplicate observation for {date}")]
    DuplicateDate {
        /// The day that appeared more than once.
        date: NaiveDate,
    },
}
