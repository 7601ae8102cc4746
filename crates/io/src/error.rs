//! Error types for hydrosos-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the hydrosos-io crate.
///
/// Malformed input is surfaced here, at the boundary; the statistical
/// core never receives malformed records.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Wraps an underlying filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// File being read or written.
        path: PathBuf,
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a date field cannot be parsed.
    #[error("invalid date '{value}' at {}:{line}", path.display())]
    InvalidDate {
        /// File being read.
        path: PathBuf,
        /// 1-indexed line of the offending record.
        line: usize,
        /// The unparseable text.
        value: String,
    },

    /// Returned when a numeric field cannot be parsed.
    #[error("invalid value '{value}' at {}:{line}", path.display())]
    InvalidValue {
        /// File being read.
        path: PathBuf,
        /// 1-indexed line of the offending record.
        line: usize,
        /// The unparseable text.
        value: String,
    },

    /// Returned when a record has fewer columns than the schema needs.
    #[error("missing column {column} at {}:{line}", path.display())]
    MissingColumn {
        /// File being read.
        path: PathBuf,
        /// 1-indexed line of the offending record.
        line: usize,
        /// 0-indexed column that was absent.
        column: usize,
    },

    /// Returned when a forecast filename does not follow the
    /// `X_<member>_<station>.csv` convention.
    #[error("unrecognized forecast filename: {}", path.display())]
    BadFilename {
        /// The offending path.
        path: PathBuf,
    },

    /// Returned when an ensemble member's date axis differs from the
    /// station's first member.
    #[error("member '{member}' in {} has a different date axis", path.display())]
    DateAxisMismatch {
        /// The offending member identifier.
        member: String,
        /// The member's file.
        path: PathBuf,
    },

    /// Returned when no observed-simulated file matches a station.
    #[error("no observed series found for station '{station}'")]
    MissingObserved {
        /// The station identifier without a matching file.
        station: String,
    },

    /// Wraps an error from the hydrosos-series crate.
    #[error("series error: {reason}")]
    Series {
        /// Description of the underlying series failure.
        reason: String,
    },

    /// Wraps an error from the hydrosos-forecast crate.
    #[error("forecast error: {reason}")]
    Forecast {
        /// Description of the underlying forecast failure.
        reason: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<hydrosos_series::SeriesError> for IoError {
    fn from(e: hydrosos_series::SeriesError) -> Self {
        IoError::Series {
            reason: e.to_string(),
        }
    }
}

impl From<hydrosos_forecast::ForecastError> for IoError {
    fn from(e: hydrosos_forecast::ForecastError) -> Self {
        IoError::Forecast {
            reason: e.to_string(),
        }
    }
}
