//! Error types for the hydrosos-climatology crate.

/// Error type for all fallible operations in the hydrosos-climatology
/// crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClimatologyError {
    /// Returned when the reference period is not a valid year range.
    #[error("invalid reference period: start {start} must be before end {end}")]
    InvalidReferencePeriod {
        /// First year of the rejected range.
        start: i32,
        /// Last year of the rejected range.
        end: i32,
    },

    /// Returned when a calendar month has no usable data inside the
    /// reference window. The whole station is skipped; there is no
    /// silent default.
    #[error("month {month} has no data in the reference period")]
    MissingReferenceMonth {
        /// The 1-indexed calendar month without reference data.
        month: u8,
    },
}
