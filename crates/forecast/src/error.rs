//! Error types for the hydrosos-forecast crate.

/// Error type for all fallible operations in the hydrosos-forecast
/// crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when a forecast ensemble is built with no lead months.
    #[error("forecast ensemble has no rows")]
    EmptyDates,

    /// Returned when an ensemble has no members where at least one is
    /// required.
    #[error("forecast ensemble has no members")]
    NoMembers,

    /// Returned when a member's series does not line up with the
    /// shared date axis.
    #[error("member '{member}' has {got} values, expected {expected}")]
    MemberLengthMismatch {
        /// The offending member identifier.
        member: String,
        /// Number of rows on the shared date axis.
        expected: usize,
        /// Number of values the member supplied.
        got: usize,
    },

    /// Returned when the same member identifier is added twice.
    #[error("member '{member}' added twice")]
    DuplicateMember {
        /// The duplicated member identifier.
        member: String,
    },

    /// Returned when the historical record is too short to cut a
    /// single year-aligned track at the requested offset.
    #[error("history too short for banding: need {needed} monthly records, got {got}")]
    InsufficientHistory {
        /// Months required for one full track from the offset.
        needed: usize,
        /// Months actually available.
        got: usize,
    },

    /// Returned when a lead month has no usable historical values to
    /// band against.
    #[error("no historical values for lead month {lead_month}")]
    EmptyLeadMonth {
        /// The 1-indexed lead month without data.
        lead_month: u8,
    },

    /// Returned when a forecast extends past the available bands.
    #[error("forecast has {rows} rows but only {bands} band rows")]
    LeadMonthOutOfRange {
        /// Rows in the forecast ensemble.
        rows: usize,
        /// Band rows available.
        bands: usize,
    },
}
