//! Ensemble forecast container with a declared member identity.

use std::fmt;

use chrono::NaiveDate;

use crate::accumulate::expanding_mean;
use crate::error::ForecastError;

/// Identifier of one ensemble member.
///
/// Members are declared explicitly by the I/O layer (typically from a
/// filename convention) rather than inferred from column-name text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a member identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One forecast trajectory per member over a shared, contiguous
/// monthly date axis. Rows are lead months, columns are members in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEnsemble {
    dates: Vec<NaiveDate>,
    members: Vec<MemberId>,
    columns: Vec<Vec<f64>>,
}

impl ForecastEnsemble {
    /// Creates an empty ensemble over a date axis.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::EmptyDates`] for an empty axis.
    pub fn new(dates: Vec<NaiveDate>) -> Result<Self, ForecastError> {
        if dates.is_empty() {
            return Err(ForecastError::EmptyDates);
        }
        Ok(Self {
            dates,
            members: Vec::new(),
            columns: Vec::new(),
        })
    }

    /// Adds a member's trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::MemberLengthMismatch`] if the values
    /// do not cover the date axis, or
    /// [`ForecastError::DuplicateMember`] for a repeated identifier.
    pub fn push_member(&mut self, id: MemberId, values: Vec<f64>) -> Result<(), ForecastError> {
        if values.len() != self.dates.len() {
            return Err(ForecastError::MemberLengthMismatch {
                member: id.as_str().to_string(),
                expected: self.dates.len(),
                got: values.len(),
            });
        }
        if self.members.contains(&id) {
            return Err(ForecastError::DuplicateMember {
                member: id.as_str().to_string(),
            });
        }
        self.members.push(id);
        self.columns.push(values);
        Ok(())
    }

    /// The shared date axis.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Member identifiers in insertion order.
    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    /// Number of lead months.
    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of members.
    pub fn n_members(&self) -> usize {
        self.members.len()
    }

    /// One member's full trajectory.
    pub fn column(&self, member_idx: usize) -> &[f64] {
        &self.columns[member_idx]
    }

    /// All member values for one lead month.
    pub fn row(&self, row_idx: usize) -> Vec<f64> {
        self.columns.iter().map(|c| c[row_idx]).collect()
    }

    /// The accumulated variant of this ensemble: every member's value
    /// replaced by the expanding mean of that member's trajectory.
    pub fn accumulated(&self) -> Self {
        Self {
            dates: self.dates.clone(),
            members: self.members.clone(),
            columns: self.columns.iter().map(|c| expanding_mean(c)).collect(),
        }
    }
}
