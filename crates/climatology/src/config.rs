//! Reference period configuration.

use crate::error::ClimatologyError;

/// Inclusive year window used to define "normal" climatology.
///
/// The conventional WMO window is 1991–2020, which [`Default`]
/// provides; callers thread their own range through rather than
/// relying on module-level constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePeriod {
    start_year: i32,
    end_year: i32,
}

impl Default for ReferencePeriod {
    fn default() -> Self {
        Self {
            start_year: 1991,
            end_year: 2020,
        }
    }
}

impl ReferencePeriod {
    /// Creates a reference period from inclusive start and end years.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::InvalidReferencePeriod`] unless
    /// `start_year < end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, ClimatologyError> {
        if start_year >= end_year {
            return Err(ClimatologyError::InvalidReferencePeriod {
                start: start_year,
                end: end_year,
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    /// First year of the window.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year of the window.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns `true` if `year` falls inside the window.
    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}
