//! A single daily discharge reading.

use chrono::NaiveDate;

/// One day of a discharge series.
///
/// A null `value` is a materialized gap or an unusable reading; it
/// still occupies its calendar day so completeness accounting sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation {
    /// Calendar day of the reading.
    pub date: NaiveDate,
    /// Discharge value, or `None` for a missing reading.
    pub value: Option<f64>,
}

impl DailyObservation {
    /// Creates an observation for a given day.
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// Returns the 1-indexed calendar month of the observation.
    pub fn month(&self) -> u8 {
        use chrono::Datelike;
        self.date.month() as u8
    }

    /// Returns the calendar year of the observation.
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let obs = DailyObservation::new(NaiveDate::from_ymd_opt(1995, 7, 14).unwrap(), Some(3.2));
        assert_eq!(obs.year(), 1995);
        assert_eq!(obs.month(), 7);
        assert_eq!(obs.value, Some(3.2));
    }
}
