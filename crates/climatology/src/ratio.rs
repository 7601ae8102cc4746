//! Ratio-method climatology: long-term averages and percent of average.

use hydrosos_series::MonthlyRecord;

use crate::config::ReferencePeriod;
use crate::error::ClimatologyError;

/// Long-term average discharge per calendar month over a reference
/// window (the "simple ratio" climatology).
#[derive(Debug, Clone, PartialEq)]
pub struct RatioClimatology {
    lta: [f64; 12],
}

impl RatioClimatology {
    /// Fits the long-term average for each calendar month from the
    /// monthly records whose year falls inside the reference window.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::MissingReferenceMonth`] if any of
    /// months 1..=12 has no non-null mean in the window. A month whose
    /// every year failed the completeness gate is just as unusable as
    /// an absent one.
    pub fn fit(
        records: &[MonthlyRecord],
        period: &ReferencePeriod,
    ) -> Result<Self, ClimatologyError> {
        let mut lta = [0.0f64; 12];

        for m in 1u8..=12 {
            let values: Vec<f64> = records
                .iter()
                .filter(|r| r.month == m && period.contains(r.year))
                .filter_map(|r| r.mean_value)
                .collect();

            if values.is_empty() {
                return Err(ClimatologyError::MissingReferenceMonth { month: m });
            }
            lta[(m - 1) as usize] = hydrosos_stats::mean(&values);
        }

        Ok(Self { lta })
    }

    /// Long-term average for a 1-indexed calendar month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn long_term_average(&self, month: u8) -> f64 {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        self.lta[(month - 1) as usize]
    }

    /// Each record's mean as a percentage of its month's long-term
    /// average, aligned with `records`. Null means stay null.
    pub fn percent_of_average(&self, records: &[MonthlyRecord]) -> Vec<Option<f64>> {
        records
            .iter()
            .map(|r| {
                r.mean_value
                    .map(|v| v / self.long_term_average(r.month) * 100.0)
            })
            .collect()
    }
}
