//! Rank-method climatology: interpolated percentile thresholds per
//! calendar month.

use hydrosos_series::MonthlyRecord;
use hydrosos_stats::{weibull_ranks, RankTable};

use crate::config::ReferencePeriod;
use crate::error::ClimatologyError;
use crate::ratio::RatioClimatology;

/// Target plotting-position ranks at which thresholds are derived.
pub const TARGET_RANKS: [f64; 4] = [0.10, 0.25, 0.75, 0.90];

/// Interpolated thresholds and summary statistics for one calendar
/// month of the reference period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthStatistics {
    thresholds: [f64; 4],
    min: f64,
    median: f64,
    max: f64,
}

impl MonthStatistics {
    pub(crate) fn new(thresholds: [f64; 4], min: f64, median: f64, max: f64) -> Self {
        Self {
            thresholds,
            min,
            median,
            max,
        }
    }

    /// Threshold at target rank 0.10 (Low / BelowNormal boundary).
    pub fn q10(&self) -> f64 {
        self.thresholds[0]
    }

    /// Threshold at target rank 0.25.
    pub fn q25(&self) -> f64 {
        self.thresholds[1]
    }

    /// Threshold at target rank 0.75.
    pub fn q75(&self) -> f64 {
        self.thresholds[2]
    }

    /// Threshold at target rank 0.90 (AboveNormal / High boundary).
    pub fn q90(&self) -> f64 {
        self.thresholds[3]
    }

    /// Smallest reference-period value for the month.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Median reference-period value for the month.
    pub fn median(&self) -> f64 {
        self.median
    }

    /// Largest reference-period value for the month.
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Per-calendar-month rank statistics over a reference window.
///
/// Ranks are computed inside the window only; the resulting
/// thresholds then classify values from any year.
#[derive(Debug, Clone, PartialEq)]
pub struct RankClimatology {
    months: [MonthStatistics; 12],
}

impl RankClimatology {
    /// Fits rank statistics on percent-of-average values derived from
    /// a [`RatioClimatology`] over the same window.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::MissingReferenceMonth`] if any
    /// calendar month has no usable data in the window.
    pub fn fit(
        records: &[MonthlyRecord],
        period: &ReferencePeriod,
    ) -> Result<Self, ClimatologyError> {
        let ratio = RatioClimatology::fit(records, period)?;
        let percent = ratio.percent_of_average(records);
        Self::fit_values(records, &percent, period)
    }

    /// Fits rank statistics on caller-supplied values aligned with
    /// `records` (raw discharge instead of percent of average, for
    /// example).
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::MissingReferenceMonth`] if any
    /// calendar month has no non-null value in the window.
    pub fn fit_values(
        records: &[MonthlyRecord],
        values: &[Option<f64>],
        period: &ReferencePeriod,
    ) -> Result<Self, ClimatologyError> {
        let mut months: [Option<MonthStatistics>; 12] = [None; 12];

        for m in 1u8..=12 {
            let month_values: Vec<Option<f64>> = records
                .iter()
                .zip(values.iter())
                .filter(|(r, _)| r.month == m && period.contains(r.year))
                .map(|(_, v)| *v)
                .collect();

            let ranks = weibull_ranks(&month_values);
            let table = RankTable::from_ranked(&ranks, &month_values);
            if table.is_empty() {
                return Err(ClimatologyError::MissingReferenceMonth { month: m });
            }

            let mut thresholds = [0.0f64; 4];
            for (slot, target) in thresholds.iter_mut().zip(TARGET_RANKS) {
                // Safe: the table is non-empty, so interpolation
                // always produces a value.
                *slot = table
                    .interpolate(target)
                    .expect("non-empty rank table interpolates");
            }

            months[(m - 1) as usize] = Some(MonthStatistics::new(
                thresholds,
                table.value_min().expect("non-empty rank table"),
                table.value_median().expect("non-empty rank table"),
                table.value_max().expect("non-empty rank table"),
            ));
        }

        Ok(Self {
            months: months.map(|m| m.expect("all twelve months populated")),
        })
    }

    /// Statistics for a 1-indexed calendar month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn month(&self, month: u8) -> &MonthStatistics {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        &self.months[(month - 1) as usize]
    }
}
