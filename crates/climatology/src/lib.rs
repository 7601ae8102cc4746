//! # hydrosos-climatology
//!
//! Reference-period climatology and flow status classification.
//!
//! Two status-calculation variants are supported:
//!
//! - **Fixed-rank scheme**: percent-of-average values are ranked per
//!   calendar month across all years and classified against fixed
//!   Weibull-rank cutoffs ([`fixed_rank_status`]).
//! - **Climatology-threshold scheme**: thresholds are interpolated
//!   from the reference window at target ranks 10/25/75/90% and every
//!   year is classified against them ([`threshold_status`]).
//!
//! Both variants fail the whole station if any calendar month has no
//! usable data in the reference window; low-completeness months
//! propagate as nulls and simply receive no category.

mod config;
mod error;
mod ratio;
mod status;
mod thresholds;

pub use config::ReferencePeriod;
pub use error::ClimatologyError;
pub use ratio::RatioClimatology;
pub use status::{
    classify_percent, classify_rank, StatusCategory, ABOVE_NORMAL_MAX_RANK, BELOW_NORMAL_MAX_RANK,
    LOW_MAX_RANK, NORMAL_MAX_RANK,
};
pub use thresholds::{MonthStatistics, RankClimatology, TARGET_RANKS};

use tracing::debug;

use hydrosos_series::MonthlyRecord;
use hydrosos_stats::weibull_ranks;

/// Status category for one (year, month), aligned with the input
/// records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyStatus {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1..=12).
    pub month: u8,
    /// Assigned category, or `None` where the month had no usable
    /// mean.
    pub category: Option<StatusCategory>,
}

/// Result of the climatology-threshold status variant: the per-month
/// categories plus the fitted climatology (whose thresholds the
/// caller typically exports as status bands).
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdStatus {
    /// One status per input record, in input order.
    pub statuses: Vec<MonthlyStatus>,
    /// The fitted per-month rank statistics.
    pub climatology: RankClimatology,
}

/// Weibull ranks of `values` computed within each calendar-month
/// group, aligned with `records`.
fn ranks_by_month(records: &[MonthlyRecord], values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = vec![None; records.len()];
    for m in 1u8..=12 {
        let indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.month == m)
            .map(|(i, _)| i)
            .collect();
        let group: Vec<Option<f64>> = indices.iter().map(|&i| values[i]).collect();
        for (&i, rank) in indices.iter().zip(weibull_ranks(&group)) {
            out[i] = rank;
        }
    }
    out
}

/// Fixed-rank status variant.
///
/// Fits the ratio climatology over the reference window, converts
/// every monthly mean to percent of average, ranks the percent values
/// per calendar month across **all** years, and classifies each rank
/// against the fixed cutoffs.
///
/// # Errors
///
/// Returns [`ClimatologyError::MissingReferenceMonth`] if any
/// calendar month has no usable data in the window.
pub fn fixed_rank_status(
    records: &[MonthlyRecord],
    period: &ReferencePeriod,
) -> Result<Vec<MonthlyStatus>, ClimatologyError> {
    let ratio = RatioClimatology::fit(records, period)?;
    let percent = ratio.percent_of_average(records);
    let ranks = ranks_by_month(records, &percent);
    debug!(records = records.len(), "classified against fixed rank cutoffs");

    Ok(records
        .iter()
        .zip(ranks)
        .map(|(r, rank)| MonthlyStatus {
            year: r.year,
            month: r.month,
            category: classify_rank(rank),
        })
        .collect())
}

/// Climatology-threshold status variant.
///
/// Fits the rank climatology over the reference window (ranks inside
/// the window only) and classifies every record's percent-of-average
/// value against the interpolated monthly thresholds.
///
/// # Errors
///
/// Returns [`ClimatologyError::MissingReferenceMonth`] if any
/// calendar month has no usable data in the window.
pub fn threshold_status(
    records: &[MonthlyRecord],
    period: &ReferencePeriod,
) -> Result<ThresholdStatus, ClimatologyError> {
    let ratio = RatioClimatology::fit(records, period)?;
    let percent = ratio.percent_of_average(records);
    let climatology = RankClimatology::fit_values(records, &percent, period)?;
    debug!(records = records.len(), "classified against interpolated thresholds");

    let statuses = records
        .iter()
        .zip(&percent)
        .map(|(r, p)| MonthlyStatus {
            year: r.year,
            month: r.month,
            category: classify_percent(*p, climatology.month(r.month)),
        })
        .collect();

    Ok(ThresholdStatus {
        statuses,
        climatology,
    })
}
