//! Per-lead-month percentile summaries across ensemble members.

use chrono::NaiveDate;

use hydrosos_stats::{cunnane_quantile, mean, sorted_copy};

use crate::ensemble::ForecastEnsemble;
use crate::error::ForecastError;

/// Spread of the ensemble at one lead month: extremes, mean, and the
/// four inner Cunnane quantiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleSummary {
    /// Forecast date of the lead month.
    pub date: NaiveDate,
    /// Smallest member value.
    pub min: f64,
    /// Mean member value.
    pub mean: f64,
    /// Largest member value.
    pub max: f64,
    /// 13% quantile across members.
    pub q13: f64,
    /// 28% quantile across members.
    pub q28: f64,
    /// 72% quantile across members.
    pub q72: f64,
    /// 87% quantile across members.
    pub q87: f64,
}

/// Summarizes the member spread for every lead month of an ensemble.
///
/// # Errors
///
/// Returns [`ForecastError::NoMembers`] for an ensemble without
/// members.
pub fn ensemble_percentiles(
    forecast: &ForecastEnsemble,
) -> Result<Vec<EnsembleSummary>, ForecastError> {
    if forecast.n_members() == 0 {
        return Err(ForecastError::NoMembers);
    }

    let summaries = forecast
        .dates()
        .iter()
        .enumerate()
        .map(|(row, &date)| {
            let values = forecast.row(row);
            let sorted = sorted_copy(&values);
            EnsembleSummary {
                date,
                min: sorted[0],
                mean: mean(&values),
                max: sorted[sorted.len() - 1],
                q13: cunnane_quantile(&sorted, 0.13),
                q28: cunnane_quantile(&sorted, 0.28),
                q72: cunnane_quantile(&sorted, 0.72),
                q87: cunnane_quantile(&sorted, 0.87),
            }
        })
        .collect();

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::MemberId;
    use approx::assert_relative_eq;

    #[test]
    fn summary_across_members() {
        let dates = vec![NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()];
        let mut ens = ForecastEnsemble::new(dates).unwrap();
        for (i, v) in [1.0, 2.0, 3.0, 4.0, 5.0].iter().enumerate() {
            ens.push_member(MemberId::new(format!("{i:02}")), vec![*v])
                .unwrap();
        }

        let summaries = ensemble_percentiles(&ens).unwrap();
        assert_eq!(summaries.len(), 1);
        let s = summaries[0];
        assert_relative_eq!(s.min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.mean, 3.0, epsilon = 1e-12);
        assert_relative_eq!(s.max, 5.0, epsilon = 1e-12);
        // n=5, h = 0.13 * 5.2 + 0.4 = 1.076
        assert_relative_eq!(s.q13, 1.076, epsilon = 1e-12);
        assert_relative_eq!(s.q87, 4.924, epsilon = 1e-12);
    }

    #[test]
    fn no_members_errors() {
        let dates = vec![NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()];
        let ens = ForecastEnsemble::new(dates).unwrap();
        assert_eq!(
            ensemble_percentiles(&ens).unwrap_err(),
            ForecastError::NoMembers
        );
    }
}
