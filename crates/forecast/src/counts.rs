//! Ensemble membership counts against band thresholds.

use chrono::NaiveDate;

use crate::bands::ForecastBand;
use crate::ensemble::ForecastEnsemble;
use crate::error::ForecastError;

/// How many ensemble members fell into each ordinal bucket for one
/// lead month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCounts {
    /// Forecast date of the lead month.
    pub date: NaiveDate,
    /// Members below the 13% band.
    pub notably_low: u32,
    /// Members in [13%, 28%).
    pub below_normal: u32,
    /// Members in [28%, 72%).
    pub normal: u32,
    /// Members in [72%, 87%).
    pub above_normal: u32,
    /// Members at or above the 87% band.
    pub notably_high: u32,
}

impl BandCounts {
    /// Sum over all five buckets; always equals the member count.
    pub fn total(&self) -> u32 {
        self.notably_low + self.below_normal + self.normal + self.above_normal + self.notably_high
    }
}

/// Classifies every member value of every lead month against that
/// lead month's band thresholds and tallies the five buckets.
///
/// Thresholds are the band's 13/28/72/87% quantiles, ascending; the
/// buckets are left-closed above the lowest.
///
/// # Errors
///
/// Returns [`ForecastError::NoMembers`] for an ensemble without
/// members and [`ForecastError::LeadMonthOutOfRange`] if the forecast
/// has more rows than there are bands.
pub fn count_members(
    forecast: &ForecastEnsemble,
    bands: &[ForecastBand],
) -> Result<Vec<BandCounts>, ForecastError> {
    if forecast.n_members() == 0 {
        return Err(ForecastError::NoMembers);
    }
    if forecast.n_rows() > bands.len() {
        return Err(ForecastError::LeadMonthOutOfRange {
            rows: forecast.n_rows(),
            bands: bands.len(),
        });
    }

    let mut counts = Vec::with_capacity(forecast.n_rows());
    for (row, (&date, band)) in forecast.dates().iter().zip(bands).enumerate() {
        let mut tally = BandCounts {
            date,
            notably_low: 0,
            below_normal: 0,
            normal: 0,
            above_normal: 0,
            notably_high: 0,
        };
        for value in forecast.row(row) {
            if value < band.band.q13 {
                tally.notably_low += 1;
            } else if value < band.band.q28 {
                tally.below_normal += 1;
            } else if value < band.band.q72 {
                tally.normal += 1;
            } else if value < band.band.q87 {
                tally.above_normal += 1;
            } else {
                tally.notably_high += 1;
            }
        }
        counts.push(tally);
    }

    Ok(counts)
}
