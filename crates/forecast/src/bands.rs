//! Climatology bands from year-aligned historical tracks.

use tracing::debug;

use hydrosos_series::MonthlyRecord;
use hydrosos_stats::{cunnane_quantile, mean, sorted_copy};

use crate::accumulate::expanding_mean_optional;
use crate::error::ForecastError;

/// Empirical summary of a historical sample: extremes, mean, and the
/// six-point Cunnane quantile set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileBand {
    /// Smallest sample value.
    pub min: f64,
    /// Arithmetic mean of the sample.
    pub mean: f64,
    /// Largest sample value.
    pub max: f64,
    /// 5% empirical quantile.
    pub q05: f64,
    /// 13% empirical quantile.
    pub q13: f64,
    /// 28% empirical quantile.
    pub q28: f64,
    /// 72% empirical quantile.
    pub q72: f64,
    /// 87% empirical quantile.
    pub q87: f64,
    /// 95% empirical quantile.
    pub q95: f64,
}

impl QuantileBand {
    /// Builds the band from a non-empty sample.
    fn from_sample(values: &[f64]) -> Self {
        let sorted = sorted_copy(values);
        Self {
            min: sorted[0],
            mean: mean(values),
            max: sorted[sorted.len() - 1],
            q05: cunnane_quantile(&sorted, 0.05),
            q13: cunnane_quantile(&sorted, 0.13),
            q28: cunnane_quantile(&sorted, 0.28),
            q72: cunnane_quantile(&sorted, 0.72),
            q87: cunnane_quantile(&sorted, 0.87),
            q95: cunnane_quantile(&sorted, 0.95),
        }
    }
}

/// Band for one forecast lead month (1..=12).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastBand {
    /// Relative lead month, 1-indexed.
    pub lead_month: u8,
    /// Band statistics across the historical tracks.
    pub band: QuantileBand,
}

/// Band for one calendar month across all years of the record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBand {
    /// Calendar month, 1..=12.
    pub month: u8,
    /// Band statistics across the years.
    pub band: QuantileBand,
}

/// Which track values feed the forecast bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandVariant {
    /// Tracks are replaced by their expanding means before banding,
    /// mirroring the accumulated forecast.
    Accumulated,
    /// Tracks are banded as-is, mirroring the single-month forecast.
    Single,
}

/// Row offset at which lead month 1 begins in the historical monthly
/// record, from the first forecast month and the month the history
/// starts in.
pub fn slice_offset(first_forecast_month: u8, history_start_month: u8) -> usize {
    (i32::from(first_forecast_month) - i32::from(history_start_month)).rem_euclid(12) as usize
}

/// Builds per-lead-month climatology bands from a historical monthly
/// record.
///
/// The record is reshaped into year-aligned tracks of 12 consecutive
/// months starting at `slice_offset`, discarding any trailing partial
/// year. For [`BandVariant::Accumulated`] each track is replaced by
/// its expanding mean first. Statistics per lead month are computed
/// over the non-null track values.
///
/// # Errors
///
/// Returns [`ForecastError::InsufficientHistory`] if no full track
/// fits, and [`ForecastError::EmptyLeadMonth`] if every track is null
/// at some lead month.
pub fn build_forecast_bands(
    records: &[MonthlyRecord],
    slice_offset: usize,
    variant: BandVariant,
) -> Result<Vec<ForecastBand>, ForecastError> {
    let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_value).collect();

    if means.len() < slice_offset + 12 {
        return Err(ForecastError::InsufficientHistory {
            needed: slice_offset + 12,
            got: means.len(),
        });
    }

    let tracks: Vec<Vec<Option<f64>>> = means[slice_offset..]
        .chunks_exact(12)
        .map(|track| match variant {
            BandVariant::Accumulated => expanding_mean_optional(track),
            BandVariant::Single => track.to_vec(),
        })
        .collect();
    debug!(
        tracks = tracks.len(),
        offset = slice_offset,
        ?variant,
        "reshaped history into year-aligned tracks"
    );

    let mut bands = Vec::with_capacity(12);
    for lead in 0..12 {
        let values: Vec<f64> = tracks.iter().filter_map(|t| t[lead]).collect();
        if values.is_empty() {
            return Err(ForecastError::EmptyLeadMonth {
                lead_month: (lead + 1) as u8,
            });
        }
        bands.push(ForecastBand {
            lead_month: (lead + 1) as u8,
            band: QuantileBand::from_sample(&values),
        });
    }

    Ok(bands)
}

/// Builds per-calendar-month bands over all years of a monthly
/// record (the status-band climatology).
///
/// Months with no non-null value are omitted rather than failing the
/// station; the output is ordered by calendar month.
pub fn calendar_month_bands(records: &[MonthlyRecord]) -> Vec<MonthBand> {
    let mut bands = Vec::new();
    for m in 1u8..=12 {
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.month == m)
            .filter_map(|r| r.mean_value)
            .collect();
        if values.is_empty() {
            continue;
        }
        bands.push(MonthBand {
            month: m,
            band: QuantileBand::from_sample(&values),
        });
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records_from_means(means: &[Option<f64>], start_month: u8) -> Vec<MonthlyRecord> {
        means
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let month0 = (start_month as usize - 1 + i) % 12;
                MonthlyRecord {
                    year: 2000 + ((start_month as usize - 1 + i) / 12) as i32,
                    month: (month0 + 1) as u8,
                    completeness: 1.0,
                    mean_value: *m,
                }
            })
            .collect()
    }

    #[test]
    fn offset_wraps_around_year() {
        assert_eq!(slice_offset(1, 1), 0);
        assert_eq!(slice_offset(4, 1), 3);
        assert_eq!(slice_offset(3, 11), 4);
        assert_eq!(slice_offset(11, 3), 8);
    }

    #[test]
    fn single_variant_reshapes_tracks() {
        // Two full years: 1..12 then 101..112.
        let means: Vec<Option<f64>> = (1..=12)
            .map(|v| Some(v as f64))
            .chain((101..=112).map(|v| Some(v as f64)))
            .collect();
        let bands = build_forecast_bands(&records_from_means(&means, 1), 0, BandVariant::Single)
            .unwrap();
        assert_eq!(bands.len(), 12);
        assert_eq!(bands[0].lead_month, 1);
        assert_relative_eq!(bands[0].band.min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.max, 101.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.mean, 51.0, epsilon = 1e-12);
        assert_relative_eq!(bands[11].band.min, 12.0, epsilon = 1e-12);
        assert_relative_eq!(bands[11].band.max, 112.0, epsilon = 1e-12);
    }

    #[test]
    fn accumulated_variant_uses_expanding_means() {
        let means: Vec<Option<f64>> = (1..=24).map(|v| Some(v as f64)).collect();
        let bands =
            build_forecast_bands(&records_from_means(&means, 1), 0, BandVariant::Accumulated)
                .unwrap();
        // First track is 1..12; its expanding mean at lead 3 is 2.0.
        // Second track is 13..24; expanding mean at lead 3 is 14.0.
        assert_relative_eq!(bands[2].band.min, 2.0, epsilon = 1e-12);
        assert_relative_eq!(bands[2].band.max, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_discards_leading_rows_and_partial_tail() {
        // 27 records starting in January; offset 2 leaves 25, enough
        // for two tracks with one row spare.
        let means: Vec<Option<f64>> = (1..=27).map(|v| Some(v as f64)).collect();
        let bands = build_forecast_bands(&records_from_means(&means, 1), 2, BandVariant::Single)
            .unwrap();
        assert_relative_eq!(bands[0].band.min, 3.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.max, 15.0, epsilon = 1e-12);
        // Row 27 never lands in a track.
        assert_relative_eq!(bands[11].band.max, 26.0, epsilon = 1e-12);
    }

    #[test]
    fn too_short_history_errors() {
        let means: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
        assert_eq!(
            build_forecast_bands(&records_from_means(&means, 1), 0, BandVariant::Single)
                .unwrap_err(),
            ForecastError::InsufficientHistory { needed: 12, got: 10 }
        );
    }

    #[test]
    fn null_track_values_skipped() {
        let mut means: Vec<Option<f64>> = (1..=24).map(|v| Some(v as f64)).collect();
        means[0] = None; // first year's lead 1 missing
        let bands = build_forecast_bands(&records_from_means(&means, 1), 0, BandVariant::Single)
            .unwrap();
        // Only the second track contributes at lead 1.
        assert_relative_eq!(bands[0].band.min, 13.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.max, 13.0, epsilon = 1e-12);
    }

    #[test]
    fn all_null_lead_month_errors() {
        let mut means: Vec<Option<f64>> = (1..=24).map(|v| Some(v as f64)).collect();
        means[4] = None;
        means[16] = None; // lead 5 null in both tracks
        assert_eq!(
            build_forecast_bands(&records_from_means(&means, 1), 0, BandVariant::Single)
                .unwrap_err(),
            ForecastError::EmptyLeadMonth { lead_month: 5 }
        );
    }

    #[test]
    fn calendar_month_bands_group_by_month() {
        // Three years of per-month values m, m+12, m+24.
        let means: Vec<Option<f64>> = (1..=36).map(|v| Some(v as f64)).collect();
        let bands = calendar_month_bands(&records_from_means(&means, 1));
        assert_eq!(bands.len(), 12);
        assert_eq!(bands[0].month, 1);
        assert_relative_eq!(bands[0].band.min, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.mean, 13.0, epsilon = 1e-12);
        assert_relative_eq!(bands[0].band.max, 25.0, epsilon = 1e-12);
    }

    #[test]
    fn calendar_month_bands_skip_empty_months() {
        let means: Vec<Option<f64>> = (1..=6).map(|v| Some(v as f64)).collect();
        let bands = calendar_month_bands(&records_from_means(&means, 1));
        assert_eq!(bands.len(), 6);
        assert!(bands.iter().all(|b| b.month <= 6));
    }
}
