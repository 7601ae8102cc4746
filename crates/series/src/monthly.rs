//! Monthly aggregation with completeness gating.

use crate::observation::DailyObservation;

/// Minimum fraction of non-null days a month needs for its mean to be
/// usable.
pub const COMPLETENESS_THRESHOLD: f64 = 0.5;

/// Mean discharge for one (year, month) with its completeness fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRecord {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1..=12).
    pub month: u8,
    /// Fraction of the month's days in the span with a non-null value.
    pub completeness: f64,
    /// Mean of the non-null values, or `None` when completeness falls
    /// below [`COMPLETENESS_THRESHOLD`].
    pub mean_value: Option<f64>,
}

/// Collapses a gap-materialized daily series into one record per
/// (year, month), ordered by (year, month).
///
/// `completeness` is the non-null count over the days the span covers
/// in that month; the mean is taken over non-null values only and
/// nulled out below the 50% gate. Pure function, no side effects.
pub fn aggregate_monthly(observations: &[DailyObservation]) -> Vec<MonthlyRecord> {
    let mut records: Vec<MonthlyRecord> = Vec::new();
    let mut group: Option<(i32, u8, usize, usize, f64)> = None;

    for obs in observations {
        let (year, month) = (obs.year(), obs.month());
        match &mut group {
            Some((gy, gm, total, present, sum)) if *gy == year && *gm == month => {
                *total += 1;
                if let Some(v) = obs.value {
                    *present += 1;
                    *sum += v;
                }
            }
            _ => {
                if let Some(g) = group.take() {
                    records.push(finish_group(g));
                }
                let (present, sum) = match obs.value {
                    Some(v) => (1, v),
                    None => (0, 0.0),
                };
                group = Some((year, month, 1, present, sum));
            }
        }
    }

    if let Some(g) = group.take() {
        records.push(finish_group(g));
    }

    records
}

fn finish_group((year, month, total, present, sum): (i32, u8, usize, usize, f64)) -> MonthlyRecord {
    let completeness = present as f64 / total as f64;
    let mean_value = if completeness < COMPLETENESS_THRESHOLD {
        None
    } else {
        Some(sum / present as f64)
    };
    MonthlyRecord {
        year,
        month,
        completeness,
        mean_value,
    }
}
