//! Gap materialization over the observed date span.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::SeriesError;
use crate::observation::DailyObservation;

/// Expands a daily series to cover every calendar day between its
/// first and last observation, inserting explicit nulls for missing
/// days.
///
/// Input order does not matter; the output is sorted by date and
/// contiguous. Gaps must be materialized this way before monthly
/// aggregation, otherwise completeness fractions would overcount.
///
/// # Errors
///
/// Returns [`SeriesError::Empty`] for an empty input and
/// [`SeriesError::DuplicateDate`] if any day appears twice.
pub fn fill_gaps(observations: &[DailyObservation]) -> Result<Vec<DailyObservation>, SeriesError> {
    if observations.is_empty() {
        return Err(SeriesError::Empty);
    }

    let mut by_date: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for obs in observations {
        if by_date.insert(obs.date, obs.value).is_some() {
            return Err(SeriesError::DuplicateDate { date: obs.date });
        }
    }

    // Safe: map is non-empty after the loop above.
    let first = *by_date.keys().next().expect("non-empty series");
    let last = *by_date.keys().next_back().expect("non-empty series");

    let mut filled = Vec::new();
    let mut day = first;
    while day <= last {
        let value = by_date.get(&day).copied().flatten();
        filled.push(DailyObservation::new(day, value));
        day = day.succ_opt().expect("date range stays in bounds");
    }

    debug!(
        days = filled.len(),
        gaps = filled.len() - by_date.len(),
        "materialized daily series"
    );
    Ok(filled)
}
