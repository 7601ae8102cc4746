//! Daily flow CSV reading.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use hydrosos_series::{fill_gaps, DailyObservation};

use crate::error::IoError;

/// Date format of the daily flow files.
const DAILY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Reads a daily flow file: two columns `(date, flow)` with
/// `DD/MM/YYYY` dates, header row ignored by position.
///
/// The result is gap-materialized: every calendar day between the
/// first and last observation is present, missing days as explicit
/// nulls. Empty or `NA` flow cells also become nulls.
///
/// # Errors
///
/// Returns [`IoError`] for unreadable files, unparseable dates or
/// values, or duplicate days.
pub fn read_daily_flow(path: &Path) -> Result<Vec<DailyObservation>, IoError> {
    let observations = read_pairs(path, DAILY_DATE_FORMAT)?;
    Ok(fill_gaps(&observations)?)
}

/// Reads an observed-simulated discharge file: `(Date, Discharge)`
/// with ISO `YYYY-MM-DD` dates, gap-materialized like
/// [`read_daily_flow`].
pub fn read_observed_daily(path: &Path) -> Result<Vec<DailyObservation>, IoError> {
    let observations = read_pairs(path, "%Y-%m-%d")?;
    Ok(fill_gaps(&observations)?)
}

fn read_pairs(path: &Path, date_format: &str) -> Result<Vec<DailyObservation>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut observations = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // Header occupies line 1.
        let line = i + 2;
        let record = record.map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let date_field = field(&record, 0, path, line)?;
        let date = NaiveDate::parse_from_str(date_field.trim(), date_format).map_err(|_| {
            IoError::InvalidDate {
                path: path.to_path_buf(),
                line,
                value: date_field.to_string(),
            }
        })?;

        let value_field = field(&record, 1, path, line)?;
        let value = parse_optional_value(value_field, path, line)?;

        observations.push(DailyObservation::new(date, value));
    }

    debug!(path = %path.display(), rows = observations.len(), "read daily records");
    Ok(observations)
}

pub(crate) fn field<'a>(
    record: &'a csv::StringRecord,
    column: usize,
    path: &Path,
    line: usize,
) -> Result<&'a str, IoError> {
    record.get(column).ok_or_else(|| IoError::MissingColumn {
        path: path.to_path_buf(),
        line,
        column,
    })
}

pub(crate) fn parse_optional_value(
    raw: &str,
    path: &Path,
    line: usize,
) -> Result<Option<f64>, IoError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") || trimmed.eq_ignore_ascii_case("nan")
    {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| IoError::InvalidValue {
            path: path.to_path_buf(),
            line,
            value: raw.to_string(),
        })
}
