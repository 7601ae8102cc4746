//! Forecast ensemble discovery and reading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use hydrosos_forecast::{ForecastEnsemble, MemberId};

use crate::daily::{field, parse_optional_value};
use crate::error::IoError;

/// The forecast member files belonging to one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFiles {
    /// Station (catchment) identifier from the filename convention.
    pub station: String,
    /// Member id and file path, ordered by filename.
    pub members: Vec<(String, PathBuf)>,
}

/// Scans a forecast directory for `X_<member>_<station>.csv` files
/// and groups them per station.
///
/// Stations come back in lexical order; members in filename order, so
/// ensemble column order is deterministic.
///
/// # Errors
///
/// Returns [`IoError::BadFilename`] for a `.csv` that does not follow
/// the convention.
pub fn discover_forecast_stations(dir: &Path) -> Result<Vec<StationFiles>, IoError> {
    let mut by_station: BTreeMap<String, Vec<(String, PathBuf)>> = BTreeMap::new();

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| IoError::BadFilename { path: path.clone() })?;
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 3 {
            return Err(IoError::BadFilename { path: path.clone() });
        }
        let member = parts[1].to_string();
        let station = parts[2].to_string();
        by_station
            .entry(station)
            .or_default()
            .push((member, path));
    }

    let stations: Vec<StationFiles> = by_station
        .into_iter()
        .map(|(station, members)| StationFiles { station, members })
        .collect();
    info!(
        stations = stations.len(),
        files = stations.iter().map(|s| s.members.len()).sum::<usize>(),
        "discovered forecast stations"
    );
    Ok(stations)
}

/// Finds the observed-simulated file for a station in `dir`: the
/// `.csv` whose second underscore-separated part is the station id.
///
/// # Errors
///
/// Returns [`IoError::MissingObserved`] if no file matches.
pub fn find_observed_file(dir: &Path, station: &str) -> Result<PathBuf, IoError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    for path in paths {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() >= 2 && parts[1] == station {
            return Ok(path);
        }
    }

    Err(IoError::MissingObserved {
        station: station.to_string(),
    })
}

/// Reads one member file: `(Date, Discharge)` with ISO dates, one row
/// per lead month, dense (no missing values).
fn read_member_series(path: &Path) -> Result<(Vec<NaiveDate>, Vec<f64>), IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut dates = Vec::new();
    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let line = i + 2;
        let record = record.map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let date_field = field(&record, 0, path, line)?;
        let date = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d").map_err(|_| {
            IoError::InvalidDate {
                path: path.to_path_buf(),
                line,
                value: date_field.to_string(),
            }
        })?;

        let value_field = field(&record, 1, path, line)?;
        let value =
            parse_optional_value(value_field, path, line)?.ok_or_else(|| IoError::InvalidValue {
                path: path.to_path_buf(),
                line,
                value: value_field.to_string(),
            })?;

        dates.push(date);
        values.push(value);
    }

    Ok((dates, values))
}

/// Assembles a station's member files into a [`ForecastEnsemble`].
///
/// The first member defines the date axis; every other member must
/// match it exactly.
///
/// # Errors
///
/// Returns [`IoError::DateAxisMismatch`] when a member's dates differ
/// from the first member's, and propagates read errors per file.
pub fn read_forecast_ensemble(files: &StationFiles) -> Result<ForecastEnsemble, IoError> {
    let mut ensemble: Option<ForecastEnsemble> = None;

    for (member, path) in &files.members {
        let (dates, values) = read_member_series(path)?;
        debug!(member = %member, rows = values.len(), "read forecast member");
        match ensemble.as_mut() {
            None => {
                let mut ens = ForecastEnsemble::new(dates)?;
                ens.push_member(MemberId::new(member.clone()), values)?;
                ensemble = Some(ens);
            }
            Some(ens) => {
                if ens.dates() != dates.as_slice() {
                    return Err(IoError::DateAxisMismatch {
                        member: member.clone(),
                        path: path.clone(),
                    });
                }
                ens.push_member(MemberId::new(member.clone()), values)?;
            }
        }
    }

    ensemble.ok_or_else(|| hydrosos_forecast::ForecastError::NoMembers.into())
}
