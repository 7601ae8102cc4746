use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{error, info};

use hydrosos_climatology::{fixed_rank_status, threshold_status, ReferencePeriod};
use hydrosos_io::{read_daily_flow, write_status_band_thresholds, write_status_categories};
use hydrosos_series::aggregate_monthly;

use crate::cli::{Scheme, StatusArgs};

/// Run status classification over every station file in the input
/// directory.
pub fn run(args: StatusArgs) -> Result<()> {
    let period = ReferencePeriod::new(args.start_year, args.end_year)
        .context("invalid reference period")?;

    let stations = station_files(&args.input)?;
    if stations.is_empty() {
        anyhow::bail!("no station files in {}", args.input.display());
    }
    info!(n_stations = stations.len(), "classifying stations");

    let failures: usize = stations
        .par_iter()
        .map(|path| match process_station(path, &args, &period) {
            Ok(station) => {
                info!(station = %station, "status written");
                0
            }
            Err(e) => {
                error!(path = %path.display(), error = %format!("{e:#}"), "station failed");
                1
            }
        })
        .sum();

    if failures > 0 {
        anyhow::bail!("{failures} of {} stations failed", stations.len());
    }
    Ok(())
}

/// Daily flow CSVs in the input directory, sorted for a stable run
/// order.
fn station_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading input directory {}", dir.display()))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();
    Ok(paths)
}

fn process_station(path: &Path, args: &StatusArgs, period: &ReferencePeriod) -> Result<String> {
    let station = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("bad station filename: {}", path.display()))?;

    let observations = read_daily_flow(path)
        .with_context(|| format!("reading daily flow for station {station}"))?;
    let records = aggregate_monthly(&observations);

    let file = format!("{station}.csv");
    match args.scheme {
        Scheme::Fixed => {
            let statuses = fixed_rank_status(&records, period)
                .with_context(|| format!("classifying station {station}"))?;
            write_status_categories(&args.output.join("status").join(&file), &statuses)?;
        }
        Scheme::Rank => {
            let result = threshold_status(&records, period)
                .with_context(|| format!("classifying station {station}"))?;
            write_status_categories(&args.output.join("status").join(&file), &result.statuses)?;
            write_status_band_thresholds(
                &args.output.join("statusBands").join(&file),
                &result.climatology,
            )?;
        }
    }

    Ok(station)
}
