use anyhow::{Context, Result};
use chrono::Datelike;
use rayon::prelude::*;
use tracing::{debug, error, info};

use hydrosos_forecast::{
    build_forecast_bands, calendar_month_bands, count_members, ensemble_percentiles,
    slice_offset, BandVariant, ForecastEnsemble,
};
use hydrosos_io::{
    discover_forecast_stations, find_observed_file, read_forecast_ensemble, read_observed_daily,
    write_counts, write_forecast_bands, write_forecast_table, write_month_bands,
    write_monthly_series, write_percentiles, StationFiles,
};
use hydrosos_series::{aggregate_monthly, MonthlyRecord};

use crate::cli::ForecastArgs;

/// Run forecast processing over every station found in the forecast
/// directory.
pub fn run(args: ForecastArgs) -> Result<()> {
    let stations = discover_forecast_stations(&args.forecasts)
        .with_context(|| format!("scanning forecast directory {}", args.forecasts.display()))?;
    if stations.is_empty() {
        anyhow::bail!("no forecast files in {}", args.forecasts.display());
    }
    info!(n_stations = stations.len(), "processing forecast stations");

    let failures: usize = stations
        .par_iter()
        .map(|files| match process_station(files, &args) {
            Ok(()) => {
                info!(station = %files.station, "forecast tables written");
                0
            }
            Err(e) => {
                error!(station = %files.station, error = %format!("{e:#}"), "station failed");
                1
            }
        })
        .sum();

    if failures > 0 {
        anyhow::bail!("{failures} of {} stations failed", stations.len());
    }
    Ok(())
}

fn process_station(files: &StationFiles, args: &ForecastArgs) -> Result<()> {
    let station = &files.station;

    let observed_path = find_observed_file(&args.observed, station)?;
    let observations = read_observed_daily(&observed_path)
        .with_context(|| format!("reading observed series for station {station}"))?;
    let records = aggregate_monthly(&observations);
    if records.is_empty() {
        anyhow::bail!("empty observed series for station {station}");
    }

    let ensemble = read_forecast_ensemble(files)
        .with_context(|| format!("assembling ensemble for station {station}"))?;
    debug!(
        station = %station,
        n_members = ensemble.n_members(),
        n_leads = ensemble.n_rows(),
        "ensemble assembled"
    );

    let file = format!("{station}.csv");

    // Observed-history tables shared by both variants.
    write_monthly_series(&args.output.join("monthly").join(&file), &records)?;
    write_month_bands(
        &args.output.join("statusBands").join(&file),
        &calendar_month_bands(&records),
    )?;

    // Lead month 1 of the bands must line up with the first forecast
    // date, wherever the history happens to start.
    let first_forecast_month = ensemble.dates()[0].month() as u8;
    let offset = slice_offset(first_forecast_month, records[0].month);
    debug!(station = %station, offset, "derived slice offset");

    let accumulated = ensemble.accumulated();
    write_variant(args, BandVariant::Single, &file, &records, offset, &ensemble)?;
    write_variant(
        args,
        BandVariant::Accumulated,
        &file,
        &records,
        offset,
        &accumulated,
    )?;

    Ok(())
}

/// Output subdirectory for a band variant.
fn variant_dir(variant: BandVariant) -> &'static str {
    match variant {
        BandVariant::Single => "single",
        BandVariant::Accumulated => "accumulated",
    }
}

/// Writes the four per-variant tables (forecasts, bands, percentiles,
/// counts) under the variant's output subdirectory.
fn write_variant(
    args: &ForecastArgs,
    variant: BandVariant,
    file: &str,
    records: &[MonthlyRecord],
    offset: usize,
    forecast: &ForecastEnsemble,
) -> Result<()> {
    let label = variant_dir(variant);
    let bands = build_forecast_bands(records, offset, variant)
        .with_context(|| format!("building {label} bands"))?;

    let root = args.output.join(label);
    write_forecast_table(&root.join("forecasts").join(file), forecast)?;
    write_forecast_bands(&root.join("forecastBands").join(file), &bands)?;
    write_percentiles(
        &root.join("percentiles").join(file),
        &ensemble_percentiles(forecast)?,
    )?;
    write_counts(
        &root.join("counts").join(file),
        &count_members(forecast, &bands)?,
    )?;

    Ok(())
}
