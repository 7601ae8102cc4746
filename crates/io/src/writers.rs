//! CSV writers for the status and forecast output tables.

use std::path::Path;

use chrono::NaiveDate;

use hydrosos_climatology::{MonthlyStatus, RankClimatology};
use hydrosos_forecast::{
    BandCounts, EnsembleSummary, ForecastBand, ForecastEnsemble, MonthBand,
};
use hydrosos_series::MonthlyRecord;

use crate::error::IoError;

fn open_writer(path: &Path) -> Result<csv::Writer<std::fs::File>, IoError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    csv::Writer::from_path(path).map_err(|e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn finish(mut writer: csv::Writer<std::fs::File>, path: &Path) -> Result<(), IoError> {
    writer.flush().map_err(|e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_row(
    writer: &mut csv::Writer<std::fs::File>,
    path: &Path,
    row: &[String],
) -> Result<(), IoError> {
    writer.write_record(row).map_err(|e| IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn fmt_value(v: f64) -> String {
    format!("{v:.4}")
}

fn first_of_month(year: i32, month: u8) -> NaiveDate {
    // Month is validated upstream (1..=12), so the date always exists.
    NaiveDate::from_ymd_opt(year, u32::from(month), 1).unwrap_or_default()
}

/// Writes the per-month status categories: `date,flowcat`, ISO dates
/// on the first of each month, categories as 1..=5 with unclassified
/// months left empty.
pub fn write_status_categories(path: &Path, statuses: &[MonthlyStatus]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(&mut writer, path, &["date".into(), "flowcat".into()])?;
    for s in statuses {
        let category = s
            .category
            .map(|c| c.as_u8().to_string())
            .unwrap_or_default();
        write_row(
            &mut writer,
            path,
            &[first_of_month(s.year, s.month).to_string(), category],
        )?;
    }
    finish(writer, path)
}

/// Writes the rank-climatology thresholds per calendar month:
/// `month,min,q10,q25,median,q75,q90,max`.
pub fn write_status_band_thresholds(
    path: &Path,
    climatology: &RankClimatology,
) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(
        &mut writer,
        path,
        &[
            "month".into(),
            "min".into(),
            "q10".into(),
            "q25".into(),
            "median".into(),
            "q75".into(),
            "q90".into(),
            "max".into(),
        ],
    )?;
    for m in 1u8..=12 {
        let stats = climatology.month(m);
        write_row(
            &mut writer,
            path,
            &[
                m.to_string(),
                fmt_value(stats.min()),
                fmt_value(stats.q10()),
                fmt_value(stats.q25()),
                fmt_value(stats.median()),
                fmt_value(stats.q75()),
                fmt_value(stats.q90()),
                fmt_value(stats.max()),
            ],
        )?;
    }
    finish(writer, path)
}

/// Writes a monthly mean series: `date,mean` with `YYYY-MM` dates and
/// empty cells for null means.
pub fn write_monthly_series(path: &Path, records: &[MonthlyRecord]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(&mut writer, path, &["date".into(), "mean".into()])?;
    for r in records {
        let mean = r.mean_value.map(fmt_value).unwrap_or_default();
        write_row(
            &mut writer,
            path,
            &[format!("{:04}-{:02}", r.year, r.month), mean],
        )?;
    }
    finish(writer, path)
}

/// Writes per-calendar-month climatology bands:
/// `month,min,mean,max,5%,13%,28%,72%,87%,95%`.
pub fn write_month_bands(path: &Path, bands: &[MonthBand]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(
        &mut writer,
        path,
        &[
            "month".into(),
            "min".into(),
            "mean".into(),
            "max".into(),
            "5%".into(),
            "13%".into(),
            "28%".into(),
            "72%".into(),
            "87%".into(),
            "95%".into(),
        ],
    )?;
    for b in bands {
        write_row(
            &mut writer,
            path,
            &[
                b.month.to_string(),
                fmt_value(b.band.min),
                fmt_value(b.band.mean),
                fmt_value(b.band.max),
                fmt_value(b.band.q05),
                fmt_value(b.band.q13),
                fmt_value(b.band.q28),
                fmt_value(b.band.q72),
                fmt_value(b.band.q87),
                fmt_value(b.band.q95),
            ],
        )?;
    }
    finish(writer, path)
}

/// Writes per-lead-month climatology bands:
/// `relative_month,min,mean,max,13%,28%,72%,87%`.
pub fn write_forecast_bands(path: &Path, bands: &[ForecastBand]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(
        &mut writer,
        path,
        &[
            "relative_month".into(),
            "min".into(),
            "mean".into(),
            "max".into(),
            "13%".into(),
            "28%".into(),
            "72%".into(),
            "87%".into(),
        ],
    )?;
    for b in bands {
        write_row(
            &mut writer,
            path,
            &[
                b.lead_month.to_string(),
                fmt_value(b.band.min),
                fmt_value(b.band.mean),
                fmt_value(b.band.max),
                fmt_value(b.band.q13),
                fmt_value(b.band.q28),
                fmt_value(b.band.q72),
                fmt_value(b.band.q87),
            ],
        )?;
    }
    finish(writer, path)
}

/// Writes the forecast ensemble as a table: `date` then one column
/// per member, `YYYY-MM` dates, values to four decimal places.
pub fn write_forecast_table(path: &Path, forecast: &ForecastEnsemble) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;

    let mut header = vec!["date".to_string()];
    header.extend(forecast.members().iter().map(|m| m.as_str().to_string()));
    write_row(&mut writer, path, &header)?;

    for (row, date) in forecast.dates().iter().enumerate() {
        let mut record = vec![date.format("%Y-%m").to_string()];
        record.extend(forecast.row(row).into_iter().map(fmt_value));
        write_row(&mut writer, path, &record)?;
    }
    finish(writer, path)
}

/// Writes per-lead-month ensemble spread summaries:
/// `date,min,mean,max,13%,28%,72%,87%` with `YYYY-MM` dates.
pub fn write_percentiles(path: &Path, summaries: &[EnsembleSummary]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(
        &mut writer,
        path,
        &[
            "date".into(),
            "min".into(),
            "mean".into(),
            "max".into(),
            "13%".into(),
            "28%".into(),
            "72%".into(),
            "87%".into(),
        ],
    )?;
    for s in summaries {
        write_row(
            &mut writer,
            path,
            &[
                s.date.format("%Y-%m").to_string(),
                fmt_value(s.min),
                fmt_value(s.mean),
                fmt_value(s.max),
                fmt_value(s.q13),
                fmt_value(s.q28),
                fmt_value(s.q72),
                fmt_value(s.q87),
            ],
        )?;
    }
    finish(writer, path)
}

/// Writes per-lead-month member counts:
/// `date,notLow,belNorm,norm,abNorm,notHigh` with `YYYY-MM` dates.
pub fn write_counts(path: &Path, counts: &[BandCounts]) -> Result<(), IoError> {
    let mut writer = open_writer(path)?;
    write_row(
        &mut writer,
        path,
        &[
            "date".into(),
            "notLow".into(),
            "belNorm".into(),
            "norm".into(),
            "abNorm".into(),
            "notHigh".into(),
        ],
    )?;
    for c in counts {
        write_row(
            &mut writer,
            path,
            &[
                c.date.format("%Y-%m").to_string(),
                c.notably_low.to_string(),
                c.below_normal.to_string(),
                c.normal.to_string(),
                c.above_normal.to_string(),
                c.notably_high.to_string(),
            ],
        )?;
    }
    finish(writer, path)
}
