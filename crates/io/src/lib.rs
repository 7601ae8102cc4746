//! # hydrosos-io
//!
//! CSV readers and writers at the boundary of the flow-status and
//! forecast pipelines.
//!
//! Readers materialize daily series with explicit gaps, discover
//! forecast stations from the member filename convention, and
//! assemble per-station ensembles on a shared date axis. Writers emit
//! the output tables (status categories, climatology bands, forecast
//! tables, percentile summaries, and band counts). All malformed
//! input is rejected here with file and line context; the statistical
//! crates only ever see validated records.

mod daily;
mod error;
mod forecast_read;
mod writers;

pub use daily::{read_daily_flow, read_observed_daily};
pub use error::IoError;
pub use forecast_read::{
    discover_forecast_stations, find_observed_file, read_forecast_ensemble, StationFiles,
};
pub use writers::{
    write_counts, write_forecast_bands, write_forecast_table, write_month_bands,
    write_monthly_series, write_percentiles, write_status_band_thresholds,
    write_status_categories,
};
