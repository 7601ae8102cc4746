//! # hydrosos-forecast
//!
//! Ensemble forecast processing: expanding-mean accumulation,
//! climatology bands cut from year-aligned historical tracks, member
//! counts per ordinal bucket, and percentile summaries.
//!
//! # Pipeline
//!
//! 1. Assemble a [`ForecastEnsemble`] (I/O layer declares the member
//!    ids and the shared monthly date axis).
//! 2. Derive the accumulated variant with
//!    [`ForecastEnsemble::accumulated`].
//! 3. Cut historical bands with [`build_forecast_bands`] at the
//!    [`slice_offset`] where lead month 1 begins.
//! 4. Tally members into the five buckets with [`count_members`] and
//!    summarize the spread with [`ensemble_percentiles`].
//!
//! Both the accumulated and single variants run through the same
//! band/count/percentile machinery; only the track preparation
//! differs.

mod accumulate;
mod bands;
mod counts;
mod ensemble;
mod error;
mod percentiles;

pub use accumulate::{expanding_mean, expanding_mean_optional};
pub use bands::{
    build_forecast_bands, calendar_month_bands, slice_offset, BandVariant, ForecastBand,
    MonthBand, QuantileBand,
};
pub use counts::{count_members, BandCounts};
pub use ensemble::{ForecastEnsemble, MemberId};
pub use error::ForecastError;
pub use percentiles::{ensemble_percentiles, EnsembleSummary};
