//! # hydrosos-series
//!
//! Daily discharge series and monthly aggregation.
//!
//! A raw daily series may have calendar gaps; [`fill_gaps`]
//! materializes every missing day as an explicit null before
//! [`aggregate_monthly`] collapses the series into per-(year, month)
//! means with a data-completeness fraction. Months with less than 50%
//! coverage keep their completeness but carry a null mean, and that
//! null propagates through ranking and classification downstream.

mod error;
mod gaps;
mod monthly;
mod observation;

pub use error::SeriesError;
pub use gaps::fill_gaps;
pub use monthly::{aggregate_monthly, MonthlyRecord, COMPLETENESS_THRESHOLD};
pub use observation::DailyObservation;
