use approx::assert_relative_eq;
use chrono::NaiveDate;
use hydrosos_forecast::{
    build_forecast_bands, count_members, ensemble_percentiles, slice_offset, BandVariant,
    ForecastEnsemble, MemberId,
};
use hydrosos_series::MonthlyRecord;

fn history(n_years: usize) -> Vec<MonthlyRecord> {
    // Year y, month m gets mean 10*m + y, so each calendar month has
    // a spread of n_years values.
    let mut records = Vec::new();
    for y in 0..n_years {
        for m in 1u8..=12 {
            records.push(MonthlyRecord {
                year: 2000 + y as i32,
                month: m,
                completeness: 1.0,
                mean_value: Some(10.0 * m as f64 + y as f64),
            });
        }
    }
    records
}

fn april_start_ensemble(values_per_member: &[Vec<f64>]) -> ForecastEnsemble {
    let dates: Vec<NaiveDate> = (0..values_per_member[0].len())
        .map(|i| NaiveDate::from_ymd_opt(2024, 4 + i as u32, 1).unwrap())
        .collect();
    let mut ens = ForecastEnsemble::new(dates).unwrap();
    for (i, values) in values_per_member.iter().enumerate() {
        ens.push_member(MemberId::new(format!("{:02}", i + 1)), values.clone())
            .unwrap();
    }
    ens
}

/// End-to-end forecast path: bands from history, counts from the
/// ensemble, with the bucket totals preserved at every lead month.
#[test]
fn counts_sum_to_member_count_across_leads() {
    let records = history(10);

    // Forecast issued for April against a January-starting history.
    let offset = slice_offset(4, 1);
    assert_eq!(offset, 3);

    // Offset 3 leaves 117 rows: nine full tracks.
    let bands = build_forecast_bands(&records, offset, BandVariant::Accumulated).unwrap();
    assert_eq!(bands.len(), 12);
    // Lead 1 is April: accumulated track value is just April's mean.
    assert_relative_eq!(bands[0].band.min, 40.0, epsilon = 1e-12);
    assert_relative_eq!(bands[0].band.max, 48.0, epsilon = 1e-12);

    // Six members, six lead months of synthetic forecast discharge.
    let members: Vec<Vec<f64>> = (0..6)
        .map(|m| (0..6).map(|i| 35.0 + 3.0 * m as f64 + i as f64).collect())
        .collect();
    let forecast = april_start_ensemble(&members);
    let accumulated = forecast.accumulated();

    let counts = count_members(&accumulated, &bands).unwrap();
    assert_eq!(counts.len(), 6);
    for c in &counts {
        assert_eq!(c.total(), 6, "bucket totals must equal member count");
    }

    // Percentile summaries cover the same rows.
    let summaries = ensemble_percentiles(&accumulated).unwrap();
    assert_eq!(summaries.len(), 6);
    for s in &summaries {
        assert!(s.min <= s.q13 && s.q13 <= s.q28);
        assert!(s.q28 <= s.q72 && s.q72 <= s.q87);
        assert!(s.q87 <= s.max);
    }
}

/// Single and accumulated variants agree at lead month 1 and diverge
/// afterwards.
#[test]
fn single_and_accumulated_bands_relate() {
    let records = history(8);
    let single = build_forecast_bands(&records, 0, BandVariant::Single).unwrap();
    let accumulated = build_forecast_bands(&records, 0, BandVariant::Accumulated).unwrap();

    assert_relative_eq!(single[0].band.mean, accumulated[0].band.mean, epsilon = 1e-12);
    // By lead 12 the accumulated track is the mean of the whole year,
    // well below December's raw values.
    assert!(accumulated[11].band.mean < single[11].band.mean);
}
