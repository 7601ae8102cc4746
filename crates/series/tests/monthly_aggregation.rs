use approx::assert_relative_eq;
use chrono::NaiveDate;
use hydrosos_series::{aggregate_monthly, fill_gaps, DailyObservation};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Gap materialization and aggregation together: one record per
/// (year, month) in the span, with gaps counted against completeness.
#[test]
fn gaps_flow_into_completeness() {
    // January 2000 days 1..=10 and 21..=31 present, 11..=20 missing
    // from the file entirely.
    let mut obs: Vec<DailyObservation> = (1..=10)
        .map(|day| DailyObservation::new(d(2000, 1, day), Some(10.0)))
        .collect();
    obs.extend((21..=31).map(|day| DailyObservation::new(d(2000, 1, day), Some(10.0))));

    let filled = fill_gaps(&obs).unwrap();
    assert_eq!(filled.len(), 31);

    let records = aggregate_monthly(&filled);
    assert_eq!(records.len(), 1);
    assert_relative_eq!(records[0].completeness, 21.0 / 31.0, epsilon = 1e-12);
    assert_eq!(records[0].mean_value, Some(10.0));
}

/// A multi-year span produces exactly one record per (year, month),
/// ordered by (year, month).
#[test]
fn one_record_per_year_month() {
    let mut obs = Vec::new();
    let mut day = d(1999, 11, 15);
    let last = d(2001, 2, 10);
    while day <= last {
        obs.push(DailyObservation::new(day, Some(1.0)));
        day = day.succ_opt().unwrap();
    }

    let records = aggregate_monthly(&obs);
    let keys: Vec<(i32, u8)> = records.iter().map(|r| (r.year, r.month)).collect();
    let expected = vec![
        (1999, 11),
        (1999, 12),
        (2000, 1),
        (2000, 2),
        (2000, 3),
        (2000, 4),
        (2000, 5),
        (2000, 6),
        (2000, 7),
        (2000, 8),
        (2000, 9),
        (2000, 10),
        (2000, 11),
        (2000, 12),
        (2001, 1),
        (2001, 2),
    ];
    assert_eq!(keys, expected);

    let mut sorted = keys.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), keys.len());
}
