//! Five-category flow status assignment.

use crate::thresholds::MonthStatistics;

/// Upper rank boundary of the Low category.
pub const LOW_MAX_RANK: f64 = 0.13;

/// Upper rank boundary of the BelowNormal category.
pub const BELOW_NORMAL_MAX_RANK: f64 = 0.28;

/// Upper rank boundary of the Normal category.
///
/// Inherited from the reference R implementation, which uses 0.71999
/// rather than 0.72; kept exactly for output compatibility even though
/// it leaves a one-ulp asymmetry against the threshold scheme.
pub const NORMAL_MAX_RANK: f64 = 0.71999;

/// Upper rank boundary of the AboveNormal category.
pub const ABOVE_NORMAL_MAX_RANK: f64 = 0.86999;

/// Ordinal flow status on the drought-to-flood scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum StatusCategory {
    /// Notably low flow (category 1).
    Low = 1,
    /// Below-normal flow (category 2).
    BelowNormal = 2,
    /// Normal flow (category 3).
    Normal = 3,
    /// Above-normal flow (category 4).
    AboveNormal = 4,
    /// Notably high flow (category 5).
    High = 5,
}

impl StatusCategory {
    /// Numeric category in 1..=5.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Fixed-rank scheme: maps a Weibull rank to a category using the
/// inherited cutoffs.
///
/// A null rank (month below the completeness gate) yields no
/// category, never a numeric default. A rank above 1 is out of the
/// plotting-position range and also yields no category.
pub fn classify_rank(rank: Option<f64>) -> Option<StatusCategory> {
    let rank = rank?;
    if rank <= LOW_MAX_RANK {
        Some(StatusCategory::Low)
    } else if rank <= BELOW_NORMAL_MAX_RANK {
        Some(StatusCategory::BelowNormal)
    } else if rank <= NORMAL_MAX_RANK {
        Some(StatusCategory::Normal)
    } else if rank <= ABOVE_NORMAL_MAX_RANK {
        Some(StatusCategory::AboveNormal)
    } else if rank <= 1.0 {
        Some(StatusCategory::High)
    } else {
        None
    }
}

/// Climatology-threshold scheme: maps a percent-of-average value to a
/// category using the month's interpolated thresholds.
///
/// A null value yields no category.
pub fn classify_percent(percent: Option<f64>, stats: &MonthStatistics) -> Option<StatusCategory> {
    let percent = percent?;
    if percent <= stats.q10() {
        Some(StatusCategory::Low)
    } else if percent <= stats.q25() {
        Some(StatusCategory::BelowNormal)
    } else if percent <= stats.q75() {
        Some(StatusCategory::Normal)
    } else if percent <= stats.q90() {
        Some(StatusCategory::AboveNormal)
    } else {
        Some(StatusCategory::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_scheme_boundaries() {
        assert_eq!(classify_rank(Some(0.13)), Some(StatusCategory::Low));
        assert_eq!(classify_rank(Some(0.131)), Some(StatusCategory::BelowNormal));
        assert_eq!(classify_rank(Some(0.28)), Some(StatusCategory::BelowNormal));
        assert_eq!(classify_rank(Some(0.5)), Some(StatusCategory::Normal));
        assert_eq!(classify_rank(Some(0.71999)), Some(StatusCategory::Normal));
        // 0.72 already falls in AboveNormal under the inherited cutoff.
        assert_eq!(classify_rank(Some(0.72)), Some(StatusCategory::AboveNormal));
        assert_eq!(classify_rank(Some(0.86999)), Some(StatusCategory::AboveNormal));
        assert_eq!(classify_rank(Some(0.87)), Some(StatusCategory::High));
        assert_eq!(classify_rank(Some(1.0)), Some(StatusCategory::High));
    }

    #[test]
    fn fixed_scheme_null_and_out_of_range() {
        assert_eq!(classify_rank(None), None);
        assert_eq!(classify_rank(Some(1.01)), None);
    }

    #[test]
    fn fixed_scheme_monotonic() {
        let mut last = StatusCategory::Low;
        for i in 1..=100 {
            let rank = i as f64 / 100.0;
            let cat = classify_rank(Some(rank)).unwrap();
            assert!(cat >= last, "category regressed at rank {rank}");
            last = cat;
        }
    }

    #[test]
    fn threshold_scheme_boundaries() {
        let stats = MonthStatistics::new([50.0, 80.0, 120.0, 150.0], 40.0, 100.0, 160.0);
        assert_eq!(classify_percent(Some(40.0), &stats), Some(StatusCategory::Low));
        assert_eq!(classify_percent(Some(50.0), &stats), Some(StatusCategory::Low));
        assert_eq!(
            classify_percent(Some(80.0), &stats),
            Some(StatusCategory::BelowNormal)
        );
        assert_eq!(
            classify_percent(Some(100.0), &stats),
            Some(StatusCategory::Normal)
        );
        assert_eq!(
            classify_percent(Some(150.0), &stats),
            Some(StatusCategory::AboveNormal)
        );
        assert_eq!(
            classify_percent(Some(150.1), &stats),
            Some(StatusCategory::High)
        );
        assert_eq!(classify_percent(None, &stats), None);
    }

    #[test]
    fn category_ordering_and_values() {
        assert!(StatusCategory::Low < StatusCategory::High);
        assert_eq!(StatusCategory::Low.as_u8(), 1);
        assert_eq!(StatusCategory::Normal.as_u8(), 3);
        assert_eq!(StatusCategory::High.as_u8(), 5);
    }
}
