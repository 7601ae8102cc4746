//! Weibull plotting-position ranks and rank-table interpolation.

/// Weibull plotting-position ranks for a calendar-month group.
///
/// Each non-null value receives `ordinal_rank / (n + 1)` where `n` is
/// the number of non-null values in the group and ties share the
/// average of their ordinal positions. Null entries stay null and are
/// never counted toward `n`.
///
/// The output is aligned with the input: `out[i]` is the rank of
/// `values[i]`.
pub fn weibull_ranks(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut present: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|x| (i, x)))
        .collect();

    let n = present.len();
    let mut out = vec![None; values.len()];
    if n == 0 {
        return out;
    }

    present.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let denom = (n + 1) as f64;
    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && present[end].1 == present[start].1 {
            end += 1;
        }
        // Average of the 1-based ordinal positions start+1 ..= end.
        let avg_ordinal = (start + 1 + end) as f64 / 2.0;
        for &(idx, _) in &present[start..end] {
            out[idx] = Some(avg_ordinal / denom);
        }
        start = end;
    }

    out
}

/// Sorted `(rank, value)` pairs for one calendar month of the
/// reference period, supporting interpolation at arbitrary target
/// ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    entries: Vec<(f64, f64)>,
}

impl RankTable {
    /// Pairs up ranks and values where both are present, sorted by rank.
    ///
    /// The two slices must be aligned; entries where either side is
    /// null are dropped.
    pub fn from_ranked(ranks: &[Option<f64>], values: &[Option<f64>]) -> Self {
        let mut entries: Vec<(f64, f64)> = ranks
            .iter()
            .zip(values.iter())
            .filter_map(|(r, v)| r.zip(*v))
            .collect();
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { entries }
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no ranked entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpolated value at an arbitrary target rank.
    ///
    /// Finds the closest observed rank at or below the target
    /// (`lower`) and the closest at or above it (`upper`):
    ///
    /// - both exist with equal values (the target matches an observed
    ///   rank, or the neighbours are tied): that value;
    /// - no `upper` (target above all observed ranks): the lower value;
    /// - no `lower` (target below all observed ranks): the upper value;
    /// - otherwise linear interpolation between the two.
    ///
    /// Returns `None` only for an empty table.
    pub fn interpolate(&self, target: f64) -> Option<f64> {
        let lower = self
            .entries
            .iter()
            .rev()
            .find(|(rank, _)| *rank <= target);
        let upper = self.entries.iter().find(|(rank, _)| *rank >= target);

        match (lower, upper) {
            (Some(&(lo_rank, lo_val)), Some(&(hi_rank, hi_val))) => {
                if lo_val == hi_val {
                    Some(lo_val)
                } else {
                    Some(lo_val + ((target - lo_rank) / (hi_rank - lo_rank)) * (hi_val - lo_val))
                }
            }
            (Some(&(_, lo_val)), None) => Some(lo_val),
            (None, Some(&(_, hi_val))) => Some(hi_val),
            (None, None) => None,
        }
    }

    /// Minimum of the ranked values.
    pub fn value_min(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, v)| *v)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Maximum of the ranked values.
    pub fn value_max(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, v)| *v)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Median of the ranked values.
    pub fn value_median(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sorted = crate::sorted_copy(&self.entries.iter().map(|(_, v)| *v).collect::<Vec<_>>());
        Some(crate::median(&sorted))
    }
}
