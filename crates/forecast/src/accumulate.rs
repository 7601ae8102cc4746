//! Expanding (cumulative) means.

/// Expanding arithmetic mean: `out[i]` is the mean of `values[0..=i]`.
///
/// A single running-sum fold, no windowing.
pub fn expanding_mean(values: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            sum += v;
            sum / (i + 1) as f64
        })
        .collect()
}

/// Expanding mean over an optional series: nulls are skipped rather
/// than poisoning the running mean, and the output stays null until
/// the first non-null value arrives.
pub fn expanding_mean_optional(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut sum = 0.0;
    let mut count = 0usize;
    values
        .iter()
        .map(|v| {
            if let Some(x) = v {
                sum += x;
                count += 1;
            }
            if count == 0 {
                None
            } else {
                Some(sum / count as f64)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn expanding_mean_basic() {
        let out = expanding_mean(&[2.0, 4.0, 6.0]);
        assert_relative_eq!(out[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(out[2], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn expanding_mean_empty() {
        assert!(expanding_mean(&[]).is_empty());
    }

    #[test]
    fn expanding_mean_single() {
        assert_eq!(expanding_mean(&[5.0]), vec![5.0]);
    }

    #[test]
    fn optional_skips_nulls() {
        let out = expanding_mean_optional(&[Some(2.0), None, Some(4.0)]);
        assert_eq!(out[0], Some(2.0));
        assert_eq!(out[1], Some(2.0));
        assert_eq!(out[2], Some(3.0));
    }

    #[test]
    fn optional_leading_nulls_stay_null() {
        let out = expanding_mean_optional(&[None, None, Some(6.0)]);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert_eq!(out[2], Some(6.0));
    }
}
