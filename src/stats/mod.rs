//! Descriptive statistics over a numeric column.
//!
//! Every function ignores non-finite values (NaN marks an undefined entry,
//! e.g. a ratio with a zero denominator), so one attempt-less player never
//! poisons a league-wide aggregate. Quantiles use linear interpolation
//! between order statistics, the same convention as numpy's default.

pub mod outliers;

pub use outliers::{three_sigma_outliers, tukey_bounds, tukey_outliers, Outlier};

use std::collections::BTreeMap;

use serde::Serialize;

/// Fence multiplier for Tukey-style outlier detection (Q3 + 1.5·IQR etc.).
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Finite values only, sorted ascending.
fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    v
}

/// Arithmetic mean, or None when no finite values remain.
pub fn mean(values: &[f64]) -> Option<f64> {
    let v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if v.is_empty() {
        return None;
    }
    Some(v.iter().sum::<f64>() / v.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    let m = mean(&v)?;
    let var = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / v.len() as f64;
    Some(var.sqrt())
}

/// Median: middle element for odd counts, average of the two middles for even.
pub fn median(values: &[f64]) -> Option<f64> {
    let v = sorted_finite(values);
    if v.is_empty() {
        return None;
    }
    let n = v.len();
    if n % 2 == 0 {
        Some((v[n / 2 - 1] + v[n / 2]) / 2.0)
    } else {
        Some(v[n / 2])
    }
}

/// Bucket a float for frequency counting (1e-6 resolution).
fn freq_key(value: f64) -> i64 {
    (value * 1e6).round() as i64
}

/// All values sharing the maximum frequency, ascending.
///
/// This is the "return all ties" mode convention: on [1,1,2,2,3] it returns
/// [1, 2], never an arbitrary pick.
pub fn mode_all(values: &[f64]) -> Vec<f64> {
    let mut freq: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in values.iter().filter(|x| x.is_finite()) {
        *freq.entry(freq_key(v)).or_insert(0) += 1;
    }
    let max = match freq.values().copied().max() {
        Some(m) => m,
        None => return Vec::new(),
    };
    freq.into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(key, _)| key as f64 / 1e6)
        .collect()
}

/// Single-result mode convention: the *lowest* of the tied values.
pub fn mode_single(values: &[f64]) -> Option<f64> {
    mode_all(values).into_iter().next()
}

/// Quantile via linear interpolation between order statistics.
/// `p` is a fraction in [0, 1]; p = 0.25 is the first quartile.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    debug_assert!((0.0..=1.0).contains(&p), "quantile fraction out of range");
    let v = sorted_finite(values);
    if v.is_empty() {
        return None;
    }
    let n = v.len();
    if n == 1 {
        return Some(v[0]);
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    Some(v[lo] + (h - lo as f64) * (v[hi] - v[lo]))
}

/// Five-number summary plus mean, standard deviation, and IQR.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub iqr: f64,
}

impl Summary {
    /// Compute the summary, ignoring NaN entries. None when nothing remains.
    pub fn describe(values: &[f64]) -> Option<Summary> {
        let v = sorted_finite(values);
        if v.is_empty() {
            return None;
        }
        let q1 = quantile(&v, 0.25)?;
        let q3 = quantile(&v, 0.75)?;
        Some(Summary {
            count: v.len(),
            min: v[0],
            q1,
            median: median(&v)?,
            q3,
            max: v[v.len() - 1],
            mean: mean(&v)?,
            std_dev: std_dev(&v)?,
            iqr: q3 - q1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn median_of_odd_sequence_is_middle_element() {
        assert_relative_eq!(median(&[1.0, 3.0, 5.0]).unwrap(), 3.0);
        assert_relative_eq!(median(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn median_of_even_sequence_averages_middles() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn mode_all_returns_every_tie() {
        let modes = mode_all(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(modes, vec![1.0, 2.0]);
    }

    #[test]
    fn mode_single_picks_lowest_tie() {
        // Documented convention: among tied values, the lowest wins.
        assert_relative_eq!(mode_single(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn quartiles_of_attempt_counts_are_reproducible() {
        // Three-point attempts for six players; linear interpolation pins
        // these to exact literals.
        let attempts = [5.0, 13.0, 13.0, 70.0, 165.0, 572.0];
        assert_relative_eq!(quantile(&attempts, 0.0).unwrap(), 5.0);
        assert_relative_eq!(quantile(&attempts, 0.25).unwrap(), 13.0);
        assert_relative_eq!(quantile(&attempts, 0.5).unwrap(), 41.5);
        assert_relative_eq!(quantile(&attempts, 0.75).unwrap(), 141.25);
        assert_relative_eq!(quantile(&attempts, 1.0).unwrap(), 572.0);
    }

    #[test]
    fn nan_values_are_excluded_from_aggregates() {
        let values = [1.0, f64::NAN, 3.0];
        assert_relative_eq!(mean(&values).unwrap(), 2.0);
        let s = Summary::describe(&values).unwrap();
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.median, 2.0);
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(mean(&[]).is_none());
        assert!(median(&[f64::NAN]).is_none());
        assert!(Summary::describe(&[]).is_none());
        assert!(mode_all(&[]).is_empty());
    }

    #[test]
    fn summary_iqr_matches_quartiles() {
        let attempts = [5.0, 13.0, 13.0, 70.0, 165.0, 572.0];
        let s = Summary::describe(&attempts).unwrap();
        assert_relative_eq!(s.iqr, 141.25 - 13.0);
        assert_relative_eq!(s.q3, 141.25);
    }
}
