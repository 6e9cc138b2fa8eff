//! Outlier detection over a labeled numeric column.
//!
//! Two independent policies, deliberately not interchangeable:
//!
//! - **Three-sigma**: flag values exceeding `mean + 3σ`. One-sided — it only
//!   catches unusually *large* values (a player attempting far more shots
//!   than the league, never far fewer).
//! - **Tukey fences**: flag values outside `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]`.
//!   Two-sided and robust to the very outliers it hunts.
//!
//! The two sets can differ on the same data; callers that want both must
//! compute both and compare explicitly.

use serde::Serialize;

use super::{mean, quantile, std_dev, IQR_FENCE_MULTIPLIER};
use crate::error::DataError;
use crate::frame::Frame;

/// One flagged row: identifying label plus the offending value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outlier {
    pub name: String,
    pub value: f64,
}

fn labeled(frame: &Frame, label_col: &str, value_col: &str) -> Result<Vec<Outlier>, DataError> {
    let labels = frame.texts(label_col)?;
    let values = frame.numbers(value_col)?;
    Ok(labels
        .iter()
        .zip(values)
        .map(|(name, &value)| Outlier {
            name: name.clone(),
            value,
        })
        .collect())
}

/// Rows whose value exceeds the column mean by more than three (population)
/// standard deviations. Original row order is preserved.
pub fn three_sigma_outliers(
    frame: &Frame,
    label_col: &str,
    value_col: &str,
) -> Result<Vec<Outlier>, DataError> {
    let values = frame.numbers(value_col)?;
    let (m, sd) = match (mean(values), std_dev(values)) {
        (Some(m), Some(sd)) => (m, sd),
        _ => return Ok(Vec::new()),
    };
    let cutoff = m + 3.0 * sd;
    Ok(labeled(frame, label_col, value_col)?
        .into_iter()
        .filter(|o| o.value.is_finite() && o.value > cutoff)
        .collect())
}

/// Tukey fences for a column: `(Q1 − 1.5·IQR, Q3 + 1.5·IQR)`.
pub fn tukey_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some((
        q1 - IQR_FENCE_MULTIPLIER * iqr,
        q3 + IQR_FENCE_MULTIPLIER * iqr,
    ))
}

/// Rows falling outside the Tukey fences. Original row order is preserved.
pub fn tukey_outliers(
    frame: &Frame,
    label_col: &str,
    value_col: &str,
) -> Result<Vec<Outlier>, DataError> {
    let values = frame.numbers(value_col)?;
    let (lo, hi) = match tukey_bounds(values) {
        Some(b) => b,
        None => return Ok(Vec::new()),
    };
    Ok(labeled(frame, label_col, value_col)?
        .into_iter()
        .filter(|o| o.value.is_finite() && (o.value < lo || o.value > hi))
        .collect())
}
