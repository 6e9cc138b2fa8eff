//! Frame transformations: derived ratio columns and row filters.
//!
//! Both operations return a *new* frame and leave the input untouched.
//! Derive-then-filter and filter-then-derive are not interchangeable — e.g.
//! filtering on attempt count before computing a shooting percentage changes
//! which players are considered significant — so the caller always states the
//! order explicitly by chaining the calls.

use super::{Column, Frame};
use crate::error::DataError;

/// Comparison operator for threshold filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl CmpOp {
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            CmpOp::Lt => value < threshold,
            CmpOp::Le => value <= threshold,
            CmpOp::Gt => value > threshold,
            CmpOp::Ge => value >= threshold,
            CmpOp::Eq => value == threshold,
        }
    }
}

impl Frame {
    /// Append a derived column `name = numer / denom` computed row-wise from
    /// two existing numeric columns.
    ///
    /// A zero denominator yields NaN for that row — never a silent zero and
    /// never an error — so one attempt-less player cannot halt the whole
    /// computation. NaN rows are excluded from downstream aggregates.
    pub fn with_ratio(&self, name: &str, numer: &str, denom: &str) -> Result<Frame, DataError> {
        let num = self.numbers(numer)?;
        let den = self.numbers(denom)?;
        let ratio = num
            .iter()
            .zip(den)
            .map(|(&n, &d)| if d == 0.0 { f64::NAN } else { n / d })
            .collect();
        Ok(self.with_column(name.to_string(), Column::Number(ratio)))
    }

    /// Rows where `column <op> threshold` holds, preserving original order.
    ///
    /// NaN values fail every comparison, so rows with an undefined derived
    /// value drop out of any threshold filter.
    pub fn filter(&self, column: &str, op: CmpOp, threshold: f64) -> Result<Frame, DataError> {
        let values = self.numbers(column)?;
        let rows: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, &v)| op.holds(v, threshold))
            .map(|(i, _)| i)
            .collect();
        Ok(self.take_rows(&rows))
    }

    /// Rows where a text column equals `value` exactly, preserving order.
    pub fn filter_text_eq(&self, column: &str, value: &str) -> Result<Frame, DataError> {
        let cells = self.texts(column)?;
        let rows: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_str() == value)
            .map(|(i, _)| i)
            .collect();
        Ok(self.take_rows(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn league() -> Frame {
        Frame::from_columns(
            "league".into(),
            vec![
                (
                    "player".into(),
                    Column::Text(vec![
                        "Curry".into(),
                        "James".into(),
                        "Gobert".into(),
                        "Bench".into(),
                    ]),
                ),
                ("ftm".into(), Column::Number(vec![20.0, 30.0, 5.0, 0.0])),
                ("fta".into(), Column::Number(vec![47.0, 40.0, 12.0, 0.0])),
            ],
        )
    }

    #[test]
    fn ratio_matches_hand_computation() {
        let f = league().with_ratio("ft_pct", "ftm", "fta").unwrap();
        let pct = f.numbers("ft_pct").unwrap();
        assert_relative_eq!(pct[0], 20.0 / 47.0, epsilon = 1e-12);
        assert_relative_eq!(pct[0], 0.4255, epsilon = 1e-4);
    }

    #[test]
    fn zero_denominator_yields_nan_not_zero() {
        let f = league().with_ratio("ft_pct", "ftm", "fta").unwrap();
        let pct = f.numbers("ft_pct").unwrap();
        assert!(pct[3].is_nan());
        // Every defined percentage stays inside [0, 1]
        for &p in &pct[..3] {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn filter_is_a_subset_preserving_order() {
        let f = league();
        let sub = f.filter("fta", CmpOp::Ge, 20.0).unwrap();
        assert_eq!(sub.len(), 2);
        let names = sub.texts("player").unwrap();
        assert_eq!(names, &["Curry".to_string(), "James".to_string()]);
    }

    #[test]
    fn derive_then_filter_differs_from_filter_then_derive() {
        // Deriving first keeps Gobert's 5/12 row eligible for a percentage
        // filter; filtering on attempts >= 20 first removes him entirely.
        let derived_first = league()
            .with_ratio("ft_pct", "ftm", "fta")
            .unwrap()
            .filter("ft_pct", CmpOp::Ge, 0.40)
            .unwrap();
        let filtered_first = league()
            .filter("fta", CmpOp::Ge, 20.0)
            .unwrap()
            .with_ratio("ft_pct", "ftm", "fta")
            .unwrap()
            .filter("ft_pct", CmpOp::Ge, 0.40)
            .unwrap();

        let a: Vec<_> = derived_first.texts("player").unwrap().to_vec();
        let b: Vec<_> = filtered_first.texts("player").unwrap().to_vec();
        assert!(a.contains(&"Gobert".to_string()));
        assert!(!b.contains(&"Gobert".to_string()));
        assert_ne!(a, b);
    }

    #[test]
    fn nan_rows_fail_every_threshold() {
        let f = league().with_ratio("ft_pct", "ftm", "fta").unwrap();
        let kept = f.filter("ft_pct", CmpOp::Ge, 0.0).unwrap();
        // The 0-attempt row has a NaN percentage and must drop out.
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn text_equality_filter() {
        let f = Frame::from_columns(
            "shots".into(),
            vec![
                (
                    "shot_type".into(),
                    Column::Text(vec!["pullup".into(), "catch_and_shoot".into(), "pullup".into()]),
                ),
                ("x".into(), Column::Number(vec![1.0, 2.0, 3.0])),
            ],
        );
        let pullups = f.filter_text_eq("shot_type", "pullup").unwrap();
        assert_eq!(pullups.numbers("x").unwrap(), &[1.0, 3.0]);
    }
}
