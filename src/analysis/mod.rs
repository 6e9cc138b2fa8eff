//! The five report analyses.
//!
//! Each analysis is an independent instantiation of the same linear pipeline:
//! load one or two tables, derive/filter, summarize, render. A failure in one
//! analysis aborts the run at that point — the dataset is static and a rerun
//! is cheap, so there is no partial-results recovery.

pub mod best_season;
pub mod curry_shots;
pub mod free_throws;
pub mod lebron_shots;
pub mod three_pointers;

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use plotters::style::RGBColor;
use serde::Serialize;
use tracing::info;

use crate::chart::RefLine;
use crate::config::Config;
use crate::frame::Frame;

type RunFn = fn(&Config) -> Result<()>;

/// The analyses in run order; the single source of truth for both dispatch
/// and `--only` validation.
const RUNS: [(&str, RunFn); 5] = [
    ("free_throws", free_throws::run),
    ("three_pointers", three_pointers::run),
    ("best_season", best_season::run),
    ("curry_shots", curry_shots::run),
    ("lebron_shots", lebron_shots::run),
];

/// Analysis names accepted by `--only`, in run order.
pub fn names() -> [&'static str; 5] {
    RUNS.map(|(name, _)| name)
}

/// Run every analysis (or the one selected by `--only`) sequentially.
pub fn run_all(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("cannot create output directory '{}'", config.out_dir.display())
    })?;

    for (name, run) in RUNS {
        if let Some(only) = &config.only {
            if only != name {
                continue;
            }
        }
        info!("=== Analysis: {name} ===");
        run(config).with_context(|| format!("analysis '{name}' failed"))?;
    }
    Ok(())
}

/// Write the per-analysis JSON stats artifact next to its chart.
pub(crate) fn write_summary<T: Serialize>(out_dir: &Path, name: &str, report: &T) -> Result<()> {
    let path = out_dir.join(format!("{name}_summary.json"));
    let file = File::create(&path)
        .with_context(|| format!("cannot create '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, report)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Reference line marking one named player's value against the distribution.
/// Returns None (with a log line) when the player is absent from the table.
pub(crate) fn player_ref_line(
    frame: &Frame,
    player: &str,
    value_col: &str,
    color: RGBColor,
) -> Result<Option<RefLine>> {
    let names = frame.texts("player")?;
    let values = frame.numbers(value_col)?;
    match names.iter().position(|n| n == player) {
        Some(i) if values[i].is_finite() => Ok(Some(RefLine::vertical(
            values[i],
            format!("{player} ({:.3})", values[i]),
            color,
        ))),
        _ => {
            info!("No {value_col} value for '{player}', skipping reference line");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;
    use plotters::prelude::RED;

    #[test]
    fn player_ref_line_finds_the_player() {
        let f = Frame::from_columns(
            "t".into(),
            vec![
                (
                    "player".into(),
                    Column::Text(vec!["Stephen Curry".into(), "LeBron James".into()]),
                ),
                ("ft_pct".into(), Column::Number(vec![0.908, 0.731])),
            ],
        );
        let line = player_ref_line(&f, "Stephen Curry", "ft_pct", RED)
            .unwrap()
            .unwrap();
        assert!((line.value - 0.908).abs() < 1e-12);
        assert!(line.label.contains("Curry"));
    }

    #[test]
    fn names_match_the_dispatch_table() {
        let names = names();
        assert_eq!(names.len(), RUNS.len());
        for ((name, _), listed) in RUNS.iter().zip(names) {
            assert_eq!(*name, listed);
        }
    }

    #[test]
    fn player_ref_line_skips_missing_player() {
        let f = Frame::from_columns(
            "t".into(),
            vec![
                ("player".into(), Column::Text(vec!["A".into()])),
                ("v".into(), Column::Number(vec![1.0])),
            ],
        );
        assert!(player_ref_line(&f, "Nobody", "v", RED).unwrap().is_none());
    }
}
