//! League three-point volume and accuracy.
//!
//! Two questions in one analysis: how lopsided is attempt volume across the
//! league (quartiles + both outlier policies on attempts), and what does the
//! accuracy distribution look like once low-volume shooters are filtered out
//! (density curve of the recomputed percentage).

use anyhow::Result;
use plotters::prelude::{GREEN, RED};
use serde::Serialize;
use tracing::info;

use super::{player_ref_line, write_summary};
use crate::chart::{self, RefLine};
use crate::config::Config;
use crate::frame::{load_table, CmpOp, Delimiter};
use crate::stats::{self, Outlier, Summary};

const INPUT: &str = "league_stats.txt";

#[derive(Debug, Serialize)]
struct ThreePointReport {
    attempts_summary: Summary,
    attempts_three_sigma: Vec<Outlier>,
    attempts_tukey: Vec<Outlier>,
    /// Names flagged by both policies.
    flagged_by_both: Vec<String>,
    qualified_players: usize,
    pct_summary: Summary,
}

pub fn run(config: &Config) -> Result<()> {
    let league = load_table(&config.data_dir.join(INPUT), Delimiter::Tab)?;

    // Attempt-volume spread over the whole league, no filtering.
    let attempts = league.numbers("fg3a")?;
    let attempts_summary = Summary::describe(attempts)
        .ok_or_else(|| anyhow::anyhow!("no three-point data in {INPUT}"))?;
    info!(
        "Three-point attempts: Q1 {:.1}, median {:.1}, Q3 {:.1}, IQR {:.1}",
        attempts_summary.q1, attempts_summary.median, attempts_summary.q3, attempts_summary.iqr
    );

    // The two policies are computed independently and compared, never merged.
    let three_sigma = stats::three_sigma_outliers(&league, "player", "fg3a")?;
    let tukey = stats::tukey_outliers(&league, "player", "fg3a")?;
    let flagged_by_both: Vec<String> = tukey
        .iter()
        .filter(|t| three_sigma.iter().any(|s| s.name == t.name))
        .map(|t| t.name.clone())
        .collect();
    info!(
        "Attempt-volume outliers: {} by three-sigma, {} by Tukey fences, {} by both",
        three_sigma.len(),
        tukey.len(),
        flagged_by_both.len()
    );

    // Accuracy among qualified shooters: filter on volume, then derive.
    let qualified = league
        .filter("fg3a", CmpOp::Ge, config.min_three_pt_attempts)?
        .with_ratio("fg3_pct", "fg3m", "fg3a")?;
    let pct = qualified.numbers("fg3_pct")?;
    let pct_summary = Summary::describe(pct)
        .ok_or_else(|| anyhow::anyhow!("no qualified three-point shooters"))?;
    info!(
        "Three-point accuracy: {} qualified players, mean {:.3}",
        qualified.len(),
        pct_summary.mean
    );

    let mut refs = vec![RefLine::vertical(
        pct_summary.mean,
        format!("league mean ({:.3})", pct_summary.mean),
        RED,
    )];
    refs.extend(player_ref_line(&qualified, "Stephen Curry", "fg3_pct", GREEN)?);

    chart::density(
        &config.out_dir.join("three_point_pct_density.png"),
        "Three-point percentage, qualified players",
        "three-point percentage",
        pct,
        &refs,
    )?;

    write_summary(
        &config.out_dir,
        "three_pointers",
        &ThreePointReport {
            attempts_summary,
            attempts_three_sigma: three_sigma,
            attempts_tukey: tukey,
            flagged_by_both,
            qualified_players: qualified.len(),
            pct_summary,
        },
    )
}
