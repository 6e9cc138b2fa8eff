//! League free-throw accuracy.
//!
//! Filters the season snapshot to players with a meaningful number of
//! attempts *before* deriving the percentage (the order matters: deriving
//! first would let a 3-for-3 bench player look perfect), then summarizes the
//! distribution and renders a histogram with reference lines for the league
//! mean and a couple of notable shooters. Both outlier policies run
//! separately: Tukey fences catch the famously poor shooters in the lower
//! tail, the one-sided three-sigma rule looks only above the mean.

use anyhow::Result;
use plotters::prelude::{GREEN, MAGENTA, RED};
use serde::Serialize;
use tracing::info;

use super::{player_ref_line, write_summary};
use crate::chart::{self, RefLine};
use crate::config::Config;
use crate::frame::{load_table, CmpOp, Delimiter};
use crate::stats::{self, Outlier, Summary};

const INPUT: &str = "league_stats.txt";
const HIST_BIN_WIDTH: f64 = 0.05;

#[derive(Debug, Serialize)]
struct FreeThrowReport {
    eligible_players: usize,
    summary: Summary,
    /// All tied modal percentages ("all ties" convention).
    mode_all: Vec<f64>,
    three_sigma_outliers: Vec<Outlier>,
    tukey_outliers: Vec<Outlier>,
}

pub fn run(config: &Config) -> Result<()> {
    let league = load_table(&config.data_dir.join(INPUT), Delimiter::Tab)?;

    // Filter on attempts first, then derive; percentages are always
    // recomputed from made/attempted, never trusted from the source file.
    let eligible = league
        .filter("fta", CmpOp::Ge, config.min_ft_attempts)?
        .with_ratio("ft_pct", "ftm", "fta")?;

    let pct = eligible.numbers("ft_pct")?;
    let summary = Summary::describe(pct)
        .ok_or_else(|| anyhow::anyhow!("no eligible players in {INPUT}"))?;
    info!(
        "Free throws: {} of {} players with >= {} attempts, mean {:.3}, median {:.3}",
        eligible.len(),
        league.len(),
        config.min_ft_attempts,
        summary.mean,
        summary.median
    );

    let mode_all = stats::mode_all(pct);

    let three_sigma = stats::three_sigma_outliers(&eligible, "player", "ft_pct")?;
    let tukey = stats::tukey_outliers(&eligible, "player", "ft_pct")?;
    for o in &three_sigma {
        info!("Three-sigma outlier: {} at {:.3}", o.name, o.value);
    }
    for o in &tukey {
        info!("Tukey-fence outlier: {} at {:.3}", o.name, o.value);
    }
    if three_sigma.is_empty() && !tukey.is_empty() {
        info!("Outlier policies disagree: all flagged shooters sit below the lower Tukey fence");
    }

    let mut refs = vec![RefLine::vertical(
        summary.mean,
        format!("league mean ({:.3})", summary.mean),
        RED,
    )];
    refs.extend(player_ref_line(&eligible, "Stephen Curry", "ft_pct", GREEN)?);
    refs.extend(player_ref_line(&eligible, "Andre Drummond", "ft_pct", MAGENTA)?);

    chart::histogram(
        &config.out_dir.join("free_throw_pct_hist.png"),
        "Free-throw percentage, qualified players",
        "free-throw percentage",
        pct,
        HIST_BIN_WIDTH,
        &refs,
    )?;

    write_summary(
        &config.out_dir,
        "free_throws",
        &FreeThrowReport {
            eligible_players: eligible.len(),
            summary,
            mode_all,
            three_sigma_outliers: three_sigma,
            tukey_outliers: tukey,
        },
    )
}
