//! Game-by-game look at the best three-point season on record
//! (Stephen Curry, 2015-16, 402 makes).
//!
//! Per-game percentages are recomputed from made/attempted; the percentage
//! column shipped in the source file is rounded and is ignored. The report
//! carries the distribution of those recomputed percentages and the best
//! single game, and the scatter shows makes per game against a
//! season-average reference line. Makes per game is a small-integer count,
//! so this is the one place the single-result mode convention (lowest tied
//! value) is used alongside the mean and median.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use plotters::prelude::RED;
use serde::Serialize;
use tracing::info;

use super::write_summary;
use crate::chart::{self, RefLine, ScatterOptions};
use crate::config::Config;
use crate::frame::{load_table, Delimiter, Frame};
use crate::stats::{self, Summary};

const INPUT: &str = "best_three_pt_season.txt";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
struct BestSeasonReport {
    games: usize,
    season_days: i64,
    makes_summary: Summary,
    /// Single-result mode of makes per game (lowest tied value).
    makes_mode: Option<f64>,
    /// Distribution of per-game percentages recomputed from made/attempted.
    per_game_pct_summary: Summary,
    best_game: GameLine,
    season_pct: f64,
}

/// One game from the log, identified for the report.
#[derive(Debug, Serialize)]
struct GameLine {
    game: f64,
    date: String,
    opponent: String,
    fg3m: f64,
    fg3a: f64,
    pct: f64,
}

pub fn run(config: &Config) -> Result<()> {
    let games = load_table(&config.data_dir.join(INPUT), Delimiter::Tab)?;
    let per_game = games.with_ratio("fg3_pct_calc", "fg3m", "fg3a")?;
    let report = build_report(&per_game)?;

    info!(
        "Best season: {} games over {} days, season percentage {:.3}, per-game mean {:.3}",
        report.games, report.season_days, report.season_pct, report.per_game_pct_summary.mean
    );
    info!(
        "Best game: #{:.0} vs {} on {}, {:.0}-of-{:.0} ({:.3})",
        report.best_game.game,
        report.best_game.opponent,
        report.best_game.date,
        report.best_game.fg3m,
        report.best_game.fg3a,
        report.best_game.pct
    );

    let makes = per_game.numbers("fg3m")?;
    let game_no = per_game.numbers("game")?;
    let points: Vec<(f64, f64)> = game_no.iter().copied().zip(makes.iter().copied()).collect();
    let refs = [RefLine::horizontal(
        report.makes_summary.mean,
        format!("season average ({:.2} makes)", report.makes_summary.mean),
        RED,
    )];

    chart::scatter(
        &config.out_dir.join("best_season_makes.png"),
        "Three-pointers made per game, record season",
        "game number",
        "three-pointers made",
        &points,
        ScatterOptions::default(),
        &refs,
    )?;

    write_summary(&config.out_dir, "best_season", &report)
}

/// Summarize a game log that already carries the recomputed
/// `fg3_pct_calc` column.
fn build_report(per_game: &Frame) -> Result<BestSeasonReport> {
    let makes = per_game.numbers("fg3m")?;
    let attempts = per_game.numbers("fg3a")?;
    let pct = per_game.numbers("fg3_pct_calc")?;

    let makes_summary = Summary::describe(makes)
        .ok_or_else(|| anyhow::anyhow!("no games in the season log"))?;
    let per_game_pct_summary = Summary::describe(pct)
        .ok_or_else(|| anyhow::anyhow!("no per-game percentages in the season log"))?;

    // Season-long percentage from the raw totals, not an average of
    // per-game percentages.
    let total_makes: f64 = makes.iter().sum();
    let total_attempts: f64 = attempts.iter().sum();
    let season_pct = total_makes / total_attempts;

    // Best single game by recomputed percentage; earlier game wins ties.
    let mut best: Option<usize> = None;
    for (i, &p) in pct.iter().enumerate() {
        if p.is_finite() && best.map_or(true, |b| p > pct[b]) {
            best = Some(i);
        }
    }
    let best = best.ok_or_else(|| anyhow::anyhow!("no defined per-game percentage"))?;
    let best_game = GameLine {
        game: per_game.numbers("game")?[best],
        date: per_game.texts("date")?[best].clone(),
        opponent: per_game.texts("opponent")?[best].clone(),
        fg3m: makes[best],
        fg3a: attempts[best],
        pct: pct[best],
    };

    Ok(BestSeasonReport {
        games: per_game.len(),
        season_days: season_span_days(per_game.texts("date")?)?,
        makes_summary,
        makes_mode: stats::mode_single(makes),
        per_game_pct_summary,
        best_game,
        season_pct,
    })
}

/// Days between the first and last game dates in the log.
fn season_span_days(dates: &[String]) -> Result<i64> {
    let mut parsed = Vec::with_capacity(dates.len());
    for d in dates {
        let date = NaiveDate::parse_from_str(d, DATE_FORMAT)
            .with_context(|| format!("bad game date '{d}'"))?;
        parsed.push(date);
    }
    let first = parsed.iter().min().copied();
    let last = parsed.iter().max().copied();
    match (first, last) {
        (Some(a), Some(b)) => Ok((b - a).num_days()),
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;
    use approx::assert_relative_eq;

    fn game_log() -> Frame {
        Frame::from_columns(
            "season".into(),
            vec![
                ("game".into(), Column::Number(vec![1.0, 2.0, 3.0])),
                (
                    "date".into(),
                    Column::Text(vec![
                        "2015-10-27".into(),
                        "2015-10-30".into(),
                        "2015-10-31".into(),
                    ]),
                ),
                (
                    "opponent".into(),
                    Column::Text(vec!["NOP".into(), "HOU".into(), "NOP".into()]),
                ),
                ("fg3m".into(), Column::Number(vec![5.0, 5.0, 8.0])),
                ("fg3a".into(), Column::Number(vec![12.0, 9.0, 12.0])),
            ],
        )
    }

    #[test]
    fn report_carries_recomputed_per_game_percentages() {
        let per_game = game_log().with_ratio("fg3_pct_calc", "fg3m", "fg3a").unwrap();
        let report = build_report(&per_game).unwrap();
        // Per-game percentages 5/12, 5/9, 8/12 recomputed from raw counts
        assert_eq!(report.per_game_pct_summary.count, 3);
        assert_relative_eq!(
            report.per_game_pct_summary.mean,
            (5.0 / 12.0 + 5.0 / 9.0 + 8.0 / 12.0) / 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(report.per_game_pct_summary.min, 5.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(report.per_game_pct_summary.max, 8.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn best_game_is_chosen_by_recomputed_percentage() {
        let per_game = game_log().with_ratio("fg3_pct_calc", "fg3m", "fg3a").unwrap();
        let report = build_report(&per_game).unwrap();
        assert_relative_eq!(report.best_game.game, 3.0);
        assert_eq!(report.best_game.opponent, "NOP");
        assert_relative_eq!(report.best_game.pct, 8.0 / 12.0, epsilon = 1e-12);
        // Season totals, not an average of per-game values
        assert_relative_eq!(report.season_pct, 18.0 / 33.0, epsilon = 1e-12);
    }

    #[test]
    fn season_span_counts_days_between_extremes() {
        let dates = vec![
            "2015-11-07".to_string(),
            "2015-10-27".to_string(),
            "2016-04-13".to_string(),
        ];
        assert_eq!(season_span_days(&dates).unwrap(), 169);
    }

    #[test]
    fn bad_date_is_an_error() {
        let dates = vec!["yesterday".to_string()];
        assert!(season_span_days(&dates).is_err());
    }
}
