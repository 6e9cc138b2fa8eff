//! Shot chart of Curry's pull-up attempts.
//!
//! Shot events carry court coordinates in feet relative to the basket
//! center. The analysis keeps only pull-up jumpers, splits them into makes
//! and misses, and overlays the two clouds on the court backdrop.

use anyhow::Result;
use plotters::prelude::{GREEN, RED};
use serde::Serialize;
use tracing::info;

use super::write_summary;
use crate::chart::{self, ShotSeries};
use crate::config::Config;
use crate::frame::{load_table, Delimiter, Frame};
use crate::stats;

const INPUT: &str = "curry.csv";
const SHOT_TYPE: &str = "pullup";

#[derive(Debug, Serialize)]
struct CurryShotReport {
    total_shots: usize,
    pullup_shots: usize,
    pullup_makes: usize,
    pullup_pct: f64,
    /// Mean shot distance of pull-ups, in feet from the basket.
    mean_distance_ft: Option<f64>,
}

fn shot_points(frame: &Frame) -> Result<Vec<(f64, f64)>> {
    let x = frame.numbers("x")?;
    let y = frame.numbers("y")?;
    Ok(x.iter().copied().zip(y.iter().copied()).collect())
}

pub fn run(config: &Config) -> Result<()> {
    let shots = load_table(&config.data_dir.join(INPUT), Delimiter::Comma)?;
    let pullups = shots.filter_text_eq("shot_type", SHOT_TYPE)?;
    let made = pullups.filter_text_eq("result", "made")?;
    let missed = pullups.filter_text_eq("result", "missed")?;

    let pct = made.len() as f64 / pullups.len().max(1) as f64;
    let distances: Vec<f64> = shot_points(&pullups)?
        .iter()
        .map(|&(x, y)| (x * x + y * y).sqrt())
        .collect();
    let mean_distance = stats::mean(&distances);
    info!(
        "Curry pull-ups: {} of {} shots, {} made ({:.3})",
        pullups.len(),
        shots.len(),
        made.len(),
        pct
    );

    chart::shot_chart(
        &config.out_dir.join("curry_pullups.png"),
        "Curry pull-up jumpers",
        &[
            ShotSeries {
                label: format!("made ({})", made.len()),
                color: GREEN,
                points: shot_points(&made)?,
            },
            ShotSeries {
                label: format!("missed ({})", missed.len()),
                color: RED,
                points: shot_points(&missed)?,
            },
        ],
    )?;

    write_summary(
        &config.out_dir,
        "curry_shots",
        &CurryShotReport {
            total_shots: shots.len(),
            pullup_shots: pullups.len(),
            pullup_makes: made.len(),
            pullup_pct: pct,
            mean_distance_ft: mean_distance,
        },
    )
}
