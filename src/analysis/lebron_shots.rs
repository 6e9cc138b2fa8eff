//! Regular-season vs playoff shot locations for LeBron James.
//!
//! Two shot-event tables, one point cloud each, overlaid in distinct colors
//! on the shared court backdrop to show how shot selection shifts in the
//! playoffs.

use anyhow::Result;
use plotters::prelude::{BLUE, RED};
use serde::Serialize;
use tracing::info;

use super::write_summary;
use crate::chart::{self, ShotSeries};
use crate::config::Config;
use crate::frame::{load_table, Delimiter, Frame};

const REGULAR_INPUT: &str = "lebron_regular_season.txt";
const PLAYOFF_INPUT: &str = "lebron_playoffs.txt";

#[derive(Debug, Serialize)]
struct LebronShotReport {
    regular_season_shots: usize,
    playoff_shots: usize,
}

fn shot_points(frame: &Frame) -> Result<Vec<(f64, f64)>> {
    let x = frame.numbers("x")?;
    let y = frame.numbers("y")?;
    Ok(x.iter().copied().zip(y.iter().copied()).collect())
}

pub fn run(config: &Config) -> Result<()> {
    let regular = load_table(&config.data_dir.join(REGULAR_INPUT), Delimiter::Tab)?;
    let playoffs = load_table(&config.data_dir.join(PLAYOFF_INPUT), Delimiter::Tab)?;

    info!(
        "LeBron shots: {} regular season, {} playoffs",
        regular.len(),
        playoffs.len()
    );

    chart::shot_chart(
        &config.out_dir.join("lebron_shot_locations.png"),
        "LeBron shot locations, regular season vs playoffs",
        &[
            ShotSeries {
                label: format!("regular season ({})", regular.len()),
                color: BLUE,
                points: shot_points(&regular)?,
            },
            ShotSeries {
                label: format!("playoffs ({})", playoffs.len()),
                color: RED,
                points: shot_points(&playoffs)?,
            },
        ],
    )?;

    write_summary(
        &config.out_dir,
        "lebron_shots",
        &LebronShotReport {
            regular_season_shots: regular.len(),
            playoff_shots: playoffs.len(),
        },
    )
}
