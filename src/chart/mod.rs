//! Static chart rendering with `plotters`.
//!
//! Four chart kinds cover the whole report: histogram, kernel density curve,
//! scatter, and the shot-chart overlay drawn on top of the generated court
//! backdrop. Reference markers (named vertical/horizontal lines) annotate
//! specific players against the league distribution. One PNG per chart.

pub mod court;

pub use court::{court_geometry, CourtGeometry};

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;

const CHART_SIZE: (u32, u32) = (900, 600);
const SHOT_CHART_SIZE: (u32, u32) = (760, 760);
const KDE_GRID_POINTS: usize = 200;

/// Orientation of a reference marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Vertical,
    Horizontal,
}

/// A named reference line drawn across the plot area, e.g. one player's
/// value against the league histogram.
#[derive(Debug, Clone)]
pub struct RefLine {
    pub orient: Orient,
    pub value: f64,
    pub label: String,
    pub color: RGBColor,
}

impl RefLine {
    pub fn vertical(value: f64, label: impl Into<String>, color: RGBColor) -> RefLine {
        RefLine {
            orient: Orient::Vertical,
            value,
            label: label.into(),
            color,
        }
    }

    pub fn horizontal(value: f64, label: impl Into<String>, color: RGBColor) -> RefLine {
        RefLine {
            orient: Orient::Horizontal,
            value,
            label: label.into(),
            color,
        }
    }
}

/// One point cloud of a shot-chart overlay.
#[derive(Debug, Clone)]
pub struct ShotSeries {
    pub label: String,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// Point styling for scatterplots.
#[derive(Debug, Clone, Copy)]
pub struct ScatterOptions {
    pub point_size: u32,
    /// 0.0 (invisible) to 1.0 (opaque).
    pub alpha: f64,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions {
            point_size: 4,
            alpha: 0.8,
        }
    }
}

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

fn draw_ref_lines(
    chart: &mut Chart2d<'_, '_>,
    refs: &[RefLine],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<()> {
    for r in refs {
        let pts = match r.orient {
            Orient::Vertical => vec![(r.value, y_range.0), (r.value, y_range.1)],
            Orient::Horizontal => vec![(x_range.0, r.value), (x_range.1, r.value)],
        };
        let color = r.color;
        chart
            .draw_series(LineSeries::new(pts, color.stroke_width(2)))?
            .label(r.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }
    Ok(())
}

fn draw_legend<'a, 'b: 'a>(chart: &mut Chart2d<'a, 'b>) -> Result<()> {
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Histogram bins: `(bin start, count)` at a fixed bin width, aligned so bin
/// edges fall on multiples of the width.
fn bin_counts(values: &[f64], bin_width: f64) -> Vec<(f64, usize)> {
    let v = finite(values);
    if v.is_empty() {
        return Vec::new();
    }
    let min = v.iter().copied().fold(f64::INFINITY, f64::min);
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let first = (min / bin_width).floor() as i64;
    let last = (max / bin_width).floor() as i64;
    let mut bins: Vec<(f64, usize)> = (first..=last)
        .map(|i| (i as f64 * bin_width, 0))
        .collect();
    for x in v {
        let idx = ((x / bin_width).floor() as i64 - first) as usize;
        bins[idx].1 += 1;
    }
    bins
}

/// Gaussian kernel density estimate on an evenly spaced grid.
///
/// Bandwidth is Silverman's rule of thumb, `1.06 · σ · n^(−1/5)`.
pub fn kde_curve(values: &[f64], grid_points: usize) -> Vec<(f64, f64)> {
    let v = finite(values);
    if v.is_empty() || grid_points < 2 {
        return Vec::new();
    }
    let n = v.len() as f64;
    let sd = crate::stats::std_dev(&v).unwrap_or(0.0);
    let h = if sd > 0.0 {
        1.06 * sd * n.powf(-0.2)
    } else {
        1.0
    };
    let min = v.iter().copied().fold(f64::INFINITY, f64::min) - 3.0 * h;
    let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 3.0 * h;
    let norm = 1.0 / (n * h * (2.0 * std::f64::consts::PI).sqrt());
    (0..grid_points)
        .map(|i| {
            let x = min + (max - min) * i as f64 / (grid_points - 1) as f64;
            let density: f64 = v
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / h;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

/// Render a histogram with a configurable bin width.
pub fn histogram(
    path: &Path,
    title: &str,
    x_desc: &str,
    values: &[f64],
    bin_width: f64,
    refs: &[RefLine],
) -> Result<()> {
    let bins = bin_counts(values, bin_width);
    anyhow::ensure!(!bins.is_empty(), "no finite values to plot for '{title}'");

    let x_min = bins[0].0;
    let x_max = bins[bins.len() - 1].0 + bin_width;
    let y_max = bins.iter().map(|&(_, c)| c).max().unwrap_or(1) as f64 * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("players")
        .draw()?;

    chart.draw_series(bins.iter().map(|&(x0, count)| {
        Rectangle::new(
            [(x0, 0.0), (x0 + bin_width, count as f64)],
            BLUE.mix(0.55).filled(),
        )
    }))?;

    draw_ref_lines(&mut chart, refs, (x_min, x_max), (0.0, y_max))?;
    if !refs.is_empty() {
        draw_legend(&mut chart)?;
    }
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Render a kernel density curve.
pub fn density(
    path: &Path,
    title: &str,
    x_desc: &str,
    values: &[f64],
    refs: &[RefLine],
) -> Result<()> {
    let curve = kde_curve(values, KDE_GRID_POINTS);
    anyhow::ensure!(!curve.is_empty(), "no finite values to plot for '{title}'");

    let x_min = curve[0].0;
    let x_max = curve[curve.len() - 1].0;
    let y_max = curve.iter().map(|&(_, d)| d).fold(0.0, f64::max) * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("density")
        .draw()?;

    chart.draw_series(LineSeries::new(curve.clone(), BLUE.stroke_width(2)))?;
    chart.draw_series(AreaSeries::new(curve, 0.0, BLUE.mix(0.15)))?;

    draw_ref_lines(&mut chart, refs, (x_min, x_max), (0.0, y_max))?;
    if !refs.is_empty() {
        draw_legend(&mut chart)?;
    }
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Render an x/y scatterplot with optional per-point transparency and size.
pub fn scatter(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(f64, f64)],
    opts: ScatterOptions,
    refs: &[RefLine],
) -> Result<()> {
    let pts: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
        .collect();
    anyhow::ensure!(!pts.is_empty(), "no finite points to plot for '{title}'");

    let (mut x_min, mut x_max, mut y_min, mut y_max) =
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in &pts {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let x_pad = ((x_max - x_min) * 0.05).max(0.5);
    let y_pad = ((y_max - y_min) * 0.05).max(0.5);
    let (x_min, x_max) = (x_min - x_pad, x_max + x_pad);
    let (y_min, y_max) = (y_min - y_pad, y_max + y_pad);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart.configure_mesh().x_desc(x_desc).y_desc(y_desc).draw()?;

    chart.draw_series(
        pts.iter()
            .map(|&p| Circle::new(p, opts.point_size, BLUE.mix(opts.alpha).filled())),
    )?;

    draw_ref_lines(&mut chart, refs, (x_min, x_max), (y_min, y_max))?;
    if !refs.is_empty() {
        draw_legend(&mut chart)?;
    }
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Render one or two shot clouds over the half-court backdrop.
pub fn shot_chart(path: &Path, title: &str, series: &[ShotSeries]) -> Result<()> {
    anyhow::ensure!(!series.is_empty(), "shot chart needs at least one series");

    let court = court_geometry();
    let root = BitMapBackend::new(path, SHOT_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 26))
        .margin(12)
        .build_cartesian_2d(
            -court::SIDELINE_X - 1.0..court::SIDELINE_X + 1.0,
            court::BASELINE_Y - 1.0..court::HALF_COURT_Y + 1.0,
        )?;

    for line in &court.lines {
        chart.draw_series(LineSeries::new(line.clone(), BLACK.stroke_width(2)))?;
    }

    for s in series {
        let color = s.color;
        let pts: Vec<(f64, f64)> = s
            .points
            .iter()
            .copied()
            .filter(|&(x, y)| x.is_finite() && y.is_finite())
            .collect();
        chart
            .draw_series(
                pts.iter()
                    .map(move |&p| Circle::new(p, 3, color.mix(0.6).filled())),
            )?
            .label(s.label.clone())
            .legend(move |(x, y)| Circle::new((x + 9, y), 4, color.filled()));
    }

    draw_legend(&mut chart)?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
