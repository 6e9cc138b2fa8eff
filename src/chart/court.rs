//! Half-court backdrop geometry for shot charts.
//!
//! Coordinates are in feet relative to the basket center, matching the shot
//! event files: x runs across the court, y runs from the baseline (y = −4.75)
//! toward half court. The generator takes no input and is deterministic —
//! identical primitive sets, point for point, on every invocation — so two
//! renderings of the same chart are pixel-identical. Angular sampling is
//! fixed (500 points on the three-point arc, 100 on circles) to keep curve
//! smoothness reproducible.

use std::f64::consts::PI;

/// Three-point arc radius from the basket center (feet).
pub const THREE_PT_RADIUS: f64 = 23.75;
/// Corner-three line distance from the hoop (feet); the arc is clipped where
/// it meets these vertical segments.
pub const CORNER_THREE_X: f64 = 22.0;
/// Baseline, 4.75 ft behind the basket center.
pub const BASELINE_Y: f64 = -4.75;
/// Free-throw line, 19 ft from the baseline.
pub const FREE_THROW_LINE_Y: f64 = 14.25;
pub const FREE_THROW_CIRCLE_RADIUS: f64 = 6.0;
/// Outer lane ("the key") is 16 ft wide.
pub const LANE_HALF_WIDTH: f64 = 8.0;
pub const BASKET_RADIUS: f64 = 0.75;
/// Backboard plane, 15 in in front of the basket center.
pub const BACKBOARD_Y: f64 = -1.25;
pub const BACKBOARD_HALF_WIDTH: f64 = 3.0;
/// Sidelines of the 50 ft-wide court.
pub const SIDELINE_X: f64 = 25.0;
/// Half-court line, 47 ft from the baseline.
pub const HALF_COURT_Y: f64 = 42.25;

/// Sample counts fixed for reproducible curve smoothness.
pub const THREE_PT_ARC_SAMPLES: usize = 500;
pub const CIRCLE_SAMPLES: usize = 100;

/// A connected sequence of points drawn as line segments.
pub type Polyline = Vec<(f64, f64)>;

/// The full set of court line primitives.
#[derive(Debug, Clone)]
pub struct CourtGeometry {
    pub lines: Vec<Polyline>,
}

/// y-coordinate where the three-point arc meets the corner-three lines.
fn arc_break_y() -> f64 {
    (THREE_PT_RADIUS * THREE_PT_RADIUS - CORNER_THREE_X * CORNER_THREE_X).sqrt()
}

fn circle(cx: f64, cy: f64, r: f64) -> Polyline {
    (0..CIRCLE_SAMPLES)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / (CIRCLE_SAMPLES - 1) as f64;
            (cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}

/// The three-point arc, clipped to the angular range between the two
/// corner-three break points.
fn three_point_arc() -> Polyline {
    let start = arc_break_y().atan2(CORNER_THREE_X);
    let end = PI - start;
    (0..THREE_PT_ARC_SAMPLES)
        .map(|i| {
            let theta = start + (end - start) * i as f64 / (THREE_PT_ARC_SAMPLES - 1) as f64;
            (
                THREE_PT_RADIUS * theta.cos(),
                THREE_PT_RADIUS * theta.sin(),
            )
        })
        .collect()
}

/// Build the court backdrop. Pure and deterministic; never mutated after
/// construction.
pub fn court_geometry() -> CourtGeometry {
    let break_y = arc_break_y();
    let lines = vec![
        // Boundary: baseline, sidelines, half-court line as one loop
        vec![
            (-SIDELINE_X, BASELINE_Y),
            (SIDELINE_X, BASELINE_Y),
            (SIDELINE_X, HALF_COURT_Y),
            (-SIDELINE_X, HALF_COURT_Y),
            (-SIDELINE_X, BASELINE_Y),
        ],
        // The key (outer lane rectangle)
        vec![
            (-LANE_HALF_WIDTH, BASELINE_Y),
            (-LANE_HALF_WIDTH, FREE_THROW_LINE_Y),
            (LANE_HALF_WIDTH, FREE_THROW_LINE_Y),
            (LANE_HALF_WIDTH, BASELINE_Y),
        ],
        // Corner-three verticals
        vec![(CORNER_THREE_X, BASELINE_Y), (CORNER_THREE_X, break_y)],
        vec![(-CORNER_THREE_X, BASELINE_Y), (-CORNER_THREE_X, break_y)],
        three_point_arc(),
        // Backboard
        vec![
            (-BACKBOARD_HALF_WIDTH, BACKBOARD_Y),
            (BACKBOARD_HALF_WIDTH, BACKBOARD_Y),
        ],
        circle(0.0, FREE_THROW_LINE_Y, FREE_THROW_CIRCLE_RADIUS),
        circle(0.0, 0.0, BASKET_RADIUS),
    ];
    CourtGeometry { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn generator_is_deterministic() {
        let a = court_geometry();
        let b = court_geometry();
        assert_eq!(a.lines.len(), b.lines.len());
        for (la, lb) in a.lines.iter().zip(&b.lines) {
            assert_eq!(la.len(), lb.len());
            for (&(xa, ya), &(xb, yb)) in la.iter().zip(lb) {
                assert_relative_eq!(xa, xb, epsilon = 1e-12);
                assert_relative_eq!(ya, yb, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn sampling_resolution_is_fixed() {
        let court = court_geometry();
        let arc = &court.lines[4];
        assert_eq!(arc.len(), THREE_PT_ARC_SAMPLES);
        let ft_circle = &court.lines[6];
        assert_eq!(ft_circle.len(), CIRCLE_SAMPLES);
        let rim = &court.lines[7];
        assert_eq!(rim.len(), CIRCLE_SAMPLES);
    }

    #[test]
    fn arc_endpoints_sit_on_corner_lines() {
        let court = court_geometry();
        let arc = &court.lines[4];
        let first = arc[0];
        let last = arc[arc.len() - 1];
        assert_relative_eq!(first.0, CORNER_THREE_X, epsilon = 1e-9);
        assert_relative_eq!(last.0, -CORNER_THREE_X, epsilon = 1e-9);
        // Every arc point sits exactly on the 23.75 ft radius
        for &(x, y) in arc {
            assert_relative_eq!((x * x + y * y).sqrt(), THREE_PT_RADIUS, epsilon = 1e-9);
        }
    }

    #[test]
    fn free_throw_circle_is_centered_on_the_line() {
        let court = court_geometry();
        for &(x, y) in &court.lines[6] {
            let d = (x * x + (y - FREE_THROW_LINE_Y).powi(2)).sqrt();
            assert_relative_eq!(d, FREE_THROW_CIRCLE_RADIUS, epsilon = 1e-9);
        }
    }
}
