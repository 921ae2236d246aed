//! src/graph/spline.rs
//!
//! Tensioned line interpolation for chart series.
//!
//! Each interior point gets a pair of Bézier control points built from its
//! neighbours, weighted by the relative distance to each side and scaled by
//! the tension. Segments are then sampled as cubic Béziers, so the drawn line
//! still passes through every input point.

/// Line tension used by both charts.
pub const LINE_TENSION: f64 = 0.3;

/// Interpolated points inserted per segment (excluding the segment start).
pub const STEPS_PER_SEGMENT: usize = 8;

type Point = (f64, f64);

/// Control points (incoming, outgoing) for `current` given its neighbours.
fn control_points(previous: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = distance(current, previous);
    let d12 = distance(next, current);
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.0 - previous.0;
    let dy = next.1 - previous.1;
    (
        (current.0 - fa * dx, current.1 - fa * dy),
        (current.0 + fb * dx, current.1 + fb * dy),
    )
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}

/// Densify `points` into a smooth polyline.
///
/// Fewer than three points, or a tension of zero, come back unchanged.
pub fn interpolate(points: &[Point], tension: f64, steps: usize) -> Vec<Point> {
    if points.len() < 3 || tension <= 0.0 || steps == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let controls: Vec<(Point, Point)> = (0..points.len())
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            control_points(prev, points[i], next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity(last * steps + 1);
    out.push(points[0]);
    for i in 0..last {
        let p0 = points[i];
        let p3 = points[i + 1];
        let p1 = controls[i].1;
        let p2 = controls[i + 1].0;
        for s in 1..=steps {
            let t = s as f64 / steps as f64;
            out.push(bezier(p0, p1, p2, p3, t));
        }
    }
    out
}
