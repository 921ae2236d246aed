//! src/graph/vector.rs
//!
//! Geometry of the live flow-vector figure.
//!
//! Coordinates are surface units with the origin at the top-left corner and
//! y growing downward. The figure is recomputed from scratch on every draw;
//! nothing carries over between calls.

use std::f64::consts::PI;

/// Fixed drawing surface size.
pub const SURFACE_WIDTH: f64 = 300.0;
pub const SURFACE_HEIGHT: f64 = 300.0;

/// Flow units to surface units. Not adapted to the data range.
pub const SCALE_FACTOR: f64 = 0.5;

/// Reference circle radius as a fraction of the smaller surface side.
pub const REFERENCE_RADIUS_FRAC: f64 = 0.4;

pub const CENTER_DOT_RADIUS: f64 = 5.0;

/// Length of the arrowhead edges.
pub const ARROW_SIZE: f64 = 10.0;

/// Angle between each arrowhead edge and the shaft (30°).
pub const ARROW_ANGLE: f64 = PI / 6.0;

/// Label baseline distance from the bottom edge.
pub const LABEL_OFFSET: f64 = 10.0;

pub type Point = (f64, f64);

#[derive(Clone, Debug, PartialEq)]
pub struct VectorFigure {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub circle_radius: f64,
    /// Terminal point of the shaft.
    pub end: Point,
    /// Tip followed by the two back corners.
    pub arrowhead: [Point; 3],
    pub label: String,
    pub label_pos: Point,
}

impl VectorFigure {
    /// Figure for flow `(x, y)` on the fixed dashboard surface.
    pub fn draw(x: f64, y: f64) -> Self {
        Self::on_surface(x, y, SURFACE_WIDTH, SURFACE_HEIGHT)
    }

    pub fn on_surface(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center = (width / 2.0, height / 2.0);
        let end = (center.0 + x * SCALE_FACTOR, center.1 + y * SCALE_FACTOR);

        let arrowhead = if end == center {
            [center; 3]
        } else {
            let angle = (end.1 - center.1).atan2(end.0 - center.0);
            [
                end,
                (
                    end.0 - ARROW_SIZE * (angle - ARROW_ANGLE).cos(),
                    end.1 - ARROW_SIZE * (angle - ARROW_ANGLE).sin(),
                ),
                (
                    end.0 - ARROW_SIZE * (angle + ARROW_ANGLE).cos(),
                    end.1 - ARROW_SIZE * (angle + ARROW_ANGLE).sin(),
                ),
            ]
        };

        Self {
            width,
            height,
            center,
            circle_radius: width.min(height) * REFERENCE_RADIUS_FRAC,
            end,
            arrowhead,
            label: format!("({}, {})", format_number(x), format_number(y)),
            label_pos: (center.0, height - LABEL_OFFSET),
        }
    }

    /// Shaft length in surface units.
    pub fn length(&self) -> f64 {
        let dx = self.end.0 - self.center.0;
        let dy = self.end.1 - self.center.1;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for VectorFigure {
    fn default() -> Self {
        Self::draw(0.0, 0.0)
    }
}

/// Shortest round-trip rendering, integers without a fractional part.
///
/// Like JavaScript's `Number#toString`, magnitudes of `1e21` and up or below
/// `1e-6` switch to exponent form with an explicit sign (`1e+21`, `1e-7`).
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // also folds -0
        "0".to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn zero_vector_collapses_to_center() {
        let fig = VectorFigure::draw(0.0, 0.0);
        assert_eq!(fig.center, (150.0, 150.0));
        assert_eq!(fig.end, fig.center);
        assert_eq!(fig.length(), 0.0);
        assert!(fig.arrowhead.iter().all(|&p| p == fig.center));
        assert_eq!(fig.label, "(0, 0)");
    }

    #[test]
    fn diagonal_vector_scales_by_half() {
        let fig = VectorFigure::draw(100.0, 100.0);
        assert!(close(fig.end, (200.0, 200.0)));
        assert_eq!(fig.label, "(100, 100)");
        assert!((fig.length() - 50.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn reference_circle_uses_smaller_side() {
        let fig = VectorFigure::on_surface(0.0, 0.0, 400.0, 200.0);
        assert_eq!(fig.circle_radius, 80.0);
        assert_eq!(fig.center, (200.0, 100.0));
        assert_eq!(fig.label_pos, (200.0, 190.0));
    }

    #[test]
    fn arrowhead_edges_sit_thirty_degrees_off_the_shaft() {
        // shaft points straight right
        let fig = VectorFigure::draw(40.0, 0.0);
        let [tip, a, b] = fig.arrowhead;
        assert!(close(tip, (170.0, 150.0)));

        let back = ARROW_SIZE * ARROW_ANGLE.cos();
        let side = ARROW_SIZE * ARROW_ANGLE.sin();
        assert!(close(a, (170.0 - back, 150.0 + side)));
        assert!(close(b, (170.0 - back, 150.0 - side)));

        for corner in [a, b] {
            let d = ((corner.0 - tip.0).powi(2) + (corner.1 - tip.1).powi(2)).sqrt();
            assert!((d - ARROW_SIZE).abs() < 1e-9);
        }
    }

    #[test]
    fn label_keeps_literal_values() {
        assert_eq!(VectorFigure::draw(1.5, -3.0).label, "(1.5, -3)");
        assert_eq!(VectorFigure::draw(-0.0, 0.25).label, "(0, 0.25)");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }
}
