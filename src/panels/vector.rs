//! src/panels/vector.rs
//!
//! Flow-vector panel: paints a `VectorFigure` onto a braille canvas.
//!
//! The figure uses a y-down surface; the canvas is y-up, so every point is
//! flipped on the way in.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Line as TextLine,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

use crate::graph::VectorFigure;
use crate::graph::vector::{CENTER_DOT_RADIUS, Point, SCALE_FACTOR};

/// Grid spacing for the translucent reference-circle fill.
const DISC_FILL_STEP: f64 = 6.0;

/// Grid spacing for solid fills (centre dot, arrowhead).
const SOLID_FILL_STEP: f64 = 1.0;

pub struct VectorPanel<'a> {
    pub figure: &'a VectorFigure,
}

impl<'a> VectorPanel<'a> {
    pub fn new(figure: &'a VectorFigure) -> Self {
        Self { figure }
    }
}

/// Sample positions `min, min + step, ..` up to `max`.
///
/// Counted in integer steps; float accumulation stalls once the magnitude
/// outgrows `step`. An empty or non-finite span yields nothing.
fn grid(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let span = (max - min) / step;
    let count = if span.is_finite() && span >= 0.0 {
        span.floor() as u64 + 1
    } else {
        0
    };
    (0..count).map(move |i| min + i as f64 * step)
}

/// Grid points inside a disc.
pub fn disc_points(center: Point, radius: f64, step: f64) -> Vec<Point> {
    let mut pts = Vec::new();
    for y in grid(center.1 - radius, center.1 + radius, step) {
        for x in grid(center.0 - radius, center.0 + radius, step) {
            let (dx, dy) = (x - center.0, y - center.1);
            if dx * dx + dy * dy <= radius * radius {
                pts.push((x, y));
            }
        }
    }
    pts
}

/// Grid points inside a triangle, vertices always included.
///
/// Only the part of the triangle within `[0, width] x [0, height]` is filled;
/// the rest would be clipped by the canvas anyway.
pub fn triangle_points(tri: &[Point; 3], step: f64, width: f64, height: f64) -> Vec<Point> {
    let [a, b, c] = *tri;
    let cross = |p: Point, q: Point, r: Point| (q.0 - p.0) * (r.1 - p.1) - (q.1 - p.1) * (r.0 - p.0);
    let area = cross(a, b, c);

    let mut pts: Vec<Point> = tri.to_vec();
    if !area.is_finite() || area.abs() < f64::EPSILON {
        return pts;
    }

    let min_x = a.0.min(b.0).min(c.0).max(0.0);
    let max_x = a.0.max(b.0).max(c.0).min(width);
    let min_y = a.1.min(b.1).min(c.1).max(0.0);
    let max_y = a.1.max(b.1).max(c.1).min(height);

    for y in grid(min_y, max_y, step) {
        for x in grid(min_x, max_x, step) {
            let p = (x, y);
            let w0 = cross(b, c, p) / area;
            let w1 = cross(c, a, p) / area;
            let w2 = cross(a, b, p) / area;
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                pts.push(p);
            }
        }
    }
    pts
}

impl VectorPanel<'_> {
    fn flip(&self, p: Point) -> Point {
        (p.0, self.figure.height - p.1)
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        let fig = self.figure;
        let center = self.flip(fig.center);

        // reference circle: sparse fill plus outline
        let disc: Vec<Point> = disc_points(fig.center, fig.circle_radius, DISC_FILL_STEP)
            .into_iter()
            .map(|p| self.flip(p))
            .collect();
        ctx.draw(&Points {
            coords: &disc,
            color: Color::DarkGray,
        });
        ctx.draw(&Circle {
            x: center.0,
            y: center.1,
            radius: fig.circle_radius,
            color: Color::Gray,
        });
        ctx.layer();

        let dot: Vec<Point> = disc_points(fig.center, CENTER_DOT_RADIUS, SOLID_FILL_STEP)
            .into_iter()
            .map(|p| self.flip(p))
            .collect();
        ctx.draw(&Points {
            coords: &dot,
            color: Color::White,
        });

        let end = self.flip(fig.end);
        ctx.draw(&Line {
            x1: center.0,
            y1: center.1,
            x2: end.0,
            y2: end.1,
            color: Color::Red,
        });

        let head: Vec<Point> = triangle_points(&fig.arrowhead, SOLID_FILL_STEP, fig.width, fig.height)
            .into_iter()
            .map(|p| self.flip(p))
            .collect();
        ctx.draw(&Points {
            coords: &head,
            color: Color::Red,
        });

        let label = self.flip(fig.label_pos);
        // canvas text is left-anchored; shift by half the label to centre it
        let char_width = fig.width / 40.0;
        let x = label.0 - char_width * fig.label.len() as f64 / 2.0;
        ctx.print(
            x,
            label.1,
            TextLine::styled(fig.label.clone(), Style::default().fg(Color::White)),
        );
    }
}

impl crate::ui::Panel for VectorPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // magnitude back in flow units
        let title = format!("Flow Vector |v|={:.1}", self.figure.length() / SCALE_FACTOR);
        let canvas = Canvas::default()
            .block(Block::default().title(title).borders(Borders::ALL))
            .marker(symbols::Marker::Braille)
            .x_bounds([0.0, self.figure.width])
            .y_bounds([0.0, self.figure.height])
            .paint(|ctx| self.paint(ctx));
        f.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_points_stay_inside_radius() {
        let pts = disc_points((10.0, 10.0), 5.0, 1.0);
        assert!(pts.contains(&(10.0, 10.0)));
        assert!(pts
            .iter()
            .all(|&(x, y)| (x - 10.0).powi(2) + (y - 10.0).powi(2) <= 25.0));
    }

    #[test]
    fn degenerate_triangle_is_just_its_vertices() {
        let p = (150.0, 150.0);
        assert_eq!(triangle_points(&[p; 3], 1.0, 300.0, 300.0), vec![p; 3]);
    }

    #[test]
    fn triangle_fill_covers_interior_only() {
        let tri = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
        let pts = triangle_points(&tri, 1.0, 300.0, 300.0);
        assert!(pts.contains(&(2.0, 2.0)));
        assert!(!pts.contains(&(8.0, 8.0)));
        assert!(pts.iter().all(|&(x, y)| x >= 0.0 && y >= 0.0 && x + y <= 10.0 + 1e-9));
    }

    #[test]
    fn huge_vector_fill_stays_on_surface() {
        let fig = VectorFigure::draw(2e16, 0.0);
        let pts = triangle_points(&fig.arrowhead, SOLID_FILL_STEP, fig.width, fig.height);
        // three vertices far off-surface, nothing of the head is visible
        assert_eq!(pts.len(), 3);

        let fig = VectorFigure::draw(-1e300, 1e300);
        let pts = triangle_points(&fig.arrowhead, SOLID_FILL_STEP, fig.width, fig.height);
        assert!(pts.len() <= 3 + 301 * 301);
    }

    #[test]
    fn head_partly_off_surface_is_clipped() {
        let tri = [(-50.0, -50.0), (50.0, -50.0), (-50.0, 50.0)];
        let pts = triangle_points(&tri, 1.0, 300.0, 300.0);
        assert!(pts.contains(&(0.0, 0.0)));
        assert!(pts[3..].iter().all(|&(x, y)| x >= 0.0 && y >= 0.0));
    }

    #[test]
    fn grid_counts_steps_instead_of_accumulating() {
        assert_eq!(grid(0.0, 2.0, 1.0).collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        let big = 2f64.powi(53);
        assert_eq!(grid(big, big + 4.0, 1.0).count(), 5);
        assert_eq!(grid(5.0, 1.0, 1.0).count(), 0);
        assert_eq!(grid(0.0, f64::INFINITY, 1.0).count(), 0);
    }
}
