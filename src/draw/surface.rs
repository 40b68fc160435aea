//! Paint surface abstraction.
//!
//! The drawing core never talks to a concrete canvas. Everything renders
//! through the [`Surface`] trait, so the same command history can be painted
//! onto an on-screen target, an export buffer, or a headless test double.

use super::color::Color;
use super::command::Point;

/// A 2D paintable target.
///
/// Implementations are expected to be cheap to clear and to paint in
/// immediate mode: each call draws on top of whatever is already there.
pub trait Surface {
    /// Clears the entire surface back to its blank state.
    fn clear(&mut self);

    /// Strokes a connected polyline through `points` in order.
    ///
    /// Callers guarantee at least two points; implementations may ignore
    /// shorter slices.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64);

    /// Fills a circle of `radius` at `center`, outlined at `outline_width`.
    ///
    /// Used for the brush cursor dot.
    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color, outline_width: f64);

    /// Draws a text glyph (emoji or short string) anchored at `at`.
    fn draw_glyph(&mut self, at: Point, glyph: &str, size: f64);
}

/// Adapter that scales the coordinate system before delegating.
///
/// Export replays the committed history through this wrapper so a
/// differently-sized output surface receives pre-scaled geometry. Pen widths
/// and glyph sizes scale with the horizontal factor, matching what a uniform
/// context scale would do.
pub struct Scaled<'a, S: Surface> {
    inner: &'a mut S,
    scale_x: f64,
    scale_y: f64,
}

impl<'a, S: Surface> Scaled<'a, S> {
    /// Wraps `inner`, multiplying all geometry by the given factors.
    pub fn new(inner: &'a mut S, scale_x: f64, scale_y: f64) -> Self {
        Self {
            inner,
            scale_x,
            scale_y,
        }
    }

    fn map(&self, p: Point) -> Point {
        Point {
            x: p.x * self.scale_x,
            y: p.y * self.scale_y,
        }
    }
}

impl<S: Surface> Surface for Scaled<'_, S> {
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let mapped: Vec<Point> = points.iter().map(|&p| self.map(p)).collect();
        self.inner
            .stroke_polyline(&mapped, color, width * self.scale_x);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color, outline_width: f64) {
        self.inner.fill_circle(
            self.map(center),
            radius * self.scale_x,
            fill,
            outline_width * self.scale_x,
        );
    }

    fn draw_glyph(&mut self, at: Point, glyph: &str, size: f64) {
        self.inner.draw_glyph(self.map(at), glyph, size * self.scale_x);
    }
}

/// One recorded draw call (see [`RecordingSurface`]).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// The surface was cleared.
    Cleared,
    /// A polyline was stroked.
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f64,
    },
    /// A filled circle was drawn.
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
        outline_width: f64,
    },
    /// A glyph was drawn.
    Glyph { at: Point, glyph: String, size: f64 },
}

/// Headless [`Surface`] that records every draw call.
///
/// `clear()` drops previously recorded ops, so after a repaint the op list
/// is exactly the draw calls of that repaint. Ops compare with `==`, which
/// is what the repaint-idempotence tests rely on.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the draw calls issued since the last `clear()`.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Cleared);
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color, outline_width: f64) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
            outline_width,
        });
    }

    fn draw_glyph(&mut self, at: Point, glyph: &str, size: f64) {
        self.ops.push(DrawOp::Glyph {
            at,
            glyph: glyph.to_string(),
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn clear_drops_earlier_ops() {
        let mut surface = RecordingSurface::new();
        surface.draw_glyph(Point { x: 1.0, y: 2.0 }, "x", 24.0);
        surface.clear();
        assert_eq!(surface.ops(), &[DrawOp::Cleared]);
    }

    #[test]
    fn scaled_multiplies_geometry_and_pen() {
        let mut surface = RecordingSurface::new();
        {
            let mut scaled = Scaled::new(&mut surface, 4.0, 2.0);
            scaled.stroke_polyline(
                &[Point { x: 1.0, y: 1.0 }, Point { x: 2.0, y: 3.0 }],
                BLACK,
                1.0,
            );
        }
        assert_eq!(
            surface.ops(),
            &[DrawOp::Polyline {
                points: vec![Point { x: 4.0, y: 2.0 }, Point { x: 8.0, y: 6.0 }],
                color: BLACK,
                width: 4.0,
            }]
        );
    }
}
