//! The replayable drawing command model.

use super::color::Color;
use super::surface::Surface;
use serde::{Deserialize, Serialize};

/// Text size used for every placed glyph and for the stamp cursor preview.
///
/// Marks render at a fixed size regardless of the current stroke width.
pub const GLYPH_SIZE: f64 = 24.0;

/// A point on the drawing surface, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from x/y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A replayable unit of drawing.
///
/// The command set is closed: a drawing is an ordered sequence of exactly
/// these two kinds of entity, and replaying them in order reproduces the
/// visible canvas. Each command carries its own appearance, captured when
/// it was created — changing the live tool never alters committed work.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Freehand polyline traced by a pointer drag.
    Stroke {
        /// Drag points in insertion order (at least one, the pointer-down
        /// position). Append-only while the stroke is in progress.
        points: Vec<Point>,
        /// Pen width in pixels, fixed at stroke start
        width: f64,
        /// Pen color, fixed at stroke start
        color: Color,
    },
    /// A single glyph (emoji or short text) placed at a point.
    Mark {
        /// Anchor position; repositioned once at placement
        at: Point,
        /// The glyph content, fixed at creation
        glyph: String,
    },
}

impl Command {
    /// Creates a stroke starting at `origin` with the captured pen settings.
    pub fn stroke(origin: Point, width: f64, color: Color) -> Self {
        Self::Stroke {
            points: vec![origin],
            width,
            color,
        }
    }

    /// Creates a mark with `glyph` anchored at `at`.
    pub fn mark(at: Point, glyph: impl Into<String>) -> Self {
        Self::Mark {
            at,
            glyph: glyph.into(),
        }
    }

    /// Extends this command with a new input point.
    ///
    /// Strokes append the point to their polyline; marks move to it. In the
    /// normal flow a mark is only extended once, at placement.
    pub fn extend(&mut self, p: Point) {
        match self {
            Self::Stroke { points, .. } => points.push(p),
            Self::Mark { at, .. } => *at = p,
        }
    }

    /// Renders this command onto `surface` using its own captured
    /// appearance.
    ///
    /// A stroke with fewer than two points draws nothing (a click with no
    /// drag has no visible result but still occupies its history slot).
    pub fn render<S: Surface>(&self, surface: &mut S) {
        match self {
            Self::Stroke {
                points,
                width,
                color,
            } => {
                if points.len() > 1 {
                    surface.stroke_polyline(points, *color, *width);
                }
            }
            Self::Mark { at, glyph } => {
                surface.draw_glyph(*at, glyph, GLYPH_SIZE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::surface::{DrawOp, RecordingSurface};

    #[test]
    fn single_point_stroke_renders_nothing() {
        let stroke = Command::stroke(Point::new(5.0, 5.0), 1.0, BLACK);
        let mut surface = RecordingSurface::new();
        stroke.render(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn extended_stroke_renders_full_polyline() {
        let mut stroke = Command::stroke(Point::new(10.0, 10.0), 1.0, BLACK);
        stroke.extend(Point::new(10.0, 50.0));
        stroke.extend(Point::new(50.0, 50.0));

        let mut surface = RecordingSurface::new();
        stroke.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[DrawOp::Polyline {
                points: vec![
                    Point::new(10.0, 10.0),
                    Point::new(10.0, 50.0),
                    Point::new(50.0, 50.0),
                ],
                color: BLACK,
                width: 1.0,
            }]
        );
    }

    #[test]
    fn mark_renders_glyph_at_anchor() {
        let mark = Command::mark(Point::new(20.0, 20.0), "🌠");
        let mut surface = RecordingSurface::new();
        mark.render(&mut surface);

        assert_eq!(
            surface.ops(),
            &[DrawOp::Glyph {
                at: Point::new(20.0, 20.0),
                glyph: "🌠".to_string(),
                size: GLYPH_SIZE,
            }]
        );
    }

    #[test]
    fn extend_repositions_a_mark() {
        let mut mark = Command::mark(Point::new(0.0, 0.0), "💛");
        mark.extend(Point::new(7.0, 9.0));
        assert_eq!(mark, Command::mark(Point::new(7.0, 9.0), "💛"));
    }
}
