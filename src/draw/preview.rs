//! Ephemeral cursor preview.

use super::color::BLACK;
use super::command::{GLYPH_SIZE, Point};
use super::surface::Surface;

/// Smallest cursor dot radius that stays visible at pen width 1.
const MIN_BRUSH_RADIUS: f64 = 0.5;

/// Outline pen width for the brush cursor dot.
const BRUSH_OUTLINE_WIDTH: f64 = 1.0;

/// What the cursor preview looks like, snapshotted from the active tool.
///
/// The snapshot is taken when the preview is (re)created, so a preview
/// always renders what the *next* action would produce, even if tool state
/// changes before the next pointer event arrives.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewKind {
    /// Freehand tool: a dot of the current pen width
    Brush {
        /// Pen width in pixels at snapshot time
        width: f64,
    },
    /// Stamp tool: the glyph that a click would place
    Stamp {
        /// Active glyph at snapshot time
        glyph: String,
    },
}

/// The non-committed indicator of the active tool at the pointer position.
///
/// At most one preview is live at a time. It never enters the history; it
/// is replaced wholesale on pointer movement and dropped when the pointer
/// leaves the surface. Repaints overlay it after all committed commands.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorPreview {
    /// Last known pointer position
    pub at: Point,
    /// Tool snapshot taken when this preview was created
    pub kind: PreviewKind,
}

impl CursorPreview {
    /// Creates a preview at `at` with the given tool snapshot.
    pub fn new(at: Point, kind: PreviewKind) -> Self {
        Self { at, kind }
    }

    /// Renders the preview on top of the committed drawing.
    ///
    /// The stamp preview uses the same glyph path and size as a committed
    /// mark, so what the user sees is exactly what a click would place.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        match &self.kind {
            PreviewKind::Brush { width } => {
                surface.fill_circle(
                    self.at,
                    (width / 2.0).max(MIN_BRUSH_RADIUS),
                    BLACK,
                    BRUSH_OUTLINE_WIDTH,
                );
            }
            PreviewKind::Stamp { glyph } => {
                surface.draw_glyph(self.at, glyph, GLYPH_SIZE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::surface::{DrawOp, RecordingSurface};

    #[test]
    fn thin_brush_dot_keeps_minimum_radius() {
        let preview = CursorPreview::new(Point::new(3.0, 4.0), PreviewKind::Brush { width: 1.0 });
        let mut surface = RecordingSurface::new();
        preview.render(&mut surface);

        match &surface.ops()[0] {
            DrawOp::Circle { radius, .. } => assert_eq!(*radius, MIN_BRUSH_RADIUS),
            op => panic!("expected circle, got {op:?}"),
        }
    }

    #[test]
    fn thick_brush_dot_matches_pen_width() {
        let preview = CursorPreview::new(Point::new(0.0, 0.0), PreviewKind::Brush { width: 10.0 });
        let mut surface = RecordingSurface::new();
        preview.render(&mut surface);

        match &surface.ops()[0] {
            DrawOp::Circle { radius, .. } => assert_eq!(*radius, 5.0),
            op => panic!("expected circle, got {op:?}"),
        }
    }

    #[test]
    fn stamp_preview_matches_committed_mark_rendering() {
        use crate::draw::command::Command;

        let at = Point::new(12.0, 30.0);
        let preview = CursorPreview::new(
            at,
            PreviewKind::Stamp {
                glyph: "🧂".to_string(),
            },
        );
        let mut preview_surface = RecordingSurface::new();
        preview.render(&mut preview_surface);

        let mut mark_surface = RecordingSurface::new();
        Command::mark(at, "🧂").render(&mut mark_surface);

        assert_eq!(preview_surface.ops(), mark_surface.ops());
    }
}
