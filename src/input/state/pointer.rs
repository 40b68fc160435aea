//! Pointer event handling.

use crate::draw::{Command, CursorPreview, Point};
use crate::input::tool::Tool;
use log::{debug, warn};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary-button press at (`x`, `y`).
    ///
    /// # Behavior
    /// - Freehand tool: starts a new stroke (pen width and color captured
    ///   now) and enters the `Drawing` state. The stroke is pushed onto the
    ///   committed history immediately and extended in place by subsequent
    ///   moves.
    /// - Stamp tool: places the active glyph as a mark. No drawing state is
    ///   entered; a stamp is a single click.
    ///
    /// Either kind of press commits a new command, which discards the redo
    /// stack. The cursor preview is hidden while the button is down.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);
        self.preview = None;

        match self.tool {
            Tool::Stamp => {
                let Some(glyph) = self.active_glyph.clone() else {
                    // Unreachable through the public tool controls; guard anyway.
                    warn!("stamp click at ({x}, {y}) ignored: no glyph selected");
                    self.needs_redraw = true; // the preview was still hidden
                    return;
                };
                let mut mark = Command::mark(at, glyph);
                mark.extend(at);
                self.history.push(mark);
                debug!("placed mark at ({x}, {y})");
            }
            Tool::Freehand => {
                self.state = DrawingState::Drawing;
                self.history.push(Command::stroke(
                    at,
                    self.current_width_px(),
                    self.current_color,
                ));
            }
        }

        self.needs_redraw = true;
    }

    /// Processes pointer motion to (`x`, `y`).
    ///
    /// While drawing, the point extends the in-progress stroke at the tail
    /// of the history. Otherwise the cursor preview is replaced at the new
    /// position with a fresh tool snapshot.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);

        if self.is_drawing() {
            if let Some(stroke) = self.history.last_mut() {
                stroke.extend(at);
            }
        } else {
            self.preview = Some(CursorPreview::new(at, self.preview_kind()));
        }

        self.needs_redraw = true;
    }

    /// Processes a primary-button release at (`x`, `y`).
    ///
    /// Ends the in-progress stroke, which becomes immutable from here on,
    /// and restores the cursor preview at the release position.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        let at = Point::new(x, y);
        self.preview = Some(CursorPreview::new(at, self.preview_kind()));

        if self.is_drawing() {
            self.state = DrawingState::Idle;
            if let Some(Command::Stroke { points, .. }) = self.history.committed().last() {
                debug!("committed stroke with {} points", points.len());
            }
        }

        self.needs_redraw = true;
    }

    /// Processes the pointer entering the surface bounds.
    pub fn on_pointer_enter(&mut self, x: f64, y: f64) {
        self.preview = Some(CursorPreview::new(Point::new(x, y), self.preview_kind()));
        self.needs_redraw = true;
    }

    /// Processes the pointer leaving the surface bounds.
    ///
    /// Clears the preview and force-ends any in-progress stroke so the
    /// session cannot get stuck mid-drag. The partial stroke keeps the
    /// points captured before the leave and stays in history.
    pub fn on_pointer_leave(&mut self) {
        self.preview = None;

        if self.is_drawing() {
            self.state = DrawingState::Idle;
            debug!("pointer left mid-stroke; keeping partial stroke");
        }

        self.needs_redraw = true;
    }
}
