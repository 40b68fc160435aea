//! Session state and tool-control handling.

use crate::draw::{Color, CursorPreview, History, PreviewKind};
use crate::input::events::InputEvent;
use crate::input::tool::{StrokeWidth, Tool};

/// Whether a stroke is currently being traced.
///
/// The in-progress stroke itself lives at the tail of the committed history
/// and is extended in place; this state machine only records that drag
/// points should keep flowing into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not drawing - pointer movement only updates the cursor preview
    Idle,
    /// Pointer is down with the freehand tool; moves extend the tail stroke
    Drawing,
}

/// All state for one drawing session.
///
/// This is the explicit session object: it owns the command history, the
/// live tool settings, the cursor preview, and the redraw flag. Hosts feed
/// it pointer and tool events and drain `needs_redraw` to know when to
/// repaint. Nothing here is global, so independent sessions can coexist.
pub struct InputState {
    /// Committed/undone command stacks for this session
    pub history: History,
    /// Pen color captured by the next stroke
    pub current_color: Color,
    /// Which of the two pen widths is active
    pub stroke_width: StrokeWidth,
    /// Currently selected tool
    pub tool: Tool,
    /// Glyph placed by the stamp tool, once one has been selected
    pub active_glyph: Option<String>,
    /// Drawing-in-progress flag
    pub state: DrawingState,
    /// Whether the visible surface is stale and needs a repaint
    pub needs_redraw: bool,
    /// Live cursor preview, if the pointer is over the surface
    pub(super) preview: Option<CursorPreview>,
    /// Pixel value of [`StrokeWidth::Thin`] (from config)
    pub(super) thin_width: f64,
    /// Pixel value of [`StrokeWidth::Thick`] (from config)
    pub(super) thick_width: f64,
}

impl InputState {
    /// Creates a session with the given pen defaults.
    ///
    /// # Arguments
    /// * `color` - Initial pen color
    /// * `thin_width` - Pixel width behind [`StrokeWidth::Thin`]
    /// * `thick_width` - Pixel width behind [`StrokeWidth::Thick`]
    pub fn with_defaults(color: Color, thin_width: f64, thick_width: f64) -> Self {
        Self {
            history: History::new(),
            current_color: color,
            stroke_width: StrokeWidth::Thin,
            tool: Tool::Freehand,
            active_glyph: None,
            state: DrawingState::Idle,
            needs_redraw: true,
            preview: None,
            thin_width,
            thick_width,
        }
    }

    /// The active pen width in pixels.
    pub fn current_width_px(&self) -> f64 {
        match self.stroke_width {
            StrokeWidth::Thin => self.thin_width,
            StrokeWidth::Thick => self.thick_width,
        }
    }

    /// The live cursor preview, if any.
    pub fn preview(&self) -> Option<&CursorPreview> {
        self.preview.as_ref()
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Selects a pen width and re-selects the freehand tool.
    ///
    /// Touching the width control always leaves stamp mode, matching the
    /// reference behavior where the width button doubles as "back to pen".
    pub fn set_stroke_width(&mut self, width: StrokeWidth) {
        self.stroke_width = width;
        self.tool = Tool::Freehand;
        self.refresh_preview_kind();
        self.needs_redraw = true;
        log::debug!("pen width set to {:?} ({}px)", width, self.current_width_px());
    }

    /// Flips between the two pen widths (and re-selects freehand).
    pub fn toggle_stroke_width(&mut self) {
        self.set_stroke_width(self.stroke_width.toggled());
    }

    /// Changes the pen color for future strokes.
    ///
    /// In-progress and committed strokes keep the color they captured at
    /// creation.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.current_color = color;
        log::debug!("pen color set to {color}");
    }

    /// Activates the stamp tool with `glyph`.
    pub fn select_stamp_glyph(&mut self, glyph: impl Into<String>) {
        self.active_glyph = Some(glyph.into());
        self.tool = Tool::Stamp;
        self.refresh_preview_kind();
        self.needs_redraw = true;
    }

    /// Undoes the most recent command; no-op on an empty drawing.
    pub fn undo(&mut self) {
        if self.history.undo() {
            self.needs_redraw = true;
        }
    }

    /// Redoes the most recently undone command; no-op when nothing is undone.
    pub fn redo(&mut self) {
        if self.history.redo() {
            self.needs_redraw = true;
        }
    }

    /// Wipes the drawing and both history stacks.
    pub fn clear(&mut self) {
        self.history.clear();
        self.needs_redraw = true;
    }

    /// Drains the redraw flag.
    ///
    /// Returns `true` exactly once per batch of visual mutations; the host
    /// should follow a `true` with a [`repaint`](Self::repaint).
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Applies one replayable input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(*x, *y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(*x, *y),
            InputEvent::PointerUp { x, y } => self.on_pointer_up(*x, *y),
            InputEvent::PointerEnter { x, y } => self.on_pointer_enter(*x, *y),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::SetWidth { width } => self.set_stroke_width(*width),
            InputEvent::ToggleWidth => self.toggle_stroke_width(),
            InputEvent::SetColor { color } => self.set_stroke_color(*color),
            InputEvent::SelectGlyph { glyph } => self.select_stamp_glyph(glyph.clone()),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Snapshot of the active tool for a new cursor preview.
    pub(super) fn preview_kind(&self) -> PreviewKind {
        match self.tool {
            Tool::Stamp => match &self.active_glyph {
                Some(glyph) => PreviewKind::Stamp {
                    glyph: glyph.clone(),
                },
                // Stamp mode without a glyph falls back to the pen dot
                None => PreviewKind::Brush {
                    width: self.current_width_px(),
                },
            },
            Tool::Freehand => PreviewKind::Brush {
                width: self.current_width_px(),
            },
        }
    }

    /// Re-snapshots the preview in place after a tool change.
    ///
    /// Keeps the preview honest between pointer events: the indicator shows
    /// what the next click would do with the tool as it is *now*.
    fn refresh_preview_kind(&mut self) {
        let kind = self.preview_kind();
        if let Some(preview) = &mut self.preview {
            preview.kind = kind;
        }
    }
}
