//! Repaint and export rendering.

use crate::draw::{Scaled, Surface};

use super::InputState;

impl InputState {
    /// Repaints the full drawing onto `surface`.
    ///
    /// Always the same three steps: clear everything, replay the committed
    /// commands in order (later commands paint over earlier ones), then
    /// overlay the cursor preview if one is live. Calling this twice with
    /// no intervening state change produces identical output.
    pub fn repaint<S: Surface>(&self, surface: &mut S) {
        surface.clear();

        for command in self.history.committed() {
            command.render(surface);
        }

        if let Some(preview) = self.preview() {
            preview.render(surface);
        }
    }

    /// Replays the committed history onto an arbitrary target at an
    /// arbitrary scale.
    ///
    /// This is the export path: the target surface receives the whole
    /// drawing with coordinates (and pen sizes) multiplied by the given
    /// factors. The cursor preview and any in-progress state are not
    /// rendered, and on-screen session state is left untouched.
    pub fn render_all<S: Surface>(&self, surface: &mut S, scale_x: f64, scale_y: f64) {
        let mut scaled = Scaled::new(surface, scale_x, scale_y);
        scaled.clear();

        for command in self.history.committed() {
            command.render(&mut scaled);
        }
    }
}
