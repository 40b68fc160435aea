//! SVG export surface.
//!
//! The export side of the surface boundary: a [`Surface`] implementation
//! that accumulates SVG elements and finishes into a standalone document.
//! The drawing core never knows it is painting into markup; it replays the
//! committed history through the same trait the on-screen target uses.

use crate::draw::{Color, Point, Surface};
use std::fmt::Write as _;

/// A [`Surface`] that renders draw calls as SVG elements.
pub struct SvgSurface {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Creates an empty SVG surface with the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Finishes the document, consuming the surface.
    pub fn finish(self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            doc.push_str("  ");
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let mut attr = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                attr.push(' ');
            }
            let _ = write!(attr, "{},{}", p.x, p.y);
        }
        self.elements.push(format!(
            "<polyline points=\"{attr}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            color.to_hex()
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: Color, outline_width: f64) {
        self.elements.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{}\" stroke=\"{}\" \
             stroke-width=\"{outline_width}\"/>",
            center.x,
            center.y,
            fill.to_hex(),
            fill.to_hex()
        ));
    }

    fn draw_glyph(&mut self, at: Point, glyph: &str, size: f64) {
        self.elements.push(format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{size}\">{}</text>",
            at.x,
            at.y,
            escape_text(glyph)
        ));
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
