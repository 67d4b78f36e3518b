//! Glyph builder — produces the SVG fragment drawn inside one grid cell.
//!
//! Every stroke is a fixed shape; only the fill color changes per drum.

use super::constants::*;
use crate::model::Stroke;

const SLAP_TRIANGLE: [(f64, f64); 3] = [(15.0, 5.0), (25.0, 25.0), (5.0, 25.0)];
const MORDITO_TRIANGLE: [(f64, f64); 3] = [(15.0, 7.3), (21.0, 20.0), (9.0, 20.0)];

// ═══════════════════════════════════════════════════════════════════════
// GlyphBuilder
// ═══════════════════════════════════════════════════════════════════════

struct GlyphBuilder<'a> {
    elements: Vec<String>,
    fill: &'a str,
}

impl<'a> GlyphBuilder<'a> {
    fn new(fill: &'a str) -> Self {
        Self {
            elements: Vec::new(),
            fill,
        }
    }

    fn build(self) -> String {
        self.elements.concat()
    }

    fn circle(&mut self, dashed: bool) {
        let dash = if dashed {
            format!(r#" stroke-dasharray="{}""#, PRESSED_DASH)
        } else {
            String::new()
        };
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="{}"{} />"#,
            CELL_CENTER, CELL_CENTER, STROKE_RADIUS, OUTLINE_COLOR, OUTLINE_WIDTH, self.fill, dash
        ));
    }

    fn polygon(&mut self, points: &[(f64, f64)], stroke_width: f64) {
        let points = points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<polygon points="{}" stroke="{}" stroke-width="{}" fill="{}" />"#,
            points, OUTLINE_COLOR, stroke_width, self.fill
        ));
    }
}

/// SVG fragment for `stroke` filled with `fill`. Rests draw nothing.
pub(super) fn stroke_glyph(stroke: Stroke, fill: &str) -> String {
    let mut glyph = GlyphBuilder::new(fill);
    match stroke {
        Stroke::Rest => {}
        Stroke::Open => glyph.circle(false),
        Stroke::Pressed => glyph.circle(true),
        Stroke::Slap => glyph.polygon(&SLAP_TRIANGLE, OUTLINE_WIDTH),
        Stroke::Mordito => {
            glyph.circle(false);
            glyph.polygon(&MORDITO_TRIANGLE, INNER_OUTLINE_WIDTH);
        }
    }
    glyph.build()
}

/// SVG fragment for a raw symbol; unknown symbols draw nothing.
pub(super) fn symbol_glyph(symbol: char, fill: &str) -> String {
    Stroke::from_symbol(symbol).map_or_else(String::new, |s| stroke_glyph(s, fill))
}
