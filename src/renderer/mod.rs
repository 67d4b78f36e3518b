//! Toque renderer — converts a parsed ToqueSpec into an HTML document.
//!
//! The document is a table with one column per time slot: two counting rows
//! on top, then one row per drum with an SVG glyph in every cell, followed by
//! a fixed symbol legend. Layout is computed here; the surrounding markup
//! lives in a Mustache template, which escapes every free-text value.

mod constants;
mod glyphs;
mod grid;

use serde::Serialize;

use crate::error::ToqueError;
use crate::model::*;
use constants::*;
use glyphs::{stroke_glyph, symbol_glyph};
use grid::Grid;

const DOCUMENT_TEMPLATE: &str = include_str!("templates/toque.html.mustache");

// ═══════════════════════════════════════════════════════════════════════
// Template context
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct DocumentContext {
    title: String,
    count_rows: Vec<CountRow>,
    drum_rows: Vec<DrumRow>,
    legend_title: &'static str,
    legend: Vec<LegendEntry>,
}

#[derive(Debug, Serialize)]
struct CountRow {
    /// Second class of the row, after `count-row`
    kind: &'static str,
    label: &'static str,
    cells: Vec<CountCell>,
}

#[derive(Debug, Serialize)]
struct CountCell {
    class: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct DrumRow {
    drum: &'static str,
    cells: Vec<GlyphCell>,
}

#[derive(Debug, Serialize)]
struct GlyphCell {
    class: &'static str,
    /// Generated SVG, inserted unescaped
    glyph: String,
}

#[derive(Debug, Serialize)]
struct LegendEntry {
    symbol: String,
    meaning: &'static str,
    glyph: String,
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a parsed toque into a complete HTML document.
///
/// Output depends only on `toque`: the same input always gives the same
/// bytes. Unknown symbols and time signatures fall back silently here; use
/// [`crate::diagnose`] to report them.
pub fn render_toque_to_html(toque: &ToqueSpec) -> Result<String, ToqueError> {
    let grid = Grid::for_toque(toque);
    log::debug!(
        "rendering '{}': {} columns, {} per bar",
        toque.name,
        grid.columns,
        grid.beats_per_bar
    );

    let context = DocumentContext {
        title: format!("{} in {}", toque.name, toque.time_signature),
        count_rows: count_rows(&grid, toque.meter()),
        drum_rows: Drum::ALL
            .iter()
            .map(|&drum| drum_row(&grid, drum, toque.part(drum)))
            .collect(),
        legend_title: LEGEND_TITLE,
        legend: legend(),
    };

    let template = mustache::compile_str(DOCUMENT_TEMPLATE)?;
    Ok(template.render_to_string(&context)?)
}

// ═══════════════════════════════════════════════════════════════════════
// Rows
// ═══════════════════════════════════════════════════════════════════════

fn count_rows(grid: &Grid, meter: Meter) -> Vec<CountRow> {
    let (upper_label, lower_label) = meter.count_labels();

    let upper = (0..grid.columns)
        .map(|i| CountCell {
            class: grid.bar_class(i),
            text: grid.upper_count(i).map(|n| n.to_string()).unwrap_or_default(),
        })
        .collect();

    let lower = (0..grid.columns)
        .map(|i| CountCell {
            class: grid.bar_class(i),
            text: grid.lower_count(i).to_string(),
        })
        .collect();

    vec![
        CountRow { kind: UPPER_COUNT_CLASS, label: upper_label, cells: upper },
        CountRow { kind: LOWER_COUNT_CLASS, label: lower_label, cells: lower },
    ]
}

fn drum_row(grid: &Grid, drum: Drum, part: &str) -> DrumRow {
    let cells = grid
        .padded(part)
        .enumerate()
        .map(|(i, symbol)| GlyphCell {
            class: grid.bar_class(i),
            glyph: symbol_glyph(symbol, drum.color()),
        })
        .collect();

    DrumRow { drum: drum.name(), cells }
}

fn legend() -> Vec<LegendEntry> {
    LEGEND
        .iter()
        .map(|&(stroke, meaning)| LegendEntry {
            symbol: stroke.symbol().to_string(),
            meaning,
            glyph: stroke_glyph(stroke, LEGEND_COLOR),
        })
        .collect()
}
