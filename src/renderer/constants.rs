//! Shared constants for the toque renderer.

use crate::model::{Drum, Stroke};

// ── Cell geometry (SVG user units, matches the 30px table cells) ───
pub(super) const CELL_CENTER: f64 = 15.0;
pub(super) const STROKE_RADIUS: f64 = 10.0;
pub(super) const OUTLINE_WIDTH: f64 = 2.0;
pub(super) const INNER_OUTLINE_WIDTH: f64 = 1.5;
pub(super) const PRESSED_DASH: f64 = 4.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const OUTLINE_COLOR: &str = "white";
pub(super) const LEGEND_COLOR: &str = Drum::Okonkolo.color();

// ── CSS classes ─────────────────────────────────────────────────────
pub(super) const BAR_LINE_CLASS: &str = "bar-line";
pub(super) const UPPER_COUNT_CLASS: &str = "quarter";
pub(super) const LOWER_COUNT_CLASS: &str = "sixteenth";

// ── Legend ──────────────────────────────────────────────────────────
pub(super) const LEGEND_TITLE: &str = "Legenda dei simboli:";
pub(super) const LEGEND: [(Stroke, &str); 4] = [
    (Stroke::Open, "Suono aperto"),
    (Stroke::Pressed, "Suono pressionato"),
    (Stroke::Slap, "Slap sulla culatta"),
    (Stroke::Mordito, "Insieme - mordito"),
];
