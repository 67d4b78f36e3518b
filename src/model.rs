//! Data model for a parsed toque.
//!
//! A toque is written as one symbol sequence per batá drum, plus a name and
//! a time signature. These structures hold exactly what the renderer needs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three batá drums.
///
/// The declaration order is the rendering order (smallest to largest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Drum {
    Okonkolo,
    Itotele,
    Iya,
}

impl Drum {
    /// All drums, in rendering order.
    pub const ALL: [Drum; 3] = [Drum::Okonkolo, Drum::Itotele, Drum::Iya];

    /// Look up a drum by its section heading. Only the exact name matches.
    pub fn from_name(name: &str) -> Option<Drum> {
        match name {
            "Okonkolo" => Some(Drum::Okonkolo),
            "Itotele" => Some(Drum::Itotele),
            "Iya" => Some(Drum::Iya),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Drum::Okonkolo => "Okonkolo",
            Drum::Itotele => "Itotele",
            Drum::Iya => "Iya",
        }
    }

    /// Fill color used for this drum's glyphs.
    pub const fn color(self) -> &'static str {
        match self {
            Drum::Okonkolo => "rgb(200, 0, 0)",
            Drum::Itotele => "rgb(255, 200, 0)",
            Drum::Iya => "rgb(0, 0, 150)",
        }
    }
}

impl fmt::Display for Drum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single TUBS symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// `-`: nothing played in this slot
    Rest,
    /// `A`: open tone
    Open,
    /// `P`: pressed (muffled) tone
    Pressed,
    /// `S`: slap
    Slap,
    /// `I`: open tone and slap together (mordito)
    Mordito,
}

impl Stroke {
    /// Filler symbol used to pad short parts.
    pub const FILLER: char = '-';

    /// Map a symbol character to its stroke. Unknown characters give `None`.
    pub fn from_symbol(symbol: char) -> Option<Stroke> {
        match symbol {
            '-' => Some(Stroke::Rest),
            'A' => Some(Stroke::Open),
            'P' => Some(Stroke::Pressed),
            'S' => Some(Stroke::Slap),
            'I' => Some(Stroke::Mordito),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Stroke::Rest => '-',
            Stroke::Open => 'A',
            Stroke::Pressed => 'P',
            Stroke::Slap => 'S',
            Stroke::Mordito => 'I',
        }
    }
}

/// Bar grouping derived from the time-signature literal.
///
/// Only `4/4` and `6/8` are understood; everything else is laid out as 4/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meter {
    /// `4/4`
    Common,
    /// `6/8`
    Compound,
    /// Any other (or missing) signature
    Unrecognized,
}

impl Meter {
    pub fn from_signature(signature: &str) -> Meter {
        match signature {
            "4/4" => Meter::Common,
            "6/8" => Meter::Compound,
            _ => Meter::Unrecognized,
        }
    }

    /// Number of columns per bar; the last column of each bar gets a bar line.
    pub fn beats_per_bar(self) -> usize {
        match self {
            Meter::Compound => 6,
            Meter::Common | Meter::Unrecognized => 4,
        }
    }

    /// Group size numbered by the upper counting row.
    pub fn top_count_unit(self) -> usize {
        match self {
            Meter::Compound => 6,
            Meter::Common | Meter::Unrecognized => 4,
        }
    }

    /// Labels of the (upper, lower) counting rows.
    pub fn count_labels(self) -> (&'static str, &'static str) {
        match self {
            Meter::Common => ("Quarti", "Sedicesimi"),
            Meter::Compound | Meter::Unrecognized => ("Gruppi", "Suddivisioni"),
        }
    }
}

/// A parsed toque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToqueSpec {
    /// Toque name (empty when the input has none)
    pub name: String,
    /// Time signature literal as written, e.g. "4/4"
    pub time_signature: String,
    /// Symbol sequence per drum. Every drum has an entry.
    pub parts: BTreeMap<Drum, String>,
}

impl ToqueSpec {
    /// Create an empty toque with an empty part for every drum.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            time_signature: String::new(),
            parts: Drum::ALL.iter().map(|&d| (d, String::new())).collect(),
        }
    }

    /// Symbol sequence of one drum (empty if the input had no such section).
    pub fn part(&self, drum: Drum) -> &str {
        self.parts.get(&drum).map_or("", String::as_str)
    }

    /// Length of the longest part, in symbols.
    pub fn max_len(&self) -> usize {
        self.parts
            .values()
            .map(|seq| seq.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn meter(&self) -> Meter {
        Meter::from_signature(&self.time_signature)
    }
}

impl Default for ToqueSpec {
    fn default() -> Self {
        Self::new()
    }
}
