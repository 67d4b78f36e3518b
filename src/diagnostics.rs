//! Warnings about input the renderer silently works around.
//!
//! Rendering never rejects a toque. An unknown time signature is laid out as
//! 4/4, an unknown symbol becomes a blank cell and a missing part becomes a
//! blank row. [`diagnose`] lists each of those so callers can report them.

use thiserror::Error;

use crate::model::{Drum, Meter, Stroke, ToqueSpec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("unrecognized time signature {0:?}, bar lines assume 4/4")]
    UnrecognizedTimeSignature(String),

    #[error("{drum}: unrecognized symbol {symbol:?} at column {column}, rendered blank")]
    UnrecognizedSymbol {
        drum: Drum,
        /// 0-based column
        column: usize,
        symbol: char,
    },

    #[error("{0}: no symbols, rendered as an empty row")]
    MissingPart(Drum),
}

/// Collect every fallback the renderer will apply to `toque`, in order:
/// time signature first, then drums in rendering order.
pub fn diagnose(toque: &ToqueSpec) -> Vec<Diagnostic> {
    let mut found = Vec::new();

    if toque.meter() == Meter::Unrecognized {
        found.push(Diagnostic::UnrecognizedTimeSignature(
            toque.time_signature.clone(),
        ));
    }

    for drum in Drum::ALL {
        let part = toque.part(drum);
        if part.is_empty() {
            found.push(Diagnostic::MissingPart(drum));
            continue;
        }
        for (column, symbol) in part.chars().enumerate() {
            if Stroke::from_symbol(symbol).is_none() {
                found.push(Diagnostic::UnrecognizedSymbol { drum, column, symbol });
            }
        }
    }

    found
}
