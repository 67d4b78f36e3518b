//! tubs — TUBS notation parser and HTML/SVG renderer for batá drum toques.
//!
//! A toque file lists a name, a time signature and one symbol sequence per
//! drum (Okonkolo, Itotele, Iya). The renderer lays the sequences out on a
//! grid with bar lines and counting rows.
//!
//! # Example
//! ```no_run
//! use tubs::{parse_file, render_toque_to_html};
//!
//! let toque = parse_file("toques/chachalokafun.txt").unwrap();
//! println!("Toque: {} in {}", toque.name, toque.time_signature);
//! let html = render_toque_to_html(&toque).unwrap();
//! std::fs::write("chachalokafun.html", html).unwrap();
//! ```

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod parser;
pub mod renderer;

use std::path::Path;

pub use diagnostics::{diagnose, Diagnostic};
pub use error::ToqueError;
pub use model::*;
pub use parser::{detect_format, parse_toque, HeaderFormat};
pub use renderer::render_toque_to_html;

/// Parse a toque file from a file path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ToqueSpec, ToqueError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ToqueError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_toque(&text))
}

/// Convert a parsed toque to a JSON string.
pub fn toque_to_json(toque: &ToqueSpec) -> Result<String, ToqueError> {
    Ok(serde_json::to_string_pretty(toque)?)
}

/// Parse a toque file and render it to HTML.
/// Every fallback the renderer applies is logged as a warning.
pub fn render_file_to_html<P: AsRef<Path>>(path: P) -> Result<String, ToqueError> {
    let toque = parse_file(path)?;
    for diagnostic in diagnose(&toque) {
        log::warn!("{diagnostic}");
    }
    render_toque_to_html(&toque)
}

/// Read `input`, render it and overwrite `output` with the HTML document.
///
/// Nothing is written unless parsing and rendering succeed.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<(), ToqueError> {
    let html = render_file_to_html(input)?;
    let output = output.as_ref();
    std::fs::write(output, html).map_err(|source| ToqueError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}", output.display());
    Ok(())
}
