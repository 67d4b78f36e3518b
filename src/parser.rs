//! TUBS text parser — converts the line-oriented toque notation into a ToqueSpec.
//!
//! Canonical input:
//!
//! ```text
//! Toque: Chachalokafun
//! Time: 4/4
//!
//! Okonkolo
//! -A-A-A-A
//! Iya
//! A--SA-P-
//! ```
//!
//! Older files carry no `Toque:`/`Time:` headers and instead start with the
//! bare time signature (`4/4`) on the first line. [`detect_format`] tells the
//! two apart from the first non-blank line.

use crate::model::{Drum, ToqueSpec};

const NAME_PREFIX: &str = "Toque:";
const TIME_PREFIX: &str = "Time:";

/// Header convention of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// `Toque:` and `Time:` header lines (both optional)
    Labelled,
    /// First line is the bare time signature, no toque name
    BareTimeSignature,
}

/// Which drum, if any, the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Drum(Drum),
}

/// Decide the header convention from the first non-blank line.
pub fn detect_format(text: &str) -> HeaderFormat {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty());
    match first {
        Some(line) if !is_header(line) && is_bare_time_signature(line) => {
            HeaderFormat::BareTimeSignature
        }
        _ => HeaderFormat::Labelled,
    }
}

/// Parse toque notation. Never fails: unknown lines are skipped and missing
/// sections leave empty parts.
pub fn parse_toque(text: &str) -> ToqueSpec {
    let format = detect_format(text);
    log::debug!("parsing toque in {format:?} format");

    let mut toque = ToqueSpec::new();
    let mut lines = text.lines().map(str::trim);

    if format == HeaderFormat::BareTimeSignature {
        // Blank lines ahead of the signature carry nothing.
        if let Some(sig) = lines.by_ref().find(|l| !l.is_empty()) {
            toque.time_signature = sig.to_string();
        }
    }

    let mut section = Section::Preamble;
    for line in lines {
        if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
            toque.name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(TIME_PREFIX) {
            toque.time_signature = rest.trim().to_string();
        } else if let Some(drum) = Drum::from_name(line) {
            section = Section::Drum(drum);
        } else if let Section::Drum(drum) = section {
            toque.parts.entry(drum).or_default().push_str(line);
        }
    }

    toque
}

fn is_header(line: &str) -> bool {
    line.starts_with(NAME_PREFIX) || line.starts_with(TIME_PREFIX)
}

/// `<digits>/<digits>`, e.g. `4/4` or `12/8`.
fn is_bare_time_signature(line: &str) -> bool {
    let Some((num, den)) = line.split_once('/') else {
        return false;
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    all_digits(num) && all_digits(den)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_headers_and_sections() {
        let toque = parse_toque(
            "Toque: Chachalokafun\nTime: 4/4\n\nOkonkolo\n-A-A\nItotele\nS-PP\nIya\nA--S\n",
        );
        assert_eq!(toque.name, "Chachalokafun");
        assert_eq!(toque.time_signature, "4/4");
        assert_eq!(toque.part(Drum::Okonkolo), "-A-A");
        assert_eq!(toque.part(Drum::Itotele), "S-PP");
        assert_eq!(toque.part(Drum::Iya), "A--S");
    }

    #[test]
    fn body_lines_concatenate() {
        let toque = parse_toque("Time: 4/4\nIya\n  A--S  \n\nA-P-\n");
        assert_eq!(toque.part(Drum::Iya), "A--SA-P-");
    }

    #[test]
    fn header_values_are_trimmed() {
        let toque = parse_toque("   Toque:   Iyesa  \nTime:6/8\n");
        assert_eq!(toque.name, "Iyesa");
        assert_eq!(toque.time_signature, "6/8");
    }

    #[test]
    fn headers_may_follow_sections() {
        let toque = parse_toque("Okonkolo\nA-A-\nTime: 6/8\nA\n");
        assert_eq!(toque.time_signature, "6/8");
        // The header does not close the section.
        assert_eq!(toque.part(Drum::Okonkolo), "A-A-A");
    }

    #[test]
    fn repeated_section_keeps_appending() {
        let toque = parse_toque("Iya\nAA\nOkonkolo\nSS\nIya\nPP\n");
        assert_eq!(toque.part(Drum::Iya), "AAPP");
        assert_eq!(toque.part(Drum::Okonkolo), "SS");
    }

    #[test]
    fn preamble_text_is_ignored() {
        let toque = parse_toque("some notes about this toque\n\nItotele\nA\n");
        assert_eq!(toque.part(Drum::Itotele), "A");
        assert_eq!(toque.name, "");
        assert_eq!(toque.time_signature, "");
    }

    #[test]
    fn drum_heading_must_match_exactly() {
        let toque = parse_toque("Okonkolo\nA-\niya\nS-\n");
        assert_eq!(toque.part(Drum::Okonkolo), "A-iyaS-");
        assert_eq!(toque.part(Drum::Iya), "");
    }

    #[test]
    fn empty_input_gives_empty_parts() {
        let toque = parse_toque("");
        assert_eq!(toque, ToqueSpec::new());
    }

    #[test]
    fn detects_bare_time_signature() {
        assert_eq!(detect_format("4/4\nOkonkolo\nA"), HeaderFormat::BareTimeSignature);
        assert_eq!(detect_format("\n\n 6/8 \n"), HeaderFormat::BareTimeSignature);
        assert_eq!(detect_format("Time: 4/4\n"), HeaderFormat::Labelled);
        assert_eq!(detect_format("Okonkolo\n4/4"), HeaderFormat::Labelled);
        assert_eq!(detect_format("four/four\n"), HeaderFormat::Labelled);
        assert_eq!(detect_format(""), HeaderFormat::Labelled);
    }

    #[test]
    fn bare_format_reads_signature_from_first_line() {
        let toque = parse_toque("\n6/8\nOkonkolo\nASAPAS\n");
        assert_eq!(toque.time_signature, "6/8");
        assert_eq!(toque.name, "");
        assert_eq!(toque.part(Drum::Okonkolo), "ASAPAS");
    }
}
