//! Column layout shared by the counting rows and the drum rows.

use super::constants::BAR_LINE_CLASS;
use crate::model::{Stroke, ToqueSpec};

/// Column geometry of one rendered toque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Grid {
    /// Data columns per row (the longest part)
    pub(super) columns: usize,
    pub(super) beats_per_bar: usize,
    pub(super) top_count_unit: usize,
}

impl Grid {
    pub(super) fn for_toque(toque: &ToqueSpec) -> Self {
        let meter = toque.meter();
        Self {
            columns: toque.max_len(),
            beats_per_bar: meter.beats_per_bar(),
            top_count_unit: meter.top_count_unit(),
        }
    }

    /// Class of column `i` (0-based): the last column of each bar is marked.
    pub(super) fn bar_class(&self, i: usize) -> &'static str {
        if (i + 1) % self.beats_per_bar == 0 {
            BAR_LINE_CLASS
        } else {
            ""
        }
    }

    /// Group number shown on the first column of each group, blank elsewhere.
    pub(super) fn upper_count(&self, i: usize) -> Option<usize> {
        (i % self.top_count_unit == 0).then(|| i / self.top_count_unit + 1)
    }

    /// Position within the group, 1-based, shown on every column.
    pub(super) fn lower_count(&self, i: usize) -> usize {
        i % self.top_count_unit + 1
    }

    /// `part` right-padded with the filler symbol to exactly `columns` symbols.
    pub(super) fn padded<'a>(&self, part: &'a str) -> impl Iterator<Item = char> + 'a {
        part.chars()
            .chain(std::iter::repeat(Stroke::FILLER))
            .take(self.columns)
    }
}
