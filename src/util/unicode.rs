//! Grapheme- and width-aware helpers for text entries and truncated rows.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Terminal cells needed to show `s`
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells` cells, ending in `…` when anything was cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w + 1 > max_cells {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push(ELLIPSIS);
    out
}

/// Byte offset just past the grapheme at `offset`, or `None` at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(offset..)?
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}

/// Byte offset of the grapheme before `offset`, or `None` at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(..offset)?
        .graphemes(true)
        .next_back()
        .map(|g| offset - g.len())
}

/// Start of the word before `offset`. Whitespace directly before `offset`
/// is skipped first, so repeated calls walk back one word at a time.
pub fn word_boundary_left(s: &str, offset: usize) -> usize {
    let Some(prefix) = s.get(..offset) else {
        return 0;
    };
    let mut pos = offset;
    let mut in_word = false;
    for g in prefix.graphemes(true).rev() {
        let space = g.chars().all(char::is_whitespace);
        if space && in_word {
            break;
        }
        in_word |= !space;
        pos -= g.len();
    }
    pos
}
