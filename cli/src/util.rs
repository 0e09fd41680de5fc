// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Formats a date the way lists and forms display it, `DD/MM/YYYY`.
pub fn format_date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// Display width of the first `first_n_chars` characters of `s`.
pub fn unicode_width_of_slice(s: &str, first_n_chars: usize) -> usize {
    if first_n_chars == 0 {
        return 0;
    }
    match s.char_indices().nth(first_n_chars) {
        Some((byte_idx, _)) => s.get(..byte_idx).map_or(0, UnicodeWidthStr::width),
        None => s.width(),
    }
}

/// Byte range of the grapheme cluster at index `g_idx` in `s`, if any.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// Truncates `s` to at most `max_width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if width + w + 1 > max_width {
            break;
        }
        out.push_str(g);
        width += w;
    }
    out.push('…');
    out
}
