use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::components::Alignment;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate `s` to at most `max_width` columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Keep the rightmost part of `s` that fits in `max_width` columns.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();

    for (idx, ch) in s.char_indices().rev() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }

    &s[start..]
}

/// Truncate or pad `s` to exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let slack = width.saturating_sub(display_width(&text));

    let (left, right) = match align {
        Alignment::Left => (0, slack),
        Alignment::Right => (slack, 0),
        Alignment::Center => (slack / 2, slack - slack / 2),
    };

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
