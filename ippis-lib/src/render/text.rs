use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::table::Alignment;

/// Terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Cuts `s` to `max_width` columns, ending it with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Pads `s` with spaces to `width` columns.
pub fn pad(s: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(display_width(s));
    match align {
        Alignment::Left => format!("{}{}", s, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), s),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
        }
    }
}
