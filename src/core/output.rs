//! Bounded renderings of CSV cell text for log fields.
//!
//! Cells are Debug-quoted, so embedded newlines, tabs and empty strings stay
//! visible on a single log line.

use std::fmt::Write;

/// Quotes `cell`, cutting it after `max_chars` characters.
pub fn cell_preview(cell: &str, max_chars: usize) -> String {
    match cell.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{:?}…", &cell[..cut]),
        None => format!("{cell:?}"),
    }
}

/// Previews the first `max_items` names; the rest are only counted.
pub fn name_list_preview<'a, I>(names: I, max_items: usize, max_chars: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut shown = Vec::with_capacity(max_items);
    let mut hidden = 0usize;
    for name in names {
        if shown.len() < max_items {
            shown.push(cell_preview(name, max_chars));
        } else {
            hidden += 1;
        }
    }

    let mut out = shown.join(", ");
    if hidden > 0 {
        let _ = write!(out, " (+{hidden} more)");
    }
    out
}
