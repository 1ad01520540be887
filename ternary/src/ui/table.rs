//! Table rendering with `comfy-table`.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::AnsiColors;

use crate::ui::theme::{entry_color, ThemeEntry, ThemeMap};

fn table_color(color: AnsiColors) -> Color {
    match color {
        AnsiColors::Black => Color::Black,
        AnsiColors::Red => Color::DarkRed,
        AnsiColors::Green => Color::DarkGreen,
        AnsiColors::Yellow => Color::DarkYellow,
        AnsiColors::Blue => Color::DarkBlue,
        AnsiColors::Magenta => Color::DarkMagenta,
        AnsiColors::Cyan => Color::DarkCyan,
        AnsiColors::White => Color::Grey,
        AnsiColors::BrightBlack => Color::DarkGrey,
        AnsiColors::BrightRed => Color::Red,
        AnsiColors::BrightGreen => Color::Green,
        AnsiColors::BrightYellow => Color::Yellow,
        AnsiColors::BrightBlue => Color::Blue,
        AnsiColors::BrightMagenta => Color::Magenta,
        AnsiColors::BrightCyan => Color::Cyan,
        _ => Color::White,
    }
}

fn themed_cell(text: impl ToString, entry: ThemeEntry, theme: &ThemeMap, use_color: bool) -> Cell {
    let cell = Cell::new(text.to_string());
    match entry_color(theme, entry) {
        Some(color) if use_color => cell.fg(table_color(color)),
        _ => cell,
    }
}

/// A table with a header row and value rows.
pub fn build_table<S: ToString>(
    header: &[&str],
    rows: impl IntoIterator<Item = Vec<S>>,
    theme: &ThemeMap,
    use_color: bool,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            header
                .iter()
                .map(|h| themed_cell(h, ThemeEntry::Header, theme, use_color))
                .collect::<Vec<_>>(),
        );
    if !use_color {
        table.force_no_tty();
    }
    for row in rows {
        table.add_row(
            row.into_iter()
                .map(|v| themed_cell(v.to_string(), ThemeEntry::Value, theme, use_color))
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// A two-column label/value table.
pub fn build_summary_table(rows: &[(&str, String)], theme: &ThemeMap, use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !use_color {
        table.force_no_tty();
    }
    for (label, value) in rows {
        table.add_row(vec![
            themed_cell(label, ThemeEntry::Label, theme, use_color),
            themed_cell(value, ThemeEntry::Value, theme, use_color),
        ]);
    }
    table
}
