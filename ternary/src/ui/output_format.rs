//! Themed status messages.
//!
//! Messages go to the given writer (stderr in the binary). Colors are only
//! applied when `use_color` is set, which the caller derives from whether
//! the stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{entry_color, ThemeEntry, ThemeMap};

/// Returns `text` colored per `entry`, or unchanged when color is off.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, use_color: bool) -> String {
    match entry_color(theme, entry) {
        Some(color) if use_color => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    use_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{}{}", prefix, message), entry, theme, use_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", message, ThemeEntry::Info, theme, use_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", message, ThemeEntry::Success, theme, use_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", message, ThemeEntry::Warn, theme, use_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme: &ThemeMap, use_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", message, ThemeEntry::Error, theme, use_color)
}
