//! Module for managing the application's command-line interface (CLI) theme.
//!
//! A theme maps each kind of console output (headers, status messages,
//! table labels and values) to an optional foreground color. Only the
//! 16 named ANSI colors are supported. Themes load from YAML; entries a
//! file leaves out keep their default color.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Table headers and section titles.
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Left-hand column of key/value tables.
    Label,
    /// Numbers and other computed values.
    Value,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::Label,
        ThemeEntry::Value,
    ];
}

/// A named ANSI color.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(String);

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color '{}'; expected one of: {}.",
            self.0,
            COLOR_NAMES.join(", ")
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

const COLOR_NAMES: [&str; 16] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    "brightblack", "brightred", "brightgreen", "brightyellow", "brightblue",
    "brightmagenta", "brightcyan", "brightwhite",
];

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if COLOR_NAMES.contains(&lower.as_str()) {
            Ok(ThemeColor(lower))
        } else {
            Err(ParseThemeColorError(s.to_string()))
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(value: ThemeColor) -> Self {
        value.0
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor(name.to_string())
    }

    /// Converts the color into its `owo_colors::AnsiColors` counterpart.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self.0.as_str() {
            "black" => AnsiColors::Black,
            "red" => AnsiColors::Red,
            "green" => AnsiColors::Green,
            "yellow" => AnsiColors::Yellow,
            "blue" => AnsiColors::Blue,
            "magenta" => AnsiColors::Magenta,
            "cyan" => AnsiColors::Cyan,
            "brightblack" => AnsiColors::BrightBlack,
            "brightred" => AnsiColors::BrightRed,
            "brightgreen" => AnsiColors::BrightGreen,
            "brightyellow" => AnsiColors::BrightYellow,
            "brightblue" => AnsiColors::BrightBlue,
            "brightmagenta" => AnsiColors::BrightMagenta,
            "brightcyan" => AnsiColors::BrightCyan,
            "brightwhite" => AnsiColors::BrightWhite,
            _ => AnsiColors::White,
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::named(name)) }
    }

    /// Loads a theme from a YAML file and fills in missing entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        HashMap::from([
            (ThemeEntry::Header, Self::fg("cyan")),
            (ThemeEntry::Success, Self::fg("green")),
            (ThemeEntry::Info, Self::fg("white")),
            (ThemeEntry::Warn, Self::fg("yellow")),
            (ThemeEntry::Error, Self::fg("red")),
            (ThemeEntry::Label, Self::fg("brightblack")),
            (ThemeEntry::Value, Self::fg("brightwhite")),
        ])
    }
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// The color for `entry`, if the theme assigns one.
pub fn entry_color(theme: &ThemeMap, entry: ThemeEntry) -> Option<AnsiColors> {
    theme
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_ansi_color)
}
