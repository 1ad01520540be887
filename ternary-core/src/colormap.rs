//! Colormaps for heatmap polygons.
//!
//! Each map is piecewise linear per channel and sampled into a 256-entry
//! lookup table, so a value resolves to the same color a matplotlib
//! colormap of the same name would give it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TernaryError;

/// Number of entries in a sampled colormap.
pub const LUT_SIZE: usize = 256;

/// Control points `(x, y)` of one channel. `x` runs from 0 to 1.
type Channel = &'static [(f64, f64)];

const JET: [Channel; 3] = [
    &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)],
    &[(0.0, 0.0), (0.125, 0.0), (0.375, 1.0), (0.64, 1.0), (0.91, 0.0), (1.0, 0.0)],
    &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)],
];

const GRAY: [Channel; 3] = [
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
    &[(0.0, 0.0), (1.0, 1.0)],
];

const HOT: [Channel; 3] = [
    &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)],
    &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)],
];

/// The colormaps available to heatmaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Colormap {
    #[default]
    Jet,
    Gray,
    Hot,
}

impl Colormap {
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Jet => "jet",
            Colormap::Gray => "gray",
            Colormap::Hot => "hot",
        }
    }

    fn channels(&self) -> &'static [Channel; 3] {
        match self {
            Colormap::Jet => &JET,
            Colormap::Gray => &GRAY,
            Colormap::Hot => &HOT,
        }
    }

    /// Looks up a colormap by name, falling back to the default when `name`
    /// is `None`.
    pub fn lookup(name: Option<&str>) -> Result<Self, TernaryError> {
        match name {
            None => Ok(Colormap::default()),
            Some(n) => n.parse(),
        }
    }

    /// RGB color for `x` in `[0, 1]`.
    ///
    /// Values below 0 or above 1 clamp to the ends of the map. NaN maps to
    /// black.
    pub fn rgb(&self, x: f64) -> [f64; 3] {
        if x.is_nan() {
            return [0.0, 0.0, 0.0];
        }
        let n = LUT_SIZE as f64;
        // Index into the table the way a sampled colormap does: x·N truncated,
        // with x == 1 folded onto the last entry.
        let index = ((x * n).clamp(0.0, n - 1.0)) as usize;
        let position = index as f64 / (n - 1.0);

        let channels = self.channels();
        [
            interpolate(channels[0], position),
            interpolate(channels[1], position),
            interpolate(channels[2], position),
        ]
    }
}

impl FromStr for Colormap {
    type Err = TernaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jet" => Ok(Colormap::Jet),
            "gray" | "grey" => Ok(Colormap::Gray),
            "hot" => Ok(Colormap::Hot),
            _ => Err(TernaryError::UnknownColormap(s.to_string())),
        }
    }
}

impl TryFrom<String> for Colormap {
    type Error = TernaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn interpolate(points: Channel, x: f64) -> f64 {
    for window in points.windows(2) {
        let (x0, y0) = window[0];
        let (x1, y1) = window[1];
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
        }
    }
    points.last().map(|&(_, y)| y).unwrap_or(0.0)
}

/// Formats an RGB triple as `#rrggbb`, rounding half to even.
pub fn to_hex(rgb: [f64; 3]) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

/// Maps `value` to a hex color after normalizing `[lower, upper]` onto the
/// colormap. A degenerate range maps everything to the bottom color.
pub fn colormapper(value: f64, lower: f64, upper: f64, cmap: Colormap) -> String {
    let x = if upper - lower == 0.0 {
        0.0
    } else {
        (value - lower) / (upper - lower)
    };
    to_hex(cmap.rgb(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        // Dark blue at the bottom, dark red at the top
        assert_eq!(colormapper(0.0, 0.0, 1.0, Colormap::Jet), "#000080");
        assert_eq!(colormapper(1.0, 0.0, 1.0, Colormap::Jet), "#800000");
    }

    #[test]
    fn test_gray_is_linear() {
        assert_eq!(colormapper(0.0, 0.0, 10.0, Colormap::Gray), "#000000");
        assert_eq!(colormapper(10.0, 0.0, 10.0, Colormap::Gray), "#ffffff");
        let mid = Colormap::Gray.rgb(0.5);
        assert_eq!(mid[0], 128.0 / 255.0);
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        assert_eq!(
            colormapper(-5.0, 0.0, 1.0, Colormap::Jet),
            colormapper(0.0, 0.0, 1.0, Colormap::Jet)
        );
        assert_eq!(
            colormapper(5.0, 0.0, 1.0, Colormap::Jet),
            colormapper(1.0, 0.0, 1.0, Colormap::Jet)
        );
    }

    #[test]
    fn test_degenerate_range_uses_bottom_color() {
        assert_eq!(colormapper(3.0, 3.0, 3.0, Colormap::Hot), to_hex(Colormap::Hot.rgb(0.0)));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Colormap::lookup(None).unwrap(), Colormap::Jet);
        assert_eq!(Colormap::lookup(Some("GREY")).unwrap(), Colormap::Gray);
        assert!(matches!(
            Colormap::lookup(Some("plasma")),
            Err(TernaryError::UnknownColormap(name)) if name == "plasma"
        ));
    }

    #[test]
    fn test_to_hex_rounds_half_to_even() {
        assert_eq!(to_hex([0.5, 0.0, 1.0]), "#8000ff");
        assert_eq!(to_hex([2.0, -1.0, 0.0]), "#ff0000");
    }
}
