//! Heatmaps of scalar fields over the simplex.
//!
//! A heatmap is computed in two steps. [`heatmapf`] evaluates a field on
//! every lattice point, keyed by `(i, j)`. [`heatmap_cells`] then turns those
//! values into colored polygons: either triangles, with the downward
//! triangles smoothed from their three neighbours, or hexagons centred on
//! each lattice point.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use ternary_math::compute_stats;

use crate::colormap::{colormapper, Colormap};
use crate::errors::TernaryError;
use crate::field::ScalarField;
use crate::simplex::{normalize, simplex_iterator, SQRT3, SQRT3_OVER_2};

/// Default number of colorbar ticks.
pub const DEFAULT_COLORBAR_TICKS: usize = 7;

/// A polygon in plane coordinates.
pub type Polygon = Vec<[f64; 2]>;

/// How lattice values are tiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HeatmapStyle {
    #[default]
    Triangular,
    Hexagonal,
}

impl FromStr for HeatmapStyle {
    type Err = TernaryError;

    /// Only the first letter matters, so `"tri"` and `"Hex"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('t') => Ok(HeatmapStyle::Triangular),
            Some('h') => Ok(HeatmapStyle::Hexagonal),
            _ => Err(TernaryError::InvalidStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for HeatmapStyle {
    type Error = TernaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for HeatmapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatmapStyle::Triangular => f.write_str("triangular"),
            HeatmapStyle::Hexagonal => f.write_str("hexagonal"),
        }
    }
}

/// Vertices of the upward triangle with its lower-left corner at `(i, j)`.
pub fn triangle_coordinates(i: usize, j: usize) -> Polygon {
    let (i, j) = (i as f64, j as f64);
    vec![
        [i / 2.0 + j, i * SQRT3_OVER_2],
        [i / 2.0 + j + 1.0, i * SQRT3_OVER_2],
        [i / 2.0 + j + 0.5, (i + 1.0) * SQRT3_OVER_2],
    ]
}

/// Vertices of the downward triangle sitting to the right of the upward
/// triangle at `(i, j)`.
pub fn alt_triangle_coordinates(i: usize, j: usize) -> Polygon {
    let (i, j) = (i as f64, j as f64);
    vec![
        [i / 2.0 + j + 1.0, i * SQRT3_OVER_2],
        [i / 2.0 + j + 1.5, (i + 1.0) * SQRT3_OVER_2],
        [i / 2.0 + j + 0.5, (i + 1.0) * SQRT3_OVER_2],
    ]
}

fn add(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [a[0] + b[0], a[1] + b[1]]
}

fn sub(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [a[0] - b[0], a[1] - b[1]]
}

fn half(a: [f64; 2]) -> [f64; 2] {
    [a[0] / 2.0, a[1] / 2.0]
}

/// Vertices of the hexagon around lattice point `(i, j, k)`.
///
/// Hexagons at the three corners are cut down to quadrilaterals and those on
/// the edges to pentagons, so the tiling never leaves the simplex.
pub fn hexagon_coordinates(i: usize, j: usize, k: usize) -> Polygon {
    let alpha = [0.0, 1.0 / SQRT3];
    let delta_up = [0.5, 1.0 / (2.0 * SQRT3)];
    let delta_down = [0.5, -1.0 / (2.0 * SQRT3)];
    let i_vec = [0.5, SQRT3 / 2.0];
    let i_vec_down = [0.5, -SQRT3 / 2.0];
    let delta_x = [0.5, 0.0];

    let steps = i + j + k;
    let ij = [i as f64 / 2.0 + j as f64, SQRT3 / 2.0 * i as f64];

    if i == steps {
        vec![ij, add(ij, half(i_vec_down)), sub(ij, alpha), sub(ij, half(i_vec))]
    } else if k == steps {
        vec![ij, add(ij, half(i_vec)), add(ij, delta_up), add(ij, delta_x)]
    } else if j == steps {
        vec![ij, sub(ij, delta_x), sub(ij, delta_down), sub(ij, half(i_vec_down))]
    } else if i == 0 {
        vec![
            sub(ij, delta_x),
            sub(ij, delta_down),
            add(ij, alpha),
            add(ij, delta_up),
            add(ij, delta_x),
        ]
    } else if j == 0 {
        vec![
            add(ij, half(i_vec)),
            add(ij, delta_up),
            add(ij, delta_down),
            sub(ij, alpha),
            sub(ij, half(i_vec)),
        ]
    } else if k == 0 {
        vec![
            add(ij, half(i_vec_down)),
            sub(ij, alpha),
            sub(ij, delta_up),
            sub(ij, delta_down),
            sub(ij, half(i_vec_down)),
        ]
    } else {
        vec![
            add(ij, alpha),
            add(ij, delta_up),
            add(ij, delta_down),
            sub(ij, alpha),
            sub(ij, delta_up),
            sub(ij, delta_down),
        ]
    }
}

/// Field values on the lattice of a simplex, keyed by `(i, j)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapData {
    scale: usize,
    values: BTreeMap<(usize, usize), f64>,
}

impl HeatmapData {
    pub fn new(scale: usize) -> Self {
        Self { scale, values: BTreeMap::new() }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn insert(&mut self, i: usize, j: usize, value: f64) {
        self.values.insert((i, j), value);
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(&(i, j)).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in `(i, j)` order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.values.iter().map(|(&key, &value)| (key, value))
    }

    /// For every key, the mean of the values at `(i, j)`, `(i, j + 1)` and
    /// `(i + 1, j)`, or `None` when one of them is missing. These color the
    /// downward triangles of a triangular heatmap.
    pub fn alt_values(&self) -> impl Iterator<Item = ((usize, usize), Option<f64>)> + '_ {
        self.values.iter().map(move |(&(i, j), &value)| {
            let smoothed = match (self.get(i, j + 1), self.get(i + 1, j)) {
                (Some(right), Some(up)) => Some((value + right + up) / 3.0),
                _ => None,
            };
            ((i, j), smoothed)
        })
    }

    /// Smallest and largest value, ignoring NaN. `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let values: Vec<f64> = self.values.values().copied().collect();
        let stats = compute_stats(&values);
        Some((stats.min, stats.max))
    }
}

/// Evaluates `field` on every lattice point of the simplex at `scale`.
///
/// Lattice points are normalized before evaluation, so the field always sees
/// coordinates summing to 1.
pub fn heatmapf<F: ScalarField + ?Sized>(
    field: &F,
    scale: usize,
    boundary: bool,
) -> Result<HeatmapData, TernaryError> {
    debug!(
        "Evaluating field '{}' at scale {} (boundary: {})",
        field.name(),
        scale,
        boundary
    );

    let mut data = HeatmapData::new(scale);
    for (i, j, k) in simplex_iterator(scale, boundary) {
        let point = normalize(&[i as f64, j as f64, k as f64])?;
        data.insert(i, j, field.evaluate(&point));
    }

    debug!("Evaluated {} lattice points.", data.len());
    Ok(data)
}

/// Rendering options for a heatmap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapOptions {
    pub style: HeatmapStyle,
    pub cmap: Colormap,
    /// Lower color limit; the smallest value when unset.
    pub vmin: Option<f64>,
    /// Upper color limit; the largest value when unset.
    pub vmax: Option<f64>,
}

impl HeatmapOptions {
    /// Color limits for `data`, falling back to its value range.
    pub fn limits(&self, data: &HeatmapData) -> (f64, f64) {
        let (lo, hi) = data.value_range().unwrap_or((0.0, 0.0));
        (self.vmin.unwrap_or(lo), self.vmax.unwrap_or(hi))
    }
}

/// Which tile a cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellShape {
    UpTriangle,
    DownTriangle,
    Hexagon,
}

/// One colored polygon of a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub index: (usize, usize),
    pub shape: CellShape,
    pub value: f64,
    pub color: String,
    pub vertices: Polygon,
}

/// Builds the colored polygons of a heatmap.
pub fn heatmap_cells(data: &HeatmapData, options: &HeatmapOptions) -> Vec<HeatmapCell> {
    let (vmin, vmax) = options.limits(data);
    let scale = data.scale();
    let mut cells = Vec::new();

    let mut push = |index: (usize, usize), shape: CellShape, value: f64, vertices: Polygon| {
        cells.push(HeatmapCell {
            index,
            shape,
            value,
            color: colormapper(value, vmin, vmax, options.cmap),
            vertices,
        });
    };

    match options.style {
        HeatmapStyle::Hexagonal => {
            for ((i, j), value) in data.iter() {
                // Keys from the lattice always satisfy i + j <= scale
                let k = scale.saturating_sub(i + j);
                push((i, j), CellShape::Hexagon, value, hexagon_coordinates(i, j, k));
            }
        }
        HeatmapStyle::Triangular => {
            for ((i, j), value) in data.iter() {
                push((i, j), CellShape::UpTriangle, value, triangle_coordinates(i, j));
            }
            for ((i, j), value) in data.alt_values() {
                if let Some(value) = value {
                    push((i, j), CellShape::DownTriangle, value, alt_triangle_coordinates(i, j));
                }
            }
        }
    }

    cells
}

/// `count` evenly spaced colorbar ticks from `vmin` to `vmax`.
pub fn colorbar_ticks(vmin: f64, vmax: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![vmin],
        n => {
            let step = (vmax - vmin) / (n - 1) as f64;
            (0..n)
                .map(|t| if t == n - 1 { vmax } else { vmin + step * t as f64 })
                .collect()
        }
    }
}

/// Formats a colorbar tick with four decimals, or in scientific notation.
pub fn format_tick(value: f64, scientific: bool) -> String {
    if scientific {
        format!("{:.4e}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Summary of the values behind a heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueSummary {
    pub points: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl ValueSummary {
    pub fn of(data: &HeatmapData) -> Self {
        let values: Vec<f64> = data.iter().map(|(_, v)| v).collect();
        let stats = compute_stats(&values);
        Self {
            points: values.len(),
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    }
}

/// Everything needed to draw a heatmap: cells, limits, colorbar and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapReport {
    pub field: String,
    pub scale: usize,
    pub style: HeatmapStyle,
    pub cmap: Colormap,
    pub vmin: f64,
    pub vmax: f64,
    pub summary: ValueSummary,
    pub colorbar_ticks: Vec<f64>,
    pub cells: Vec<HeatmapCell>,
}

impl HeatmapReport {
    pub fn build(field: &str, data: &HeatmapData, options: &HeatmapOptions) -> Self {
        if data.is_empty() {
            warn!("Heatmap for '{}' at scale {} has no lattice points.", field, data.scale());
        }
        let (vmin, vmax) = options.limits(data);
        Self {
            field: field.to_string(),
            scale: data.scale(),
            style: options.style,
            cmap: options.cmap,
            vmin,
            vmax,
            summary: ValueSummary::of(data),
            colorbar_ticks: colorbar_ticks(vmin, vmax, DEFAULT_COLORBAR_TICKS),
            cells: heatmap_cells(data, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ShannonEntropyField;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_style_parsing() {
        assert_eq!("triangular".parse::<HeatmapStyle>().unwrap(), HeatmapStyle::Triangular);
        assert_eq!("Hex".parse::<HeatmapStyle>().unwrap(), HeatmapStyle::Hexagonal);
        assert!(matches!("square".parse::<HeatmapStyle>(), Err(TernaryError::InvalidStyle(_))));
        assert!("".parse::<HeatmapStyle>().is_err());
    }

    #[test]
    fn test_triangles_share_edges() {
        let up = triangle_coordinates(0, 0);
        let down = alt_triangle_coordinates(0, 0);
        assert_eq!(up[1], down[0]);
        assert_eq!(up[2], down[2]);
    }

    #[test]
    fn test_hexagon_vertex_counts() {
        // corners
        assert_eq!(hexagon_coordinates(4, 0, 0).len(), 4);
        assert_eq!(hexagon_coordinates(0, 4, 0).len(), 4);
        assert_eq!(hexagon_coordinates(0, 0, 4).len(), 4);
        // edges
        assert_eq!(hexagon_coordinates(0, 2, 2).len(), 5);
        assert_eq!(hexagon_coordinates(2, 0, 2).len(), 5);
        assert_eq!(hexagon_coordinates(2, 2, 0).len(), 5);
        // interior
        assert_eq!(hexagon_coordinates(1, 2, 1).len(), 6);
    }

    #[test]
    fn test_interior_hexagon_is_centred() {
        let hex = hexagon_coordinates(1, 1, 1);
        let cx: f64 = hex.iter().map(|v| v[0]).sum::<f64>() / 6.0;
        let cy: f64 = hex.iter().map(|v| v[1]).sum::<f64>() / 6.0;
        assert!((cx - 1.5).abs() < EPSILON);
        assert!((cy - SQRT3_OVER_2).abs() < EPSILON);
    }

    #[test]
    fn test_heatmapf_counts_and_values() {
        let data = heatmapf(&ShannonEntropyField, 6, true).unwrap();
        assert_eq!(data.len(), 28);
        assert_eq!(data.get(0, 0), Some(0.0));
        assert!((data.get(2, 2).unwrap() - 3.0_f64.ln()).abs() < EPSILON);

        let interior = heatmapf(&ShannonEntropyField, 6, false).unwrap();
        assert_eq!(interior.len(), 10);
        assert_eq!(interior.get(0, 0), None);
    }

    #[test]
    fn test_heatmapf_scale_zero_with_boundary_fails() {
        assert!(matches!(
            heatmapf(&ShannonEntropyField, 0, true),
            Err(TernaryError::ZeroSum)
        ));
    }

    #[test]
    fn test_alt_values_average_neighbours() {
        let mut data = HeatmapData::new(1);
        data.insert(0, 0, 1.0);
        data.insert(0, 1, 2.0);
        data.insert(1, 0, 6.0);

        let alt: Vec<_> = data.alt_values().collect();
        assert_eq!(alt[0], ((0, 0), Some(3.0)));
        assert_eq!(alt[1], ((0, 1), None));
        assert_eq!(alt[2], ((1, 0), None));
    }

    #[test]
    fn test_triangular_cells() {
        let data = heatmapf(&ShannonEntropyField, 4, true).unwrap();
        let cells = heatmap_cells(&data, &HeatmapOptions::default());
        let up = cells.iter().filter(|c| c.shape == CellShape::UpTriangle).count();
        let down = cells.iter().filter(|c| c.shape == CellShape::DownTriangle).count();
        assert_eq!(up, 15);
        // One downward triangle per lattice point with both neighbours
        assert_eq!(down, 10);
        assert!(cells.iter().all(|c| c.color.starts_with('#') && c.color.len() == 7));
    }

    #[test]
    fn test_hexagonal_cells() {
        let data = heatmapf(&ShannonEntropyField, 4, false).unwrap();
        let options = HeatmapOptions { style: HeatmapStyle::Hexagonal, ..Default::default() };
        let cells = heatmap_cells(&data, &options);
        assert_eq!(cells.len(), data.len());
        assert!(cells.iter().all(|c| c.shape == CellShape::Hexagon));
    }

    #[test]
    fn test_explicit_limits_override_range() {
        let data = heatmapf(&ShannonEntropyField, 3, true).unwrap();
        let options = HeatmapOptions { vmin: Some(-1.0), ..Default::default() };
        let (lo, hi) = options.limits(&data);
        assert_eq!(lo, -1.0);
        assert!((hi - 3.0_f64.ln()).abs() < EPSILON);
    }

    #[test]
    fn test_colorbar_ticks() {
        assert_eq!(colorbar_ticks(0.0, 6.0, 7), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(colorbar_ticks(2.0, 5.0, 1), vec![2.0]);
        assert!(colorbar_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.5, false), "0.5000");
        assert_eq!(format_tick(12345.0, true), "1.2345e4");
    }

    #[test]
    fn test_report() {
        let data = heatmapf(&ShannonEntropyField, 5, true).unwrap();
        let report = HeatmapReport::build("entropy", &data, &HeatmapOptions::default());
        assert_eq!(report.summary.points, 21);
        assert_eq!(report.vmin, 0.0);
        assert_eq!(report.colorbar_ticks.len(), DEFAULT_COLORBAR_TICKS);
        assert_eq!(report.colorbar_ticks[6], report.vmax);
        assert!(!report.cells.is_empty());
    }
}
