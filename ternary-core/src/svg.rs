//! Standalone SVG export of heatmap cells.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use log::info;

use crate::errors::TernaryError;
use crate::heatmap::HeatmapCell;
use crate::simplex::SQRT3_OVER_2;

fn svg_polygon(out: &mut String, vertices: &[[f64; 2]], color: &str, height: f64) {
    let points: Vec<String> = vertices
        .iter()
        .map(|[x, y]| format!("{:.6},{:.6}", x, height - y))
        .collect();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "  <polygon points=\"{}\" style=\"fill:{};stroke:{};stroke-width:0\"/>",
        points.join(" "),
        color,
        color
    );
}

/// Renders heatmap cells as an SVG document.
///
/// The canvas covers the simplex at `scale` plus one lattice step, which is
/// how far triangular cells reach. The y axis is flipped so the simplex
/// points up.
pub fn svg_heatmap(cells: &[HeatmapCell], scale: usize) -> String {
    let width = scale as f64 + 1.0;
    let height = width * SQRT3_OVER_2;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.6} {:.6}\" width=\"{:.6}\" height=\"{:.6}\">",
        width, height, width, height
    );
    for cell in cells {
        svg_polygon(&mut out, &cell.vertices, &cell.color, height);
    }
    out.push_str("</svg>\n");
    out
}

/// Writes [`svg_heatmap`] output to `path`.
///
/// Write failures come back as [`TernaryError::AnyhowWrapper`] with the path
/// in the message.
pub fn write_svg_heatmap<P: AsRef<Path>>(
    path: P,
    cells: &[HeatmapCell],
    scale: usize,
) -> Result<(), TernaryError> {
    let path = path.as_ref();
    info!("Writing SVG heatmap with {} cells to {}", cells.len(), path.display());
    std::fs::write(path, svg_heatmap(cells, scale))
        .with_context(|| format!("Failed to write SVG file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::CellShape;

    fn cell() -> HeatmapCell {
        HeatmapCell {
            index: (0, 0),
            shape: CellShape::UpTriangle,
            value: 1.0,
            color: "#ff0000".to_string(),
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [0.5, SQRT3_OVER_2]],
        }
    }

    #[test]
    fn test_svg_contains_one_polygon_per_cell() {
        let svg = svg_heatmap(&[cell(), cell()], 1);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains("fill:#ff0000;stroke:#ff0000"));
    }

    #[test]
    fn test_svg_flips_y_axis() {
        let svg = svg_heatmap(&[cell()], 1);
        let height = 2.0 * SQRT3_OVER_2;
        // The origin lands on the bottom edge of the canvas
        assert!(svg.contains(&format!("0.000000,{:.6}", height)));
    }

    #[test]
    fn test_write_svg_heatmap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.svg");
        write_svg_heatmap(&path, &[cell()], 1).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, svg_heatmap(&[cell()], 1));
    }

    #[test]
    fn test_write_svg_heatmap_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("heatmap.svg");
        match write_svg_heatmap(&path, &[cell()], 1) {
            Err(TernaryError::AnyhowWrapper(e)) => {
                assert!(format!("{:#}", e).contains("Failed to write SVG file"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
