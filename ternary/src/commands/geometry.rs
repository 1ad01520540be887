//! `lattice` and `gridlines`: the geometry of the simplex itself.

use anyhow::Result;
use serde::Serialize;

use ternary_core::{boundary, check_scale, gridlines, lattice_to_point, normalize, project_point, simplex_iterator, LatticePoint, Segment};

use crate::cli::{GridlinesCommand, LatticeCommand};
use crate::commands::Console;
use crate::ui::table::build_table;

/// A simplex point with its plane coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRow {
    pub point: [f64; 3],
    pub x: f64,
    pub y: f64,
}

impl PointRow {
    pub fn new(point: [f64; 3]) -> Self {
        let [x, y] = project_point(point, None);
        Self { point, x, y }
    }

    pub fn from_lattice(point: LatticePoint, normalized: bool) -> Result<Self> {
        let point = lattice_to_point(point);
        if normalized {
            let p = normalize(&point)?;
            Ok(Self::new([p[0], p[1], p[2]]))
        } else {
            Ok(Self::new(point))
        }
    }

    fn cells(&self) -> Vec<String> {
        let [i, j, k] = self.point;
        vec![i.to_string(), j.to_string(), k.to_string(), format!("{:.4}", self.x), format!("{:.4}", self.y)]
    }
}

/// Prints points as JSON or as a table.
pub fn print_points(rows: &[PointRow], json: bool, console: &Console) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        let table = build_table(
            &["i", "j", "k", "x", "y"],
            rows.iter().map(PointRow::cells),
            &console.theme,
            console.stdout_color,
        );
        println!("{}", table);
    }
    Ok(())
}

pub fn run_lattice(args: &LatticeCommand, console: &Console) -> Result<()> {
    check_scale(args.scale)?;
    let rows = simplex_iterator(args.scale, !args.no_boundary)
        .map(|p| PointRow::from_lattice(p, args.normalize))
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        console.warn(&format!("no interior lattice points at scale {}", args.scale));
    }
    console.info(&format!("{} lattice points at scale {}", rows.len(), args.scale));
    print_points(&rows, args.json, console)
}

#[derive(Serialize)]
struct SegmentRow<'a> {
    #[serde(flatten)]
    segment: &'a Segment,
    projected: [[f64; 2]; 2],
}

#[derive(Serialize)]
struct GridReport<'a> {
    scale: usize,
    multiple: usize,
    boundary: Vec<SegmentRow<'a>>,
    gridlines: Vec<SegmentRow<'a>>,
}

fn segment_rows(segments: &[Segment]) -> Vec<SegmentRow<'_>> {
    segments
        .iter()
        .map(|segment| SegmentRow { segment, projected: segment.projected() })
        .collect()
}

pub fn run_gridlines(args: &GridlinesCommand) -> Result<()> {
    check_scale(args.scale)?;
    let sides = boundary(args.scale as f64);
    let lines = gridlines(args.scale, args.multiple)?;
    let report = GridReport {
        scale: args.scale,
        multiple: args.multiple,
        boundary: segment_rows(&sides),
        gridlines: segment_rows(&lines),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
