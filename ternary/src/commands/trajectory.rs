//! `project` and `scatter`: data series placed on the simplex.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Read;

use ternary_core::{check_scale, load_trajectory, parse_trajectory, project_trajectory, random_lattice_points};

use crate::cli::{ProjectCommand, ScatterCommand};
use crate::commands::geometry::{print_points, PointRow};
use crate::commands::Console;

pub fn run_project(args: &ProjectCommand, console: &Console) -> Result<()> {
    let points = match &args.input_file {
        Some(path) => load_trajectory(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read points from stdin")?;
            parse_trajectory(&text)?
        }
    };
    if points.is_empty() {
        console.warn("no points to project");
    }

    let projected = project_trajectory(&points, args.permutation.as_ref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&projected)?);
    } else {
        for [x, y] in projected {
            println!("{} {}", x, y);
        }
    }
    Ok(())
}

pub fn run_scatter(args: &ScatterCommand, console: &Console) -> Result<()> {
    check_scale(args.scale)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let points = random_lattice_points(args.scale, args.count, &mut rng);
    if points.is_empty() && args.count > 0 {
        console.warn(&format!("cannot draw points with a positive first coordinate at scale {}", args.scale));
    }

    let rows = points
        .into_iter()
        .map(|p| PointRow::from_lattice(p, false))
        .collect::<Result<Vec<_>>>()?;
    print_points(&rows, args.json, console)
}
