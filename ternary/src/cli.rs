// ternary/src/cli.rs
//! This file defines the command-line interface (CLI) for the ternary application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ternary_core::{Colormap, HeatmapStyle, Permutation};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ternary",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute ternary plot data: entropy, Dirichlet densities, lattices and heatmaps",
    long_about = "ternary evaluates functions on the 2-simplex and produces the data behind ternary plots: lattice points, boundary and gridline segments, colored heatmap cells (triangular or hexagonal), colorbar ticks and projected trajectories. Output is a table for humans or JSON for other tools.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `ternary` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shannon entropy of a probability vector.
    #[command(about = "Computes the Shannon entropy of a probability vector.")]
    Entropy(EntropyCommand),

    /// Dirichlet density at a point.
    #[command(about = "Evaluates a Dirichlet density, or the log multivariate Beta of its parameters.")]
    Dirichlet(DirichletCommand),

    /// Lattice points of the simplex.
    #[command(about = "Lists the lattice points of the simplex at a given scale.")]
    Lattice(LatticeCommand),

    /// Boundary and gridline segments.
    #[command(about = "Prints boundary and gridline segments as JSON.")]
    Gridlines(GridlinesCommand),

    /// Heatmap of a scalar field over the simplex.
    #[command(about = "Computes a colored heatmap of a field over the simplex.")]
    Heatmap(HeatmapCommand),

    /// Projects a trajectory file to plane coordinates.
    #[command(about = "Projects barycentric points from a file or stdin to plane coordinates.")]
    Project(ProjectCommand),

    /// Random scatter sample on the lattice.
    #[command(about = "Draws random lattice points for a scatter plot.")]
    Scatter(ScatterCommand),
}

/// Arguments for the `entropy` command.
#[derive(Parser, Debug)]
pub struct EntropyCommand {
    /// The probabilities. Non-positive entries contribute nothing.
    #[arg(value_name = "P", required = true, allow_negative_numbers = true, help = "Probabilities p_1 ... p_n.")]
    pub probabilities: Vec<f64>,

    /// Report the entropy in bits instead of nats.
    #[arg(long, help = "Report the entropy in bits (log base 2) instead of nats.")]
    pub bits: bool,

    /// Normalize the inputs to sum to 1 first.
    #[arg(long, short = 'n', help = "Normalize the inputs to sum to 1 before computing.")]
    pub normalize: bool,
}

/// Arguments for the `dirichlet` command.
#[derive(Parser, Debug)]
pub struct DirichletCommand {
    /// Concentration parameters, comma-separated.
    #[arg(long, short = 'a', value_delimiter = ',', required = true, allow_negative_numbers = true, help = "Concentration parameters (comma-separated), e.g. 4,8,13.")]
    pub alphas: Vec<f64>,

    /// The point to evaluate at.
    #[arg(value_name = "X", allow_negative_numbers = true, help = "Coordinates x_1 ... x_n of the point to evaluate.")]
    pub point: Vec<f64>,

    /// Print ln B(alpha) instead of the density.
    #[arg(long = "log-beta", help = "Print the log multivariate Beta of the parameters instead of a density.")]
    pub log_beta: bool,
}

/// Arguments for the `lattice` command.
#[derive(Parser, Debug)]
pub struct LatticeCommand {
    /// Number of steps along each side.
    #[arg(long, short = 's', default_value_t = 10, help = "Number of lattice steps along each side.")]
    pub scale: usize,

    /// Skip points on the boundary.
    #[arg(long = "no-boundary", help = "Only list interior points.")]
    pub no_boundary: bool,

    /// Print normalized coordinates instead of integer indices.
    #[arg(long, short = 'n', help = "Print normalized coordinates (summing to 1).")]
    pub normalize: bool,

    /// Print JSON instead of a table.
    #[arg(long, help = "Print the points as JSON.")]
    pub json: bool,
}

/// Arguments for the `gridlines` command.
#[derive(Parser, Debug)]
pub struct GridlinesCommand {
    #[arg(long, short = 's', default_value_t = 10, help = "Simplex scale.")]
    pub scale: usize,

    /// Gridline spacing.
    #[arg(long, short = 'm', default_value_t = 1, help = "Spacing between gridlines.")]
    pub multiple: usize,
}

/// Which field the `heatmap` command evaluates.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FieldChoice {
    /// Shannon entropy of the normalized point.
    Entropy,
    /// Dirichlet density with the given `--alphas`.
    Dirichlet,
}

/// Arguments for the `heatmap` command.
#[derive(Parser, Debug)]
pub struct HeatmapCommand {
    /// Path to a heatmap configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a heatmap configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// The field to plot.
    #[arg(long, value_enum, help = "Field to evaluate (default: entropy, or dirichlet when --alphas is given).")]
    pub field: Option<FieldChoice>,

    /// Dirichlet parameters, comma-separated.
    #[arg(long, short = 'a', value_delimiter = ',', allow_negative_numbers = true, help = "Dirichlet parameters (comma-separated).")]
    pub alphas: Vec<f64>,

    #[arg(long, short = 's', help = "Number of lattice steps along each side.")]
    pub scale: Option<usize>,

    #[arg(long, help = "Tile style: triangular or hexagonal (first letter is enough).")]
    pub style: Option<HeatmapStyle>,

    /// Skip points on the boundary.
    #[arg(long = "no-boundary", help = "Do not evaluate the field on the boundary.")]
    pub no_boundary: bool,

    #[arg(long, help = "Colormap: jet, gray or hot.")]
    pub cmap: Option<Colormap>,

    #[arg(long, allow_negative_numbers = true, help = "Fixed lower color limit.")]
    pub vmin: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Fixed upper color limit.")]
    pub vmax: Option<f64>,

    /// Scientific notation for colorbar ticks.
    #[arg(long, help = "Format colorbar ticks in scientific notation.")]
    pub scientific: bool,

    /// Print the full report (including cells) as JSON.
    #[arg(long, help = "Print the full heatmap report as JSON.")]
    pub json: bool,

    /// Write an SVG rendering of the cells.
    #[arg(long, value_name = "FILE", help = "Write the heatmap cells as an SVG file.")]
    pub svg: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `project` command.
#[derive(Parser, Debug)]
pub struct ProjectCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read points from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Reorder coordinates before projecting.
    #[arg(long, short = 'p', value_name = "PERM", help = "Coordinate permutation such as 120.")]
    pub permutation: Option<Permutation>,

    #[arg(long, help = "Print the projected points as JSON.")]
    pub json: bool,
}

/// Arguments for the `scatter` command.
#[derive(Parser, Debug)]
pub struct ScatterCommand {
    #[arg(long, short = 's', default_value_t = 40, help = "Simplex scale.")]
    pub scale: usize,

    #[arg(long, short = 'c', default_value_t = 30, help = "Number of points to draw.")]
    pub count: usize,

    /// Seed for reproducible output.
    #[arg(long, help = "Seed the random generator for reproducible output.")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the points as JSON.")]
    pub json: bool,
}
