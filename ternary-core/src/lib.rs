// ternary-core/src/lib.rs
//! # Ternary Core Library
//!
//! `ternary-core` provides the platform-independent computations behind
//! ternary (simplex) plots. It knows how to walk the lattice of the
//! 2-simplex, project barycentric points to the plane, lay out boundary and
//! gridline segments, evaluate scalar fields into heatmaps and color them.
//! It draws nothing itself: every result is plain data (or an SVG string)
//! that a renderer can consume.
//!
//! ## Modules
//!
//! * `simplex`: Normalization, lattice iteration, permutations and projection.
//! * `lines`: Boundary and gridline segments.
//! * `field`: The `ScalarField` trait and the built-in entropy and Dirichlet fields.
//! * `heatmap`: Lattice evaluation, triangular/hexagonal tiling, colorbars and reports.
//! * `colormap`: Colormaps and value-to-color mapping.
//! * `config`: YAML heatmap configuration with embedded defaults.
//! * `trajectory`: Parsing and projecting sample trajectories.
//! * `svg`: SVG export of heatmap cells.
//! * `headless`: One-shot heatmap computation from configuration.
//!
//! ## Usage Example
//!
//! ```rust
//! use ternary_core::{headless_heatmap_from_config, FieldSpec, HeatmapConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = HeatmapConfig {
//!         scale: Some(20),
//!         field: Some(FieldSpec::Dirichlet { alphas: vec![4.0, 8.0, 13.0] }),
//!         ..Default::default()
//!     };
//!
//!     let report = headless_heatmap_from_config(Some(config))?;
//!     println!("{} cells, max density {:.3}", report.cells.len(), report.summary.max);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`TernaryError`]; configuration loading returns
//! `anyhow::Result` with file context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod colormap;
pub mod config;
pub mod errors;
pub mod field;
pub mod headless;
pub mod heatmap;
pub mod lines;
pub mod simplex;
pub mod svg;
pub mod trajectory;

/// Re-exports the configuration types and functions.
pub use config::{merge_config, HeatmapConfig, HeatmapSettings, MAX_SCALE};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TernaryError;

/// Re-exports the scalar field trait and its built-in implementations.
pub use field::{DirichletField, FieldSpec, ScalarField, ShannonEntropyField};

/// Re-exports heatmap computation and reporting.
pub use heatmap::{
    alt_triangle_coordinates,
    colorbar_ticks,
    format_tick,
    heatmap_cells,
    heatmapf,
    hexagon_coordinates,
    triangle_coordinates,
    CellShape,
    HeatmapCell,
    HeatmapData,
    HeatmapOptions,
    HeatmapReport,
    HeatmapStyle,
    ValueSummary,
};

pub use colormap::{colormapper, to_hex, Colormap};

pub use simplex::{
    check_scale,
    normalize,
    permute_point,
    project_point,
    project_sequence,
    random_lattice_points,
    simplex_iterator,
    lattice_to_point,
    LatticePoint,
    Permutation,
    SimplexIterator,
};

pub use lines::{boundary, gridlines, horizontal_line, left_parallel_line, right_parallel_line, Segment};

pub use trajectory::{load_trajectory, parse_trajectory, project_trajectory};

pub use svg::{svg_heatmap, write_svg_heatmap};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_heatmap, headless_heatmap_from_config, headless_heatmap_with_field};

/// The closed-form functions the built-in fields are made of.
pub use ternary_math::{dirichlet, log_beta, shannon_entropy, shannon_entropy_bits, Dirichlet, DomainError};
