//! Loading sample trajectories for plotting.
//!
//! A trajectory file holds one point per line as whitespace-separated
//! numbers. Three numbers are a full barycentric point; two numbers `(a, b)`
//! are completed to `(a, b, 1 - a - b)`. Blank lines and lines starting with
//! `#` are skipped.

use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::errors::TernaryError;
use crate::simplex::{project_point, Permutation};

/// Parses trajectory text into barycentric points.
pub fn parse_trajectory(text: &str) -> Result<Vec<[f64; 3]>, TernaryError> {
    let mut points = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;

        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| TernaryError::Parse {
                    line: line_no,
                    message: format!("invalid number '{}': {}", token, e),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let point = match values.as_slice() {
            [a, b] => [*a, *b, 1.0 - a - b],
            [a, b, c] => [*a, *b, *c],
            other => {
                return Err(TernaryError::Parse {
                    line: line_no,
                    message: format!("expected 2 or 3 coordinates, found {}", other.len()),
                })
            }
        };
        points.push(point);
    }

    debug!("Parsed {} trajectory points.", points.len());
    Ok(points)
}

/// Reads and parses a trajectory file.
///
/// A file that cannot be read comes back as [`TernaryError::AnyhowWrapper`]
/// carrying the path; malformed lines come back as [`TernaryError::Parse`].
pub fn load_trajectory<P: AsRef<Path>>(path: P) -> Result<Vec<[f64; 3]>, TernaryError> {
    let path = path.as_ref();
    info!("Loading trajectory from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trajectory file {}", path.display()))?;
    parse_trajectory(&text)
}

/// Projects every trajectory point to the plane.
pub fn project_trajectory(
    points: &[[f64; 3]],
    permutation: Option<&Permutation>,
) -> Vec<[f64; 2]> {
    points.iter().map(|&p| project_point(p, permutation)).collect()
}
