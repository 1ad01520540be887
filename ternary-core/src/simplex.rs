//! Helpers for projecting to the simplex and walking its lattice.
//!
//! Points are barycentric triples `(a, b, c)`. Lattice points at scale `N`
//! satisfy `a + b + c == N`; projected points live in the plane with the
//! simplex drawn as an equilateral triangle of side `N`.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::TernaryError;

pub const SQRT3: f64 = 1.732_050_807_568_877_2;
pub const SQRT3_OVER_2: f64 = SQRT3 / 2.0;

/// Largest lattice scale accepted by the commands and configuration.
pub const MAX_SCALE: usize = 2000;

/// Returns `scale` unchanged, or `ScaleTooLarge` above [`MAX_SCALE`].
pub fn check_scale(scale: usize) -> Result<usize, TernaryError> {
    if scale > MAX_SCALE {
        return Err(TernaryError::ScaleTooLarge { scale, max: MAX_SCALE });
    }
    Ok(scale)
}

/// A lattice point `(i, j, k)` with `i + j + k == scale`.
pub type LatticePoint = (usize, usize, usize);

/// Scales `values` so they sum to 1.
pub fn normalize(values: &[f64]) -> Result<Vec<f64>, TernaryError> {
    let sum: f64 = values.iter().sum();
    if sum == 0.0 {
        return Err(TernaryError::ZeroSum);
    }
    Ok(values.iter().map(|v| v / sum).collect())
}

/// Systematically walks the lattice points of the 2-simplex at a given scale.
///
/// With `boundary == false`, only points whose coordinates are all at least 1
/// are produced.
#[derive(Debug, Clone)]
pub struct SimplexIterator {
    scale: usize,
    start: usize,
    i: usize,
    j: usize,
    done: bool,
}

impl SimplexIterator {
    pub fn new(scale: usize, boundary: bool) -> Self {
        let start = if boundary { 0 } else { 1 };
        Self { scale, start, i: start, j: start, done: false }
    }

    /// Number of points the iterator yields in total, saturating at
    /// `usize::MAX`.
    pub fn point_count(scale: usize, boundary: bool) -> usize {
        let n = scale as u128;
        let count = if boundary {
            (n + 1) * (n + 2) / 2
        } else if n < 3 {
            0
        } else {
            (n - 1) * (n - 2) / 2
        };
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    fn next_row(&mut self, limit: usize) {
        if self.i >= limit {
            self.done = true;
        } else {
            self.i += 1;
            self.j = self.start;
        }
    }
}

impl Iterator for SimplexIterator {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<Self::Item> {
        // Largest value of i + j that keeps k >= start
        let limit = self.scale.checked_sub(self.start)?;
        loop {
            if self.done || self.i > limit {
                return None;
            }

            let j_max = limit - self.i;
            if self.j <= j_max {
                let point = (self.i, self.j, self.scale - self.i - self.j);
                if self.j < j_max {
                    self.j += 1;
                } else {
                    self.next_row(limit);
                }
                return Some(point);
            }

            self.next_row(limit);
        }
    }
}

/// Convenience constructor for [`SimplexIterator`].
pub fn simplex_iterator(scale: usize, boundary: bool) -> SimplexIterator {
    SimplexIterator::new(scale, boundary)
}

/// A reordering of the three barycentric coordinates.
///
/// `"012"` is the identity. `"120"` rotates counterclockwise and `"201"`
/// rotates clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permutation([usize; 3]);

impl Permutation {
    pub const IDENTITY: Permutation = Permutation([0, 1, 2]);

    pub fn indices(&self) -> [usize; 3] {
        self.0
    }
}

impl FromStr for Permutation {
    type Err = TernaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TernaryError::InvalidPermutation(s.to_string());
        let digits: Vec<usize> = s
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as usize))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        if digits.len() != 3 {
            return Err(invalid());
        }
        let mut seen = [false; 3];
        for &d in &digits {
            if d > 2 || seen[d] {
                return Err(invalid());
            }
            seen[d] = true;
        }
        Ok(Permutation([digits[0], digits[1], digits[2]]))
    }
}

impl TryFrom<String> for Permutation {
    type Error = TernaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permutation> for String {
    fn from(value: Permutation) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

/// Reorders `p` according to `permutation`; `None` leaves it unchanged.
pub fn permute_point(p: [f64; 3], permutation: Option<&Permutation>) -> [f64; 3] {
    match permutation {
        None => p,
        Some(perm) => {
            let [a, b, c] = perm.indices();
            [p[a], p[b], p[c]]
        }
    }
}

/// Maps a barycentric point to the plane: `x = a + b/2`, `y = b·√3/2`.
pub fn project_point(p: [f64; 3], permutation: Option<&Permutation>) -> [f64; 2] {
    let [a, b, _] = permute_point(p, permutation);
    [a + b / 2.0, SQRT3_OVER_2 * b]
}

/// Projects a sequence of points into separate x and y lists.
pub fn project_sequence(
    points: &[[f64; 3]],
    permutation: Option<&Permutation>,
) -> (Vec<f64>, Vec<f64>) {
    points
        .iter()
        .map(|&p| {
            let [x, y] = project_point(p, permutation);
            (x, y)
        })
        .unzip()
}

/// Draws `count` random lattice points with a strictly positive first
/// coordinate, the way a scatter sample over the simplex is built.
pub fn random_lattice_points<R: Rng>(
    scale: usize,
    count: usize,
    rng: &mut R,
) -> Vec<LatticePoint> {
    if scale == 0 {
        warn!("Cannot draw lattice points with a positive coordinate at scale 0.");
        return Vec::new();
    }

    debug!("Drawing {} random lattice points at scale {}", count, scale);
    (0..count)
        .map(|_| {
            let x = rng.random_range(1..=scale);
            let y = rng.random_range(0..=scale - x);
            (x, y, scale - x - y)
        })
        .collect()
}

/// Converts a lattice point to floating-point coordinates.
pub fn lattice_to_point((i, j, k): LatticePoint) -> [f64; 3] {
    [i as f64, j as f64, k as f64]
}
