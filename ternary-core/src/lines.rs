//! Boundary and gridline segments of a ternary plot.
//!
//! Every line is parallel to one side of the simplex. Segments are returned
//! both as barycentric endpoints and as projected plane coordinates so that
//! any renderer can draw them.

use serde::Serialize;

use crate::errors::TernaryError;
use crate::simplex::{check_scale, project_point};

/// Which side of the simplex a line runs parallel to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Horizontal,
    LeftParallel,
    RightParallel,
}

/// A straight segment between two simplex points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub kind: LineKind,
    pub offset: f64,
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl Segment {
    fn new(kind: LineKind, offset: f64, start: [f64; 3], end: [f64; 3]) -> Self {
        Self { kind, offset, start, end }
    }

    /// Endpoints in plane coordinates.
    pub fn projected(&self) -> [[f64; 2]; 2] {
        [project_point(self.start, None), project_point(self.end, None)]
    }
}

/// The line with second coordinate fixed at `i`.
pub fn horizontal_line(scale: f64, i: f64) -> Segment {
    Segment::new(LineKind::Horizontal, i, [0.0, i, scale - i], [scale - i, i, 0.0])
}

/// The line with first coordinate fixed at `i`.
pub fn left_parallel_line(scale: f64, i: f64) -> Segment {
    Segment::new(LineKind::LeftParallel, i, [i, scale - i, 0.0], [i, 0.0, scale - i])
}

/// The line with third coordinate fixed at `i`.
pub fn right_parallel_line(scale: f64, i: f64) -> Segment {
    Segment::new(LineKind::RightParallel, i, [0.0, scale - i, i], [scale - i, 0.0, i])
}

/// The three sides of the simplex.
pub fn boundary(scale: f64) -> Vec<Segment> {
    vec![
        horizontal_line(scale, 0.0),
        left_parallel_line(scale, 0.0),
        right_parallel_line(scale, 0.0),
    ]
}

/// Gridlines every `multiple` units, three per offset, starting at 0.
///
/// Scales above [`crate::simplex::MAX_SCALE`] are rejected.
pub fn gridlines(scale: usize, multiple: usize) -> Result<Vec<Segment>, TernaryError> {
    if multiple == 0 {
        return Err(TernaryError::InvalidMultiple);
    }
    check_scale(scale)?;

    let scale_f = scale as f64;
    let mut segments = Vec::with_capacity(scale.div_ceil(multiple).saturating_mul(3));
    for i in (0..scale).step_by(multiple) {
        let offset = i as f64;
        segments.push(horizontal_line(scale_f, offset));
        segments.push(left_parallel_line(scale_f, offset));
        segments.push(right_parallel_line(scale_f, offset));
    }
    Ok(segments)
}
