// ternary-math/src/entropy/mod.rs
use libm::{log, log2};

/// Calculates the Shannon entropy of a discrete distribution in nats.
///
/// Coordinates that are zero or negative contribute nothing, following the
/// convention `0·ln 0 = 0`. NaN coordinates are not skipped and propagate.
pub fn shannon_entropy(p: &[f64]) -> f64 {
    entropy_with(p, log)
}

/// Same as [`shannon_entropy`], in bits per symbol.
pub fn shannon_entropy_bits(p: &[f64]) -> f64 {
    entropy_with(p, log2)
}

fn entropy_with(p: &[f64], ln: fn(f64) -> f64) -> f64 {
    let mut sum = 0.0;
    for &pi in p {
        if pi <= 0.0 {
            continue;
        }
        sum += pi * ln(pi);
    }
    -sum
}
