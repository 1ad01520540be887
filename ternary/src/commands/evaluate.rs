//! `entropy` and `dirichlet`: point evaluations of the closed-form functions.

use anyhow::{bail, Result};
use log::debug;

use ternary_core::{log_beta, shannon_entropy, shannon_entropy_bits, Dirichlet};

use crate::cli::{DirichletCommand, EntropyCommand};
use crate::commands::Console;

const SUM_TOLERANCE: f64 = 1e-9;

/// Sum of the entries that take part in the entropy.
fn positive_total(p: &[f64]) -> f64 {
    p.iter().filter(|v| **v > 0.0).sum()
}

/// Rescales the positive entries to sum to 1. Non-positive entries are
/// skipped by the entropy, so they are left as they are.
pub fn normalize_positive(p: &[f64]) -> Result<Vec<f64>> {
    let total = positive_total(p);
    if !(total > 0.0) {
        bail!("cannot normalize: no positive probabilities");
    }
    Ok(p.iter().map(|&v| if v > 0.0 { v / total } else { v }).collect())
}

pub fn run_entropy(args: &EntropyCommand, console: &Console) -> Result<()> {
    let probabilities = if args.normalize {
        normalize_positive(&args.probabilities)?
    } else {
        let total = positive_total(&args.probabilities);
        if (total - 1.0).abs() > SUM_TOLERANCE {
            console.warn(&format!(
                "positive probabilities sum to {}, not 1; pass --normalize to rescale",
                total
            ));
        }
        args.probabilities.clone()
    };
    debug!("Computing entropy of {:?} (bits: {})", probabilities, args.bits);

    let value = if args.bits {
        shannon_entropy_bits(&probabilities)
    } else {
        shannon_entropy(&probabilities)
    };
    println!("{}", value);
    Ok(())
}

pub fn run_dirichlet(args: &DirichletCommand, console: &Console) -> Result<()> {
    if args.log_beta {
        println!("{}", log_beta(&args.alphas)?);
        return Ok(());
    }

    if args.point.is_empty() {
        bail!("a point X is required unless --log-beta is given");
    }
    let distribution = Dirichlet::new(&args.alphas)?;
    if args.point.len() != distribution.dimension() {
        console.warn(&format!(
            "point has {} coordinates but there are {} alphas",
            args.point.len(),
            distribution.dimension()
        ));
    }
    if args.alphas.iter().any(|a| *a <= 1.0) {
        debug!("Some alphas are <= 1; the density is unbounded near the boundary.");
    }

    println!("{}", distribution.density(&args.point));
    Ok(())
}
