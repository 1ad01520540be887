//! Dirichlet density over the probability simplex.
//!
//! The density is evaluated in the log domain and exponentiated once:
//! `f(x) = exp(Σ (α_i − 1)·ln x_i − ln B(α))`.

extern crate alloc;
use alloc::vec::Vec;
use libm::{exp, log};

use crate::beta::log_beta;
use crate::errors::DomainError;

/// A Dirichlet distribution with its normalizing term precomputed.
///
/// The closed form is exact for any positive shape parameters on the open
/// simplex. Shape parameters above 1 are the intended use: only then does the
/// density vanish smoothly towards the boundary, which is where evaluation
/// is cut off.
#[derive(Debug, Clone, PartialEq)]
pub struct Dirichlet {
    alphas: Vec<f64>,
    log_beta: f64,
}

impl Dirichlet {
    /// Builds a distribution, failing if `alphas` is empty or has a
    /// non-positive entry.
    pub fn new(alphas: &[f64]) -> Result<Self, DomainError> {
        let log_beta = log_beta(alphas)?;
        Ok(Self {
            alphas: alphas.to_vec(),
            log_beta,
        })
    }

    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// The precomputed `ln B(α)`.
    pub fn log_beta(&self) -> f64 {
        self.log_beta
    }

    pub fn dimension(&self) -> usize {
        self.alphas.len()
    }

    /// Mean of the distribution, `α_i / Σ α`.
    pub fn mean(&self) -> Vec<f64> {
        let total: f64 = self.alphas.iter().sum();
        self.alphas.iter().map(|a| a / total).collect()
    }

    /// Density at `x`.
    ///
    /// Any coordinate that is not strictly positive makes the point
    /// degenerate and the density is exactly `0.0`. The same holds when `x`
    /// has fewer coordinates than there are shape parameters. Extra
    /// coordinates are ignored.
    pub fn density(&self, x: &[f64]) -> f64 {
        if x.len() < self.alphas.len() {
            return 0.0;
        }

        let mut sum = 0.0;
        for (alpha, &xi) in self.alphas.iter().zip(x) {
            if !(xi > 0.0) {
                return 0.0;
            }
            sum += (alpha - 1.0) * log(xi);
        }
        exp(sum - self.log_beta)
    }
}

/// Returns the Dirichlet density for `alphas` as a plain function of the point.
///
/// ```
/// let f = ternary_math::dirichlet(&[2.0, 2.0, 2.0]).unwrap();
/// let third = 1.0 / 3.0;
/// assert!((f(&[third, third, third]) - 40.0 / 9.0).abs() < 1e-9);
/// assert_eq!(f(&[0.0, 0.5, 0.5]), 0.0);
/// ```
pub fn dirichlet(
    alphas: &[f64],
) -> Result<impl Fn(&[f64]) -> f64 + Clone + Send + Sync, DomainError> {
    let distribution = Dirichlet::new(alphas)?;
    Ok(move |x: &[f64]| distribution.density(x))
}
