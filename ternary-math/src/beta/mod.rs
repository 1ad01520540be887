// ternary-math/src/beta/mod.rs
use libm::lgamma;

use crate::errors::DomainError;

/// Natural log of the multivariate Beta function.
///
/// `ln B(α) = Σ ln Γ(α_i) − ln Γ(Σ α_i)`
///
/// The log form is the contract: callers combine it additively with other
/// log-domain terms and never exponentiate it on its own.
pub fn log_beta(alphas: &[f64]) -> Result<f64, DomainError> {
    if alphas.is_empty() {
        return Err(DomainError::EmptyParameters);
    }

    let mut log_gammas = 0.0;
    let mut total = 0.0;
    for (index, &value) in alphas.iter().enumerate() {
        // `!(x > 0)` also rejects NaN
        if !(value > 0.0) {
            return Err(DomainError::NonPositiveParameter { index, value });
        }
        log_gammas += lgamma(value);
        total += value;
    }

    Ok(log_gammas - lgamma(total))
}
