// ternary-core/src/field.rs
//! Defines the `ScalarField` trait and the built-in fields.
//!
//! A scalar field is any function of a normalized simplex point. Heatmaps are
//! computed against this trait so new functions can be plugged in without
//! touching the heatmap code.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use ternary_math::{shannon_entropy, Dirichlet};

use crate::errors::TernaryError;

/// A real-valued function over the probability simplex.
pub trait ScalarField: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Evaluates the field at `p`, a point whose coordinates sum to 1.
    fn evaluate(&self, p: &[f64]) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn evaluate(&self, p: &[f64]) -> f64 {
        self(p)
    }
}

/// Shannon entropy in nats.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonEntropyField;

impl ScalarField for ShannonEntropyField {
    fn name(&self) -> &str {
        "entropy"
    }

    fn evaluate(&self, p: &[f64]) -> f64 {
        shannon_entropy(p)
    }
}

/// Dirichlet density with fixed shape parameters.
#[derive(Debug, Clone)]
pub struct DirichletField {
    distribution: Dirichlet,
}

impl DirichletField {
    pub fn new(alphas: &[f64]) -> Result<Self, TernaryError> {
        Ok(Self {
            distribution: Dirichlet::new(alphas)?,
        })
    }

    pub fn distribution(&self) -> &Dirichlet {
        &self.distribution
    }
}

impl ScalarField for DirichletField {
    fn name(&self) -> &str {
        "dirichlet"
    }

    fn evaluate(&self, p: &[f64]) -> f64 {
        self.distribution.density(p)
    }
}

/// Serializable description of a built-in field, as found in config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    #[default]
    Entropy,
    Dirichlet { alphas: Vec<f64> },
}

impl FieldSpec {
    /// The name the built field reports.
    pub fn name(&self) -> &'static str {
        match self {
            FieldSpec::Entropy => "entropy",
            FieldSpec::Dirichlet { .. } => "dirichlet",
        }
    }

    /// Instantiates the described field.
    pub fn build(&self) -> Result<Box<dyn ScalarField>, TernaryError> {
        match self {
            FieldSpec::Entropy => Ok(Box::new(ShannonEntropyField)),
            FieldSpec::Dirichlet { alphas } => Ok(Box::new(DirichletField::new(alphas)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_field() {
        let field = FieldSpec::Entropy.build().unwrap();
        assert_eq!(field.name(), "entropy");
        assert!((field.evaluate(&[0.5, 0.5, 0.0]) - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_dirichlet_field() {
        let field = FieldSpec::Dirichlet { alphas: vec![2.0, 2.0, 2.0] }.build().unwrap();
        assert_eq!(field.name(), "dirichlet");
        let third = 1.0 / 3.0;
        assert!((field.evaluate(&[third, third, third]) - 40.0 / 9.0).abs() < 1e-9);
        assert_eq!(field.evaluate(&[1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_dirichlet_field_rejects_bad_alphas() {
        let result = FieldSpec::Dirichlet { alphas: vec![1.0, 0.0] }.build();
        assert!(matches!(result, Err(TernaryError::Domain(_))));
    }

    #[test]
    fn test_closures_are_fields() {
        let field = |p: &[f64]| p[0];
        assert_eq!(field.name(), "custom");
        assert_eq!(field.evaluate(&[0.25, 0.75]), 0.25);
    }

    #[test]
    fn test_field_spec_yaml() {
        let spec: FieldSpec = serde_yml::from_str("kind: dirichlet\nalphas: [4, 8, 13]\n").unwrap();
        assert_eq!(spec, FieldSpec::Dirichlet { alphas: vec![4.0, 8.0, 13.0] });
    }
}
