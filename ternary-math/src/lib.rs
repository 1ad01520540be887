// ternary-math/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod beta;
pub mod dirichlet;
pub mod entropy;
pub mod errors;
pub mod statistics;

pub use beta::log_beta;
pub use dirichlet::{dirichlet, Dirichlet};
pub use entropy::{shannon_entropy, shannon_entropy_bits};
pub use errors::DomainError;
pub use statistics::{compute_stats, FieldStats};

