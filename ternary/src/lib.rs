// ternary/src/lib.rs
//! # Ternary CLI
//!
//! This crate provides the command-line interface over `ternary-core`:
//! evaluating entropy and Dirichlet densities, listing lattices and
//! gridlines, computing heatmaps and projecting trajectories.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::run_command;
