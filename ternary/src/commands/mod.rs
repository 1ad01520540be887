//! Subcommand implementations and the console they report through.

pub mod evaluate;
pub mod geometry;
pub mod heatmap;
pub mod trajectory;

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

use crate::cli::Commands;
use crate::ui::output_format::{print_error_message, print_info_message, print_success_message, print_warn_message};
use crate::ui::theme::ThemeMap;

/// Where status messages go and how they look.
///
/// Results are printed to stdout by each command; everything else goes
/// through here to stderr.
pub struct Console {
    pub theme: ThemeMap,
    pub quiet: bool,
    pub stdout_color: bool,
    stderr_color: bool,
}

impl Console {
    pub fn new(theme: ThemeMap, quiet: bool) -> Self {
        Self {
            theme,
            quiet,
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
        }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            let _ = print_info_message(&mut io::stderr(), message, &self.theme, self.stderr_color);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            let _ = print_success_message(&mut io::stderr(), message, &self.theme, self.stderr_color);
        }
    }

    pub fn warn(&self, message: &str) {
        let _ = print_warn_message(&mut io::stderr(), message, &self.theme, self.stderr_color);
    }

    pub fn error(&self, message: &str) {
        let _ = print_error_message(&mut io::stderr(), message, &self.theme, self.stderr_color);
    }
}

/// Dispatches a parsed subcommand.
pub fn run_command(command: &Commands, console: &Console) -> Result<()> {
    match command {
        Commands::Entropy(args) => evaluate::run_entropy(args, console),
        Commands::Dirichlet(args) => evaluate::run_dirichlet(args, console),
        Commands::Lattice(args) => geometry::run_lattice(args, console),
        Commands::Gridlines(args) => geometry::run_gridlines(args),
        Commands::Heatmap(args) => heatmap::run_heatmap(args, console),
        Commands::Project(args) => trajectory::run_project(args, console),
        Commands::Scatter(args) => trajectory::run_scatter(args, console),
    }
}
