// ternary/src/main.rs
//! Entry point for the `ternary` binary.

use anyhow::{Context, Result};
use clap::Parser;

use ternary::cli::Cli;
use ternary::commands::{run_command, Console};
use ternary::logger;
use ternary::ui::theme::build_theme_map;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let theme = build_theme_map(cli.theme.as_deref()).context("Theme error")?;
    let console = Console::new(theme, cli.quiet);

    if let Err(e) = run_command(&cli.command, &console) {
        console.error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}
