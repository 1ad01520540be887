//! Logging setup for the `ternary` binary.
//!
//! Log records go to stderr through `env_logger`. `RUST_LOG` is honored
//! unless an explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a level override is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger. Calling it more than once is harmless;
/// only the first call takes effect.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Maps the `--quiet`/`--debug` flags to a level override. Quiet wins.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
