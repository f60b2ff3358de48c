// cleanclip/src/logger.rs
//! Logger setup for the cleanclip binary.
//!
//! `RUST_LOG` is honored unless the caller passes an explicit level (from `--debug` or
//! `--quiet`). Log lines go to stderr so they never mix with sanitized text on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor an explicit level is given.
const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger`. Calling it more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Maps the global CLI flags to an explicit level, if any.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    match (quiet, debug) {
        (true, _) => Some(LevelFilter::Off),
        (false, true) => Some(LevelFilter::Debug),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
