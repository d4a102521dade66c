//! Logging setup for the CLI.
//!
//! The library crates only emit `tracing` events; this module installs the
//! subscriber that prints them to stderr. Filter precedence:
//!
//! 1. `MYTHWRIGHT_LOG` (any `EnvFilter` directive)
//! 2. `-v` count (1 → info, 2 → debug, 3+ → trace)
//! 3. `logging.level` from the configuration

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other log setting
pub const LOG_ENV: &str = "MYTHWRIGHT_LOG";

/// Maps a `-v` count to a directive; zero defers to the configured level.
pub fn verbosity_to_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8, configured_level: &str) {
    let directive = verbosity_to_directive(verbosity).unwrap_or(configured_level);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_0_defers_to_config() {
        assert_eq!(verbosity_to_directive(0), None);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_to_directive(1), Some("info"));
        assert_eq!(verbosity_to_directive(2), Some("debug"));
        assert_eq!(verbosity_to_directive(3), Some("trace"));
        assert_eq!(verbosity_to_directive(255), Some("trace"));
    }

    #[test]
    fn init_logging_does_not_panic() {
        init_logging(0, "warn");
        init_logging(2, "not a [valid directive");
    }
}
