// LogTally - util/logging.rs
//
// Diagnostics on stderr for the report and helper binaries.
//
// Filter sources, first match wins:
//   1. RUST_LOG (full EnvFilter syntax)
//   2. --debug on the command line
//   3. [logging] level in config.toml
//   4. "warn"
//
// Stdout is reserved for the report itself, so nothing here writes to it.

use super::constants;
use tracing_subscriber::EnvFilter;

/// Filter directive to use when RUST_LOG is not set.
fn fallback_directive(debug_flag: bool, config_level: Option<&str>) -> &str {
    if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(constants::DEFAULT_LOG_LEVEL)
    }
}

/// Build the filter; `rust_log` is the raw RUST_LOG value, if any.
fn build_filter(rust_log: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(fallback_directive(debug_flag, config_level)),
    }
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), debug_flag, config_level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        from_env = rust_log.is_some(),
        "Logging ready"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(fallback_directive(false, None), "warn");
    }

    #[test]
    fn test_config_level_used_without_debug_flag() {
        assert_eq!(fallback_directive(false, Some("info")), "info");
    }

    #[test]
    fn test_debug_flag_beats_config_level() {
        assert_eq!(fallback_directive(true, Some("error")), "debug");
    }

    #[test]
    fn test_rust_log_beats_everything() {
        let filter = build_filter(Some("trace"), true, Some("error"));
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    fn test_filter_without_rust_log_uses_fallback() {
        let filter = build_filter(None, false, Some("info"));
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false, None);
        init(true, Some("info"));
    }
}
