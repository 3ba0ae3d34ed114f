// Logging setup for the CLI
//
// Library crates only emit `tracing` events; the binary decides where they go.

use tracing::Level;

/// Pick the maximum log level from the configured name and the verbose flag
///
/// `-v` always wins and lowers the level to debug. Unknown names fall back to
/// info.
pub fn resolve_level(configured: &str, verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    match configured.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the stderr subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(configured: &str, verbose: bool) {
    let level = resolve_level(configured, verbose);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(resolve_level("error", true), Level::DEBUG);
    }

    #[test]
    fn test_configured_levels() {
        assert_eq!(resolve_level("trace", false), Level::TRACE);
        assert_eq!(resolve_level("WARN", false), Level::WARN);
        assert_eq!(resolve_level(" error ", false), Level::ERROR);
    }

    #[test]
    fn test_unknown_level_is_info() {
        assert_eq!(resolve_level("loud", false), Level::INFO);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging("info", false);
        init_logging("debug", true);
    }
}
