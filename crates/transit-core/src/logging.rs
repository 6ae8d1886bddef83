//! Structured logging setup
//!
//! Both the binary (`transit`) and this library (`transit_core`) log under
//! their own targets, so a bare level such as `debug` is applied to both.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variables consulted before the CLI-derived directive, in order
const FILTER_ENV_VARS: [&str; 2] = ["RUST_LOG", "TRANSIT_LOG"];

/// Targets a bare level is expanded to
const LOG_TARGETS: [&str; 2] = ["transit", "transit_core"];

/// Helper macro for logging elapsed time at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// trace_time!(start, "run_command");
/// trace_time!(start, "shortest_paths", source = source);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// How log lines are written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per event, plus span open/close events
    Json,
}

/// Resolved logging options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Derive settings from `--verbose`, `--log-level` and `--log-json`.
    /// An explicit level wins over `--verbose`.
    pub fn from_flags(verbose: bool, log_level: Option<&str>, log_json: bool) -> Self {
        let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
        Self {
            directive: expand_directive(level),
            format: if log_json {
                LogFormat::Json
            } else {
                LogFormat::Compact
            },
        }
    }

    fn filter(&self) -> EnvFilter {
        FILTER_ENV_VARS
            .iter()
            .find_map(|var| EnvFilter::try_from_env(var).ok())
            .unwrap_or_else(|| EnvFilter::new(&self.directive))
    }
}

/// Expand a bare level to every crate target; full directives pass through
fn expand_directive(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber
pub fn init_tracing(settings: &LogSettings) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(settings.filter());
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    match settings.format {
        LogFormat::Json => registry
            .with(
                layer
                    .json()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(layer.compact().with_target(false))
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn_for_both_crates() {
        let settings = LogSettings::from_flags(false, None, false);
        assert_eq!(settings.directive, "transit=warn,transit_core=warn");
        assert_eq!(settings.format, LogFormat::Compact);
    }

    #[test]
    fn test_verbose_enables_debug() {
        let settings = LogSettings::from_flags(true, None, true);
        assert_eq!(settings.directive, "transit=debug,transit_core=debug");
        assert_eq!(settings.format, LogFormat::Json);
    }

    #[test]
    fn test_explicit_level_wins_over_verbose() {
        let settings = LogSettings::from_flags(true, Some("trace"), false);
        assert_eq!(settings.directive, "transit=trace,transit_core=trace");
    }

    #[test]
    fn test_full_directive_passes_through() {
        let settings = LogSettings::from_flags(false, Some("transit_core=trace"), false);
        assert_eq!(settings.directive, "transit_core=trace");
    }
}
