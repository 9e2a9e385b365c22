//! Tracing/logging initialization.
//!
//! Filtering follows `RUST_LOG` (default `info`). Output is JSON unless
//! `LOG_FORMAT=pretty` is set.

use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything unrecognized falls back to JSON.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "pretty" || v == "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());
    init_with(format);
}

pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("yaml")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" Pretty ")), LogFormat::Pretty);
    }

    #[test]
    fn init_twice_is_a_no_op() {
        init_with(LogFormat::Json);
        init_with(LogFormat::Pretty);
    }
}
