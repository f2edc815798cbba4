use clap::ValueEnum;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Initialize logger based on log level
///
/// `RUST_LOG` takes precedence over the requested level when set.
pub fn init_logging(log_level: LogLevel) {
    let Some(level) = filter_for(log_level) else {
        return;
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A logger may already be installed when running more than once in the same process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

const fn filter_for(log_level: LogLevel) -> Option<&'static str> {
    match log_level {
        LogLevel::None => None,
        LogLevel::Error => Some("error"),
        LogLevel::Warn => Some("warn"),
        LogLevel::Info => Some("info"),
        LogLevel::Debug => Some("debug"),
        LogLevel::Trace => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_none_disables_logging() {
        assert_eq!(filter_for(LogLevel::None), None);
    }

    #[test]
    fn test_filter_for_levels() {
        assert_eq!(filter_for(LogLevel::Error), Some("error"));
        assert_eq!(filter_for(LogLevel::Warn), Some("warn"));
        assert_eq!(filter_for(LogLevel::Info), Some("info"));
        assert_eq!(filter_for(LogLevel::Debug), Some("debug"));
        assert_eq!(filter_for(LogLevel::Trace), Some("trace"));
    }

    #[test]
    fn test_log_level_from_cli_value() {
        assert_eq!(LogLevel::from_str("debug", true).unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("verbose", true).is_err());
    }
}
