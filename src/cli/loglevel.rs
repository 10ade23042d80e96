use std::fmt;

use tracing_subscriber::EnvFilter;

/// Represents desired logging verbosity level
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogLevel {
    None = 0,

    /// Report only errors to `stderr`. Corresponds to a single `-v` flag.
    Error,

    /// Report warning messages and errors. Corresponds to `-vv`.
    Warn,

    /// Report general information messages, warnings and errors.
    /// Corresponds to `-vvv`.
    Info,

    /// Report debugging information and all non-trace messages.
    /// Corresponds to `-vvvv`.
    Debug,

    /// Print all possible messages including tracing information.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

impl From<u8> for LogLevel {
    fn from(val: u8) -> Self { Self::from_verbosity_flag_count(val) }
}

impl From<LogLevel> for u8 {
    fn from(log_level: LogLevel) -> Self { log_level.verbosity_flag_count() }
}

impl LogLevel {
    /// Indicates number of required verbosity flags
    pub fn verbosity_flag_count(&self) -> u8 { *self as u8 }

    /// Constructs enum value from a given number of verbosity flags
    pub fn from_verbosity_flag_count(level: u8) -> Self {
        match level {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Installs a stderr subscriber. `RUST_LOG`, when set, wins over the flags.
    pub fn apply(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.to_string()));
        // A subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_round_trip() {
        for count in 0..=5 {
            assert_eq!(LogLevel::from(count).verbosity_flag_count(), count);
        }
        assert_eq!(LogLevel::from(42u8), LogLevel::Trace);
    }

    #[test]
    fn test_display_is_filter_directive() {
        assert_eq!(LogLevel::None.to_string(), "off");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }
}
