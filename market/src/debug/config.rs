//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "bep_market=info,warn";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "market-debug.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "bep_market=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_dir = lookup("BEP_LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_dir,
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_to_stderr: lookup("BEP_LOG_STDERR").map(|v| v == "1").unwrap_or(false),
        }
    }

    /// Path of the current log file (before rotation suffixes)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("market-debug.log"));
    }

    #[test]
    fn test_reads_overrides() {
        let env: HashMap<&str, &str> = [
            ("BEP_LOG_DIR", "/tmp/bep"),
            ("RUST_LOG", "bep_market=debug"),
            ("BEP_LOG_STDERR", "1"),
        ]
        .into_iter()
        .collect();

        let config = LogConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/bep"));
        assert_eq!(config.log_level, "bep_market=debug");
        assert!(config.log_to_stderr);
    }
}
