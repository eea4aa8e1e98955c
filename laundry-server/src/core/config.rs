/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_PATH | data/laundry.db | SQLite database file |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | (unset) | level for the default log filter |
/// | LOG_DIR | (unset) | daily rolling log files when set |
/// | PROGRESSION_INTERVAL_SECS | 0 | in-server progression period, 0 disables |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | grace period for background tasks |
///
/// `RUST_LOG` overrides `LOG_LEVEL` entirely.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    pub environment: String,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
    pub progression_interval_secs: u64,
    pub request_timeout_ms: u64,
    pub shutdown_timeout_ms: u64,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/laundry.db".into()),
            http_port: env_parse("HTTP_PORT", 8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: env_opt("LOG_LEVEL"),
            log_dir: env_opt("LOG_DIR"),
            progression_interval_secs: env_parse("PROGRESSION_INTERVAL_SECS", 0),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
        }
    }

    /// Override the database path and port, used by tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn progression_enabled(&self) -> bool {
        self.progression_interval_secs > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(":memory:", 9000);
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.http_port, 9000);
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        // SAFETY: variable name is unique to this test
        unsafe { std::env::set_var("LAUNDRY_TEST_PORT", "not-a-port") };
        assert_eq!(env_parse::<u16>("LAUNDRY_TEST_PORT", 8000), 8000);
        unsafe { std::env::set_var("LAUNDRY_TEST_PORT", " 8081 ") };
        assert_eq!(env_parse::<u16>("LAUNDRY_TEST_PORT", 8000), 8081);
        assert_eq!(env_parse::<u64>("LAUNDRY_TEST_MISSING", 7), 7);
    }

    #[test]
    fn test_blank_log_settings_are_unset() {
        // SAFETY: variable names are unique to this test
        unsafe { std::env::set_var("LAUNDRY_TEST_LOG_DIR", "  ") };
        assert_eq!(env_opt("LAUNDRY_TEST_LOG_DIR"), None);
        unsafe { std::env::set_var("LAUNDRY_TEST_LOG_DIR", "/var/log/laundry") };
        assert_eq!(env_opt("LAUNDRY_TEST_LOG_DIR").as_deref(), Some("/var/log/laundry"));
        assert_eq!(env_opt("LAUNDRY_TEST_LOG_MISSING"), None);
    }

    #[test]
    fn test_progression_enabled() {
        let mut config = Config::with_overrides("x.db", 1);
        config.progression_interval_secs = 0;
        assert!(!config.progression_enabled());
        config.progression_interval_secs = 60;
        assert!(config.progression_enabled());
    }
}
