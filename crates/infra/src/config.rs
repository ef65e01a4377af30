use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Connection string for postgres. When it is not set the application
    /// keeps all state in memory, which is what the tests do.
    pub database_url: Option<String>,
    /// Whether the application should run the reminder dispatcher on a
    /// timer. Due reminders can still be processed on demand through the
    /// api when this is turned off.
    pub dispatcher_enabled: bool,
    /// Seconds between two runs of the reminder dispatcher
    pub dispatch_interval_secs: u64,
    /// How many notifications a live subscriber can fall behind before it
    /// starts missing some of them
    pub notification_stream_capacity: usize,
}

fn parse_env_or<T: FromStr + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default value: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            info!("Did not find DATABASE_URL environment variable. Going to use inmemory repositories.");
        }

        let dispatch_interval_secs = match parse_env_or("DISPATCH_INTERVAL_SECS", 60_u64) {
            0 => {
                warn!("DISPATCH_INTERVAL_SECS must be positive, falling back to 60 seconds.");
                60
            }
            secs => secs,
        };
        let notification_stream_capacity =
            parse_env_or("NOTIFICATION_STREAM_CAPACITY", 64_usize).max(1);

        Self {
            port: parse_env_or("PORT", 5000),
            database_url,
            dispatcher_enabled: parse_env_or("DISPATCHER_ENABLED", true),
            dispatch_interval_secs,
            notification_stream_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_on_invalid_values() {
        std::env::set_var("TOOFLOW_TEST_INVALID_NUMBER", "abc");
        assert_eq!(parse_env_or("TOOFLOW_TEST_INVALID_NUMBER", 42_u64), 42);
        std::env::set_var("TOOFLOW_TEST_VALID_NUMBER", "7");
        assert_eq!(parse_env_or("TOOFLOW_TEST_VALID_NUMBER", 42_u64), 7);
        assert!(parse_env_or("TOOFLOW_TEST_MISSING_FLAG", true));
    }
}
