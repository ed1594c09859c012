use std::str::FromStr;
use std::time::Duration;

use fakebake_store::StoreLatency;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Store latencies
/// default to the delays of a slow mock backend; set them to `0` to disable.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Simulated latency of `list_all` in milliseconds (default: `500`).
    pub store_list_latency_ms: u64,
    /// Simulated latency of `get_by_id` in milliseconds (default: `300`).
    pub store_get_latency_ms: u64,
    /// Simulated latency of recipe submission in milliseconds (default: `1000`).
    pub store_submit_latency_ms: u64,
    /// Simulated latency of review submission in milliseconds (default: `1000`).
    pub store_review_latency_ms: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `STORE_LIST_LATENCY_MS`   | `500`                      |
    /// | `STORE_GET_LATENCY_MS`    | `300`                      |
    /// | `STORE_SUBMIT_LATENCY_MS` | `1000`                     |
    /// | `STORE_REVIEW_LATENCY_MS` | `1000`                     |
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port: env_or("PORT", "3000"),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30"),
            store_list_latency_ms: env_or("STORE_LIST_LATENCY_MS", "500"),
            store_get_latency_ms: env_or("STORE_GET_LATENCY_MS", "300"),
            store_submit_latency_ms: env_or("STORE_SUBMIT_LATENCY_MS", "1000"),
            store_review_latency_ms: env_or("STORE_REVIEW_LATENCY_MS", "1000"),
        }
    }

    /// Store latencies as configured.
    pub fn store_latency(&self) -> StoreLatency {
        StoreLatency {
            list: Duration::from_millis(self.store_list_latency_ms),
            get: Duration::from_millis(self.store_get_latency_ms),
            submit: Duration::from_millis(self.store_submit_latency_ms),
            review: Duration::from_millis(self.store_review_latency_ms),
        }
    }
}

fn env_or<T>(name: &str, default: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(name)
        .unwrap_or_else(|_| default.into())
        .parse()
        .unwrap_or_else(|e| panic!("{name} must be a valid {}: {e}", std::any::type_name::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_latency_converts_milliseconds() {
        let config = ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            store_list_latency_ms: 500,
            store_get_latency_ms: 300,
            store_submit_latency_ms: 1_000,
            store_review_latency_ms: 0,
        };

        let latency = config.store_latency();
        assert_eq!(latency.list, Duration::from_millis(500));
        assert_eq!(latency.get, Duration::from_millis(300));
        assert_eq!(latency.submit, Duration::from_secs(1));
        assert!(latency.review.is_zero());
    }

    #[test]
    #[should_panic(expected = "FAKEBAKE_TEST_BAD_PORT must be a valid")]
    fn unparsable_values_fail_fast() {
        std::env::set_var("FAKEBAKE_TEST_BAD_PORT", "not-a-port");
        let _: u16 = env_or("FAKEBAKE_TEST_BAD_PORT", "3000");
    }
}
