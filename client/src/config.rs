use std::time::Duration;

use crate::error::FetchError;

/// Public PokeAPI v2 endpoint
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

pub const ENV_API_URL: &str = "POKEDEX_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";
pub const ENV_MAX_CONCURRENT: &str = "POKEDEX_MAX_CONCURRENT";

/// Backoff between attempts at a request that failed transiently
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Never retry
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before the given retry (1 for the first retry)
    pub fn delay_for(&self, retry: usize) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let delay = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        Duration::from_secs_f64(delay.min(self.max_delay.as_secs_f64()))
    }
}

/// Settings for [`PokedexClient`](crate::PokedexClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,

    /// Upper bound on requests in flight while loading a page or a detail view
    pub max_concurrent_requests: usize,

    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            max_concurrent_requests: 16,
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `POKEDEX_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup; unusable values are logged and skipped
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if url.is_empty() {
                tracing::warn!(variable = ENV_API_URL, "Ignoring empty API url");
            } else {
                self.base_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    variable = ENV_TIMEOUT_SECS,
                    value = %raw,
                    "Ignoring invalid request timeout"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_CONCURRENT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => self.max_concurrent_requests = limit,
                _ => tracing::warn!(
                    variable = ENV_MAX_CONCURRENT,
                    value = %raw,
                    "Ignoring invalid concurrency limit"
                ),
            }
        }

        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(FetchError::Config(format!(
                "API url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.max_concurrent_requests == 0 {
            return Err(FetchError::Config(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(FetchError::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute url of an API path such as `pokemon/25`
    ///
    /// PokeAPI redirects paths without a trailing slash, so one is always added.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_applied() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            (ENV_API_URL, "http://localhost:8000/api/v2"),
            (ENV_TIMEOUT_SECS, "30"),
            (ENV_MAX_CONCURRENT, "4"),
        ]));

        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_concurrent_requests, 4);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = ClientConfig::default().with_overrides(lookup(&[
            (ENV_API_URL, "  "),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_MAX_CONCURRENT, "0"),
        ]));

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig::default().with_base_url("pokeapi.co");
        assert!(matches!(config.validate(), Err(FetchError::Config(_))));

        let config = ClientConfig {
            max_concurrent_requests: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FetchError::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_with_single_slashes() {
        let config = ClientConfig::default().with_base_url("https://pokeapi.co/api/v2/");

        assert_eq!(
            config.endpoint("pokemon/25"),
            "https://pokeapi.co/api/v2/pokemon/25/"
        );
        assert_eq!(
            config.endpoint("/evolution-chain/1/"),
            "https://pokeapi.co/api/v2/evolution-chain/1/"
        );
    }

    #[test]
    fn test_retry_delay_backs_off_to_cap() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.delay_for(1), Duration::from_millis(250));
        assert_eq!(policy.delay_for(2), Duration::from_millis(500));
        assert_eq!(policy.delay_for(3), Duration::from_secs(1));
        assert_eq!(policy.delay_for(10), Duration::from_secs(5));
        assert_eq!(RetryPolicy::none().max_attempts, 1);
    }
}
