//! Demo configuration.
//!
//! Everything has a default matching the stock demo. Two environment variables
//! override it:
//!
//! - `SUSPENSE_FETCH_DELAY_MS` - simulated network latency in milliseconds
//! - `SUSPENSE_POST_URL` - the URL the post view fetches (only used as the memo key)

use crate::model::Post;
use std::time::Duration;
use thiserror::Error;

pub const DELAY_ENV: &str = "SUSPENSE_FETCH_DELAY_MS";
pub const URL_ENV: &str = "SUSPENSE_POST_URL";

pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid SUSPENSE_FETCH_DELAY_MS value: {0:?}")]
    InvalidDelay(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// How long the simulated fetch takes.
    pub delay: Duration,
    /// Post the simulated fetch resolves with.
    pub post: Post,
    pub url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            post: Post::default(),
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl FetchConfig {
    /// Builds a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DELAY_ENV) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDelay(raw.clone()))?;
            config.delay = Duration::from_millis(millis);
        }
        if let Some(url) = lookup(URL_ENV) {
            config.url = url;
        }

        Ok(config)
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = FetchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, FetchConfig::default());
        assert_eq!(config.delay, Duration::from_millis(2000));
        assert_eq!(config.post.title, "Hello World");
    }

    #[test]
    fn test_overrides_from_env() {
        let config =
            FetchConfig::from_lookup(lookup(&[(DELAY_ENV, "150"), (URL_ENV, "http://localhost/posts/2")]))
                .unwrap();
        assert_eq!(config.delay, Duration::from_millis(150));
        assert_eq!(config.url, "http://localhost/posts/2");
    }

    #[test]
    fn test_invalid_delay_is_rejected() {
        let result = FetchConfig::from_lookup(lookup(&[(DELAY_ENV, "soon")]));
        assert_eq!(result, Err(ConfigError::InvalidDelay("soon".to_string())));
    }
}
