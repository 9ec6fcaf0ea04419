//! Environment-backed configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use std::time::Duration;

use super::error::ConfigError;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_VERSE_API_URL: &str = "https://bible-api.com/data/web/random";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// 10 KiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024;
/// Rate limiting is opt-in
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: usize = 0;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Bot configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,
    pub debug: bool,
    pub command_prefix: String,
    pub verse_api_url: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    /// 0 disables rate limiting
    pub rate_limit_max_requests: usize,
    pub rate_limit_window: Duration,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first if values should come from a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_BOT_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        let debug = lookup("DEBUG")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let command_prefix = match lookup("COMMAND_PREFIX") {
            Some(p) if p.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    key: "COMMAND_PREFIX",
                    reason: "must not be empty".to_string(),
                })
            }
            Some(p) => p.trim().to_string(),
            None => DEFAULT_PREFIX.to_string(),
        };

        let verse_api_url = lookup("VERSE_API_URL")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_VERSE_API_URL.to_string());

        let timeout_secs = parse_number(
            &lookup,
            "VERSE_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "VERSE_REQUEST_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let max_body_bytes =
            parse_number(&lookup, "VERSE_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "VERSE_MAX_BODY_BYTES",
                reason: "must be greater than zero".to_string(),
            });
        }

        let rate_limit_max_requests = parse_number(
            &lookup,
            "RATE_LIMIT_MAX_REQUESTS",
            DEFAULT_RATE_LIMIT_MAX_REQUESTS,
        )?;
        let window_secs = parse_number(
            &lookup,
            "RATE_LIMIT_WINDOW_SECS",
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
        )?;
        if window_secs == 0 && rate_limit_max_requests > 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_WINDOW_SECS",
                reason: "must be greater than zero when rate limiting is enabled".to_string(),
            });
        }

        Ok(Config {
            discord_token,
            debug,
            command_prefix,
            verse_api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
            rate_limit_max_requests,
            rate_limit_window: Duration::from_secs(window_secs),
        })
    }

    /// Default `env_logger` filter for this configuration
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: format!("'{raw}': {e}"),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_missing_token_is_error() {
        assert_eq!(load(&[]), Err(ConfigError::MissingCredential));
    }

    #[test]
    fn test_blank_token_is_error() {
        assert_eq!(
            load(&[("DISCORD_BOT_TOKEN", "   ")]),
            Err(ConfigError::MissingCredential)
        );
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DISCORD_BOT_TOKEN", "abc")]).unwrap();
        assert_eq!(config.discord_token, "abc");
        assert!(!config.debug);
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.verse_api_url, DEFAULT_VERSE_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.max_body_bytes, 10 * 1024);
        assert_eq!(config.rate_limit_max_requests, 0);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_debug_flag() {
        let config = load(&[("DISCORD_BOT_TOKEN", "abc"), ("DEBUG", "true")]).unwrap();
        assert!(config.debug);
        assert_eq!(config.log_level(), "debug");

        let config = load(&[("DISCORD_BOT_TOKEN", "abc"), ("DEBUG", "yes")]).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("COMMAND_PREFIX", "?"),
            ("VERSE_API_URL", "http://127.0.0.1:9000/verse"),
            ("VERSE_REQUEST_TIMEOUT_SECS", "3"),
            ("VERSE_MAX_BODY_BYTES", "2048"),
            ("RATE_LIMIT_MAX_REQUESTS", "5"),
            ("RATE_LIMIT_WINDOW_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.verse_api_url, "http://127.0.0.1:9000/verse");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.max_body_bytes, 2048);
        assert_eq!(config.rate_limit_max_requests, 5);
        assert_eq!(config.rate_limit_window, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = load(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("VERSE_REQUEST_TIMEOUT_SECS", "soon"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "VERSE_REQUEST_TIMEOUT_SECS",
                ..
            }
        ));

        let err = load(&[("DISCORD_BOT_TOKEN", "abc"), ("VERSE_MAX_BODY_BYTES", "0")])
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "VERSE_MAX_BODY_BYTES",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = load(&[("DISCORD_BOT_TOKEN", "abc"), ("COMMAND_PREFIX", " ")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "COMMAND_PREFIX",
                ..
            }
        ));
    }
}
