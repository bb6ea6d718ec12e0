//! Environment-derived configuration.
//!
//! Everything the workflows need from the environment is resolved once at
//! startup and passed down explicitly; nothing reads `std::env` mid-workflow.

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use url::Url;

use crate::domain::DomainName;
use crate::error::ConfigError;

/// Default seconds between stack status polls.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default deadline for a stack to reach a terminal state.
const DEFAULT_MAX_WAIT_SECS: u64 = 900;

/// Admin service port (PostgREST convention carried over from the service).
const ADMIN_PORT: u16 = 3000;

/// Polling parameters for the stack waiter.
#[derive(Debug, Clone)]
pub struct WaiterConfig {
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret used to sign admin credentials.
    pub secret: String,
    /// Base domain all tenant subdomains hang off.
    pub base_domain: DomainName,
    /// Stack-management API endpoint.
    pub provider_endpoint: Url,
    /// Admin service endpoint.
    pub admin_endpoint: Url,
    pub waiter: WaiterConfig,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Required: `TINKER_SECRET`, `TINKER_DOMAIN`. Optional:
    /// `TINKER_PROVIDER_ENDPOINT`, `TINKER_ADMIN_ENDPOINT`,
    /// `TINKER_POLL_INTERVAL_SECS`, `TINKER_MAX_WAIT_SECS`, `TINKER_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = require_var("TINKER_SECRET")?;

        let domain_raw = require_var("TINKER_DOMAIN")?;
        let base_domain =
            DomainName::parse(&domain_raw).map_err(|e| ConfigError::InvalidValue {
                field: "TINKER_DOMAIN",
                reason: e.to_string(),
            })?;

        let provider_endpoint = match optional_var("TINKER_PROVIDER_ENDPOINT") {
            Some(raw) => parse_url("TINKER_PROVIDER_ENDPOINT", &raw)?,
            None => {
                let default = format!("https://stacks.{base_domain}");
                parse_url("TINKER_PROVIDER_ENDPOINT", &default)?
            }
        };

        let admin_endpoint = match optional_var("TINKER_ADMIN_ENDPOINT") {
            Some(raw) => parse_url("TINKER_ADMIN_ENDPOINT", &raw)?,
            None => {
                let default = format!("https://admin.{base_domain}:{ADMIN_PORT}");
                parse_url("TINKER_ADMIN_ENDPOINT", &default)?
            }
        };

        let waiter = WaiterConfig {
            poll_interval: Duration::from_secs(parse_secs(
                "TINKER_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            max_wait: Duration::from_secs(parse_secs(
                "TINKER_MAX_WAIT_SECS",
                DEFAULT_MAX_WAIT_SECS,
            )?),
        };

        let log_filter = optional_var("TINKER_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            secret,
            base_domain,
            provider_endpoint,
            admin_endpoint,
            waiter,
            log_filter,
        })
    }

    /// Initialize the global tracing subscriber from the configured filter.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn require_var(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidValue {
            field: var,
            reason: "must not be empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingVar { var }),
    }
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

fn parse_secs(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match optional_var(var) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: var,
            reason: format!("'{raw}' is not a number of seconds"),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var manipulation is process-global; serialize these tests.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn with_base_env<T>(f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        std::env::set_var("TINKER_SECRET", "s3cret");
        std::env::set_var("TINKER_DOMAIN", "badbud.net");
        let result = f();
        for var in [
            "TINKER_SECRET",
            "TINKER_DOMAIN",
            "TINKER_PROVIDER_ENDPOINT",
            "TINKER_ADMIN_ENDPOINT",
            "TINKER_POLL_INTERVAL_SECS",
            "TINKER_MAX_WAIT_SECS",
        ] {
            std::env::remove_var(var);
        }
        result
    }

    #[test]
    fn loads_defaults_from_minimal_env() {
        with_base_env(|| {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_domain.as_str(), "badbud.net");
            assert_eq!(
                config.admin_endpoint.as_str(),
                "https://admin.badbud.net:3000/"
            );
            assert_eq!(config.waiter.max_wait, Duration::from_secs(900));
            assert_eq!(config.waiter.poll_interval, Duration::from_secs(10));
        });
    }

    #[test]
    fn rejects_bad_poll_interval() {
        with_base_env(|| {
            std::env::set_var("TINKER_POLL_INTERVAL_SECS", "soon");
            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue {
                    field: "TINKER_POLL_INTERVAL_SECS",
                    ..
                }
            ));
        });
    }

    #[test]
    fn rejects_malformed_domain() {
        with_base_env(|| {
            std::env::set_var("TINKER_DOMAIN", "not a domain");
            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue {
                    field: "TINKER_DOMAIN",
                    ..
                }
            ));
        });
    }
}
