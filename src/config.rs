//! Default configuration shared by every request

use serde::Deserialize;

use crate::error::{Result, StripeError};

pub(crate) const DEFAULT_CONNECT_TIMEOUT_MS: i32 = 30_000;
pub(crate) const DEFAULT_READ_TIMEOUT_MS: i32 = 80_000;
pub(crate) const DEFAULT_MAX_NETWORK_RETRIES: i32 = 0;

/// Defaults that seed every [`RequestOptions`](crate::RequestOptions)
///
/// Build one at startup and pass it by reference (or inside an `Arc`)
/// to whatever prepares requests. It is never mutated by this crate.
///
/// # Example
///
/// ```
/// use stripe_sdk::StripeConfig;
///
/// let config = StripeConfig::new()
///     .with_api_key("sk_test_xxx")
///     .with_read_timeout_ms(60_000)
///     .with_max_network_retries(2);
///
/// assert_eq!(config.api_key.as_deref(), Some("sk_test_xxx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StripeConfig {
    /// Secret API key used when a request does not set its own
    pub api_key: Option<String>,
    /// OAuth client identifier
    pub client_id: Option<String>,
    /// Connect timeout in milliseconds (default: 30000)
    pub connect_timeout_ms: i32,
    /// Read timeout in milliseconds (default: 80000)
    pub read_timeout_ms: i32,
    /// Number of retry attempts for failed requests (default: 0)
    pub max_network_retries: i32,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            client_id: None,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            max_network_retries: DEFAULT_MAX_NETWORK_RETRIES,
        }
    }
}

impl StripeConfig {
    /// Create a configuration with library defaults and no credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `STRIPE_*` environment variables
    ///
    /// Unset variables keep their defaults. Numeric variables that do not
    /// parse fail with [`StripeError::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("STRIPE_API_KEY") {
            config.api_key = Some(key);
        }
        if let Some(client_id) = lookup("STRIPE_CLIENT_ID") {
            config.client_id = Some(client_id);
        }
        if let Some(ms) = parse_var(&lookup, "STRIPE_CONNECT_TIMEOUT_MS")? {
            config.connect_timeout_ms = ms;
        }
        if let Some(ms) = parse_var(&lookup, "STRIPE_READ_TIMEOUT_MS")? {
            config.read_timeout_ms = ms;
        }
        if let Some(retries) = parse_var(&lookup, "STRIPE_MAX_NETWORK_RETRIES")? {
            config.max_network_retries = retries;
        }

        tracing::debug!(
            has_api_key = config.api_key.is_some(),
            connect_timeout_ms = config.connect_timeout_ms,
            read_timeout_ms = config.read_timeout_ms,
            max_network_retries = config.max_network_retries,
            "loaded stripe config from environment"
        );

        Ok(config)
    }

    /// Set the default API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default OAuth client ID
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the connect timeout in milliseconds
    pub fn with_connect_timeout_ms(mut self, ms: i32) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout in milliseconds
    pub fn with_read_timeout_ms(mut self, ms: i32) -> Self {
        self.read_timeout_ms = ms;
        self
    }

    /// Set the maximum number of network retries
    pub fn with_max_network_retries(mut self, retries: i32) -> Self {
        self.max_network_retries = retries;
        self
    }
}

fn parse_var<F>(lookup: &F, var: &str) -> Result<Option<i32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| StripeError::Config {
                var: var.to_string(),
                value,
            }),
    }
}
