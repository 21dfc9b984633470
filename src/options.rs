//! Per-request options: credentials, idempotency, versioning and timeouts

use crate::config::StripeConfig;
use crate::error::{RequestOptionField, Result, StripeError};

/// API version this library's types are pinned to
pub const API_VERSION: &str = "2020-03-02";

/// Longest idempotency key the API accepts, in characters
pub const MAX_IDEMPOTENCY_KEY_LENGTH: usize = 255;

/// Options applied to a single API request
///
/// Values are immutable once built. Use [`RequestOptions::builder`] to
/// start from a configuration, or [`RequestOptions::to_account_builder`]
/// to start a new request in the same account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    api_key: Option<String>,
    client_id: Option<String>,
    idempotency_key: Option<String>,
    account_id: Option<String>,
    api_version_override: Option<String>,
    connect_timeout_ms: i32,
    read_timeout_ms: i32,
    max_network_retries: i32,
}

impl RequestOptions {
    /// Options taken entirely from `config`
    ///
    /// Idempotency key, account and version override are left unset.
    pub fn default_for(config: &StripeConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            client_id: config.client_id.clone(),
            idempotency_key: None,
            account_id: None,
            api_version_override: None,
            connect_timeout_ms: config.connect_timeout_ms,
            read_timeout_ms: config.read_timeout_ms,
            max_network_retries: config.max_network_retries,
        }
    }

    /// Builder seeded with the API key, client ID, timeouts and retries
    /// from `config`
    pub fn builder(config: &StripeConfig) -> RequestOptionsBuilder {
        RequestOptionsBuilder::new(config)
    }

    /// Builder for a new request in the same account context
    ///
    /// This is not a copy. Only the API key and account ID carry over.
    /// Everything else (client ID, idempotency key, version override,
    /// timeouts, retries) starts from `config` or unset, so a follow-up
    /// request never reuses this request's idempotency key. Use `clone()`
    /// for an exact copy.
    pub fn to_account_builder(&self, config: &StripeConfig) -> RequestOptionsBuilder {
        let builder = RequestOptionsBuilder::new(config);
        let builder = match &self.api_key {
            Some(key) => builder.with_api_key(key.as_str()),
            None => builder.clear_api_key(),
        };
        match &self.account_id {
            Some(account) => builder.with_account_id(account.as_str()),
            None => builder.clear_account_id(),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    /// Connected account the request is made on behalf of
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Always [`API_VERSION`]
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    pub fn api_version_override(&self) -> Option<&str> {
        self.api_version_override.as_deref()
    }

    /// Version sent to the API: the override when present, otherwise
    /// [`API_VERSION`]
    pub fn effective_api_version(&self) -> &str {
        self.api_version_override.as_deref().unwrap_or(API_VERSION)
    }

    pub fn connect_timeout_ms(&self) -> i32 {
        self.connect_timeout_ms
    }

    pub fn read_timeout_ms(&self) -> i32 {
        self.read_timeout_ms
    }

    pub fn max_network_retries(&self) -> i32 {
        self.max_network_retries
    }
}

/// Staging area for [`RequestOptions`]
///
/// The `with_*` string setters normalize eagerly. A value that fails
/// normalization is kept as given and reported by [`build`](Self::build),
/// unless it is cleared first. The `try_with_*` variants return the error
/// immediately instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptionsBuilder {
    api_key: Option<String>,
    client_id: Option<String>,
    idempotency_key: Option<String>,
    account_id: Option<String>,
    api_version_override: Option<String>,
    connect_timeout_ms: i32,
    read_timeout_ms: i32,
    max_network_retries: i32,
}

impl RequestOptionsBuilder {
    fn new(config: &StripeConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            client_id: config.client_id.clone(),
            idempotency_key: None,
            account_id: None,
            api_version_override: None,
            connect_timeout_ms: config.connect_timeout_ms,
            read_timeout_ms: config.read_timeout_ms,
            max_network_retries: config.max_network_retries,
        }
    }

    // ============ API key ============

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(stage(RequestOptionField::ApiKey, api_key.into()));
        self
    }

    pub fn try_with_api_key(mut self, api_key: impl Into<String>) -> Result<Self> {
        self.api_key = Some(normalize_required(RequestOptionField::ApiKey, api_key.into())?);
        Ok(self)
    }

    pub fn clear_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    // ============ Client ID ============

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(stage(RequestOptionField::ClientId, client_id.into()));
        self
    }

    pub fn try_with_client_id(mut self, client_id: impl Into<String>) -> Result<Self> {
        self.client_id = Some(normalize_required(
            RequestOptionField::ClientId,
            client_id.into(),
        )?);
        Ok(self)
    }

    pub fn clear_client_id(mut self) -> Self {
        self.client_id = None;
        self
    }

    // ============ Idempotency key ============

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(stage(RequestOptionField::IdempotencyKey, key.into()));
        self
    }

    pub fn try_with_idempotency_key(mut self, key: impl Into<String>) -> Result<Self> {
        self.idempotency_key = Some(normalize_required(
            RequestOptionField::IdempotencyKey,
            key.into(),
        )?);
        Ok(self)
    }

    pub fn clear_idempotency_key(mut self) -> Self {
        self.idempotency_key = None;
        self
    }

    // ============ Account ============

    /// Make the request on behalf of a connected account
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(stage(RequestOptionField::AccountId, account_id.into()));
        self
    }

    pub fn try_with_account_id(mut self, account_id: impl Into<String>) -> Result<Self> {
        self.account_id = Some(normalize_required(
            RequestOptionField::AccountId,
            account_id.into(),
        )?);
        Ok(self)
    }

    pub fn clear_account_id(mut self) -> Self {
        self.account_id = None;
        self
    }

    // ============ API version override ============

    /// Send a different API version than [`API_VERSION`]
    ///
    /// Only use this when the response is passed on as raw data, for
    /// example to a client acting with its own API version. Responses
    /// in another version will not match this library's types.
    pub fn with_api_version_override(mut self, version: impl Into<String>) -> Self {
        self.api_version_override = Some(stage(
            RequestOptionField::ApiVersionOverride,
            version.into(),
        ));
        self
    }

    pub fn try_with_api_version_override(mut self, version: impl Into<String>) -> Result<Self> {
        self.api_version_override = Some(normalize_required(
            RequestOptionField::ApiVersionOverride,
            version.into(),
        )?);
        Ok(self)
    }

    pub fn clear_api_version_override(mut self) -> Self {
        self.api_version_override = None;
        self
    }

    // ============ Network ============

    /// Connect timeout in milliseconds, stored as given
    pub fn with_connect_timeout_ms(mut self, ms: i32) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Read timeout in milliseconds, stored as given
    pub fn with_read_timeout_ms(mut self, ms: i32) -> Self {
        self.read_timeout_ms = ms;
        self
    }

    /// Retry count handed to the transport, stored as given
    pub fn with_max_network_retries(mut self, retries: i32) -> Self {
        self.max_network_retries = retries;
        self
    }

    /// Validate every field and produce the options
    ///
    /// Errors name the first invalid field in declaration order.
    pub fn build(&self) -> Result<RequestOptions> {
        Ok(RequestOptions {
            api_key: normalize(RequestOptionField::ApiKey, self.api_key.as_deref())?,
            client_id: normalize(RequestOptionField::ClientId, self.client_id.as_deref())?,
            idempotency_key: normalize(
                RequestOptionField::IdempotencyKey,
                self.idempotency_key.as_deref(),
            )?,
            account_id: normalize(RequestOptionField::AccountId, self.account_id.as_deref())?,
            api_version_override: normalize(
                RequestOptionField::ApiVersionOverride,
                self.api_version_override.as_deref(),
            )?,
            connect_timeout_ms: self.connect_timeout_ms,
            read_timeout_ms: self.read_timeout_ms,
            max_network_retries: self.max_network_retries,
        })
    }
}

/// Normalized value, or the raw value if it does not normalize
fn stage(field: RequestOptionField, value: String) -> String {
    match normalize_required(field, value.clone()) {
        Ok(normalized) => normalized,
        Err(_) => {
            tracing::debug!(field = field.as_str(), "deferring invalid request option to build");
            value
        }
    }
}

fn normalize(field: RequestOptionField, value: Option<&str>) -> Result<Option<String>> {
    // absence is always valid
    value
        .map(|v| normalize_required(field, v.to_string()))
        .transpose()
}

fn normalize_required(field: RequestOptionField, value: String) -> Result<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(StripeError::invalid_option(field, empty_message(field)));
    }

    if field == RequestOptionField::IdempotencyKey {
        let length = trimmed.chars().count();
        if length > MAX_IDEMPOTENCY_KEY_LENGTH {
            return Err(StripeError::invalid_option(
                field,
                format!(
                    "Idempotency Key length was {}, which is larger than the {} character maximum!",
                    length, MAX_IDEMPOTENCY_KEY_LENGTH
                ),
            ));
        }
    }

    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

fn empty_message(field: RequestOptionField) -> &'static str {
    match field {
        RequestOptionField::ApiKey => "Empty API key specified!",
        RequestOptionField::ClientId => "Empty client_id specified!",
        RequestOptionField::IdempotencyKey => "Empty Idempotency Key Specified!",
        RequestOptionField::AccountId => "Empty account id specified!",
        RequestOptionField::ApiVersionOverride => "Empty API version specified!",
    }
}
