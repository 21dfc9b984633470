//! Mapping of request options onto reqwest builders
//!
//! Nothing here sends a request or retries one. The caller's transport
//! owns the client and the retry loop and reads
//! [`RequestOptions::max_network_retries`] itself.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{ClientBuilder, RequestBuilder};

use crate::error::Result;
use crate::options::RequestOptions;

const USER_AGENT_VALUE: &str = concat!("stripe-sdk-rust/", env!("CARGO_PKG_VERSION"));

pub const STRIPE_ACCOUNT_HEADER: &str = "Stripe-Account";
pub const STRIPE_VERSION_HEADER: &str = "Stripe-Version";
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

impl RequestOptions {
    /// Headers carrying credentials, account, idempotency key and version
    ///
    /// `Stripe-Version` is always present. The other option headers are
    /// only present when the option is set.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            HeaderName::from_static("stripe-version"),
            HeaderValue::from_str(self.effective_api_version())?,
        );

        if let Some(key) = self.api_key() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", key))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(account) = self.account_id() {
            headers.insert(
                HeaderName::from_static("stripe-account"),
                HeaderValue::from_str(account)?,
            );
        }
        if let Some(key) = self.idempotency_key() {
            headers.insert(
                HeaderName::from_static("idempotency-key"),
                HeaderValue::from_str(key)?,
            );
        }

        tracing::debug!(
            authenticated = self.api_key().is_some(),
            account = self.account_id(),
            api_version = self.effective_api_version(),
            idempotent = self.idempotency_key().is_some(),
            "prepared request headers"
        );

        Ok(headers)
    }

    /// Add the option headers and read timeout to a request
    pub fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let request = request.headers(self.headers()?);

        Ok(match positive_millis(self.read_timeout_ms()) {
            Some(timeout) => request.timeout(timeout),
            None => request,
        })
    }

    /// Configure connect and read timeouts on a client
    ///
    /// Non-positive timeouts leave reqwest's defaults in place.
    pub fn configure_client(&self, client: ClientBuilder) -> ClientBuilder {
        let client = client.user_agent(USER_AGENT_VALUE);
        let client = match positive_millis(self.connect_timeout_ms()) {
            Some(timeout) => client.connect_timeout(timeout),
            None => client,
        };
        match positive_millis(self.read_timeout_ms()) {
            Some(timeout) => client.timeout(timeout),
            None => client,
        }
    }
}

fn positive_millis(ms: i32) -> Option<Duration> {
    u64::try_from(ms)
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
