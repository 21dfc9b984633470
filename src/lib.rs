//! # Stripe SDK
//!
//! Request options and typed request parameters for the Stripe REST API.
//!
//! ## Quick Start
//!
//! ```
//! use stripe_sdk::{RequestOptions, StripeConfig};
//!
//! # fn main() -> stripe_sdk::Result<()> {
//! // Load defaults once at startup
//! let config = StripeConfig::new().with_api_key("sk_test_xxx");
//!
//! // Build options for a single request
//! let options = RequestOptions::builder(&config)
//!     .with_idempotency_key("order-6735")
//!     .with_account_id("acct_123")
//!     .build()?;
//!
//! assert_eq!(options.api_key(), Some("sk_test_xxx"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use stripe_sdk::StripeConfig;
//!
//! # fn main() -> stripe_sdk::Result<()> {
//! // STRIPE_API_KEY, STRIPE_CLIENT_ID, STRIPE_CONNECT_TIMEOUT_MS,
//! // STRIPE_READ_TIMEOUT_MS and STRIPE_MAX_NETWORK_RETRIES
//! let config = StripeConfig::from_env()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Follow-up Requests
//!
//! `to_account_builder` starts a new request in the same account. Only the
//! API key and account carry over, so idempotency keys are never reused:
//!
//! ```
//! use stripe_sdk::{RequestOptions, StripeConfig};
//!
//! # fn main() -> stripe_sdk::Result<()> {
//! let config = StripeConfig::new();
//! let first = RequestOptions::builder(&config)
//!     .with_api_key("sk_test_xxx")
//!     .with_account_id("acct_123")
//!     .with_idempotency_key("charge-1")
//!     .build()?;
//!
//! let next = first.to_account_builder(&config).build()?;
//! assert_eq!(next.account_id(), Some("acct_123"));
//! assert_eq!(next.idempotency_key(), None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sending a Request
//!
//! ```no_run
//! use stripe_sdk::{RequestOptions, StripeConfig, SubscriptionItemCreateParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StripeConfig::new().with_api_key("sk_test_xxx");
//! let options = RequestOptions::default_for(&config);
//!
//! let client = options.configure_client(reqwest::Client::builder()).build()?;
//! let params = SubscriptionItemCreateParams::new()
//!     .with_subscription("sub_123")
//!     .with_plan("plan_gold");
//!
//! let request = client
//!     .post("https://api.stripe.com/v1/subscription_items")
//!     .form(&params.to_form_pairs()?);
//! let _response = options.apply(request)?.send().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use stripe_sdk::{RequestOptionField, RequestOptions, StripeConfig, StripeError};
//!
//! let result = RequestOptions::builder(&StripeConfig::new())
//!     .with_api_key("   ")
//!     .build();
//!
//! match result {
//!     Err(StripeError::InvalidRequestOptions { field, message }) => {
//!         assert_eq!(field, RequestOptionField::ApiKey);
//!         assert_eq!(message, "Empty API key specified!");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod client;
mod config;
mod error;
pub mod form;
mod options;
mod types;

// Re-export main types
pub use client::{IDEMPOTENCY_KEY_HEADER, STRIPE_ACCOUNT_HEADER, STRIPE_VERSION_HEADER};
pub use config::StripeConfig;
pub use error::{RequestOptionField, Result, StripeError};
pub use options::{RequestOptions, RequestOptionsBuilder, API_VERSION, MAX_IDEMPOTENCY_KEY_LENGTH};
pub use types::{
    // Common
    Emptyable,
    // Subscription Items
    BillingThresholds,
    PaymentBehavior,
    ProrationBehavior,
    SubscriptionItemCreateParams,
};
