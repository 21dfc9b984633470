//! Request option construction, defaults and carry-over

use stripe_sdk::{RequestOptionField, RequestOptions, StripeConfig, API_VERSION};

/// Helper to create the shared defaults used across these tests
fn create_test_config() -> StripeConfig {
    StripeConfig::new()
        .with_api_key("sk_live_A")
        .with_client_id("ca_1")
        .with_connect_timeout_ms(30_000)
        .with_read_timeout_ms(80_000)
        .with_max_network_retries(2)
}

// ============ Defaults ============

#[test]
fn test_default_for_uses_config() {
    let config = create_test_config();
    let options = RequestOptions::default_for(&config);

    assert_eq!(options.api_key(), Some("sk_live_A"));
    assert_eq!(options.client_id(), Some("ca_1"));
    assert_eq!(options.idempotency_key(), None);
    assert_eq!(options.account_id(), None);
    assert_eq!(options.api_version_override(), None);
    assert_eq!(options.api_version(), API_VERSION);
    assert_eq!(options.connect_timeout_ms(), 30_000);
    assert_eq!(options.read_timeout_ms(), 80_000);
    assert_eq!(options.max_network_retries(), 2);
}

#[test]
fn test_default_for_is_stable() {
    let config = create_test_config();
    assert_eq!(
        RequestOptions::default_for(&config),
        RequestOptions::default_for(&config)
    );
}

#[test]
fn test_empty_builder_matches_default() {
    let config = create_test_config();
    let built = RequestOptions::builder(&config).build().unwrap();

    assert_eq!(built, RequestOptions::default_for(&config));
}

#[test]
fn test_default_without_credentials() {
    let options = RequestOptions::default_for(&StripeConfig::new());

    assert_eq!(options.api_key(), None);
    assert_eq!(options.client_id(), None);
    assert_eq!(options.read_timeout_ms(), 80_000);
}

// ============ Normalization ============

#[test]
fn test_setters_trim_whitespace() {
    let options = RequestOptions::builder(&create_test_config())
        .with_api_key("\tsk_test_X\n")
        .with_client_id(" ca_2 ")
        .with_idempotency_key("  idem-1")
        .with_account_id("acct_1  ")
        .with_api_version_override(" 2019-12-03 ")
        .build()
        .unwrap();

    assert_eq!(options.api_key(), Some("sk_test_X"));
    assert_eq!(options.client_id(), Some("ca_2"));
    assert_eq!(options.idempotency_key(), Some("idem-1"));
    assert_eq!(options.account_id(), Some("acct_1"));
    assert_eq!(options.api_version_override(), Some("2019-12-03"));
}

#[test]
fn test_normalization_is_idempotent() {
    let config = create_test_config();
    let once = RequestOptions::builder(&config)
        .with_api_key("  sk_test_X  ")
        .build()
        .unwrap();
    let twice = RequestOptions::builder(&config)
        .with_api_key(once.api_key().unwrap())
        .build()
        .unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_build_can_be_repeated() {
    let builder = RequestOptions::builder(&create_test_config())
        .with_idempotency_key("idem-1")
        .with_account_id("acct_1");

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_idempotency_key_at_limit_is_accepted() {
    let key = "k".repeat(255);
    let options = RequestOptions::builder(&create_test_config())
        .with_idempotency_key(format!("  {}  ", key))
        .build()
        .unwrap();

    assert_eq!(options.idempotency_key(), Some(key.as_str()));
}

#[test]
fn test_numeric_overrides_pass_through() {
    let options = RequestOptions::builder(&create_test_config())
        .with_connect_timeout_ms(1_000)
        .with_read_timeout_ms(2_000)
        .with_max_network_retries(7)
        .build()
        .unwrap();

    assert_eq!(options.connect_timeout_ms(), 1_000);
    assert_eq!(options.read_timeout_ms(), 2_000);
    assert_eq!(options.max_network_retries(), 7);
}

#[test]
fn test_version_override_does_not_change_pinned_version() {
    let options = RequestOptions::builder(&create_test_config())
        .with_api_version_override("2017-05-25")
        .build()
        .unwrap();

    assert_eq!(options.api_version(), API_VERSION);
    assert_eq!(options.effective_api_version(), "2017-05-25");
}

// ============ Clearing ============

#[test]
fn test_clear_resets_to_unset() {
    let options = RequestOptions::builder(&create_test_config())
        .with_api_key("sk_test_X")
        .clear_api_key()
        .clear_client_id()
        .with_idempotency_key("idem-1")
        .clear_idempotency_key()
        .with_account_id("acct_1")
        .clear_account_id()
        .with_api_version_override("2019-12-03")
        .clear_api_version_override()
        .build()
        .unwrap();

    assert_eq!(options.api_key(), None);
    assert_eq!(options.client_id(), None);
    assert_eq!(options.idempotency_key(), None);
    assert_eq!(options.account_id(), None);
    assert_eq!(options.api_version_override(), None);
}

#[test]
fn test_clear_discards_invalid_value() {
    let builder = RequestOptions::builder(&create_test_config()).with_api_key("   ");
    assert!(builder.build().is_err());

    let options = builder.clear_api_key().build().unwrap();
    assert_eq!(options.api_key(), None);
}

#[test]
fn test_clear_discards_oversized_idempotency_key() {
    let options = RequestOptions::builder(&create_test_config())
        .with_idempotency_key("x".repeat(300))
        .clear_idempotency_key()
        .build()
        .unwrap();

    assert_eq!(options.idempotency_key(), None);
}

// ============ Same-account builder ============

#[test]
fn test_to_account_builder_keeps_only_key_and_account() {
    let config = create_test_config();
    let original = RequestOptions::builder(&config)
        .with_api_key(" sk_test_X ")
        .with_account_id("acct_1")
        .with_idempotency_key("idem-1")
        .with_client_id("ca_other")
        .with_api_version_override("2019-12-03")
        .with_connect_timeout_ms(1)
        .with_read_timeout_ms(2)
        .with_max_network_retries(9)
        .build()
        .unwrap();

    let next = original.to_account_builder(&config).build().unwrap();

    assert_eq!(next.api_key(), Some("sk_test_X"));
    assert_eq!(next.account_id(), Some("acct_1"));
    assert_eq!(next.idempotency_key(), None);
    assert_eq!(next.api_version_override(), None);
    assert_eq!(next.client_id(), Some("ca_1"));
    assert_eq!(next.connect_timeout_ms(), 30_000);
    assert_eq!(next.read_timeout_ms(), 80_000);
    assert_eq!(next.max_network_retries(), 2);
}

#[test]
fn test_to_account_builder_clears_missing_key() {
    let config = create_test_config();
    let original = RequestOptions::builder(&config)
        .clear_api_key()
        .build()
        .unwrap();

    let next = original.to_account_builder(&config).build().unwrap();

    assert_eq!(next.api_key(), None);
    assert_eq!(next.account_id(), None);
}

#[test]
fn test_to_account_builder_reads_current_config() {
    let original = RequestOptions::builder(&create_test_config())
        .with_account_id("acct_1")
        .build()
        .unwrap();

    let updated = create_test_config().with_read_timeout_ms(5_000);
    let next = original.to_account_builder(&updated).build().unwrap();

    assert_eq!(next.read_timeout_ms(), 5_000);
    assert_eq!(next.api_key(), Some("sk_live_A"));
}

#[test]
fn test_clone_is_a_full_copy() {
    let original = RequestOptions::builder(&create_test_config())
        .with_idempotency_key("idem-1")
        .build()
        .unwrap();

    assert_eq!(original.clone().idempotency_key(), Some("idem-1"));
}

// ============ Eager setters ============

#[test]
fn test_try_setters_chain() {
    let options = RequestOptions::builder(&create_test_config())
        .try_with_api_key(" sk_test_X ")
        .and_then(|b| b.try_with_account_id("acct_1"))
        .and_then(|b| b.try_with_idempotency_key("idem-1"))
        .and_then(|b| b.try_with_client_id("ca_2"))
        .and_then(|b| b.try_with_api_version_override("2019-12-03"))
        .and_then(|b| b.build())
        .unwrap();

    assert_eq!(options.api_key(), Some("sk_test_X"));
    assert_eq!(options.client_id(), Some("ca_2"));
}

#[test]
fn test_try_setter_reports_field() {
    let err = RequestOptions::builder(&create_test_config())
        .try_with_api_version_override("")
        .unwrap_err();

    assert_eq!(err.field(), Some(RequestOptionField::ApiVersionOverride));
    assert_eq!(err.to_string(), "Empty API version specified!");
}
