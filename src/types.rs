//! Stripe API request parameter types

use serde::{Serialize, Serializer};
use std::collections::HashMap;

// ============ Common ============

/// A parameter that is either a value or explicitly emptied
///
/// `Empty` serializes as `""`, which tells the API to unset the field.
#[derive(Debug, Clone, PartialEq)]
pub enum Emptyable<T> {
    Empty,
    Value(T),
}

impl<T: Serialize> Serialize for Emptyable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Emptyable::Empty => serializer.serialize_str(""),
            Emptyable::Value(value) => value.serialize(serializer),
        }
    }
}

impl<T> From<T> for Emptyable<T> {
    fn from(value: T) -> Self {
        Emptyable::Value(value)
    }
}

// ============ Subscription Items ============

/// Behavior when a payment for the subscription item fails
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentBehavior {
    AllowIncomplete,
    ErrorIfIncomplete,
    PendingIfIncomplete,
}

/// How prorations are handled when the item changes the billing period
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBehavior {
    AlwaysInvoice,
    CreateProrations,
    None,
}

/// Usage threshold that triggers an invoice for metered items
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BillingThresholds {
    /// Number of units that triggers an invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_gte: Option<i64>,
    /// Undocumented parameters sent alongside the typed ones
    #[serde(flatten)]
    pub extra_params: Option<HashMap<String, serde_json::Value>>,
}

impl BillingThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_usage_gte(mut self, usage_gte: i64) -> Self {
        self.usage_gte = Some(usage_gte);
        self
    }

    pub fn put_extra_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }

    pub fn put_all_extra_param(mut self, params: HashMap<String, serde_json::Value>) -> Self {
        self.extra_params
            .get_or_insert_with(HashMap::new)
            .extend(params);
        self
    }
}

/// Parameters for creating a subscription item
///
/// # Example
///
/// ```
/// use stripe_sdk::{PaymentBehavior, SubscriptionItemCreateParams};
///
/// let params = SubscriptionItemCreateParams::new()
///     .with_subscription("sub_123")
///     .with_plan("plan_gold")
///     .with_quantity(2)
///     .with_payment_behavior(PaymentBehavior::ErrorIfIncomplete)
///     .put_metadata("order_id", "6735");
///
/// assert_eq!(params.quantity, Some(2));
/// ```
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SubscriptionItemCreateParams {
    /// Usage threshold for metered billing, or empty to clear it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_thresholds: Option<Emptyable<BillingThresholds>>,
    /// Response fields to expand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,
    /// Undocumented parameters sent alongside the typed ones
    #[serde(flatten)]
    pub extra_params: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_behavior: Option<PaymentBehavior>,
    /// Plan ID to subscribe to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Deprecated in favor of `proration_behavior`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prorate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_behavior: Option<ProrationBehavior>,
    /// Unix timestamp used to calculate prorations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proration_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Subscription the item is added to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    /// Tax rate IDs applied to the item, or empty to clear them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Emptyable<Vec<String>>>,
}

impl SubscriptionItemCreateParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_billing_thresholds(mut self, thresholds: BillingThresholds) -> Self {
        self.billing_thresholds = Some(Emptyable::Value(thresholds));
        self
    }

    /// Clear the item's billing thresholds
    pub fn with_empty_billing_thresholds(mut self) -> Self {
        self.billing_thresholds = Some(Emptyable::Empty);
        self
    }

    pub fn add_expand(mut self, field: impl Into<String>) -> Self {
        self.expand.get_or_insert_with(Vec::new).push(field.into());
        self
    }

    pub fn add_all_expand<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand
            .get_or_insert_with(Vec::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn put_extra_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra_params
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value);
        self
    }

    pub fn put_all_extra_param(mut self, params: HashMap<String, serde_json::Value>) -> Self {
        self.extra_params
            .get_or_insert_with(HashMap::new)
            .extend(params);
        self
    }

    pub fn put_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn put_all_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata.get_or_insert_with(HashMap::new).extend(metadata);
        self
    }

    pub fn with_payment_behavior(mut self, behavior: PaymentBehavior) -> Self {
        self.payment_behavior = Some(behavior);
        self
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    pub fn with_prorate(mut self, prorate: bool) -> Self {
        self.prorate = Some(prorate);
        self
    }

    pub fn with_proration_behavior(mut self, behavior: ProrationBehavior) -> Self {
        self.proration_behavior = Some(behavior);
        self
    }

    pub fn with_proration_date(mut self, timestamp: i64) -> Self {
        self.proration_date = Some(timestamp);
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_subscription(mut self, subscription: impl Into<String>) -> Self {
        self.subscription = Some(subscription.into());
        self
    }

    /// Append a tax rate, replacing an explicit empty list
    pub fn add_tax_rate(mut self, tax_rate: impl Into<String>) -> Self {
        let mut rates = self.take_tax_rates();
        rates.push(tax_rate.into());
        self.tax_rates = Some(Emptyable::Value(rates));
        self
    }

    pub fn add_all_tax_rate<I, S>(mut self, tax_rates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rates = self.take_tax_rates();
        rates.extend(tax_rates.into_iter().map(Into::into));
        self.tax_rates = Some(Emptyable::Value(rates));
        self
    }

    pub fn with_tax_rates(mut self, tax_rates: Vec<String>) -> Self {
        self.tax_rates = Some(Emptyable::Value(tax_rates));
        self
    }

    /// Remove every tax rate from the item
    pub fn with_empty_tax_rates(mut self) -> Self {
        self.tax_rates = Some(Emptyable::Empty);
        self
    }

    /// Encode as form fields in the API's bracket notation
    pub fn to_form_pairs(&self) -> crate::Result<Vec<(String, String)>> {
        crate::form::to_form_pairs(self)
    }

    fn take_tax_rates(&mut self) -> Vec<String> {
        match self.tax_rates.take() {
            Some(Emptyable::Value(rates)) => rates,
            _ => Vec::new(),
        }
    }
}
