//! Integration tests for the flagpole storefront.
//!
//! Everything runs in-process: the router is driven with
//! `tower::ServiceExt::oneshot` and the Customer Account API is a
//! `wiremock` server, so no network access or credentials are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p flagpole-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `chat_intents` - Intent matching against the shipped table
//! - `customer_client` - Retry, timeout and GraphQL error handling
//! - `storefront_api` - HTTP routes end to end

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use flagpole_storefront::config::{ShopifyCustomerConfig, StorefrontConfig};
use flagpole_storefront::shopify::RetryPolicy;
use serde_json::{Value, json};
use wiremock::ResponseTemplate;

/// Shop ID used by every test config.
pub const SHOP_ID: &str = "12345678901";

/// API version used by every test config.
pub const API_VERSION: &str = "2026-01";

/// Path the client posts GraphQL to, relative to the mock server.
#[must_use]
pub fn graphql_path() -> String {
    format!("/{SHOP_ID}/account/customer/api/{API_VERSION}/graphql")
}

/// Retry policy with short delays so failure tests finish quickly.
#[must_use]
pub fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_attempts,
        Duration::from_millis(250),
        Duration::from_millis(10),
    )
}

/// Customer Account API config pointed at `base_url`.
#[must_use]
pub fn customer_config(base_url: &str, retry: RetryPolicy) -> ShopifyCustomerConfig {
    ShopifyCustomerConfig {
        shop_id: SHOP_ID.to_string(),
        api_version: API_VERSION.to_string(),
        api_base_url: base_url.to_string(),
        retry,
    }
}

/// Full storefront config pointed at `base_url`, with Sentry disabled.
#[must_use]
pub fn storefront_config(base_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        shopify: customer_config(base_url, fast_retry(2)),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// A 200 response carrying a GraphQL `data` payload.
#[must_use]
pub fn graphql_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// A 200 response carrying a GraphQL `errors` array.
#[must_use]
pub fn graphql_errors(messages: &[&str]) -> ResponseTemplate {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();
    ResponseTemplate::new(200).set_body_json(json!({ "data": null, "errors": errors }))
}

/// `data` payload for a `getOrders` query with two orders.
#[must_use]
pub fn orders_payload() -> Value {
    json!({
        "customer": {
            "orders": {
                "nodes": [
                    {
                        "id": "gid://shopify/Order/5001",
                        "name": "#1002",
                        "processedAt": "2026-09-30T14:05:00Z",
                        "financialStatus": "PAID",
                        "totalPrice": { "amount": "249.00", "currencyCode": "USD" }
                    },
                    {
                        "id": "gid://shopify/Order/5000",
                        "name": "#1001",
                        "processedAt": "2026-08-12T09:30:00Z",
                        "financialStatus": "REFUNDED",
                        "totalPrice": { "amount": "59.5", "currencyCode": "CAD" }
                    }
                ]
            }
        }
    })
}

/// `data` payload for a `getCustomer` query.
#[must_use]
pub fn customer_payload() -> Value {
    json!({
        "customer": {
            "id": "gid://shopify/Customer/7001",
            "firstName": "Sam",
            "lastName": "Rivera",
            "emailAddress": { "emailAddress": "sam@example.com" },
            "phoneNumber": null,
            "defaultAddress": null
        }
    })
}
