//! Shopify Customer Account API client.
//!
//! The Customer Account API serves customer-scoped data (profile, orders,
//! addresses) to a customer who has signed in through Shopify. Callers pass the
//! customer's access token on every call; the client holds no session state.
//!
//! Each query runs under the client's [`RetryPolicy`]. Failed attempts
//! (transport errors, timeouts, non-2xx statuses, unparseable bodies, or a
//! GraphQL `errors` array) are logged and retried; only the last error reaches
//! the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use flagpole_storefront::shopify::CustomerClient;
//!
//! let client = CustomerClient::new(&config.shopify);
//! let customer = client.get_customer(&access_token).await?;
//! ```

mod types;

pub use types::*;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::config::ShopifyCustomerConfig;
use crate::shopify::{GraphQLError, RetryPolicy, ShopifyError};

const USER_AGENT: &str = concat!("FlagpoleStorefront/", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY_CHARS: usize = 200;

// ─────────────────────────────────────────────────────────────────────────────
// GraphQL Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    fn into_result(self) -> Result<T, ShopifyError> {
        if let Some(errors) = self.errors
            && !errors.is_empty()
        {
            return Err(ShopifyError::GraphQL(errors));
        }

        self.data.ok_or(ShopifyError::MissingData)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Customer Account Client
// ─────────────────────────────────────────────────────────────────────────────

/// Client for the Shopify Customer Account API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct CustomerClient {
    inner: Arc<CustomerClientInner>,
}

struct CustomerClientInner {
    client: reqwest::Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl CustomerClient {
    /// Create a new Customer Account API client.
    #[must_use]
    pub fn new(config: &ShopifyCustomerConfig) -> Self {
        let endpoint = format!(
            "{}/{}/account/customer/api/{}/graphql",
            config.api_base_url.trim_end_matches('/'),
            config.shop_id,
            config.api_version
        );

        Self {
            inner: Arc::new(CustomerClientInner {
                client: reqwest::Client::new(),
                endpoint,
                retry: config.retry,
            }),
        }
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// The retry policy applied to every query.
    #[must_use]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.retry
    }

    // ─────────────────────────────────────────────────────────────────────────
    // GraphQL Execution
    // ─────────────────────────────────────────────────────────────────────────

    /// Execute a GraphQL query, retrying per the client's [`RetryPolicy`].
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt once every attempt has failed.
    /// Use [`ShopifyError::is_timeout`] to tell deadline failures apart.
    #[instrument(skip_all, fields(endpoint = %self.inner.endpoint))]
    pub async fn query<T: DeserializeOwned>(
        &self,
        access_token: &SecretString,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, ShopifyError> {
        let request = GraphQLRequest {
            query,
            variables: variables.as_ref(),
        };
        let policy = self.inner.retry;
        let mut attempt = 1;

        loop {
            match self.attempt(access_token, &request).await {
                Ok(data) => {
                    if attempt > 1 {
                        debug!(attempt, "Customer API request succeeded after retry");
                    }
                    return Ok(data);
                }
                // Every failure is retried, a rejected token (401) included;
                // callers map the final 401 via `ShopifyError::is_unauthorized`.
                Err(e) if policy.should_retry(attempt) => {
                    let delay = policy.backoff_for(attempt);
                    warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        timeout = e.is_timeout(),
                        error = %e,
                        "Customer API attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(
                        attempts = attempt,
                        timeout = e.is_timeout(),
                        error = %e,
                        "Customer API request failed, giving up"
                    );
                    return Err(e);
                }
            }
        }
    }

    /// One attempt, bounded by the policy timeout.
    async fn attempt<T: DeserializeOwned>(
        &self,
        access_token: &SecretString,
        request: &GraphQLRequest<'_>,
    ) -> Result<T, ShopifyError> {
        let timeout = self.inner.retry.timeout;
        tokio::time::timeout(timeout, self.send(access_token, request))
            .await
            .map_err(|_| ShopifyError::Timeout(timeout))?
    }

    async fn send<T: DeserializeOwned>(
        &self,
        access_token: &SecretString,
        request: &GraphQLRequest<'_>,
    ) -> Result<T, ShopifyError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .bearer_auth(access_token.expose_secret())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ShopifyError::Status {
                status,
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let gql_response: GraphQLResponse<T> = serde_json::from_str(&text)?;
        gql_response.into_result()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Customer Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the current customer's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_customer(&self, access_token: &SecretString) -> Result<Customer, ShopifyError> {
        #[derive(Deserialize)]
        struct Response {
            customer: Customer,
        }

        const QUERY: &str = r"
            query getCustomer {
                customer {
                    id
                    firstName
                    lastName
                    emailAddress { emailAddress }
                    phoneNumber { phoneNumber }
                    defaultAddress {
                        id
                        firstName
                        lastName
                        company
                        address1
                        address2
                        city
                        zoneCode
                        territoryCode
                        zip
                        phoneNumber
                    }
                }
            }
        ";

        let response: Response = self.query(access_token, QUERY, None).await?;
        Ok(response.customer)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Order Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the customer's most recent orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_orders(
        &self,
        access_token: &SecretString,
        first: u32,
    ) -> Result<Vec<Order>, ShopifyError> {
        #[derive(Deserialize)]
        struct Response {
            customer: CustomerWithOrders,
        }

        #[derive(Deserialize)]
        struct CustomerWithOrders {
            orders: Connection<Order>,
        }

        const QUERY: &str = r"
            query getOrders($first: Int!) {
                customer {
                    orders(first: $first, sortKey: PROCESSED_AT, reverse: true) {
                        nodes {
                            id
                            name
                            processedAt
                            financialStatus
                            totalPrice {
                                amount
                                currencyCode
                            }
                        }
                    }
                }
            }
        ";

        let variables = serde_json::json!({ "first": first });
        let response: Response = self.query(access_token, QUERY, Some(variables)).await?;
        Ok(response.customer.orders.nodes)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Address Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the customer's saved addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn get_addresses(
        &self,
        access_token: &SecretString,
        first: u32,
    ) -> Result<Vec<Address>, ShopifyError> {
        #[derive(Deserialize)]
        struct Response {
            customer: CustomerWithAddresses,
        }

        #[derive(Deserialize)]
        struct CustomerWithAddresses {
            addresses: Connection<Address>,
        }

        const QUERY: &str = r"
            query getAddresses($first: Int!) {
                customer {
                    addresses(first: $first) {
                        nodes {
                            id
                            firstName
                            lastName
                            company
                            address1
                            address2
                            city
                            zoneCode
                            territoryCode
                            zip
                            phoneNumber
                        }
                    }
                }
            }
        ";

        let variables = serde_json::json!({ "first": first });
        let response: Response = self.query(access_token, QUERY, Some(variables)).await?;
        Ok(response.customer.addresses.nodes)
    }
}
