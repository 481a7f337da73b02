//! Shopify Customer Account API client.
//!
//! # Architecture
//!
//! - Plain `serde` request/response types over `reqwest`
//! - Shopify is source of truth - NO local sync, direct API calls
//! - Every GraphQL call goes through a [`RetryPolicy`]: bounded attempts,
//!   per-attempt timeout, doubling backoff
//!
//! # Example
//!
//! ```rust,ignore
//! use flagpole_storefront::shopify::CustomerClient;
//!
//! let client = CustomerClient::new(&config.shopify);
//! let orders = client.get_orders(&access_token, 10).await?;
//! ```

pub mod customer;
pub mod retry;

pub use customer::CustomerClient;
pub use retry::RetryPolicy;

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with Shopify APIs.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An attempt exceeded the per-attempt deadline.
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Shopify answered with a non-success HTTP status.
    #[error("Customer API request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried neither data nor errors.
    #[error("No data in response")]
    MissingData,
}

impl ShopifyError {
    /// Whether this error came from a request deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Whether Shopify rejected the customer access token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == reqwest::StatusCode::UNAUTHORIZED)
    }
}

/// A GraphQL error returned by the Shopify API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                ..GraphQLError::default()
            },
            GraphQLError {
                message: "Access denied".to_string(),
                ..GraphQLError::default()
            },
        ];
        let err = ShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Access denied"
        );
    }

    #[test]
    fn test_graphql_error_path_and_location() {
        let errors: Vec<GraphQLError> = serde_json::from_str(
            r#"[{"locations":[{"line":5,"column":10}],"path":["customer","orders",0]}]"#,
        )
        .expect("deserialize");
        let err = ShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: path: customer.orders.0 at line 5:10"
        );
    }

    #[test]
    fn test_graphql_error_no_details() {
        let err = ShopifyError::GraphQL(vec![GraphQLError::default()]);
        assert_eq!(err.to_string(), "GraphQL errors: [error 1]: (no details)");

        let err = ShopifyError::GraphQL(vec![]);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: (no error details provided)"
        );
    }

    #[test]
    fn test_timeout_classification() {
        let err = ShopifyError::Timeout(Duration::from_secs(10));
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Request timed out after 10000ms");

        assert!(!ShopifyError::MissingData.is_timeout());
    }

    #[test]
    fn test_unauthorized_classification() {
        let err = ShopifyError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_timeout());

        let err = ShopifyError::Status {
            status: reqwest::StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
        assert!(!ShopifyError::MissingData.is_unauthorized());
    }

    #[test]
    fn test_status_error_display() {
        let err = ShopifyError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            body: "try later".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Customer API request failed (503 Service Unavailable): try later"
        );
    }
}
