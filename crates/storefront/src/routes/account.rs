//! Account route handlers.
//!
//! Thin pass-through to the Customer Account API. These routes require the
//! customer's access token; see [`CustomerToken`].

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::CustomerToken;
use crate::shopify::customer::{Address, Customer, Order};
use crate::state::AppState;

/// Page size when `first` is not given.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Pagination query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub first: Option<u32>,
}

impl PageParams {
    /// Requested page size, clamped to `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.first
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

/// Customer profile.
#[instrument(skip_all)]
pub async fn profile(
    State(state): State<AppState>,
    CustomerToken(token): CustomerToken,
) -> Result<Json<Customer>> {
    let customer = state.customer().get_customer(&token).await?;
    Ok(Json(customer))
}

/// Recent orders, newest first.
#[instrument(skip_all, fields(first = params.page_size()))]
pub async fn orders(
    State(state): State<AppState>,
    CustomerToken(token): CustomerToken,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Order>>> {
    let orders = state
        .customer()
        .get_orders(&token, params.page_size())
        .await?;
    Ok(Json(orders))
}

/// Saved addresses.
#[instrument(skip_all, fields(first = params.page_size()))]
pub async fn addresses(
    State(state): State<AppState>,
    CustomerToken(token): CustomerToken,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Address>>> {
    let addresses = state
        .customer()
        .get_addresses(&token, params.page_size())
        .await?;
    Ok(Json(addresses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size() {
        assert_eq!(PageParams::default().page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(PageParams { first: Some(0) }.page_size(), 1);
        assert_eq!(PageParams { first: Some(25) }.page_size(), 25);
        assert_eq!(PageParams { first: Some(500) }.page_size(), MAX_PAGE_SIZE);
    }
}
