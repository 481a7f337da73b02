//! Customer access token extraction.
//!
//! Account endpoints act on behalf of a customer who signed in through
//! Shopify. The widget forwards the customer's Customer Account API access
//! token as `Authorization: Bearer <token>`; the storefront passes it through
//! without storing it.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use secrecy::SecretString;

use crate::error::AppError;

/// Extractor for the caller's Customer Account API access token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     State(state): State<AppState>,
///     CustomerToken(token): CustomerToken,
/// ) -> Result<Json<Customer>> {
///     Ok(Json(state.customer().get_customer(&token).await?))
/// }
/// ```
pub struct CustomerToken(pub SecretString);

impl<S> FromRequestParts<S> for CustomerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_token(&parts.headers)
            .map(|token| Self(SecretString::from(token)))
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))
    }
}

/// The token from an `Authorization: Bearer` header, if present and non-empty.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
