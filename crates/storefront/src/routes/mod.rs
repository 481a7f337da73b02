//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//!
//! # Flaggy chat
//! POST /api/chat                  - Reply to one chat message
//! POST /api/chat/suggestions      - Ranked candidate topics for a message
//!
//! # Account (Authorization: Bearer <customer access token>)
//! GET  /api/account               - Customer profile
//! GET  /api/account/orders        - Recent orders (?first=N)
//! GET  /api/account/addresses     - Saved addresses (?first=N)
//! ```

pub mod account;
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router with its state applied.
///
/// Sentry layers are added by the binary, outermost, after this.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
async fn health() -> &'static str {
    "ok"
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(chat::reply))
        .route("/suggestions", post(chat::suggestions))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::profile))
        .route("/orders", get(account::orders))
        .route("/addresses", get(account::addresses))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/chat", chat_routes())
        .nest("/api/account", account_routes())
}
