//! HTTP middleware and extractors for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, one transaction per request)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS (chat widget is embedded on the storefront origin)

pub mod auth;

pub use auth::CustomerToken;
