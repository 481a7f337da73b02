//! Core types for the flagpole storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod intent;
pub mod price;
pub mod status;

pub use id::*;
pub use intent::{Intent, IntentLink, IntentResponse, NEUTRAL_PRIORITY};
pub use price::{CurrencyCode, Money};
pub use status::FinancialStatus;
