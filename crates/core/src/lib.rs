//! Flagpole Core - Shared types library.
//!
//! This crate provides common types used across all flagpole storefront components:
//! - `storefront` - Support chat matcher and Customer Account API service
//! - `cli` - Command-line tools for exercising the chat matcher and account API
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Chat intent records, Shopify global IDs, money, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
