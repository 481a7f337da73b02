//! Flagpole Storefront library.
//!
//! This crate provides the storefront support services as a library,
//! allowing them to be tested and reused by the CLI:
//!
//! - [`chat`] - Flaggy, the scripted support chat (intent matching)
//! - [`shopify`] - Retrying Customer Account API client
//! - [`routes`] - JSON HTTP API over both

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chat;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shopify;
pub mod state;
