//! # Basic Token Client Library
//!
//! Probes a remote HTTP API and fetches an access token with HTTP Basic
//! credentials, caching the token in memory until it expires.
//!
//! Modules:
//! - `config` - YAML configuration, defaults and validation
//! - `cache` - single-slot token cache
//! - `client` - `TokenClient`: probe and token fetch
//! - `parser` - token endpoint response classification
//! - `error` - tagged token errors

pub mod config;
pub mod cache;
pub mod client;
pub mod error;
pub mod parser;
pub mod observability;
pub mod helpers;
pub mod utils;

#[cfg(test)]
mod tests;


pub use crate::client::TokenClient;
pub use crate::config::endpoint::{EndpointConfig, ServiceConfig};
pub use crate::error::{TokenAcquisitionError, TokenError};
