// crates/booker-client/src/lib.rs
// ============================================================================
// Module: Booker Client Library
// Description: HTTP client surface for the remote booking service.
// Purpose: Provide the dispatcher, credentials, and typed API wrappers.
// Dependencies: booker-contract, reqwest, serde, thiserror, url
// ============================================================================

//! ## Overview
//! This crate consumes the booking service's REST API. The dispatcher issues
//! exactly one round trip per call and returns whatever status the service
//! set; only network-level failures are errors. Classification of 4xx/5xx
//! responses belongs to the caller, so expected-failure scenarios can assert
//! raw status codes. Responses are untrusted input end to end.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod headers;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use api::BookingApi;
pub use api::BookingFilter;
pub use auth::AuthToken;
pub use auth::Credential;
pub use config::ClientConfig;
pub use config::ConfigError;
pub use dispatch::DispatchMethod;
pub use dispatch::DispatchOutcome;
pub use dispatch::Dispatcher;
pub use error::ClientError;
pub use headers::RequestHeaders;
