// crates/booker-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for the booking service client.
// Purpose: Keep transport failures distinct from HTTP-level outcomes.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Transport failures (timeout, connection refused, DNS) are errors; any
//! received HTTP response is a normal outcome regardless of status. The only
//! response-content errors here are authentication rejection and body decode
//! failures, which occur when a caller asked for a typed view of a body.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Booking client errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `Transport` is never produced for a received HTTP response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure before a response was received.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A request path did not resolve against the base URL.
    #[error("invalid request url for path {path}: {message}")]
    InvalidUrl {
        /// Path that failed to resolve.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The service rejected the submitted credentials.
    #[error("authentication rejected: {reason}")]
    AuthRejected {
        /// Reason reported by the service.
        reason: String,
    },
    /// A response body could not be decoded into the requested type.
    #[error("body decode failure: {message}")]
    BodyDecode {
        /// Decoder diagnostic.
        message: String,
    },
}
