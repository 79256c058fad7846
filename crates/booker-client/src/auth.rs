// crates/booker-client/src/auth.rs
// ============================================================================
// Module: Credentials
// Description: Credential styles accepted by the booking service.
// Purpose: Render exactly one credential header onto a request.
// Dependencies: base64
// ============================================================================

//! ## Overview
//! The booking service accepts three credential styles on mutating
//! operations: a basic `Authorization` header, a bearer `Authorization`
//! header, or a session cookie obtained from `POST /auth`. A caller picks
//! one per request. Read operations carry no credential.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::headers::RequestHeaders;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Auth Token
// ============================================================================

/// Opaque session token from `POST /auth`.
///
/// # Invariants
/// - Valid for the duration of one test run; never refreshed mid-suite.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Token values stay out of logs and failure output.
        f.write_str("AuthToken(<redacted>)")
    }
}

// ============================================================================
// SECTION: Credential
// ============================================================================

/// One credential style for a mutating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// Account username.
        username: String,
        /// Account password.
        password: String,
    },
    /// `Authorization: Bearer <token>`.
    Bearer(AuthToken),
    /// `Cookie: token=<token>`.
    SessionCookie(AuthToken),
}

impl Credential {
    /// Renders this credential onto a header record, returning the merged
    /// result. Exactly one of `authorization` or `cookie` is set.
    #[must_use]
    pub fn apply(&self, headers: RequestHeaders) -> RequestHeaders {
        let overlay = match self {
            Self::Basic {
                username,
                password,
            } => RequestHeaders {
                authorization: Some(format!(
                    "Basic {}",
                    STANDARD.encode(format!("{username}:{password}"))
                )),
                ..RequestHeaders::none()
            },
            Self::Bearer(token) => RequestHeaders {
                authorization: Some(format!("Bearer {}", token.as_str())),
                ..RequestHeaders::none()
            },
            Self::SessionCookie(token) => RequestHeaders {
                cookie: Some(format!("token={}", token.as_str())),
                ..RequestHeaders::none()
            },
        };
        headers.merged(&overlay)
    }
}
