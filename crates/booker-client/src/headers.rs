// crates/booker-client/src/headers.rs
// ============================================================================
// Module: Request Headers
// Description: Explicit per-request header record with named optional fields.
// Purpose: Replace ad-hoc header-map merging with a typed configuration record.
// Dependencies: reqwest
// ============================================================================

//! ## Overview
//! Per-request headers are an explicit record of named optional fields
//! rather than a free-form map. Merging overlays one record onto another
//! without mutating any client-wide defaults, so a scenario can attach a
//! credential without leaking it into later requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::COOKIE;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Header Record
// ============================================================================

/// JSON media type used for both `Accept` and `Content-Type`.
const APPLICATION_JSON: &str = "application/json";

/// Named optional header fields for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    /// `Accept` header value.
    pub accept: Option<String>,
    /// `Content-Type` header value.
    pub content_type: Option<String>,
    /// `Cookie` header value.
    pub cookie: Option<String>,
    /// `Authorization` header value.
    pub authorization: Option<String>,
}

impl RequestHeaders {
    /// Returns the record with no headers set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns the common JSON request headers.
    #[must_use]
    pub fn json() -> Self {
        Self {
            accept: Some(APPLICATION_JSON.to_string()),
            content_type: Some(APPLICATION_JSON.to_string()),
            cookie: None,
            authorization: None,
        }
    }

    /// Overlays another record onto this one. Fields set on the overlay win;
    /// unset overlay fields keep the base value.
    #[must_use]
    pub fn merged(self, overlay: &Self) -> Self {
        Self {
            accept: overlay.accept.clone().or(self.accept),
            content_type: overlay.content_type.clone().or(self.content_type),
            cookie: overlay.cookie.clone().or(self.cookie),
            authorization: overlay.authorization.clone().or(self.authorization),
        }
    }

    /// Applies the set fields to a request builder.
    #[must_use]
    pub(crate) fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(accept) = &self.accept {
            builder = builder.header(ACCEPT, accept);
        }
        if let Some(content_type) = &self.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(COOKIE, cookie);
        }
        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        builder
    }
}
