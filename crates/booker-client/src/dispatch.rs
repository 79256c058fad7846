// crates/booker-client/src/dispatch.rs
// ============================================================================
// Module: Request Dispatcher
// Description: Single-round-trip HTTP dispatch against the booking service.
// Purpose: Capture status and parsed body without classifying HTTP outcomes.
// Dependencies: reqwest, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! The dispatcher performs exactly one network round trip per call. Any
//! received HTTP response returns normally with its status and body; only
//! transport failures (timeout, connection refused, DNS) are errors, so
//! expected-failure scenarios can assert 4xx/5xx codes directly. There is no
//! retry policy: the suite favors fast, deterministic failure over
//! resilience, because it is the remote contract being validated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::headers::RequestHeaders;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Method
// ============================================================================

/// HTTP methods the booking service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMethod {
    /// `GET`: reads, no body, no credential required.
    Get,
    /// `POST`: creation and authentication, JSON body.
    Post,
    /// `PUT`: full replacement, JSON body, credential required.
    Put,
    /// `PATCH`: partial update, JSON body, credential required.
    Patch,
    /// `DELETE`: removal, no body, credential required.
    Delete,
}

impl DispatchMethod {
    /// Returns the method name for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// True when the method carries a request body.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Maps to the underlying HTTP method.
    fn to_http(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Captured response: status plus parsed JSON body when one was present.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// HTTP status code the service set.
    pub status: u16,
    /// Parsed JSON body; `None` for empty or non-JSON bodies (the service
    /// answers plain `Created` text on ping and delete).
    pub body: Option<Value>,
}

impl DispatchOutcome {
    /// Deserializes the JSON body into a typed view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BodyDecode`] when the body is absent or does
    /// not match the requested shape.
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, ClientError> {
        let Some(body) = &self.body else {
            return Err(ClientError::BodyDecode {
                message: "response carried no JSON body".to_string(),
            });
        };
        serde_json::from_value(body.clone()).map_err(|err| ClientError::BodyDecode {
            message: err.to_string(),
        })
    }
}

// ============================================================================
// SECTION: Dispatcher
// ============================================================================

/// HTTP dispatcher bound to a base URL and a per-request wall-clock budget.
///
/// The base URL may carry a path prefix (a reverse-proxy mount such as
/// `https://host/api`); request paths are resolved underneath it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Base URL all paths resolve against, normalized to end in `/` so
    /// resolution appends rather than replaces its last segment.
    base_url: Url,
    /// Underlying HTTP client with the configured timeout.
    client: Client,
}

/// Ensures the base URL path ends in `/` so joining a relative path keeps
/// every segment the base carries.
fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

impl Dispatcher {
    /// Builds a dispatcher from client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: normalize_base(config.base_url.clone()),
            client,
        })
    }

    /// Builds a dispatcher with an explicit base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn with_base_url(base_url: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: normalize_base(base_url),
            client,
        })
    }

    /// Returns the base URL the dispatcher resolves paths against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request path under the base URL. The leading slash is
    /// dropped so an absolute-looking path still lands under the base's
    /// path prefix instead of replacing it.
    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path.trim_start_matches('/')).map_err(|err| {
            ClientError::InvalidUrl {
                path: path.to_string(),
                message: err.to_string(),
            }
        })
    }

    /// Issues one request and captures the response.
    ///
    /// The body is attached only for `POST`/`PUT`/`PATCH`; headers are merged
    /// onto this request alone and never mutate client defaults. A non-2xx
    /// status is not an error here; classification belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the path does not resolve and
    /// [`ClientError::Transport`] on a network-level failure.
    pub async fn dispatch(
        &self,
        method: DispatchMethod,
        path: &str,
        body: Option<&Value>,
        headers: &RequestHeaders,
    ) -> Result<DispatchOutcome, ClientError> {
        let url = self.resolve(path)?;
        let mut builder = self.client.request(method.to_http(), url);
        builder = headers.apply(builder);
        if method.carries_body()
            && let Some(payload) = body
        {
            builder = builder.json(payload);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).ok();
        tracing::debug!(
            method = method.as_str(),
            path,
            status,
            has_body = body.is_some(),
            "dispatched request"
        );
        Ok(DispatchOutcome {
            status,
            body,
        })
    }
}
