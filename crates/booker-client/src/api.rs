// crates/booker-client/src/api.rs
// ============================================================================
// Module: Booking API
// Description: Typed per-operation wrappers over the request dispatcher.
// Purpose: Bind each remote operation to its path, method, and headers.
// Dependencies: booker-contract, serde_json, url
// ============================================================================

//! ## Overview
//! One thin wrapper per remote operation. Every wrapper returns the raw
//! [`DispatchOutcome`] so callers, including expected-failure scenarios,
//! classify status codes themselves. Mutating operations take an explicit
//! [`Credential`]; reads carry none. The one typed exception is
//! [`BookingApi::authenticate`], which resolves the dual-shape `/auth`
//! response into a token or a rejection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use booker_contract::AuthRequest;
use booker_contract::AuthResponse;
use booker_contract::Booking;
use booker_contract::BookingPatch;
use serde_json::Value;
use url::form_urlencoded::Serializer;

use crate::auth::AuthToken;
use crate::auth::Credential;
use crate::dispatch::DispatchMethod;
use crate::dispatch::DispatchOutcome;
use crate::dispatch::Dispatcher;
use crate::error::ClientError;
use crate::headers::RequestHeaders;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Paths
// ============================================================================

/// Booking collection path.
const BOOKING_PATH: &str = "/booking";
/// Authentication path.
const AUTH_PATH: &str = "/auth";
/// Liveness probe path.
const PING_PATH: &str = "/ping";

// ============================================================================
// SECTION: Filters
// ============================================================================

/// Optional query filters for the booking id listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Filter by guest first name.
    pub firstname: Option<String>,
    /// Filter by guest last name.
    pub lastname: Option<String>,
    /// Filter by check-in date (`YYYY-MM-DD`).
    pub checkin: Option<String>,
    /// Filter by check-out date (`YYYY-MM-DD`).
    pub checkout: Option<String>,
}

impl BookingFilter {
    /// Renders the listing path with any set filters as query parameters.
    #[must_use]
    pub fn to_path(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in [
            ("firstname", &self.firstname),
            ("lastname", &self.lastname),
            ("checkin", &self.checkin),
            ("checkout", &self.checkout),
        ] {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        let query = serializer.finish();
        if query.is_empty() {
            BOOKING_PATH.to_string()
        } else {
            format!("{BOOKING_PATH}?{query}")
        }
    }
}

// ============================================================================
// SECTION: API
// ============================================================================

/// Typed API surface over one dispatcher.
#[derive(Debug, Clone)]
pub struct BookingApi {
    /// Underlying single-round-trip dispatcher.
    dispatcher: Dispatcher,
}

impl BookingApi {
    /// Wraps a dispatcher.
    #[must_use]
    pub const fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
        }
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// `GET /ping`: liveness probe, no body, no credential.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn ping(&self) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(DispatchMethod::Get, PING_PATH, None, &RequestHeaders::none())
            .await
    }

    /// `POST /auth`: exchanges credentials for a session token.
    ///
    /// The service answers invalid credentials with HTTP 200 and a `reason`
    /// body; that outcome is surfaced as [`ClientError::AuthRejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthRejected`] on credential rejection,
    /// [`ClientError::BodyDecode`] on an unrecognized body, and
    /// [`ClientError`] transport variants on network failure.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthToken, ClientError> {
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_value(&request).map_err(|err| ClientError::BodyDecode {
            message: err.to_string(),
        })?;
        let outcome = self
            .dispatcher
            .dispatch(DispatchMethod::Post, AUTH_PATH, Some(&body), &RequestHeaders::json())
            .await?;
        let response: AuthResponse = outcome.json_as()?;
        if let Some(token) = response.token {
            return Ok(AuthToken::new(token));
        }
        Err(ClientError::AuthRejected {
            reason: response.reason.unwrap_or_else(|| "no reason reported".to_string()),
        })
    }

    /// `GET /booking`: id listing, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn list_bookings(
        &self,
        filter: &BookingFilter,
    ) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(DispatchMethod::Get, &filter.to_path(), None, &RequestHeaders::json())
            .await
    }

    /// `POST /booking`: creates a booking, no credential required.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn create_booking(&self, booking: &Booking) -> Result<DispatchOutcome, ClientError> {
        let body = serde_json::to_value(booking).map_err(|err| ClientError::BodyDecode {
            message: err.to_string(),
        })?;
        self.create_booking_raw(&body).await
    }

    /// `POST /booking` with an arbitrary JSON body, for scenarios probing
    /// how the service treats partial or malformed payloads.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn create_booking_raw(&self, body: &Value) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(DispatchMethod::Post, BOOKING_PATH, Some(body), &RequestHeaders::json())
            .await
    }

    /// `GET /booking/{id}`: reads one booking, no credential required.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn get_booking(&self, id: u64) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(DispatchMethod::Get, &booking_path(id), None, &RequestHeaders::json())
            .await
    }

    /// `PUT /booking/{id}`: full replacement, credential required.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn update_booking(
        &self,
        id: u64,
        booking: &Booking,
        credential: &Credential,
    ) -> Result<DispatchOutcome, ClientError> {
        let body = serde_json::to_value(booking).map_err(|err| ClientError::BodyDecode {
            message: err.to_string(),
        })?;
        self.dispatcher
            .dispatch(
                DispatchMethod::Put,
                &booking_path(id),
                Some(&body),
                &credential.apply(RequestHeaders::json()),
            )
            .await
    }

    /// `PATCH /booking/{id}`: partial update, credential required. Only the
    /// fields set on the patch are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn patch_booking(
        &self,
        id: u64,
        patch: &BookingPatch,
        credential: &Credential,
    ) -> Result<DispatchOutcome, ClientError> {
        let body = serde_json::to_value(patch).map_err(|err| ClientError::BodyDecode {
            message: err.to_string(),
        })?;
        self.dispatcher
            .dispatch(
                DispatchMethod::Patch,
                &booking_path(id),
                Some(&body),
                &credential.apply(RequestHeaders::json()),
            )
            .await
    }

    /// `DELETE /booking/{id}`: removal, credential required.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete_booking(
        &self,
        id: u64,
        credential: &Credential,
    ) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(
                DispatchMethod::Delete,
                &booking_path(id),
                None,
                &credential.apply(RequestHeaders::json()),
            )
            .await
    }

    /// `DELETE /booking/{id}` without any credential, for scenarios asserting
    /// the authorization-failure boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure.
    pub async fn delete_booking_unauthenticated(
        &self,
        id: u64,
    ) -> Result<DispatchOutcome, ClientError> {
        self.dispatcher
            .dispatch(DispatchMethod::Delete, &booking_path(id), None, &RequestHeaders::json())
            .await
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Renders the path of one booking resource.
fn booking_path(id: u64) -> String {
    format!("{BOOKING_PATH}/{id}")
}
