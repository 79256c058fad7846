// crates/booker-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Typed data model for booking service requests and responses.
// Purpose: Provide canonical shapes for bookings, creation envelopes, and auth.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the typed shapes exchanged with the booking service.
//! The shapes mirror the JSON Schema registry in [`crate::schemas`]; the
//! schemas remain the authority for conformance checks because the remote
//! service may attach fields the client does not model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Booking Model
// ============================================================================

/// Check-in and check-out dates for a booking.
///
/// # Invariants
/// - Both dates are ISO `YYYY-MM-DD` strings.
/// - No ordering constraint is enforced client-side; the service owns that
///   decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    /// Check-in date.
    pub checkin: String,
    /// Check-out date.
    pub checkout: String,
}

/// Full booking record as created and read back over the API.
///
/// # Invariants
/// - All six fields are populated for a full creation; the service decides
///   which subset it accepts on `POST`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Guest first name.
    pub firstname: String,
    /// Guest last name.
    pub lastname: String,
    /// Total price for the stay. The service reports a JSON number, which may
    /// carry a fractional part, so this is not narrowed to an integer.
    pub totalprice: f64,
    /// Whether the deposit has been paid.
    pub depositpaid: bool,
    /// Stay dates.
    pub bookingdates: BookingDates,
    /// Free-form additional needs.
    pub additionalneeds: String,
}

/// Partial booking update for `PATCH` requests.
///
/// Unset fields are omitted from the serialized body so the service leaves
/// them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingPatch {
    /// Replacement first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    /// Replacement last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    /// Replacement total price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<f64>,
    /// Replacement deposit flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    /// Replacement stay dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    /// Replacement additional needs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

// ============================================================================
// SECTION: Response Envelopes
// ============================================================================

/// One element of the booking id listing returned by `GET /booking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingIdEntry {
    /// Identifier of an existing booking.
    pub bookingid: u64,
}

/// Creation envelope returned by `POST /booking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBooking {
    /// Identifier assigned by the service.
    pub bookingid: u64,
    /// Echo of the created booking.
    pub booking: Booking,
}

// ============================================================================
// SECTION: Authentication
// ============================================================================

/// Credentials submitted to `POST /auth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Response body of `POST /auth`.
///
/// The service answers invalid credentials with HTTP 200 and a `reason`
/// field instead of a token, so both outcomes share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Session token on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Rejection reason on credential failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
