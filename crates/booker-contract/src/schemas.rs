// crates/booker-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON schema builders for booking service response shapes.
// Purpose: Provide the canonical validation schemas for the schema registry.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema payloads that describe each response
//! shape of the booking service. The schemas are the single source used by
//! the [`crate::registry::ContractRegistry`] for conformance checks.
//!
//! None of the schemas set `additionalProperties: false`: the service is
//! free to attach extra fields, and the contract only pins the fields the
//! suite depends on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Public Schema Entrypoints
// ============================================================================

/// Returns the JSON schema for a booking body as returned by
/// `GET /booking/{id}`, `PUT`, and `PATCH`.
///
/// `additionalneeds` is optional: the service drops it when a booking was
/// created without one.
#[must_use]
pub fn booking_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Booking",
        "description": "Booking record returned by read and update operations.",
        "type": "object",
        "required": [
            "firstname",
            "lastname",
            "totalprice",
            "depositpaid",
            "bookingdates"
        ],
        "properties": booking_properties()
    })
}

/// Returns the JSON schema for the creation envelope returned by
/// `POST /booking`.
#[must_use]
pub fn created_booking_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "CreatedBooking",
        "description": "Envelope pairing a new booking id with its record.",
        "type": "object",
        "required": ["bookingid", "booking"],
        "properties": {
            "bookingid": { "type": "number" },
            "booking": {
                "type": "object",
                "required": [
                    "firstname",
                    "lastname",
                    "totalprice",
                    "depositpaid",
                    "bookingdates"
                ],
                "properties": booking_properties()
            }
        }
    })
}

/// Returns the JSON schema for the id listing returned by `GET /booking`.
#[must_use]
pub fn booking_id_list_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "BookingIdList",
        "description": "Array of booking id references.",
        "type": "array",
        "items": {
            "type": "object",
            "required": ["bookingid"],
            "properties": {
                "bookingid": { "type": "integer" }
            }
        }
    })
}

/// Returns the JSON schema for a successful `POST /auth` response.
#[must_use]
pub fn auth_response_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "AuthResponse",
        "description": "Token envelope returned on successful authentication.",
        "type": "object",
        "required": ["token"],
        "properties": {
            "token": { "type": "string" }
        }
    })
}

// ============================================================================
// SECTION: Shared Sub-Schemas
// ============================================================================

/// Returns the property map shared by the booking body schemas.
fn booking_properties() -> Value {
    json!({
        "firstname": { "type": "string" },
        "lastname": { "type": "string" },
        "totalprice": { "type": "number" },
        "depositpaid": { "type": "boolean" },
        "bookingdates": {
            "type": "object",
            "required": ["checkin", "checkout"],
            "properties": {
                "checkin": date_schema(),
                "checkout": date_schema()
            }
        },
        "additionalneeds": { "type": "string" }
    })
}

/// Returns the sub-schema for an ISO `YYYY-MM-DD` date string.
fn date_schema() -> Value {
    json!({ "type": "string", "format": "date" })
}
