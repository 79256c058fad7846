// crates/booker-contract/src/lib.rs
// ============================================================================
// Module: Booker Contract Library
// Description: Response contracts for the remote booking service.
// Purpose: Provide canonical schemas, a compiled registry, and a verifier.
// Dependencies: jsonschema, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the structural contracts for the booking service under
//! test: the typed data model, the JSON Schema registry describing each
//! response shape, a compile-once validator over that registry, and a
//! verifier that pairs an expected HTTP status with an expected shape.
//! Response bodies are untrusted input; validation fails closed on missing
//! or mistyped fields and never panics on malformed values.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod registry;
pub mod schemas;
pub mod types;
pub mod verify;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use registry::ContractRegistry;
pub use registry::ContractViolation;
pub use registry::SchemaError;
pub use registry::SchemaKind;
pub use types::AuthRequest;
pub use types::AuthResponse;
pub use types::Booking;
pub use types::BookingDates;
pub use types::BookingIdEntry;
pub use types::BookingPatch;
pub use types::CreatedBooking;
pub use verify::Contract;
pub use verify::VerifyError;
