// crates/booker-contract/src/registry.rs
// ============================================================================
// Module: Schema Registry
// Description: Compile-once registry of booking service response schemas.
// Purpose: Validate untrusted response bodies and report violation paths.
// Dependencies: jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The registry compiles every schema in [`crate::schemas`] exactly once and
//! answers validation queries against the compiled set. Validation is a pure
//! function of the schema and the instance: a `null` or wrong-top-level-type
//! instance fails validation with diagnostics, never a panic, and repeated
//! validation of the same instance yields the same outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::schemas;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Schema Kinds
// ============================================================================

/// Names of the response shapes held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaKind {
    /// Booking body returned by reads and updates.
    Booking,
    /// Creation envelope returned by `POST /booking`.
    CreatedBooking,
    /// Id listing returned by `GET /booking`.
    BookingIdList,
    /// Token envelope returned by a successful `POST /auth`.
    AuthResponse,
}

impl SchemaKind {
    /// All registry entries, in registry order.
    pub const ALL: [Self; 4] =
        [Self::Booking, Self::CreatedBooking, Self::BookingIdList, Self::AuthResponse];

    /// Returns the stable name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::CreatedBooking => "created_booking",
            Self::BookingIdList => "booking_id_list",
            Self::AuthResponse => "auth_response",
        }
    }

    /// Returns the schema payload for this kind.
    #[must_use]
    pub fn schema(self) -> Value {
        match self {
            Self::Booking => schemas::booking_schema(),
            Self::CreatedBooking => schemas::created_booking_schema(),
            Self::BookingIdList => schemas::booking_id_list_schema(),
            Self::AuthResponse => schemas::auth_response_schema(),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry construction errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A schema payload failed to compile.
    #[error("schema {kind} failed to compile: {message}")]
    Compile {
        /// Registry entry that failed.
        kind: SchemaKind,
        /// Compiler diagnostic.
        message: String,
    },
}

/// A response body failed schema validation.
///
/// # Invariants
/// - `violations` is non-empty and ordered as reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} contract violated: {}", violations.join("; "))]
pub struct ContractViolation {
    /// Registry entry the instance was checked against.
    pub kind: SchemaKind,
    /// Violating instance paths with validator messages.
    pub violations: Vec<String>,
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Compiled schema registry for the booking service contract.
pub struct ContractRegistry {
    /// Compiled validators keyed by schema kind.
    validators: BTreeMap<SchemaKind, Validator>,
}

impl ContractRegistry {
    /// Compiles every registered schema under draft 2020-12 with format
    /// validation enabled.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] when a schema payload is not a valid
    /// draft 2020-12 schema.
    pub fn new() -> Result<Self, SchemaError> {
        let mut validators = BTreeMap::new();
        for kind in SchemaKind::ALL {
            let validator = compile_schema(kind)?;
            validators.insert(kind, validator);
        }
        Ok(Self {
            validators,
        })
    }

    /// Validates an instance against the named schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation`] with every violating instance path when
    /// the instance does not conform.
    pub fn validate(&self, kind: SchemaKind, instance: &Value) -> Result<(), ContractViolation> {
        let Some(validator) = self.validators.get(&kind) else {
            // Unreachable with the fixed kind set; fail closed regardless.
            return Err(ContractViolation {
                kind,
                violations: vec!["schema not registered".to_string()],
            });
        };
        let violations: Vec<String> = validator
            .iter_errors(instance)
            .map(|err| format!("{}: {err}", err.instance_path()))
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractViolation {
                kind,
                violations,
            })
        }
    }

    /// Returns true when the instance conforms to the named schema.
    #[must_use]
    pub fn is_valid(&self, kind: SchemaKind, instance: &Value) -> bool {
        self.validate(kind, instance).is_ok()
    }
}

impl fmt::Debug for ContractRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractRegistry")
            .field("kinds", &self.validators.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compiles the schema payload for a registry entry.
fn compile_schema(kind: SchemaKind) -> Result<Validator, SchemaError> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .should_validate_formats(true)
        .build(&kind.schema())
        .map_err(|err| SchemaError::Compile {
            kind,
            message: err.to_string(),
        })
}
