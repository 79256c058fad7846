// crates/booker-contract/src/verify.rs
// ============================================================================
// Module: Contract Verifier
// Description: Pairs an expected HTTP status with an expected response shape.
// Purpose: Classify captured responses into the suite's failure taxonomy.
// Dependencies: booker-contract registry, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`Contract`] is the expected status code and, optionally, the schema a
//! response body must satisfy. Verification checks the status first: a wrong
//! status with a conforming body is a [`VerifyError::UnexpectedStatus`],
//! never a shape failure. Transport-level failures are out of scope here;
//! they surface from the dispatcher before a contract is ever consulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::registry::ContractRegistry;
use crate::registry::ContractViolation;
use crate::registry::SchemaKind;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Errors
// ============================================================================

/// Verification failures, ordered by the check that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The received status did not match the contract.
    #[error("unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Status the contract declared.
        expected: u16,
        /// Status the service returned.
        actual: u16,
    },
    /// The contract declared a schema but the response carried no JSON body.
    #[error("missing body: expected a {kind} payload")]
    MissingBody {
        /// Schema the body was expected to satisfy.
        kind: SchemaKind,
    },
    /// The response body failed schema validation.
    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
}

// ============================================================================
// SECTION: Contract
// ============================================================================

/// Expected status and shape for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    /// HTTP status the operation must return.
    pub expected_status: u16,
    /// Schema the body must satisfy, when the operation returns JSON.
    pub schema: Option<SchemaKind>,
}

impl Contract {
    /// Contract for an operation returning a status and a JSON body.
    #[must_use]
    pub const fn new(expected_status: u16, schema: SchemaKind) -> Self {
        Self {
            expected_status,
            schema: Some(schema),
        }
    }

    /// Contract for an operation where only the status is pinned.
    #[must_use]
    pub const fn status_only(expected_status: u16) -> Self {
        Self {
            expected_status,
            schema: None,
        }
    }

    /// Verifies a captured response against this contract.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::UnexpectedStatus`] on a status mismatch,
    /// [`VerifyError::MissingBody`] when a declared schema has no body to
    /// check, and [`VerifyError::ContractViolation`] when the body does not
    /// conform.
    pub fn verify(
        &self,
        registry: &ContractRegistry,
        status: u16,
        body: Option<&Value>,
    ) -> Result<(), VerifyError> {
        if status != self.expected_status {
            return Err(VerifyError::UnexpectedStatus {
                expected: self.expected_status,
                actual: status,
            });
        }
        let Some(kind) = self.schema else {
            return Ok(());
        };
        let Some(body) = body else {
            return Err(VerifyError::MissingBody {
                kind,
            });
        };
        registry.validate(kind, body)?;
        Ok(())
    }
}
