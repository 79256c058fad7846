// system-tests/src/lib.rs
// ============================================================================
// Module: Booker Verify System Tests Library
// Description: Shared configuration for booking-service system tests.
// Purpose: Provide common utilities for the live test suites in `tests/`.
// Dependencies: std, booker-client
// ============================================================================

//! ## Overview
//! This crate hosts the typed environment configuration used by the live
//! booking-service suites in `system-tests/tests`. The remote service is an
//! uncontrolled third party; every response the suites consume is untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
