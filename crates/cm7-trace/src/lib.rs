//! # cm7-trace
//!
//! Traceability fingerprints and the operation log builder for the CM-7
//! audit trail.
//!
//! ## Overview
//!
//! The builder walks a fixed step catalog, stamps each step with the current
//! instant, and attaches a short deterministic fingerprint of
//! `(operation_id, timestamp, description)`. The result is an ordered
//! `OperationLog` ready for a renderer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cm7_trace::{build_operation_log, verify_log};
//!
//! let log = build_operation_log();
//! assert_eq!(log.len(), 5);
//! assert!(verify_log(&log));
//! ```

pub mod builder;
pub mod catalog;
pub mod clock;
pub mod fingerprint;

pub use builder::{build_operation_log, OperationLogBuilder};
pub use catalog::{BuiltinStep, StepCatalog, StepDefinition, BUILTIN_STEPS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use fingerprint::{finalize, fingerprint, fingerprint_matches, verify_log};

// ── Tests ─────────────────────────────────────────────────────────────────────
