//! Error types for the CM-7 audit trail.
//!
//! Fingerprinting is total and never fails. Everything that can fail lives at
//! the edges: loading a step catalog, validating it, rendering a report and
//! writing it out.

use thiserror::Error;

/// The unified error type for the CM-7 crates.
#[derive(Debug, Error)]
pub enum Cm7Error {
    /// A catalog step was rejected before any record was built.
    ///
    /// Raised for a status outside the closed enumeration, an empty operation
    /// id, or an operation id that appears twice in one catalog.
    #[error("validation error for operation '{operation_id}': {reason}")]
    Validation {
        operation_id: String,
        reason: String,
    },

    /// A catalog file could not be read or is not valid catalog TOML.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A report could not be rendered in the requested format.
    #[error("render error: {reason}")]
    RenderError { reason: String },

    /// The rendered report could not be written to its destination.
    #[error("output failed: {reason}")]
    OutputFailed { reason: String },
}

/// Convenience alias used throughout the CM-7 crates.
pub type Cm7Result<T> = Result<T, Cm7Error>;
