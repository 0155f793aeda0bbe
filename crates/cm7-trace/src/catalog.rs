//! Step catalog: the fixed narrative a log is built from.
//!
//! The built-in catalog is typed and cannot be invalid. An external catalog
//! is deserialized from TOML with `status` kept as a raw string, so a bad
//! value surfaces as `Cm7Error::Validation` from the builder rather than as a
//! parse error.
//!
//! Example:
//! ```toml
//! [[steps]]
//! operation_id = "OP-001"
//! description = "Request Analysis and Decomposition Engine (RADE) activated"
//! status = "completed"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use cm7_contracts::{Cm7Error, Cm7Result, OperationStatus};

/// One step of the built-in narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinStep {
    pub operation_id: &'static str,
    pub description: &'static str,
    pub status: OperationStatus,
}

/// The CM-7 operational sequence: analysis, decomposition, enrichment,
/// monitoring, presentation.
pub const BUILTIN_STEPS: [BuiltinStep; 5] = [
    BuiltinStep {
        operation_id: "OP-001",
        description: "Request Analysis and Decomposition Engine (RADE) activated",
        status: OperationStatus::Completed,
    },
    BuiltinStep {
        operation_id: "OP-002",
        description: "Task decomposed into minimal, self-contained operations",
        status: OperationStatus::Completed,
    },
    BuiltinStep {
        operation_id: "OP-003",
        description: "Enhanced user query with relevant, factually verified information",
        status: OperationStatus::Completed,
    },
    BuiltinStep {
        operation_id: "OP-004",
        description: "Token Optimization Module (TOM) monitoring active",
        status: OperationStatus::Active,
    },
    BuiltinStep {
        operation_id: "OP-005",
        description: "Displaying CM-7 operational demonstration",
        status: OperationStatus::InProgress,
    },
];

/// A single step as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub operation_id: String,
    pub description: String,
    /// Must be one of `completed`, `active`, `in_progress`.
    pub status: String,
}

/// The top-level structure deserialized from a catalog file.
///
/// Steps are built in the order they appear in the `steps` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCatalog {
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Parse `s` as catalog TOML.
    ///
    /// Returns `Cm7Error::ConfigError` if the TOML is malformed or does not
    /// match the `StepCatalog` schema. Statuses are not checked here.
    pub fn from_toml_str(s: &str) -> Cm7Result<Self> {
        let catalog: StepCatalog = toml::from_str(s).map_err(|e| Cm7Error::ConfigError {
            reason: format!("failed to parse step catalog TOML: {}", e),
        })?;
        Ok(catalog)
    }

    /// Read the file at `path` and parse it as catalog TOML.
    pub fn from_file(path: &Path) -> Cm7Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Cm7Error::ConfigError {
            reason: format!("failed to read step catalog '{}': {}", path.display(), e),
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            step_count = catalog.steps.len(),
            "step catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in narrative expressed as an untyped catalog.
    pub fn builtin() -> Self {
        let steps = BUILTIN_STEPS
            .iter()
            .map(|step| StepDefinition {
                operation_id: step.operation_id.to_string(),
                description: step.description.to_string(),
                status: step.status.as_str().to_string(),
            })
            .collect();
        Self { steps }
    }
}
