//! Operation log builder.
//!
//! Build algorithm:
//!
//! 1. Validate the catalog up front. Any bad step aborts before a single
//!    record exists, so a partial log is never returned.
//! 2. Draft every record in catalog order, asking the clock once per record.
//! 3. Fingerprint each draft into its finalized `OperationRecord`.
//! 4. Wrap the records, order untouched, in an `OperationLog`.

use std::collections::HashSet;

use tracing::{info, warn};

use cm7_contracts::{
    Cm7Error, Cm7Result, OperationDraft, OperationLog, OperationRecord, OperationStatus,
};

use crate::{
    catalog::{StepCatalog, BUILTIN_STEPS},
    clock::{Clock, SystemClock},
    fingerprint::finalize,
};

/// A validated catalog step.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    operation_id: String,
    description: String,
    status: OperationStatus,
}

/// Builds fingerprinted operation logs from a validated step list.
///
/// The builder holds no mutable state; `build` may be called any number of
/// times, from any number of threads, and each call yields an independent log.
///
/// ```rust,ignore
/// use cm7_trace::{OperationLogBuilder, StepCatalog};
///
/// let catalog = StepCatalog::from_file(Path::new("catalogs/cm7.toml"))?;
/// let log = OperationLogBuilder::from_catalog(&catalog)?.build();
/// ```
#[derive(Debug, Clone)]
pub struct OperationLogBuilder {
    steps: Vec<Step>,
}

impl OperationLogBuilder {
    /// A builder over the built-in CM-7 narrative. Cannot fail.
    pub fn builtin() -> Self {
        let steps = BUILTIN_STEPS
            .iter()
            .map(|step| Step {
                operation_id: step.operation_id.to_string(),
                description: step.description.to_string(),
                status: step.status,
            })
            .collect();
        Self { steps }
    }

    /// Validate `catalog` and build a builder over its steps.
    ///
    /// Returns `Cm7Error::Validation` for the first step whose status is
    /// outside the closed enumeration, whose operation id is empty, or whose
    /// operation id repeats an earlier step's.
    pub fn from_catalog(catalog: &StepCatalog) -> Cm7Result<Self> {
        let mut seen = HashSet::new();
        let mut steps = Vec::with_capacity(catalog.steps.len());

        for def in &catalog.steps {
            if def.operation_id.trim().is_empty() {
                return Err(reject(&def.operation_id, "operation id must not be empty"));
            }

            if !seen.insert(def.operation_id.as_str()) {
                return Err(reject(
                    &def.operation_id,
                    "operation id is already used by an earlier step",
                ));
            }

            let status = def.status.parse::<OperationStatus>().map_err(|_| {
                reject(
                    &def.operation_id,
                    &format!(
                        "status '{}' is not one of completed, active, in_progress",
                        def.status
                    ),
                )
            })?;

            steps.push(Step {
                operation_id: def.operation_id.clone(),
                description: def.description.clone(),
                status,
            });
        }

        Ok(Self { steps })
    }

    /// Number of records each build produces.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Build a log stamped with wall-clock time.
    pub fn build(&self) -> OperationLog {
        self.build_with(&SystemClock)
    }

    /// Build a log, taking every timestamp from `clock`.
    pub fn build_with(&self, clock: &dyn Clock) -> OperationLog {
        let drafts: Vec<OperationDraft> = self
            .steps
            .iter()
            .map(|step| OperationDraft {
                operation_id: step.operation_id.clone(),
                timestamp: clock.now(),
                description: step.description.clone(),
                status: step.status,
            })
            .collect();

        let records: Vec<OperationRecord> = drafts.into_iter().map(finalize).collect();

        info!(record_count = records.len(), "operation log built");

        OperationLog::new(records, clock.now())
    }
}

fn reject(operation_id: &str, reason: &str) -> Cm7Error {
    warn!(operation_id = %operation_id, reason = %reason, "catalog step rejected");
    Cm7Error::Validation {
        operation_id: operation_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Build the built-in CM-7 log with wall-clock timestamps.
pub fn build_operation_log() -> OperationLog {
    OperationLogBuilder::builtin().build()
}
