//! Traceability fingerprints: computing and checking them.
//!
//! The fold itself is [`Fingerprint::compute`]; this module adds the
//! finalize step the builder uses and recomputation checks over records and
//! whole logs.

use cm7_contracts::{Fingerprint, OperationDraft, OperationLog, OperationRecord};
use tracing::{debug, warn};

/// Compute the fingerprint of an operation's identifying fields.
///
/// Total over all inputs: empty strings fold to `"0"`, and an accumulator
/// that lands on `i32::MIN` yields `"80000000"`.
pub fn fingerprint(operation_id: &str, timestamp: &str, description: &str) -> Fingerprint {
    Fingerprint::compute(operation_id, timestamp, description)
}

/// Fingerprint a draft and turn it into a finalized record.
pub fn finalize(draft: OperationDraft) -> OperationRecord {
    let record = draft.finalize();
    debug!(
        operation_id = %record.operation_id(),
        fingerprint = %record.fingerprint(),
        "operation fingerprinted"
    );
    record
}

/// Return true if the record's stored fingerprint matches its recomputed value.
pub fn fingerprint_matches(record: &OperationRecord) -> bool {
    let recomputed = fingerprint(
        record.operation_id(),
        &record.timestamp_iso(),
        record.description(),
    );
    &recomputed == record.fingerprint()
}

/// Recompute every fingerprint in the log.
///
/// Returns `false` at the first record whose stored fingerprint disagrees.
/// An empty log is valid.
pub fn verify_log(log: &OperationLog) -> bool {
    for record in log {
        if !fingerprint_matches(record) {
            warn!(
                operation_id = %record.operation_id(),
                stored = %record.fingerprint(),
                "fingerprint mismatch"
            );
            return false;
        }
    }
    true
}
