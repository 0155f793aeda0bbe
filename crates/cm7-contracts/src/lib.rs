//! # cm7-contracts
//!
//! Shared types and errors for the CM-7 operational audit trail.
//!
//! All crates in the workspace import from here. Apart from the fingerprint
//! fold, which lives next to the record it seals, this crate holds only data
//! definitions and error types.

pub mod error;
pub mod fingerprint;
pub mod log;
pub mod operation;

pub use error::{Cm7Error, Cm7Result};
pub use fingerprint::Fingerprint;
pub use log::OperationLog;
pub use operation::{format_instant, OperationDraft, OperationRecord, OperationStatus};

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn draft(id: &str) -> OperationDraft {
        OperationDraft {
            operation_id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            description: "Test".to_string(),
            status: OperationStatus::Active,
        }
    }

    // ── OperationStatus ──────────────────────────────────────────────────────

    #[test]
    fn status_wire_names() {
        assert_eq!(OperationStatus::Completed.as_str(), "completed");
        assert_eq!(OperationStatus::Active.as_str(), "active");
        assert_eq!(OperationStatus::InProgress.as_str(), "in_progress");
        assert_eq!(OperationStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn status_parses_every_wire_name() {
        for status in OperationStatus::ALL {
            let parsed: OperationStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_rejects_unknown_and_miscased_names() {
        for raw in ["failed", "COMPLETED", "in-progress", ""] {
            let err = raw.parse::<OperationStatus>().unwrap_err();
            assert!(
                matches!(err, Cm7Error::Validation { .. }),
                "expected Validation for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&OperationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    // ── Records ──────────────────────────────────────────────────────────────

    #[test]
    fn timestamp_iso_uses_millisecond_zulu_form() {
        assert_eq!(draft("OP-001").timestamp_iso(), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn finalize_keeps_every_core_field() {
        let d = draft("OP-007");
        let record = d.clone().finalize();

        assert_eq!(record.operation_id(), d.operation_id);
        assert_eq!(record.timestamp(), d.timestamp);
        assert_eq!(record.description(), d.description);
        assert_eq!(record.status(), d.status);
    }

    /// The fingerprint is computed from the draft's fields, never supplied.
    #[test]
    fn finalize_computes_fingerprint() {
        let record = draft("OP-001").finalize();
        assert_eq!(record.fingerprint().as_str(), "3BD8D57B");
        assert_eq!(
            record.fingerprint(),
            &Fingerprint::compute("OP-001", "2024-01-01T00:00:00.000Z", "Test")
        );
    }

    /// Sub-millisecond precision never reaches a finalized record.
    #[test]
    fn finalize_truncates_to_millis() {
        let mut d = draft("OP-001");
        d.timestamp = d.timestamp + Duration::nanoseconds(1_234_567);
        let record = d.finalize();

        assert_eq!(record.timestamp_iso(), "2024-01-01T00:00:00.001Z");
        assert_eq!(record.timestamp().timestamp_subsec_nanos(), 1_000_000);
    }

    #[test]
    fn record_json_carries_fingerprinted_timestamp_form() {
        let record = draft("OP-001").finalize();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["timestamp"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["fingerprint"], "3BD8D57B");
        assert_eq!(json["status"], "active");

        let decoded: OperationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }

    /// Decoding drops sub-millisecond digits, so decode and re-encode agree.
    #[test]
    fn record_json_decode_truncates_to_millis() {
        let mut json = serde_json::to_value(draft("OP-001").finalize()).unwrap();
        json["timestamp"] = "2024-01-01T00:00:00.123456Z".into();

        let decoded: OperationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.timestamp_iso(), "2024-01-01T00:00:00.123Z");

        let reencoded = serde_json::to_value(&decoded).unwrap();
        let again: OperationRecord = serde_json::from_value(reencoded).unwrap();
        assert_eq!(again, decoded);
        assert_eq!(decoded.timestamp().timestamp_subsec_nanos(), 123_000_000);
    }

    // ── OperationLog ─────────────────────────────────────────────────────────

    #[test]
    fn log_preserves_insertion_order() {
        let ids = ["OP-003", "OP-001", "OP-002"];
        let records = ids
            .iter()
            .map(|id| draft(id).finalize())
            .collect();
        let log = OperationLog::new(records, Utc::now());

        let seen: Vec<&str> = log.iter().map(|r| r.operation_id()).collect();
        assert_eq!(seen, ids);
        assert_eq!(log.len(), 3);
        assert!(!log.is_empty());
    }

    // ── Cm7Error display messages ────────────────────────────────────────────

    #[test]
    fn error_validation_display() {
        let err = Cm7Error::Validation {
            operation_id: "OP-009".to_string(),
            reason: "status 'failed' is not allowed".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("validation error"));
        assert!(msg.contains("OP-009"));
        assert!(msg.contains("failed"));
    }

    #[test]
    fn error_config_error_display() {
        let err = Cm7Error::ConfigError {
            reason: "missing steps array".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing steps array"));
    }

    #[test]
    fn error_output_failed_display() {
        let err = Cm7Error::OutputFailed {
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
