//! Operation records and their lifecycle status.
//!
//! A record is built in two phases. `OperationDraft` carries the identifying
//! fields while they are being assembled; `OperationDraft::finalize` computes
//! the fingerprint and yields an `OperationRecord`. Record fields are private
//! and read-only, so the fingerprint is computed exactly once and no record
//! can be edited after it is finalized.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Cm7Error, fingerprint::Fingerprint};

/// Format an instant the way every CM-7 timestamp is written and fingerprinted:
/// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The closed set of lifecycle states an operation can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Completed,
    Active,
    InProgress,
}

impl OperationStatus {
    /// Every status, in declaration order.
    pub const ALL: [OperationStatus; 3] = [
        OperationStatus::Completed,
        OperationStatus::Active,
        OperationStatus::InProgress,
    ];

    /// The wire name of this status (`completed`, `active`, `in_progress`).
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Completed => "completed",
            OperationStatus::Active => "active",
            OperationStatus::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationStatus {
    type Err = Cm7Error;

    /// Parse a wire name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Cm7Error::Validation {
                operation_id: String::new(),
                reason: format!(
                    "status '{}' is not one of completed, active, in_progress",
                    s
                ),
            })
    }
}

/// An operation whose core fields are fixed but which has not been
/// fingerprinted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDraft {
    /// Short identifier, unique within one log (e.g. "OP-001").
    pub operation_id: String,
    /// Construction instant, truncated to millisecond precision.
    pub timestamp: DateTime<Utc>,
    /// Human-readable explanation of the step.
    pub description: String,
    pub status: OperationStatus,
}

impl OperationDraft {
    /// The timestamp exactly as it is fed into the fingerprint.
    pub fn timestamp_iso(&self) -> String {
        format_instant(&self.timestamp)
    }

    /// Fingerprint the draft, producing the finalized record.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is
    /// fingerprinted and serialized at.
    pub fn finalize(self) -> OperationRecord {
        let timestamp = self.timestamp.trunc_subsecs(3);
        let fingerprint = Fingerprint::compute(
            &self.operation_id,
            &format_instant(&timestamp),
            &self.description,
        );
        OperationRecord {
            operation_id: self.operation_id,
            timestamp,
            description: self.description,
            status: self.status,
            fingerprint,
        }
    }
}

/// One finalized step of the operational log.
///
/// Built only by `OperationDraft::finalize` or by deserialization. A
/// deserialized record carries whatever fingerprint the input held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    operation_id: String,
    #[serde(with = "instant_millis")]
    timestamp: DateTime<Utc>,
    description: String,
    status: OperationStatus,
    /// Digest of `(operation_id, timestamp, description)`.
    fingerprint: Fingerprint,
}

impl OperationRecord {
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// The timestamp exactly as it was fed into the fingerprint.
    pub fn timestamp_iso(&self) -> String {
        format_instant(&self.timestamp)
    }
}

/// Serde adapter that keeps the millisecond ISO form on the wire. Decoding
/// truncates to milliseconds, so a decoded record re-encodes identically.
mod instant_millis {
    use chrono::{DateTime, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_instant(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
