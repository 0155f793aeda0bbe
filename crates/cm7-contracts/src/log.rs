//! The ordered operation log handed to renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operation::OperationRecord;

/// An ordered, fingerprinted sequence of operation records.
///
/// Order is execution order and is part of the contract: consumers never
/// need to re-sort. A log is regenerated on every invocation and discarded
/// once rendered; it has no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLog {
    /// Wall-clock time (UTC) the log finished building.
    pub generated_at: DateTime<Utc>,

    records: Vec<OperationRecord>,
}

impl OperationLog {
    pub fn new(records: Vec<OperationRecord>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            records,
        }
    }

    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OperationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<OperationRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a OperationRecord;
    type IntoIter = std::slice::Iter<'a, OperationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
