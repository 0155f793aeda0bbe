//! Traceability fingerprint digest.
//!
//! Fold input, in order:
//!   1. operation_id
//!   2. timestamp (ISO-8601 instant string, as supplied by the caller)
//!   3. description
//!
//! Each UTF-16 code unit `c` of the concatenation updates a 32-bit signed
//! accumulator as `acc = acc * 31 + c`, wrapping on overflow at every step.
//! The digest is `|acc|` in uppercase hex with no padding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable textual digest of an operation's identifying fields.
///
/// Uppercase hex, unpadded. Demonstration-level only: it is neither
/// collision-resistant nor tamper-evident. The only way to obtain one in code
/// is [`Fingerprint::compute`]; a deserialized value is taken on trust and must
/// be checked by recomputing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fold `(operation_id, timestamp, description)` into a digest.
    ///
    /// Total over all inputs: empty strings fold to `"0"`, and an accumulator
    /// that lands on `i32::MIN` yields `"80000000"`.
    pub fn compute(operation_id: &str, timestamp: &str, description: &str) -> Self {
        let acc = [operation_id, timestamp, description]
            .into_iter()
            .flat_map(str::encode_utf16)
            .fold(0i32, |acc, unit| {
                acc.wrapping_mul(31).wrapping_add(i32::from(unit))
            });

        Fingerprint(format!("{:X}", acc.unsigned_abs()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
