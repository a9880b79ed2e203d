//! KMS key usage check.
//!
//! Lists every key visible to the caller, describes each one, and classifies
//! it compliant iff its usage is `ENCRYPT_DECRYPT`. Only usage is inspected;
//! key state, origin and rotation are out of scope.
//!
//! ## Services
//!
//! - **AWS**: Feature-gated (`aws`). Real KMS through `aws-sdk-kms`.
//! - **Stub**: Feature-gated (`test-kms`). Env-driven fixture for CLI tests.

use std::fmt;

use tracing::{debug, trace};

use crate::core::constants::EXPECTED_KEY_USAGE;
use crate::core::types::{KeyId, KeyRecord};
use crate::error::Result;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(any(test, feature = "test-kms"))]
pub mod stub;

/// Key-management service operations needed by the scan.
///
/// Implemented by the AWS client and by the stub used in tests.
pub trait KeyService: fmt::Debug {
    /// Identifiers of every key accessible to the caller, in listing order.
    fn list_keys(&self) -> Result<Vec<KeyId>>;

    /// Metadata for a single key.
    fn describe_key(&self, key_id: &str) -> Result<KeyRecord>;
}

/// Outcome of checking one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVerdict {
    pub record: KeyRecord,
    pub compliant: bool,
}

impl fmt::Display for KeyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.compliant {
            write!(f, "Key {} is FIPS compliant.", self.record.key_id)
        } else {
            write!(f, "Key {} is not compliant!", self.record.key_id)
        }
    }
}

/// Classify a key by its usage. Exact, case-sensitive comparison.
pub fn classify_key(record: KeyRecord) -> KeyVerdict {
    let compliant = record.key_usage == EXPECTED_KEY_USAGE;
    KeyVerdict { record, compliant }
}

/// Scan every key, handing each verdict to `on_verdict` as soon as it is known.
///
/// Keys are described one at a time in listing order. The first service
/// error aborts the scan; verdicts already delivered are not retracted.
///
/// Returns the number of keys scanned.
///
/// # Errors
///
/// Returns `KmsError` from the first failed list or describe call.
pub fn scan_keys<S, F>(service: &S, mut on_verdict: F) -> Result<usize>
where
    S: KeyService + ?Sized,
    F: FnMut(&KeyVerdict),
{
    let key_ids = service.list_keys()?;
    debug!(count = key_ids.len(), "listed KMS keys");

    for key_id in &key_ids {
        let record = service.describe_key(key_id)?;
        trace!(key_id = %record.key_id, usage = %record.key_usage, "described key");
        on_verdict(&classify_key(record));
    }

    Ok(key_ids.len())
}
