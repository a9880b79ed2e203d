//! Domain types shared by the checks.

/// A KMS key identifier (opaque; usually a UUID).
pub type KeyId = String;

/// A key usage mode as reported by the service (e.g. `ENCRYPT_DECRYPT`).
///
/// Kept as the raw string: values the SDK does not know about are still
/// reported and simply fail the check.
pub type KeyUsage = String;

/// Metadata for one key, fetched transiently during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub key_id: KeyId,
    pub key_usage: KeyUsage,
}

impl KeyRecord {
    pub fn new(key_id: impl Into<KeyId>, key_usage: impl Into<KeyUsage>) -> Self {
        Self {
            key_id: key_id.into(),
            key_usage: key_usage.into(),
        }
    }
}
