//! Error types.
//!
//! Only the KMS scan can fail; the TLS check has no error path.

use thiserror::Error;

/// Top-level error returned by the library.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Kms(#[from] KmsError),
}

/// Failures talking to the key-management service.
#[derive(Error, Debug)]
pub enum KmsError {
    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("KMS ListKeys failed: {0}")]
    ListKeys(String),

    #[error("KMS DescribeKey failed for {key_id}: {reason}")]
    DescribeKey { key_id: String, reason: String },

    #[error("KMS response for {key_id} is missing {field}")]
    MissingField { key_id: String, field: &'static str },

    #[cfg(any(test, feature = "test-kms"))]
    #[error("stub KMS: {0}")]
    Stub(String),
}

pub type Result<T> = std::result::Result<T, Error>;
