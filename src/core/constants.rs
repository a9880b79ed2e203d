//! Constants used throughout cloudcheck.
//!
//! Centralizes the expected values and environment variable names.

/// Key usage a KMS key must report to be considered compliant.
pub const EXPECTED_KEY_USAGE: &str = "ENCRYPT_DECRYPT";

/// Environment variable holding the storage account TLS version.
pub const TLS_VERSION_VAR: &str = "AZURE_STORAGE_TLS_VERSION";

/// TLS version assumed when `AZURE_STORAGE_TLS_VERSION` is unset.
pub const DEFAULT_TLS_VERSION: &str = "TLS1_0";

/// TLS version a storage account must use to be considered compliant.
pub const REQUIRED_TLS_VERSION: &str = "TLS1_3";

/// Environment variable read as a tracing `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "CLOUDCHECK_LOG";

/// Stub key fixture (`id=USAGE,id=USAGE`), `test-kms` builds only.
pub const STUB_KEYS_VAR: &str = "CLOUDCHECK_STUB_KEYS";

/// Stub failure point: `list`, or a key id whose describe call fails.
pub const STUB_FAIL_VAR: &str = "CLOUDCHECK_STUB_FAIL";
