//! Cloudcheck - small cloud configuration checks.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── bin/
//! │   ├── scan_aws      # KMS key usage check entry point
//! │   └── scan_azure    # storage TLS version check entry point
//! ├── cli/              # Logging setup, output, per-check execute()
//! └── core/             # Check logic
//!     ├── constants     # Expected values and env var names
//!     ├── kms/          # KeyService trait, scan, AWS and stub services
//!     ├── tls           # TlsConfig and check
//!     └── types         # KeyRecord
//! ```

pub mod cli;
pub mod core;
pub mod error;
