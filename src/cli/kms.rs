//! `scan-aws`: KMS key usage check.

use tracing::debug;

use crate::cli::output;
use crate::core::kms::{self, KeyService};
use crate::error::Result;

/// Scan every key and print one line per key as it is classified.
pub fn execute() -> Result<()> {
    let service = connect()?;

    let scanned = kms::scan_keys(service.as_ref(), |verdict| output::line(verdict))?;
    debug!(scanned, "key scan finished");
    Ok(())
}

#[cfg(feature = "test-kms")]
fn connect() -> Result<Box<dyn KeyService>> {
    Ok(Box::new(kms::stub::StubKms::from_env()?))
}

#[cfg(all(not(feature = "test-kms"), feature = "aws"))]
fn connect() -> Result<Box<dyn KeyService>> {
    Ok(Box::new(kms::aws::AwsKms::from_env()?))
}
