//! `scan-azure`: storage account TLS version check.

use crate::cli::output;
use crate::core::tls::{check_tls, TlsConfig};

/// Read the TLS version from the environment and print the verdict.
pub fn execute() {
    let config = TlsConfig::from_env();
    output::line(check_tls(&config));
}
