//! Command-line plumbing shared by the `scan-aws` and `scan-azure` binaries.

#[cfg(any(feature = "aws", feature = "test-kms"))]
pub mod kms;
pub mod output;
pub mod tls;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants::LOG_ENV_VAR;

/// Install the tracing subscriber.
///
/// `CLOUDCHECK_LOG` wins when set; otherwise `--verbose` selects debug.
/// Logs go to stderr so stdout carries only check results.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cloudcheck=debug")
        } else {
            EnvFilter::new("cloudcheck=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
