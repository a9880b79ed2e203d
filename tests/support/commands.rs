//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a command for one of the check binaries.
    ///
    /// Returns a Command with the check and logging variables removed and
    /// colour disabled.
    pub fn cmd(&self, bin: &str) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin(bin).expect("failed to find binary");
        cmd.env_remove("AZURE_STORAGE_TLS_VERSION");
        cmd.env_remove("CLOUDCHECK_LOG");
        cmd.env_remove("CLOUDCHECK_STUB_KEYS");
        cmd.env_remove("CLOUDCHECK_STUB_FAIL");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `scan-azure` with the variable unset.
    pub fn scan_azure(&self) -> Output {
        self.cmd("scan-azure")
            .output()
            .expect("failed to run scan-azure")
    }

    /// Shortcut for `scan-azure` with `AZURE_STORAGE_TLS_VERSION` set.
    pub fn scan_azure_with(&self, version: &str) -> Output {
        self.cmd("scan-azure")
            .env("AZURE_STORAGE_TLS_VERSION", version)
            .output()
            .expect("failed to run scan-azure")
    }

    /// Shortcut for `scan-aws` against the stub key fixture.
    pub fn scan_aws_stub(&self, keys: &str) -> Output {
        self.cmd("scan-aws")
            .env("CLOUDCHECK_STUB_KEYS", keys)
            .output()
            .expect("failed to run scan-aws")
    }

    /// Shortcut for `scan-aws` against the stub, failing at `point`.
    pub fn scan_aws_stub_failing(&self, keys: &str, point: &str) -> Output {
        self.cmd("scan-aws")
            .env("CLOUDCHECK_STUB_KEYS", keys)
            .env("CLOUDCHECK_STUB_FAIL", point)
            .output()
            .expect("failed to run scan-aws")
    }
}
