//! Storage account TLS version check.
//!
//! Reads `AZURE_STORAGE_TLS_VERSION` (default `TLS1_0`) and passes iff it is
//! exactly `TLS1_3`. No trimming or case folding: anything else fails.

use std::ffi::OsString;
use std::fmt;

use tracing::debug;

use crate::core::constants::{DEFAULT_TLS_VERSION, REQUIRED_TLS_VERSION, TLS_VERSION_VAR};

/// The TLS version under check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub version: String,
}

impl TlsConfig {
    /// Read the version from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read the version through `lookup`, which maps a variable name to its value.
    ///
    /// A value that is not valid Unicode counts as present; it is converted
    /// lossily and will never match.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<OsString>,
    {
        let version = match lookup(TLS_VERSION_VAR) {
            Some(value) => value.to_string_lossy().into_owned(),
            None => {
                debug!(var = TLS_VERSION_VAR, default = DEFAULT_TLS_VERSION, "variable unset");
                DEFAULT_TLS_VERSION.to_string()
            }
        };
        Self { version }
    }
}

/// Outcome of the TLS check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsVerdict {
    pub config: TlsConfig,
    pub compliant: bool,
}

impl fmt::Display for TlsVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.compliant {
            f.write_str("Storage Account is using TLS 1.3")
        } else {
            f.write_str("Storage Account is not using TLS 1.3")
        }
    }
}

pub fn check_tls(config: &TlsConfig) -> TlsVerdict {
    let compliant = config.version == REQUIRED_TLS_VERSION;
    debug!(version = %config.version, compliant, "checked TLS version");
    TlsVerdict {
        config: config.clone(),
        compliant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(value: Option<&str>) -> TlsConfig {
        TlsConfig::from_lookup(|name| {
            assert_eq!(name, TLS_VERSION_VAR);
            value.map(OsString::from)
        })
    }

    #[test]
    fn test_unset_defaults_to_tls1_0() {
        let config = config_with(None);
        assert_eq!(config.version, "TLS1_0");

        let verdict = check_tls(&config);
        assert!(!verdict.compliant);
        assert_eq!(verdict.to_string(), "Storage Account is not using TLS 1.3");
    }

    #[test]
    fn test_tls1_3_is_compliant() {
        let verdict = check_tls(&config_with(Some("TLS1_3")));
        assert!(verdict.compliant);
        assert_eq!(verdict.to_string(), "Storage Account is using TLS 1.3");
    }

    #[test]
    fn test_near_misses_are_not_compliant() {
        for value in ["TLS1_2", "tls1_3", " TLS1_3", "TLS1_3\n", "TLS1.3", ""] {
            let verdict = check_tls(&config_with(Some(value)));
            assert!(!verdict.compliant, "{:?} should not pass", value);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_present_but_not_compliant() {
        use std::os::unix::ffi::OsStringExt;

        let config = TlsConfig::from_lookup(|_| Some(OsString::from_vec(vec![0x54, 0xff])));
        assert_ne!(config.version, DEFAULT_TLS_VERSION);
        assert!(!check_tls(&config).compliant);
    }
}
