//! Stub key service for tests.
//!
//! Serves a fixed key list instead of calling a real KMS. The `scan-aws`
//! binary uses it when built with `--features test-kms`, reading the fixture
//! from `CLOUDCHECK_STUB_KEYS` (`id=USAGE,id=USAGE`) and an optional failure
//! point from `CLOUDCHECK_STUB_FAIL` (`list` or a key id).

use std::cell::RefCell;

use super::KeyService;
use crate::core::constants::{STUB_FAIL_VAR, STUB_KEYS_VAR};
use crate::core::types::{KeyId, KeyRecord};
use crate::error::{KmsError, Result};

#[derive(Debug, Default)]
pub struct StubKms {
    keys: Vec<KeyRecord>,
    fail_on: Option<String>,
    described: RefCell<Vec<KeyId>>,
}

impl StubKms {
    pub fn new(keys: Vec<KeyRecord>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Fail the listing (`"list"`) or the describe call for one key id.
    pub fn failing_on(mut self, point: impl Into<String>) -> Self {
        self.fail_on = Some(point.into());
        self
    }

    /// Build from `CLOUDCHECK_STUB_KEYS` / `CLOUDCHECK_STUB_FAIL`.
    ///
    /// An unset or empty fixture means an account with no keys.
    pub fn from_env() -> Result<Self> {
        let spec = std::env::var(STUB_KEYS_VAR).unwrap_or_default();
        let mut stub = Self::new(parse_fixture(&spec)?);
        if let Ok(point) = std::env::var(STUB_FAIL_VAR) {
            if !point.is_empty() {
                stub = stub.failing_on(point);
            }
        }
        Ok(stub)
    }

    /// Key ids passed to `describe_key`, in call order.
    pub fn described(&self) -> Vec<KeyId> {
        self.described.borrow().clone()
    }
}

/// Parse `id=USAGE,id=USAGE` into records.
pub fn parse_fixture(spec: &str) -> Result<Vec<KeyRecord>> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<KeyRecord> {
            let (id, usage) = entry
                .split_once('=')
                .ok_or_else(|| KmsError::Stub(format!("malformed fixture entry: {}", entry)))?;
            Ok(KeyRecord::new(id, usage))
        })
        .collect()
}

impl KeyService for StubKms {
    fn list_keys(&self) -> Result<Vec<KeyId>> {
        if self.fail_on.as_deref() == Some("list") {
            return Err(KmsError::Stub("ListKeys: AccessDeniedException".to_string()).into());
        }
        Ok(self.keys.iter().map(|k| k.key_id.clone()).collect())
    }

    fn describe_key(&self, key_id: &str) -> Result<KeyRecord> {
        self.described.borrow_mut().push(key_id.to_string());

        if self.fail_on.as_deref() == Some(key_id) {
            return Err(KmsError::Stub(format!(
                "DescribeKey {}: ThrottlingException",
                key_id
            ))
            .into());
        }
        self.keys
            .iter()
            .find(|k| k.key_id == key_id)
            .cloned()
            .ok_or_else(|| KmsError::Stub(format!("NotFoundException: {}", key_id)).into())
    }
}
