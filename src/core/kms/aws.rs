//! AWS KMS key service.
//!
//! Enable with `--features aws` (on by default).
//!
//! Credentials and region come from the default provider chain
//! (AWS_ACCESS_KEY_ID, AWS_PROFILE, ~/.aws/config, instance metadata, ...).

use aws_sdk_kms::error::DisplayErrorContext;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::KeyService;
use crate::core::types::{KeyId, KeyRecord};
use crate::error::{KmsError, Result};

/// AWS KMS client driven from synchronous code.
///
/// Owns a current-thread runtime and blocks on each SDK call.
#[derive(Debug)]
pub struct AwsKms {
    client: aws_sdk_kms::Client,
    runtime: Runtime,
}

impl AwsKms {
    /// Build a client from the ambient AWS configuration.
    pub fn from_env() -> Result<Self> {
        let runtime = new_runtime()?;
        let config =
            runtime.block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
        debug!(region = ?config.region(), "loaded AWS config");

        Ok(Self {
            client: aws_sdk_kms::Client::new(&config),
            runtime,
        })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: aws_sdk_kms::Client) -> Result<Self> {
        Ok(Self {
            client,
            runtime: new_runtime()?,
        })
    }

    async fn list_all(&self) -> Result<Vec<KeyId>> {
        let mut pages = self.client.list_keys().into_paginator().send();
        let mut key_ids = Vec::new();

        while let Some(page) = pages.next().await {
            let page =
                page.map_err(|e| KmsError::ListKeys(DisplayErrorContext(&e).to_string()))?;
            trace!(entries = page.keys().len(), "ListKeys page");

            for entry in page.keys() {
                let key_id = entry.key_id().ok_or_else(|| KmsError::MissingField {
                    key_id: "<ListKeys entry>".to_string(),
                    field: "KeyId",
                })?;
                key_ids.push(key_id.to_string());
            }
        }

        Ok(key_ids)
    }

    async fn describe(&self, key_id: &str) -> Result<KeyRecord> {
        let output = self
            .client
            .describe_key()
            .key_id(key_id)
            .send()
            .await
            .map_err(|e| KmsError::DescribeKey {
                key_id: key_id.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let metadata = output.key_metadata().ok_or_else(|| KmsError::MissingField {
            key_id: key_id.to_string(),
            field: "KeyMetadata",
        })?;
        let usage = metadata.key_usage().ok_or_else(|| KmsError::MissingField {
            key_id: key_id.to_string(),
            field: "KeyUsage",
        })?;

        Ok(KeyRecord::new(key_id, usage.as_str()))
    }
}

fn new_runtime() -> Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| KmsError::Runtime(e.to_string()))?;
    Ok(runtime)
}

impl KeyService for AwsKms {
    fn list_keys(&self) -> Result<Vec<KeyId>> {
        self.runtime.block_on(self.list_all())
    }

    fn describe_key(&self, key_id: &str) -> Result<KeyRecord> {
        self.runtime.block_on(self.describe(key_id))
    }
}
