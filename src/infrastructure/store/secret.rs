// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::shared::error::{ClusterError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use tokio::sync::RwLock;

/// Secret metadata as returned by the secret-management backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub secret_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_by: String,
    #[serde(default)]
    pub version: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[async_trait::async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, organization_id: u64, secret_id: &str) -> Result<SecretResponse>;
}

#[derive(Default)]
pub struct InMemorySecretStore {
    secrets: RwLock<HashMap<(u64, String), SecretResponse>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON array of secrets, all owned by `organization_id`.
    pub fn from_file<P: AsRef<Path>>(path: P, organization_id: u64) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            ClusterError::from(e).with_context(format!("Failed to read {}", path.display()))
        })?;
        let secrets: Vec<SecretResponse> = serde_json::from_str(&content)?;

        let map = secrets
            .into_iter()
            .map(|s| ((organization_id, s.id.clone()), s))
            .collect();
        Ok(Self {
            secrets: RwLock::new(map),
        })
    }

    pub async fn insert(&self, organization_id: u64, secret: SecretResponse) {
        self.secrets
            .write()
            .await
            .insert((organization_id, secret.id.clone()), secret);
    }
}

#[async_trait::async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, organization_id: u64, secret_id: &str) -> Result<SecretResponse> {
        self.secrets
            .read()
            .await
            .get(&(organization_id, secret_id.to_string()))
            .cloned()
            .ok_or_else(|| ClusterError::SecretNotFound {
                secret_id: secret_id.to_string(),
                organization_id,
            })
    }
}
