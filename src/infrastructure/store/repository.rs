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

use crate::domain::cluster::model::ClusterModel;
use crate::shared::error::{ClusterError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A persisted cluster model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub model: ClusterModel,
}

/// Cluster persistence, keyed by organization id and cluster name.
#[async_trait::async_trait]
pub trait ClusterRepository: Send + Sync {
    async fn exists(&self, organization_id: u64, name: &str) -> Result<bool>;

    async fn save(&self, model: &ClusterModel) -> Result<ClusterRecord>;

    async fn find(&self, organization_id: u64, name: &str) -> Result<ClusterRecord>;

    async fn list(&self, organization_id: u64) -> Result<Vec<ClusterRecord>>;
}

#[derive(Default)]
struct RepositoryState {
    next_id: u64,
    records: BTreeMap<(u64, String), ClusterRecord>,
}

#[derive(Default)]
pub struct InMemoryClusterRepository {
    state: RwLock<RepositoryState>,
}

impl InMemoryClusterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ClusterRepository for InMemoryClusterRepository {
    async fn exists(&self, organization_id: u64, name: &str) -> Result<bool> {
        Ok(self
            .state
            .read()
            .await
            .records
            .contains_key(&(organization_id, name.to_string())))
    }

    async fn save(&self, model: &ClusterModel) -> Result<ClusterRecord> {
        let mut state = self.state.write().await;
        let key = (model.organization_id, model.name.clone());
        if state.records.contains_key(&key) {
            return Err(ClusterError::AlreadyExists {
                name: model.name.clone(),
                organization_id: model.organization_id,
            });
        }

        state.next_id += 1;
        let record = ClusterRecord {
            id: state.next_id,
            created_at: Utc::now(),
            model: model.clone(),
        };
        state.records.insert(key, record.clone());
        Ok(record)
    }

    async fn find(&self, organization_id: u64, name: &str) -> Result<ClusterRecord> {
        self.state
            .read()
            .await
            .records
            .get(&(organization_id, name.to_string()))
            .cloned()
            .ok_or_else(|| ClusterError::NotFound {
                name: name.to_string(),
                organization_id,
            })
    }

    async fn list(&self, organization_id: u64) -> Result<Vec<ClusterRecord>> {
        Ok(self
            .state
            .read()
            .await
            .records
            .values()
            .filter(|r| r.model.organization_id == organization_id)
            .cloned()
            .collect())
    }
}
