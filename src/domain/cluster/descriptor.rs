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

use crate::domain::cluster::factory::ClusterFactory;
use crate::domain::cluster::request::{Cloud, CreateClusterRequest};
use crate::infrastructure::constants::{SECRET_TYPE_AMAZON, SECRET_TYPE_AZURE};
use crate::infrastructure::store::{
    ClusterRecord, ClusterRepository, InMemoryClusterRepository, InMemorySecretStore, SecretStore,
};
use crate::shared::error::{ClusterError, Result};
use tracing::{debug, info};

/// Drives a create request through the factory, the secret store and the
/// cluster repository.
pub struct ClusterDescriptor {
    factory: ClusterFactory,
    secrets: Box<dyn SecretStore>,
    repository: Box<dyn ClusterRepository>,
}

impl ClusterDescriptor {
    pub fn new(
        factory: ClusterFactory,
        secrets: Box<dyn SecretStore>,
        repository: Box<dyn ClusterRepository>,
    ) -> Self {
        Self {
            factory,
            secrets,
            repository,
        }
    }

    pub fn in_memory(factory: ClusterFactory, secrets: InMemorySecretStore) -> Self {
        Self::new(
            factory,
            Box::new(secrets),
            Box::new(InMemoryClusterRepository::new()),
        )
    }

    pub async fn create_cluster(
        &self,
        request: &CreateClusterRequest,
        organization_id: u64,
        user_id: u64,
    ) -> Result<ClusterRecord> {
        let model = self
            .factory
            .create_cluster(request, organization_id, user_id)?;

        let secret = self
            .secrets
            .get_secret(organization_id, &model.secret_id)
            .await?;
        let expected = expected_secret_type(model.cloud);
        if secret.secret_type != expected {
            return Err(ClusterError::SecretTypeMismatch {
                secret_id: model.secret_id.clone(),
                expected: expected.to_string(),
                actual: secret.secret_type,
            });
        }
        debug!(secret = %secret.name, cluster = %model.name, "Secret verified");

        if self.repository.exists(organization_id, &model.name).await? {
            return Err(ClusterError::AlreadyExists {
                name: model.name.clone(),
                organization_id,
            });
        }

        let record = self.repository.save(&model).await?;
        info!(
            id = record.id,
            cluster = %record.model.name,
            organization = organization_id,
            "Cluster stored"
        );
        Ok(record)
    }

    pub async fn get_cluster(&self, organization_id: u64, name: &str) -> Result<ClusterRecord> {
        self.repository.find(organization_id, name).await
    }

    pub async fn list_clusters(&self, organization_id: u64) -> Result<Vec<ClusterRecord>> {
        self.repository.list(organization_id).await
    }
}

fn expected_secret_type(cloud: Cloud) -> &'static str {
    match cloud {
        Cloud::Azure => SECRET_TYPE_AZURE,
        Cloud::Amazon => SECRET_TYPE_AMAZON,
    }
}
