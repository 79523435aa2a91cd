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
use crate::domain::cluster::request::{Cloud, CreateClusterProperties, CreateClusterRequest};
use crate::domain::cluster::validator::RequestValidator;
use crate::domain::config::PipelineConf;
use crate::domain::provider::aks::{create_aks_cluster_from_request, AksNetworkValidator};
use crate::domain::provider::pke::{create_pke_cluster_from_request, PkeNetworkValidator};
use crate::shared::error::{ClusterError, Result};
use tracing::{debug, info};

/// Turns a [`CreateClusterRequest`] into a [`ClusterModel`].
///
/// Pure and synchronous: no I/O, no shared state. One factory can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ClusterFactory {
    aks_validator: AksNetworkValidator,
    pke_validator: PkeNetworkValidator,
}

impl ClusterFactory {
    pub fn new(aks_validator: AksNetworkValidator, pke_validator: PkeNetworkValidator) -> Self {
        Self {
            aks_validator,
            pke_validator,
        }
    }

    pub fn from_conf(conf: &PipelineConf) -> Result<Self> {
        conf.validate()?;
        Ok(Self::new(
            AksNetworkValidator::from_conf(&conf.aks)?,
            PkeNetworkValidator::new(conf.pke.clone()),
        ))
    }

    pub fn create_cluster(
        &self,
        request: &CreateClusterRequest,
        organization_id: u64,
        user_id: u64,
    ) -> Result<ClusterModel> {
        RequestValidator::validate_request(request)?;

        let distribution = request.distribution();
        debug!(
            cloud = %request.cloud,
            distribution = %distribution,
            cluster = %request.name,
            "Dispatching create request"
        );

        let model = match (request.cloud, &request.properties) {
            (Cloud::Azure, CreateClusterProperties::Aks(aks)) => create_aks_cluster_from_request(
                request,
                aks,
                &self.aks_validator,
                organization_id,
                user_id,
            )?,
            (Cloud::Azure | Cloud::Amazon, CreateClusterProperties::Pke(pke)) => {
                create_pke_cluster_from_request(
                    request,
                    pke,
                    &self.pke_validator,
                    organization_id,
                    user_id,
                )?
            }
            (cloud, _) => {
                return Err(ClusterError::UnsupportedDistribution {
                    cloud: cloud.to_string(),
                    distribution: distribution.to_string(),
                })
            }
        };

        info!(
            cloud = %model.cloud,
            distribution = %model.distribution,
            cluster = %model.name,
            node_pools = model.node_pools().len(),
            "Cluster model created"
        );
        Ok(model)
    }
}

/// [`ClusterFactory::create_cluster`] with the built-in defaults.
pub fn create_common_cluster_from_request(
    request: &CreateClusterRequest,
    organization_id: u64,
    user_id: u64,
) -> Result<ClusterModel> {
    ClusterFactory::default().create_cluster(request, organization_id, user_id)
}
