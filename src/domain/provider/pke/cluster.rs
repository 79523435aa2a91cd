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

use super::{CreateClusterPke, PkeClusterModel, PkeNetworkValidator, ROLE_MASTER};
use crate::domain::cluster::model::{ClusterModel, NodePoolModel, ProviderModel};
use crate::domain::cluster::request::{CreateClusterRequest, Distribution};
use crate::domain::cluster::validator::RequestValidator;
use crate::shared::error::{ClusterError, Result};

pub fn create_pke_cluster_from_request(
    request: &CreateClusterRequest,
    pke: &CreateClusterPke,
    validator: &PkeNetworkValidator,
    organization_id: u64,
    user_id: u64,
) -> Result<ClusterModel> {
    let node_pools: Vec<NodePoolModel> = pke
        .node_pools
        .iter()
        .map(|pool| NodePoolModel {
            name: pool.name.clone(),
            instance_type: pool.instance_type.clone(),
            autoscaling: pool.autoscaling,
            min_count: pool.min_count,
            max_count: pool.max_count,
            count: pool.count,
            labels: pool.labels.clone(),
            roles: pool.roles.clone(),
            created_by: user_id,
        })
        .collect();
    RequestValidator::validate_node_pools(&node_pools)?;

    if !node_pools
        .iter()
        .any(|pool| pool.roles.iter().any(|r| r == ROLE_MASTER))
    {
        return Err(ClusterError::MasterNodePoolMissing);
    }

    let requested = &pke.kubernetes.network;
    let network = validator.resolve(
        requested.service_cidr.as_deref(),
        requested.pod_cidr.as_deref(),
        requested.provider.as_deref(),
    );
    validator.validate_network(&network).map_err(|e| {
        e.with_context(format!("Invalid network for PKE cluster '{}'", request.name))
    })?;

    Ok(ClusterModel {
        name: request.name.clone(),
        location: request.location.clone(),
        secret_id: request.secret_id.clone(),
        cloud: request.cloud,
        distribution: Distribution::Pke,
        organization_id,
        created_by: user_id,
        provider: ProviderModel::Pke(PkeClusterModel {
            kubernetes_version: pke.kubernetes.version.clone(),
            rbac: pke.kubernetes.rbac,
            service_cidr: network.service_cidr,
            pod_cidr: network.pod_cidr,
            network_provider: network.provider,
            provider_config: requested.provider_config.clone(),
            node_pools,
        }),
    })
}
