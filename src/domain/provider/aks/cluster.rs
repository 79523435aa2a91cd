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

use super::{AksClusterModel, AksNetworkValidator, CreateClusterAks, NetworkPlugin};
use crate::domain::cluster::model::{ClusterModel, NodePoolModel, ProviderModel};
use crate::domain::cluster::request::{CreateClusterRequest, Distribution};
use crate::domain::cluster::validator::RequestValidator;
use crate::shared::error::Result;
use tracing::warn;

/// Builds an AKS cluster model and validates its network block.
///
/// Node pools are emitted in name order. With the Azure CNI plugin the pod
/// CIDR is left unset even when the request carries one.
pub fn create_aks_cluster_from_request(
    request: &CreateClusterRequest,
    aks: &CreateClusterAks,
    validator: &AksNetworkValidator,
    organization_id: u64,
    user_id: u64,
) -> Result<ClusterModel> {
    let node_pools: Vec<NodePoolModel> = aks
        .node_pools
        .iter()
        .map(|(name, pool)| NodePoolModel {
            name: name.clone(),
            instance_type: pool.instance_type.clone(),
            autoscaling: pool.autoscaling,
            min_count: pool.min_count,
            max_count: pool.max_count,
            count: pool.count,
            labels: pool.labels.clone(),
            roles: Vec::new(),
            created_by: user_id,
        })
        .collect();
    RequestValidator::validate_node_pools(&node_pools)?;

    let mut model = AksClusterModel {
        resource_group: aks.resource_group.clone(),
        kubernetes_version: aks.kubernetes_version.clone(),
        network_plugin: None,
        pod_cidr: None,
        service_cidr: None,
        dns_service_ip: None,
        docker_bridge_cidr: None,
        node_pools,
    };

    if let Some(network) = &aks.network {
        let plugin = network.network_plugin;
        validator.validate_network(network, plugin).map_err(|e| {
            e.with_context(format!("Invalid network for AKS cluster '{}'", request.name))
        })?;

        if plugin == NetworkPlugin::Azure && network.pod_cidr.is_some() {
            warn!(
                cluster = %request.name,
                "Pod CIDR is ignored by the azure network plugin"
            );
        }

        model.network_plugin = Some(plugin);
        model.pod_cidr = if plugin.requires_pod_cidr() {
            network.pod_cidr.clone()
        } else {
            None
        };
        model.service_cidr = Some(network.service_cidr.clone());
        model.dns_service_ip = Some(network.dns_service_ip.clone());
        model.docker_bridge_cidr = network.docker_bridge_cidr.clone();
    }

    Ok(ClusterModel {
        name: request.name.clone(),
        location: request.location.clone(),
        secret_id: request.secret_id.clone(),
        cloud: request.cloud,
        distribution: Distribution::Aks,
        organization_id,
        created_by: user_id,
        provider: ProviderModel::Aks(model),
    })
}
