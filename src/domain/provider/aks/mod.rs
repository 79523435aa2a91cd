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

//! Azure Kubernetes Service

pub mod cluster;
pub mod network;

pub use self::cluster::create_aks_cluster_from_request;
pub use self::network::AksNetworkValidator;

use crate::domain::cluster::model::NodePoolModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterAks {
    pub resource_group: String,
    pub kubernetes_version: String,
    #[serde(default)]
    pub node_pools: BTreeMap<String, NodePoolCreate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkCreate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolCreate {
    #[serde(default)]
    pub autoscaling: bool,
    #[serde(default)]
    pub min_count: u32,
    #[serde(default)]
    pub max_count: u32,
    pub count: u32,
    pub instance_type: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCreate {
    pub service_cidr: String,
    /// Absent for plugins that assign pod addresses from the node subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_cidr: Option<String>,
    pub dns_service_ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_bridge_cidr: Option<String>,
    pub network_plugin: NetworkPlugin,
}

/// Pod networking mode of an AKS cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPlugin {
    /// Azure CNI: pods take addresses from the node subnet.
    Azure,
    /// Pods take addresses from a dedicated pod CIDR.
    Kubenet,
}

impl NetworkPlugin {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkPlugin::Azure => "azure",
            NetworkPlugin::Kubenet => "kubenet",
        }
    }

    pub fn requires_pod_cidr(&self) -> bool {
        matches!(self, NetworkPlugin::Kubenet)
    }
}

impl fmt::Display for NetworkPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AksClusterModel {
    pub resource_group: String,
    pub kubernetes_version: String,
    pub network_plugin: Option<NetworkPlugin>,
    pub pod_cidr: Option<String>,
    pub service_cidr: Option<String>,
    pub dns_service_ip: Option<String>,
    pub docker_bridge_cidr: Option<String>,
    pub node_pools: Vec<NodePoolModel>,
}
