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

//! Pipeline Kubernetes Engine, installed on plain cloud VMs

pub mod cluster;
pub mod network;

pub use self::cluster::create_pke_cluster_from_request;
pub use self::network::PkeNetworkValidator;

use crate::domain::cluster::model::NodePoolModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROLE_MASTER: &str = "master";
pub const ROLE_WORKER: &str = "worker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterPke {
    pub kubernetes: PkeKubernetes,
    #[serde(default)]
    pub node_pools: Vec<PkeNodePoolCreate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkeKubernetes {
    pub version: String,
    #[serde(default)]
    pub rbac: bool,
    #[serde(default)]
    pub network: PkeNetworkCreate,
}

/// Unset fields fall back to the configured PKE defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkeNetworkCreate {
    #[serde(rename = "serviceCIDR", default, skip_serializing_if = "Option::is_none")]
    pub service_cidr: Option<String>,
    #[serde(rename = "podCIDR", default, skip_serializing_if = "Option::is_none")]
    pub pod_cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider_config: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkeNodePoolCreate {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkeClusterModel {
    pub kubernetes_version: String,
    pub rbac: bool,
    pub service_cidr: String,
    pub pod_cidr: String,
    pub network_provider: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub provider_config: BTreeMap<String, serde_json::Value>,
    pub node_pools: Vec<NodePoolModel>,
}
