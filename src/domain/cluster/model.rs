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

//! Canonical, persistable cluster model

use crate::domain::cluster::request::{Cloud, Distribution};
use crate::domain::provider::aks::AksClusterModel;
use crate::domain::provider::pke::PkeClusterModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterModel {
    pub name: String,
    pub location: String,
    pub secret_id: String,
    pub cloud: Cloud,
    pub distribution: Distribution,
    pub organization_id: u64,
    pub created_by: u64,
    pub provider: ProviderModel,
}

/// Provider sub-model; exactly one per cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderModel {
    Aks(AksClusterModel),
    Pke(PkeClusterModel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolModel {
    pub name: String,
    pub instance_type: String,
    pub autoscaling: bool,
    pub min_count: u32,
    pub max_count: u32,
    pub count: u32,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    pub created_by: u64,
}

impl ClusterModel {
    pub fn aks(&self) -> Option<&AksClusterModel> {
        match &self.provider {
            ProviderModel::Aks(aks) => Some(aks),
            _ => None,
        }
    }

    pub fn pke(&self) -> Option<&PkeClusterModel> {
        match &self.provider {
            ProviderModel::Pke(pke) => Some(pke),
            _ => None,
        }
    }

    pub fn kubernetes_version(&self) -> &str {
        match &self.provider {
            ProviderModel::Aks(aks) => &aks.kubernetes_version,
            ProviderModel::Pke(pke) => &pke.kubernetes_version,
        }
    }

    pub fn node_pools(&self) -> &[NodePoolModel] {
        match &self.provider {
            ProviderModel::Aks(aks) => &aks.node_pools,
            ProviderModel::Pke(pke) => &pke.node_pools,
        }
    }
}
