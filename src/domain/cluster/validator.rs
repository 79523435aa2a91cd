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

use crate::domain::cluster::model::NodePoolModel;
use crate::domain::cluster::request::CreateClusterRequest;
use crate::shared::error::ClusterError;
use regex::Regex;
use std::sync::OnceLock;

const MAX_CLUSTER_NAME_LEN: usize = 63;

/// Structural checks that run before any provider-specific validation.
pub struct RequestValidator;

impl RequestValidator {
    /// Location first, then the cluster name.
    pub fn validate_request(request: &CreateClusterRequest) -> Result<(), ClusterError> {
        if request.location.is_empty() {
            return Err(ClusterError::LocationEmpty);
        }

        if !is_valid_k8s_name(&request.name) || request.name.len() > MAX_CLUSTER_NAME_LEN {
            return Err(ClusterError::ClusterNameInvalid(request.name.clone()));
        }

        Ok(())
    }

    pub fn validate_node_pools(node_pools: &[NodePoolModel]) -> Result<(), ClusterError> {
        if node_pools.is_empty() {
            return Err(ClusterError::NodePoolsEmpty);
        }

        for pool in node_pools {
            Self::validate_node_pool(pool)?;
        }

        Ok(())
    }

    fn validate_node_pool(pool: &NodePoolModel) -> Result<(), ClusterError> {
        if !is_valid_k8s_name(&pool.name) {
            return Err(ClusterError::node_pool_invalid(
                &pool.name,
                "name must consist of lowercase alphanumerics and '-'",
            ));
        }

        if pool.instance_type.trim().is_empty() {
            return Err(ClusterError::node_pool_invalid(
                &pool.name,
                "instance type must not be empty",
            ));
        }

        if pool.autoscaling && pool.min_count > pool.max_count {
            return Err(ClusterError::node_pool_invalid(
                &pool.name,
                format!(
                    "minCount ({}) must not exceed maxCount ({})",
                    pool.min_count, pool.max_count
                ),
            ));
        }

        Ok(())
    }
}

pub(crate) fn is_valid_k8s_name(name: &str) -> bool {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();

    if name.is_empty() || name.len() > 253 {
        return false;
    }

    NAME_RE
        .get_or_init(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid name regex"))
        .is_match(name)
}
