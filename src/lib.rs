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

// Core modules
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use domain::cluster::{
    create_common_cluster_from_request, Cloud, ClusterDescriptor, ClusterFactory, ClusterModel,
    CreateClusterProperties, CreateClusterRequest, Distribution, NodePoolModel, ProviderModel,
};
pub use domain::config::{AksConf, LogConf, PipelineConf, PkeConf};
pub use domain::network::{
    address_count, address_range, parse_cidr, parse_ip, verify_no_overlap,
    verify_no_overlap_within_supernet,
};
pub use domain::provider::aks::{
    AksClusterModel, AksNetworkValidator, CreateClusterAks, NetworkCreate, NetworkPlugin,
    NodePoolCreate,
};
pub use domain::provider::pke::{
    CreateClusterPke, PkeClusterModel, PkeKubernetes, PkeNetworkCreate, PkeNetworkValidator,
    PkeNodePoolCreate,
};
pub use infrastructure::store::{
    ClusterRecord, ClusterRepository, InMemoryClusterRepository, InMemorySecretStore,
    SecretResponse, SecretStore,
};
pub use shared::{ClusterError, ErrorKind, Result};
