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

/// Configuration file
pub const PIPELINE_CONF_FILE_ENV: &str = "PIPELINE_CONF_FILE";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Link-local block, reserved for every AKS cluster regardless of configuration
pub const AKS_LINK_LOCAL_CIDR: &str = "169.254.0.0/16";

/// AKS reserves these blocks for its own infrastructure; service CIDRs must avoid them
pub const AKS_RESERVED_CIDRS: &[&str] = &[
    "169.254.0.0/16",
    "172.30.0.0/16",
    "172.31.0.0/16",
    "192.0.2.0/24",
];

/// PKE network defaults
pub const PKE_DEFAULT_SERVICE_CIDR: &str = "10.10.0.0/16";
pub const PKE_DEFAULT_POD_CIDR: &str = "10.20.0.0/16";
pub const PKE_DEFAULT_NETWORK_PROVIDER: &str = "weave";
pub const PKE_SUPPORTED_NETWORK_PROVIDERS: &[&str] = &["weave", "calico", "cilium"];

/// Secret types accepted per cloud
pub const SECRET_TYPE_AZURE: &str = "azure";
pub const SECRET_TYPE_AMAZON: &str = "amazon";

/// CLI defaults
pub const DEFAULT_ORGANIZATION_ID: u64 = 1;
pub const DEFAULT_USER_ID: u64 = 1;
