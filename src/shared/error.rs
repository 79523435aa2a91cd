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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, ClusterError>;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Location must not be empty")]
    LocationEmpty,

    #[error("Invalid cluster name: '{0}'")]
    ClusterNameInvalid(String),

    #[error("Unsupported distribution '{distribution}' on cloud '{cloud}'")]
    UnsupportedDistribution { cloud: String, distribution: String },

    #[error("At least one node pool is required")]
    NodePoolsEmpty,

    #[error("Invalid node pool '{name}': {reason}")]
    NodePoolInvalid { name: String, reason: String },

    #[error("At least one node pool must carry the master role")]
    MasterNodePoolMissing,

    #[error("Service CIDR '{value}' is not a valid network block")]
    NetworkServiceCidrInvalid { value: String },

    #[error("Service CIDR '{value}' overlaps reserved range {reserved}")]
    NetworkServiceCidrIsReserved { value: String, reserved: String },

    #[error("DNS service IP '{value}' is not a valid IP address")]
    NetworkDnsServiceIpNotValid { value: String },

    #[error("DNS service IP '{value}' is not inside service CIDR {service_cidr}")]
    NetworkDnsServiceIpNotInsideServiceCidr { value: String, service_cidr: String },

    #[error("DNS service IP '{value}' is reserved within service CIDR {service_cidr}")]
    NetworkDnsServiceIpInvalidValue { value: String, service_cidr: String },

    #[error("Pod CIDR is required by network plugin '{plugin}'")]
    NetworkPodCidrRequired { plugin: String },

    #[error("Pod CIDR '{value}' is not a valid network block")]
    NetworkPodCidrInvalid { value: String },

    #[error("Docker bridge CIDR '{value}' is not a valid network block")]
    NetworkDockerBridgeCidrInvalid { value: String },

    #[error("Network provider '{value}' is not supported (supported: {supported})")]
    NetworkProviderUnsupported { value: String, supported: String },

    #[error("{subnet} overlaps with {other}")]
    Overlap { subnet: String, other: String },

    #[error("{supernet} does not fully contain {subnet}")]
    NotContained { subnet: String, supernet: String },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ClusterError>,
    },

    #[error("Secret not found: '{secret_id}' in organization {organization_id}")]
    SecretNotFound {
        secret_id: String,
        organization_id: u64,
    },

    #[error("Secret '{secret_id}' has type '{actual}', expected '{expected}'")]
    SecretTypeMismatch {
        secret_id: String,
        expected: String,
        actual: String,
    },

    #[error("Cluster already exists: '{name}' in organization {organization_id}")]
    AlreadyExists { name: String, organization_id: u64 },

    #[error("Cluster not found: '{name}' in organization {organization_id}")]
    NotFound { name: String, organization_id: u64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Stable classification of a [`ClusterError`], independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LocationEmpty,
    ClusterNameInvalid,
    UnsupportedDistribution,
    NodePoolsEmpty,
    NodePoolInvalid,
    MasterNodePoolMissing,
    NetworkServiceCidrInvalid,
    NetworkServiceCidrIsReserved,
    NetworkDnsServiceIpNotValid,
    NetworkDnsServiceIpNotInsideServiceCidr,
    NetworkDnsServiceIpInvalidValue,
    NetworkPodCidrRequired,
    NetworkPodCidrInvalid,
    NetworkDockerBridgeCidrInvalid,
    NetworkProviderUnsupported,
    Overlap,
    NotContained,
    SecretNotFound,
    SecretTypeMismatch,
    AlreadyExists,
    NotFound,
    Storage,
    Config,
    Io,
    Parse,
}

impl ErrorKind {
    /// Errors that are a deterministic function of the submitted request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorKind::LocationEmpty
                | ErrorKind::ClusterNameInvalid
                | ErrorKind::UnsupportedDistribution
                | ErrorKind::NodePoolsEmpty
                | ErrorKind::NodePoolInvalid
                | ErrorKind::MasterNodePoolMissing
                | ErrorKind::NetworkServiceCidrInvalid
                | ErrorKind::NetworkServiceCidrIsReserved
                | ErrorKind::NetworkDnsServiceIpNotValid
                | ErrorKind::NetworkDnsServiceIpNotInsideServiceCidr
                | ErrorKind::NetworkDnsServiceIpInvalidValue
                | ErrorKind::NetworkPodCidrRequired
                | ErrorKind::NetworkPodCidrInvalid
                | ErrorKind::NetworkDockerBridgeCidrInvalid
                | ErrorKind::NetworkProviderUnsupported
                | ErrorKind::Overlap
                | ErrorKind::NotContained
        )
    }
}

impl ClusterError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn node_pool_invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NodePoolInvalid {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wraps this error with a context message. The wrapped error stays
    /// reachable through [`ClusterError::root_cause`].
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping every context layer.
    pub fn root_cause(&self) -> &ClusterError {
        let mut current = self;
        while let ClusterError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Kind of the root cause.
    pub fn kind(&self) -> ErrorKind {
        match self.root_cause() {
            ClusterError::LocationEmpty => ErrorKind::LocationEmpty,
            ClusterError::ClusterNameInvalid(_) => ErrorKind::ClusterNameInvalid,
            ClusterError::UnsupportedDistribution { .. } => ErrorKind::UnsupportedDistribution,
            ClusterError::NodePoolsEmpty => ErrorKind::NodePoolsEmpty,
            ClusterError::NodePoolInvalid { .. } => ErrorKind::NodePoolInvalid,
            ClusterError::MasterNodePoolMissing => ErrorKind::MasterNodePoolMissing,
            ClusterError::NetworkServiceCidrInvalid { .. } => ErrorKind::NetworkServiceCidrInvalid,
            ClusterError::NetworkServiceCidrIsReserved { .. } => {
                ErrorKind::NetworkServiceCidrIsReserved
            }
            ClusterError::NetworkDnsServiceIpNotValid { .. } => {
                ErrorKind::NetworkDnsServiceIpNotValid
            }
            ClusterError::NetworkDnsServiceIpNotInsideServiceCidr { .. } => {
                ErrorKind::NetworkDnsServiceIpNotInsideServiceCidr
            }
            ClusterError::NetworkDnsServiceIpInvalidValue { .. } => {
                ErrorKind::NetworkDnsServiceIpInvalidValue
            }
            ClusterError::NetworkPodCidrRequired { .. } => ErrorKind::NetworkPodCidrRequired,
            ClusterError::NetworkPodCidrInvalid { .. } => ErrorKind::NetworkPodCidrInvalid,
            ClusterError::NetworkDockerBridgeCidrInvalid { .. } => {
                ErrorKind::NetworkDockerBridgeCidrInvalid
            }
            ClusterError::NetworkProviderUnsupported { .. } => {
                ErrorKind::NetworkProviderUnsupported
            }
            ClusterError::Overlap { .. } => ErrorKind::Overlap,
            ClusterError::NotContained { .. } => ErrorKind::NotContained,
            ClusterError::SecretNotFound { .. } => ErrorKind::SecretNotFound,
            ClusterError::SecretTypeMismatch { .. } => ErrorKind::SecretTypeMismatch,
            ClusterError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            ClusterError::NotFound { .. } => ErrorKind::NotFound,
            ClusterError::Storage(_) => ErrorKind::Storage,
            ClusterError::ConfigError(_) => ErrorKind::Config,
            ClusterError::Io(_) => ErrorKind::Io,
            ClusterError::YamlParse(_)
            | ClusterError::TomlParse(_)
            | ClusterError::JsonParse(_) => ErrorKind::Parse,
            // root_cause never yields a Context
            ClusterError::Context { source, .. } => source.kind(),
        }
    }
}
