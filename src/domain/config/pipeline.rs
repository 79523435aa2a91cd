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

//! Validation settings, loaded from `pipeline.toml`

use crate::domain::network::cidr::parse_cidr;
use crate::infrastructure::constants::{
    AKS_RESERVED_CIDRS, DEFAULT_LOG_LEVEL, PIPELINE_CONF_FILE_ENV, PKE_DEFAULT_NETWORK_PROVIDER,
    PKE_DEFAULT_POD_CIDR, PKE_DEFAULT_SERVICE_CIDR, PKE_SUPPORTED_NETWORK_PROVIDERS,
};
use crate::shared::error::{ClusterError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

// ============================================================================
// Main configuration
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConf {
    pub aks: AksConf,
    pub pke: PkeConf,
    pub log: LogConf,
}

impl PipelineConf {
    /// Load configuration from a TOML file
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let content = read_to_string(path.as_ref()).map_err(|e| {
            ClusterError::from(e)
                .with_context(format!("Failed to read config file {}", path.as_ref()))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    /// Explicit path, then `PIPELINE_CONF_FILE`. `None` means built-in defaults.
    pub fn resolve_path(path: Option<&str>) -> Option<String> {
        if let Some(path) = path {
            return Some(path.to_string());
        }

        std::env::var(PIPELINE_CONF_FILE_ENV)
            .ok()
            .filter(|p| !p.is_empty())
    }

    pub fn load(path: Option<&str>) -> Result<Self> {
        match Self::resolve_path(path) {
            Some(path) => Self::from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for cidr in &self.aks.reserved_cidrs {
            if parse_cidr(cidr).is_none() {
                return Err(ClusterError::config_error(format!(
                    "Invalid aks.reserved_cidrs entry: {}",
                    cidr
                )));
            }
        }

        for (key, value) in [
            ("pke.service_cidr", &self.pke.service_cidr),
            ("pke.pod_cidr", &self.pke.pod_cidr),
        ] {
            if parse_cidr(value).is_none() {
                return Err(ClusterError::config_error(format!(
                    "Invalid {}: {}",
                    key, value
                )));
            }
        }

        if self.pke.supported_network_providers.is_empty() {
            return Err(ClusterError::config_error(
                "pke.supported_network_providers must not be empty",
            ));
        }

        if !self
            .pke
            .supported_network_providers
            .contains(&self.pke.network_provider)
        {
            return Err(ClusterError::config_error(format!(
                "pke.network_provider '{}' is not in pke.supported_network_providers",
                self.pke.network_provider
            )));
        }

        if self.log.level.parse::<tracing::Level>().is_err() {
            return Err(ClusterError::config_error(format!(
                "Invalid log.level: {}",
                self.log.level
            )));
        }

        Ok(())
    }
}

// ============================================================================
// AKS configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AksConf {
    /// Blocks a service CIDR must not overlap.
    pub reserved_cidrs: Vec<String>,
}

impl Default for AksConf {
    fn default() -> Self {
        Self {
            reserved_cidrs: AKS_RESERVED_CIDRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// PKE configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PkeConf {
    pub service_cidr: String,
    pub pod_cidr: String,
    pub network_provider: String,
    pub supported_network_providers: Vec<String>,
}

impl Default for PkeConf {
    fn default() -> Self {
        Self {
            service_cidr: PKE_DEFAULT_SERVICE_CIDR.to_string(),
            pod_cidr: PKE_DEFAULT_POD_CIDR.to_string(),
            network_provider: PKE_DEFAULT_NETWORK_PROVIDER.to_string(),
            supported_network_providers: PKE_SUPPORTED_NETWORK_PROVIDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

// ============================================================================
// Logging configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConf {
    pub level: String,
}

impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
