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

//! Provider-agnostic "create cluster" request envelope

use crate::domain::provider::aks::CreateClusterAks;
use crate::domain::provider::pke::CreateClusterPke;
use crate::shared::error::{ClusterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    Azure,
    Amazon,
}

impl Cloud {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cloud::Azure => "azure",
            Cloud::Amazon => "amazon",
        }
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Cloud {
    type Err = ClusterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "azure" => Ok(Cloud::Azure),
            "amazon" => Ok(Cloud::Amazon),
            _ => Err(ClusterError::ConfigError(format!("Invalid cloud: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    Aks,
    Pke,
}

impl Distribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Aks => "aks",
            Distribution::Pke => "pke",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-specific payload. Exactly one variant is present on the wire:
/// `{"aks": {...}}` or `{"pke": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateClusterProperties {
    Aks(CreateClusterAks),
    Pke(CreateClusterPke),
}

impl CreateClusterProperties {
    pub fn distribution(&self) -> Distribution {
        match self {
            CreateClusterProperties::Aks(_) => Distribution::Aks,
            CreateClusterProperties::Pke(_) => Distribution::Pke,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterRequest {
    pub name: String,
    #[serde(default)]
    pub location: String,
    pub cloud: Cloud,
    #[serde(default)]
    pub secret_id: String,
    pub properties: CreateClusterProperties,
}

impl CreateClusterRequest {
    pub fn distribution(&self) -> Distribution {
        self.properties.distribution()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a request from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            ClusterError::from(e).with_context(format!("Failed to read {}", path.display()))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }
}
