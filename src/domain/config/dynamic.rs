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

use crate::domain::config::PipelineConf;
use std::collections::HashMap;
use tracing::warn;

const KNOWN_KEYS: &[&str] = &[
    "aks.reserved-cidrs",
    "pke.service-cidr",
    "pke.pod-cidr",
    "pke.network-provider",
    "pke.supported-network-providers",
    "log.level",
];

pub fn apply_to_conf(configs: &HashMap<String, String>, conf: &mut PipelineConf) {
    if let Some(cidrs) = configs.get("aks.reserved-cidrs") {
        conf.aks.reserved_cidrs = split_list(cidrs);
    }

    if let Some(cidr) = configs.get("pke.service-cidr") {
        conf.pke.service_cidr = cidr.clone();
    }

    if let Some(cidr) = configs.get("pke.pod-cidr") {
        conf.pke.pod_cidr = cidr.clone();
    }

    if let Some(provider) = configs.get("pke.network-provider") {
        conf.pke.network_provider = provider.clone();
    }

    if let Some(providers) = configs.get("pke.supported-network-providers") {
        conf.pke.supported_network_providers = split_list(providers);
    }

    if let Some(level) = configs.get("log.level") {
        conf.log.level = level.clone();
    }

    for key in configs.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!(key = %key, "Ignoring unknown configuration property");
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
