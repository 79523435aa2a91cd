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

use super::{NetworkCreate, NetworkPlugin};
use crate::domain::config::AksConf;
use crate::domain::network::cidr::{
    address_range, int_to_ip, ip_to_int, parse_cidr, parse_ip, verify_no_overlap,
};
use crate::infrastructure::constants::{AKS_LINK_LOCAL_CIDR, AKS_RESERVED_CIDRS};
use crate::shared::error::{ClusterError, Result};
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use tracing::debug;

/// Network rules for AKS clusters.
#[derive(Debug, Clone)]
pub struct AksNetworkValidator {
    reserved_ranges: Vec<IpNetwork>,
}

impl Default for AksNetworkValidator {
    fn default() -> Self {
        Self::new(
            AKS_RESERVED_CIDRS
                .iter()
                .filter_map(|s| parse_cidr(s))
                .collect(),
        )
    }
}

impl AksNetworkValidator {
    /// The link-local block is always reserved; `reserved_ranges` adds to it.
    pub fn new(reserved_ranges: Vec<IpNetwork>) -> Self {
        let mut ranges: Vec<IpNetwork> = parse_cidr(AKS_LINK_LOCAL_CIDR).into_iter().collect();
        for range in reserved_ranges {
            if !ranges.contains(&range) {
                ranges.push(range);
            }
        }
        Self {
            reserved_ranges: ranges,
        }
    }

    pub fn from_conf(conf: &AksConf) -> Result<Self> {
        let reserved_ranges = conf
            .reserved_cidrs
            .iter()
            .map(|s| {
                parse_cidr(s).ok_or_else(|| {
                    ClusterError::config_error(format!("Invalid aks.reserved_cidrs entry: {}", s))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(reserved_ranges))
    }

    pub fn reserved_ranges(&self) -> &[IpNetwork] {
        &self.reserved_ranges
    }

    /// Checks run in a fixed order and stop at the first failure.
    pub fn validate_network(&self, network: &NetworkCreate, plugin: NetworkPlugin) -> Result<()> {
        let service_cidr = parse_cidr(&network.service_cidr).ok_or_else(|| {
            ClusterError::NetworkServiceCidrInvalid {
                value: network.service_cidr.clone(),
            }
        })?;

        for reserved in &self.reserved_ranges {
            if verify_no_overlap(&[service_cidr, *reserved]).is_err() {
                return Err(ClusterError::NetworkServiceCidrIsReserved {
                    value: network.service_cidr.clone(),
                    reserved: reserved.to_string(),
                });
            }
        }

        let dns_service_ip = parse_ip(&network.dns_service_ip).ok_or_else(|| {
            ClusterError::NetworkDnsServiceIpNotValid {
                value: network.dns_service_ip.clone(),
            }
        })?;

        if !service_cidr.contains(dns_service_ip) {
            return Err(ClusterError::NetworkDnsServiceIpNotInsideServiceCidr {
                value: network.dns_service_ip.clone(),
                service_cidr: service_cidr.to_string(),
            });
        }

        if reserved_service_addresses(&service_cidr).contains(&dns_service_ip) {
            return Err(ClusterError::NetworkDnsServiceIpInvalidValue {
                value: network.dns_service_ip.clone(),
                service_cidr: service_cidr.to_string(),
            });
        }

        let pod_cidr = if plugin.requires_pod_cidr() {
            let value = network
                .pod_cidr
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ClusterError::NetworkPodCidrRequired {
                    plugin: plugin.to_string(),
                })?;
            Some(parse_cidr(value).ok_or_else(|| ClusterError::NetworkPodCidrInvalid {
                value: value.to_string(),
            })?)
        } else {
            None
        };

        let docker_bridge_cidr = match network.docker_bridge_cidr.as_deref() {
            Some(value) if !value.is_empty() => Some(parse_cidr(value).ok_or_else(|| {
                ClusterError::NetworkDockerBridgeCidrInvalid {
                    value: value.to_string(),
                }
            })?),
            _ => None,
        };

        let blocks: Vec<IpNetwork> = std::iter::once(service_cidr)
            .chain(pod_cidr)
            .chain(docker_bridge_cidr)
            .collect();
        verify_no_overlap(&blocks)?;

        debug!(
            service_cidr = %service_cidr,
            dns_service_ip = %dns_service_ip,
            plugin = %plugin,
            "AKS network validated"
        );
        Ok(())
    }
}

/// Addresses of the service CIDR that may not host the DNS service: the
/// network address, the first host (taken by the Kubernetes API service)
/// and the last address.
fn reserved_service_addresses(service_cidr: &IpNetwork) -> [IpAddr; 3] {
    let (first, last) = address_range(service_cidr);
    let (first_int, bits) = ip_to_int(first);
    let api_server = if first == last {
        first
    } else {
        int_to_ip(first_int + 1, bits)
    };
    [first, api_server, last]
}
