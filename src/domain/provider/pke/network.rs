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

use crate::domain::config::PkeConf;
use crate::domain::network::cidr::{parse_cidr, verify_no_overlap};
use crate::shared::error::{ClusterError, Result};
use tracing::debug;

/// Resolved PKE network settings, request values merged over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkeNetwork {
    pub service_cidr: String,
    pub pod_cidr: String,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct PkeNetworkValidator {
    conf: PkeConf,
}

impl Default for PkeNetworkValidator {
    fn default() -> Self {
        Self::new(PkeConf::default())
    }
}

impl PkeNetworkValidator {
    pub fn new(conf: PkeConf) -> Self {
        Self { conf }
    }

    pub fn conf(&self) -> &PkeConf {
        &self.conf
    }

    /// Fill unset or empty request fields from the configured defaults.
    pub fn resolve(
        &self,
        service_cidr: Option<&str>,
        pod_cidr: Option<&str>,
        provider: Option<&str>,
    ) -> PkeNetwork {
        fn or_default(value: Option<&str>, default: &str) -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        PkeNetwork {
            service_cidr: or_default(service_cidr, &self.conf.service_cidr),
            pod_cidr: or_default(pod_cidr, &self.conf.pod_cidr),
            provider: or_default(provider, &self.conf.network_provider),
        }
    }

    pub fn validate_network(&self, network: &PkeNetwork) -> Result<()> {
        let service_cidr = parse_cidr(&network.service_cidr).ok_or_else(|| {
            ClusterError::NetworkServiceCidrInvalid {
                value: network.service_cidr.clone(),
            }
        })?;

        let pod_cidr =
            parse_cidr(&network.pod_cidr).ok_or_else(|| ClusterError::NetworkPodCidrInvalid {
                value: network.pod_cidr.clone(),
            })?;

        if !self
            .conf
            .supported_network_providers
            .iter()
            .any(|p| p == &network.provider)
        {
            return Err(ClusterError::NetworkProviderUnsupported {
                value: network.provider.clone(),
                supported: self.conf.supported_network_providers.join(", "),
            });
        }

        verify_no_overlap(&[service_cidr, pod_cidr])?;

        debug!(
            service_cidr = %service_cidr,
            pod_cidr = %pod_cidr,
            provider = %network.provider,
            "PKE network validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults() {
        let validator = PkeNetworkValidator::default();
        let network = validator.resolve(None, Some(""), Some("calico"));
        assert_eq!(network.service_cidr, "10.10.0.0/16");
        assert_eq!(network.pod_cidr, "10.20.0.0/16");
        assert_eq!(network.provider, "calico");
        assert!(validator.validate_network(&network).is_ok());
    }

    #[test]
    fn test_unsupported_provider() {
        let validator = PkeNetworkValidator::default();
        let network = validator.resolve(None, None, Some("flannel"));
        let err = validator.validate_network(&network).unwrap_err();
        assert!(matches!(err, ClusterError::NetworkProviderUnsupported { .. }));
    }

    #[test]
    fn test_overlapping_service_and_pod_cidr() {
        let validator = PkeNetworkValidator::default();
        let network = validator.resolve(Some("10.0.0.0/8"), Some("10.20.0.0/16"), None);
        let err = validator.validate_network(&network).unwrap_err();
        assert!(matches!(err, ClusterError::Overlap { .. }));
    }

    #[test]
    fn test_invalid_pod_cidr() {
        let validator = PkeNetworkValidator::default();
        let network = validator.resolve(None, Some("10.20.0.0/40"), None);
        let err = validator.validate_network(&network).unwrap_err();
        assert!(matches!(err, ClusterError::NetworkPodCidrInvalid { .. }));
    }
}
