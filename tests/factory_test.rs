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

use pipeline_kube::domain::provider::pke::{ROLE_MASTER, ROLE_WORKER};
use pipeline_kube::*;
use std::collections::BTreeMap;

const ORGANIZATION_ID: u64 = 1;
const USER_ID: u64 = 1;

mod test_utils {
    use super::*;

    pub fn create_test_aks_request(network: Option<NetworkCreate>) -> CreateClusterRequest {
        let mut node_pools = BTreeMap::new();
        node_pools.insert(
            "agentpool1".to_string(),
            NodePoolCreate {
                autoscaling: true,
                min_count: 1,
                max_count: 2,
                count: 1,
                instance_type: "Standard_D2_v2".to_string(),
                labels: BTreeMap::new(),
            },
        );

        CreateClusterRequest {
            name: "test-cluster".to_string(),
            location: "eastus".to_string(),
            cloud: Cloud::Azure,
            secret_id: "test-secret".to_string(),
            properties: CreateClusterProperties::Aks(CreateClusterAks {
                resource_group: "test-rg".to_string(),
                kubernetes_version: "1.27.3".to_string(),
                node_pools,
                network,
            }),
        }
    }

    pub fn create_test_network(
        service_cidr: &str,
        dns_service_ip: &str,
        pod_cidr: Option<&str>,
        network_plugin: NetworkPlugin,
    ) -> NetworkCreate {
        NetworkCreate {
            service_cidr: service_cidr.to_string(),
            pod_cidr: pod_cidr.map(|s| s.to_string()),
            dns_service_ip: dns_service_ip.to_string(),
            docker_bridge_cidr: Some("172.17.0.1/16".to_string()),
            network_plugin,
        }
    }

    pub fn create_test_pke_request(cloud: Cloud, network: PkeNetworkCreate) -> CreateClusterRequest {
        CreateClusterRequest {
            name: "test-pke".to_string(),
            location: "eu-west-1".to_string(),
            cloud,
            secret_id: "test-secret".to_string(),
            properties: CreateClusterProperties::Pke(CreateClusterPke {
                kubernetes: PkeKubernetes {
                    version: "1.27.3".to_string(),
                    rbac: true,
                    network,
                },
                node_pools: vec![
                    PkeNodePoolCreate {
                        name: "master".to_string(),
                        roles: vec![ROLE_MASTER.to_string()],
                        autoscaling: false,
                        min_count: 0,
                        max_count: 0,
                        count: 1,
                        instance_type: "c5.large".to_string(),
                        labels: BTreeMap::new(),
                    },
                    PkeNodePoolCreate {
                        name: "workers".to_string(),
                        roles: vec![ROLE_WORKER.to_string()],
                        autoscaling: true,
                        min_count: 1,
                        max_count: 5,
                        count: 2,
                        instance_type: "c5.xlarge".to_string(),
                        labels: BTreeMap::new(),
                    },
                ],
            }),
        }
    }
}

use test_utils::*;

fn create(request: &CreateClusterRequest) -> Result<ClusterModel> {
    create_common_cluster_from_request(request, ORGANIZATION_ID, USER_ID)
}

#[test]
fn test_aks_azure_cni_leaves_pod_cidr_unset() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.10",
        None,
        NetworkPlugin::Azure,
    )));

    let model = create(&request).unwrap();
    let aks = model.aks().unwrap();
    assert_eq!(model.name, "test-cluster");
    assert_eq!(model.location, "eastus");
    assert_eq!(model.distribution, Distribution::Aks);
    assert_eq!(model.organization_id, ORGANIZATION_ID);
    assert_eq!(model.created_by, USER_ID);
    assert_eq!(aks.network_plugin, Some(NetworkPlugin::Azure));
    assert_eq!(aks.pod_cidr, None);
    assert_eq!(aks.service_cidr.as_deref(), Some("10.0.0.0/16"));
    assert_eq!(aks.dns_service_ip.as_deref(), Some("10.0.0.10"));
    assert_eq!(aks.docker_bridge_cidr.as_deref(), Some("172.17.0.1/16"));
}

#[test]
fn test_aks_azure_cni_drops_supplied_pod_cidr() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.10",
        Some("10.244.0.0/16"),
        NetworkPlugin::Azure,
    )));

    let model = create(&request).unwrap();
    assert_eq!(model.aks().unwrap().pod_cidr, None);
}

#[test]
fn test_aks_kubenet_keeps_pod_cidr() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.10",
        Some("10.244.0.0/16"),
        NetworkPlugin::Kubenet,
    )));

    let model = create(&request).unwrap();
    let aks = model.aks().unwrap();
    assert_eq!(aks.network_plugin, Some(NetworkPlugin::Kubenet));
    assert_eq!(aks.pod_cidr.as_deref(), Some("10.244.0.0/16"));
}

#[test]
fn test_aks_reserved_service_cidr() {
    for dns in ["169.254.0.10", "10.0.0.10", "not-an-ip"] {
        let request = create_test_aks_request(Some(create_test_network(
            "169.254.0.0/16",
            dns,
            None,
            NetworkPlugin::Azure,
        )));

        let err = create(&request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkServiceCidrIsReserved);
    }
}

#[test]
fn test_aks_dns_service_ip_outside_service_cidr() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "11.0.0.1",
        None,
        NetworkPlugin::Azure,
    )));

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkDnsServiceIpNotInsideServiceCidr);
    assert!(matches!(
        err.root_cause(),
        ClusterError::NetworkDnsServiceIpNotInsideServiceCidr { value, .. } if value == "11.0.0.1"
    ));
}

#[test]
fn test_aks_service_cidr_with_signed_or_padded_prefix() {
    for service_cidr in ["10.0.0.0/+16", " 10.0.0.0/16", "10.0.0.0/16 "] {
        let request = create_test_aks_request(Some(create_test_network(
            service_cidr,
            "10.0.0.10",
            None,
            NetworkPlugin::Azure,
        )));

        let err = create(&request).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::NetworkServiceCidrInvalid,
            "{:?}",
            service_cidr
        );
    }
}

#[test]
fn test_aks_dns_service_ip_with_prefix() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "15.12.12.2/16",
        None,
        NetworkPlugin::Azure,
    )));

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkDnsServiceIpNotValid);
}

#[test]
fn test_aks_dns_service_ip_on_api_server_address() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.1",
        None,
        NetworkPlugin::Azure,
    )));

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkDnsServiceIpInvalidValue);
}

#[test]
fn test_network_errors_carry_cluster_context() {
    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.1",
        None,
        NetworkPlugin::Azure,
    )));

    let err = create(&request).unwrap_err();
    assert!(matches!(err, ClusterError::Context { .. }));
    assert!(err.to_string().contains("test-cluster"));
    assert!(err.kind().is_validation());
}

#[test]
fn test_empty_location_fails_before_network_validation() {
    // The network block is invalid too; location must still win.
    let mut request = create_test_aks_request(Some(create_test_network(
        "garbage",
        "garbage",
        None,
        NetworkPlugin::Kubenet,
    )));
    request.location = String::new();

    let err = create(&request).unwrap_err();
    assert!(matches!(err, ClusterError::LocationEmpty));
}

#[test]
fn test_invalid_cluster_name() {
    let mut request = create_test_aks_request(None);
    request.name = "Test_Cluster".to_string();

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClusterNameInvalid);
}

#[test]
fn test_aks_without_network_block() {
    let model = create(&create_test_aks_request(None)).unwrap();
    let aks = model.aks().unwrap();
    assert_eq!(aks.network_plugin, None);
    assert_eq!(aks.service_cidr, None);
    assert_eq!(model.node_pools().len(), 1);
    assert_eq!(model.node_pools()[0].name, "agentpool1");
    assert_eq!(model.node_pools()[0].created_by, USER_ID);
}

#[test]
fn test_aks_on_amazon_is_unsupported() {
    let mut request = create_test_aks_request(None);
    request.cloud = Cloud::Amazon;

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedDistribution);
}

#[test]
fn test_aks_without_node_pools() {
    let mut request = create_test_aks_request(None);
    if let CreateClusterProperties::Aks(ref mut aks) = request.properties {
        aks.node_pools.clear();
    }

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NodePoolsEmpty);
}

#[test]
fn test_pke_defaults_on_both_clouds() {
    for cloud in [Cloud::Amazon, Cloud::Azure] {
        let request = create_test_pke_request(cloud, PkeNetworkCreate::default());
        let model = create(&request).unwrap();
        let pke = model.pke().unwrap();

        assert_eq!(model.cloud, cloud);
        assert_eq!(model.distribution, Distribution::Pke);
        assert_eq!(model.kubernetes_version(), "1.27.3");
        assert_eq!(pke.service_cidr, "10.10.0.0/16");
        assert_eq!(pke.pod_cidr, "10.20.0.0/16");
        assert_eq!(pke.network_provider, "weave");
        assert_eq!(model.node_pools().len(), 2);
    }
}

#[test]
fn test_pke_overlapping_network() {
    let network = PkeNetworkCreate {
        service_cidr: Some("10.0.0.0/8".to_string()),
        pod_cidr: Some("10.20.0.0/16".to_string()),
        ..PkeNetworkCreate::default()
    };
    let request = create_test_pke_request(Cloud::Amazon, network);

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overlap);
}

#[test]
fn test_pke_unsupported_provider() {
    let network = PkeNetworkCreate {
        provider: Some("flannel".to_string()),
        ..PkeNetworkCreate::default()
    };
    let request = create_test_pke_request(Cloud::Amazon, network);

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkProviderUnsupported);
}

#[test]
fn test_pke_requires_master_pool() {
    let mut request = create_test_pke_request(Cloud::Amazon, PkeNetworkCreate::default());
    if let CreateClusterProperties::Pke(ref mut pke) = request.properties {
        pke.node_pools.retain(|p| !p.roles.iter().any(|r| r == ROLE_MASTER));
    }

    let err = create(&request).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MasterNodePoolMissing);
}

#[test]
fn test_factory_uses_configured_reserved_ranges() {
    let mut conf = PipelineConf::default();
    conf.aks.reserved_cidrs = vec!["10.0.0.0/8".to_string()];
    let factory = ClusterFactory::from_conf(&conf).unwrap();

    let request = create_test_aks_request(Some(create_test_network(
        "10.0.0.0/16",
        "10.0.0.10",
        None,
        NetworkPlugin::Azure,
    )));
    let err = factory
        .create_cluster(&request, ORGANIZATION_ID, USER_ID)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkServiceCidrIsReserved);

    // The link-local block stays reserved even when the configured list omits it.
    let request = create_test_aks_request(Some(create_test_network(
        "169.254.0.0/16",
        "169.254.0.10",
        None,
        NetworkPlugin::Azure,
    )));
    let err = factory
        .create_cluster(&request, ORGANIZATION_ID, USER_ID)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkServiceCidrIsReserved);

    // Other built-in ranges are replaced by the configured list.
    let request = create_test_aks_request(Some(create_test_network(
        "172.30.0.0/16",
        "172.30.0.10",
        None,
        NetworkPlugin::Azure,
    )));
    assert!(factory
        .create_cluster(&request, ORGANIZATION_ID, USER_ID)
        .is_ok());
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "name": "json-cluster",
        "location": "westeurope",
        "cloud": "azure",
        "secretId": "s1",
        "properties": {
            "aks": {
                "resourceGroup": "rg",
                "kubernetesVersion": "1.27.3",
                "nodePools": {
                    "pool1": {"count": 1, "instanceType": "Standard_D2_v2"}
                },
                "network": {
                    "serviceCidr": "10.0.0.0/16",
                    "dnsServiceIp": "10.0.0.10",
                    "podCidr": "10.244.0.0/16",
                    "networkPlugin": "kubenet"
                }
            }
        }
    }"#;

    let request = CreateClusterRequest::from_json(json).unwrap();
    let model = create(&request).unwrap();
    assert_eq!(model.aks().unwrap().pod_cidr.as_deref(), Some("10.244.0.0/16"));
    assert_eq!(model.aks().unwrap().docker_bridge_cidr, None);
}
