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

use pipeline_kube::domain::config::apply_to_conf;
use pipeline_kube::*;
use std::collections::HashMap;
use std::io::Write;

fn write_conf(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_conf_from_file() {
    let file = write_conf(
        r#"
[aks]
reserved_cidrs = ["169.254.0.0/16", "10.0.0.0/8"]

[pke]
service_cidr = "10.96.0.0/12"
pod_cidr = "192.168.0.0/16"
network_provider = "calico"

[log]
level = "warn"
"#,
    );

    let path = file.path().to_str().unwrap();
    let conf = PipelineConf::load(Some(path)).unwrap();
    assert!(conf.validate().is_ok());
    assert_eq!(conf.aks.reserved_cidrs.len(), 2);
    assert_eq!(conf.pke.service_cidr, "10.96.0.0/12");
    assert_eq!(conf.pke.network_provider, "calico");
    assert_eq!(conf.pke.supported_network_providers.len(), 3);
    assert_eq!(conf.log.level, "warn");

    assert!(ClusterFactory::from_conf(&conf).is_ok());
    let validator = AksNetworkValidator::from_conf(&conf.aks).unwrap();
    assert_eq!(validator.reserved_ranges().len(), 2);
}

#[test]
fn test_missing_conf_file() {
    let err = PipelineConf::from("/nonexistent/pipeline.toml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("/nonexistent/pipeline.toml"));
}

#[test]
fn test_malformed_conf_file() {
    let file = write_conf("[pke\nservice_cidr = ");
    let err = PipelineConf::from(file.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_invalid_conf_is_rejected_by_factory() {
    let file = write_conf(
        r#"
[pke]
network_provider = "flannel"
"#,
    );
    let conf = PipelineConf::from(file.path().to_str().unwrap()).unwrap();

    let err = ClusterFactory::from_conf(&conf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_dynamic_overrides_apply_after_file() {
    let file = write_conf(
        r#"
[pke]
network_provider = "calico"
"#,
    );
    let mut conf = PipelineConf::from(file.path().to_str().unwrap()).unwrap();

    let overrides = HashMap::from([
        ("pke.network-provider".to_string(), "cilium".to_string()),
        ("aks.reserved-cidrs".to_string(), "192.0.2.0/24".to_string()),
    ]);
    apply_to_conf(&overrides, &mut conf);

    assert_eq!(conf.pke.network_provider, "cilium");
    assert_eq!(conf.aks.reserved_cidrs, vec!["192.0.2.0/24".to_string()]);
    assert!(conf.validate().is_ok());
}

#[test]
fn test_empty_reserved_list_keeps_link_local_reserved() {
    let mut conf = PipelineConf::default();
    let overrides = HashMap::from([("aks.reserved-cidrs".to_string(), String::new())]);
    apply_to_conf(&overrides, &mut conf);
    assert!(conf.aks.reserved_cidrs.is_empty());
    assert!(conf.validate().is_ok());

    let request = CreateClusterRequest::from_json(
        r#"{
            "name": "link-local",
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
                        "serviceCidr": "169.254.0.0/16",
                        "dnsServiceIp": "169.254.0.10",
                        "networkPlugin": "azure"
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let factory = ClusterFactory::from_conf(&conf).unwrap();
    let err = factory.create_cluster(&request, 1, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkServiceCidrIsReserved);
}
