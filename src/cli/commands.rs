// CLI command definitions

use super::cidr::CidrCommand;
use super::cluster::{CreateCommand, ValidateCommand};
use crate::domain::config::{apply_to_conf, PipelineConf};
use clap::Parser;
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[command(
    name = "pipeline-kube",
    version,
    about = "Validate and model Kubernetes cluster create requests",
    long_about = "Turns AKS and PKE cluster create requests into validated cluster models, \
                  with CIDR helpers for planning cluster networks"
)]
pub struct CliArgs {
    /// Path to pipeline configuration file (TOML)
    /// If not provided, reads PIPELINE_CONF_FILE, then falls back to defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Dynamic configuration properties (-D key=value)
    ///
    /// Keys: aks.reserved-cidrs, pke.service-cidr, pke.pod-cidr, pke.network-provider,
    /// pke.supported-network-providers (lists are comma-separated), log.level
    ///
    /// Example: -Dpke.network-provider=calico -Daks.reserved-cidrs=169.254.0.0/16,192.0.2.0/24
    #[arg(short = 'D', global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Log level (trace, debug, info, warn, error); overrides log.level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Validate a create request and print the resulting cluster model
    Validate(ValidateCommand),

    /// Create a cluster from a request (secret check, duplicate check, store)
    Create(CreateCommand),

    /// CIDR helpers
    Cidr(CidrCommand),
}

impl CliArgs {
    /// Configuration file in effect, if any.
    pub fn config_path(&self) -> Option<String> {
        PipelineConf::resolve_path(self.config.as_deref())
    }

    /// Resolve configuration: file > -D overrides > --log-level.
    pub fn load_conf(&self) -> anyhow::Result<PipelineConf> {
        let mut conf = PipelineConf::load(self.config.as_deref())?;

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_conf(&dynamic_configs, &mut conf);
        }

        if let Some(ref level) = self.log_level {
            conf.log.level = level.clone();
        }

        conf.validate()?;
        Ok(conf)
    }
}

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for config in configs {
        let parts: Vec<&str> = config.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            ));
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        if key.is_empty() {
            return Err(format!("Empty key in config: '{}'", config));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dynamic_configs() {
        let configs = vec![
            "pke.network-provider=calico".to_string(),
            "aks.reserved-cidrs=169.254.0.0/16,192.0.2.0/24".to_string(),
        ];
        let map = parse_dynamic_configs(&configs).unwrap();
        assert_eq!(map.get("pke.network-provider").unwrap(), "calico");
        assert_eq!(
            map.get("aks.reserved-cidrs").unwrap(),
            "169.254.0.0/16,192.0.2.0/24"
        );
    }

    #[test]
    fn test_parse_dynamic_configs_rejects_bad_input() {
        assert!(parse_dynamic_configs(&["novalue".to_string()]).is_err());
        assert!(parse_dynamic_configs(&["=value".to_string()]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "pipeline-kube",
            "cidr",
            "count",
            "10.0.0.0/8",
            "--log-level",
            "debug",
            "-Dpke.pod-cidr=10.30.0.0/16",
        ])
        .unwrap();

        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.properties, vec!["pke.pod-cidr=10.30.0.0/16"]);
        assert_eq!(args.config, None);

        let conf = args.load_conf().unwrap();
        assert_eq!(conf.log.level, "debug");
        assert_eq!(conf.pke.pod_cidr, "10.30.0.0/16");
    }
}
