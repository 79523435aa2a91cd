// Cluster request commands

use crate::cli::display::TableRenderer;
use crate::domain::cluster::{ClusterDescriptor, ClusterFactory, CreateClusterRequest};
use crate::domain::config::PipelineConf;
use crate::infrastructure::constants::{DEFAULT_ORGANIZATION_ID, DEFAULT_USER_ID};
use crate::infrastructure::store::InMemorySecretStore;
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateCommand {
    /// Create request file (JSON, or YAML for .yaml/.yml)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: String,

    #[arg(long, default_value_t = DEFAULT_ORGANIZATION_ID)]
    pub organization_id: u64,

    #[arg(long, default_value_t = DEFAULT_USER_ID)]
    pub user_id: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateCommand {
    /// Create request file (JSON, or YAML for .yaml/.yml)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: String,

    #[arg(long, default_value_t = DEFAULT_ORGANIZATION_ID)]
    pub organization_id: u64,

    #[arg(long, default_value_t = DEFAULT_USER_ID)]
    pub user_id: u64,

    /// JSON array of secrets owned by the organization
    /// If not provided, the secret store is empty and every request fails the secret lookup
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<String>,

    #[arg(long, short = 'o', value_enum, default_value = "table")]
    pub output: OutputFormat,
}

impl ValidateCommand {
    pub async fn execute(&self, conf: &PipelineConf) -> anyhow::Result<()> {
        let request = CreateClusterRequest::from_file(&self.file)?;
        let factory = ClusterFactory::from_conf(conf)?;
        let renderer = TableRenderer::new();

        match factory.create_cluster(&request, self.organization_id, self.user_id) {
            Ok(model) => {
                println!("{}", renderer.render_validation(&request.name, Ok(())));
                println!("{}", renderer.render_cluster(&model));
                Ok(())
            }
            Err(err) => {
                println!("{}", renderer.render_validation(&request.name, Err(&err)));
                Err(err.into())
            }
        }
    }
}

impl CreateCommand {
    pub async fn execute(&self, conf: &PipelineConf) -> anyhow::Result<()> {
        let request = CreateClusterRequest::from_file(&self.file)?;
        let factory = ClusterFactory::from_conf(conf)?;

        let secrets = match self.secrets {
            Some(ref path) => InMemorySecretStore::from_file(path, self.organization_id)?,
            None => InMemorySecretStore::new(),
        };
        let descriptor = ClusterDescriptor::in_memory(factory, secrets);

        let record = descriptor
            .create_cluster(&request, self.organization_id, self.user_id)
            .await?;

        match self.output {
            OutputFormat::Table => {
                let renderer = TableRenderer::new();
                println!("{}", renderer.render_record(&record));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&record)?),
        }

        Ok(())
    }
}
