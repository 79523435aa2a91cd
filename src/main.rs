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

use clap::Parser;
use pipeline_kube::cli::{commands::Commands, CliArgs};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let conf = args.load_conf()?;

    // Initialize tracing
    let level: tracing::Level = conf.log.level.parse()?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match args.config_path() {
        Some(path) => info!(path = %path, "Loaded configuration"),
        None => info!("No configuration file specified, using default settings"),
    }

    match args.command {
        Commands::Validate(cmd) => cmd.execute(&conf).await,
        Commands::Create(cmd) => cmd.execute(&conf).await,
        Commands::Cidr(cmd) => cmd.execute().await,
    }
}
