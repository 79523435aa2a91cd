// CIDR helper commands

use crate::cli::display::TableRenderer;
use crate::domain::network::{
    address_count, parse_cidr, verify_no_overlap, verify_no_overlap_within_supernet,
};
use clap::{Parser, Subcommand};
use ipnetwork::IpNetwork;

#[derive(Parser, Debug, Clone)]
pub struct CidrCommand {
    #[command(subcommand)]
    pub action: CidrAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CidrAction {
    /// Print the first and last address of a CIDR block
    Range { cidr: String },

    /// Print the number of addresses in a CIDR block
    Count { cidr: String },

    /// Check that CIDR blocks do not overlap
    Overlap {
        #[arg(required = true, num_args = 1..)]
        cidrs: Vec<String>,

        /// Additionally require every block to lie inside this supernet
        #[arg(long)]
        supernet: Option<String>,
    },
}

impl CidrCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let renderer = TableRenderer::new();

        match &self.action {
            CidrAction::Range { cidr } => {
                let network = parse_network(cidr)?;
                println!("{}", renderer.render_cidr(&network));
            }
            CidrAction::Count { cidr } => {
                let network = parse_network(cidr)?;
                println!("{}", address_count(&network));
            }
            CidrAction::Overlap { cidrs, supernet } => {
                let subnets = cidrs
                    .iter()
                    .map(|c| parse_network(c))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                let supernet = supernet.as_deref().map(parse_network).transpose()?;

                let result = match supernet {
                    Some(ref supernet) => verify_no_overlap_within_supernet(&subnets, supernet),
                    None => verify_no_overlap(&subnets),
                };
                println!(
                    "{}",
                    renderer.render_overlap(&subnets, supernet.as_ref(), result.as_ref().copied())
                );
                result?;
            }
        }

        Ok(())
    }
}

fn parse_network(cidr: &str) -> anyhow::Result<IpNetwork> {
    parse_cidr(cidr).ok_or_else(|| anyhow::anyhow!("Invalid CIDR block: '{}'", cidr))
}
