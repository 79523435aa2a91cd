//! Table rendering for CLI output

use super::{ColorTheme, StatusIcon};
use crate::domain::cluster::{ClusterModel, NodePoolModel, ProviderModel};
use crate::domain::network::{address_count, address_range};
use crate::infrastructure::store::ClusterRecord;
use crate::shared::error::ClusterError;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use ipnetwork::IpNetwork;

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a cluster model: summary, network settings and node pools
    pub fn render_cluster(&self, model: &ClusterModel) -> String {
        let mut summary = Table::new();
        summary
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut rows: Vec<(&str, String)> = vec![
            ("Name", model.name.clone()),
            ("Location", model.location.clone()),
            ("Cloud", model.cloud.to_string()),
            ("Distribution", model.distribution.to_string()),
            ("Kubernetes", model.kubernetes_version().to_string()),
            ("Secret", model.secret_id.clone()),
            ("Organization", model.organization_id.to_string()),
        ];

        match &model.provider {
            ProviderModel::Aks(aks) => {
                rows.push(("Resource group", aks.resource_group.clone()));
                if let Some(plugin) = aks.network_plugin {
                    rows.push(("Network plugin", plugin.to_string()));
                }
                push_optional(&mut rows, "Service CIDR", aks.service_cidr.as_deref());
                push_optional(&mut rows, "DNS service IP", aks.dns_service_ip.as_deref());
                push_optional(&mut rows, "Pod CIDR", aks.pod_cidr.as_deref());
                push_optional(
                    &mut rows,
                    "Docker bridge CIDR",
                    aks.docker_bridge_cidr.as_deref(),
                );
            }
            ProviderModel::Pke(pke) => {
                rows.push(("RBAC", pke.rbac.to_string()));
                rows.push(("Network provider", pke.network_provider.clone()));
                rows.push(("Service CIDR", pke.service_cidr.clone()));
                rows.push(("Pod CIDR", pke.pod_cidr.clone()));
            }
        }

        for (key, value) in rows {
            summary.add_row(vec![
                Cell::new(key).fg(self.theme.muted),
                Cell::new(value).set_alignment(CellAlignment::Left),
            ]);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "╭─ Cluster {} {} ─╮\n",
            model.name.bold(),
            format!("[{}/{}]", model.cloud, model.distribution).bright_black()
        ));
        output.push_str(&summary.to_string());
        output.push('\n');
        output.push_str(&self.render_node_pools(model.node_pools()));
        output
    }

    /// Render a stored cluster, prefixed with its id and creation time
    pub fn render_record(&self, record: &ClusterRecord) -> String {
        let mut output = format!(
            "{} Cluster stored with id {} at {}\n",
            StatusIcon::SUCCESS.green(),
            record.id,
            record.created_at.to_rfc3339()
        );
        output.push_str(&self.render_cluster(&record.model));
        output
    }

    pub fn render_node_pools(&self, pools: &[NodePoolModel]) -> String {
        if pools.is_empty() {
            return "No node pools".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("NODE POOL").set_alignment(CellAlignment::Left),
                Cell::new("INSTANCE TYPE").set_alignment(CellAlignment::Left),
                Cell::new("COUNT").set_alignment(CellAlignment::Center),
                Cell::new("AUTOSCALING").set_alignment(CellAlignment::Center),
                Cell::new("ROLES").set_alignment(CellAlignment::Left),
                Cell::new("LABELS").set_alignment(CellAlignment::Left),
            ]);

        for pool in pools {
            let autoscaling = if pool.autoscaling {
                format!("{}-{}", pool.min_count, pool.max_count)
            } else {
                "off".to_string()
            };
            let labels = pool
                .labels
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",");

            table.add_row(vec![
                Cell::new(&pool.name),
                Cell::new(&pool.instance_type),
                Cell::new(pool.count).set_alignment(CellAlignment::Center),
                Cell::new(autoscaling)
                    .fg(self.theme.get_pool_color(pool))
                    .set_alignment(CellAlignment::Center),
                Cell::new(pool.roles.join(",")),
                Cell::new(labels),
            ]);
        }

        table.to_string()
    }

    /// One-line verdict for a validated request
    pub fn render_validation(&self, name: &str, result: Result<(), &ClusterError>) -> String {
        match result {
            Ok(()) => format!(
                "{} {}: {}",
                StatusIcon::get_result_icon(true).green(),
                name,
                StatusIcon::get_result_text(true)
            ),
            Err(err) => format!(
                "{} {}: {} [{:?}]\n  {}",
                StatusIcon::get_result_icon(false).red(),
                name,
                StatusIcon::get_result_text(false),
                err.kind(),
                err
            ),
        }
    }

    /// Network, first/last address and size of a CIDR block
    pub fn render_cidr(&self, network: &IpNetwork) -> String {
        let (first, last) = address_range(network);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["CIDR", "FIRST", "LAST", "ADDRESSES"]);
        table.add_row(vec![
            Cell::new(network),
            Cell::new(first),
            Cell::new(last),
            Cell::new(address_count(network)).set_alignment(CellAlignment::Right),
        ]);
        table.to_string()
    }

    /// Ranges of every subnet and the overlap verdict
    pub fn render_overlap(
        &self,
        subnets: &[IpNetwork],
        supernet: Option<&IpNetwork>,
        result: Result<(), &ClusterError>,
    ) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["CIDR", "FIRST", "LAST"]);
        for subnet in subnets {
            let (first, last) = address_range(subnet);
            table.add_row(vec![Cell::new(subnet), Cell::new(first), Cell::new(last)]);
        }

        let mut output = String::new();
        if let Some(supernet) = supernet {
            output.push_str(&format!("Supernet: {}\n", supernet));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        let verdict = match result {
            Ok(()) if subnets.len() < 2 => format!(
                "{} Fewer than two subnets, nothing to compare",
                StatusIcon::WARNING.yellow()
            ),
            Ok(()) => format!("{} No overlap", StatusIcon::SUCCESS.green()),
            Err(err) => format!("{} {}", StatusIcon::ERROR.red(), err),
        };
        output.push_str(&verdict);
        output.push('\n');
        output
    }
}

fn push_optional<'a>(rows: &mut Vec<(&'a str, String)>, key: &'a str, value: Option<&str>) {
    if let Some(value) = value {
        rows.push((key, value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::parse_cidr;

    #[test]
    fn test_render_empty_node_pools() {
        let renderer = TableRenderer::new();
        assert_eq!(renderer.render_node_pools(&[]), "No node pools");
    }

    #[test]
    fn test_render_cidr() {
        let renderer = TableRenderer::new();
        let network = parse_cidr("10.0.0.0/24").unwrap();
        let output = renderer.render_cidr(&network);
        assert!(output.contains("10.0.0.0/24"));
        assert!(output.contains("10.0.0.255"));
        assert!(output.contains("256"));
    }

    #[test]
    fn test_render_overlap_reports_error() {
        let renderer = TableRenderer::new();
        let subnets = vec![
            parse_cidr("10.0.0.0/24").unwrap(),
            parse_cidr("10.0.0.128/25").unwrap(),
        ];
        let err = ClusterError::Overlap {
            subnet: "10.0.0.0/24".to_string(),
            other: "10.0.0.128/25".to_string(),
        };
        let output = renderer.render_overlap(&subnets, None, Err(&err));
        assert!(output.contains("overlaps with"));
    }
}
