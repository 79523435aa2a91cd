//! Color theme for CLI output

use crate::domain::cluster::NodePoolModel;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Autoscaling pools are highlighted, empty fixed-size pools are muted
    pub fn get_pool_color(&self, pool: &NodePoolModel) -> TableColor {
        if pool.autoscaling {
            self.info
        } else if pool.count == 0 {
            self.muted
        } else {
            self.success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn pool(autoscaling: bool, count: u32) -> NodePoolModel {
        NodePoolModel {
            name: "pool1".to_string(),
            instance_type: "Standard_D2_v2".to_string(),
            autoscaling,
            min_count: 1,
            max_count: 3,
            count,
            labels: BTreeMap::new(),
            roles: Vec::new(),
            created_by: 1,
        }
    }

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.success, TableColor::Green);
        assert_eq!(theme.warning, TableColor::Yellow);
        assert_eq!(theme.error, TableColor::Red);
    }

    #[test]
    fn test_get_pool_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_pool_color(&pool(true, 0)), TableColor::Cyan);
        assert_eq!(theme.get_pool_color(&pool(false, 2)), TableColor::Green);
        assert_eq!(theme.get_pool_color(&pool(false, 0)), TableColor::DarkGrey);
    }
}
