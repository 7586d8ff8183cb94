//! Application configuration management.
//!
//! Configuration layers, lowest to highest precedence: built-in defaults, an
//! optional TOML file named on the command line, and `APP_`-prefixed
//! environment variables. Subcommand flags override the loaded filter on top
//! of all of this.

use dcd_core::models::{ChartLabels, SegmentFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Chart title and axis text.
    #[serde(default)]
    pub labels: ChartLabels,

    /// Default sidebar filter applied when a subcommand gives no filter
    /// flags. Absent means no filtering at all.
    #[serde(default)]
    pub filter: Option<SegmentFilter>,
}

impl AppConfig {
    /// Load configuration with the standard precedence.
    ///
    /// Environment variables are mapped using the pattern
    /// `APP_<SECTION>__<KEY>` to `<section>.<key>`, e.g.
    /// `APP_LABELS__TITLE` sets the chart title.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on the config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_match_the_original_dashboard_text() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.labels.x_axis, "LNG Volume (ktpa)");
        assert_eq!(config.filter, None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/dcdash.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn config_file_overrides_labels() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[labels]\ntitle = \"Sandbox Curve\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.labels.title, "Sandbox Curve");
        // Unset fields keep their defaults.
        assert_eq!(config.labels.y_axis, "Price / Cost (€/MWh)");
    }
}
