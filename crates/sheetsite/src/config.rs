//! site.toml loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sheetsite_static::{ChartConfig, SiteConfig};

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    input: InputConfig,
    #[serde(default)]
    templates: TemplatesConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    site: SiteSettings,
    #[serde(default)]
    chart: ChartSettings,
}

#[derive(Debug, Deserialize, Default)]
struct InputConfig {
    data: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct TemplatesConfig {
    dir: Option<PathBuf>,
    name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfig {
    dir: Option<PathBuf>,
    file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct SiteSettings {
    title: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ChartSettings {
    title: Option<String>,
    div_id: Option<String>,
    plotly_cdn: Option<String>,
}

impl ConfigFile {
    fn into_site_config(self) -> SiteConfig {
        let defaults = SiteConfig::default();
        let chart = defaults.chart;

        SiteConfig {
            data_path: self.input.data.unwrap_or(defaults.data_path),
            templates_dir: self.templates.dir.unwrap_or(defaults.templates_dir),
            template: self.templates.name.unwrap_or(defaults.template),
            output_dir: self.output.dir.unwrap_or(defaults.output_dir),
            output_file: self.output.file.unwrap_or(defaults.output_file),
            title: self.site.title.unwrap_or(defaults.title),
            chart: ChartConfig {
                title: self.chart.title.unwrap_or(chart.title),
                div_id: self.chart.div_id.unwrap_or(chart.div_id),
                plotly_cdn: self.chart.plotly_cdn.unwrap_or(chart.plotly_cdn),
            },
        }
    }
}

/// Load configuration from `path` if it exists, else use the defaults.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(SiteConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());

    Ok(config.into_site_config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/data.xlsx"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.template, "index.html.j2");
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.output_file, "index.html");
        assert_eq!(config.title, "My Excel Dashboard");
        assert_eq!(config.chart.title, "Hello Dashboard (from Excel)");
    }

    #[test]
    fn overrides_selected_keys() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[input]
data = "sheets/sales.xlsx"

[site]
title = "Sales"

[chart]
div_id = "sales-chart"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.data_path, PathBuf::from("sheets/sales.xlsx"));
        assert_eq!(config.title, "Sales");
        assert_eq!(config.chart.div_id, "sales-chart");
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.chart.title, "Hello Dashboard (from Excel)");
    }

    #[test]
    fn errors_on_malformed_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn errors_on_unknown_section() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[server]\nport = 80\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
