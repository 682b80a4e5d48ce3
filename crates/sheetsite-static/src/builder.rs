//! Dashboard site builder.

use std::path::PathBuf;
use std::time::Instant;

use sheetsite_data::{ensure_sample, read_dataset, DataError};

use crate::chart::{render_chart, ChartConfig};
use crate::templates::{timestamp_now, PageContext, TemplateEngine};
use crate::writer::write_site;

/// Configuration for building the dashboard page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Input workbook, seeded with sample data when absent
    pub data_path: PathBuf,

    /// Directory holding page templates
    pub templates_dir: PathBuf,

    /// Template name within `templates_dir`
    pub template: String,

    /// Output directory
    pub output_dir: PathBuf,

    /// Output file name within `output_dir`
    pub output_file: String,

    /// Page title
    pub title: String,

    /// Chart settings
    pub chart: ChartConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data").join("data.xlsx"),
            templates_dir: PathBuf::from("templates"),
            template: "index.html.j2".to_string(),
            output_dir: PathBuf::from("docs"),
            output_file: "index.html".to_string(),
            title: "My Excel Dashboard".to_string(),
            chart: ChartConfig::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of data rows charted
    pub rows: usize,

    /// Whether the sample workbook was created during this build
    pub seeded: bool,

    /// Path of the written page
    pub output_path: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Failed to render chart: {0}")]
    ChartError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Template {template} is missing the '{placeholder}' placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Runs seed, read, chart, page and write once per call.
pub struct SiteBuilder {
    config: SiteConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: SiteConfig) -> Self {
        let templates = TemplateEngine::new(&config.templates_dir);
        Self { config, templates }
    }

    /// Build the page stamped with the current local time.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        self.build_at(&timestamp_now())
    }

    /// Build the page stamped with `last_updated`.
    ///
    /// The output file is only touched once the page has rendered, so a
    /// failing template leaves no output behind.
    pub fn build_at(&self, last_updated: &str) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let seeded = ensure_sample(&self.config.data_path)?;
        let dataset = read_dataset(&self.config.data_path)?;

        let chart_html = render_chart(&dataset, &self.config.chart)?;

        let page = self.templates.render_page(
            &self.config.template,
            &PageContext {
                title: self.config.title.clone(),
                last_updated: last_updated.to_string(),
                chart_html,
            },
        )?;

        let output_path = write_site(&self.config.output_dir, &self.config.output_file, &page)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            rows: dataset.len(),
            seeded,
            output_path,
            duration_ms: duration.as_millis() as u64,
        })
    }
}
