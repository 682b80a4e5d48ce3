//! Template engine for rendering the dashboard page.

use std::path::{Path, PathBuf};

use minijinja::{context, AutoEscape, Environment, UndefinedBehavior, Value};

use crate::builder::BuildError;

/// Placeholder every page template must declare.
pub const CHART_PLACEHOLDER: &str = "chart_html";

/// Values substituted into the page template.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Page title (escaped)
    pub title: String,
    /// Generation time (escaped)
    pub last_updated: String,
    /// Rendered chart fragment (inserted as-is)
    pub chart_html: String,
}

/// Template engine using minijinja, loading templates from a directory.
pub struct TemplateEngine {
    env: Environment<'static>,
    dir: PathBuf,
}

impl TemplateEngine {
    /// Create an engine rooted at `templates_dir`.
    ///
    /// Every template is HTML-escaped regardless of its extension, and any
    /// reference to a variable outside [`PageContext`] is a render error.
    pub fn new(templates_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir));
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self {
            env,
            dir: templates_dir.to_path_buf(),
        }
    }

    /// Render the named template with `page`.
    ///
    /// `title` and `last_updated` are escaped. `chart_html` is the one value
    /// marked safe: it is generated by the chart renderer, never taken from
    /// input.
    pub fn render_page(&self, template: &str, page: &PageContext) -> Result<String, BuildError> {
        let tmpl = self.env.get_template(template).map_err(|e| {
            BuildError::TemplateError(format!("{}: {}", self.dir.join(template).display(), e))
        })?;

        if !tmpl.undeclared_variables(false).contains(CHART_PLACEHOLDER) {
            return Err(BuildError::MissingPlaceholder {
                template: template.to_string(),
                placeholder: CHART_PLACEHOLDER.to_string(),
            });
        }

        tracing::debug!("Rendering {}", self.dir.join(template).display());

        tmpl.render(context! {
            title => &page.title,
            last_updated => &page.last_updated,
            chart_html => Value::from_safe_string(page.chart_html.clone()),
        })
        .map_err(|e| BuildError::TemplateError(e.to_string()))
    }
}

/// Local time formatted for the "last updated" line.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}
