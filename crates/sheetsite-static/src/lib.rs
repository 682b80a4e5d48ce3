//! Static page generator for sheetsite.
//!
//! Turns a spreadsheet dataset into a single HTML page with an interactive chart.

pub mod builder;
pub mod chart;
pub mod templates;
pub mod writer;

pub use builder::{BuildError, BuildResult, SiteBuilder, SiteConfig};
pub use chart::{render_chart, ChartConfig};
pub use templates::{timestamp_now, PageContext, TemplateEngine};
pub use writer::write_site;
