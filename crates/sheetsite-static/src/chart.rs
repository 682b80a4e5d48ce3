//! Plotly line chart rendering.

use chrono::{NaiveDateTime, NaiveTime};
use minijinja::{context, Environment, Value};
use serde::Serialize;

use sheetsite_data::{Dataset, DATE_COLUMN, VALUE_COLUMN};

use crate::builder::BuildError;

/// Chart settings.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Title shown above the chart
    pub title: String,

    /// Id of the container element
    pub div_id: String,

    /// Hosted Plotly script
    pub plotly_cdn: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Hello Dashboard (from Excel)".to_string(),
            div_id: "chart".to_string(),
            plotly_cdn: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Trace {
    #[serde(rename = "type")]
    kind: &'static str,
    mode: &'static str,
    name: &'static str,
    x: Vec<String>,
    y: Vec<f64>,
    xaxis: &'static str,
    yaxis: &'static str,
    line: Line,
    marker: Marker,
    showlegend: bool,
    hovertemplate: String,
}

#[derive(Debug, Serialize)]
struct Line {
    color: &'static str,
    dash: &'static str,
}

#[derive(Debug, Serialize)]
struct Marker {
    symbol: &'static str,
}

#[derive(Debug, Serialize)]
struct Title {
    text: String,
}

#[derive(Debug, Serialize)]
struct Axis {
    title: Title,
}

#[derive(Debug, Serialize)]
struct Legend {
    tracegroupgap: u32,
}

#[derive(Debug, Serialize)]
struct Layout {
    title: Title,
    xaxis: Axis,
    yaxis: Axis,
    legend: Legend,
    autosize: bool,
}

#[derive(Debug, Serialize)]
struct PlotConfig {
    responsive: bool,
}

/// Render `dataset` as an embeddable HTML fragment.
///
/// The fragment loads Plotly from `config.plotly_cdn` and holds exactly one
/// chart container. Output is deterministic for a given dataset and config.
pub fn render_chart(dataset: &Dataset, config: &ChartConfig) -> Result<String, BuildError> {
    let trace = Trace {
        kind: "scatter",
        mode: "lines+markers",
        name: "",
        x: dataset.dates().map(format_date).collect(),
        y: dataset.values().collect(),
        xaxis: "x",
        yaxis: "y",
        line: Line {
            color: "#636efa",
            dash: "solid",
        },
        marker: Marker { symbol: "circle" },
        showlegend: false,
        hovertemplate: format!("{DATE_COLUMN}=%{{x}}<br>{VALUE_COLUMN}=%{{y}}<extra></extra>"),
    };

    let layout = Layout {
        title: Title {
            text: config.title.clone(),
        },
        xaxis: Axis {
            title: Title {
                text: DATE_COLUMN.to_string(),
            },
        },
        yaxis: Axis {
            title: Title {
                text: VALUE_COLUMN.to_string(),
            },
        },
        legend: Legend { tracegroupgap: 0 },
        autosize: true,
    };

    let mut env = Environment::new();
    env.add_template("chart.html", CHART_TEMPLATE)
        .map_err(|e| BuildError::ChartError(e.to_string()))?;

    let tmpl = env
        .get_template("chart.html")
        .map_err(|e| BuildError::ChartError(e.to_string()))?;

    tmpl.render(context! {
        plotly_cdn => &config.plotly_cdn,
        div_id => &config.div_id,
        div_id_js => script_json(&config.div_id)?,
        data => script_json(&[trace])?,
        layout => script_json(&layout)?,
        plot_config => script_json(&PlotConfig { responsive: true })?,
    })
    .map_err(|e| BuildError::ChartError(e.to_string()))
}

/// Dates at midnight render date-only, everything else with seconds.
fn format_date(date: NaiveDateTime) -> String {
    if date.time() == NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Serialize to JSON that cannot close the surrounding `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, BuildError> {
    let json = serde_json::to_string(value)
        .map_err(|e| BuildError::ChartError(e.to_string()))?;

    let escaped = json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");

    Ok(Value::from_safe_string(escaped))
}

const CHART_TEMPLATE: &str = r##"<div>
  <script charset="utf-8" src="{{ plotly_cdn }}"></script>
  <div id="{{ div_id }}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
  <script type="text/javascript">
    window.PLOTLYENV = window.PLOTLYENV || {};
    if (document.getElementById({{ div_id_js }})) {
      Plotly.newPlot({{ div_id_js }}, {{ data }}, {{ layout }}, {{ plot_config }});
    }
  </script>
</div>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsite_data::Row;

    #[test]
    fn renders_sample_chart() {
        let html = render_chart(&Dataset::sample(), &ChartConfig::default()).unwrap();

        assert_eq!(html.matches("cdn.plot.ly").count(), 1);
        assert_eq!(html.matches("class=\"plotly-graph-div\"").count(), 1);
        assert!(html.contains(r#""mode":"lines+markers""#));
        assert!(html.contains(r#""x":["2024-12-30","2024-12-31","2025-01-01""#));
        assert!(html.contains(r#""y":[10.0,13.0,11.0"#));
        assert!(html.contains(r#"{"responsive":true}"#));
        assert!(html.contains("Hello Dashboard (from Excel)"));
    }

    #[test]
    fn output_is_deterministic() {
        let config = ChartConfig::default();
        let first = render_chart(&Dataset::sample(), &config).unwrap();
        let second = render_chart(&Dataset::sample(), &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_dataset_renders_empty_chart() {
        let html = render_chart(&Dataset::default(), &ChartConfig::default()).unwrap();

        assert!(html.contains(r#""x":[],"y":[]"#));
        assert_eq!(html.matches("class=\"plotly-graph-div\"").count(), 1);
    }

    #[test]
    fn keeps_time_of_day() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let dataset = Dataset::new(vec![Row { date, value: 1.5 }]);

        let html = render_chart(&dataset, &ChartConfig::default()).unwrap();

        assert!(html.contains(r#""x":["2025-02-01 09:15:00"]"#));
    }

    #[test]
    fn title_cannot_break_out_of_script() {
        let config = ChartConfig {
            title: "</script><script>alert(1)</script>".to_string(),
            ..Default::default()
        };

        let html = render_chart(&Dataset::sample(), &config).unwrap();

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn escapes_container_attributes() {
        let config = ChartConfig {
            div_id: "a\"b".to_string(),
            ..Default::default()
        };

        let html = render_chart(&Dataset::sample(), &config).unwrap();

        assert!(html.contains(r#"id="a&quot;b""#));
    }

    #[test]
    fn escapes_script_url() {
        let config = ChartConfig {
            plotly_cdn: "https://cdn.example.com/plotly.js?a=1&b=\"2\"".to_string(),
            ..Default::default()
        };

        let html = render_chart(&Dataset::sample(), &config).unwrap();

        assert!(html.contains("plotly.js?a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("b=\"2\""));
    }
}
