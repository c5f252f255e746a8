//! Interactive Chart Module
//! Writes a self-contained HTML page drawing titles added per year, grouped
//! by content type, with plotly.js.

use crate::charts::RenderError;
use crate::stats::YearCounts;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::info;

pub const INTERACTIVE_FILE: &str = "titles_per_year_interactive.html";

const TITLE: &str = "Content Added per Year (Interactive)";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub struct InteractiveChart;

impl InteractiveChart {
    /// Plotly figure (`data` + `layout`) for the grouped year histogram.
    pub fn figure(by_year_and_type: &[(String, YearCounts)]) -> Value {
        let traces: Vec<Value> = by_year_and_type
            .iter()
            .map(|(kind, years)| {
                json!({
                    "type": "bar",
                    "name": kind,
                    "x": years.keys().collect::<Vec<_>>(),
                    "y": years.values().collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "data": traces,
            "layout": {
                "title": { "text": TITLE },
                "barmode": "group",
                "xaxis": { "title": { "text": "year_added" } },
                "yaxis": { "title": { "text": "count" } },
                "legend": { "title": { "text": "type" } },
            },
        })
    }

    /// Render the full HTML document.
    pub fn html(by_year_and_type: &[(String, YearCounts)]) -> Result<String, RenderError> {
        // Keep the payload from closing the surrounding <script> tag.
        let payload = serde_json::to_string(&Self::figure(by_year_and_type))?.replace("</", "<\\/");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <script src="{cdn}"></script>
</head>
<body>
    <div id="chart" style="width:100%;height:90vh;"></div>
    <script>
        const figure = {payload};
        Plotly.newPlot("chart", figure.data, figure.layout, {{ responsive: true }});
    </script>
</body>
</html>
"#,
            title = TITLE,
            cdn = PLOTLY_CDN,
            payload = payload,
        ))
    }

    /// Write the page into `out_dir` and return its path.
    pub fn write(
        by_year_and_type: &[(String, YearCounts)],
        out_dir: &Path,
    ) -> Result<PathBuf, RenderError> {
        std::fs::create_dir_all(out_dir).map_err(|source| RenderError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let path = out_dir.join(INTERACTIVE_FILE);
        std::fs::write(&path, Self::html(by_year_and_type)?).map_err(|source| {
            RenderError::Write {
                path: path.clone(),
                source,
            }
        })?;

        info!("Interactive chart written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split() -> Vec<(String, YearCounts)> {
        vec![
            ("Movie".to_string(), YearCounts::from([(2019, 3), (2020, 1)])),
            ("TV Show".to_string(), YearCounts::from([(2020, 2)])),
        ]
    }

    #[test]
    fn one_trace_per_type() {
        let figure = InteractiveChart::figure(&split());
        let data = figure["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "Movie");
        assert_eq!(data[0]["x"], json!([2019, 2020]));
        assert_eq!(data[0]["y"], json!([3, 1]));
        assert_eq!(figure["layout"]["barmode"], "group");
    }

    #[test]
    fn payload_cannot_close_script_tag() {
        let hostile = vec![("</script>".to_string(), YearCounts::from([(2020, 1)]))];
        let html = InteractiveChart::html(&hostile).unwrap();
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn writes_html_file() {
        let dir = std::env::temp_dir().join(format!("catalog_eda_html_{}", std::process::id()));
        let path = InteractiveChart::write(&split(), &dir).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Plotly.newPlot"));
        assert!(contents.contains("\"TV Show\""));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
