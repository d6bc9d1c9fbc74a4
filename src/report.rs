//! Static HTML Report
//!
//! A single self-contained page showing one refresh of the dashboard. Charts
//! are drawn by Plotly from the embedded figure JSON; tables are inserted as
//! rendered.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::dashboard::{year_label, DashboardView, Panel, PanelId};
use crate::model::FilterState;
use crate::render::{escape_html, theme, Figure};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

const STYLE: &str = "body{margin:0;padding:24px;font-family:Inter,Arial,sans-serif;}\
section{margin-bottom:24px;padding:16px;border-radius:8px;}\
table{border-collapse:collapse;width:100%;}\
th,td{padding:6px 10px;text-align:left;}\
.chart{min-height:420px;}\
.empty-text,.loading-text{text-align:center;padding:20px 0;}";

/// JSON for inline `<script>` blocks; `</` cannot end the block early
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn chart_script(id: &str, figure: &Figure) -> serde_json::Result<String> {
    Ok(format!(
        "Plotly.newPlot('{}', {}, {}, {{responsive: true}});",
        id,
        script_json(&figure.data_json()?),
        script_json(&figure.layout_json()?)
    ))
}

/// Render the view as a standalone HTML document
pub fn render_html(
    view: &DashboardView,
    filter: &FilterState,
    generated_at: DateTime<Utc>,
) -> serde_json::Result<String> {
    let mut body = String::new();
    let mut scripts = Vec::new();

    for (id, panel) in view.panels() {
        let _ = write!(
            body,
            "<section id=\"{}-panel\"><h2>{}</h2>",
            id.dom_id(),
            escape_html(id.heading())
        );
        match panel {
            Panel::Loading => body.push_str("<p class=\"loading-text\">Loading...</p>"),
            Panel::Notice(text) => {
                let _ = write!(body, "<p class=\"empty-text\">{}</p>", escape_html(text));
            }
            Panel::Chart(figure) => {
                let _ = write!(body, "<div id=\"{}\" class=\"chart\"></div>", id.dom_id());
                scripts.push(chart_script(id.dom_id(), figure)?);
            }
            Panel::Html(html) => body.push_str(html),
        }
        body.push_str("</section>");
    }

    let countries = if filter.countries().is_empty() {
        "none".to_string()
    } else {
        filter.countries().join(", ")
    };
    let indicator = filter
        .indicator()
        .map(|k| k.display_name())
        .unwrap_or_else(|| "None".to_string());

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>GDP per Capita Report</title>\n\
         <script src=\"{cdn}\"></script>\n\
         <style>{style}body{{background:{bg};color:{fg};}}section{{background:{panel};}}</style>\n\
         </head>\n<body>\n<header><h1>GDP per Capita Report</h1>\n\
         <p class=\"filters\">Countries: {countries} | Years: {years} | Indicator: {indicator}</p>\n\
         <p class=\"generated\">Generated {generated}</p></header>\n",
        cdn = PLOTLY_CDN,
        style = STYLE,
        bg = theme::BACKGROUND_PRIMARY,
        fg = theme::TEXT_PRIMARY,
        panel = theme::BACKGROUND_SECONDARY,
        countries = escape_html(&countries),
        years = escape_html(&year_label(filter)),
        indicator = escape_html(&indicator),
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    html.push_str(&body);
    if !scripts.is_empty() {
        html.push_str("\n<script>\n");
        html.push_str(&scripts.join("\n"));
        html.push_str("\n</script>");
    }
    html.push_str("\n</body>\n</html>\n");

    tracing::debug!(charts = scripts.len(), bytes = html.len(), "Rendered HTML report");
    Ok(html)
}

/// Panels whose content is a chart, in page order
pub fn chart_panels(view: &DashboardView) -> Vec<PanelId> {
    view.panels()
        .filter(|(_, panel)| matches!(panel, Panel::Chart(_)))
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IndicatorKey, Record, YearBounds, COL_GDP_PER_CAPITA};
    use crate::render::Locale;
    use chrono::TimeZone;

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    fn filter() -> FilterState {
        FilterState::new(["Brazil", "Germany"], YearBounds::new(2015, 2020).unwrap(), None)
    }

    #[test]
    fn test_report_embeds_charts_and_tables() {
        let records = vec![
            Record::new("Brazil", 2020).column(COL_GDP_PER_CAPITA, 6800.0),
            Record::new("Germany", 2020).column(COL_GDP_PER_CAPITA, 46200.0),
        ];
        let view = DashboardView::render(&filter(), &records, &[], Locale::EnUs);

        let html = render_html(&view, &filter(), generated()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Countries: Brazil, Germany | Years: 2015 - 2020 | Indicator: None"));
        assert!(html.contains("Generated 2024-05-01 12:30:00 UTC"));
        assert!(html.contains("Plotly.newPlot('chart-gdp-over-time', "));
        assert!(html.contains("Plotly.newPlot('chart-gdp-share', "));
        assert!(html.contains("<p class=\"empty-text\">Select an indicator to display.</p>"));
        assert!(html.contains("<table class=\"details-table\">"));
        assert_eq!(
            chart_panels(&view),
            vec![PanelId::TimeSeries, PanelId::Ranking, PanelId::Share]
        );
    }

    #[test]
    fn test_script_json_cannot_close_tag() {
        let records = vec![Record::new("</script><b>", 2020).column(COL_GDP_PER_CAPITA, 1.0)];
        let filter = filter().with_indicator(IndicatorKey::parse("Inflation_Rate"));
        let view = DashboardView::render(&filter, &records, &[], Locale::EnUs);

        let html = render_html(&view, &filter, generated()).unwrap();
        let script = &html[html.rfind("<script>").unwrap()..];
        assert_eq!(script.matches("</script>").count(), 1);
        assert!(html.contains("Indicator: Inflation Rate"));
    }
}
