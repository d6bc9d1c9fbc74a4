//! Time-series chart: GDP per capita over the selected years.

use super::figure::{Figure, Line, Marker, ScatterTrace, Stroke, Title, Trace};
use super::{escape_html, group_by_country, theme};
use crate::model::{Record, YearBounds};

pub const NO_DATA_TITLE: &str = "No data for the selected filters";

/// Build the GDP per capita line chart
pub fn time_series_chart(records: &[Record], years: YearBounds) -> Figure {
    let mut layout = theme::common_layout();
    if records.is_empty() {
        return Figure::placeholder(layout, NO_DATA_TITLE);
    }

    let traces = group_by_country(records)
        .into_iter()
        .enumerate()
        .map(|(index, (country, rows))| {
            let hover = format!(
                "<b>{}</b><br>Year: %{{x}}<br>GDP per Capita: %{{y:,.0f}} US$<extra></extra>",
                escape_html(country)
            );
            line_series(
                country,
                index,
                rows.iter().map(|r| (r.year, r.gdp_per_capita())),
                hover,
            )
        })
        .collect();

    layout.title = Some(Title::centered(
        format!("GDP per Capita Over Time ({})", years.label()),
        15.0,
    ));
    layout.xaxis = Some(theme::titled_axis("Year"));
    layout.yaxis = Some(theme::titled_axis("GDP per Capita (US$)"));

    Figure::new(traces, layout)
}

/// Smoothed lines+markers series in the palette colour for `index`
pub(crate) fn line_series(
    name: &str,
    index: usize,
    points: impl Iterator<Item = (i32, Option<f64>)>,
    hovertemplate: String,
) -> Trace {
    let (x, y) = points.unzip();
    Trace::Scatter(ScatterTrace {
        x,
        y,
        mode: "lines+markers",
        name: name.to_string(),
        line: Line {
            shape: "spline",
            width: 2.5,
            color: theme::color(index),
        },
        marker: Marker {
            size: Some(7.0),
            symbol: Some("circle"),
            line: Some(Stroke {
                width: 1.5,
                color: theme::BACKGROUND_SECONDARY,
            }),
            ..Marker::default()
        },
        hovertemplate,
    })
}
