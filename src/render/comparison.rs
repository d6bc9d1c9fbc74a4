//! Ranked comparison charts
//!
//! Both charts work on the latest observation per country *within the
//! current filter*, which is not necessarily the dataset's latest year.

use super::figure::{BarTrace, Figure, Font, Legend, Marker, PieTrace, Stroke, Title, Trace};
use super::figure::Axis;
use super::{format, theme, Locale};
use crate::model::{Record, YearBounds};

pub const NO_DATA_TITLE: &str = "No data";

/// The bar ranking and the share donut, built from the same latest set
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCharts {
    pub ranking: Figure,
    pub share: Figure,
}

/// Max-year record per country, countries in first-seen order.
///
/// Ties on the max year resolve to the last record seen.
pub fn latest_per_country(records: &[Record]) -> Vec<&Record> {
    let mut latest: Vec<&Record> = Vec::new();

    for record in records {
        match latest.iter_mut().find(|r| r.country == record.country) {
            Some(current) => {
                if record.year >= current.year {
                    *current = record;
                }
            }
            None => latest.push(record),
        }
    }
    latest
}

/// Year shown in both titles: the common latest year, or the span of them
pub fn comparison_year_label(latest: &[&Record], fallback: i32) -> String {
    let min = latest.iter().map(|r| r.year).min();
    let max = latest.iter().map(|r| r.year).max();
    match (min, max) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        _ => fallback.to_string(),
    }
}

/// Latest records sorted by GDP per capita, largest first.
///
/// A missing GDP value ranks as zero.
pub fn rank_by_gdp<'a>(latest: &[&'a Record]) -> Vec<&'a Record> {
    let mut ranked = latest.to_vec();
    ranked.sort_by(|a, b| {
        let a = a.gdp_per_capita().unwrap_or(0.0);
        let b = b.gdp_per_capita().unwrap_or(0.0);
        b.total_cmp(&a)
    });
    ranked
}

pub fn comparison_charts(records: &[Record], years: YearBounds, locale: Locale) -> ComparisonCharts {
    let latest = latest_per_country(records);
    if latest.is_empty() {
        return ComparisonCharts {
            ranking: Figure::placeholder(theme::comparison_layout(), NO_DATA_TITLE),
            share: Figure::placeholder(theme::comparison_layout(), NO_DATA_TITLE),
        };
    }

    let label = comparison_year_label(&latest, years.max());
    ComparisonCharts {
        ranking: ranking_chart(&latest, &label, locale),
        share: share_chart(&latest, &label),
    }
}

fn ranking_chart(latest: &[&Record], label: &str, locale: Locale) -> Figure {
    let ranked = rank_by_gdp(latest);
    let values: Vec<f64> = ranked
        .iter()
        .map(|r| r.gdp_per_capita().unwrap_or(0.0))
        .collect();

    let trace = Trace::Bar(BarTrace {
        y: ranked.iter().map(|r| r.country.clone()).collect(),
        text: values.iter().map(|v| format::thousands(*v, locale)).collect(),
        x: values,
        orientation: "h",
        marker: Marker {
            color: Some((0..ranked.len()).map(theme::color).collect()),
            line: Some(Stroke {
                width: 1.0,
                color: theme::BACKGROUND_PRIMARY,
            }),
            ..Marker::default()
        },
        textposition: "inside",
        insidetextanchor: "middle",
        textfont: Font {
            color: Some(theme::BACKGROUND_SECONDARY),
            size: Some(10.0),
            weight: Some("bold"),
            family: None,
        },
        hovertemplate: "<b>%{y}</b><br>GDP per Capita: %{x:,.0f} US$<extra></extra>".to_string(),
    });

    let mut layout = theme::comparison_layout();
    layout.title = Some(Title::centered(
        format!("GDP per Capita Comparison ({})", label),
        14.0,
    ));
    layout.xaxis = Some(theme::titled_axis("GDP per Capita (US$)"));
    // Descending sort + reversed category axis puts the largest bar on top
    layout.yaxis = Some(Axis {
        autorange: Some("reversed"),
        tickfont: Some(Font::sized(10.0).color(theme::TEXT_SECONDARY)),
        gridcolor: Some(theme::GRID_LINES),
        linecolor: Some(theme::GRID_LINES),
        ..Default::default()
    });
    layout.showlegend = Some(false);
    if let Some(margin) = layout.margin.as_mut() {
        margin.l = 100.0;
    }

    Figure::new(vec![trace], layout)
}

fn share_chart(latest: &[&Record], label: &str) -> Figure {
    let trace = Trace::Pie(PieTrace {
        values: latest
            .iter()
            .map(|r| r.gdp_per_capita().unwrap_or(0.0))
            .collect(),
        labels: latest.iter().map(|r| r.country.clone()).collect(),
        hole: 0.5,
        textinfo: "percent",
        textfont: Font::sized(11.0).color("white"),
        textposition: "inside",
        marker: Marker {
            colors: Some((0..latest.len()).map(theme::color).collect()),
            line: Some(Stroke {
                width: 2.5,
                color: theme::BACKGROUND_PRIMARY,
            }),
            ..Marker::default()
        },
        hovertemplate:
            "<b>%{label}</b><br>GDP: %{value:,.0f} US$<br>Share: %{percent}<extra></extra>"
                .to_string(),
        sort: false,
    });

    let mut layout = theme::comparison_layout();
    layout.title = Some(Title::centered(
        format!("Share of Group GDP ({})", label),
        14.0,
    ));
    layout.showlegend = Some(true);
    layout.legend = Some(Legend {
        font: Some(Font::sized(9.0).color(theme::TEXT_SECONDARY)),
        bgcolor: Some(theme::PLOT_BACKGROUND),
        orientation: Some("v"),
        x: Some(1.05),
        xanchor: Some("left"),
        y: Some(0.5),
        yanchor: Some("middle"),
    });

    Figure::new(vec![trace], layout)
}
