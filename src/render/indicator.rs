//! Optional secondary indicator over time

use super::figure::{Figure, Title};
use super::timeseries::line_series;
use super::{escape_html, group_by_country, theme};
use crate::model::{IndicatorKey, Record, YearBounds};

pub const SELECT_NOTICE: &str = "Select an indicator to display.";

/// What the indicator mount point shows
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorChart {
    /// Short explanatory text instead of a chart
    Notice(String),
    Chart(Figure),
}

impl IndicatorChart {
    pub fn select_notice() -> Self {
        IndicatorChart::Notice(SELECT_NOTICE.to_string())
    }
}

pub fn not_found_notice(key: &IndicatorKey) -> String {
    format!("Indicator '{}' not found or has no data.", key.display_name())
}

pub fn no_data_notice(key: &IndicatorKey) -> String {
    format!("No data for '{}' with the current filters.", key.display_name())
}

/// Build the indicator chart.
///
/// Only the first record decides whether the indicator exists; rows
/// without a numeric reading are dropped per country.
pub fn indicator_chart(
    records: &[Record],
    indicator: Option<&IndicatorKey>,
    years: YearBounds,
) -> IndicatorChart {
    let key = match indicator {
        Some(key) => key,
        None => return IndicatorChart::select_notice(),
    };

    match records.first() {
        Some(first) if first.has_column(key.as_str()) => {}
        _ => return IndicatorChart::Notice(not_found_notice(key)),
    }

    let display = key.display_name();
    let traces: Vec<_> = group_by_country(records)
        .into_iter()
        .enumerate()
        .filter_map(|(index, (country, rows))| {
            let points: Vec<(i32, Option<f64>)> = rows
                .iter()
                .filter_map(|r| r.indicator(key).value().map(|v| (r.year, Some(v))))
                .collect();
            if points.is_empty() {
                return None;
            }

            let hover = format!(
                "<b>{}</b><br>Year: %{{x}}<br>{}: %{{y:,.2f}}<extra></extra>",
                escape_html(country),
                escape_html(&display)
            );
            Some(line_series(country, index, points.into_iter(), hover))
        })
        .collect();

    if traces.is_empty() {
        return IndicatorChart::Notice(no_data_notice(key));
    }

    let mut layout = theme::common_layout();
    layout.title = Some(Title::centered(
        format!("{} ({})", display, years.label()),
        15.0,
    ));
    layout.xaxis = Some(theme::titled_axis("Year"));
    layout.yaxis = Some(theme::titled_axis(display));

    IndicatorChart::Chart(Figure::new(traces, layout))
}
