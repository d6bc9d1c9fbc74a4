//! Statistics and detailed-records tables, rendered as HTML fragments.

use std::fmt::Write;

use super::format::{self, Locale};
use super::escape_html;
use crate::model::{
    display_name, Cell, Record, StatRow, COL_CAGR_FORECAST, COL_CONTINENT, COL_COUNTRY,
    COL_GDP_PER_CAPITA, COL_TYPE, COL_YEAR,
};

pub const NO_STATS_MESSAGE: &str = "No statistics available.";
pub const NO_DETAILS_MESSAGE: &str = "No detailed data for the selected filters.";

const NOT_AVAILABLE: &str = "N/A";

/// Columns the details table may show, in display order
pub const DETAIL_COLUMNS: [&str; 6] = [
    COL_COUNTRY,
    COL_YEAR,
    COL_GDP_PER_CAPITA,
    COL_CONTINENT,
    COL_TYPE,
    COL_CAGR_FORECAST,
];

const STATS_HEADERS: [&str; 7] = [
    "Country",
    "Mean",
    "Median",
    "Std. Dev.",
    "Min",
    "Max",
    "Range",
];

pub(crate) fn empty_text(message: &str) -> String {
    format!("<p class=\"empty-text\">{}</p>", escape_html(message))
}

/// Per-country statistics table
pub fn stats_table(rows: &[StatRow], locale: Locale) -> String {
    if rows.is_empty() {
        return empty_text(NO_STATS_MESSAGE);
    }

    let mut html = String::from("<table class=\"stats-table\"><thead><tr>");
    for header in STATS_HEADERS {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead><tbody>");

    for row in rows {
        html.push_str("<tr>");
        let country = row.country.as_deref().unwrap_or(NOT_AVAILABLE);
        let _ = write!(html, "<td>{}</td>", escape_html(country));

        let values = [
            row.mean,
            row.median,
            row.stddev,
            row.min,
            row.max,
            row.range_of_variation,
        ];
        for value in values {
            let text = match value {
                Some(v) => format::grouped(v, locale),
                None => NOT_AVAILABLE.to_string(),
            };
            let _ = write!(html, "<td>{}</td>", escape_html(&text));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

/// Whitelisted columns present in the first record
pub fn detail_columns(records: &[Record]) -> Vec<&'static str> {
    match records.first() {
        Some(first) => DETAIL_COLUMNS
            .into_iter()
            .filter(|col| first.has_column(col))
            .collect(),
        None => Vec::new(),
    }
}

/// Display text for one details-table cell
pub fn format_detail_cell(column: &str, cell: Option<&Cell>, locale: Locale) -> String {
    match cell {
        None | Some(Cell::Null) => NOT_AVAILABLE.to_string(),
        Some(Cell::Text(text)) => text.clone(),
        Some(Cell::Number(v)) => format_number(column, *v, locale),
    }
}

fn format_number(column: &str, v: f64, locale: Locale) -> String {
    if column == COL_GDP_PER_CAPITA {
        return format::grouped_integer(v, locale);
    }
    if column == COL_CAGR_FORECAST || (is_rate_column(column) && v > -1.0 && v < 1.0) {
        return format::percent(v, locale);
    }
    if v.fract() != 0.0 {
        format::fixed(v, 2, locale)
    } else {
        format::grouped(v, locale)
    }
}

fn is_rate_column(column: &str) -> bool {
    column.to_lowercase().contains("rate")
}

/// Detailed records table, one row per record in input order
pub fn details_table(records: &[Record], locale: Locale) -> String {
    if records.is_empty() {
        return empty_text(NO_DETAILS_MESSAGE);
    }

    let columns = detail_columns(records);
    let mut html = String::from("<div class=\"table-wrapper\"><table class=\"details-table\"><thead><tr>");
    for column in &columns {
        let _ = write!(html, "<th>{}</th>", escape_html(&display_name(column)));
    }
    html.push_str("</tr></thead><tbody>");

    for record in records {
        html.push_str("<tr>");
        for column in &columns {
            let cell = record.cell(column);
            let text = format_detail_cell(column, cell.as_ref(), locale);
            let _ = write!(html, "<td>{}</td>", escape_html(&text));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}
