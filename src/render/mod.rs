//! Chart and Table Renderers
//!
//! Each renderer takes the current result set plus the active filter values
//! and produces the full content of one mount point: a [`Figure`] for the
//! charting library or an HTML fragment for the tables.
//!
//! - [`timeseries`]: GDP per capita over time, one line per country
//! - [`comparison`]: latest-per-country ranking bars and share donut
//! - [`indicator`]: optional secondary indicator over time
//! - [`table`]: statistics and detailed-records tables

pub mod comparison;
pub mod figure;
pub mod format;
pub mod indicator;
pub mod table;
pub mod theme;
pub mod timeseries;

pub use comparison::{latest_per_country, ComparisonCharts};
pub use figure::{Figure, Layout, Trace};
pub use format::Locale;
pub use indicator::IndicatorChart;

use crate::model::Record;

/// Records grouped by country in first-seen order, each group sorted by year
pub fn group_by_country(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|(country, _)| *country == record.country) {
            Some((_, rows)) => rows.push(record),
            None => groups.push((record.country.as_str(), vec![record])),
        }
    }

    for (_, rows) in &mut groups {
        rows.sort_by_key(|r| r.year);
    }
    groups
}

/// Escape text for inclusion in HTML markup
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_country_order() {
        let records = vec![
            Record::new("Germany", 2020),
            Record::new("Brazil", 2018),
            Record::new("Germany", 2017),
            Record::new("Brazil", 2017),
        ];

        let groups = group_by_country(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Germany");
        assert_eq!(groups[1].0, "Brazil");

        let years: Vec<i32> = groups[0].1.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2017, 2020]);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Côte d'Ivoire\" & co</b>"),
            "&lt;b&gt;&quot;Côte d&#39;Ivoire&quot; &amp; co&lt;/b&gt;"
        );
        assert_eq!(escape_html("Brazil"), "Brazil");
    }
}
