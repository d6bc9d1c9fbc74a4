//! Panel contents for every mount point of the dashboard

use serde::Serialize;

use crate::model::{FilterState, Record, StatRow};
use crate::render::comparison::{self, ComparisonCharts};
use crate::render::indicator::{self, IndicatorChart};
use crate::render::{table, timeseries, Figure, Locale};

/// Mount points, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelId {
    TimeSeries,
    Ranking,
    Share,
    Indicator,
    Statistics,
    Details,
}

impl PanelId {
    pub const ALL: [PanelId; 6] = [
        PanelId::TimeSeries,
        PanelId::Ranking,
        PanelId::Share,
        PanelId::Indicator,
        PanelId::Statistics,
        PanelId::Details,
    ];

    /// DOM id of the mount point
    pub fn dom_id(&self) -> &'static str {
        match self {
            PanelId::TimeSeries => "chart-gdp-over-time",
            PanelId::Ranking => "chart-gdp-ranking",
            PanelId::Share => "chart-gdp-share",
            PanelId::Indicator => "chart-indicator",
            PanelId::Statistics => "table-statistics",
            PanelId::Details => "table-details",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            PanelId::TimeSeries => "GDP per Capita Over Time",
            PanelId::Ranking => "Ranking (latest year)",
            PanelId::Share => "Share of Group GDP",
            PanelId::Indicator => "Additional Indicator",
            PanelId::Statistics => "GDP per Capita Statistics",
            PanelId::Details => "Detailed Data",
        }
    }
}

/// Content of one mount point
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Loading,
    /// Explanatory text shown in place of a chart
    Notice(String),
    Chart(Figure),
    /// Table markup, inserted verbatim
    Html(String),
}

impl Panel {
    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }
}

impl From<IndicatorChart> for Panel {
    fn from(chart: IndicatorChart) -> Self {
        match chart {
            IndicatorChart::Notice(text) => Panel::Notice(text),
            IndicatorChart::Chart(figure) => Panel::Chart(figure),
        }
    }
}

/// Everything the page shows for one refresh
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    time_series: Panel,
    ranking: Panel,
    share: Panel,
    indicator: Panel,
    statistics: Panel,
    details: Panel,
}

impl DashboardView {
    /// Placeholders shown while a refresh is in flight
    pub fn loading(filter: &FilterState) -> Self {
        let indicator = match filter.indicator() {
            Some(_) => Panel::Loading,
            None => IndicatorChart::select_notice().into(),
        };
        Self {
            time_series: Panel::Loading,
            ranking: Panel::Loading,
            share: Panel::Loading,
            indicator,
            statistics: Panel::Loading,
            details: Panel::Loading,
        }
    }

    /// The no-data state of every panel
    pub fn empty(filter: &FilterState) -> Self {
        let years = filter.years();
        let ComparisonCharts { ranking, share } =
            comparison::comparison_charts(&[], years, Locale::default());

        Self {
            time_series: Panel::Chart(timeseries::time_series_chart(&[], years)),
            ranking: Panel::Chart(ranking),
            share: Panel::Chart(share),
            indicator: indicator::indicator_chart(&[], filter.indicator(), years).into(),
            statistics: Panel::Html(table::stats_table(&[], Locale::default())),
            details: Panel::Html(table::details_table(&[], Locale::default())),
        }
    }

    /// Render a successful refresh.
    ///
    /// An empty record set wins over the statistics: the stats table shows
    /// its empty message even when rows came back.
    pub fn render(
        filter: &FilterState,
        records: &[Record],
        stats: &[StatRow],
        locale: Locale,
    ) -> Self {
        if records.is_empty() {
            return Self::empty(filter);
        }

        let years = filter.years();
        let ComparisonCharts { ranking, share } =
            comparison::comparison_charts(records, years, locale);

        Self {
            time_series: Panel::Chart(timeseries::time_series_chart(records, years)),
            ranking: Panel::Chart(ranking),
            share: Panel::Chart(share),
            indicator: indicator::indicator_chart(records, filter.indicator(), years).into(),
            statistics: Panel::Html(table::stats_table(stats, locale)),
            details: Panel::Html(table::details_table(records, locale)),
        }
    }

    pub fn panel(&self, id: PanelId) -> &Panel {
        match id {
            PanelId::TimeSeries => &self.time_series,
            PanelId::Ranking => &self.ranking,
            PanelId::Share => &self.share,
            PanelId::Indicator => &self.indicator,
            PanelId::Statistics => &self.statistics,
            PanelId::Details => &self.details,
        }
    }

    /// Every panel in page order
    pub fn panels(&self) -> impl Iterator<Item = (PanelId, &Panel)> + '_ {
        PanelId::ALL.into_iter().map(move |id| (id, self.panel(id)))
    }
}
