//! Global Application State
//!
//! Reactive state management using Leptos signals. The signals hold the raw
//! control values; a [`FilterState`] is only built from them when a refresh
//! starts.

use leptos::*;
use std::rc::Rc;

use gdpscope::dashboard::{
    filter_from_inputs, year_label, Dashboard, FilterOptions, IndicatorOption, RefreshOutcome,
    DEFAULT_SELECTED_COUNTRIES,
};
use gdpscope::model::{FilterError, FilterState, YearBounds};
use gdpscope::DashboardView;

use crate::api::BrowserApi;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Refresh orchestrator, shared by every trigger
    pub dashboard: StoredValue<Rc<Dashboard<BrowserApi>>>,
    /// Country options from the API
    pub countries: RwSignal<Vec<String>>,
    /// Indicator options, "None" first
    pub indicators: RwSignal<Vec<IndicatorOption>>,
    /// Countries currently selected in the multi-select
    pub selected_countries: RwSignal<Vec<String>>,
    /// Raw text of the lower year input
    pub min_year: RwSignal<String>,
    /// Raw text of the upper year input
    pub max_year: RwSignal<String>,
    /// Selected indicator value, empty for none
    pub indicator: RwSignal<String>,
    /// Latest applied panels; `None` until the first refresh lands
    pub view: RwSignal<Option<DashboardView>>,
    /// Span shown next to the year inputs
    pub year_label: RwSignal<String>,
}

impl GlobalState {
    pub fn new(api: BrowserApi) -> Self {
        Self {
            dashboard: store_value(Rc::new(Dashboard::new(api))),
            countries: create_rw_signal(Vec::new()),
            indicators: create_rw_signal(Vec::new()),
            selected_countries: create_rw_signal(Vec::new()),
            min_year: create_rw_signal(String::new()),
            max_year: create_rw_signal(String::new()),
            indicator: create_rw_signal(String::new()),
            view: create_rw_signal(None),
            year_label: create_rw_signal(String::new()),
        }
    }

    /// Populate the controls and select the defaults
    pub fn apply_options(&self, options: FilterOptions) {
        match options.initial_filter() {
            Some(filter) => self.set_inputs(options.years, &filter),
            None => self.selected_countries.set(
                options
                    .countries
                    .iter()
                    .take(DEFAULT_SELECTED_COUNTRIES)
                    .cloned()
                    .collect(),
            ),
        }

        self.indicator.set(String::new());
        self.countries.set(options.countries);
        self.indicators.set(options.indicators);
    }

    fn set_inputs(&self, years: Option<YearBounds>, filter: &FilterState) {
        self.selected_countries.set(filter.countries().to_vec());
        if let Some(years) = years {
            self.min_year.set(years.min().to_string());
            self.max_year.set(years.max().to_string());
        }
        self.year_label.set(year_label(filter));
    }

    /// Filter from the current control values
    pub fn current_filter(&self) -> Result<FilterState, FilterError> {
        filter_from_inputs(
            &self.selected_countries.get_untracked(),
            &self.min_year.get_untracked(),
            &self.max_year.get_untracked(),
            &self.indicator.get_untracked(),
        )
    }

    /// Start a refresh: validate the inputs and put the loading placeholders up.
    ///
    /// Returns the filter to fetch, or `None` when the inputs are invalid, in
    /// which case nothing on the page changes.
    pub fn begin_refresh(&self) -> Option<FilterState> {
        match self.current_filter() {
            Ok(filter) => {
                self.year_label.set(year_label(&filter));
                self.view.set(Some(DashboardView::loading(&filter)));
                Some(filter)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid filter inputs, refresh skipped");
                None
            }
        }
    }

    /// Apply a finished refresh. Only a rendered outcome replaces the panels;
    /// a failure was already logged and leaves the placeholders up.
    pub fn finish_refresh(&self, outcome: RefreshOutcome) {
        match outcome {
            RefreshOutcome::Rendered(view) => self.view.set(Some(view)),
            RefreshOutcome::Superseded | RefreshOutcome::Failed(_) => {}
        }
    }

    /// Recompute the span label; invalid inputs keep the previous label
    pub fn sync_year_label(&self) {
        match self.current_filter() {
            Ok(filter) => self.year_label.set(year_label(&filter)),
            Err(e) => tracing::debug!(error = %e, "Year inputs not a valid range yet"),
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let api = BrowserApi::from_storage();
    tracing::info!(base_url = api.base_url(), "Using dashboard API");
    provide_context(GlobalState::new(api));
}

/// The state provided by [`provide_global_state`].
///
/// Falls back to a fresh same-origin state when rendered outside the app root.
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().unwrap_or_else(|| {
        tracing::warn!("GlobalState not provided, creating a detached one");
        GlobalState::new(BrowserApi::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpscope::client::{Endpoint, FetchError};
    use gdpscope::dashboard::{Panel, PanelId};
    use gdpscope::model::{Record, COL_GDP_PER_CAPITA};
    use gdpscope::render::Locale;

    fn options() -> FilterOptions {
        FilterOptions {
            countries: vec!["Brazil".into(), "Germany".into(), "India".into()],
            indicators: vec![IndicatorOption::none(), IndicatorOption::from_key("Inflation_Rate")],
            years: Some(YearBounds::new(1990, 2030).unwrap()),
        }
    }

    #[test]
    fn test_apply_options_selects_defaults() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());

        state.apply_options(options());
        assert_eq!(state.selected_countries.get_untracked(), ["Brazil", "Germany"]);
        assert_eq!(state.min_year.get_untracked(), "1990");
        assert_eq!(state.max_year.get_untracked(), "2030");
        assert_eq!(state.year_label.get_untracked(), "1990 - 2030");
        assert_eq!(state.indicators.get_untracked().len(), 2);

        let filter = state.current_filter().unwrap();
        assert!(filter.indicator().is_none());
        assert_eq!(filter.years(), YearBounds::new(1990, 2030).unwrap());

        runtime.dispose();
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());
        state.apply_options(options());

        state.min_year.set("20x0".into());
        assert!(state.current_filter().is_err());

        state.sync_year_label();
        assert_eq!(state.year_label.get_untracked(), "1990 - 2030");

        state.min_year.set("2000".into());
        state.sync_year_label();
        assert_eq!(state.year_label.get_untracked(), "2000 - 2030");

        runtime.dispose();
    }

    #[test]
    fn test_missing_year_range_still_selects_countries() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());

        state.apply_options(FilterOptions {
            years: None,
            ..options()
        });
        assert_eq!(state.selected_countries.get_untracked(), ["Brazil", "Germany"]);
        assert!(state.min_year.get_untracked().is_empty());
        assert!(state.current_filter().is_err());

        runtime.dispose();
    }

    #[test]
    fn test_refresh_puts_loading_then_applies_rendered_view() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());
        state.apply_options(options());
        state.max_year.set("2020".into());

        let filter = state.begin_refresh().unwrap();
        assert_eq!(filter.years(), YearBounds::new(1990, 2020).unwrap());
        assert_eq!(state.year_label.get_untracked(), "1990 - 2020");
        assert_eq!(state.view.get_untracked(), Some(DashboardView::loading(&filter)));

        let records = vec![Record::new("Brazil", 2020).column(COL_GDP_PER_CAPITA, 6800.0)];
        let rendered = DashboardView::render(&filter, &records, &[], Locale::EnUs);
        state.finish_refresh(RefreshOutcome::Rendered(rendered.clone()));
        assert_eq!(state.view.get_untracked(), Some(rendered));

        runtime.dispose();
    }

    #[test]
    fn test_failed_and_superseded_refreshes_keep_placeholders() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());
        state.apply_options(options());

        let filter = state.begin_refresh().unwrap();
        let loading = Some(DashboardView::loading(&filter));

        state.finish_refresh(RefreshOutcome::Superseded);
        assert_eq!(state.view.get_untracked(), loading);

        state.finish_refresh(RefreshOutcome::Failed(FetchError::Status {
            endpoint: Endpoint::Statistics,
            status: 500,
        }));
        assert_eq!(state.view.get_untracked(), loading);
        let view = state.view.get_untracked().unwrap();
        assert!(view.panel(PanelId::TimeSeries).is_loading());
        assert_eq!(
            view.panel(PanelId::Indicator),
            &Panel::Notice("Select an indicator to display.".into())
        );

        runtime.dispose();
    }

    #[test]
    fn test_invalid_inputs_skip_the_refresh() {
        let runtime = create_runtime();
        let state = GlobalState::new(BrowserApi::default());
        state.apply_options(options());

        state.min_year.set("2031".into());
        assert!(state.begin_refresh().is_none());
        assert_eq!(state.view.get_untracked(), None);
        assert_eq!(state.year_label.get_untracked(), "1990 - 2030");

        runtime.dispose();
    }
}
