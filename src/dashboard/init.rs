//! Filter control initialisation
//!
//! Startup reads the three enumerations one after another. A failed read is
//! logged and leaves its control empty; the page still comes up.

use serde::Serialize;

use crate::client::DashboardApi;
use crate::model::{display_name, FilterError, FilterState, IndicatorKey, YearBounds};

/// Countries selected when the page first loads
pub const DEFAULT_SELECTED_COUNTRIES: usize = 2;

/// Value of the synthetic "no indicator" option
pub const NO_INDICATOR: &str = "";

/// One entry of the indicator selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorOption {
    pub value: String,
    pub label: String,
}

impl IndicatorOption {
    pub fn none() -> Self {
        Self {
            value: NO_INDICATOR.to_string(),
            label: "None".to_string(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self {
            value: key.to_string(),
            label: display_name(key),
        }
    }
}

/// Everything the filter controls are populated with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    /// Starts with the "None" option whenever the read succeeded
    pub indicators: Vec<IndicatorOption>,
    /// `None` when the range read failed
    pub years: Option<YearBounds>,
}

impl FilterOptions {
    /// The selection the page starts with: first countries, full range,
    /// no indicator. `None` without a year range.
    pub fn initial_filter(&self) -> Option<FilterState> {
        let years = self.years?;
        Some(FilterState::new(
            self.countries.iter().take(DEFAULT_SELECTED_COUNTRIES).cloned(),
            years,
            None,
        ))
    }
}

/// Populate the filter controls from the enumeration endpoints
pub async fn initialize<A: DashboardApi + ?Sized>(api: &A) -> FilterOptions {
    let mut options = FilterOptions::default();

    match api.countries().await {
        Ok(countries) => options.countries = countries,
        Err(err) => tracing::error!(error = %err, "Failed to load countries"),
    }

    match api.indicators().await {
        Ok(keys) => {
            options.indicators = std::iter::once(IndicatorOption::none())
                .chain(keys.iter().map(|k| IndicatorOption::from_key(k)))
                .collect();
        }
        Err(err) => tracing::error!(error = %err, "Failed to load indicators"),
    }

    match api.year_range().await {
        Ok(range) => match range.bounds() {
            Ok(bounds) => options.years = Some(bounds),
            Err(err) => tracing::error!(error = %err, "Backend returned an invalid year range"),
        },
        Err(err) => tracing::error!(error = %err, "Failed to load year range"),
    }

    tracing::info!(
        countries = options.countries.len(),
        indicators = options.indicators.len(),
        years = ?options.years.map(|y| y.label()),
        "Filter options loaded"
    );
    options
}

/// Build a filter from the raw control values.
///
/// Year inputs are free text; an unparseable or inverted pair is rejected.
pub fn filter_from_inputs<S: AsRef<str>>(
    countries: &[S],
    min_year: &str,
    max_year: &str,
    indicator: &str,
) -> Result<FilterState, FilterError> {
    let years = YearBounds::parse(min_year, max_year)?;
    Ok(FilterState::new(
        countries.iter().map(|c| c.as_ref().to_string()),
        years,
        IndicatorKey::parse(indicator),
    ))
}

/// Span shown next to the year inputs
pub fn year_label(filter: &FilterState) -> String {
    format!("{} - {}", filter.years().min(), filter.years().max())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_options() {
        let option = IndicatorOption::from_key("Population_Growth");
        assert_eq!(option.value, "Population_Growth");
        assert_eq!(option.label, "Population Growth");
        assert_eq!(IndicatorOption::none().value, "");
    }

    #[test]
    fn test_initial_filter_defaults() {
        let options = FilterOptions {
            countries: vec!["Brazil".into(), "Germany".into(), "India".into()],
            indicators: vec![IndicatorOption::none()],
            years: Some(YearBounds::new(1990, 2030).unwrap()),
        };

        let filter = options.initial_filter().unwrap();
        assert_eq!(filter.countries(), ["Brazil", "Germany"]);
        assert_eq!(filter.years(), YearBounds::new(1990, 2030).unwrap());
        assert!(filter.indicator().is_none());
        assert_eq!(year_label(&filter), "1990 - 2030");
    }

    #[test]
    fn test_initial_filter_without_years() {
        let options = FilterOptions {
            countries: vec!["Brazil".into()],
            ..FilterOptions::default()
        };
        assert!(options.initial_filter().is_none());
    }

    #[test]
    fn test_filter_from_inputs() {
        let filter = filter_from_inputs(&["Brazil", "Chile"], "2015", " 2020 ", "none").unwrap();
        assert_eq!(filter.countries(), ["Brazil", "Chile"]);
        assert_eq!(filter.years().label(), "2015-2020");
        assert!(filter.indicator().is_none());

        let filter = filter_from_inputs(&["Brazil"], "2015", "2020", "Inflation_Rate").unwrap();
        assert_eq!(filter.indicator().map(IndicatorKey::as_str), Some("Inflation_Rate"));
    }

    #[test]
    fn test_filter_from_bad_inputs() {
        assert_eq!(
            filter_from_inputs(&["Brazil"], "2021", "2020", ""),
            Err(FilterError::InvertedYears { min: 2021, max: 2020 })
        );
        assert!(matches!(
            filter_from_inputs(&["Brazil"], "", "2020", ""),
            Err(FilterError::InvalidYear(_))
        ));
    }
}
