//! Filter Store Types
//!
//! The selection that drives every refresh. A [`FilterState`] is a plain
//! value: the UI adapter owns the current one and hands it to the
//! orchestrator by reference.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors building a filter from user input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid year range: {min} is after {max}")]
    InvertedYears { min: i32, max: i32 },

    #[error("Invalid year: '{0}'")]
    InvalidYear(String),
}

/// Global year bounds reported by the range endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min_ano: i32,
    pub max_ano: i32,
}

impl YearRange {
    pub fn bounds(&self) -> Result<YearBounds, FilterError> {
        YearBounds::new(self.min_ano, self.max_ano)
    }
}

/// Inclusive year window, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    min: i32,
    max: i32,
}

impl YearBounds {
    pub fn new(min: i32, max: i32) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedYears { min, max });
        }
        Ok(Self { min, max })
    }

    /// Parse the two bound inputs as typed by the user
    pub fn parse(min: &str, max: &str) -> Result<Self, FilterError> {
        let parse_one = |raw: &str| {
            raw.trim()
                .parse::<i32>()
                .map_err(|_| FilterError::InvalidYear(raw.to_string()))
        };
        Self::new(parse_one(min)?, parse_one(max)?)
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Span label shown next to the bound inputs and in chart titles
    pub fn label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// Key of an optional indicator column, as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorKey(String);

impl IndicatorKey {
    /// `None` for the synthetic "no indicator" choices (`""` and `"none"`)
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        if key.is_empty() || key.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(Self(key.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display_name(&self) -> String {
        super::display_name(&self.0)
    }
}

impl std::fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current selection: countries, year window and optional indicator
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    countries: Vec<String>,
    years: YearBounds,
    indicator: Option<IndicatorKey>,
}

impl FilterState {
    /// Duplicate countries are dropped, first occurrence wins
    pub fn new<I, S>(countries: I, years: YearBounds, indicator: Option<IndicatorKey>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for country in countries {
            let country = country.into();
            if !country.is_empty() && !unique.contains(&country) {
                unique.push(country);
            }
        }

        Self {
            countries: unique,
            years,
            indicator,
        }
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn years(&self) -> YearBounds {
        self.years
    }

    pub fn indicator(&self) -> Option<&IndicatorKey> {
        self.indicator.as_ref()
    }

    pub fn with_indicator(mut self, indicator: Option<IndicatorKey>) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn with_years(mut self, years: YearBounds) -> Self {
        self.years = years;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds_validation() {
        assert!(YearBounds::new(2015, 2020).is_ok());
        assert!(YearBounds::new(2020, 2020).is_ok());
        assert_eq!(
            YearBounds::new(2021, 2020),
            Err(FilterError::InvertedYears { min: 2021, max: 2020 })
        );
    }

    #[test]
    fn test_year_bounds_parse() {
        let bounds = YearBounds::parse(" 2000", "2030 ").unwrap();
        assert_eq!((bounds.min(), bounds.max()), (2000, 2030));
        assert_eq!(bounds.label(), "2000-2030");
        assert!(bounds.contains(2030));
        assert!(!bounds.contains(1999));

        assert_eq!(
            YearBounds::parse("20x0", "2030"),
            Err(FilterError::InvalidYear("20x0".to_string()))
        );
    }

    #[test]
    fn test_indicator_key_none_choices() {
        assert!(IndicatorKey::parse("").is_none());
        assert!(IndicatorKey::parse("None").is_none());
        assert!(IndicatorKey::parse("  ").is_none());

        let key = IndicatorKey::parse("Population_Growth").unwrap();
        assert_eq!(key.as_str(), "Population_Growth");
        assert_eq!(key.display_name(), "Population Growth");
    }

    #[test]
    fn test_filter_state_dedupes_countries() {
        let years = YearBounds::new(2015, 2020).unwrap();
        let filter = FilterState::new(["Brazil", "Germany", "Brazil", ""], years, None);
        assert_eq!(filter.countries(), &["Brazil".to_string(), "Germany".to_string()]);
        assert!(filter.indicator().is_none());
    }

    #[test]
    fn test_year_range_bounds() {
        let range: YearRange = serde_json::from_str(r#"{"min_ano": 1990, "max_ano": 2030}"#).unwrap();
        assert_eq!(range.bounds().unwrap().label(), "1990-2030");
    }
}
