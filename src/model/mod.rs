//! Dashboard Data Model
//!
//! Types shared by the fetcher, the renderers and the orchestrator.
//!
//! - [`Record`]: one country-year observation from the filtered dataset
//! - [`StatRow`]: per-country aggregate statistics computed by the backend
//! - [`FilterState`]: the active country / year / indicator selection

mod filter;
mod record;
mod stats;

pub use filter::{FilterError, FilterState, IndicatorKey, YearBounds, YearRange};
pub use record::{
    decode_records, Cell, Reading, Record, RecordError, COL_CAGR_FORECAST, COL_CONTINENT, COL_COUNTRY,
    COL_GDP_PER_CAPITA, COL_TYPE, COL_YEAR,
};
pub use stats::StatRow;

/// Human-readable label for a column or indicator key (`GDP_Growth` -> `GDP Growth`)
pub fn display_name(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("PIB_per_Capita"), "PIB per Capita");
        assert_eq!(display_name("Population"), "Population");
    }
}
