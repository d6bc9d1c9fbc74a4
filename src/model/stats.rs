//! Per-country statistics rows, as computed by the statistics endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Any non-number (null, `"N/A"`, ...) reads as missing
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    #[serde(rename = "País", default)]
    pub country: Option<String>,

    #[serde(rename = "Média", default, deserialize_with = "lenient_number")]
    pub mean: Option<f64>,

    #[serde(rename = "Mediana", default, deserialize_with = "lenient_number")]
    pub median: Option<f64>,

    #[serde(rename = "Desvio Padrão", default, deserialize_with = "lenient_number")]
    pub stddev: Option<f64>,

    #[serde(rename = "Mínimo", default, deserialize_with = "lenient_number")]
    pub min: Option<f64>,

    #[serde(rename = "Máximo", default, deserialize_with = "lenient_number")]
    pub max: Option<f64>,

    #[serde(rename = "Variação no Período", default, deserialize_with = "lenient_number")]
    pub range_of_variation: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_row() {
        let row: StatRow = serde_json::from_str(
            r#"{"País": "Brazil", "Média": 8500.25, "Mínimo": 8000, "Desvio Padrão": null}"#,
        )
        .unwrap();

        assert_eq!(row.country.as_deref(), Some("Brazil"));
        assert_eq!(row.mean, Some(8500.25));
        assert_eq!(row.min, Some(8000.0));
        assert_eq!(row.stddev, None);
        assert_eq!(row.max, None);
    }

    #[test]
    fn test_placeholder_cells_read_as_missing() {
        let rows: Vec<StatRow> = serde_json::from_str(
            r#"[{"País": "Brazil", "Média": 1.0},
                {"País": "Chile", "Desvio Padrão": "N/A", "Máximo": true, "Mínimo": 12}]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].mean, Some(1.0));
        assert_eq!(rows[1].country.as_deref(), Some("Chile"));
        assert_eq!(rows[1].stddev, None);
        assert_eq!(rows[1].max, None);
        assert_eq!(rows[1].min, Some(12.0));
    }
}
