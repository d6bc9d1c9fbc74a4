//! CSV Export
//!
//! Writes the records of a selection as CSV. Known columns come first in
//! the details-table order, any other column follows sorted by name.

use std::collections::BTreeSet;
use std::io::Write;

use thiserror::Error;

use crate::model::{Cell, Record};
use crate::render::table::DETAIL_COLUMNS;

/// Errors writing an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Header row for the records: every column seen in any record
pub fn export_columns(records: &[Record]) -> Vec<String> {
    let seen: BTreeSet<&str> = records.iter().flat_map(|r| r.column_names()).collect();

    let known = DETAIL_COLUMNS
        .iter()
        .filter(|col| seen.contains(*col))
        .map(|col| col.to_string());
    let extra = seen
        .iter()
        .filter(|col| !DETAIL_COLUMNS.contains(*col))
        .map(|col| col.to_string());

    known.chain(extra).collect()
}

fn raw_cell(cell: Option<Cell>) -> String {
    match cell {
        None | Some(Cell::Null) => String::new(),
        Some(Cell::Number(v)) => v.to_string(),
        Some(Cell::Text(text)) => text,
    }
}

/// Write the records as CSV; returns the number of data rows
pub fn write_records_csv<W: Write>(records: &[Record], writer: W) -> ExportResult<usize> {
    let columns = export_columns(records);
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(&columns)?;
    for record in records {
        csv.write_record(columns.iter().map(|col| raw_cell(record.cell(col))))?;
    }
    csv.flush()?;

    tracing::debug!(rows = records.len(), columns = columns.len(), "Wrote CSV export");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{COL_CAGR_FORECAST, COL_GDP_PER_CAPITA};

    fn records() -> Vec<Record> {
        vec![
            Record::new("Brazil", 2020)
                .column(COL_GDP_PER_CAPITA, 6800.5)
                .column("Population", 212.0)
                .column(COL_CAGR_FORECAST, Cell::Null),
            Record::new("Germany", 2020)
                .column(COL_GDP_PER_CAPITA, 46200.0)
                .column("Inflation_Rate", "N/A"),
        ]
    }

    #[test]
    fn test_export_columns_order() {
        assert_eq!(
            export_columns(&records()),
            vec![
                "Pais",
                "Ano",
                "PIB_per_Capita",
                "CAGR_Forecast",
                "Inflation_Rate",
                "Population"
            ]
        );
        assert!(export_columns(&[]).is_empty());
    }

    #[test]
    fn test_write_records_csv() {
        let mut out = Vec::new();
        let rows = write_records_csv(&records(), &mut out).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Pais,Ano,PIB_per_Capita,CAGR_Forecast,Inflation_Rate,Population",
                "Brazil,2020,6800.5,,,212",
                "Germany,2020,46200,,N/A,",
            ]
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.csv");

        let file = std::fs::File::create(&path).unwrap();
        write_records_csv(&records(), file).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 6);
        assert_eq!(reader.records().count(), 2);
    }
}
