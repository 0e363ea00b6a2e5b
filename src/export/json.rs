//! JSON export
//!
//! Writes the filtered holdings as an array of objects keyed by the export
//! column names.

use std::io::Write;

use crate::error::HoldingsResult;
use crate::models::HoldingsTable;

use super::row::ExportRow;

/// Export a table to pretty-printed JSON
pub fn export_json<W: Write>(table: &HoldingsTable, writer: &mut W) -> HoldingsResult<()> {
    let rows: Vec<ExportRow<'_>> = table.iter().map(ExportRow::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentRecord, Money};

    #[test]
    fn test_export_json() {
        let table = HoldingsTable::new(vec![
            InvestmentRecord::new("Odense Kommune", "Novo Nordisk B", Money::from_kroner(10)),
            InvestmentRecord::new("Odense Kommune", "Vestas Wind", Money::from_kroner(20)),
        ]);
        let mut buffer = Vec::new();
        export_json(&table, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["Værdipapirets navn"], "Vestas Wind");
        assert_eq!(rows[1]["Markedsværdi (DKK)"], 20.0);
        assert_eq!(rows[0]["OBS"], "");
    }

    #[test]
    fn test_empty_table() {
        let mut buffer = Vec::new();
        export_json(&HoldingsTable::default(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
