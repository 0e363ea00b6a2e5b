//! CSV export
//!
//! Writes the filtered holdings in export column order.

use std::io::Write;

use crate::error::HoldingsResult;
use crate::models::HoldingsTable;

use super::row::ExportRow;

/// Export a table to CSV
///
/// An empty table still writes the header line.
pub fn export_csv<W: Write>(table: &HoldingsTable, writer: W) -> HoldingsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if table.is_empty() {
        csv_writer.write_record(crate::models::columns::EXPORT)?;
    }
    for record in table {
        csv_writer.serialize(ExportRow::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentRecord, Money, Severity};

    #[test]
    fn test_export_csv() {
        let table = HoldingsTable::new(vec![
            InvestmentRecord::new("Aarhus Kommune", "Altria, Group", Money::from_ore(150_050))
                .flagged(Severity::CompanyBlacklist, "Tobacco", "Tobak"),
        ]);
        let mut buffer = Vec::new();
        export_csv(&table, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "OBS,Kommune,Værdipapirets navn,Markedsværdi (DKK),Problematisk ifølge:,\
             Årsag til eksklusion,Årsagskategori,Type,ISIN kode,Udsteder"
        );
        assert_eq!(
            lines.next().unwrap(),
            "🟥,Aarhus Kommune,\"Altria, Group\",1500.5,,Tobacco,Tobak,,,"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_table_writes_header() {
        let mut buffer = Vec::new();
        export_csv(&HoldingsTable::default(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("OBS,Kommune"));
        assert!(!output.contains("Priority"));
    }
}
