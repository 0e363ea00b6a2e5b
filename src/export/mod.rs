//! Export module
//!
//! Writes a filtered holdings table in one of three formats:
//! - XLSX: the spreadsheet download
//! - CSV: plain text, spreadsheet-compatible
//! - JSON: machine-readable array of rows
//!
//! All formats share the column order in [`crate::models::columns::EXPORT`].

pub mod csv;
pub mod json;
pub mod row;
pub mod xlsx;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{HoldingsError, HoldingsResult};
use crate::models::{AreaSelector, HoldingsTable};

pub use self::csv::export_csv;
pub use self::json::export_json;
pub use self::row::ExportRow;
pub use self::xlsx::export_xlsx;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = HoldingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(HoldingsError::Validation(format!(
                "Unknown export format: '{}'. Use xlsx, csv or json",
                other
            ))),
        }
    }
}

/// Write a table in the given format
pub fn export_table<W: Write>(
    table: &HoldingsTable,
    format: ExportFormat,
    writer: &mut W,
) -> HoldingsResult<()> {
    log::info!("Exporting {} holdings as {}", table.len(), format);
    match format {
        ExportFormat::Xlsx => {
            let bytes = export_xlsx(table)?;
            writer.write_all(&bytes)?;
        }
        ExportFormat::Csv => export_csv(table, &mut *writer)?,
        ExportFormat::Json => export_json(table, writer)?,
    }
    Ok(())
}

/// Default file name for an export, e.g. `Investeringer for Hele landet.xlsx`
///
/// Path separators in the area label or search text are replaced so the name
/// stays a single path component.
pub fn export_file_name(selector: &AreaSelector, search: &str, format: ExportFormat) -> String {
    let stem = format!("Investeringer for {}{}", selector.label(), search.trim());
    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentRecord, Money};
    use std::path::Path;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(&AreaSelector::WholeCountry, "", ExportFormat::Xlsx),
            "Investeringer for Hele landet.xlsx"
        );
        assert_eq!(
            export_file_name(&AreaSelector::named("Aarhus Kommune"), " kul", ExportFormat::Csv),
            "Investeringer for Aarhus Kommunekul.csv"
        );
        assert_eq!(
            export_file_name(&AreaSelector::AllRegions, "a/b", ExportFormat::Json),
            "Investeringer for Alle regionera-b.json"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("XLSX".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!(
            ExportFormat::from_path(Path::new("out/holdings.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("holdings")), None);
    }

    #[test]
    fn test_export_table_dispatch() {
        let table = HoldingsTable::new(vec![InvestmentRecord::new(
            "Aarhus Kommune",
            "Novo Nordisk B",
            Money::from_kroner(10),
        )]);

        let mut xlsx = Vec::new();
        export_table(&table, ExportFormat::Xlsx, &mut xlsx).unwrap();
        assert!(xlsx.starts_with(b"PK"));

        let mut csv = Vec::new();
        export_table(&table, ExportFormat::Csv, &mut csv).unwrap();
        assert!(String::from_utf8(csv).unwrap().contains("Novo Nordisk B"));
    }
}
