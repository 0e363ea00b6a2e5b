//! Untyped dataset table
//!
//! The dataset arrives as a CSV table whose protected columns hold
//! ciphertext. [`RawTable`] keeps every cell as a string so those columns can
//! be decrypted before any typing happens.

use std::io::{Read, Write};

use crate::error::{HoldingsError, HoldingsResult};
use crate::models::{columns, HoldingsTable, InvestmentRecord, Money, Severity};

/// A header row plus string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table; every row must have one cell per header
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> HoldingsResult<Self> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(HoldingsError::Validation(format!(
                "Row {} has {} cells, expected {}",
                i + 1,
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Copy of the table with `f` applied to every cell of column `index`
    ///
    /// Stops at the first failing cell and reports its 1-based row number.
    pub fn map_column<F>(&self, index: usize, mut f: F) -> HoldingsResult<Self>
    where
        F: FnMut(&str) -> HoldingsResult<String>,
    {
        let mut rows = self.rows.clone();
        for (i, row) in rows.iter_mut().enumerate() {
            let cell = &mut row[index];
            *cell = f(cell).map_err(|e| annotate_row(e, &self.headers[index], i + 1))?;
        }
        Ok(Self {
            headers: self.headers.clone(),
            rows,
        })
    }

    /// Read a CSV table with a header row
    pub fn read_csv<R: Read>(reader: R) -> HoldingsResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Self::new(headers, rows)
    }

    /// Write the table as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> HoldingsResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Type every row into an [`InvestmentRecord`]
    ///
    /// Missing optional columns read as empty; missing required columns and
    /// rows violating the record invariants are validation errors.
    pub fn to_holdings(&self) -> HoldingsResult<HoldingsTable> {
        let required = |name: &str| {
            self.column_index(name)
                .ok_or_else(|| HoldingsError::column_not_found(name))
        };
        let area = required(columns::AREA)?;
        let security_name = required(columns::SECURITY_NAME)?;
        let market_value = required(columns::MARKET_VALUE)?;

        let isin = self.column_index(columns::ISIN);
        let flagged_by = self.column_index(columns::FLAGGED_BY);
        let reason = self.column_index(columns::REASON);
        let category = self.column_index(columns::CATEGORY);
        let security_type = self.column_index(columns::SECURITY_TYPE);
        let issuer = self.column_index(columns::ISSUER);
        let priority = self.column_index(columns::PRIORITY);

        let mut records = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let line = i + 1;
            let optional = |idx: Option<usize>| idx.map(|j| row[j].clone()).unwrap_or_default();

            let value = Money::parse(&row[market_value]).map_err(|e| {
                HoldingsError::Validation(format!("Row {}: {}", line, e))
            })?;
            let severity = match priority {
                Some(j) => Severity::parse(&row[j])
                    .map_err(|e| HoldingsError::Validation(format!("Row {}: {}", line, e)))?,
                None => Severity::None,
            };

            let record = InvestmentRecord {
                area: row[area].clone(),
                isin: optional(isin),
                security_name: row[security_name].clone(),
                market_value: value,
                flagged_by: optional(flagged_by),
                reason: optional(reason),
                category: optional(category),
                security_type: optional(security_type),
                issuer: optional(issuer),
                severity,
            };

            record
                .validate()
                .map_err(|e| HoldingsError::Validation(format!("Row {}: {}", line, e)))?;
            records.push(record);
        }

        Ok(HoldingsTable::new(records))
    }

    /// Untyped view of a holdings table, in dataset column order
    pub fn from_holdings(table: &HoldingsTable) -> Self {
        let headers = [
            columns::AREA,
            columns::ISIN,
            columns::SECURITY_NAME,
            columns::MARKET_VALUE,
            columns::FLAGGED_BY,
            columns::REASON,
            columns::CATEGORY,
            columns::SECURITY_TYPE,
            columns::ISSUER,
            columns::PRIORITY,
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();

        let rows = table
            .iter()
            .map(|r| {
                vec![
                    r.area.clone(),
                    r.isin.clone(),
                    r.security_name.clone(),
                    r.market_value.to_string(),
                    r.flagged_by.clone(),
                    r.reason.clone(),
                    r.category.clone(),
                    r.security_type.clone(),
                    r.issuer.clone(),
                    r.severity.rank().to_string(),
                ]
            })
            .collect();

        Self { headers, rows }
    }
}

fn annotate_row(err: HoldingsError, column: &str, line: usize) -> HoldingsError {
    match err {
        HoldingsError::Decryption(msg) => {
            HoldingsError::Decryption(format!("Column '{}', row {}: {}", column, line, msg))
        }
        HoldingsError::Serialization(msg) => {
            HoldingsError::Serialization(format!("Column '{}', row {}: {}", column, line, msg))
        }
        other => other,
    }
}
