//! The exported row shape shared by every format

use serde::Serialize;

use crate::models::InvestmentRecord;

/// One exported holding, fields in export column order. The priority is
/// reduced to its marker and never exported itself.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow<'a> {
    #[serde(rename = "OBS")]
    pub marker: &'static str,
    #[serde(rename = "Kommune")]
    pub area: &'a str,
    #[serde(rename = "Værdipapirets navn")]
    pub security_name: &'a str,
    #[serde(rename = "Markedsværdi (DKK)")]
    pub market_value: f64,
    #[serde(rename = "Problematisk ifølge:")]
    pub flagged_by: &'a str,
    #[serde(rename = "Årsag til eksklusion")]
    pub reason: &'a str,
    #[serde(rename = "Årsagskategori")]
    pub category: &'a str,
    #[serde(rename = "Type")]
    pub security_type: &'a str,
    #[serde(rename = "ISIN kode")]
    pub isin: &'a str,
    #[serde(rename = "Udsteder")]
    pub issuer: &'a str,
}

impl<'a> From<&'a InvestmentRecord> for ExportRow<'a> {
    fn from(r: &'a InvestmentRecord) -> Self {
        Self {
            marker: r.severity.marker(),
            area: &r.area,
            security_name: &r.security_name,
            market_value: r.market_value.as_f64(),
            flagged_by: &r.flagged_by,
            reason: &r.reason,
            category: &r.category,
            security_type: &r.security_type,
            isin: &r.isin,
            issuer: &r.issuer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{columns, Money, Severity};

    #[test]
    fn test_field_order_matches_export_columns() {
        let record = InvestmentRecord::new("A", "x", Money::from_ore(150))
            .flagged(Severity::Potential, "r", "c");
        let value = serde_json::to_value(ExportRow::from(&record)).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), columns::EXPORT.len());
        for column in columns::EXPORT {
            assert!(object.contains_key(column), "missing {}", column);
        }
        assert!(!object.contains_key(columns::PRIORITY));
        assert_eq!(object["Markedsværdi (DKK)"], 1.5);
        assert_eq!(object["OBS"], "🟨");
    }
}
