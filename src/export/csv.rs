//! CSV Export functionality
//!
//! Exports the record set to CSV with a fixed column order:
//! date, type, category, amount, description.

use std::io::Write;

use crate::error::TallyResult;
use crate::models::BudgetRecord;

/// Header row for record exports
pub const RECORD_CSV_HEADER: &str = "date,type,category,amount,description";

/// Export records to CSV
///
/// The description field is always quoted, with internal quotes doubled per
/// standard CSV escaping, so free text round-trips without corruption.
pub fn export_records_csv<W: Write>(records: &[BudgetRecord], writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "{}", RECORD_CSV_HEADER)
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},\"{}\"",
            record.date.format("%Y-%m-%d"),
            record.kind,
            record.category,
            record.amount.to_decimal_string(),
            record.description.replace('"', "\"\"")
        )
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordKind};
    use chrono::NaiveDate;

    fn record(kind: RecordKind, category: &str, cents: i64, description: &str) -> BudgetRecord {
        BudgetRecord::with_description(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
            description,
        )
    }

    #[test]
    fn test_export_header_and_rows() {
        let records = vec![
            record(RecordKind::Income, "salary", 850000, "January salary"),
            record(RecordKind::FixedExpense, "rent", 150000, ""),
        ];

        let mut output = Vec::new();
        export_records_csv(&records, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], RECORD_CSV_HEADER);
        assert_eq!(lines[1], "2025-01-15,income,salary,8500.00,\"January salary\"");
        assert_eq!(lines[2], "2025-01-15,fixed-expense,rent,1500.00,\"\"");
    }

    #[test]
    fn test_description_quotes_doubled() {
        let records = vec![record(
            RecordKind::VariableExpense,
            "dining-out",
            4500,
            "dinner at \"Mario's\"",
        )];

        let mut output = Vec::new();
        export_records_csv(&records, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("\"dinner at \"\"Mario's\"\"\""));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
