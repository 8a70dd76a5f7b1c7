//! Yearly Report
//!
//! Aggregates a record snapshot into one bucket per year, with the same
//! per-kind sums and derived balance as the monthly report.

use std::collections::BTreeSet;
use std::io::Write;

use crate::error::TallyResult;
use crate::models::{BudgetRecord, Money};

use super::monthly::KindTotals;

/// One year bucket of the yearly report
#[derive(Debug, Clone)]
pub struct YearBucket {
    /// Calendar year
    pub year: i32,
    /// Per-kind sums for the year
    pub totals: KindTotals,
}

impl YearBucket {
    /// Derived balance for the year
    pub fn balance(&self) -> Money {
        self.totals.balance()
    }
}

/// Yearly Report across a set of years
#[derive(Debug, Clone)]
pub struct YearlyReport {
    /// One bucket per requested year, in the order given
    pub years: Vec<YearBucket>,
}

impl YearlyReport {
    /// Generate the report for an explicit list of years
    ///
    /// A year with no records yields a zero-filled bucket.
    pub fn generate(records: &[BudgetRecord], years: &[i32]) -> Self {
        let buckets = years
            .iter()
            .map(|&year| {
                let mut totals = KindTotals::default();
                for record in records.iter().filter(|r| r.year() == year) {
                    totals.add(record);
                }
                YearBucket { year, totals }
            })
            .collect();

        Self { years: buckets }
    }

    /// Generate the report for every year present in the record set,
    /// most recent first
    pub fn generate_all(records: &[BudgetRecord]) -> Self {
        let years = available_years(records);
        Self::generate(records, &years)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Yearly Report\n");
        output.push_str(&"=".repeat(100));
        output.push('\n');

        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
            "Year", "Income", "Fixed", "Variable", "Savings", "Invest", "Balance"
        ));
        output.push_str(&"-".repeat(100));
        output.push('\n');

        for bucket in &self.years {
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
                bucket.year,
                bucket.totals.income,
                bucket.totals.fixed_expenses,
                bucket.totals.variable_expenses,
                bucket.totals.savings,
                bucket.totals.investments,
                bucket.balance()
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(
            writer,
            "Year,Income,Fixed Expenses,Variable Expenses,Savings,Investments,Balance"
        )
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;

        for bucket in &self.years {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                bucket.year,
                bucket.totals.income.to_decimal_string(),
                bucket.totals.fixed_expenses.to_decimal_string(),
                bucket.totals.variable_expenses.to_decimal_string(),
                bucket.totals.savings.to_decimal_string(),
                bucket.totals.investments.to_decimal_string(),
                bucket.balance().to_decimal_string()
            )
            .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

/// The distinct years present in the record set, most recent first
pub fn available_years(records: &[BudgetRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(|r| r.year()).collect();
    years.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, kind: RecordKind, category: &str, cents: i64) -> BudgetRecord {
        BudgetRecord::new(
            NaiveDate::from_ymd_opt(y, m, 15).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_available_years_descending() {
        let records = vec![
            record(2023, 1, RecordKind::Income, "salary", 1000),
            record(2025, 6, RecordKind::Income, "salary", 1000),
            record(2024, 3, RecordKind::Income, "salary", 1000),
            record(2025, 2, RecordKind::FixedExpense, "rent", 500),
        ];

        assert_eq!(available_years(&records), vec![2025, 2024, 2023]);
    }

    #[test]
    fn test_available_years_empty() {
        assert!(available_years(&[]).is_empty());
    }

    #[test]
    fn test_generate_all() {
        let records = vec![
            record(2024, 1, RecordKind::Income, "salary", 500000),
            record(2024, 2, RecordKind::FixedExpense, "rent", 100000),
            record(2025, 1, RecordKind::Income, "salary", 600000),
        ];

        let report = YearlyReport::generate_all(&records);
        assert_eq!(report.years.len(), 2);

        // Most recent first
        assert_eq!(report.years[0].year, 2025);
        assert_eq!(report.years[0].balance().cents(), 600000);

        assert_eq!(report.years[1].year, 2024);
        assert_eq!(report.years[1].balance().cents(), 400000);
    }

    #[test]
    fn test_year_without_records_is_zero_filled() {
        let records = vec![record(2025, 1, RecordKind::Income, "salary", 1000)];

        let report = YearlyReport::generate(&records, &[2024, 2025]);
        assert_eq!(report.years.len(), 2);
        assert!(report.years[0].totals.is_zero());
        assert_eq!(report.years[1].totals.income.cents(), 1000);
    }

    #[test]
    fn test_csv_export() {
        let records = vec![record(2025, 1, RecordKind::Income, "salary", 850000)];
        let report = YearlyReport::generate_all(&records);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("Year,Income,"));
        assert!(csv_string.contains("2025,8500.00,"));
    }
}
