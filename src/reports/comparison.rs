//! Comparison Report
//!
//! Compares two report periods, either per kind or per (kind, category)
//! pair, with absolute differences and percentage changes.

use std::collections::{BTreeSet, HashMap};
use std::io::Write;

use crate::error::TallyResult;
use crate::models::{BudgetRecord, CategoryCatalog, Money, RecordKind, ReportPeriod};

/// Comparison granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One row per record kind (five rows, zero-filled where absent)
    ByKind,
    /// One row per (kind, category) pair present in either period
    ByCategory,
}

/// One row of the comparison
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// Record kind
    pub kind: RecordKind,
    /// Category key; `None` for by-kind rows
    pub category: Option<String>,
    /// Display label (kind label, or the category label from the catalog)
    pub label: String,
    /// Sum for the first period
    pub first: Money,
    /// Sum for the second period
    pub second: Money,
}

impl ComparisonEntry {
    /// Absolute difference: second minus first
    pub fn difference(&self) -> Money {
        self.second - self.first
    }

    /// Percentage change relative to the first period
    ///
    /// `None` ("not applicable") when the base value is zero, so the
    /// comparison never divides by zero.
    pub fn percent_change(&self) -> Option<f64> {
        if self.first.is_zero() {
            return None;
        }
        Some(self.difference().cents() as f64 / self.first.cents() as f64 * 100.0)
    }
}

/// Comparison Report between two periods
///
/// The aggregator does not enforce period distinctness: identical periods
/// produce a trivial zero-diff comparison. Callers that want two distinct
/// sides perturb one period before invoking it.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// First period
    pub first_period: ReportPeriod,
    /// Second period
    pub second_period: ReportPeriod,
    /// Granularity the report was generated at
    pub granularity: Granularity,
    /// Comparison rows
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    /// Generate the comparison from a record snapshot
    pub fn generate(
        records: &[BudgetRecord],
        first_period: ReportPeriod,
        second_period: ReportPeriod,
        granularity: Granularity,
        catalog: &CategoryCatalog,
    ) -> Self {
        let entries = match granularity {
            Granularity::ByKind => Self::by_kind(records, first_period, second_period),
            Granularity::ByCategory => {
                Self::by_category(records, first_period, second_period, catalog)
            }
        };

        Self {
            first_period,
            second_period,
            granularity,
            entries,
        }
    }

    fn by_kind(
        records: &[BudgetRecord],
        first_period: ReportPeriod,
        second_period: ReportPeriod,
    ) -> Vec<ComparisonEntry> {
        let mut first: HashMap<RecordKind, Money> = HashMap::new();
        let mut second: HashMap<RecordKind, Money> = HashMap::new();

        for record in records {
            if first_period.contains(record.date) {
                *first.entry(record.kind).or_insert(Money::zero()) += record.amount;
            }
            if second_period.contains(record.date) {
                *second.entry(record.kind).or_insert(Money::zero()) += record.amount;
            }
        }

        // All five kinds always appear, zero-filled where absent
        RecordKind::all()
            .iter()
            .map(|&kind| ComparisonEntry {
                kind,
                category: None,
                label: kind.label().to_string(),
                first: first.get(&kind).copied().unwrap_or_default(),
                second: second.get(&kind).copied().unwrap_or_default(),
            })
            .collect()
    }

    fn by_category(
        records: &[BudgetRecord],
        first_period: ReportPeriod,
        second_period: ReportPeriod,
        catalog: &CategoryCatalog,
    ) -> Vec<ComparisonEntry> {
        let mut first: HashMap<(RecordKind, String), Money> = HashMap::new();
        let mut second: HashMap<(RecordKind, String), Money> = HashMap::new();

        for record in records {
            let key = (record.kind, record.category.clone());
            if first_period.contains(record.date) {
                *first.entry(key.clone()).or_insert(Money::zero()) += record.amount;
            }
            if second_period.contains(record.date) {
                *second.entry(key).or_insert(Money::zero()) += record.amount;
            }
        }

        // Union of both key sets, so a category present in only one period
        // still appears with zero in the other
        let keys: BTreeSet<(RecordKind, String)> =
            first.keys().chain(second.keys()).cloned().collect();

        keys.into_iter()
            .map(|key| {
                let first_total = first.get(&key).copied().unwrap_or_default();
                let second_total = second.get(&key).copied().unwrap_or_default();
                let (kind, category) = key;
                ComparisonEntry {
                    label: catalog.label(kind, &category),
                    kind,
                    category: Some(category),
                    first: first_total,
                    second: second_total,
                }
            })
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Comparison: {} vs {}\n",
            self.first_period, self.second_period
        ));
        output.push_str(&"=".repeat(90));
        output.push('\n');

        output.push_str(&format!(
            "{:<30} {:>13} {:>13} {:>13} {:>10}\n",
            "Entry", self.first_period, self.second_period, "Diff", "Change"
        ));
        output.push_str(&"-".repeat(90));
        output.push('\n');

        for entry in &self.entries {
            let change = match entry.percent_change() {
                Some(pct) => format!("{:+.1}%", pct),
                None => "n/a".to_string(),
            };
            output.push_str(&format!(
                "{:<30} {:>13} {:>13} {:>13} {:>10}\n",
                entry.label,
                entry.first,
                entry.second,
                entry.difference(),
                change
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(
            writer,
            "Kind,Category,Label,Period 1,Period 2,Difference,Percent Change"
        )
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;

        for entry in &self.entries {
            let change = match entry.percent_change() {
                Some(pct) => format!("{:.2}", pct),
                None => String::new(),
            };
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                entry.kind,
                entry.category.as_deref().unwrap_or(""),
                crate::export::csv::escape_csv(&entry.label),
                entry.first.to_decimal_string(),
                entry.second.to_decimal_string(),
                entry.difference().to_decimal_string(),
                change
            )
            .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, kind: RecordKind, category: &str, cents: i64) -> BudgetRecord {
        BudgetRecord::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
    }

    fn scenario_records() -> Vec<BudgetRecord> {
        vec![
            record(2025, 1, 5, RecordKind::Income, "salary", 850000),
            record(2025, 1, 1, RecordKind::FixedExpense, "rent", 150000),
            record(2025, 2, 5, RecordKind::Income, "salary", 850000),
        ]
    }

    #[test]
    fn test_by_kind_scenario() {
        // period1 = 2025-01, period2 = 2025-02
        let report = ComparisonReport::generate(
            &scenario_records(),
            ReportPeriod::month(2025, 1),
            ReportPeriod::month(2025, 2),
            Granularity::ByKind,
            &CategoryCatalog::default(),
        );

        assert_eq!(report.entries.len(), 5);

        let income = report
            .entries
            .iter()
            .find(|e| e.kind == RecordKind::Income)
            .unwrap();
        assert_eq!(income.difference(), Money::zero());

        let fixed = report
            .entries
            .iter()
            .find(|e| e.kind == RecordKind::FixedExpense)
            .unwrap();
        assert_eq!(fixed.difference().cents(), -150000);
        // Base is 1500, not zero, so the change is applicable: -100%
        assert_eq!(fixed.percent_change(), Some(-100.0));
    }

    #[test]
    fn test_percent_change_not_applicable_on_zero_base() {
        let records = vec![record(2025, 2, 5, RecordKind::Savings, "emergency-fund", 1000)];

        let report = ComparisonReport::generate(
            &records,
            ReportPeriod::month(2025, 1),
            ReportPeriod::month(2025, 2),
            Granularity::ByKind,
            &CategoryCatalog::default(),
        );

        let savings = report
            .entries
            .iter()
            .find(|e| e.kind == RecordKind::Savings)
            .unwrap();
        assert_eq!(savings.percent_change(), None);
        assert_eq!(savings.difference().cents(), 1000);
    }

    #[test]
    fn test_by_category_union_semantics() {
        // "rent" appears only in January, "groceries" only in February; both
        // must appear on both sides.
        let records = vec![
            record(2025, 1, 1, RecordKind::FixedExpense, "rent", 150000),
            record(2025, 2, 10, RecordKind::VariableExpense, "groceries", 40000),
        ];

        let report = ComparisonReport::generate(
            &records,
            ReportPeriod::month(2025, 1),
            ReportPeriod::month(2025, 2),
            Granularity::ByCategory,
            &CategoryCatalog::default(),
        );

        assert_eq!(report.entries.len(), 2);

        let rent = report
            .entries
            .iter()
            .find(|e| e.category.as_deref() == Some("rent"))
            .unwrap();
        assert_eq!(rent.first.cents(), 150000);
        assert_eq!(rent.second, Money::zero());

        let groceries = report
            .entries
            .iter()
            .find(|e| e.category.as_deref() == Some("groceries"))
            .unwrap();
        assert_eq!(groceries.first, Money::zero());
        assert_eq!(groceries.second.cents(), 40000);
    }

    #[test]
    fn test_quarter_periods() {
        let records = vec![
            record(2025, 1, 15, RecordKind::Income, "salary", 100000),
            record(2025, 3, 15, RecordKind::Income, "salary", 100000),
            record(2025, 4, 15, RecordKind::Income, "salary", 300000),
        ];

        let report = ComparisonReport::generate(
            &records,
            ReportPeriod::quarter(2025, 1),
            ReportPeriod::quarter(2025, 2),
            Granularity::ByKind,
            &CategoryCatalog::default(),
        );

        let income = report
            .entries
            .iter()
            .find(|e| e.kind == RecordKind::Income)
            .unwrap();
        assert_eq!(income.first.cents(), 200000);
        assert_eq!(income.second.cents(), 300000);
        assert_eq!(income.percent_change(), Some(50.0));
    }

    #[test]
    fn test_identical_periods_trivial_comparison() {
        let report = ComparisonReport::generate(
            &scenario_records(),
            ReportPeriod::month(2025, 1),
            ReportPeriod::month(2025, 1),
            Granularity::ByKind,
            &CategoryCatalog::default(),
        );

        assert!(report.entries.iter().all(|e| e.difference().is_zero()));
    }

    #[test]
    fn test_empty_records_by_kind_still_five_rows() {
        let report = ComparisonReport::generate(
            &[],
            ReportPeriod::year(2024),
            ReportPeriod::year(2025),
            Granularity::ByKind,
            &CategoryCatalog::default(),
        );

        assert_eq!(report.entries.len(), 5);
        assert!(report.entries.iter().all(|e| e.first.is_zero() && e.second.is_zero()));
    }
}
