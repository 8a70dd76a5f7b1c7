//! Monthly Report
//!
//! Aggregates a record snapshot into twelve month buckets for a target year,
//! with per-kind sums and a derived balance per month.

use std::io::Write;

use crate::error::TallyResult;
use crate::models::{BudgetRecord, Money, RecordKind};

/// Month display names, indexed by month - 1
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Per-kind sums for one slice of the record set
///
/// Shared by the monthly and yearly reports; `balance` is derived, never
/// summed directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindTotals {
    /// Total income
    pub income: Money,
    /// Total fixed expenses
    pub fixed_expenses: Money,
    /// Total variable expenses
    pub variable_expenses: Money,
    /// Total savings contributions
    pub savings: Money,
    /// Total investment contributions
    pub investments: Money,
}

impl KindTotals {
    /// Add one record's amount to the matching kind total
    pub fn add(&mut self, record: &BudgetRecord) {
        match record.kind {
            RecordKind::Income => self.income += record.amount,
            RecordKind::FixedExpense => self.fixed_expenses += record.amount,
            RecordKind::VariableExpense => self.variable_expenses += record.amount,
            RecordKind::Savings => self.savings += record.amount,
            RecordKind::Investment => self.investments += record.amount,
        }
    }

    /// The sum for a single kind
    pub fn for_kind(&self, kind: RecordKind) -> Money {
        match kind {
            RecordKind::Income => self.income,
            RecordKind::FixedExpense => self.fixed_expenses,
            RecordKind::VariableExpense => self.variable_expenses,
            RecordKind::Savings => self.savings,
            RecordKind::Investment => self.investments,
        }
    }

    /// balance = income − (fixed + variable + savings + investments)
    pub fn balance(&self) -> Money {
        self.income - self.fixed_expenses - self.variable_expenses - self.savings
            - self.investments
    }

    /// Check if every kind total is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// One month bucket of the monthly report
#[derive(Debug, Clone)]
pub struct MonthBucket {
    /// Calendar month, 1-12
    pub month: u32,
    /// Per-kind sums for the month
    pub totals: KindTotals,
}

impl MonthBucket {
    /// Month display name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Derived balance for the month
    pub fn balance(&self) -> Money {
        self.totals.balance()
    }
}

/// Monthly Report for a single year
///
/// Always holds exactly twelve buckets (January..December); months without
/// records are zero-filled so charts render a complete axis.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// Target year
    pub year: i32,
    /// Exactly twelve buckets, January first
    pub months: Vec<MonthBucket>,
}

impl MonthlyReport {
    /// Generate the report from a record snapshot
    ///
    /// Records outside the target year are ignored. Pure function: the
    /// snapshot is never mutated.
    pub fn generate(records: &[BudgetRecord], year: i32) -> Self {
        let mut months: Vec<MonthBucket> = (1..=12)
            .map(|month| MonthBucket {
                month,
                totals: KindTotals::default(),
            })
            .collect();

        for record in records {
            if record.year() != year {
                continue;
            }
            months[(record.month() - 1) as usize].totals.add(record);
        }

        Self { year, months }
    }

    /// Total balance across the year
    pub fn year_balance(&self) -> Money {
        self.months.iter().map(|m| m.balance()).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Report: {}\n", self.year));
        output.push_str(&"=".repeat(100));
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
            "Month", "Income", "Fixed", "Variable", "Savings", "Invest", "Balance"
        ));
        output.push_str(&"-".repeat(100));
        output.push('\n');

        for bucket in &self.months {
            output.push_str(&format!(
                "{:<12} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13}\n",
                bucket.name(),
                bucket.totals.income,
                bucket.totals.fixed_expenses,
                bucket.totals.variable_expenses,
                bucket.totals.savings,
                bucket.totals.investments,
                bucket.balance()
            ));
        }

        output.push_str(&"-".repeat(100));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>83}\n",
            "Year Total",
            self.year_balance().to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(
            writer,
            "Month,Income,Fixed Expenses,Variable Expenses,Savings,Investments,Balance"
        )
        .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;

        for bucket in &self.months {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                bucket.name(),
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

    #[test]
    fn test_always_twelve_buckets() {
        let report = MonthlyReport::generate(&[], 2025);
        assert_eq!(report.months.len(), 12);
        assert!(report.months.iter().all(|m| m.totals.is_zero()));
        assert_eq!(report.months[0].month, 1);
        assert_eq!(report.months[11].month, 12);
    }

    #[test]
    fn test_scenario_balances() {
        // {2025-01-05, income, salary, 8500}, {2025-01-01, fixed-expense, rent, 1500},
        // {2025-02-05, income, salary, 8500}
        let records = vec![
            record(2025, 1, 5, RecordKind::Income, "salary", 850000),
            record(2025, 1, 1, RecordKind::FixedExpense, "rent", 150000),
            record(2025, 2, 5, RecordKind::Income, "salary", 850000),
        ];

        let report = MonthlyReport::generate(&records, 2025);

        assert_eq!(report.months[0].balance().cents(), 700000); // January: 8500 - 1500
        assert_eq!(report.months[1].balance().cents(), 850000); // February: 8500

        for bucket in &report.months[2..] {
            assert!(bucket.totals.is_zero());
            assert_eq!(bucket.balance(), Money::zero());
        }
    }

    #[test]
    fn test_records_outside_year_ignored() {
        let records = vec![
            record(2024, 6, 1, RecordKind::Income, "salary", 100000),
            record(2026, 6, 1, RecordKind::Income, "salary", 100000),
            record(2025, 6, 1, RecordKind::Income, "salary", 50000),
        ];

        let report = MonthlyReport::generate(&records, 2025);
        assert_eq!(report.months[5].totals.income.cents(), 50000);
        assert_eq!(report.year_balance().cents(), 50000);
    }

    #[test]
    fn test_balance_conservation() {
        // Balance from the aggregator must equal the balance computed
        // directly from the raw records.
        let records = vec![
            record(2025, 3, 1, RecordKind::Income, "salary", 800000),
            record(2025, 3, 2, RecordKind::FixedExpense, "rent", 120000),
            record(2025, 3, 10, RecordKind::VariableExpense, "groceries", 45000),
            record(2025, 3, 15, RecordKind::Savings, "emergency-fund", 50000),
            record(2025, 3, 20, RecordKind::Investment, "stocks", 30000),
        ];

        let report = MonthlyReport::generate(&records, 2025);

        let direct: Money = records.iter().map(|r| r.signed_amount()).sum();
        assert_eq!(report.months[2].balance(), direct);
        assert_eq!(report.months[2].balance().cents(), 555000);
    }

    #[test]
    fn test_savings_and_investments_reduce_balance() {
        let records = vec![
            record(2025, 1, 1, RecordKind::Income, "salary", 100000),
            record(2025, 1, 2, RecordKind::Savings, "emergency-fund", 20000),
            record(2025, 1, 3, RecordKind::Investment, "stocks", 30000),
        ];

        let report = MonthlyReport::generate(&records, 2025);
        assert_eq!(report.months[0].balance().cents(), 50000);
    }

    #[test]
    fn test_csv_export() {
        let records = vec![record(2025, 1, 5, RecordKind::Income, "salary", 850000)];
        let report = MonthlyReport::generate(&records, 2025);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("Month,Income,"));
        assert!(csv_string.contains("January,8500.00,"));
        // Header plus twelve month rows
        assert_eq!(csv_string.lines().count(), 13);
    }
}
