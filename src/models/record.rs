//! Budget record model
//!
//! A record is one financial event: an income, an expense, a savings
//! contribution, or an investment. Amounts are stored as non-negative
//! magnitudes; direction is derived from the record kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecordId;
use super::money::Money;

/// The closed set of record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// Money coming in (salary, bonus, ...)
    Income,
    /// Recurring expenses with a fixed amount (rent, insurance, ...)
    FixedExpense,
    /// Discretionary expenses (groceries, dining out, ...)
    VariableExpense,
    /// Contributions to savings
    Savings,
    /// Contributions to investments
    Investment,
}

impl RecordKind {
    /// All kinds in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Income,
            Self::FixedExpense,
            Self::VariableExpense,
            Self::Savings,
            Self::Investment,
        ]
    }

    /// Check if this kind represents an expense (subtractive to balance)
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::FixedExpense | Self::VariableExpense)
    }

    /// Kebab-case wire form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::FixedExpense => "fixed-expense",
            Self::VariableExpense => "variable-expense",
            Self::Savings => "savings",
            Self::Investment => "investment",
        }
    }

    /// Human-readable label for report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::FixedExpense => "Fixed Expenses",
            Self::VariableExpense => "Variable Expenses",
            Self::Savings => "Savings",
            Self::Investment => "Investments",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = RecordValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(Self::Income),
            "fixed-expense" => Ok(Self::FixedExpense),
            "variable-expense" => Ok(Self::VariableExpense),
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            other => Err(RecordValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// One financial event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Calendar date of the event (no time-of-day semantics)
    pub date: NaiveDate,

    /// Record kind; determines credit/debit direction
    pub kind: RecordKind,

    /// Category key, scoped to the kind's vocabulary
    pub category: String,

    /// Non-negative magnitude; sign is implied by `kind`
    pub amount: Money,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl BudgetRecord {
    /// Create a new record
    pub fn new(date: NaiveDate, kind: RecordKind, category: impl Into<String>, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            date,
            kind,
            category: category.into(),
            amount,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a record with a description
    pub fn with_description(
        date: NaiveDate,
        kind: RecordKind,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        let mut record = Self::new(date, kind, category, amount);
        record.description = description.into();
        record
    }

    /// The amount signed by direction: positive for income/savings/investment,
    /// negative for the two expense kinds
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_expense() {
            -self.amount
        } else {
            self.amount
        }
    }

    /// Calendar year of the record date
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.date.year()
    }

    /// Calendar month (1-12) of the record date
    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.date.month()
    }

    /// Update the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount.is_negative() {
            return Err(RecordValidationError::NegativeAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeAmount(Money),
    EmptyCategory,
    UnknownKind(String),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Record amount must be a non-negative magnitude, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Record category cannot be empty"),
            Self::UnknownKind(s) => write!(f, "Unknown record kind: {}", s),
        }
    }
}

impl std::error::Error for RecordValidationError {}
