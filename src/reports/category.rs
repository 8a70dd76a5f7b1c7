//! Category Breakdown Report
//!
//! Aggregates a year's records into one entry per (kind, category) pair,
//! with signed values and display colors ready for charting.

use std::collections::HashMap;
use std::io::Write;

use crate::error::TallyResult;
use crate::models::{BudgetRecord, CategoryCatalog, Money, RecordKind};

/// Fixed display palette; entries are colored positionally after sorting
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// One entry of the category breakdown
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    /// Record kind this category belongs to
    pub kind: RecordKind,
    /// Category key
    pub category: String,
    /// Human-readable label resolved from the catalog
    pub label: String,
    /// Signed value: negative for the two expense kinds, positive otherwise
    pub value: Money,
    /// Display color assigned from the palette by sorted position
    pub color: &'static str,
}

/// Category Breakdown Report for a single year
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Target year
    pub year: i32,
    /// Entries sorted by descending value; zero-valued entries excluded
    pub entries: Vec<CategoryEntry>,
}

impl CategoryReport {
    /// Generate the report from a record snapshot
    ///
    /// Entries whose net value is exactly zero are excluded. Colors are
    /// positional: `PALETTE[index % PALETTE.len()]` after sorting by
    /// descending value.
    pub fn generate(records: &[BudgetRecord], year: i32, catalog: &CategoryCatalog) -> Self {
        let mut sums: HashMap<(RecordKind, String), Money> = HashMap::new();

        for record in records {
            if record.year() != year {
                continue;
            }
            *sums
                .entry((record.kind, record.category.clone()))
                .or_insert(Money::zero()) += record.amount;
        }

        let mut entries: Vec<CategoryEntry> = sums
            .into_iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|((kind, category), total)| {
                let value = if kind.is_expense() { -total } else { total };
                CategoryEntry {
                    label: catalog.label(kind, &category),
                    kind,
                    category,
                    value,
                    color: PALETTE[0],
                }
            })
            .collect();

        // Largest contributions first; expenses sort by how negative they
        // are. Key ties broken deterministically.
        entries.sort_by(|a, b| {
            b.value
                .cmp(&a.value)
                .then_with(|| a.kind.cmp(&b.kind))
                .then_with(|| a.category.cmp(&b.category))
        });

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.color = PALETTE[i % PALETTE.len()];
        }

        Self { year, entries }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown: {}\n", self.year));
        output.push_str(&"=".repeat(70));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:<25} {:>14} {:>8}\n",
            "Kind", "Category", "Value", "Color"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<20} {:<25} {:>14} {:>8}\n",
                entry.kind.to_string(),
                entry.label,
                entry.value,
                entry.color
            ));
        }

        if self.entries.is_empty() {
            output.push_str("(no records)\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Kind,Category,Label,Value,Color")
            .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{},{},{},{}",
                entry.kind,
                entry.category,
                crate::export::csv::escape_csv(&entry.label),
                entry.value.to_decimal_string(),
                entry.color
            )
            .map_err(|e| crate::error::TallyError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
