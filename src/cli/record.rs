//! CLI commands for record management
//!
//! Bridges clap argument parsing with the record service and the table view.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{BudgetRecord, CategoryCatalog, Money, RecordId, RecordKind};
use crate::reports::{build_page, SortDirection, SortField, TableQuery};
use crate::services::RecordService;
use crate::storage::Storage;

/// Sort field options for the list view
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOption {
    Date,
    Amount,
}

impl From<SortOption> for SortField {
    fn from(opt: SortOption) -> Self {
        match opt {
            SortOption::Date => SortField::Date,
            SortOption::Amount => SortField::Amount,
        }
    }
}

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add a new record
    Add {
        /// Record kind (income, fixed-expense, variable-expense, savings, investment)
        kind: String,

        /// Category key from the kind's vocabulary
        category: String,

        /// Amount as a positive magnitude (e.g., "1500" or "1500.00")
        amount: String,

        /// Record date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List records for a year
    List {
        /// Target year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Filter by record kind
        #[arg(short, long)]
        kind: Option<String>,

        /// Sort field
        #[arg(short, long, value_enum, default_value = "date")]
        sort: SortOption,

        /// Sort ascending (default is descending)
        #[arg(long)]
        ascending: bool,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Remove a record by ID
    Remove {
        /// Record ID (full UUID or rec- prefixed)
        id: String,
    },
}

/// Table row for the list view
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&BudgetRecord> for RecordRow {
    fn from(record: &BudgetRecord) -> Self {
        Self {
            id: record.id.to_string(),
            date: record.date.format("%Y-%m-%d").to_string(),
            kind: record.kind.to_string(),
            category: record.category.clone(),
            amount: record.amount.to_string(),
            description: record.description.clone(),
        }
    }
}

/// Handle record commands
pub fn handle_record_command(
    storage: &Storage,
    settings: &Settings,
    catalog: &CategoryCatalog,
    cmd: RecordCommands,
) -> TallyResult<()> {
    match cmd {
        RecordCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => handle_add(storage, catalog, kind, category, amount, date, description),
        RecordCommands::List {
            year,
            kind,
            sort,
            ascending,
            page,
            page_size,
        } => handle_list(storage, settings, year, kind, sort, ascending, page, page_size),
        RecordCommands::Remove { id } => handle_remove(storage, catalog, id),
    }
}

fn parse_kind(s: &str) -> TallyResult<RecordKind> {
    s.parse()
        .map_err(|e: crate::models::RecordValidationError| TallyError::Validation(e.to_string()))
}

fn parse_date(s: Option<String>) -> TallyResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            TallyError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn handle_add(
    storage: &Storage,
    catalog: &CategoryCatalog,
    kind: String,
    category: String,
    amount: String,
    date: Option<String>,
    description: String,
) -> TallyResult<()> {
    let kind = parse_kind(&kind)?;
    let date = parse_date(date)?;
    let amount = Money::parse(&amount)
        .map_err(|e| TallyError::Validation(e.to_string()))?;

    let service = RecordService::new(storage, catalog);
    let record = service.add(date, kind, &category, amount, &description)?;

    println!("Added {} ({})", record, record.id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    storage: &Storage,
    settings: &Settings,
    year: Option<i32>,
    kind: Option<String>,
    sort: SortOption,
    ascending: bool,
    page: usize,
    page_size: Option<usize>,
) -> TallyResult<()> {
    use chrono::Datelike;

    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    let kind = kind.map(|k| parse_kind(&k)).transpose()?;

    let query = TableQuery {
        year,
        kind,
        sort_field: sort.into(),
        sort_direction: if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
        page,
        page_size: page_size.unwrap_or(settings.page_size),
    };

    let snapshot = storage.records.snapshot()?;
    let result = build_page(&snapshot, &query);

    if result.is_empty() {
        println!(
            "No records on page {} ({} records, {} pages for {})",
            result.page, result.total_records, result.total_pages, year
        );
        return Ok(());
    }

    let rows: Vec<RecordRow> = result.records.iter().map(RecordRow::from).collect();
    println!("{}", Table::new(rows));
    println!(
        "Page {} of {} ({} records)",
        result.page, result.total_pages, result.total_records
    );

    Ok(())
}

fn handle_remove(storage: &Storage, catalog: &CategoryCatalog, id: String) -> TallyResult<()> {
    let id: RecordId = id
        .parse()
        .map_err(|_| TallyError::Validation(format!("Invalid record ID: {}", id)))?;

    let service = RecordService::new(storage, catalog);
    let removed = service.remove(id)?;

    println!("Removed {}", removed);
    Ok(())
}
