//! Record Table View
//!
//! Filters, sorts, and paginates a record snapshot for tabular display.

use crate::models::{BudgetRecord, RecordKind};

/// Field to sort the table by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Query describing the desired page of records
#[derive(Debug, Clone)]
pub struct TableQuery {
    /// Target year
    pub year: i32,
    /// Optional kind filter
    pub kind: Option<RecordKind>,
    /// Sort field
    pub sort_field: SortField,
    /// Sort direction
    pub sort_direction: SortDirection,
    /// 1-based page number
    pub page: usize,
    /// Records per page
    pub page_size: usize,
}

impl TableQuery {
    /// A default query for a year: all kinds, newest first, first page
    pub fn for_year(year: i32, page_size: usize) -> Self {
        Self {
            year,
            kind: None,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size,
        }
    }
}

/// One page of records plus pagination totals
#[derive(Debug, Clone)]
pub struct RecordPage {
    /// Records on this page
    pub records: Vec<BudgetRecord>,
    /// 1-based page number requested
    pub page: usize,
    /// Total records matching the filter
    pub total_records: usize,
    /// Total pages available
    pub total_pages: usize,
}

impl RecordPage {
    /// Whether the requested page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build a page of records from a snapshot
///
/// A `page` beyond the available range yields an empty page with correct
/// totals, never an error; callers may clamp before asking.
pub fn build_page(records: &[BudgetRecord], query: &TableQuery) -> RecordPage {
    let mut matching: Vec<BudgetRecord> = records
        .iter()
        .filter(|r| r.year() == query.year)
        .filter(|r| query.kind.map_or(true, |kind| r.kind == kind))
        .cloned()
        .collect();

    matching.sort_by(|a, b| {
        let ordering = match query.sort_field {
            SortField::Date => a.date.cmp(&b.date).then_with(|| a.created_at.cmp(&b.created_at)),
            SortField::Amount => a.amount.cmp(&b.amount).then_with(|| a.date.cmp(&b.date)),
        };
        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let total_records = matching.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_records.div_ceil(page_size);

    let start = query.page.saturating_sub(1).saturating_mul(page_size);
    let page_records = if start >= total_records {
        Vec::new()
    } else {
        matching[start..(start + page_size).min(total_records)].to_vec()
    };

    RecordPage {
        records: page_records,
        page: query.page,
        total_records,
        total_pages,
    }
}
