//! Report period representation
//!
//! A period is a whole year, a single month, or a calendar quarter. Quarters
//! map fixed month ranges: Q1={1,2,3}, Q2={4,5,6}, Q3={7,8,9}, Q4={10,11,12}.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A period records can be filtered into for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportPeriod {
    /// Whole calendar year (e.g., "2025")
    Year { year: i32 },

    /// Single month (e.g., "2025-01")
    Month { year: i32, month: u32 },

    /// Calendar quarter (e.g., "2025-Q2")
    Quarter { year: i32, quarter: u32 },
}

impl ReportPeriod {
    /// Create a whole-year period
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// Create a monthly period
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Create a quarterly period
    pub fn quarter(year: i32, quarter: u32) -> Self {
        Self::Quarter { year, quarter }
    }

    /// The calendar year this period belongs to
    pub fn year_value(&self) -> i32 {
        match self {
            Self::Year { year } | Self::Month { year, .. } | Self::Quarter { year, .. } => *year,
        }
    }

    /// The inclusive month window (1-12) covered by this period
    pub fn month_range(&self) -> (u32, u32) {
        match self {
            Self::Year { .. } => (1, 12),
            Self::Month { month, .. } => (*month, *month),
            Self::Quarter { quarter, .. } => {
                let first = (quarter - 1) * 3 + 1;
                (first, first + 2)
            }
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date.year() != self.year_value() {
            return false;
        }
        let (first, last) = self.month_range();
        (first..=last).contains(&date.month())
    }

    /// The same period shifted one step forward: next month, next quarter,
    /// or next year. Used by callers that need two distinct periods.
    pub fn next(&self) -> Self {
        match self {
            Self::Year { year } => Self::Year { year: *year + 1 },
            Self::Month { year, month } => {
                if *month == 12 {
                    Self::Month {
                        year: *year + 1,
                        month: 1,
                    }
                } else {
                    Self::Month {
                        year: *year,
                        month: *month + 1,
                    }
                }
            }
            Self::Quarter { year, quarter } => {
                if *quarter == 4 {
                    Self::Quarter {
                        year: *year + 1,
                        quarter: 1,
                    }
                } else {
                    Self::Quarter {
                        year: *year,
                        quarter: *quarter + 1,
                    }
                }
            }
        }
    }

    /// The same period shifted one step back
    pub fn prev(&self) -> Self {
        match self {
            Self::Year { year } => Self::Year { year: *year - 1 },
            Self::Month { year, month } => {
                if *month == 1 {
                    Self::Month {
                        year: *year - 1,
                        month: 12,
                    }
                } else {
                    Self::Month {
                        year: *year,
                        month: *month - 1,
                    }
                }
            }
            Self::Quarter { year, quarter } => {
                if *quarter == 1 {
                    Self::Quarter {
                        year: *year - 1,
                        quarter: 4,
                    }
                } else {
                    Self::Quarter {
                        year: *year,
                        quarter: *quarter - 1,
                    }
                }
            }
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Year: "2025"
    /// - Month: "2025-01"
    /// - Quarter: "2025-Q2"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        // Try quarterly format first (contains Q)
        if s.contains('Q') {
            let parts: Vec<&str> = s.split("-Q").collect();
            if parts.len() == 2 {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let quarter: u32 = parts[1]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                if !(1..=4).contains(&quarter) {
                    return Err(PeriodParseError::InvalidQuarter(quarter));
                }
                return Ok(Self::Quarter { year, quarter });
            }
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        // Try monthly format (YYYY-MM)
        if s.contains('-') {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() == 2 {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let month: u32 = parts[1]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                if !(1..=12).contains(&month) {
                    return Err(PeriodParseError::InvalidMonth(month));
                }
                return Ok(Self::Month { year, month });
            }
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        // Plain year
        let year: i32 = s
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        Ok(Self::Year { year })
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year { year } => write!(f, "{:04}", year),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Quarter { year, quarter } => write!(f, "{:04}-Q{}", year, quarter),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidQuarter(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidQuarter(q) => write!(f, "Invalid quarter: {}", q),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range() {
        assert_eq!(ReportPeriod::year(2025).month_range(), (1, 12));
        assert_eq!(ReportPeriod::month(2025, 3).month_range(), (3, 3));
        assert_eq!(ReportPeriod::quarter(2025, 1).month_range(), (1, 3));
        assert_eq!(ReportPeriod::quarter(2025, 4).month_range(), (10, 12));
    }

    #[test]
    fn test_contains() {
        let q2 = ReportPeriod::quarter(2025, 2);
        assert!(q2.contains(date(2025, 4, 1)));
        assert!(q2.contains(date(2025, 6, 30)));
        assert!(!q2.contains(date(2025, 7, 1)));
        assert!(!q2.contains(date(2024, 5, 15)));

        let jan = ReportPeriod::month(2025, 1);
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));

        let year = ReportPeriod::year(2025);
        assert!(year.contains(date(2025, 12, 31)));
        assert!(!year.contains(date(2026, 1, 1)));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(
            ReportPeriod::month(2025, 12).next(),
            ReportPeriod::month(2026, 1)
        );
        assert_eq!(
            ReportPeriod::month(2025, 1).prev(),
            ReportPeriod::month(2024, 12)
        );
        assert_eq!(
            ReportPeriod::quarter(2025, 4).next(),
            ReportPeriod::quarter(2026, 1)
        );
        assert_eq!(ReportPeriod::year(2025).prev(), ReportPeriod::year(2024));
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportPeriod::parse("2025").unwrap(), ReportPeriod::year(2025));
        assert_eq!(
            ReportPeriod::parse("2025-03").unwrap(),
            ReportPeriod::month(2025, 3)
        );
        assert_eq!(
            ReportPeriod::parse("2025-Q2").unwrap(),
            ReportPeriod::quarter(2025, 2)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            ReportPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            ReportPeriod::parse("2025-Q5"),
            Err(PeriodParseError::InvalidQuarter(5))
        ));
        assert!(matches!(
            ReportPeriod::parse("next year"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ReportPeriod::year(2025)), "2025");
        assert_eq!(format!("{}", ReportPeriod::month(2025, 1)), "2025-01");
        assert_eq!(format!("{}", ReportPeriod::quarter(2025, 3)), "2025-Q3");
    }

    #[test]
    fn test_serialization() {
        let period = ReportPeriod::quarter(2025, 2);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: ReportPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
