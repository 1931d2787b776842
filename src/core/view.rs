//! Filtered and sorted view over the record collection.
//!
//! [`build_view`] is a pure function of the records and the [`ViewQuery`]:
//! it borrows the collection, never reorders it in place, and returns the
//! same sequence for the same inputs.

use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::utils::text::locale_cmp;
use chrono::NaiveDate;
use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Period scoping applied before anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
    Year(i32),
}

fn month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("static regex"))
}

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}$").expect("static regex"))
}

impl PeriodFilter {
    /// Parse a period selector.
    ///
    /// Supports:
    /// - YYYY-MM-DD → day
    /// - YYYY-MM    → month
    /// - YYYY       → year
    pub fn parse(selector: &str) -> AppResult<Self> {
        let s = selector.trim();

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(PeriodFilter::Day(d));
        }

        if let Some(caps) = month_re().captures(s) {
            let year: i32 = caps[1]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            let month: u32 = caps[2]
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            if !(1..=12).contains(&month) {
                return Err(AppError::InvalidPeriod(s.to_string()));
            }
            return Ok(PeriodFilter::Month { year, month });
        }

        if year_re().is_match(s) {
            let year: i32 = s
                .parse()
                .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
            return Ok(PeriodFilter::Year(year));
        }

        Err(AppError::InvalidPeriod(s.to_string()))
    }

    /// Day mode on `today`, the panel's initial state.
    pub fn today(today: NaiveDate) -> Self {
        PeriodFilter::Day(today)
    }

    /// Name of the mode, used in export file names.
    pub fn mode(&self) -> &'static str {
        match self {
            PeriodFilter::Day(_) => "day",
            PeriodFilter::Month { .. } => "month",
            PeriodFilter::Year(_) => "year",
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        match self {
            PeriodFilter::Day(d) => record.date_key == d.format("%Y-%m-%d").to_string(),
            PeriodFilter::Month { year, month } => record
                .date_key
                .starts_with(&format!("{:04}-{:02}", year, month)),
            PeriodFilter::Year(y) => record.year() == *y,
        }
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodFilter::Day(d) => write!(f, "{}", d.format("%d/%m/%Y")),
            PeriodFilter::Month { year, month } => write!(f, "{:02}/{:04}", month, year),
            PeriodFilter::Year(y) => write!(f, "{}", y),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Student name, A-Z
    #[value(name = "name_asc")]
    NameAsc,
    /// Most recent first
    #[default]
    #[value(name = "date_desc")]
    DateDesc,
    /// Oldest first
    #[value(name = "date_asc")]
    DateAsc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub period: PeriodFilter,
    pub search: Option<String>,
    pub sort: SortMode,
}

impl ViewQuery {
    pub fn new(period: PeriodFilter) -> Self {
        Self {
            period,
            search: None,
            sort: SortMode::default(),
        }
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Name matches case-insensitively, enrollment id matches as typed.
fn matches_search(record: &AttendanceRecord, term: &str) -> bool {
    record
        .full_name
        .to_lowercase()
        .contains(&term.to_lowercase())
        || record.enrollment_id.contains(term)
}

/// Period filter, then text filter, then a stable sort.
pub fn build_view<'a>(
    records: &'a [AttendanceRecord],
    query: &ViewQuery,
) -> Vec<&'a AttendanceRecord> {
    let mut out: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| query.period.matches(r))
        .filter(|r| match &query.search {
            Some(term) => matches_search(r, term),
            None => true,
        })
        .collect();

    match query.sort {
        SortMode::NameAsc => out.sort_by(|a, b| locale_cmp(&a.full_name, &b.full_name)),
        SortMode::DateDesc => out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::DateAsc => out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
    }

    out
}
