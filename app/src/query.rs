//! Query Engine
//!
//! Derives the displayed list from the store: search, status filter, sort.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::domain::{DomainError, DomainResult, RentStatus, RentalRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Store order
    #[default]
    None,
    DueDate,
    RentAmount,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "",
            SortOption::DueDate => "dueDate",
            SortOption::RentAmount => "rentAmount",
        }
    }

    pub fn parse(s: &str) -> DomainResult<Self> {
        match s.trim() {
            "" => Ok(SortOption::None),
            "dueDate" => Ok(SortOption::DueDate),
            "rentAmount" => Ok(SortOption::RentAmount),
            other => Err(DomainError::InvalidInput(format!("unknown sort option: {}", other))),
        }
    }
}

/// Parse a status filter; an empty string clears the filter
pub fn parse_status_filter(s: &str) -> DomainResult<Option<RentStatus>> {
    match s.trim() {
        "" => Ok(None),
        "Pending" => Ok(Some(RentStatus::Pending)),
        "Paid" => Ok(Some(RentStatus::Paid)),
        other => Err(DomainError::InvalidInput(format!("unknown status filter: {}", other))),
    }
}

/// Current search / filter / sort selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub search_term: String,
    pub filter_status: Option<RentStatus>,
    pub sort: SortOption,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self
    }

    pub fn with_status(mut self, status: Option<RentStatus>) -> Self {
        self.filter_status = status;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }
}

/// Produce the view for `options`. The input is never modified.
pub fn apply(records: &[RentalRecord], options: &ViewOptions) -> Vec<RentalRecord> {
    let needle = options.search_term.to_lowercase();

    let mut view: Vec<RentalRecord> = records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| options.filter_status.map_or(true, |s| r.rent_status == s))
        .cloned()
        .collect();

    // sort_by is stable: equal keys keep store order
    match options.sort {
        SortOption::None => {}
        SortOption::DueDate => view.sort_by(|a, b| missing_last(a.due(), b.due(), NaiveDate::cmp)),
        SortOption::RentAmount => {
            view.sort_by(|a, b| missing_last(a.rent_amount(), b.rent_amount(), f64::total_cmp))
        }
    }
    view
}

fn matches_search(record: &RentalRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.cart_id.to_lowercase().contains(needle)
        || record.renter_name.to_lowercase().contains(needle)
        || record.rent_status.as_str().to_lowercase().contains(needle)
}

/// Ascending by key; records without a key go after all keyed ones
fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
