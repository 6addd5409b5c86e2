//! Selects, sorts and paginates expenses for the expense list.
//!
//! The filter is applied to a snapshot of expenses in memory. Any predicates
//! the store already applied are applied again here, so the result does not
//! depend on whether the store narrowed the snapshot.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::pagination::{Pagination, PaginationConfig};

use super::{core::Expense, store::StoreFilter};

/// The query string of the expense list, exactly as the client sent it.
///
/// Every field is kept as text so that malformed values can be ignored
/// instead of rejecting the whole request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQueryParams {
    pub event: Option<String>,
    pub paid_by: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Which expenses to list and which page of them to return.
///
/// `None` means no constraint for every predicate field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Only include expenses whose event is exactly this.
    pub event: Option<String>,
    /// Only include expenses whose payer is exactly this.
    pub paid_by: Option<String>,
    /// Only include expenses dated on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses dated on or before this date.
    pub end_date: Option<Date>,
    /// Only include expenses whose title or notes contain this text, ignoring case.
    pub search: Option<String>,
    /// The 1-based page to return.
    pub page: u64,
    /// The maximum number of expenses per page.
    pub limit: u64,
}

impl Default for ExpenseFilter {
    fn default() -> Self {
        let config = PaginationConfig::default();

        Self {
            event: None,
            paid_by: None,
            start_date: None,
            end_date: None,
            search: None,
            page: config.default_page,
            limit: config.default_page_size,
        }
    }
}

impl ExpenseFilter {
    /// Normalise the raw query string into a filter.
    ///
    /// Blank values are treated as absent. A `page` or `limit` that is not an
    /// integer falls back to the default in `config`, and values below 1 are
    /// clamped to 1. Dates that cannot be parsed are ignored.
    pub fn from_params(params: ExpenseQueryParams, config: &PaginationConfig) -> Self {
        Self {
            event: non_blank(params.event),
            paid_by: non_blank(params.paid_by),
            start_date: non_blank(params.start_date)
                .and_then(|text| parse_date_param("startDate", text.trim())),
            end_date: non_blank(params.end_date)
                .and_then(|text| parse_date_param("endDate", text.trim())),
            search: non_blank(params.search),
            page: parse_positive(params.page, config.default_page),
            limit: parse_positive(params.limit, config.default_page_size),
        }
    }

    /// Whether `expense` satisfies every predicate in the filter.
    pub fn matches(&self, expense: &Expense) -> bool {
        let event_matches = self
            .event
            .as_ref()
            .is_none_or(|event| expense.event == *event);
        let paid_by_matches = self
            .paid_by
            .as_ref()
            .is_none_or(|paid_by| expense.paid_by == *paid_by);
        let after_start = self
            .start_date
            .is_none_or(|start_date| expense.date >= start_date);
        let before_end = self.end_date.is_none_or(|end_date| expense.date <= end_date);
        let search_matches = self.search.as_ref().is_none_or(|search| {
            let search = search.to_lowercase();

            expense.title.to_lowercase().contains(&search)
                || expense.notes.to_lowercase().contains(&search)
        });

        event_matches && paid_by_matches && after_start && before_end && search_matches
    }

    /// The predicates a store can apply while fetching.
    ///
    /// Text search is left out since it is always applied in memory.
    pub fn store_filter(&self) -> StoreFilter {
        StoreFilter {
            event: self.event.clone(),
            paid_by: self.paid_by.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// A page of matching expenses along with where the page sits in the full result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePage {
    /// The expenses on the page, newest first.
    pub expenses: Vec<Expense>,
    /// The page position and the total number of matching expenses.
    pub pagination: Pagination,
}

/// Orders expenses newest first, breaking ties on date by ascending ID.
pub fn newest_first(a: &Expense, b: &Expense) -> Ordering {
    b.date.cmp(&a.date).then(a.id.cmp(&b.id))
}

/// Every expense in `expenses` that matches `filter`, newest first.
///
/// The pagination fields of `filter` are ignored.
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    let mut matches: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(expense))
        .collect();

    matches.sort_by(|a, b| newest_first(a, b));

    matches
}

/// Get the page of expenses described by `filter`.
///
/// The total in the returned pagination counts every matching expense, not
/// just those on the page. Asking for a page past the end gives an empty page.
pub fn query_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> ExpensePage {
    let matches = filter_expenses(expenses, filter);
    let pagination = Pagination::new(filter.page, filter.limit, matches.len() as u64);

    ExpensePage {
        expenses: matches[pagination.item_range(matches.len())]
            .iter()
            .map(|&expense| expense.clone())
            .collect(),
        pagination,
    }
}

/// Parse a date given either as "YYYY-MM-DD" or as an RFC 3339 timestamp.
///
/// For timestamps only the date part, in the timestamp's own offset, is kept.
pub(crate) fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(text, &Rfc3339)
                .ok()
                .map(|timestamp| timestamp.date())
        })
}

fn parse_date_param(name: &str, text: &str) -> Option<Date> {
    let date = parse_date(text);

    if date.is_none() {
        tracing::warn!("ignoring {name} filter, could not parse \"{text}\" as a date");
    }

    date
}

/// Drop blank values. Non-blank values are kept as sent, without trimming.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn parse_positive(value: Option<String>, default: u64) -> u64 {
    match value.as_deref().map(str::trim).map(str::parse::<i64>) {
        Some(Ok(number)) => number.max(1) as u64,
        _ => default,
    }
}
