//! Grouped totals and overall statistics over a set of expenses.
//!
//! Groups are sorted by descending total. Groups with the same total are
//! ordered by their key in ascending order, so the output never depends on
//! the order of the input.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    amount::Amount,
    event::EVENTS,
    expense::{Expense, newest_first},
};

/// The number of expenses in [Summary::recent_expenses].
pub const RECENT_EXPENSE_COUNT: usize = 10;

/// The total amount and number of expenses for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTotal {
    /// The event name.
    pub event: String,
    /// The sum of the amounts of the event's expenses.
    pub total: Amount,
    /// The number of expenses for the event.
    pub count: u64,
}

/// The total amount and number of expenses for one payer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerTotal {
    /// The payer's name.
    pub paid_by: String,
    /// The sum of the amounts the payer paid.
    pub total: Amount,
    /// The number of expenses the payer paid for.
    pub count: u64,
}

/// Overall statistics for a set of expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of every expense amount.
    pub total_amount: Amount,
    /// The number of expenses.
    pub total_transactions: u64,
    /// Totals per event, largest total first.
    pub by_event: Vec<EventTotal>,
    /// Totals per payer, largest total first.
    pub by_payer: Vec<PayerTotal>,
    /// The event with the largest total, `None` when there are no expenses.
    pub most_expensive_event: Option<String>,
    /// The most recent expenses, newest first.
    pub recent_expenses: Vec<Expense>,
}

/// A row of the event overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOverview {
    /// The event name.
    pub name: String,
    /// The emoji for catalogued events, `None` for any other event.
    pub emoji: Option<String>,
    /// The sum of the amounts of the event's expenses.
    pub total: Amount,
    /// The number of expenses for the event.
    pub count: u64,
}

/// Compute totals for `expenses`, overall and grouped by event and by payer.
///
/// An empty slice gives zero totals and empty groups.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let by_event: Vec<EventTotal> = group_totals(expenses, |expense| &expense.event)
        .into_iter()
        .map(|(event, total, count)| EventTotal {
            event,
            total,
            count,
        })
        .collect();

    let by_payer = group_totals(expenses, |expense| &expense.paid_by)
        .into_iter()
        .map(|(paid_by, total, count)| PayerTotal {
            paid_by,
            total,
            count,
        })
        .collect();

    let mut recent_expenses: Vec<&Expense> = expenses.iter().collect();
    recent_expenses.sort_by(|a, b| newest_first(a, b));

    Summary {
        total_amount: expenses.iter().map(|expense| expense.amount).sum(),
        total_transactions: expenses.len() as u64,
        most_expensive_event: by_event.first().map(|group| group.event.clone()),
        by_event,
        by_payer,
        recent_expenses: recent_expenses
            .into_iter()
            .take(RECENT_EXPENSE_COUNT)
            .cloned()
            .collect(),
    }
}

/// Build the event overview from the per-event totals of a [Summary].
///
/// Every catalogued event is listed in the order it takes place, with zero
/// totals if it has no expenses. Any other events follow in the order of
/// `by_event`.
pub fn event_overview(by_event: &[EventTotal]) -> Vec<EventOverview> {
    let catalogued = EVENTS.iter().map(|event| {
        let group = by_event.iter().find(|group| group.event == event.name);

        EventOverview {
            name: event.name.to_owned(),
            emoji: Some(event.emoji.to_owned()),
            total: group.map_or(Amount::ZERO, |group| group.total),
            count: group.map_or(0, |group| group.count),
        }
    });

    let uncatalogued = by_event
        .iter()
        .filter(|group| !EVENTS.iter().any(|event| event.name == group.event))
        .map(|group| EventOverview {
            name: group.event.clone(),
            emoji: None,
            total: group.total,
            count: group.count,
        });

    catalogued.chain(uncatalogued).collect()
}

/// The distinct payers in `expenses`, sorted alphabetically.
pub fn distinct_payers(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .map(|expense| expense.paid_by.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Sum and count `expenses` per key.
///
/// # Returns
/// Vector of (key, total, count) sorted by descending total, then ascending key.
fn group_totals<F>(expenses: &[Expense], key: F) -> Vec<(String, Amount, u64)>
where
    F: Fn(&Expense) -> &String,
{
    let mut groups: BTreeMap<&str, (Amount, u64)> = BTreeMap::new();

    for expense in expenses {
        let (total, count) = groups.entry(key(expense).as_str()).or_default();
        *total += expense.amount;
        *count += 1;
    }

    let mut sorted: Vec<_> = groups
        .into_iter()
        .map(|(key, (total, count))| (key.to_owned(), total, count))
        .collect();

    // Stable sort keeps equal totals in key order.
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    sorted
}
