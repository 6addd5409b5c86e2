//! Defines the expense store trait.

use time::Date;

use crate::{Error, database_id::ExpenseId};

use super::core::{Expense, ExpenseBuilder};

/// Handles the lifecycle of expenses and fetching snapshots of them.
///
/// The store owns the canonical collection. Callers get an owned snapshot from
/// [ExpenseStore::fetch_all] and never hold on to store state between requests.
pub trait ExpenseStore {
    /// Fetch every expense matching `filter`, in the order they were created.
    ///
    /// Implementers may ignore any part of `filter`: callers re-apply their
    /// own predicates to the snapshot.
    fn fetch_all(&self, filter: &StoreFilter) -> Result<Vec<Expense>, Error>;

    /// Retrieve an expense by its `id`.
    ///
    /// Implementers should return [Error::NotFound] if no expense has the ID `id`.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Create a new expense in the store, assigning it a new ID.
    fn create(&self, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Replace every user supplied field of the expense `id`.
    ///
    /// Implementers should return [Error::UpdateMissingExpense] if no expense
    /// has the ID `id`.
    fn replace(&self, id: ExpenseId, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Permanently delete the expense `id`.
    ///
    /// Implementers should return [Error::DeleteMissingExpense] if no expense
    /// has the ID `id`.
    fn delete(&self, id: ExpenseId) -> Result<(), Error>;
}

/// The predicates a [ExpenseStore] may apply while fetching expenses.
///
/// The default filter selects every expense.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreFilter {
    /// Only include expenses for this event.
    pub event: Option<String>,
    /// Only include expenses paid by this person.
    pub paid_by: Option<String>,
    /// Only include expenses on or after this date.
    pub start_date: Option<Date>,
    /// Only include expenses on or before this date.
    pub end_date: Option<Date>,
}
