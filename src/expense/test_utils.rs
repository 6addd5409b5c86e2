use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{amount::Amount, database_id::ExpenseId, db::initialize};

use super::{Expense, SQLiteExpenseStore};

/// Build an expense in memory without going through a store.
pub(crate) fn test_expense(
    id: ExpenseId,
    title: &str,
    amount: i64,
    event: &str,
    paid_by: &str,
    date: Date,
) -> Expense {
    Expense {
        id,
        title: title.to_owned(),
        amount: Amount::from_major_units(amount),
        event: event.to_owned(),
        paid_by: paid_by.to_owned(),
        date,
        notes: String::new(),
        created_at: OffsetDateTime::UNIX_EPOCH,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}

impl Expense {
    pub(crate) fn with_notes(mut self, notes: &str) -> Self {
        notes.clone_into(&mut self.notes);
        self
    }
}

/// Get a store backed by a fresh in-memory database.
pub(crate) fn get_test_store() -> SQLiteExpenseStore {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    SQLiteExpenseStore::new(Arc::new(Mutex::new(connection)))
}
