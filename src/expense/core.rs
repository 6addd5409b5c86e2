//! Defines the core data model for expenses and its database schema.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{amount::Amount, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// A single payment made towards one of the wedding events.
///
/// To create a new `Expense`, use [Expense::build] and pass the builder to an
/// [ExpenseStore](super::ExpenseStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense, assigned by the store.
    pub id: ExpenseId,
    /// A short description of what was paid for, e.g. "Venue Booking".
    pub title: String,
    /// How much was paid.
    pub amount: Amount,
    /// The event the expense belongs to, e.g. "Mehendi".
    pub event: String,
    /// The person who paid.
    pub paid_by: String,
    /// When the payment was made.
    pub date: Date,
    /// Free text notes, empty if none were given.
    pub notes: String,
    /// When the expense was first stored.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the expense was last replaced.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(
        title: &str,
        amount: Amount,
        event: &str,
        paid_by: &str,
        date: Date,
    ) -> ExpenseBuilder {
        ExpenseBuilder {
            title: title.to_owned(),
            amount,
            event: event.to_owned(),
            paid_by: paid_by.to_owned(),
            date,
            notes: String::new(),
        }
    }
}

/// The user supplied fields of an [Expense].
///
/// A builder holds a full record: it is used both to create an expense and
/// to replace every field of an existing one. The builder does not validate
/// its fields, see [ExpenseData::validate](super::ExpenseData::validate).
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    /// A short description of what was paid for.
    pub title: String,
    /// How much was paid.
    pub amount: Amount,
    /// The event the expense belongs to.
    ///
    /// The event is treated as an opaque label, it does not have to be one of
    /// the [catalogued events](crate::event::EVENTS).
    pub event: String,
    /// The person who paid.
    pub paid_by: String,
    /// When the payment was made.
    pub date: Date,
    /// Free text notes.
    pub notes: String,
}

impl ExpenseBuilder {
    /// Set the notes for the expense.
    pub fn notes(mut self, notes: &str) -> Self {
        notes.clone_into(&mut self.notes);
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The columns of the expense table in the order expected by [map_expense_row].
pub(crate) const EXPENSE_COLUMNS: &str =
    "id, title, amount, event, paid_by, date, notes, created_at, updated_at";

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount INTEGER NOT NULL CHECK (amount >= 0),
                event TEXT NOT NULL,
                paid_by TEXT NOT NULL,
                date TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    // Used when the list filters by event and sorts by date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_event_date ON expense(event, date DESC);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        event: row.get(3)?,
        paid_by: row.get(4)?,
        date: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
