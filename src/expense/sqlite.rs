//! Implements a SQLite backed expense store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, params_from_iter, types::Value};
use time::OffsetDateTime;

use crate::{Error, database_id::ExpenseId};

use super::{
    core::{EXPENSE_COLUMNS, Expense, ExpenseBuilder, map_expense_row},
    store::{ExpenseStore, StoreFilter},
};

/// Stores expenses in a SQLite database.
///
/// The expense table must have been created with [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }

    /// Delete every expense, returning how many were deleted.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn clear(&self) -> Result<usize, Error> {
        self.lock()?
            .execute("DELETE FROM expense", ())
            .map_err(Error::from)
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Fetch expenses with the equality and date range predicates in `filter`
    /// applied as a SQL `WHERE` clause, ordered by ID.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn fetch_all(&self, filter: &StoreFilter) -> Result<Vec<Expense>, Error> {
        let mut query_string_parts = vec![format!("SELECT {EXPENSE_COLUMNS} FROM expense")];
        let mut where_clause_parts = vec![];
        let mut query_parameters = vec![];

        if let Some(event) = &filter.event {
            where_clause_parts.push(format!("event = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(event.clone()));
        }

        if let Some(paid_by) = &filter.paid_by {
            where_clause_parts.push(format!("paid_by = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(paid_by.clone()));
        }

        if let Some(start_date) = filter.start_date {
            where_clause_parts.push(format!("date >= ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(start_date.to_string()));
        }

        if let Some(end_date) = filter.end_date {
            where_clause_parts.push(format!("date <= ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(end_date.to_string()));
        }

        if !where_clause_parts.is_empty() {
            query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
        }

        query_string_parts.push("ORDER BY id ASC".to_owned());

        let query_string = query_string_parts.join(" ");
        let params = params_from_iter(query_parameters.iter());

        self.lock()?
            .prepare(&query_string)?
            .query_map(params, map_expense_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self
            .lock()?
            .prepare(&format!("SELECT {EXPENSE_COLUMNS} FROM expense WHERE id = :id"))?
            .query_row(&[(":id", &id)], map_expense_row)?;

        Ok(expense)
    }

    /// Create a new expense in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn create(&self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let now = OffsetDateTime::now_utc();

        let expense = self
            .lock()?
            .prepare(&format!(
                "INSERT INTO expense
                     (title, amount, event, paid_by, date, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
                 RETURNING {EXPENSE_COLUMNS}"
            ))?
            .query_row(
                (
                    builder.title,
                    builder.amount,
                    builder.event,
                    builder.paid_by,
                    builder.date,
                    builder.notes,
                    now,
                ),
                map_expense_row,
            )?;

        Ok(expense)
    }

    /// Replace the fields of an expense, keeping its ID and creation time.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn replace(&self, id: ExpenseId, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let now = OffsetDateTime::now_utc();

        self.lock()?
            .prepare(&format!(
                "UPDATE expense
                 SET title = ?1, amount = ?2, event = ?3, paid_by = ?4, date = ?5, notes = ?6,
                     updated_at = ?7
                 WHERE id = ?8
                 RETURNING {EXPENSE_COLUMNS}"
            ))?
            .query_row(
                (
                    builder.title,
                    builder.amount,
                    builder.event,
                    builder.paid_by,
                    builder.date,
                    builder.notes,
                    now,
                    id,
                ),
                map_expense_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingExpense,
                error => error.into(),
            })
    }

    /// Delete an expense from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn delete(&self, id: ExpenseId) -> Result<(), Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::DeleteMissingExpense),
            _ => Ok(()),
        }
    }
}
