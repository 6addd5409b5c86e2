use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::JsonRejection},
};

use crate::{AppState, Error, database_id::ExpenseId, timezone::current_local_date};

use super::{Expense, ExpenseData, ExpenseStore, SQLiteExpenseStore};

/// The state needed to replace an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The store holding the expense.
    pub store: SQLiteExpenseStore,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler that replaces every field of the expense `expense_id`.
///
/// The body must be a complete expense, fields left out are not kept from the
/// stored expense. Responds with the updated expense, or 404 if it does not exist.
pub async fn edit_expense_endpoint(
    State(state): State<EditExpenseState>,
    Path(expense_id): Path<ExpenseId>,
    payload: Result<Json<ExpenseData>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Json(data) = payload?;
    let today = current_local_date(&state.local_timezone)?;
    let builder = data.validate(today)?;

    state
        .store
        .replace(expense_id, builder)
        .inspect_err(|error| tracing::error!("Could not update expense {expense_id}: {error}"))
        .map(Json)
}
