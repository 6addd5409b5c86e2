use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{AppState, Error, timezone::current_local_date};

use super::{Expense, ExpenseData, ExpenseStore, SQLiteExpenseStore};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The store to add expenses to.
    pub store: SQLiteExpenseStore,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new expense, responds with the stored expense.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    payload: Result<Json<ExpenseData>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let Json(data) = payload?;
    let today = current_local_date(&state.local_timezone)?;
    let builder = data.validate(today)?;

    let expense = state.store.create(builder).inspect_err(|error| {
        tracing::error!("Could not create expense: {error}");
    })?;

    tracing::debug!("Created expense {}", expense.id);

    Ok((StatusCode::CREATED, Json(expense)))
}
