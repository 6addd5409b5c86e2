use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, database_id::ExpenseId};

use super::{ExpenseStore, SQLiteExpenseStore};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store holding the expense.
    pub store: SQLiteExpenseStore,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
        }
    }
}

/// The body sent after a successful delete.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A human readable confirmation.
    pub message: String,
}

/// A route handler for permanently deleting an expense.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<DeleteResponse>, Error> {
    state.store.delete(expense_id).inspect_err(|error| {
        tracing::error!("Could not delete expense {expense_id}: {error}");
    })?;

    Ok(Json(DeleteResponse {
        message: "Expense deleted successfully".to_owned(),
    }))
}
