use axum::{
    Json,
    extract::{FromRef, Path, State},
};

use crate::{AppState, Error, database_id::ExpenseId};

use super::{Expense, ExpenseStore, SQLiteExpenseStore};

/// The state needed to get a single expense.
#[derive(Debug, Clone)]
pub struct GetExpenseState {
    /// The store to read the expense from.
    pub store: SQLiteExpenseStore,
}

impl FromRef<AppState> for GetExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
        }
    }
}

/// A route handler that responds with the expense `expense_id`, or 404 if it does not exist.
pub async fn get_expense_endpoint(
    State(state): State<GetExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    state.store.get(expense_id).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use time::macros::date;

    use crate::{
        amount::Amount,
        expense::{
            Expense, ExpenseStore, GetExpenseState, get_expense_endpoint,
            test_utils::get_test_store,
        },
    };

    #[tokio::test]
    async fn gets_expense() {
        let store = get_test_store();
        let want = store
            .create(Expense::build(
                "Photography",
                Amount::from_major_units(80_000),
                "Wedding",
                "Sameer (Brother)",
                date!(2026 - 02 - 20),
            ))
            .unwrap();

        let got = get_expense_endpoint(State(GetExpenseState { store }), Path(want.id))
            .await
            .unwrap()
            .0;

        assert_eq!(want, got);
    }

    #[tokio::test]
    async fn missing_expense_is_404() {
        let state = GetExpenseState {
            store: get_test_store(),
        };

        let response = get_expense_endpoint(State(state), Path(1337))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
