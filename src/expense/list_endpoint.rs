use axum::{
    Json,
    extract::{FromRef, Query, State},
};

use crate::{AppState, Error, pagination::PaginationConfig};

use super::{
    ExpenseStore, SQLiteExpenseStore,
    query::{ExpenseFilter, ExpensePage, ExpenseQueryParams, query_expenses},
};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The store to fetch expenses from.
    pub store: SQLiteExpenseStore,
    /// The default page and page size.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// A route handler that responds with a filtered page of expenses, newest first.
pub async fn list_expenses_endpoint(
    State(state): State<ListExpensesState>,
    Query(params): Query<ExpenseQueryParams>,
) -> Result<Json<ExpensePage>, Error> {
    let filter = ExpenseFilter::from_params(params, &state.pagination_config);
    let expenses = state.store.fetch_all(&filter.store_filter())?;

    Ok(Json(query_expenses(&expenses, &filter)))
}
