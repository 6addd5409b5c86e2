use axum::{
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, amount::Amount, pagination::PaginationConfig};

use super::{
    Expense, ExpenseStore, SQLiteExpenseStore,
    query::{ExpenseFilter, ExpenseQueryParams, filter_expenses},
};

const CSV_HEADER: [&str; 6] = ["date", "title", "event", "paid_by", "amount", "notes"];

/// The state needed to export expenses.
#[derive(Debug, Clone)]
pub struct ExportExpensesState {
    /// The store to fetch expenses from.
    pub store: SQLiteExpenseStore,
}

impl FromRef<AppState> for ExportExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
        }
    }
}

/// A route handler that responds with every matching expense as a CSV file.
///
/// Takes the same filter parameters as the expense list but ignores `page`
/// and `limit`. The last row holds the total amount.
pub async fn export_expenses_endpoint(
    State(state): State<ExportExpensesState>,
    Query(params): Query<ExpenseQueryParams>,
) -> Result<Response, Error> {
    let filter = ExpenseFilter::from_params(params, &PaginationConfig::default());
    let expenses = state.store.fetch_all(&filter.store_filter())?;
    let matches = filter_expenses(&expenses, &filter);

    let body = write_csv(&matches)?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"expenses.csv\""),
        ],
        body,
    )
        .into_response())
}

fn write_csv(expenses: &[&Expense]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        writer.write_record([
            expense.date.to_string(),
            expense.title.clone(),
            expense.event.clone(),
            expense.paid_by.clone(),
            expense.amount.to_string(),
            expense.notes.clone(),
        ])?;
    }

    let total: Amount = expenses.iter().map(|expense| expense.amount).sum();
    writer.write_record(["", "Total", "", "", &total.to_string(), ""])?;

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}
