//! Expense tracking for the wedding budget.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `ExpenseBuilder` for creating and replacing expenses
//! - Validation of the expense fields sent by clients
//! - The `ExpenseStore` trait and its SQLite implementation
//! - The query engine that filters, sorts and paginates expenses
//! - The JSON endpoints for listing, creating, reading, replacing, deleting and exporting expenses

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod export_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod query;
mod sqlite;
mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{Expense, ExpenseBuilder, create_expense_table, map_expense_row};
pub use create_endpoint::{CreateExpenseState, create_expense_endpoint};
pub use delete_endpoint::{DeleteExpenseState, DeleteResponse, delete_expense_endpoint};
pub use edit_endpoint::{EditExpenseState, edit_expense_endpoint};
pub use export_endpoint::{ExportExpensesState, export_expenses_endpoint};
pub use form::ExpenseData;
pub use get_endpoint::{GetExpenseState, get_expense_endpoint};
pub use list_endpoint::{ListExpensesState, list_expenses_endpoint};
pub use query::{
    ExpenseFilter, ExpensePage, ExpenseQueryParams, filter_expenses, newest_first, query_expenses,
};
pub use sqlite::SQLiteExpenseStore;
pub use store::{ExpenseStore, StoreFilter};
