//! A JSON API for tracking the expenses of a family wedding.
//!
//! Expenses are recorded against the wedding functions (Chheka, Mehendi,
//! Haldi, Wedding, Reception) and the person who paid. The API lists expenses
//! with filters and pagination, and summarises spending by event and by payer.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod amount;
mod app_state;
mod database_id;
mod db;
mod endpoints;
mod error;
mod event;
mod expense;
mod logging;
mod member;
mod pagination;
mod routing;
mod summary;
mod timezone;

pub use amount::Amount;
pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorResponse};
pub use event::{CataloguedEvent, EVENTS};
pub use expense::{
    Expense, ExpenseBuilder, ExpenseFilter, ExpensePage, ExpenseStore, SQLiteExpenseStore,
    StoreFilter, query_expenses,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use member::{DEFAULT_MEMBERS, Member, create_member, delete_all_members};
pub use pagination::{Pagination, PaginationConfig};
pub use routing::build_router;
pub use summary::{Summary, summarize};
pub use timezone::get_local_offset;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
