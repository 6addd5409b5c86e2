//! HTTP handlers for the summary, event overview and payer list.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseStore, SQLiteExpenseStore, StoreFilter},
};

use super::aggregation::{EventOverview, Summary, distinct_payers, event_overview, summarize};

/// The state needed for the summary endpoints.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The store to fetch expenses from.
    pub store: SQLiteExpenseStore,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: SQLiteExpenseStore::new(state.db_connection.clone()),
        }
    }
}

/// Statistics are always over every expense, list filters do not apply.
fn fetch_all_expenses(state: &SummaryState) -> Result<Vec<Expense>, Error> {
    state
        .store
        .fetch_all(&StoreFilter::default())
        .inspect_err(|error| tracing::error!("Could not fetch expenses for summary: {error}"))
}

/// A route handler that responds with the overall and grouped totals.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Summary>, Error> {
    let expenses = fetch_all_expenses(&state)?;

    Ok(Json(summarize(&expenses)))
}

/// A route handler that responds with the totals for each wedding function.
pub async fn get_events_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Vec<EventOverview>>, Error> {
    let expenses = fetch_all_expenses(&state)?;
    let summary = summarize(&expenses);

    Ok(Json(event_overview(&summary.by_event)))
}

/// A route handler that responds with everyone who has paid for something.
pub async fn get_payers_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Vec<String>>, Error> {
    let expenses = fetch_all_expenses(&state)?;

    Ok(Json(distinct_payers(&expenses)))
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use time::macros::date;

    use crate::{
        amount::Amount,
        expense::{Expense, ExpenseStore, test_utils::get_test_store},
        summary::{SummaryState, get_events_endpoint, get_payers_endpoint, get_summary_endpoint},
    };

    fn get_test_state() -> SummaryState {
        let store = get_test_store();

        for (title, amount, event, paid_by, date) in [
            ("Engagement Ring", 75_000, "Chheka", "Ajeet (Uncle)", date!(2026 - 02 - 15)),
            ("Reception Dinner", 60_000, "Reception", "Kusum (Mother)", date!(2026 - 02 - 22)),
            ("Reception Decor", 30_000, "Reception", "Ajeet (Uncle)", date!(2026 - 02 - 22)),
        ] {
            store
                .create(Expense::build(
                    title,
                    Amount::from_major_units(amount),
                    event,
                    paid_by,
                    date,
                ))
                .expect("Could not create expense");
        }

        SummaryState { store }
    }

    #[tokio::test]
    async fn summary_covers_every_expense() {
        let summary = get_summary_endpoint(State(get_test_state()))
            .await
            .unwrap()
            .0;

        assert_eq!(summary.total_amount, Amount::from_major_units(165_000));
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.most_expensive_event, Some("Reception".to_owned()));
        assert_eq!(summary.recent_expenses[0].title, "Reception Dinner");
    }

    #[tokio::test]
    async fn summary_of_empty_store_is_zero() {
        let state = SummaryState {
            store: get_test_store(),
        };

        let summary = get_summary_endpoint(State(state)).await.unwrap().0;

        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.most_expensive_event, None);
    }

    #[tokio::test]
    async fn events_include_functions_without_expenses() {
        let events = get_events_endpoint(State(get_test_state()))
            .await
            .unwrap()
            .0;

        assert_eq!(events.len(), 5);
        assert_eq!(events[0].name, "Chheka");
        assert_eq!(events[0].count, 1);
        assert_eq!(events[1].name, "Mehendi");
        assert_eq!(events[1].total, Amount::ZERO);
        assert_eq!(events[4].total, Amount::from_major_units(90_000));
    }

    #[tokio::test]
    async fn payers_are_sorted() {
        let payers = get_payers_endpoint(State(get_test_state()))
            .await
            .unwrap()
            .0;

        assert_eq!(payers, vec!["Ajeet (Uncle)", "Kusum (Mother)"]);
    }
}
