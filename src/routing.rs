//! Application router configuration.

use axum::{
    Router,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState, Error, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        export_expenses_endpoint, get_expense_endpoint, list_expenses_endpoint,
    },
    logging::logging_middleware,
    member::{create_member_endpoint, list_members_endpoint},
    summary::{get_events_endpoint, get_payers_endpoint, get_summary_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::EXPORT_EXPENSES, get(export_expenses_endpoint))
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint)
                .put(edit_expense_endpoint)
                .delete(delete_expense_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(endpoints::EVENTS, get(get_events_endpoint))
        .route(endpoints::PAYERS, get(get_payers_endpoint))
        .route(
            endpoints::MEMBERS,
            get(list_members_endpoint).post(create_member_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        error::ErrorResponse,
        expense::{DeleteResponse, Expense, ExpensePage},
        member::Member,
        pagination::PaginationConfig,
        summary::{EventOverview, Summary},
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection, "Asia/Kolkata", PaginationConfig::default())
            .expect("Could not create app state");

        TestServer::new(build_router(state))
    }

    async fn create_expense(server: &TestServer, title: &str, event: &str, date: &str) -> Expense {
        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({
                "title": title,
                "amount": 1500.25,
                "event": event,
                "paidBy": "Kusum (Mother)",
                "date": date,
                "notes": "paid in cash"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.json::<Expense>()
    }

    #[tokio::test]
    async fn expense_lifecycle() {
        let server = get_test_server();
        let created = create_expense(&server, "Flower Garlands", "Wedding", "2026-02-20").await;
        let path = format_endpoint(endpoints::EXPENSE, created.id);

        let fetched = server.get(&path).await.json::<Expense>();
        assert_eq!(fetched, created);

        let replaced = server
            .put(&path)
            .json(&json!({
                "title": "Rose Garlands",
                "amount": 1800,
                "event": "Wedding",
                "paidBy": "Sameer (Brother)",
                "date": "2026-02-20"
            }))
            .await
            .json::<Expense>();
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.title, "Rose Garlands");
        assert_eq!(replaced.notes, "");

        let deleted = server.delete(&path).await.json::<DeleteResponse>();
        assert_eq!(deleted.message, "Expense deleted successfully");

        server.get(&path).await.assert_status_not_found();
        server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_filters_and_pages() {
        let server = get_test_server();
        create_expense(&server, "Mehendi Artist", "Mehendi", "2026-02-18").await;
        create_expense(&server, "Haldi Setup", "Haldi", "2026-02-19").await;
        create_expense(&server, "Wedding Venue", "Wedding", "2026-02-20").await;

        let page = server
            .get(endpoints::EXPENSES_API)
            .add_query_param("startDate", "2026-02-18")
            .add_query_param("endDate", "2026-02-19")
            .add_query_param("limit", "1")
            .await
            .json::<ExpensePage>();

        assert_eq!(page.expenses.len(), 1);
        assert_eq!(page.expenses[0].title, "Haldi Setup");
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn list_response_uses_camel_case_pagination() {
        let server = get_test_server();

        let body = server
            .get(endpoints::EXPENSES_API)
            .await
            .json::<serde_json::Value>();

        assert_eq!(
            body,
            json!({
                "expenses": [],
                "pagination": {"page": 1, "limit": 10, "total": 0, "totalPages": 0}
            })
        );
    }

    #[tokio::test]
    async fn invalid_expense_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES_API)
            .json(&json!({
                "title": "A",
                "amount": 10,
                "event": "Haldi",
                "paidBy": "Kusum (Mother)"
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<ErrorResponse>(),
            ErrorResponse::new("title must be at least 2 characters")
        );
    }

    #[tokio::test]
    async fn oversized_amount_is_bad_request() {
        let server = get_test_server();

        server
            .post(endpoints::EXPENSES_API)
            .json(&json!({
                "title": "Palace Venue",
                "amount": 5.0e16,
                "event": "Wedding",
                "paidBy": "Ajeet (Uncle)"
            }))
            .await
            .assert_status_bad_request();

        let summary = server.get(endpoints::SUMMARY).await.json::<Summary>();
        assert_eq!(summary.total_transactions, 0);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let server = get_test_server();

        server
            .post(endpoints::EXPENSES_API)
            .json(&json!({"title": "Sweets", "amount": "a lot"}))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn summary_and_events_reflect_expenses() {
        let server = get_test_server();
        create_expense(&server, "Mehendi Artist", "Mehendi", "2026-02-18").await;
        create_expense(&server, "Mehendi Cones", "Mehendi", "2026-02-18").await;

        let summary = server.get(endpoints::SUMMARY).await.json::<Summary>();
        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.most_expensive_event.as_deref(), Some("Mehendi"));

        let events = server.get(endpoints::EVENTS).await.json::<Vec<EventOverview>>();
        assert_eq!(events[1].name, "Mehendi");
        assert_eq!(events[1].count, 2);

        let payers = server.get(endpoints::PAYERS).await.json::<Vec<String>>();
        assert_eq!(payers, vec!["Kusum (Mother)"]);
    }

    #[tokio::test]
    async fn export_is_not_shadowed_by_expense_route() {
        let server = get_test_server();
        create_expense(&server, "Haldi Setup", "Haldi", "2026-02-19").await;

        let response = server.get(endpoints::EXPORT_EXPENSES).await;

        response.assert_status_ok();
        assert_eq!(
            response.text(),
            "date,title,event,paid_by,amount,notes\n\
             2026-02-19,Haldi Setup,Haldi,Kusum (Mother),1500.25,paid in cash\n\
             ,Total,,,1500.25,\n"
        );
    }

    #[tokio::test]
    async fn members_can_be_added_once() {
        let server = get_test_server();

        server
            .post(endpoints::MEMBERS)
            .json(&json!({"name": "Ajeet (Uncle)", "role": "Uncle"}))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post(endpoints::MEMBERS)
            .json(&json!({"name": "Ajeet (Uncle)"}))
            .await
            .assert_status(StatusCode::CONFLICT);

        let members = server.get(endpoints::MEMBERS).await.json::<Vec<Member>>();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].role, "Uncle");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let server = get_test_server();

        let response = server.get("/api/nothing-here").await;

        response.assert_status_not_found();
        assert_eq!(response.json::<ErrorResponse>(), ErrorResponse::new("Not found"));
    }
}
