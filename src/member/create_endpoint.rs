//! Defines the endpoint for adding a member to the directory.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

use super::{Member, create_member};

/// The state needed to list or create members.
#[derive(Debug, Clone)]
pub struct MemberState {
    /// The database connection for managing members.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for MemberState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The JSON body for creating a member.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberData {
    /// The member's name, must not be blank.
    pub name: Option<String>,
    /// How the member relates to the couple.
    pub role: Option<String>,
}

/// A route handler for adding a member, responds with the new member.
pub async fn create_member_endpoint(
    State(state): State<MemberState>,
    payload: Result<Json<MemberData>, JsonRejection>,
) -> Result<(StatusCode, Json<Member>), Error> {
    let Json(data) = payload?;

    let name = data.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::EmptyField("name"));
    }
    let role = data.role.as_deref().map(str::trim).unwrap_or_default();

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let member = create_member(name, role, &connection)?;

    Ok((StatusCode::CREATED, Json(member)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        member::{MemberData, MemberState, create_member_endpoint, get_all_members},
    };

    fn get_test_state() -> MemberState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        MemberState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn creates_member() {
        let state = get_test_state();
        let data = MemberData {
            name: Some(" Chandrabhan (Uncle) ".to_owned()),
            role: None,
        };

        let (status, Json(member)) = create_member_endpoint(State(state.clone()), Ok(Json(data)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(member.name, "Chandrabhan (Uncle)");
        assert_eq!(member.role, "");
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_members(&connection), Ok(vec![member]));
    }

    #[tokio::test]
    async fn blank_name_is_bad_request() {
        let data = MemberData {
            name: Some("   ".to_owned()),
            role: Some("Cousin".to_owned()),
        };

        let result = create_member_endpoint(State(get_test_state()), Ok(Json(data))).await;

        assert_eq!(result.unwrap_err(), Error::EmptyField("name"));
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let state = get_test_state();
        let data = MemberData {
            name: Some("Kusum (Mother)".to_owned()),
            role: None,
        };
        create_member_endpoint(State(state.clone()), Ok(Json(data.clone())))
            .await
            .unwrap();

        let response = create_member_endpoint(State(state), Ok(Json(data)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
