use axum::{Json, extract::State};

use crate::Error;

use super::{Member, MemberState, get_all_members};

/// A route handler that responds with every member, sorted by name.
pub async fn list_members_endpoint(
    State(state): State<MemberState>,
) -> Result<Json<Vec<Member>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    get_all_members(&connection).map(Json)
}
