//! Defines the household member model and its database functions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, database_id::MemberId};

/// The family members who usually pay for things, used to seed a new database.
pub const DEFAULT_MEMBERS: [&str; 4] = [
    "Ajeet (Uncle)",
    "Kusum (Mother)",
    "Sameer (Brother)",
    "Chandrabhan (Uncle)",
];

/// A person in the household directory.
///
/// Members are only a convenience list for clients, an expense's payer does
/// not have to be a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// The ID of the member.
    pub id: MemberId,
    /// The member's name, unique across the directory.
    pub name: String,
    /// How the member relates to the couple, may be empty.
    pub role: String,
    /// When the member was added.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Create the member table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_member_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS member (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                role TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_member_row(row: &Row) -> Result<Member, rusqlite::Error> {
    Ok(Member {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Add a member to the directory.
///
/// # Errors
/// Returns a:
/// - [Error::DuplicateMemberName] if a member called `name` already exists,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_member(name: &str, role: &str, connection: &Connection) -> Result<Member, Error> {
    connection
        .query_row(
            "INSERT INTO member (name, role, created_at) VALUES (?1, ?2, ?3)
             RETURNING id, name, role, created_at",
            (name, role, OffsetDateTime::now_utc()),
            map_member_row,
        )
        .map_err(|error| match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_))
                if sql_error.extended_code == 2067 =>
            {
                Error::DuplicateMemberName(name.to_owned())
            }
            error => error.into(),
        })
}

/// Get every member, sorted by name.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn get_all_members(connection: &Connection) -> Result<Vec<Member>, Error> {
    connection
        .prepare("SELECT id, name, role, created_at FROM member ORDER BY name ASC")?
        .query_map((), map_member_row)?
        .map(|maybe_member| maybe_member.map_err(Error::SqlError))
        .collect()
}

/// Delete every member, returning how many were deleted.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn delete_all_members(connection: &Connection) -> Result<usize, Error> {
    connection
        .execute("DELETE FROM member", ())
        .map_err(Error::from)
}
