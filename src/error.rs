//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request body could not be parsed as JSON of the expected shape.
    ///
    /// Callers should pass in the rejection message.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// A required field was missing from a request body.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// The expense title was shorter than two characters after trimming.
    #[error("title must be at least 2 characters")]
    TitleTooShort,

    /// A text field that must have content was empty after trimming.
    #[error("\"{0}\" cannot be empty")]
    EmptyField(&'static str),

    /// An amount was negative, not a number, or too large.
    ///
    /// Callers should pass in the offending value as a string.
    #[error("amount must be a number from 0 to 1000000000000, got {0}")]
    InvalidAmount(String),

    /// A date string in a request body could not be parsed.
    #[error("could not parse \"{0}\" as a date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// Tried to delete an expense that does not exist
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,

    /// The specified member name already exists in the database.
    #[error("the member \"{0}\" already exists")]
    DuplicateMemberName(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Writing a CSV export failed.
    #[error("could not write CSV: {0}")]
    CsvError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Error::InvalidBody(value.body_text())
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

/// The JSON body sent to the client for any failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// A human readable description of what went wrong.
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body with the message `error`.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidBody(_)
            | Error::MissingField(_)
            | Error::TitleTooShort
            | Error::EmptyField(_)
            | Error::InvalidAmount(_)
            | Error::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::UpdateMissingExpense | Error::DeleteMissingExpense => {
                StatusCode::NOT_FOUND
            }
            Error::DuplicateMemberName(_) => StatusCode::CONFLICT,
            Error::SqlError(_)
            | Error::DatabaseLockError
            | Error::InvalidTimezoneError(_)
            | Error::CsvError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::NotFound => "Not found".to_owned(),
            Error::UpdateMissingExpense | Error::DeleteMissingExpense => {
                "Expense not found".to_owned()
            }
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                )
            }
            // Any server errors not handled above are not intended to be shown to the client.
            error if status == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("An unexpected error occurred: {}", error);
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
