//! Error types for the lending library

use thiserror::Error;

use crate::models::{BookId, PersonId};

/// Numeric error codes, stable across releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    BadValue = 18,
    BadConfiguration = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book with id {0} not found")]
    BookNotFound(BookId),

    #[error("Person with id {0} not found")]
    PersonNotFound(PersonId),

    #[error("Book {0} is not available")]
    NotAvailable(BookId),

    #[error("Person id sequence exhausted")]
    SequenceExhausted,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error code matching this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::PersonNotFound(_) => ErrorCode::NoSuchUser,
            AppError::NotAvailable(_) => ErrorCode::ItemNotAvailable,
            AppError::SequenceExhausted => ErrorCode::Failure,
            AppError::Config(_) => ErrorCode::BadConfiguration,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

/// Result type alias for library operations
pub type AppResult<T> = Result<T, AppError>;

/// Reject an empty text field with a validation error
pub(crate) fn require_text(field: &str, value: String) -> AppResult<String> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(value)
}
