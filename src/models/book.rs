//! Book model and related types

use uuid::Uuid;
use validator::Validate;

use crate::error::{require_text, AppResult};

use super::person::{Person, PersonId};

/// Opaque book identifier, generated once at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    fn generate() -> Self {
        BookId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the library.
///
/// Availability is not stored: a book is available exactly when it has no
/// borrower, and the borrower only changes through a loan or a return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    borrower: Option<PersonId>,
}

/// Create book request
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Book {
    /// Create an available book with a fresh id
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> AppResult<Self> {
        let title = require_text("Title", title.into())?;
        let author = require_text("Author", author.into())?;
        Ok(Self {
            id: BookId::generate(),
            title,
            author,
            borrower: None,
        })
    }

    /// Create a book and loan it straight away to `borrower`
    pub fn new_borrowed(
        title: impl Into<String>,
        author: impl Into<String>,
        borrower: &mut Person,
    ) -> AppResult<Self> {
        let mut book = Self::new(title, author)?;
        borrower.loan_book(&mut book)?;
        Ok(book)
    }

    pub(crate) fn from_request(request: CreateBook) -> AppResult<Self> {
        request.validate()?;
        Self::new(request.title, request.author)
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn borrower(&self) -> Option<PersonId> {
        self.borrower
    }

    pub fn is_available(&self) -> bool {
        self.borrower.is_none()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        self.title = require_text("Title", title.into())?;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> AppResult<()> {
        self.author = require_text("Author", author.into())?;
        Ok(())
    }

    /// Only loan and return go through here
    pub(crate) fn set_borrower(&mut self, borrower: Option<PersonId>) {
        self.borrower = borrower;
    }

    /// One-line summary of the book and its loan state
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book{{ id={}, title={}, author={}, available={}, borrower=",
            self.id,
            self.title,
            self.author,
            self.is_available()
        )?;
        match self.borrower {
            Some(person_id) => write!(f, "PersonId: {} }}", person_id),
            None => write!(f, "- }}"),
        }
    }
}
