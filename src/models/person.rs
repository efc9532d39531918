//! Person (borrower) model and related types

use validator::Validate;

use crate::{
    error::{require_text, AppError, AppResult},
    sequence::IdSequence,
};

use super::book::{Book, BookId};

/// Sequential person identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub u32);

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who can borrow books
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    /// Loan order
    borrowed_books: Vec<BookId>,
}

/// Create person request
#[derive(Debug, Clone, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
}

impl CreatePerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Person {
    /// Create a person with the next id of `sequence`.
    ///
    /// Names are checked before an id is drawn, so a rejected person leaves
    /// the sequence untouched. Fails with `SequenceExhausted` when no ids are left.
    pub fn new<S: IdSequence + ?Sized>(
        sequence: &mut S,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> AppResult<Self> {
        let first_name = require_text("First name", first_name.into())?;
        let last_name = require_text("Last name", last_name.into())?;
        Ok(Self {
            id: sequence.next_id()?,
            first_name,
            last_name,
            borrowed_books: Vec::new(),
        })
    }

    pub(crate) fn from_request<S: IdSequence + ?Sized>(
        sequence: &mut S,
        request: CreatePerson,
    ) -> AppResult<Self> {
        request.validate()?;
        Self::new(sequence, request.first_name, request.last_name)
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed_books
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> AppResult<()> {
        self.first_name = require_text("First name", first_name.into())?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> AppResult<()> {
        self.last_name = require_text("Last name", last_name.into())?;
        Ok(())
    }

    /// Borrow `book`, appending it to the end of the borrowed books.
    ///
    /// Fails without touching either side when the book is already on loan.
    pub fn loan_book(&mut self, book: &mut Book) -> AppResult<()> {
        if !book.is_available() {
            return Err(AppError::NotAvailable(book.id().clone()));
        }
        book.set_borrower(Some(self.id));
        self.borrowed_books.push(book.id().clone());
        Ok(())
    }

    /// Give `book` back. Returns `false`, changing nothing, when this person
    /// is not currently borrowing it.
    pub fn return_book(&mut self, book: &mut Book) -> bool {
        if book.borrower() != Some(self.id) {
            return false;
        }
        let Some(index) = self.borrowed_books.iter().position(|id| id == book.id()) else {
            return false;
        };
        self.borrowed_books.remove(index);
        book.set_borrower(None);
        true
    }

    /// One-line summary of the person and how many books they hold
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person{{ id={}, first_name={}, last_name={}, borrowed_books={} }}",
            self.id,
            self.first_name,
            self.last_name,
            self.borrowed_books.len()
        )
    }
}
