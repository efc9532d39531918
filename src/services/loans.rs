//! Loan management service

use crate::{
    error::AppResult,
    models::{Book, BookId, PersonId},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Loan a book to a person
    pub fn loan_book(&self, person_id: PersonId, book_id: &BookId) -> AppResult<Book> {
        let book = self.repository.loans.create(person_id, book_id)?;
        tracing::info!("Book {} loaned to person {}", book_id, person_id);
        Ok(book)
    }

    /// Return a borrowed book.
    ///
    /// Returning a book the person does not hold changes nothing and yields `false`.
    pub fn return_book(&self, person_id: PersonId, book_id: &BookId) -> AppResult<bool> {
        let (returned, book) = self.repository.loans.return_loan(person_id, book_id)?;
        if returned {
            tracing::info!("Book {} returned by person {}", book_id, person_id);
        } else {
            tracing::warn!(
                "Person {} tried to return book {} they are not borrowing (borrower: {:?})",
                person_id,
                book_id,
                book.borrower()
            );
        }
        Ok(returned)
    }
}
