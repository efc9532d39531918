//! Loans repository

use crate::{
    error::AppResult,
    models::{Book, BookId, PersonId},
};

use super::{lock, SharedStore};

#[derive(Clone)]
pub struct LoansRepository {
    store: SharedStore,
}

impl LoansRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Loan a book to a person. Book and person change under one lock.
    pub fn create(&self, person_id: PersonId, book_id: &BookId) -> AppResult<Book> {
        let mut store = lock(&self.store)?;
        let (person, book) = store.person_and_book_mut(person_id, book_id)?;
        person.loan_book(book)?;
        Ok(book.clone())
    }

    /// Return a book. `false` when the person was not borrowing it.
    pub fn return_loan(&self, person_id: PersonId, book_id: &BookId) -> AppResult<(bool, Book)> {
        let mut store = lock(&self.store)?;
        let (person, book) = store.person_and_book_mut(person_id, book_id)?;
        let returned = person.return_book(book);
        Ok((returned, book.clone()))
    }
}
