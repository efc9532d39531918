//! Books repository

use crate::{
    error::AppResult,
    models::{Book, BookId, CreateBook, Person, PersonId},
};

use super::{lock, SharedStore};

#[derive(Clone)]
pub struct BooksRepository {
    store: SharedStore,
}

impl BooksRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: &BookId) -> AppResult<Book> {
        let store = lock(&self.store)?;
        store.book(id).cloned()
    }

    /// Create a new, available book
    pub fn create(&self, request: CreateBook) -> AppResult<Book> {
        let book = Book::from_request(request)?;
        let mut store = lock(&self.store)?;
        store.books.insert(book.id().clone(), book.clone());
        Ok(book)
    }

    /// Create a new book already on loan to `borrower`.
    ///
    /// Nothing is stored unless the borrower exists.
    pub fn create_borrowed(&self, request: CreateBook, borrower: PersonId) -> AppResult<Book> {
        let mut book = Book::from_request(request)?;
        let mut store = lock(&self.store)?;
        store.person_mut(borrower)?.loan_book(&mut book)?;
        store.books.insert(book.id().clone(), book.clone());
        Ok(book)
    }

    pub fn update_title(&self, id: &BookId, title: String) -> AppResult<Book> {
        let mut store = lock(&self.store)?;
        let book = store.book_mut(id)?;
        book.set_title(title)?;
        Ok(book.clone())
    }

    pub fn update_author(&self, id: &BookId, author: String) -> AppResult<Book> {
        let mut store = lock(&self.store)?;
        let book = store.book_mut(id)?;
        book.set_author(author)?;
        Ok(book.clone())
    }

    /// Current borrower of a book, if any
    pub fn get_borrower(&self, id: &BookId) -> AppResult<Option<Person>> {
        let store = lock(&self.store)?;
        match store.book(id)?.borrower() {
            Some(person_id) => Ok(Some(store.person(person_id)?.clone())),
            None => Ok(None),
        }
    }
}
