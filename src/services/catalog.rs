//! Catalog management service

use crate::{
    error::AppResult,
    models::{Book, BookId, CreateBook, PersonId},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a new, available book to the catalog
    pub fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(book)?;
        tracing::info!("Catalog create: book id={} title={:?}", book.id(), book.title());
        Ok(book)
    }

    /// Add a new book already loaned to `borrower`
    pub fn create_borrowed_book(&self, book: CreateBook, borrower: PersonId) -> AppResult<Book> {
        let book = self.repository.books.create_borrowed(book, borrower)?;
        tracing::info!(
            "Catalog create: book id={} title={:?} loaned to person {}",
            book.id(),
            book.title(),
            borrower
        );
        Ok(book)
    }

    pub fn get_book(&self, id: &BookId) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    pub fn update_title(&self, id: &BookId, title: impl Into<String>) -> AppResult<Book> {
        let book = self.repository.books.update_title(id, title.into())?;
        tracing::debug!("Book {} title set to {:?}", id, book.title());
        Ok(book)
    }

    pub fn update_author(&self, id: &BookId, author: impl Into<String>) -> AppResult<Book> {
        let book = self.repository.books.update_author(id, author.into())?;
        tracing::debug!("Book {} author set to {:?}", id, book.author());
        Ok(book)
    }

    pub fn describe_book(&self, id: &BookId) -> AppResult<String> {
        Ok(self.get_book(id)?.describe())
    }

    /// Description of whoever is borrowing the book, `None` when it is available
    pub fn describe_borrower(&self, id: &BookId) -> AppResult<Option<String>> {
        let borrower = self.repository.books.get_borrower(id)?;
        Ok(borrower.map(|person| person.describe()))
    }
}
