//! Repository layer over the in-memory store

pub mod books;
pub mod loans;
pub mod persons;

use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookId, Person, PersonId},
    sequence::{IdSequence, PersonSequencer},
};

/// Every book and person, plus the sequence handing out person ids.
///
/// Loans and returns touch a book and a person together, so both live behind
/// the same lock.
pub(crate) struct Store {
    books: IndexMap<BookId, Book>,
    persons: IndexMap<PersonId, Person>,
    sequence: Box<dyn IdSequence + Send>,
}

impl Store {
    fn new(sequence: Box<dyn IdSequence + Send>) -> Self {
        Self {
            books: IndexMap::new(),
            persons: IndexMap::new(),
            sequence,
        }
    }

    fn book(&self, id: &BookId) -> AppResult<&Book> {
        self.books
            .get(id)
            .ok_or_else(|| AppError::BookNotFound(id.clone()))
    }

    fn book_mut(&mut self, id: &BookId) -> AppResult<&mut Book> {
        self.books
            .get_mut(id)
            .ok_or_else(|| AppError::BookNotFound(id.clone()))
    }

    fn person(&self, id: PersonId) -> AppResult<&Person> {
        self.persons
            .get(&id)
            .ok_or_else(|| AppError::PersonNotFound(id))
    }

    fn person_mut(&mut self, id: PersonId) -> AppResult<&mut Person> {
        self.persons
            .get_mut(&id)
            .ok_or_else(|| AppError::PersonNotFound(id))
    }

    /// Person and book borrowed mutably at once
    fn person_and_book_mut(
        &mut self,
        person_id: PersonId,
        book_id: &BookId,
    ) -> AppResult<(&mut Person, &mut Book)> {
        let person = self
            .persons
            .get_mut(&person_id)
            .ok_or_else(|| AppError::PersonNotFound(person_id))?;
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| AppError::BookNotFound(book_id.clone()))?;
        Ok((person, book))
    }
}

type SharedStore = Arc<Mutex<Store>>;

fn lock(store: &SharedStore) -> AppResult<MutexGuard<'_, Store>> {
    store
        .lock()
        .map_err(|_| AppError::Internal("Store lock poisoned".to_string()))
}

/// Main repository struct holding the shared store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub persons: persons::PersonsRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create an empty repository whose person ids start at 1
    pub fn new() -> Self {
        Self::with_sequence(PersonSequencer::new())
    }

    /// Create an empty repository drawing person ids from `sequence`
    pub fn with_sequence(sequence: impl IdSequence + Send + 'static) -> Self {
        let store: SharedStore = Arc::new(Mutex::new(Store::new(Box::new(sequence))));
        Self {
            books: books::BooksRepository::new(store.clone()),
            persons: persons::PersonsRepository::new(store.clone()),
            loans: loans::LoansRepository::new(store),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
