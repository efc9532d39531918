//! Persons repository

use crate::{
    error::AppResult,
    models::{Book, CreatePerson, Person, PersonId},
};

use super::{lock, SharedStore};

#[derive(Clone)]
pub struct PersonsRepository {
    store: SharedStore,
}

impl PersonsRepository {
    pub(crate) fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Get person by ID
    pub fn get_by_id(&self, id: PersonId) -> AppResult<Person> {
        let store = lock(&self.store)?;
        store.person(id).cloned()
    }

    /// Create a new person with the next id of the sequence
    pub fn create(&self, request: CreatePerson) -> AppResult<Person> {
        let mut store = lock(&self.store)?;
        let person = Person::from_request(store.sequence.as_mut(), request)?;
        store.persons.insert(person.id(), person.clone());
        Ok(person)
    }

    pub fn update_first_name(&self, id: PersonId, first_name: String) -> AppResult<Person> {
        let mut store = lock(&self.store)?;
        let person = store.person_mut(id)?;
        person.set_first_name(first_name)?;
        Ok(person.clone())
    }

    pub fn update_last_name(&self, id: PersonId, last_name: String) -> AppResult<Person> {
        let mut store = lock(&self.store)?;
        let person = store.person_mut(id)?;
        person.set_last_name(last_name)?;
        Ok(person.clone())
    }

    /// Books currently borrowed by a person, in loan order
    pub fn get_borrowed_books(&self, id: PersonId) -> AppResult<Vec<Book>> {
        let store = lock(&self.store)?;
        store
            .person(id)?
            .borrowed_books()
            .iter()
            .map(|book_id| store.book(book_id).cloned())
            .collect()
    }
}
