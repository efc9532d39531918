//! Person management service

use crate::{
    error::AppResult,
    models::{borrowed_books_listing, Book, CreatePerson, Person, PersonId},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new person
    pub fn create_person(&self, person: CreatePerson) -> AppResult<Person> {
        let person = self.repository.persons.create(person)?;
        tracing::info!("Person {} created", person.id());
        Ok(person)
    }

    pub fn get_person(&self, id: PersonId) -> AppResult<Person> {
        self.repository.persons.get_by_id(id)
    }

    pub fn update_first_name(&self, id: PersonId, first_name: impl Into<String>) -> AppResult<Person> {
        let person = self.repository.persons.update_first_name(id, first_name.into())?;
        tracing::debug!("Person {} first name updated", id);
        Ok(person)
    }

    pub fn update_last_name(&self, id: PersonId, last_name: impl Into<String>) -> AppResult<Person> {
        let person = self.repository.persons.update_last_name(id, last_name.into())?;
        tracing::debug!("Person {} last name updated", id);
        Ok(person)
    }

    pub fn describe_person(&self, id: PersonId) -> AppResult<String> {
        Ok(self.get_person(id)?.describe())
    }

    /// Books the person currently holds, in loan order
    pub fn borrowed_books(&self, id: PersonId) -> AppResult<Vec<Book>> {
        self.repository.persons.get_borrowed_books(id)
    }

    /// One description line per borrowed book
    pub fn list_borrowed_books(&self, id: PersonId) -> AppResult<String> {
        let books = self.borrowed_books(id)?;
        Ok(borrowed_books_listing(&books))
    }
}
