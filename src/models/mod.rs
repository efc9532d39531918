//! Data models for the lending library

pub mod book;
pub mod display;
pub mod person;

// Re-export commonly used types
pub use book::{Book, BookId, CreateBook};
pub use display::borrowed_books_listing;
pub use person::{CreatePerson, Person, PersonId};
