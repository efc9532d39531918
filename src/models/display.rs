//! Text rendering shared by the models and services

use super::book::Book;

/// One `describe()` line per book, in the given order. Empty when there are no books.
pub fn borrowed_books_listing<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    books
        .into_iter()
        .map(Book::describe)
        .collect::<Vec<_>>()
        .join("\n")
}
