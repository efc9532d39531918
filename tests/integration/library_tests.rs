//! Library integration tests

use std::{
    sync::{Arc, Barrier},
    thread,
};

use lending_library::{
    config::AppConfig,
    models::{Book, CreateBook, CreatePerson, PersonId},
    sequence::PersonSequencer,
    AppError, Library,
};

fn library() -> Library {
    Library::new(AppConfig::default())
}

#[test]
fn test_loan_and_return_scenario() {
    let library = library();
    let services = &library.services;

    let person = services
        .users
        .create_person(CreatePerson::new("Ada", "Lovelace"))
        .expect("Failed to create person");
    assert_eq!(person.id(), PersonId(1));

    let book = services
        .catalog
        .create_book(CreateBook::new("Clean Code", "Robert C. Martin"))
        .expect("Failed to create book");
    assert!(book.is_available());

    services.loans.loan_book(person.id(), book.id()).expect("Loan failed");

    let listing = services.users.list_borrowed_books(person.id()).unwrap();
    assert_eq!(listing.lines().count(), 1);
    assert!(listing.contains("title=Clean Code"));
    assert!(listing.contains("available=false"));
    assert!(listing.contains("borrower=PersonId: 1 }"));

    assert!(services.loans.return_book(person.id(), book.id()).unwrap());

    assert_eq!(services.users.list_borrowed_books(person.id()).unwrap(), "");
    let described = services.catalog.describe_book(book.id()).unwrap();
    assert!(described.contains("available=true"));
    assert!(described.ends_with("borrower=- }"));
    assert_eq!(services.catalog.describe_borrower(book.id()).unwrap(), None);
}

#[test]
fn test_round_trip_restores_state() {
    let library = library();
    let services = &library.services;

    let person = services.users.create_person(CreatePerson::new("Ada", "Lovelace")).unwrap();
    let kept = services.catalog.create_book(CreateBook::new("Kept", "Author")).unwrap();
    services.loans.loan_book(person.id(), kept.id()).unwrap();

    let book = services.catalog.create_book(CreateBook::new("Dune", "Frank Herbert")).unwrap();
    let person_before = services.users.get_person(person.id()).unwrap();

    services.loans.loan_book(person.id(), book.id()).unwrap();
    services.loans.return_book(person.id(), book.id()).unwrap();

    assert_eq!(services.users.get_person(person.id()).unwrap(), person_before);
    assert_eq!(services.catalog.get_book(book.id()).unwrap(), book);
}

#[test]
fn test_loan_unavailable_book_leaves_state_unchanged() {
    let library = library();
    let services = &library.services;

    let first = services.users.create_person(CreatePerson::new("First", "Reader")).unwrap();
    let second = services.users.create_person(CreatePerson::new("Second", "Reader")).unwrap();
    let book = services.catalog.create_book(CreateBook::new("Dune", "Frank Herbert")).unwrap();
    services.loans.loan_book(first.id(), book.id()).unwrap();

    let book_before = services.catalog.get_book(book.id()).unwrap();
    let err = services.loans.loan_book(second.id(), book.id()).unwrap_err();
    assert!(matches!(err, AppError::NotAvailable(_)));
    assert_eq!(err.to_string(), format!("Book {} is not available", book.id()));

    assert_eq!(services.catalog.get_book(book.id()).unwrap(), book_before);
    assert!(services.users.borrowed_books(second.id()).unwrap().is_empty());
    assert_eq!(services.users.borrowed_books(first.id()).unwrap(), vec![book_before]);
}

#[test]
fn test_borrowed_book_constructor_keeps_both_sides() {
    let library = library();
    let services = &library.services;

    let person = services.users.create_person(CreatePerson::new("Ada", "Lovelace")).unwrap();
    let book = services
        .catalog
        .create_borrowed_book(CreateBook::new("Dune", "Frank Herbert"), person.id())
        .unwrap();

    assert_eq!(book.borrower(), Some(person.id()));
    assert_eq!(services.users.borrowed_books(person.id()).unwrap(), vec![book.clone()]);

    assert!(services.loans.return_book(person.id(), book.id()).unwrap());
    assert!(services.catalog.get_book(book.id()).unwrap().is_available());
}

#[test]
fn test_invalid_construction_allocates_no_id() {
    let library = library();
    let services = &library.services;

    assert!(matches!(
        services.users.create_person(CreatePerson::new("", "Lovelace")),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        services.catalog.create_book(CreateBook::new("Dune", "")),
        Err(AppError::Validation(_))
    ));

    let person = services.users.create_person(CreatePerson::new("Ada", "Lovelace")).unwrap();
    assert_eq!(person.id(), PersonId(1));
}

#[test]
fn test_sequence_seeded_from_config() {
    let mut config = AppConfig::default();
    config.sequence.first_person_id = 1000;
    let library = Library::new(config);

    let a = library.services.users.create_person(CreatePerson::new("A", "A")).unwrap();
    let b = library.services.users.create_person(CreatePerson::new("B", "B")).unwrap();
    assert_eq!(a.id(), PersonId(1000));
    assert_eq!(b.id(), PersonId(1001));
}

#[test]
fn test_separate_libraries_have_separate_sequences() {
    let one = Library::with_sequence(AppConfig::default(), PersonSequencer::new());
    let two = Library::with_sequence(AppConfig::default(), PersonSequencer::new());

    let a = one.services.users.create_person(CreatePerson::new("A", "A")).unwrap();
    let b = two.services.users.create_person(CreatePerson::new("B", "B")).unwrap();
    assert_eq!(a.id(), b.id());
}

#[test]
fn test_return_of_unborrowed_book_keeps_other_loans() {
    let library = library();
    let services = &library.services;

    let person = services.users.create_person(CreatePerson::new("Ada", "Lovelace")).unwrap();
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let book = services.catalog.create_book(CreateBook::new(title, "Author")).unwrap();
        services.loans.loan_book(person.id(), book.id()).unwrap();
        ids.push(book.id().clone());
    }
    let never = services.catalog.create_book(CreateBook::new("Never", "Author")).unwrap();

    assert!(!services.loans.return_book(person.id(), never.id()).unwrap());
    assert_eq!(services.users.get_person(person.id()).unwrap().borrowed_books(), ids.as_slice());

    assert!(services.loans.return_book(person.id(), &ids[0]).unwrap());
    let remaining: Vec<String> = services
        .users
        .borrowed_books(person.id())
        .unwrap()
        .iter()
        .map(|b| b.title().to_string())
        .collect();
    assert_eq!(remaining, ["Two", "Three"]);
}

#[test]
fn test_entities_without_repository() {
    let mut sequence = PersonSequencer::new();
    let mut person = lending_library::models::Person::new(&mut sequence, "Ada", "Lovelace").unwrap();
    let mut book = Book::new("Clean Code", "Robert C. Martin").unwrap();

    person.loan_book(&mut book).unwrap();
    assert_eq!(person.borrowed_books(), &[book.id().clone()]);
    assert!(person.return_book(&mut book));
    assert!(book.is_available());
}

#[test]
fn test_exhausted_sequence_keeps_library_usable() {
    let mut config = AppConfig::default();
    config.sequence.first_person_id = u32::MAX;
    let library = Library::new(config);
    let services = &library.services;

    let last = services.users.create_person(CreatePerson::new("Last", "Reader")).unwrap();
    assert_eq!(last.id(), PersonId(u32::MAX));

    let err = services
        .users
        .create_person(CreatePerson::new("One", "Toomany"))
        .unwrap_err();
    assert!(matches!(err, AppError::SequenceExhausted));

    let book = services
        .catalog
        .create_book(CreateBook::new("Still", "Working"))
        .expect("Store should stay usable after an exhausted sequence");
    let loaned = services.loans.loan_book(last.id(), book.id()).unwrap();
    assert_eq!(services.users.borrowed_books(last.id()).unwrap(), vec![loaned]);
}

#[test]
fn test_concurrent_loans_of_one_book() {
    const READERS: usize = 16;

    let library = library();
    let book = library
        .services
        .catalog
        .create_book(CreateBook::new("Dune", "Frank Herbert"))
        .unwrap();
    let readers: Vec<PersonId> = (0..READERS)
        .map(|i| {
            library
                .services
                .users
                .create_person(CreatePerson::new(format!("Reader{}", i), "Concurrent"))
                .unwrap()
                .id()
        })
        .collect();

    let barrier = Arc::new(Barrier::new(READERS));
    let handles: Vec<_> = readers
        .iter()
        .map(|&reader| {
            let library = library.clone();
            let barrier = Arc::clone(&barrier);
            let book_id = book.id().clone();
            thread::spawn(move || {
                barrier.wait();
                library.services.loans.loan_book(reader, &book_id)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Loan thread panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, AppError::NotAvailable(_))));

    let holders: Vec<PersonId> = readers
        .iter()
        .copied()
        .filter(|&reader| !library.services.users.borrowed_books(reader).unwrap().is_empty())
        .collect();
    assert_eq!(holders.len(), 1);
    assert_eq!(
        library.services.catalog.get_book(book.id()).unwrap().borrower(),
        Some(holders[0])
    );
}
