//! Lending Library demo
//!
//! Registers a reader and a book, then walks through one loan and its return.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lending_library::{
    config::{AppConfig, LogFormat},
    models::{CreateBook, CreatePerson},
    Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("lending_library={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Lending Library v{}", env!("CARGO_PKG_VERSION"));

    let library = Library::new(config);
    let services = &library.services;

    let person = services.users.create_person(CreatePerson::new("Ada", "Lovelace"))?;
    let book = services
        .catalog
        .create_book(CreateBook::new("Clean Code", "Robert C. Martin"))?;

    println!("{}", person.describe());
    println!("{}", book.describe());

    services.loans.loan_book(person.id(), book.id())?;
    println!("{}", services.users.describe_person(person.id())?);
    println!("{}", services.users.list_borrowed_books(person.id())?);

    services.loans.return_book(person.id(), book.id())?;
    println!("{}", services.users.describe_person(person.id())?);
    println!("{}", services.catalog.describe_book(book.id())?);

    Ok(())
}
