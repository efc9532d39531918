//! Lending Library
//!
//! Books, the people who borrow them, and the loan and return operations that
//! keep both sides in agreement.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod sequence;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use sequence::{IdSequence, PersonSequencer};

/// Configuration and services sharing a single store
#[derive(Clone)]
pub struct Library {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl Library {
    /// Build a library whose person ids start at `sequence.first_person_id`
    pub fn new(config: AppConfig) -> Self {
        let sequence = PersonSequencer::starting_at(config.sequence.first_person_id);
        Self::with_sequence(config, sequence)
    }

    /// Build a library drawing person ids from `sequence`
    pub fn with_sequence(config: AppConfig, sequence: impl IdSequence + Send + 'static) -> Self {
        let repository = Repository::with_sequence(sequence);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
