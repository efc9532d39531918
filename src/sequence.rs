//! Person identifier sequencing

use crate::{
    error::{AppError, AppResult},
    models::PersonId,
};

/// Source of person identifiers.
///
/// Each call hands out an identifier that has never been returned before by
/// the same sequence, or fails once no identifiers are left.
#[cfg_attr(test, mockall::automock)]
pub trait IdSequence {
    fn next_id(&mut self) -> AppResult<PersonId>;
}

/// Monotonic counter handing out sequential person ids
#[derive(Debug, Clone)]
pub struct PersonSequencer {
    /// `None` once `u32::MAX` has been handed out
    next: Option<u32>,
}

impl PersonSequencer {
    /// Sequence starting at id 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// Next id to be handed out, without consuming it
    pub fn peek(&self) -> Option<PersonId> {
        self.next.map(PersonId)
    }
}

impl Default for PersonSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence for PersonSequencer {
    fn next_id(&mut self) -> AppResult<PersonId> {
        let id = self.next.ok_or(AppError::SequenceExhausted)?;
        self.next = id.checked_add(1);
        Ok(PersonId(id))
    }
}
