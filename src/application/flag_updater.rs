// src/application/flag_updater.rs
use crate::application::CardRepository;
use crate::domain::{Card, DomainError, FlagChanges};

pub struct FlagUpdater<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> FlagUpdater<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Set the supplied pin/important flags on a card.
    ///
    /// Fields the caller did not supply are never written. An unknown
    /// id is reported as `Ok(None)`, not as an error; the HTTP layer
    /// passes that through as a `null` body for wire compatibility.
    pub fn update_flags(
        &mut self,
        card_id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, DomainError> {
        self.repository.update_flags(card_id, changes)
    }
}
