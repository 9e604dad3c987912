// src/application/card_lister.rs
use crate::domain::{sort_for_board, Card, DomainError, FlagChanges, NewCard};

/// Storage seam for the card service. One connection is opened at
/// process start and held for the process lifetime.
pub trait CardRepository {
    /// All cards with the soft-delete flag clear, in storage order.
    fn list_active(&mut self) -> Result<Vec<Card>, DomainError>;

    /// Write the provided flags on the identified card and return the
    /// updated record. Resolves soft-deleted cards too; an unknown id
    /// yields `Ok(None)` rather than an error.
    fn update_flags(&mut self, id: i64, changes: FlagChanges)
        -> Result<Option<Card>, DomainError>;

    /// Mark the identified card deleted and return it. Idempotent.
    fn soft_delete(&mut self, id: i64) -> Result<Option<Card>, DomainError>;

    fn count_cards(&mut self) -> Result<u64, DomainError>;

    fn count_active(&mut self) -> Result<u64, DomainError>;

    /// Clear the soft-delete flag on every deleted card; returns how
    /// many cards were restored.
    fn restore_deleted(&mut self) -> Result<u64, DomainError>;

    fn create_cards(&mut self, cards: &[NewCard]) -> Result<(), DomainError>;
}

impl<R: CardRepository + ?Sized> CardRepository for &mut R {
    fn list_active(&mut self) -> Result<Vec<Card>, DomainError> {
        (**self).list_active()
    }

    fn update_flags(
        &mut self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, DomainError> {
        (**self).update_flags(id, changes)
    }

    fn soft_delete(&mut self, id: i64) -> Result<Option<Card>, DomainError> {
        (**self).soft_delete(id)
    }

    fn count_cards(&mut self) -> Result<u64, DomainError> {
        (**self).count_cards()
    }

    fn count_active(&mut self) -> Result<u64, DomainError> {
        (**self).count_active()
    }

    fn restore_deleted(&mut self) -> Result<u64, DomainError> {
        (**self).restore_deleted()
    }

    fn create_cards(&mut self, cards: &[NewCard]) -> Result<(), DomainError> {
        (**self).create_cards(cards)
    }
}

pub struct CardLister<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> CardLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all active cards in board order: pinned first, then newest
    /// first within each group.
    pub fn list_active(&mut self) -> Result<Vec<Card>, DomainError> {
        let mut cards = self.repository.list_active()?;
        sort_for_board(&mut cards);
        Ok(cards)
    }
}
