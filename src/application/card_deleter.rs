// src/application/card_deleter.rs
use crate::application::CardRepository;
use crate::domain::{Card, DomainError};

pub struct CardDeleter<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> CardDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Soft-delete a card: the record stays in storage with the deleted
    /// flag set and disappears from listings. Deleting an already
    /// deleted card succeeds and returns it unchanged.
    pub fn soft_delete(&mut self, card_id: i64) -> Result<Option<Card>, DomainError> {
        self.repository.soft_delete(card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, FaceColor};
    use crate::util::testing::MockCardRepository;

    fn card(id: i64) -> Card {
        Card {
            id,
            title: "Card".to_string(),
            description: "description".to_string(),
            is_pinned: false,
            is_important: false,
            face_color: FaceColor::Black,
            is_deleted: false,
        }
    }

    #[test]
    fn given_existing_card_when_deleting_then_card_is_marked_deleted() {
        // Arrange
        let repo = MockCardRepository::builder().with_card(card(3)).build();
        let mut deleter = CardDeleter::new(repo);

        // Act
        let result = deleter.soft_delete(3).unwrap();

        // Assert
        assert!(result.expect("card should exist").is_deleted);
    }

    #[test]
    fn given_already_deleted_card_when_deleting_again_then_succeeds_unchanged() {
        // Arrange
        let repo = MockCardRepository::builder().with_card(card(3)).build();
        let mut deleter = CardDeleter::new(repo);
        let first = deleter.soft_delete(3).unwrap();

        // Act
        let second = deleter.soft_delete(3).unwrap();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn given_unknown_id_when_deleting_then_returns_none() {
        // Arrange
        let repo = MockCardRepository::builder().build();
        let mut deleter = CardDeleter::new(repo);

        // Act
        let result = deleter.soft_delete(404).unwrap();

        // Assert
        assert!(result.is_none());
    }
}
