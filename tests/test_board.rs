use cardboard::application::{CardBoard, FlagField};
use cardboard::domain::{BoardError, Card, FaceColor, FlagChanges};
use cardboard::util::testing::MockBoardBackend;
use std::sync::Arc;

fn card(id: i64, pinned: bool) -> Card {
    Card {
        id,
        title: format!("Card {id}"),
        description: "Description".to_string(),
        is_pinned: pinned,
        is_important: false,
        face_color: FaceColor::Purple,
        is_deleted: false,
    }
}

#[tokio::test]
async fn given_reachable_service_when_loading_then_board_holds_cards() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(2, false))
        .with_card(card(1, false))
        .build();
    let mut board = CardBoard::new(backend);
    assert!(board.is_loading());

    // Act
    board.load().await;

    // Assert
    assert!(!board.is_loading());
    assert!(board.error().is_none());
    assert_eq!(board.cards().len(), 2);
}

#[tokio::test]
async fn given_unreachable_service_when_loading_then_error_is_recorded() {
    // Arrange
    let backend = MockBoardBackend::builder().with_fetch_failure().build();
    let mut board = CardBoard::new(backend);

    // Act
    board.load().await;

    // Assert - loading resolves even on failure; no retry happens
    assert!(!board.is_loading());
    assert!(board.error().is_some());
    assert!(board.cards().is_empty());
}

#[tokio::test]
async fn given_toggle_when_service_accepts_then_board_resorts_immediately() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(3, false))
        .with_card(card(2, false))
        .with_card(card(1, false))
        .build();
    let mut board = CardBoard::new(backend);
    board.load().await;

    // Act - pin the oldest card
    board.toggle(1, FlagField::Pinned).await.unwrap();

    // Assert
    let ids: Vec<i64> = board.cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
    assert!(board.view(1).unwrap().is_pinned);
}

#[tokio::test]
async fn given_toggle_when_sending_then_only_flipped_field_goes_over_the_wire() {
    // Arrange
    let backend = Arc::new(
        MockBoardBackend::builder()
            .with_card(card(1, false))
            .build(),
    );
    let mut board = CardBoard::new(backend.clone());
    board.load().await;

    // Act
    board.toggle(1, FlagField::Important).await.unwrap();

    // Assert
    assert_eq!(
        backend.recorded_updates(),
        vec![(1, FlagChanges::important(true))]
    );
}

#[tokio::test]
async fn given_failing_service_when_toggling_then_full_snapshot_is_restored() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(2, true))
        .with_card(card(1, false))
        .with_update_failure()
        .build();
    let mut board = CardBoard::new(backend);
    board.load().await;
    let before: Vec<Card> = board.cards().to_vec();

    // Act
    let result = board.toggle(1, FlagField::Pinned).await;

    // Assert - field-for-field equality with the pre-mutation state
    assert!(matches!(result, Err(BoardError::Network(_))));
    assert_eq!(board.cards(), before.as_slice());
}

#[tokio::test]
async fn given_delete_when_service_accepts_then_card_leaves_the_board() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(2, false))
        .with_card(card(1, false))
        .build();
    let mut board = CardBoard::new(backend);
    board.load().await;

    // Act
    board.delete(2).await.unwrap();

    // Assert
    assert_eq!(board.cards().len(), 1);
    assert!(board.view(2).is_none());
}

#[tokio::test]
async fn given_failing_service_when_deleting_then_card_comes_back() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(2, false))
        .with_card(card(1, false))
        .with_delete_failure()
        .build();
    let mut board = CardBoard::new(backend);
    board.load().await;
    let before: Vec<Card> = board.cards().to_vec();

    // Act
    let result = board.delete(2).await;

    // Assert
    assert!(matches!(result, Err(BoardError::Network(_))));
    assert_eq!(board.cards(), before.as_slice());
}

#[tokio::test]
async fn given_unknown_id_when_toggling_then_no_call_reaches_the_service() {
    // Arrange
    let backend = Arc::new(
        MockBoardBackend::builder()
            .with_card(card(1, false))
            .build(),
    );
    let mut board = CardBoard::new(backend.clone());
    board.load().await;

    // Act
    let result = board.toggle(99, FlagField::Pinned).await;

    // Assert
    assert!(matches!(result, Err(BoardError::UnknownCard(99))));
    assert!(backend.recorded_updates().is_empty());
}

#[tokio::test]
async fn given_loaded_board_when_viewing_then_state_is_not_mutated() {
    // Arrange
    let backend = MockBoardBackend::builder()
        .with_card(card(1, false))
        .build();
    let mut board = CardBoard::new(backend);
    board.load().await;
    let before: Vec<Card> = board.cards().to_vec();

    // Act
    let viewed = board.view(1).cloned();

    // Assert
    assert_eq!(viewed.unwrap().id, 1);
    assert_eq!(board.cards(), before.as_slice());
}
