// src/application/board.rs
use crate::domain::{sort_for_board, BoardError, Card, FlagChanges};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Network seam between the client-side cache and the card service.
#[async_trait]
pub trait BoardBackend: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<Card>, BoardError>;

    async fn update_flags(
        &self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, BoardError>;

    async fn delete_card(&self, id: i64) -> Result<(), BoardError>;
}

#[async_trait]
impl<B: BoardBackend + ?Sized> BoardBackend for Arc<B> {
    async fn fetch_cards(&self) -> Result<Vec<Card>, BoardError> {
        (**self).fetch_cards().await
    }

    async fn update_flags(
        &self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, BoardError> {
        (**self).update_flags(id, changes).await
    }

    async fn delete_card(&self, id: i64) -> Result<(), BoardError> {
        (**self).delete_card(id).await
    }
}

/// Which toggle intent the interaction layer issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    Pinned,
    Important,
}

/// Client-side mirror of the card list.
///
/// Mutations are optimistic: the local list changes and re-sorts
/// immediately, then the backend call is awaited. If the call fails the
/// entire pre-mutation snapshot is restored; patching back a single
/// field could compound inconsistency when mutations raced.
pub struct CardBoard<B: BoardBackend> {
    backend: B,
    cards: Vec<Card>,
    loading: bool,
    error: Option<String>,
}

impl<B: BoardBackend> CardBoard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cards: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True until the first load attempt resolves, success or failure.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace local state with the service's card list. On failure the
    /// error is recorded and no retry is attempted.
    pub async fn load(&mut self) {
        match self.backend.fetch_cards().await {
            Ok(cards) => {
                debug!(count = cards.len(), "Loaded cards from service");
                self.cards = cards;
                self.error = None;
            }
            Err(err) => {
                warn!(%err, "Failed to load cards");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    /// Flip a flag on a card, optimistically.
    ///
    /// The card is resolved by id against current local state, never
    /// against a snapshot the caller may hold. Only the flipped field
    /// is sent to the service.
    pub async fn toggle(&mut self, card_id: i64, field: FlagField) -> Result<(), BoardError> {
        let snapshot = self.cards.clone();
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(BoardError::UnknownCard(card_id))?;

        let changes = match field {
            FlagField::Pinned => {
                card.is_pinned = !card.is_pinned;
                FlagChanges::pin(card.is_pinned)
            }
            FlagField::Important => {
                card.is_important = !card.is_important;
                FlagChanges::important(card.is_important)
            }
        };
        sort_for_board(&mut self.cards);

        match self.backend.update_flags(card_id, changes).await {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(card_id, %err, "Toggle failed, rolling back");
                self.cards = snapshot;
                Err(err)
            }
        }
    }

    /// Remove a card from the board, optimistically.
    pub async fn delete(&mut self, card_id: i64) -> Result<(), BoardError> {
        let snapshot = self.cards.clone();
        if !self.cards.iter().any(|c| c.id == card_id) {
            return Err(BoardError::UnknownCard(card_id));
        }
        self.cards.retain(|c| c.id != card_id);

        match self.backend.delete_card(card_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(card_id, %err, "Delete failed, rolling back");
                self.cards = snapshot;
                Err(err)
            }
        }
    }

    /// Full detail for one card; no mutation.
    pub fn view(&self, card_id: i64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}
