// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::env;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{BoardBackend, CardRepository};
use crate::domain::{BoardError, Card, DomainError, FlagChanges, NewCard};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// In-memory stand-in for the card store, shared by use-case tests.
///
/// Behaves like the real store: ids are assigned in insertion order,
/// soft-deleted cards stay addressable, and a configured failure makes
/// every call report `StoreUnavailable`.
///
/// # Examples
///
/// ```
/// use cardboard::util::testing::MockCardRepository;
/// use cardboard::domain::{Card, FaceColor};
///
/// let repo = MockCardRepository::builder()
///     .with_card(Card {
///         id: 1,
///         title: "Title".to_string(),
///         description: "Description".to_string(),
///         is_pinned: false,
///         is_important: false,
///         face_color: FaceColor::Purple,
///         is_deleted: false,
///     })
///     .build();
/// ```
pub struct MockCardRepository {
    cards: Vec<Card>,
    failure: Option<String>,
    next_id: i64,
}

impl MockCardRepository {
    pub fn builder() -> MockCardRepositoryBuilder {
        MockCardRepositoryBuilder::new()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::StoreUnavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl CardRepository for MockCardRepository {
    fn list_active(&mut self) -> Result<Vec<Card>, DomainError> {
        self.check_failure()?;
        Ok(self
            .cards
            .iter()
            .filter(|c| !c.is_deleted)
            .cloned()
            .collect())
    }

    fn update_flags(
        &mut self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, DomainError> {
        self.check_failure()?;
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(pinned) = changes.is_pinned {
            card.is_pinned = pinned;
        }
        if let Some(important) = changes.is_important {
            card.is_important = important;
        }
        Ok(Some(card.clone()))
    }

    fn soft_delete(&mut self, id: i64) -> Result<Option<Card>, DomainError> {
        self.check_failure()?;
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        card.is_deleted = true;
        Ok(Some(card.clone()))
    }

    fn count_cards(&mut self) -> Result<u64, DomainError> {
        self.check_failure()?;
        Ok(self.cards.len() as u64)
    }

    fn count_active(&mut self) -> Result<u64, DomainError> {
        self.check_failure()?;
        Ok(self.cards.iter().filter(|c| !c.is_deleted).count() as u64)
    }

    fn restore_deleted(&mut self) -> Result<u64, DomainError> {
        self.check_failure()?;
        let mut restored = 0;
        for card in self.cards.iter_mut().filter(|c| c.is_deleted) {
            card.is_deleted = false;
            restored += 1;
        }
        Ok(restored)
    }

    fn create_cards(&mut self, cards: &[NewCard]) -> Result<(), DomainError> {
        self.check_failure()?;
        for new_card in cards {
            let id = self.next_id;
            self.next_id += 1;
            self.cards.push(Card {
                id,
                title: new_card.title.clone(),
                description: new_card.description.clone(),
                is_pinned: false,
                is_important: false,
                face_color: new_card.face_color,
                is_deleted: false,
            });
        }
        Ok(())
    }
}

/// Builder for MockCardRepository
pub struct MockCardRepositoryBuilder {
    cards: Vec<Card>,
    failure: Option<String>,
}

impl MockCardRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            failure: None,
        }
    }

    /// Add a pre-existing card
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Make every repository call fail with `StoreUnavailable`
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn build(self) -> MockCardRepository {
        let next_id = self.cards.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        MockCardRepository {
            cards: self.cards,
            failure: self.failure,
            next_id,
        }
    }
}

impl Default for MockCardRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scripted backend for CardBoard tests: serves a fixed card list and
/// can be told to fail any of the three calls. Updates are recorded so
/// tests can assert exactly which fields went over the wire.
pub struct MockBoardBackend {
    cards: Vec<Card>,
    fail_fetch: bool,
    fail_update: bool,
    fail_delete: bool,
    updates: Mutex<Vec<(i64, FlagChanges)>>,
}

impl MockBoardBackend {
    pub fn builder() -> MockBoardBackendBuilder {
        MockBoardBackendBuilder::new()
    }

    /// Every (id, changes) pair passed to `update_flags`, in order
    pub fn recorded_updates(&self) -> Vec<(i64, FlagChanges)> {
        self.updates.lock().expect("updates lock poisoned").clone()
    }
}

#[async_trait]
impl BoardBackend for MockBoardBackend {
    async fn fetch_cards(&self) -> Result<Vec<Card>, BoardError> {
        if self.fail_fetch {
            return Err(BoardError::Network("simulated fetch failure".to_string()));
        }
        Ok(self.cards.clone())
    }

    async fn update_flags(
        &self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, BoardError> {
        if self.fail_update {
            return Err(BoardError::Network("simulated update failure".to_string()));
        }
        self.updates
            .lock()
            .expect("updates lock poisoned")
            .push((id, changes));
        let Some(card) = self.cards.iter().find(|c| c.id == id) else {
            return Ok(None);
        };
        let mut updated = card.clone();
        if let Some(pinned) = changes.is_pinned {
            updated.is_pinned = pinned;
        }
        if let Some(important) = changes.is_important {
            updated.is_important = important;
        }
        Ok(Some(updated))
    }

    async fn delete_card(&self, _id: i64) -> Result<(), BoardError> {
        if self.fail_delete {
            return Err(BoardError::Network("simulated delete failure".to_string()));
        }
        Ok(())
    }
}

/// Builder for MockBoardBackend
pub struct MockBoardBackendBuilder {
    cards: Vec<Card>,
    fail_fetch: bool,
    fail_update: bool,
    fail_delete: bool,
}

impl MockBoardBackendBuilder {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            fail_fetch: false,
            fail_update: false,
            fail_delete: false,
        }
    }

    /// Add a card served by fetch_cards
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    pub fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn with_update_failure(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn with_delete_failure(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn build(self) -> MockBoardBackend {
        MockBoardBackend {
            cards: self.cards,
            fail_fetch: self.fail_fetch,
            fail_update: self.fail_update,
            fail_delete: self.fail_delete,
            updates: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MockBoardBackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "tower"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
