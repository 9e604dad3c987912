// src/application/seeder.rs
use crate::application::CardRepository;
use crate::domain::{DomainError, FaceColor, NewCard};
use tracing::info;

/// The five cards inserted into a brand-new store. The second
/// "User Friendly" entry is deliberate and must not be deduplicated.
pub fn initial_seed() -> Vec<NewCard> {
    let mut cards = replacement_seed();
    cards.push(NewCard::new(
        "User Friendly",
        "Built with the user in mind, making complex tasks simple and intuitive.",
        FaceColor::Yellow,
    ));
    cards
}

/// The four distinct cards inserted when a non-empty store ends up with
/// zero active cards after restoration.
pub fn replacement_seed() -> Vec<NewCard> {
    vec![
        NewCard::new(
            "Modern Design",
            "Experience the sleek and intuitive interface of our latest product.",
            FaceColor::Purple,
        ),
        NewCard::new(
            "Powerful Performance",
            "Under the hood, we use cutting-edge technology to ensure speed.",
            FaceColor::Black,
        ),
        NewCard::new(
            "Secure & Reliable",
            "Your data is protected with industry-leading security standards.",
            FaceColor::Orange,
        ),
        NewCard::new(
            "User Friendly",
            "Built with the user in mind, making complex tasks simple and intuitive.",
            FaceColor::Yellow,
        ),
    ]
}

pub struct Seeder<R: CardRepository> {
    repository: R,
}

impl<R: CardRepository> Seeder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Startup routine.
    ///
    /// An empty store receives the initial seed set. A non-empty store
    /// has every soft-deleted card restored (deletion does not survive
    /// a restart); if no active card remains even then, the replacement
    /// seed set is inserted.
    pub fn seed_if_empty(&mut self) -> Result<(), DomainError> {
        if self.repository.count_cards()? == 0 {
            self.repository.create_cards(&initial_seed())?;
            info!("Seed data added");
            return Ok(());
        }

        let restored = self.repository.restore_deleted()?;
        info!(restored, "Restored soft-deleted cards");

        let active = self.repository.count_active()?;
        info!(active, "Active cards after restoration");
        if active == 0 {
            self.repository.create_cards(&replacement_seed())?;
            info!("Created replacement seed data, no active cards found");
        }
        Ok(())
    }
}
