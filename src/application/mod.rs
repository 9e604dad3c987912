// src/application/mod.rs
pub mod board;
pub mod card_deleter;
pub mod card_lister;
pub mod flag_updater;
pub mod seeder;

pub use board::{BoardBackend, CardBoard, FlagField};
pub use card_deleter::CardDeleter;
pub use card_lister::{CardLister, CardRepository};
pub use flag_updater::FlagUpdater;
pub use seeder::{initial_seed, replacement_seed, Seeder};
