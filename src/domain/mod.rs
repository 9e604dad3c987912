// src/domain/mod.rs
pub mod card;
pub mod error;

pub use card::{sort_for_board, Card, FaceColor, FlagChanges, NewCard};
pub use error::{BoardError, DomainError};
