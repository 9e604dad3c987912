// src/domain/error.rs
use thiserror::Error;

/// Service-side failures. Everything the store can do wrong collapses
/// into `StoreUnavailable`; callers see a 500 with the message.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Unknown face color: {0}")]
    UnknownFaceColor(String),
}

/// Client-side failures surfaced to the interaction layer.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Network failure: {0}")]
    Network(String),
    #[error("No card with id {0} on the board")]
    UnknownCard(i64),
}
