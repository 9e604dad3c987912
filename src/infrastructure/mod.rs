// src/infrastructure/mod.rs
pub mod client;
pub mod config;
pub mod server;
pub mod sqlite;

pub use client::HttpBoardBackend;
pub use config::ServerConfig;
pub use server::{build_router, AppState};
pub use sqlite::SqliteCardRepository;
