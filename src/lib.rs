// src/lib.rs
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{CardBoard, FlagField, Seeder};
use domain::{BoardError, Card};
use infrastructure::{build_router, AppState, HttpBoardBackend, ServerConfig, SqliteCardRepository};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting cardboard with arguments");

    match args.command {
        Command::Serve => serve().await,
        Command::List => {
            let board = load_board(&args.server).await?;
            print_cards(board.cards());
            Ok(())
        }
        Command::View { card_id, json } => {
            let board = load_board(&args.server).await?;
            let card = board
                .view(card_id)
                .ok_or(BoardError::UnknownCard(card_id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(card)?);
            } else {
                print_card_detail(card);
            }
            Ok(())
        }
        Command::Pin { card_id } => {
            let mut board = load_board(&args.server).await?;
            board.toggle(card_id, FlagField::Pinned).await?;
            let pinned = board.view(card_id).map(|c| c.is_pinned).unwrap_or(false);
            println!(
                "Card {card_id} is now {}",
                if pinned { "pinned" } else { "unpinned" }
            );
            Ok(())
        }
        Command::Important { card_id } => {
            let mut board = load_board(&args.server).await?;
            board.toggle(card_id, FlagField::Important).await?;
            let important = board.view(card_id).map(|c| c.is_important).unwrap_or(false);
            println!(
                "Card {card_id} is now {}",
                if important { "important" } else { "not important" }
            );
            Ok(())
        }
        Command::Delete { card_id } => {
            let mut board = load_board(&args.server).await?;
            board.delete(card_id).await?;
            println!("Card {card_id} deleted");
            Ok(())
        }
    }
}

async fn serve() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // One store connection for the process lifetime
    let mut store = SqliteCardRepository::new(&config.database_url)?;
    Seeder::new(&mut store).seed_if_empty()?;

    let state = AppState::new(store);
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Card service listening");

    axum::serve(listener, router)
        .await
        .context("Card service terminated")?;
    Ok(())
}

/// Build a client-side board against the given service and populate it.
/// A failed initial load is fatal for one-shot CLI commands.
async fn load_board(server: &str) -> Result<CardBoard<HttpBoardBackend>> {
    let backend = HttpBoardBackend::new(server);
    let mut board = CardBoard::new(backend);
    board.load().await;
    if let Some(message) = board.error() {
        bail!("Failed to load the board from {server}: {message}");
    }
    Ok(board)
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        let pin = if card.is_pinned { "*" } else { " " };
        let important = if card.is_important { "!" } else { " " };
        println!(
            "{:>6} {pin}{important} {} [{}]",
            card.id, card.title, card.face_color
        );
    }
}

fn print_card_detail(card: &Card) {
    println!("Card {}", card.id);
    println!("  Title:       {}", card.title);
    println!("  Description: {}", card.description);
    println!("  Face color:  {}", card.face_color);
    println!("  Pinned:      {}", card.is_pinned);
    println!("  Important:   {}", card.is_important);
}
