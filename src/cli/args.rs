// src/cli/args.rs
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Card service URL used by client commands
    #[arg(
        short,
        long,
        value_name = "URL",
        global = true,
        default_value = "http://localhost:5000"
    )]
    pub server: String,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the card service (DATABASE_URL and PORT come from the environment)
    Serve,

    /// List active cards in board order
    List,

    /// Show full detail for one card
    View {
        /// Card ID to view
        #[arg(value_name = "CARD_ID")]
        card_id: i64,

        /// Output the card as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle the pinned flag on a card
    Pin {
        /// Card ID to toggle
        #[arg(value_name = "CARD_ID")]
        card_id: i64,
    },

    /// Toggle the important flag on a card
    Important {
        /// Card ID to toggle
        #[arg(value_name = "CARD_ID")]
        card_id: i64,
    },

    /// Soft-delete a card from the board
    Delete {
        /// Card ID to delete
        #[arg(value_name = "CARD_ID")]
        card_id: i64,
    },
}
