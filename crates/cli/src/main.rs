//! Bookshelf CLI
//!
//! Drives the two client strategies from a terminal.
//!
//! # Commands
//!
//! - `local` - Shelf kept in JSON files under a directory
//! - `remote` - Shelf held by a running bookshelf server

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use bookshelf_kernel::settings::Settings;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shelf persisted to `incompleteBookshelf.json` / `completeBookshelf.json`
    Local {
        /// Directory holding the storage files
        #[arg(short, long, default_value = ".bookshelf")]
        dir: PathBuf,

        #[command(subcommand)]
        command: LocalCommand,
    },

    /// Shelf served by the `/api/books` routes
    Remote {
        /// Defaults to the configured server address
        #[arg(short, long)]
        base_url: Option<String>,

        #[command(subcommand)]
        command: RemoteCommand,
    },
}

#[derive(Args)]
pub struct BookArgs {
    #[arg(short, long)]
    pub title: String,

    #[arg(short, long, default_value = "")]
    pub author: String,

    #[arg(short, long, default_value_t = 0)]
    pub year: i32,
}

#[derive(Subcommand)]
pub enum LocalCommand {
    /// Print both lists
    List {
        /// Print element markup instead of text rows
        #[arg(long)]
        html: bool,
    },

    /// Add a book and print its id
    Add {
        #[command(flatten)]
        book: BookArgs,

        /// File the book as already read
        #[arg(short, long)]
        complete: bool,
    },

    /// Move a book to the other list
    Move { id: i64 },

    /// Delete a book
    Delete { id: i64 },

    /// Print only books whose title contains QUERY
    Search { query: String },
}

#[derive(Subcommand)]
pub enum RemoteCommand {
    /// Print both sections
    List,

    /// Add a book
    Add {
        #[command(flatten)]
        book: BookArgs,

        /// Mark the book as read
        #[arg(short, long)]
        read: bool,
    },

    /// Mark a book as read
    Read { id: String },

    /// Delete a book
    Delete { id: String },

    /// Query the title filter, then print the full shelf
    Search { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    match cli.command {
        Commands::Local { dir, command } => commands::local::run(&dir, command),
        Commands::Remote { base_url, command } => {
            let base_url = match base_url {
                Some(url) => url,
                None => {
                    let settings =
                        Settings::load().with_context(|| "failed to load bookshelf settings")?;
                    format!("http://{}/api/books", settings.server.bind_address())
                }
            };
            commands::remote::run(&base_url, command).await
        }
    }
}
