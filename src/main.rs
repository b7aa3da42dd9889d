//! Contact Book - Main entry point
//!
//! Runs the interactive command loop: load the book, answer commands read
//! from stdin, save on `close`/`exit`.

use anyhow::{Context, Result};
use contact_book::storage::BookStore;
use contact_book::{CommandDispatcher, Config, JsonFileStore};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout is the conversation with the user
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Starting contact book");

    let store = JsonFileStore::new(config.book_path.clone());
    let book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e).context("refusing to start over an unreadable address book");
        }
    };

    let mut dispatcher = CommandDispatcher::new(book, store)
        .with_autosave(config.autosave)
        .with_birthday_window(config.birthday_window_days);

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // EOF behaves like `close`
            println!();
            dispatcher.save()?;
            println!("Good bye!");
            break;
        };

        let today = chrono::Local::now().date_naive();
        let reply = dispatcher.handle_line(&line?, today);
        println!("{}", reply.message);

        if reply.exit {
            break;
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
