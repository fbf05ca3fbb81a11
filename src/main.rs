//! rolo - Main entry point
//!
//! Runs the interactive contact assistant: load the snapshot, greet, process
//! commands line by line, and persist the book again on exit.

use anyhow::Result;
use rolo::commands::handlers;
use rolo::{dispatch, BookStore, Config, JsonFileStore, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for the prompt loop)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::new(&config.book_path);
    let mut book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load the address book: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Assistant started with {} contact(s) from {}",
        book.len(),
        config.book_path.display()
    );

    println!("Welcome to the contact assistant!");
    println!("{}", handlers::instructions());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Please enter a command: ");
        stdout.flush()?;

        line.clear();
        // EOF behaves like 'exit': persist and say goodbye
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match dispatch(&line, &mut book, config.birthday_window_days) {
            Outcome::Reply(reply) => println!("{}", reply),
            Outcome::Exit => break,
        }
    }

    store.save(&book)?;
    info!("Saved {} contact(s)", book.len());
    println!("Good bye!");
    Ok(())
}
