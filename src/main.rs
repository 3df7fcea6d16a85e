use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rusqlite::Connection;

use vidcat::config::{AppPaths, Settings};
use vidcat::menu::{self, MenuOptions};
use vidcat::storage::sqlite::SqliteStore;

#[derive(Parser)]
#[command(name = "vidcat", version, about = "A menu-driven video catalog manager")]
struct Cli {
    /// Path to the catalog database (default: ~/.vidcat/vidcat.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> vidcat::errors::Result<()> {
    let paths = AppPaths::new();
    let settings = Settings::load(&paths.config_path)?;

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            std::fs::create_dir_all(&paths.base_dir)?;
            paths.db_path
        }
    };
    let conn = Connection::open(&db_path)?;
    let store = SqliteStore::new(conn)?;

    let mut opts = MenuOptions::from(&settings);
    // Escape sequences are pointless when output is piped.
    opts.clear_screen = opts.clear_screen && io::stdout().is_terminal();

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&store, stdin.lock(), stdout.lock(), opts)
    // The connection closes when the store drops, on success and on error.
}
