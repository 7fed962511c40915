//! studentdb Interactive Console
//!
//! Menu-driven student management over a local storage file.

use std::io;

use clap::Parser;
use studentdb::console::Console;
use studentdb::{Config, FlushFailurePolicy, RecordStore, StudentDbError};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb console
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(about = "Interactive student record management")]
#[command(version)]
struct Args {
    /// Storage file
    #[arg(short, long, default_value = "./studentdb_data/students.db")]
    data_file: String,

    /// Keep changes in memory when saving them to disk fails
    #[arg(long)]
    keep_on_flush_failure: bool,

    /// Skip fsync before replacing the storage file
    #[arg(long)]
    no_sync: bool,
}

fn main() {
    // Logs go to stderr and stay quiet by default so the menu is readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("studentdb v{}", studentdb::VERSION);
    tracing::info!("Storage file: {}", args.data_file);

    let policy = if args.keep_on_flush_failure {
        FlushFailurePolicy::KeepInMemory
    } else {
        FlushFailurePolicy::Rollback
    };

    let config = Config::builder()
        .data_file(&args.data_file)
        .flush_failure_policy(policy)
        .sync_on_flush(!args.no_sync)
        .build();

    // A corrupt storage file is fatal at startup
    let store = match RecordStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open student store: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(&store, stdin.lock(), io::stdout());

    match console.run() {
        Ok(()) => {}
        // stdin closed (Ctrl+D): treat like choosing Exit
        Err(StudentDbError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
        }
        Err(e) => {
            tracing::error!("Console session ended: {}", e);
            std::process::exit(1);
        }
    }
}
