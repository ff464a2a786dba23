//! Porthole - command-line client for a remote port-tunneling service.
//!
//! Register or log in, ask the service to forward a local port to a public
//! share URL, and query tunnel status. With a subcommand the process runs
//! exactly one operation and exits; with none it drops into an interactive
//! menu over the same operations.

mod api;
mod commands;
mod config;
mod menu;
mod prompt;
mod session;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use prompt::TerminalInput;
use session::SessionStore;

#[derive(Parser)]
#[command(name = "porthole", version, about = "Client for the Porthole port-tunneling service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account and log in
    Register(commands::register::Args),
    /// Log in to an existing account
    Login(commands::login::Args),
    /// Start tunneling a local port
    Run(commands::run::Args),
    /// Stop the running tunnel
    Stop,
    /// Show tunnel status
    Status,
    /// Show the saved session
    Whoami,
    /// Show or change the service endpoint
    Config(commands::config::Args),
}

/// Initialize the tracing subscriber for logging.
/// Use the RUST_LOG env var to control the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    debug!(session_path = %config.session_path.display(), "starting");

    let store = SessionStore::new(&config);
    let mut session = store.load();
    let input = TerminalInput;

    match cli.command {
        None => menu::run(&mut session, &store, &input).await,
        Some(Command::Register(args)) => {
            commands::register::run(&mut session, &store, &input, args).await
        }
        Some(Command::Login(args)) => commands::login::run(&mut session, &store, &input, args).await,
        Some(Command::Run(args)) => commands::run::run(&session, &input, args).await,
        Some(Command::Stop) => commands::stop::run(&session).await,
        Some(Command::Status) => commands::status::run(&session).await,
        Some(Command::Whoami) => {
            commands::whoami::run(&session);
            Ok(())
        }
        Some(Command::Config(args)) => commands::config::run(&mut session, &store, args),
    }
}
