use anyhow::Result;

use crate::session::{Session, SessionStore};

#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Service endpoint, e.g. http://127.0.0.1:8000
    #[arg(long)]
    pub server: Option<String>,
}

/// Show or change the service endpoint. Purely local.
pub fn run(session: &mut Session, store: &SessionStore, args: Args) -> Result<()> {
    let server = args
        .server
        .map(|s| s.trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty());

    match server {
        Some(server) => {
            session.base_url = server;
            store.save(session)?;
            println!("Server address saved: {}", session.base_url);
        }
        None => println!("Current server: {}", session.base_url),
    }
    Ok(())
}
