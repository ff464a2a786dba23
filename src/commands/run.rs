use anyhow::Result;

use crate::api::{ApiClient, ClientError};
use crate::prompt::InputSource;
use crate::session::Session;

#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Local port to expose through the tunnel
    pub port: Option<u16>,
}

/// Ask the service to start forwarding a local port.
///
/// The share URL is printed from the response but not persisted; the
/// session keeps the one reported at register/login.
pub async fn run(session: &Session, input: &dyn InputSource, args: Args) -> Result<()> {
    session.require_token()?;

    let port = match args.port {
        Some(port) => port,
        None => parse_port(&input.read_line("Port to tunnel")?)?,
    };

    let client = ApiClient::new(session)?;
    let started = client.start_tunnel(port).await?;

    println!("Tunnel {} | Port: {}", started.status, started.port);
    println!("Share URL: {}", started.share_url);
    Ok(())
}

fn parse_port(raw: &str) -> Result<u16, ClientError> {
    raw.parse()
        .map_err(|_| ClientError::Input(format!("port must be a number, got {raw:?}")))
}
