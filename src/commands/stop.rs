use anyhow::Result;

use crate::api::ApiClient;
use crate::session::Session;

/// Ask the service to stop the running tunnel.
pub async fn run(session: &Session) -> Result<()> {
    session.require_token()?;

    let client = ApiClient::new(session)?;
    let stopped = client.stop_tunnel().await?;

    println!("Tunnel stopped. Total requests: {}", stopped.request_count);
    Ok(())
}
