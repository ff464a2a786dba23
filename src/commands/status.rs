use anyhow::Result;

use crate::api::ApiClient;
use crate::session::Session;

/// Fetch and print the current tunnel status.
pub async fn run(session: &Session) -> Result<()> {
    session.require_token()?;

    let client = ApiClient::new(session)?;
    let report = client.tunnel_status().await?;

    let port = report
        .port
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("Status: {} | Port: {}", report.status, port);
    println!(
        "Requests: {} | Plan: {}",
        report.request_count,
        report.plan.as_deref().unwrap_or("-")
    );
    if let Some(ref last_error) = report.last_error {
        println!("Last error: {last_error}");
    }
    if let Some(ref share_url) = report.share_url {
        println!("Share URL: {share_url}");
    }
    Ok(())
}
