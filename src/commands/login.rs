use anyhow::Result;

use crate::api::{ApiClient, LoginRequest};
use crate::prompt::InputSource;
use crate::session::{Session, SessionStore};

#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Account name
    #[arg(long)]
    pub username: Option<String>,

    /// Password; prompted without echo when omitted
    #[arg(long)]
    pub password: Option<String>,
}

/// Authenticate against an existing account, then adopt and persist the
/// returned identity.
pub async fn run(
    session: &mut Session,
    store: &SessionStore,
    input: &dyn InputSource,
    args: Args,
) -> Result<()> {
    let request = gather(args, input)?;

    let client = ApiClient::new(session)?;
    let auth = client.login(&request).await?;

    session.apply_identity(&auth);
    store.save(session)?;

    println!("Logged in. UID: {}", auth.user_id);
    println!("Share URL: {}", auth.share_url);
    Ok(())
}

fn gather(args: Args, input: &dyn InputSource) -> Result<LoginRequest> {
    let username = match args.username {
        Some(username) => username,
        None => input.read_line("Username")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => input.read_secret("Password")?,
    };
    Ok(LoginRequest { username, password })
}
