use anyhow::Result;

use crate::api::{ApiClient, RegisterRequest};
use crate::prompt::InputSource;
use crate::session::{Session, SessionStore};

/// Account tier used when the plan prompt is left empty.
const DEFAULT_PLAN: &str = "premium";

#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Account name to register
    #[arg(long)]
    pub username: Option<String>,

    /// Password; prompted without echo when omitted
    #[arg(long)]
    pub password: Option<String>,

    /// Account tier (premium/elite/premium_plus/founder)
    #[arg(long)]
    pub plan: Option<String>,
}

/// Create a new account, then adopt and persist the returned identity.
pub async fn run(
    session: &mut Session,
    store: &SessionStore,
    input: &dyn InputSource,
    args: Args,
) -> Result<()> {
    let request = gather(args, input)?;

    let client = ApiClient::new(session)?;
    let auth = client.register(&request).await?;

    session.apply_identity(&auth);
    store.save(session)?;

    println!("Registered. UID: {} | Plan: {}", auth.user_id, auth.plan);
    println!("Share URL: {}", auth.share_url);
    Ok(())
}

fn gather(args: Args, input: &dyn InputSource) -> Result<RegisterRequest> {
    let username = match args.username {
        Some(username) => username,
        None => input.read_line("Username")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => input.read_secret("Password")?,
    };
    let plan = match args.plan {
        Some(plan) => plan,
        None => {
            let entered = input.read_line("Plan (premium/elite/premium_plus/founder)")?;
            if entered.is_empty() {
                DEFAULT_PLAN.to_string()
            } else {
                entered
            }
        }
    };
    Ok(RegisterRequest {
        username,
        password,
        plan,
    })
}
