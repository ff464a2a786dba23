use crate::session::Session;

/// Print the persisted identity. Purely local; never touches the network.
pub fn run(session: &Session) {
    let Some(ref user_id) = session.user_id else {
        println!("No saved session.");
        return;
    };

    println!(
        "User: {} | UID: {} | Plan: {}",
        session.username.as_deref().unwrap_or("-"),
        user_id,
        session.plan.as_deref().unwrap_or("-")
    );
    if let Some(ref share_url) = session.share_url {
        println!("Share URL: {share_url}");
    }
    println!("Server: {}", session.base_url);
}
