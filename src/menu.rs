//! Interactive dispatcher.
//!
//! A numbered menu over the same operations the scripted command line
//! exposes. Handler errors are printed and the menu redisplays; only the
//! exit selection (or a failing input source, e.g. closed stdin) leaves
//! the loop.

use anyhow::Result;

use crate::commands;
use crate::prompt::InputSource;
use crate::session::{Session, SessionStore};

/// Menu entries in display order. `0` exits.
const MENU: &[(&str, &str)] = &[
    ("1", "Register"),
    ("2", "Log in"),
    ("3", "Start tunnel"),
    ("4", "Stop tunnel"),
    ("5", "Tunnel status"),
    ("6", "Show session"),
    ("7", "Configure server"),
    ("0", "Exit"),
];

pub async fn run(
    session: &mut Session,
    store: &SessionStore,
    input: &dyn InputSource,
) -> Result<()> {
    loop {
        println!();
        println!("Porthole menu");
        for (key, label) in MENU {
            println!(" {key}) {label}");
        }

        let choice = input.read_line("Selection")?;
        let outcome = match choice.as_str() {
            "1" => commands::register::run(session, store, input, Default::default()).await,
            "2" => commands::login::run(session, store, input, Default::default()).await,
            "3" => commands::run::run(session, input, Default::default()).await,
            "4" => commands::stop::run(session).await,
            "5" => commands::status::run(session).await,
            "6" => {
                commands::whoami::run(session);
                Ok(())
            }
            "7" => configure_server(session, store, input),
            "0" => return Ok(()),
            _ => {
                println!("Invalid selection.");
                continue;
            }
        };

        if let Err(err) = outcome {
            eprintln!("Error: {err}");
        }
    }
}

/// Scripted `config` takes `--server` as an optional flag; here an empty
/// entry means "just show the current endpoint".
fn configure_server(
    session: &mut Session,
    store: &SessionStore,
    input: &dyn InputSource,
) -> Result<()> {
    let entered = input.read_line("Server URL (empty shows current)")?;
    let args = commands::config::Args {
        server: (!entered.is_empty()).then_some(entered),
    };
    commands::config::run(session, store, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::prompt::testing::QueuedInput;

    fn store_in(dir: &std::path::Path) -> SessionStore {
        SessionStore::new(&Config {
            session_path: dir.join("session.json"),
            default_server: "http://127.0.0.1:8000".to_string(),
        })
    }

    #[tokio::test]
    async fn exit_selection_terminates_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut session = store.load();
        let input = QueuedInput::new(&["0"]);

        assert!(run(&mut session, &store, &input).await.is_ok());
    }

    #[tokio::test]
    async fn handler_errors_are_recovered() {
        // "Start tunnel" without a token fails; the menu prints the error
        // and keeps going until the exit selection.
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut session = store.load();
        let input = QueuedInput::new(&["3", "0"]);

        assert!(run(&mut session, &store, &input).await.is_ok());
        assert!(session.token.is_none());
    }

    #[tokio::test]
    async fn unrecognized_selections_redisplay_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut session = store.load();
        let input = QueuedInput::new(&["9", "x", "0"]);

        assert!(run(&mut session, &store, &input).await.is_ok());
    }

    #[tokio::test]
    async fn configure_server_entry_updates_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut session = store.load();
        let input = QueuedInput::new(&["7", "http://example.com/", "0"]);

        assert!(run(&mut session, &store, &input).await.is_ok());
        assert_eq!(session.base_url, "http://example.com");
        assert_eq!(store.load().base_url, "http://example.com");
    }

    #[tokio::test]
    async fn exhausted_input_propagates_out_of_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let mut session = store.load();
        let input = QueuedInput::new(&[]);

        assert!(run(&mut session, &store, &input).await.is_err());
    }
}
