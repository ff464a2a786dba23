//! One module per user-facing operation.
//!
//! Every handler takes the current session, the store that persists it
//! (when the operation mutates the session), and an input source used to
//! prompt for values the command line did not supply. Handlers return
//! typed errors and never exit the process themselves; the dispatcher
//! decides whether an error aborts (scripted mode) or is printed and
//! recovered (interactive menu).

pub mod config;
pub mod login;
pub mod register;
pub mod run;
pub mod status;
pub mod stop;
pub mod whoami;
