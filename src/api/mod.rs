//! JSON/HTTP protocol client for the tunneling service.
//!
//! The service authenticates with a bearer token obtained from `/register`
//! or `/login`; tunnel management happens through `/tunnel/start`,
//! `/tunnel/stop` and `/tunnel/status`.

pub mod client;
pub mod error;

pub use client::{
    ApiClient, AuthResponse, LoginRequest, RegisterRequest, TunnelStarted, TunnelStatus,
    TunnelStopped,
};
pub use error::ClientError;
