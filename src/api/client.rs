//! HTTP client for the tunneling service protocol.
//!
//! Every command issues at most one request, so the client carries no retry
//! or backoff machinery: a network failure or an error status aborts the
//! command, classified through [`ClientError`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::error::ClientError;
use crate::session::Session;

/// Fixed request timeout. A slow service surfaces as a transport failure,
/// never a hang.
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Typed client for the service endpoints, built from the current session.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub plan: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct StartTunnelRequest {
    port: u16,
}

/// Identity returned by both `/register` and `/login`. Every field is
/// required; a response missing any of them is a protocol violation.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub share_url: String,
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub struct TunnelStarted {
    pub status: String,
    pub port: u16,
    pub share_url: String,
}

#[derive(Debug, Deserialize)]
pub struct TunnelStopped {
    pub request_count: u64,
}

/// `/tunnel/status` report. `port`, `plan`, `last_error` and `share_url`
/// are genuinely optional: the service omits them for tunnels that never
/// started or never failed.
#[derive(Debug, Deserialize)]
pub struct TunnelStatus {
    pub status: String,
    pub request_count: u64,
    pub port: Option<u16>,
    pub plan: Option<String>,
    pub last_error: Option<String>,
    pub share_url: Option<String>,
}

impl ApiClient {
    /// Build a client for the session's endpoint, attaching its bearer
    /// token (when present) to every request.
    pub fn new(session: &Session) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: session.base_url.clone(),
            token: session.token.clone(),
        })
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.post("/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.post("/login", request).await
    }

    pub async fn start_tunnel(&self, port: u16) -> Result<TunnelStarted, ClientError> {
        self.post("/tunnel/start", &StartTunnelRequest { port }).await
    }

    pub async fn stop_tunnel(&self) -> Result<TunnelStopped, ClientError> {
        self.post_empty("/tunnel/stop").await
    }

    pub async fn tunnel_status(&self) -> Result<TunnelStatus, ClientError> {
        self.get("/tunnel/status").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(path, self.http.get(join_url(&self.base_url, path)))
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(path, self.http.post(join_url(&self.base_url, path)).json(body))
            .await
    }

    /// POST with no request body (`/tunnel/stop` takes none).
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(path, self.http.post(join_url(&self.base_url, path)))
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        mut request: RequestBuilder,
    ) -> Result<T, ClientError> {
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, path, "service response");

        if status.as_u16() >= 400 {
            return Err(ClientError::from_response(status, &body));
        }

        serde_json::from_str(&body).map_err(|err| {
            ClientError::InvalidResponse(format!("{} from {}", err, path))
        })
    }
}

/// Join the configured endpoint and a request path, normalizing away any
/// trailing slashes on the endpoint.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
