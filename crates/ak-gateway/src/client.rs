use crate::error::GENERIC_ERROR_MESSAGE;
use crate::{GatewayError, Result as GatewayResult};

use std::sync::Arc;
use std::time::Duration;

use ak_core::{AuthResponse, Credentials, ProfileUpdate};
use ak_store::TokenStore;
use log::warn;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;

/// Default request timeout against the auth service
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Handler invoked once per 401 before the error is returned
type UnauthorizedHandler = Box<dyn Fn() + Send + Sync>;

/// HTTP client for the auth service
///
/// The bearer token is read from the store on every request, so a login
/// or logout between calls is picked up without rebuilding the client.
/// On a 401 the configured handler runs (or, without one, the persisted
/// token is cleared directly) and the call fails with
/// [`GatewayError::Unauthorized`].
pub struct AuthClient {
    base_url: String,
    client: ReqwestClient,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl AuthClient {
    /// Create a client with the default timeout
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://localhost:3001")
    /// * `tokens` - Store consulted for the bearer token on every request
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_timeout(base_url, tokens, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: &str, tokens: Arc<dyn TokenStore>, timeout: Duration) -> Self {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            tokens,
            on_unauthorized: None,
        }
    }

    /// Install the forced-logout hook fired on any 401 response
    pub fn with_unauthorized_handler(
        mut self,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_unauthorized = Some(Box::new(handler));
        self
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Create an account
    ///
    /// `POST /auth/signup`. The response may carry a token when the
    /// service signs the account in immediately.
    pub async fn signup(&self, credentials: &Credentials) -> GatewayResult<AuthResponse> {
        let req = self.request(Method::POST, "/auth/signup").json(credentials);
        self.execute(req).await
    }

    /// Exchange credentials for a bearer token
    ///
    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Credentials) -> GatewayResult<AuthResponse> {
        let req = self.request(Method::POST, "/auth/login").json(credentials);
        self.execute(req).await
    }

    /// End the server-side session
    ///
    /// `POST /auth/logout`
    pub async fn logout(&self) -> GatewayResult<AuthResponse> {
        let req = self.request(Method::POST, "/auth/logout");
        self.execute(req).await
    }

    /// Change account email and/or password
    ///
    /// `PATCH /auth/update/{id}`
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> GatewayResult<AuthResponse> {
        let req = self
            .request(Method::PATCH, &format!("/auth/update/{user_id}"))
            .json(update);
        self.execute(req).await
    }

    /// Build a request with the bearer token attached when one exists
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        match self.tokens.get() {
            Ok(Some(token)) => {
                req = req.header("Authorization", format!("Bearer {token}"));
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Could not read persisted token: {e}");
            }
        }

        req
    }

    /// Execute a request and decode the service response
    async fn execute(&self, req: reqwest::RequestBuilder) -> GatewayResult<AuthResponse> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(GatewayError::unauthorized());
        }

        if !status.is_success() {
            // The service reports failures as { "message": "..." }; fall
            // back to a generic line when the body is not readable
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

            return Err(GatewayError::api(status.as_u16(), message));
        }

        let body: AuthResponse = response.json().await?;
        Ok(body)
    }

    /// Force the local session closed after the service rejected the
    /// token
    fn handle_unauthorized(&self) {
        warn!("Auth service returned 401; forcing local sign-out");

        match &self.on_unauthorized {
            Some(handler) => handler(),
            None => {
                if let Err(e) = self.tokens.remove() {
                    warn!("Could not clear persisted token: {e}");
                }
            }
        }
    }
}
