//! # Session: token lifecycle and authenticated requests
//!
//! [`Session`] is the only place credentials are read, written, or attached to an
//! outgoing request. Tokens persist through a [`KeyValueStore`] so the web build
//! survives page reloads, and a process-local copy keeps request building
//! synchronous.
//!
//! ## Stored state
//!
//! | Key | Contents |
//! |-----|----------|
//! | `"access_token"` | short-lived JWT attached as `Authorization: Bearer ...` |
//! | `"refresh_token"` | long-lived JWT for minting new access tokens |
//! | `"user_data"` | JSON-serialised [`UserInfo`] |
//!
//! ## The 401 path
//!
//! [`Session::send`] performs at most one refresh per request:
//!
//! 1. Send with the current access token attached.
//! 2. On a 401, post the refresh token to `auth/refresh/`.
//! 3. On refresh success, store the new access token and retry the original
//!    request once.
//! 4. On refresh failure, a missing refresh token, or a second 401, tear the
//!    session down and surface [`ApiError::Unauthorized`].
//!
//! A refresh failure never triggers another refresh, so the flow cannot loop.

use std::sync::{Arc, Mutex};

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use store::kv::KeyValueStore;
use store::UserInfo;

use crate::config::ApiConfig;
use crate::error::ApiError;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_DATA_KEY: &str = "user_data";

#[derive(Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

#[derive(Deserialize)]
struct AccessOnly {
    access: String,
}

#[derive(Default)]
struct SessionCell {
    access: Option<String>,
    refresh: Option<String>,
    user: Option<UserInfo>,
}

/// Authenticated HTTP client for the backend, generic over where tokens persist.
#[derive(Clone)]
pub struct Session<S: KeyValueStore> {
    config: ApiConfig,
    client: Client,
    store: S,
    cell: Arc<Mutex<SessionCell>>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(config: ApiConfig, store: S) -> Self {
        Self {
            config,
            client: Client::new(),
            store,
            cell: Arc::new(Mutex::new(SessionCell::default())),
        }
    }

    /// Load a persisted session from the store. Returns the signed-in user when
    /// both an access token and a user record are present.
    pub async fn restore(&self) -> Option<UserInfo> {
        let access = self.store.get(ACCESS_TOKEN_KEY).await;
        let refresh = self.store.get(REFRESH_TOKEN_KEY).await;
        let user = match self.store.get(USER_DATA_KEY).await {
            Some(raw) => serde_json::from_str::<UserInfo>(&raw).ok(),
            None => None,
        };

        // A user record without an access token is stale
        let user = match (&access, user) {
            (Some(_), Some(user)) => Some(user),
            _ => None,
        };

        let mut cell = self.cell.lock().unwrap();
        cell.access = access;
        cell.refresh = refresh;
        cell.user = user.clone();
        user
    }

    /// Exchange credentials for a token pair. Returns `false` on any failure and
    /// leaves prior session state untouched.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let url = format!("{}/auth/login/", self.config.base_url());
        let body = serde_json::json!({ "username": email, "password": password });

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("login request failed: {err}");
                return false;
            }
        };
        if !response.status().is_success() {
            tracing::error!("login rejected with status {}", response.status());
            return false;
        }
        let tokens: TokenPair = match response.json().await {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::error!("login response malformed: {err}");
                return false;
            }
        };

        let user = UserInfo::for_email(email);
        self.store.set(ACCESS_TOKEN_KEY, tokens.access.clone()).await;
        self.store.set(REFRESH_TOKEN_KEY, tokens.refresh.clone()).await;
        if let Ok(serialized) = serde_json::to_string(&user) {
            self.store.set(USER_DATA_KEY, serialized).await;
        }

        let mut cell = self.cell.lock().unwrap();
        cell.access = Some(tokens.access);
        cell.refresh = Some(tokens.refresh);
        cell.user = Some(user);
        true
    }

    /// Clear the persisted session. Idempotent.
    pub async fn logout(&self) {
        self.store.remove(ACCESS_TOKEN_KEY).await;
        self.store.remove(REFRESH_TOKEN_KEY).await;
        self.store.remove(USER_DATA_KEY).await;
        *self.cell.lock().unwrap() = SessionCell::default();
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<UserInfo> {
        self.cell.lock().unwrap().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.lock().unwrap().access.is_some()
    }

    fn access_token(&self) -> Option<String> {
        self.cell.lock().unwrap().access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.cell.lock().unwrap().refresh.clone()
    }

    fn request(&self, method: Method, url: &str, body: Option<&Value>) -> RequestBuilder {
        let mut request = self.client.request(method, url);
        if let Some(token) = self.access_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }

    /// Issue a request with the stored access token attached, refreshing once on
    /// a 401. Any path that ends in [`ApiError::Unauthorized`] has already torn
    /// the session down.
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let response = self.request(method.clone(), url, body).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        let Some(refresh) = self.refresh_token() else {
            self.logout().await;
            return Err(ApiError::Unauthorized);
        };
        if !self.refresh_access(&refresh).await {
            self.logout().await;
            return Err(ApiError::Unauthorized);
        }

        let retried = self.request(method, url, body).send().await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            self.logout().await;
            return Err(ApiError::Unauthorized);
        }
        check_status(retried).await
    }

    /// Swap the refresh token for a new access token. Sent on the bare client:
    /// the expired access token must not ride along as a bearer header.
    async fn refresh_access(&self, refresh: &str) -> bool {
        let url = format!("{}/auth/refresh/", self.config.base_url());
        let body = serde_json::json!({ "refresh": refresh });

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!("token refresh rejected with status {}", response.status());
                return false;
            }
            Err(err) => {
                tracing::warn!("token refresh failed: {err}");
                return false;
            }
        };
        let Ok(renewed) = response.json::<AccessOnly>().await else {
            return false;
        };

        self.store.set(ACCESS_TOKEN_KEY, renewed.access.clone()).await;
        self.cell.lock().unwrap().access = Some(renewed.access);
        true
    }

    // Django routes carry a trailing slash; without one the backend answers
    // with a redirect that drops the request body.
    pub(crate) fn collection_url(&self, path: &str) -> String {
        format!("{}/{}/", self.config.base_url(), path)
    }

    pub(crate) fn item_url(&self, path: &str, id: &str) -> String {
        format!("{}/{}/{}/", self.config.base_url(), path, id)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail,
    })
}
