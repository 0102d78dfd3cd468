//! Supabase auth client logic.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};

use crate::backend::{AuthBackend, AuthEvent, AuthSubscription};
use crate::util::{compact_text, normalize_text_option, unix_timestamp_now};

const EXPIRY_SKEW_SECONDS: i64 = 60;
const AUTH_EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub user: AuthUser,
}

impl AuthSession {
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= unix_timestamp_now() + EXPIRY_SKEW_SECONDS
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(AuthSession),
    ConfirmationRequired,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Supabase auth is not configured for this build.")]
    NotConfigured,
    #[error("Invalid auth configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("No active session")]
    NotSignedIn,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Api(String),
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Opaque key-value layer that keeps the session across app restarts.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> AuthResult<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> AuthResult<()>;
    fn clear_session(&self) -> AuthResult<()>;
}

/// Process-local persistence; sessions do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionPersistence {
    slot: Arc<Mutex<Option<AuthSession>>>,
}

impl SessionPersistence for MemorySessionPersistence {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        let guard = self
            .slot
            .lock()
            .map_err(|error| AuthError::SecureStorage(error.to_string()))?;
        Ok(guard.clone())
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| AuthError::SecureStorage(error.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear_session(&self) -> AuthResult<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|error| AuthError::SecureStorage(error.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// GoTrue REST client holding the current session in memory.
///
/// Clones share the session slot and the auth event channel.
#[derive(Clone)]
pub struct SupabaseAuthClient<S: SessionPersistence> {
    auth_url: String,
    anon_key: String,
    client: Client,
    store: S,
    current: Arc<RwLock<Option<AuthSession>>>,
    events: broadcast::Sender<AuthEvent>,
}

impl<S: SessionPersistence> SupabaseAuthClient<S> {
    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>, store: S) -> AuthResult<Self> {
        let auth_url = normalize_auth_url(url.as_ref())?;
        let anon_key = anon_key.into().trim().to_string();
        if anon_key.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Supabase anon key must not be empty",
            ));
        }
        let (events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);

        Ok(Self {
            auth_url,
            anon_key,
            client: Client::builder().build()?,
            store,
            current: Arc::new(RwLock::new(None)),
            events,
        })
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub async fn current_session(&self) -> Option<AuthSession> {
        self.current.read().await.clone()
    }

    /// Load the persisted session, refreshing it when it has expired.
    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        let Some(stored_session) = self.store.load_session()? else {
            return Ok(None);
        };

        if !stored_session.is_expired() {
            self.set_current(Some(stored_session.clone())).await;
            return Ok(Some(stored_session));
        }

        match self.refresh_session(&stored_session.refresh_token).await {
            Ok(refreshed) => Ok(Some(refreshed)),
            Err(error) => {
                tracing::warn!("Failed to refresh persisted session: {}", error);
                self.store.clear_session()?;
                self.set_current(None).await;
                Ok(None)
            }
        }
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: Option<&str>,
    ) -> AuthResult<SignUpOutcome> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let mut request = self
            .client
            .post(format!("{}/signup", self.auth_url))
            .json(&payload);
        if let Some(redirect_to) = redirect_to.map(str::trim).filter(|value| !value.is_empty()) {
            request = request.query(&[("redirect_to", redirect_to)]);
        }
        let response = self.send_auth_request(self.public_request(request)).await?;
        match response.into_session()? {
            Some(session) => {
                self.store.save_session(&session)?;
                self.set_current(Some(session.clone())).await;
                self.emit(AuthEvent::SignedIn);
                Ok(SignUpOutcome::SignedIn(session))
            }
            None => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        validate_credentials(email, password)?;

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });
        let request = self.public_request(
            self.client
                .post(format!("{}/token", self.auth_url))
                .query(&[("grant_type", "password")])
                .json(&payload),
        );

        let response = self.send_auth_request(request).await?;
        let session = response.into_session()?.ok_or_else(|| {
            AuthError::Api("Sign-in response did not include an active session".to_string())
        })?;

        self.store.save_session(&session)?;
        self.set_current(Some(session.clone())).await;
        self.emit(AuthEvent::SignedIn);
        Ok(session)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> AuthResult<AuthSession> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Refresh token must not be empty",
            ));
        }

        let payload = serde_json::json!({
            "refresh_token": refresh_token,
        });
        let request = self.public_request(
            self.client
                .post(format!("{}/token", self.auth_url))
                .query(&[("grant_type", "refresh_token")])
                .json(&payload),
        );
        let response = self.send_auth_request(request).await?;
        let session = response.into_session()?.ok_or_else(|| {
            AuthError::Api("Refresh response did not include an active session".to_string())
        })?;

        self.store.save_session(&session)?;
        self.set_current(Some(session.clone())).await;
        self.emit(AuthEvent::TokenRefreshed);
        Ok(session)
    }

    /// Revoke the current session and forget it locally.
    ///
    /// A missing or already-revoked session still ends signed out.
    pub async fn sign_out(&self) -> AuthResult<()> {
        if let Some(session) = self.current_session().await {
            let request = self
                .client
                .post(format!("{}/logout", self.auth_url))
                .header("apikey", &self.anon_key)
                .bearer_auth(&session.access_token);

            let response = request.send().await?;
            if !(response.status().is_success() || response.status() == StatusCode::UNAUTHORIZED)
            {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(AuthError::Api(parse_api_error(status, &body)));
            }
        }

        self.forget_session().await
    }

    /// Access token of a live session, refreshing it first when expired.
    pub async fn access_token(&self) -> AuthResult<String> {
        let session = self.current_session().await.ok_or(AuthError::NotSignedIn)?;
        if !session.is_expired() {
            return Ok(session.access_token);
        }

        match self.refresh_session(&session.refresh_token).await {
            Ok(refreshed) => Ok(refreshed.access_token),
            Err(error) => {
                tracing::warn!("Failed to refresh expired session: {}", error);
                self.forget_session().await?;
                Err(AuthError::NotSignedIn)
            }
        }
    }

    /// Ask the backend who owns the current token.
    ///
    /// A token the backend no longer accepts ends the session.
    pub async fn get_user(&self) -> AuthResult<Option<AuthUser>> {
        let access_token = match self.access_token().await {
            Ok(token) => token,
            Err(AuthError::NotSignedIn) => return Ok(None),
            Err(error) => return Err(error),
        };

        let response = self
            .client
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!("Backend rejected the current token ({})", status.as_u16());
            self.forget_session().await?;
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }

        let user = response.json::<SupabaseUser>().await?;
        Ok(Some(user.into()))
    }

    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.events.subscribe())
    }

    fn public_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    async fn send_auth_request(&self, request: RequestBuilder) -> AuthResult<SupabaseAuthResponse> {
        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_api_error(status, &body)));
        }
        Ok(response.json::<SupabaseAuthResponse>().await?)
    }

    async fn forget_session(&self) -> AuthResult<()> {
        self.store.clear_session()?;
        let had_session = self.set_current(None).await;
        if had_session {
            self.emit(AuthEvent::SignedOut);
        }
        Ok(())
    }

    /// Replace the in-memory session; returns whether one was held before.
    async fn set_current(&self, session: Option<AuthSession>) -> bool {
        let mut guard = self.current.write().await;
        let had_session = guard.is_some();
        *guard = session;
        had_session
    }

    fn emit(&self, event: AuthEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl<S: SessionPersistence> AuthBackend for SupabaseAuthClient<S> {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: Option<&str>,
    ) -> AuthResult<SignUpOutcome> {
        Self::sign_up(self, email, password, redirect_to).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        Self::sign_in(self, email, password).await
    }

    async fn sign_out(&self) -> AuthResult<()> {
        Self::sign_out(self).await
    }

    async fn current_user(&self) -> AuthResult<Option<AuthUser>> {
        self.get_user().await
    }

    async fn current_session(&self) -> AuthResult<Option<AuthSession>> {
        if let Some(session) = Self::current_session(self).await {
            return Ok(Some(session));
        }
        self.restore_session().await
    }

    fn subscribe(&self) -> AuthSubscription {
        Self::subscribe(self)
    }
}

pub fn normalize_auth_url(url: &str) -> AuthResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AuthError::InvalidConfiguration(
            "Supabase URL must not be empty",
        ));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AuthError::InvalidConfiguration(
            "Supabase URL must include http:// or https://",
        ));
    }
    if trimmed.ends_with("/auth/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/auth/v1"))
    }
}

pub fn resolve_optional_supabase_config(
    url: Option<String>,
    anon_key: Option<String>,
) -> AuthResult<Option<(String, String)>> {
    let url = normalize_text_option(url);
    let anon_key = normalize_text_option(anon_key);

    match (url, anon_key) {
        (None, None) => Ok(None),
        (Some(url), Some(anon_key)) => Ok(Some((url, anon_key))),
        _ => Err(AuthError::NotConfigured),
    }
}

fn validate_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.trim().is_empty() {
        return Err(AuthError::Api("Email is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(AuthError::Api("Password is required".to_string()));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct SupabaseAuthResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: Option<SupabaseUser>,
    session: Option<SupabaseAuthResponseSession>,
}

impl SupabaseAuthResponse {
    fn into_session(self) -> AuthResult<Option<AuthSession>> {
        let nested_session = self.session;
        let access_token = self.access_token.or_else(|| {
            nested_session
                .as_ref()
                .and_then(|session| session.access_token.clone())
        });
        let refresh_token = self.refresh_token.or_else(|| {
            nested_session
                .as_ref()
                .and_then(|session| session.refresh_token.clone())
        });
        let expires_at = self
            .expires_at
            .or_else(|| nested_session.as_ref().and_then(|session| session.expires_at))
            .or_else(|| {
                self.expires_in
                    .or_else(|| nested_session.as_ref().and_then(|session| session.expires_in))
                    .map(|expires_in| unix_timestamp_now().saturating_add(expires_in))
            });
        let user = self
            .user
            .or_else(|| nested_session.and_then(|session| session.user))
            .map(Into::into);

        match (access_token, refresh_token, expires_at, user) {
            (Some(access_token), Some(refresh_token), Some(expires_at), Some(user)) => {
                Ok(Some(AuthSession {
                    access_token,
                    refresh_token,
                    expires_at,
                    user,
                }))
            }
            (None, None, None, Some(_)) => Ok(None),
            _ => Err(AuthError::Api(
                "Auth response did not include enough session fields".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SupabaseAuthResponseSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: Option<SupabaseUser>,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<SupabaseUserMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct SupabaseUserMetadata {
    #[serde(default)]
    email_verified: Option<bool>,
}

impl From<SupabaseUser> for AuthUser {
    fn from(value: SupabaseUser) -> Self {
        let email_verified = value
            .user_metadata
            .and_then(|metadata| metadata.email_verified)
            .unwrap_or(false);
        Self {
            id: value.id,
            email: value.email,
            email_verified,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SupabaseErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    msg: Option<String>,
}

/// Extract the human-readable message from a Supabase error body.
pub(crate) fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<SupabaseErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.msg)
            .or(payload.error_description)
            .or(payload.error)
        {
            return message.trim().to_string();
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        trimmed
    }
}
