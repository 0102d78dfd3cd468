//! Capabilities the app needs from the hosted backend.
//!
//! Screens and the app shell only see these traits, so the Supabase clients
//! can be swapped for in-memory doubles.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};

use crate::auth::{
    AuthResult, AuthSession, AuthUser, SessionPersistence, SignUpOutcome, SupabaseAuthClient,
};
use crate::models::{NewNote, Note, NoteChanges, NoteId};
use crate::notes::SupabaseNotesClient;
use crate::Result;

/// Session lifecycle notifications pushed by the auth backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    TokenRefreshed,
    SignedOut,
}

/// Live subscription to [`AuthEvent`]s; dropping it unsubscribes.
#[derive(Debug)]
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthEvent>,
}

impl AuthSubscription {
    pub const fn new(receiver: broadcast::Receiver<AuthEvent>) -> Self {
        Self { receiver }
    }

    /// Wait for the next event. `None` once the backend is gone.
    pub async fn recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Auth subscription lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next already-delivered event, if any.
    pub fn try_recv(&mut self) -> Option<AuthEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(_)) => {}
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {}
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: Option<&str>,
    ) -> AuthResult<SignUpOutcome>;

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession>;

    async fn sign_out(&self) -> AuthResult<()>;

    /// The user behind the current session, as confirmed by the backend.
    async fn current_user(&self) -> AuthResult<Option<AuthUser>>;

    /// The current session, loading a persisted one if none is active.
    async fn current_session(&self) -> AuthResult<Option<AuthSession>>;

    fn subscribe(&self) -> AuthSubscription;
}

/// Row access to the `notes` table, scoped to the signed-in user.
#[async_trait]
pub trait NotesTable: Send + Sync {
    /// All notes, newest first.
    async fn select_all(&self) -> Result<Vec<Note>>;

    async fn insert(&self, note: &NewNote) -> Result<Note>;

    async fn update(&self, id: &NoteId, changes: &NoteChanges) -> Result<()>;

    async fn delete(&self, id: &NoteId) -> Result<()>;
}

/// Injected backend handle shared by the app shell and screens.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn AuthBackend>,
    pub notes: Arc<dyn NotesTable>,
}

impl Backend {
    pub fn new(auth: Arc<dyn AuthBackend>, notes: Arc<dyn NotesTable>) -> Self {
        Self { auth, notes }
    }

    /// Auth and table clients for one Supabase project, sharing a session.
    pub fn supabase<S: SessionPersistence>(
        url: &str,
        anon_key: impl Into<String>,
        store: S,
    ) -> Result<Self> {
        let auth = SupabaseAuthClient::new(url, anon_key, store)?;
        let notes = SupabaseNotesClient::new(url, auth.clone())?;
        Ok(Self::new(Arc::new(auth), Arc::new(notes)))
    }
}
