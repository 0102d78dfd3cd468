//! In-memory backend doubles for unit tests.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::sync::broadcast;

use crate::auth::{AuthError, AuthResult, AuthSession, AuthUser, SignUpOutcome};
use crate::backend::{AuthBackend, AuthEvent, AuthSubscription, Backend, NotesTable};
use crate::models::{NewNote, Note, NoteChanges, NoteId};
use crate::{Error, Result};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

pub fn session_for(email: &str) -> AuthSession {
    AuthSession {
        access_token: format!("token-{email}"),
        refresh_token: "refresh".to_string(),
        expires_at: i64::MAX,
        user: AuthUser {
            id: format!("id-{email}"),
            email: Some(email.to_string()),
            email_verified: false,
        },
    }
}

pub fn note(id: &str, title: &str, minutes: i64) -> Note {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
    Note {
        id: NoteId::from(id),
        user_id: "id-a@b.com".to_string(),
        title: title.to_string(),
        content: format!("{title} body"),
        created_at,
        updated_at: created_at,
    }
}

#[derive(Default)]
struct FakeAuthState {
    session: Option<AuthSession>,
    calls: Vec<&'static str>,
    fail_with: Option<String>,
    confirm_sign_up: bool,
}

pub struct FakeAuth {
    state: Mutex<FakeAuthState>,
    events: broadcast::Sender<AuthEvent>,
}

impl Default for FakeAuth {
    fn default() -> Self {
        let (events, _) = broadcast::channel(8);
        Self {
            state: Mutex::new(FakeAuthState {
                confirm_sign_up: true,
                ..FakeAuthState::default()
            }),
            events,
        }
    }
}

impl FakeAuth {
    pub fn signed_in(email: &str) -> Self {
        let auth = Self::default();
        lock(&auth.state).session = Some(session_for(email));
        auth
    }

    /// The next call fails with an API error carrying `message`.
    pub fn fail_next(&self, message: &str) {
        lock(&self.state).fail_with = Some(message.to_string());
    }

    /// Sign-up returns a live session instead of asking for confirmation.
    pub fn auto_confirm_sign_up(&self) {
        lock(&self.state).confirm_sign_up = false;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        lock(&self.state).calls.clone()
    }

    pub fn has_session(&self) -> bool {
        lock(&self.state).session.is_some()
    }

    /// Simulate the backend invalidating the session on its own.
    pub fn expire_session(&self) {
        lock(&self.state).session = None;
        let _ = self.events.send(AuthEvent::SignedOut);
    }

    fn begin(&self, call: &'static str) -> AuthResult<MutexGuard<'_, FakeAuthState>> {
        let mut state = lock(&self.state);
        state.calls.push(call);
        match state.fail_with.take() {
            Some(message) => Err(AuthError::Api(message)),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl AuthBackend for FakeAuth {
    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        _redirect_to: Option<&str>,
    ) -> AuthResult<SignUpOutcome> {
        let mut state = self.begin("sign_up")?;
        if state.confirm_sign_up {
            return Ok(SignUpOutcome::ConfirmationRequired);
        }
        let session = session_for(email);
        state.session = Some(session.clone());
        Ok(SignUpOutcome::SignedIn(session))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> AuthResult<AuthSession> {
        let session = {
            let mut state = self.begin("sign_in")?;
            let session = session_for(email);
            state.session = Some(session.clone());
            session
        };
        let _ = self.events.send(AuthEvent::SignedIn);
        Ok(session)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let had_session = self.begin("sign_out")?.session.take().is_some();
        if had_session {
            let _ = self.events.send(AuthEvent::SignedOut);
        }
        Ok(())
    }

    async fn current_user(&self) -> AuthResult<Option<AuthUser>> {
        let state = self.begin("current_user")?;
        Ok(state.session.as_ref().map(|session| session.user.clone()))
    }

    async fn current_session(&self) -> AuthResult<Option<AuthSession>> {
        let state = self.begin("current_session")?;
        Ok(state.session.clone())
    }

    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.events.subscribe())
    }
}

#[derive(Default)]
struct FakeNotesState {
    rows: Vec<Note>,
    calls: Vec<&'static str>,
    fail_with: Option<String>,
    next_id: u32,
}

#[derive(Default)]
pub struct FakeNotes {
    state: Mutex<FakeNotesState>,
}

impl FakeNotes {
    pub fn with_rows(rows: Vec<Note>) -> Self {
        let notes = Self::default();
        lock(&notes.state).rows = rows;
        notes
    }

    pub fn fail_next(&self, message: &str) {
        lock(&self.state).fail_with = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<&'static str> {
        lock(&self.state).calls.clone()
    }

    pub fn rows(&self) -> Vec<Note> {
        lock(&self.state).rows.clone()
    }

    fn begin(&self, call: &'static str) -> Result<MutexGuard<'_, FakeNotesState>> {
        let mut state = lock(&self.state);
        state.calls.push(call);
        match state.fail_with.take() {
            Some(message) => Err(Error::Api(message)),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl NotesTable for FakeNotes {
    async fn select_all(&self) -> Result<Vec<Note>> {
        let state = self.begin("select_all")?;
        let mut rows = state.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, new_note: &NewNote) -> Result<Note> {
        let mut state = self.begin("insert")?;
        state.next_id += 1;
        let created_at = Utc::now();
        let row = Note {
            id: NoteId::new(format!("new-{}", state.next_id)),
            user_id: new_note.user_id.clone(),
            title: new_note.title.clone(),
            content: new_note.content.clone(),
            created_at,
            updated_at: created_at,
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &NoteId, changes: &NoteChanges) -> Result<()> {
        let mut state = self.begin("update")?;
        let row = state
            .rows
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        row.apply(changes);
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let mut state = self.begin("delete")?;
        state.rows.retain(|row| &row.id != id);
        Ok(())
    }
}

/// Backend handle plus typed access to both doubles.
pub fn fake_backend(auth: FakeAuth, notes: FakeNotes) -> (Backend, Arc<FakeAuth>, Arc<FakeNotes>) {
    let auth = Arc::new(auth);
    let notes = Arc::new(notes);
    let backend = Backend::new(auth.clone(), notes.clone());
    (backend, auth, notes)
}
