//! PostgREST client for the `notes` table.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::auth::{parse_api_error, AuthError, SessionPersistence, SupabaseAuthClient};
use crate::backend::NotesTable;
use crate::models::{NewNote, Note, NoteChanges, NoteId};
use crate::{Error, Result};

pub const NOTES_TABLE: &str = "notes";

/// Table client that authenticates every call with the auth client's session.
#[derive(Clone)]
pub struct SupabaseNotesClient<S: SessionPersistence> {
    table_url: String,
    client: Client,
    auth: SupabaseAuthClient<S>,
}

impl<S: SessionPersistence> SupabaseNotesClient<S> {
    pub fn new(url: impl AsRef<str>, auth: SupabaseAuthClient<S>) -> Result<Self> {
        let rest_url = normalize_rest_url(url.as_ref())?;
        Ok(Self {
            table_url: format!("{rest_url}/{NOTES_TABLE}"),
            client: Client::builder().build()?,
            auth,
        })
    }

    fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_url)
    }

    fn row_url(&self, id: &NoteId) -> String {
        format!(
            "{}?id=eq.{}",
            self.table_url,
            urlencoding::encode(id.as_str())
        )
    }

    async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let access_token = self.auth.access_token().await.map_err(|error| match error {
            AuthError::NotSignedIn => Error::SessionExpired,
            other => Error::Auth(other),
        })?;
        Ok(request
            .header("apikey", self.auth.anon_key())
            .bearer_auth(access_token))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).await?.send().await?;
        check_status(response).await
    }
}

#[async_trait]
impl<S: SessionPersistence> NotesTable for SupabaseNotesClient<S> {
    async fn select_all(&self) -> Result<Vec<Note>> {
        let request = self
            .client
            .get(self.list_url())
            .header("Accept", "application/json");
        let response = self.send(request).await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    async fn insert(&self, note: &NewNote) -> Result<Note> {
        let request = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .header("Accept", "application/vnd.pgrst.object+json")
            .json(note);
        let response = self.send(request).await?;
        Ok(response.json::<Note>().await?)
    }

    async fn update(&self, id: &NoteId, changes: &NoteChanges) -> Result<()> {
        let request = self
            .client
            .patch(self.row_url(id))
            .header("Prefer", "return=minimal")
            .json(changes);
        self.send(request).await?;
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let request = self
            .client
            .delete(self.row_url(id))
            .header("Prefer", "return=minimal");
        self.send(request).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::SessionExpired);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(parse_api_error(status, &body)))
}

pub fn normalize_rest_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Auth(AuthError::InvalidConfiguration(
            "Supabase URL must include http:// or https://",
        )));
    }
    if trimmed.ends_with("/rest/v1") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/rest/v1"))
    }
}
