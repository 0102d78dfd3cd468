//! Note list, editor sheet and the two confirmation dialogs.

use std::sync::Arc;

use crate::backend::Backend;
use crate::models::{NewNote, Note, NoteChanges, NoteId};
use crate::navigation::Route;
use crate::screens::{ScopeHandle, ScreenAction, ScreenScope, Toast};
use crate::session::SessionStore;
use crate::sheet::{BottomSheet, ConfirmationDialog, SheetConfig};
use crate::util::normalize_search_text;
use crate::validation::is_note_input_valid;
use crate::{Error, Result};

const LOAD_FAILED: &str = "Failed to load notes. Please try again.";
const SAVE_FAILED: &str = "Unable to save note. Please try again.";
const DELETE_FAILED: &str = "Failed to delete note. Try again.";
const LOGOUT_FAILED: &str = "Logout failed. Please try again.";

const DELETE_TITLE: &str = "Delete Note";
const DELETE_DESCRIPTION: &str =
    "Are you sure you want to delete this note? This action cannot be undone.";
const LOGOUT_TITLE: &str = "Logout";
const LOGOUT_DESCRIPTION: &str = "Are you sure you want to logout?";

/// Prefill for the editor form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Blank title or content; nothing was sent.
    Rejected,
    /// Another mutation is still running.
    Busy,
    Failed,
    /// The backend no longer accepts the session; the user was logged out.
    SessionExpired(ScreenAction),
    Cancelled,
}

/// Delete confirmation for one note.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub id: NoteId,
    pub dialog: ConfirmationDialog,
}

pub struct NotesScreen {
    backend: Backend,
    session: Arc<SessionStore>,
    screen_height: f64,
    notes: Vec<Note>,
    selected_note_id: Option<NoteId>,
    loading: bool,
    mutation_loading: bool,
    editor: Option<BottomSheet>,
    delete: Option<PendingDelete>,
    logout: Option<ConfirmationDialog>,
    search_query: String,
    toasts: Vec<Toast>,
    scope: ScreenScope,
}

impl NotesScreen {
    pub fn new(backend: Backend, session: Arc<SessionStore>, screen_height: f64) -> Self {
        Self {
            backend,
            session,
            screen_height,
            notes: Vec::new(),
            selected_note_id: None,
            loading: true,
            mutation_loading: false,
            editor: None,
            delete: None,
            logout: None,
            search_query: String::new(),
            toasts: Vec::new(),
            scope: ScreenScope::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_mutating(&self) -> bool {
        self.mutation_loading
    }

    pub const fn selected_note_id(&self) -> Option<&NoteId> {
        self.selected_note_id.as_ref()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected_note_id.as_ref()?;
        self.notes.iter().find(|note| &note.id == id)
    }

    pub const fn editor(&self) -> Option<&BottomSheet> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut BottomSheet> {
        self.editor.as_mut()
    }

    pub const fn delete_dialog(&self) -> Option<&PendingDelete> {
        self.delete.as_ref()
    }

    pub fn delete_dialog_mut(&mut self) -> Option<&mut PendingDelete> {
        self.delete.as_mut()
    }

    pub const fn logout_dialog(&self) -> Option<&ConfirmationDialog> {
        self.logout.as_ref()
    }

    pub fn logout_dialog_mut(&mut self) -> Option<&mut ConfirmationDialog> {
        self.logout.as_mut()
    }

    pub fn scope_handle(&self) -> ScopeHandle {
        self.scope.handle()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Notes matching the search query, in list order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        let query = normalize_search_text(&self.search_query);
        if query.is_empty() {
            return self.notes.iter().collect();
        }
        self.notes
            .iter()
            .filter(|note| {
                normalize_search_text(&note.title).contains(&query)
                    || normalize_search_text(&note.content).contains(&query)
            })
            .collect()
    }

    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Fetch the user's notes; a failure keeps whatever is already listed.
    pub async fn load(&mut self) {
        self.loading = true;
        let Some(result) = self.scope.run(self.backend.notes.select_all()).await else {
            return;
        };
        self.loading = false;

        match result {
            Ok(notes) => {
                tracing::debug!("Loaded {} notes", notes.len());
                self.notes = notes;
            }
            Err(error) => {
                tracing::warn!("Failed to load notes: {}", error);
                self.toast(LOAD_FAILED);
            }
        }
    }

    /// Open the editor sheet, for `id` or for a new note.
    pub fn open_editor(&mut self, id: Option<NoteId>) {
        self.selected_note_id = id;
        let mut sheet = BottomSheet::new(SheetConfig::new(self.screen_height));
        sheet.show();
        self.editor = Some(sheet);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        self.selected_note_id = None;
    }

    pub fn editor_draft(&self) -> NoteDraft {
        self.selected_note()
            .map(|note| NoteDraft {
                title: note.title.clone(),
                content: note.content.clone(),
            })
            .unwrap_or_default()
    }

    /// Save the editor form as an update of the selected note or a new note.
    pub async fn submit_note(&mut self, title: &str, content: &str) -> SubmitOutcome {
        if self.mutation_loading {
            return SubmitOutcome::Busy;
        }
        if !is_note_input_valid(title, content) {
            return SubmitOutcome::Rejected;
        }

        self.mutation_loading = true;
        let result = match self.selected_note_id.clone() {
            Some(id) => {
                let changes = NoteChanges::new(title, content);
                let Some(result) = self
                    .scope
                    .run(self.backend.notes.update(&id, &changes))
                    .await
                else {
                    self.mutation_loading = false;
                    return SubmitOutcome::Cancelled;
                };
                result.map(|()| {
                    if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
                        note.apply(&changes);
                    }
                })
            }
            None => {
                let Some(result) = self.scope.run(self.insert_note(title, content)).await else {
                    self.mutation_loading = false;
                    return SubmitOutcome::Cancelled;
                };
                result.map(|note| self.notes.insert(0, note))
            }
        };

        self.mutation_loading = false;
        self.close_editor();

        match result {
            Ok(()) => SubmitOutcome::Saved,
            Err(error) => {
                tracing::warn!("Failed to save note: {}", error);
                let message = error.to_string();
                self.toast(if message.trim().is_empty() {
                    SAVE_FAILED.to_string()
                } else {
                    message
                });

                if error.is_session_expired() {
                    self.force_logout().await
                } else {
                    SubmitOutcome::Failed
                }
            }
        }
    }

    async fn insert_note(&self, title: &str, content: &str) -> Result<Note> {
        let user = self
            .backend
            .auth
            .current_user()
            .await?
            .ok_or(Error::SessionExpired)?;
        let new_note = NewNote {
            title: title.to_string(),
            content: content.to_string(),
            user_id: user.id,
        };
        self.backend.notes.insert(&new_note).await
    }

    async fn force_logout(&mut self) -> SubmitOutcome {
        if let Some(Err(error)) = self.scope.run(self.backend.auth.sign_out()).await {
            tracing::warn!("Sign-out after expired session failed: {}", error);
        }
        self.session.logout_user();
        SubmitOutcome::SessionExpired(ScreenAction::Navigate(Route::Login))
    }

    pub fn request_delete(&mut self, id: NoteId) {
        self.selected_note_id = Some(id.clone());
        self.delete = Some(PendingDelete {
            id,
            dialog: ConfirmationDialog::open(DELETE_TITLE, DELETE_DESCRIPTION, self.screen_height),
        });
    }

    /// Close the delete dialog; nothing is sent.
    pub fn cancel_delete(&mut self) {
        self.delete = None;
        self.selected_note_id = None;
    }

    /// Delete the note the dialog was opened for. Returns `true` on success.
    pub async fn confirm_delete(&mut self) -> bool {
        if self.mutation_loading {
            return false;
        }
        let Some(id) = self.delete.as_mut().map(|pending| {
            pending.dialog.set_loading(true);
            pending.id.clone()
        }) else {
            return false;
        };

        self.mutation_loading = true;
        let result = self.scope.run(self.backend.notes.delete(&id)).await;
        self.mutation_loading = false;
        let Some(result) = result else {
            return false;
        };
        self.cancel_delete();

        match result {
            Ok(()) => {
                self.notes.retain(|note| note.id != id);
                true
            }
            Err(error) => {
                tracing::warn!("Failed to delete note {}: {}", id, error);
                self.toast(DELETE_FAILED);
                false
            }
        }
    }

    pub fn request_logout(&mut self) {
        self.logout = Some(ConfirmationDialog::open(
            LOGOUT_TITLE,
            LOGOUT_DESCRIPTION,
            self.screen_height,
        ));
    }

    pub fn cancel_logout(&mut self) {
        self.logout = None;
    }

    /// Sign out and clear the session store.
    pub async fn confirm_logout(&mut self) -> Option<ScreenAction> {
        if self.mutation_loading {
            return None;
        }
        if let Some(dialog) = self.logout.as_mut() {
            dialog.set_loading(true);
        }

        self.mutation_loading = true;
        let result = self.scope.run(self.backend.auth.sign_out()).await;
        self.mutation_loading = false;
        let result = result?;
        self.logout = None;

        match result {
            Ok(()) => {
                self.session.logout_user();
                Some(ScreenAction::Navigate(Route::Login))
            }
            Err(error) => {
                tracing::warn!("Logout failed: {}", error);
                self.toast(LOGOUT_FAILED);
                None
            }
        }
    }

    fn toast(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::short(message));
    }
}
