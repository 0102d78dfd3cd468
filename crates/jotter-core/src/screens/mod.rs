//! Screen controllers.
//!
//! Each controller owns the state one screen renders and talks to the
//! backend through [`crate::backend::Backend`]. The mobile shell only
//! forwards input and draws whatever the controller exposes.

mod login;
mod notes;
mod scope;
mod toast;

pub use login::{AuthMode, FieldErrors, LoginForm, LoginOutcome, LoginScreen, NOTICE_TIMEOUT};
pub use notes::{NoteDraft, NotesScreen, PendingDelete, SubmitOutcome};
pub use scope::{ScopeHandle, ScreenScope};
pub use toast::{Toast, ToastDuration};

use crate::navigation::Route;

/// Navigation request returned by a controller after a successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Navigate(Route),
}
