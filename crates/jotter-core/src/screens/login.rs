//! Email/password sign-in and sign-up form.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::auth::{AuthError, SignUpOutcome};
use crate::backend::Backend;
use crate::models::SessionUser;
use crate::navigation::Route;
use crate::screens::{ScopeHandle, ScreenAction, ScreenScope};
use crate::session::SessionStore;
use crate::validation::{validate_email, validate_password, validate_password_confirmation};

/// How long the post-sign-up notice stays visible.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

const VERIFICATION_SENT: &str =
    "We've sent a verification link to your email. Check your inbox or spam folder.";
const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Login",
            Self::SignUp => "Create Account",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Inline messages under each field, plus one slot for backend errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub response: Option<String>,
}

impl FieldErrors {
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.response.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A submission is already in flight.
    Busy,
    /// Field validation failed; see [`LoginScreen::errors`].
    Invalid,
    /// Account created; the user has to confirm their email first.
    ConfirmationSent,
    SignedIn(ScreenAction),
    /// The backend refused; the message sits in `errors.response`.
    Rejected,
    /// The screen was torn down before the backend answered.
    Cancelled,
}

#[derive(Debug, Clone)]
struct Notice {
    message: &'static str,
    shown_at: Instant,
}

pub struct LoginScreen {
    backend: Backend,
    session: Arc<SessionStore>,
    email_redirect: String,
    mode: AuthMode,
    form: LoginForm,
    errors: FieldErrors,
    notice: Option<Notice>,
    loading: bool,
    scope: ScreenScope,
}

impl LoginScreen {
    pub fn new(backend: Backend, session: Arc<SessionStore>, email_redirect: impl Into<String>) -> Self {
        Self {
            backend,
            session,
            email_redirect: email_redirect.into(),
            mode: AuthMode::default(),
            form: LoginForm::default(),
            errors: FieldErrors::default(),
            notice: None,
            loading: false,
            scope: ScreenScope::new(),
        }
    }

    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope_handle(&self) -> ScopeHandle {
        self.scope.handle()
    }

    /// The success notice, while it is still fresh.
    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.shown_at.elapsed() < NOTICE_TIMEOUT)
            .map(|notice| notice.message)
    }

    /// Drop the notice once it has timed out. Returns whether it was dropped.
    pub fn expire_notice(&mut self) -> bool {
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= NOTICE_TIMEOUT);
        if expired {
            self.notice = None;
        }
        expired
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.errors.email = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
        self.errors.password = None;
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.form.confirm_password = confirm_password.into();
        self.errors.confirm_password = None;
    }

    /// Switch between sign-in and sign-up, starting from a blank form.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset_form();
        self.notice = None;
    }

    /// Check every field and record inline errors. Returns `true` when clean.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors {
            email: validate_email(&self.form.email).err().map(str::to_string),
            password: validate_password(&self.form.password)
                .err()
                .map(str::to_string),
            ..FieldErrors::default()
        };
        if self.mode == AuthMode::SignUp {
            errors.confirm_password =
                validate_password_confirmation(&self.form.password, &self.form.confirm_password)
                    .err()
                    .map(str::to_string);
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    pub async fn submit(&mut self) -> LoginOutcome {
        if self.loading {
            return LoginOutcome::Busy;
        }
        if !self.validate() {
            return LoginOutcome::Invalid;
        }

        self.loading = true;
        let email = self.form.email.trim().to_string();
        let password = self.form.password.clone();

        let outcome = match self.mode {
            AuthMode::SignUp => {
                let Some(result) = self
                    .scope
                    .run(
                        self.backend
                            .auth
                            .sign_up(&email, &password, Some(&self.email_redirect)),
                    )
                    .await
                else {
                    return LoginOutcome::Cancelled;
                };
                result.map(|outcome| self.finish_sign_up(&outcome))
            }
            AuthMode::SignIn => {
                let Some(result) = self
                    .scope
                    .run(self.backend.auth.sign_in(&email, &password))
                    .await
                else {
                    return LoginOutcome::Cancelled;
                };
                result.map(|session| match SessionUser::from_session(&session) {
                    Some(user) => {
                        self.session.login_user(user);
                        self.reset_form();
                        LoginOutcome::SignedIn(ScreenAction::Navigate(Route::Notes))
                    }
                    None => {
                        self.errors.response = Some(GENERIC_FAILURE.to_string());
                        LoginOutcome::Rejected
                    }
                })
            }
        };

        self.loading = false;
        outcome.unwrap_or_else(|error| self.reject(&error))
    }

    fn finish_sign_up(&mut self, outcome: &SignUpOutcome) -> LoginOutcome {
        if matches!(outcome, SignUpOutcome::SignedIn(_)) {
            tracing::debug!("Sign-up returned a session; waiting for explicit sign-in");
        }
        self.mode = AuthMode::SignIn;
        self.reset_form();
        self.notice = Some(Notice {
            message: VERIFICATION_SENT,
            shown_at: Instant::now(),
        });
        LoginOutcome::ConfirmationSent
    }

    fn reject(&mut self, error: &AuthError) -> LoginOutcome {
        tracing::debug!("Auth request rejected: {}", error);
        let message = error.to_string();
        self.errors.response = Some(if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        });
        LoginOutcome::Rejected
    }

    fn reset_form(&mut self) {
        self.form = LoginForm::default();
        self.errors = FieldErrors::default();
    }
}
