//! Application root: session store, backend handle and navigation state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::backend::{AuthEvent, Backend};
use crate::config::BootstrapConfig;
use crate::models::{SessionUser, UserPatch};
use crate::navigation::{initial_route, DeepLinkConfig, Navigator, Route};
use crate::screens::{LoginScreen, NotesScreen, ScreenAction};
use crate::session::SessionStore;

pub struct JotterApp {
    session: Arc<SessionStore>,
    backend: Backend,
    navigator: Arc<watch::Sender<Navigator>>,
    deep_links: DeepLinkConfig,
    email_redirect: String,
}

impl JotterApp {
    pub fn new(backend: Backend, config: &BootstrapConfig) -> Self {
        let (navigator, _) = watch::channel(Navigator::new(Route::Login));
        Self {
            session: Arc::new(SessionStore::new()),
            backend,
            navigator: Arc::new(navigator),
            deep_links: config.deep_links(),
            email_redirect: config.email_redirect(),
        }
    }

    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    pub const fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn current_route(&self) -> Route {
        self.navigator.borrow().current()
    }

    pub fn subscribe_navigation(&self) -> watch::Receiver<Navigator> {
        self.navigator.subscribe()
    }

    /// Load a persisted session into the store and pick the first screen.
    pub async fn restore(&self) -> Route {
        match self.backend.auth.current_session().await {
            Ok(Some(session)) => match SessionUser::from_session(&session) {
                Some(user) => self.session.login_user(user),
                None => tracing::warn!("Restored session has no email; staying logged out"),
            },
            Ok(None) => tracing::debug!("No stored session"),
            Err(error) => tracing::warn!("Failed to restore session: {}", error),
        }

        let route = initial_route(self.session.is_authenticated());
        self.navigator.send_modify(|navigator| navigator.reset(route));
        tracing::info!("Starting on {} screen", route.title());
        route
    }

    /// Follow backend auth events until the backend goes away.
    ///
    /// A sign-out from anywhere clears the store and returns to login, which
    /// is a no-op if a screen already did the same.
    pub fn spawn_auth_listener(&self) -> JoinHandle<()> {
        let mut subscription = self.backend.auth.subscribe();
        let auth = Arc::clone(&self.backend.auth);
        let session = Arc::clone(&self.session);
        let navigator = Arc::clone(&self.navigator);

        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                tracing::debug!("Auth event: {:?}", event);
                match event {
                    AuthEvent::SignedOut => {
                        session.logout_user();
                        navigator.send_if_modified(|navigator| {
                            if navigator.current() == Route::Login {
                                return false;
                            }
                            navigator.reset(Route::Login);
                            true
                        });
                    }
                    AuthEvent::TokenRefreshed => match auth.current_session().await {
                        Ok(Some(current)) => {
                            session.update_user(UserPatch::token(current.access_token));
                        }
                        Ok(None) => {}
                        Err(error) => tracing::warn!("Failed to read refreshed session: {}", error),
                    },
                    AuthEvent::SignedIn => {}
                }
            }
        })
    }

    pub fn apply(&self, action: ScreenAction) {
        match action {
            ScreenAction::Navigate(route) => {
                self.navigator.send_modify(|navigator| navigator.reset(route));
            }
        }
    }

    /// Resolve an incoming URL. Links are only logged; nothing navigates.
    pub fn handle_deep_link(&self, url: &str) -> Option<Route> {
        let route = self.deep_links.parse(url);
        tracing::info!(url, ?route, "Deep link received");
        route
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(
            self.backend.clone(),
            self.session(),
            self.email_redirect.clone(),
        )
    }

    pub fn notes_screen(&self, screen_height: f64) -> NotesScreen {
        NotesScreen::new(self.backend.clone(), self.session(), screen_height)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::screens::LoginOutcome;
    use crate::testing::{fake_backend, FakeAuth, FakeNotes};

    fn app(auth: FakeAuth) -> (JotterApp, Arc<FakeAuth>) {
        let (backend, auth, _) = fake_backend(auth, FakeNotes::default());
        (JotterApp::new(backend, &BootstrapConfig::default()), auth)
    }

    async fn wait_until(mut check: impl FnMut() -> bool) {
        for _ in 0..100 {
            if check() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not reached");
    }

    #[tokio::test]
    async fn restore_with_session_starts_on_notes() {
        let (app, _) = app(FakeAuth::signed_in("a@b.com"));
        assert_eq!(app.restore().await, Route::Notes);
        assert_eq!(app.current_route(), Route::Notes);
        assert_eq!(app.session().user().unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn restore_without_session_starts_on_login() {
        let (app, _) = app(FakeAuth::default());
        assert_eq!(app.restore().await, Route::Login);
        assert!(!app.session().is_authenticated());
    }

    #[tokio::test]
    async fn restore_failure_falls_back_to_login() {
        let auth = FakeAuth::signed_in("a@b.com");
        auth.fail_next("offline");
        let (app, _) = app(auth);
        assert_eq!(app.restore().await, Route::Login);
    }

    #[tokio::test]
    async fn backend_sign_out_returns_to_login() {
        let (app, auth) = app(FakeAuth::signed_in("a@b.com"));
        app.restore().await;
        let _listener = app.spawn_auth_listener();

        auth.expire_session();

        let session = app.session();
        wait_until(|| !session.is_authenticated()).await;
        wait_until(|| app.current_route() == Route::Login).await;
    }

    #[tokio::test]
    async fn explicit_and_pushed_logout_converge() {
        let (app, _) = app(FakeAuth::signed_in("a@b.com"));
        app.restore().await;
        let _listener = app.spawn_auth_listener();
        let mut notes = app.notes_screen(800.0);

        notes.request_logout();
        let action = notes.confirm_logout().await.unwrap();
        app.apply(action);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!app.session().is_authenticated());
        assert_eq!(app.current_route(), Route::Login);
        assert_eq!(
            *app.subscribe_navigation().borrow(),
            Navigator::new(Route::Login)
        );

        app.session().logout_user();
        assert!(!app.session().is_authenticated());
    }

    #[tokio::test]
    async fn sign_in_from_login_screen_navigates() {
        let (app, _) = app(FakeAuth::default());
        app.restore().await;
        let mut login = app.login_screen();
        login.set_email("a@b.com");
        login.set_password("secret1");

        let LoginOutcome::SignedIn(action) = login.submit().await else {
            panic!("expected sign-in");
        };
        app.apply(action);

        assert_eq!(app.current_route(), Route::Notes);
        assert!(app.session().is_authenticated());
    }

    #[test]
    fn deep_links_are_resolved_not_followed() {
        let (app, _) = app(FakeAuth::default());
        assert_eq!(app.handle_deep_link("myapp://login"), Some(Route::Login));
        assert_eq!(app.handle_deep_link("other://login"), None);
        assert_eq!(app.current_route(), Route::Login);
    }
}
