//! Screen routing and deep-link parsing.

use crate::util::normalize_text_option;

pub const DEFAULT_LINK_PREFIX: &str = "myapp://";
const LOGIN_PATH: &str = "login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Notes,
}

impl Route {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Notes => "Notes",
        }
    }
}

/// Where the app opens, given the restored session.
pub const fn initial_route(is_authenticated: bool) -> Route {
    if is_authenticated {
        Route::Notes
    } else {
        Route::Login
    }
}

/// Stack navigator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    /// Replace the whole history with `route`.
    pub fn reset(&mut self, route: Route) {
        self.stack.clear();
        self.stack.push(route);
    }
}

/// URL prefixes the app is registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkConfig {
    pub prefixes: Vec<String>,
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            prefixes: vec![DEFAULT_LINK_PREFIX.to_string()],
        }
    }
}

impl DeepLinkConfig {
    /// Map an incoming URL to a screen, if it is one of ours.
    pub fn parse(&self, url: &str) -> Option<Route> {
        let url = normalize_text_option(Some(url.to_string()))?;
        let rest = self
            .prefixes
            .iter()
            .find_map(|prefix| url.strip_prefix(prefix.as_str()))?;
        let path = rest
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');

        match path {
            LOGIN_PATH => Some(Route::Login),
            _ => None,
        }
    }
}
