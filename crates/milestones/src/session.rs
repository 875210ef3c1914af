//! Explicit dashboard state: auth session, route guard, badge popup

use common::models::{BadgeDefinition, User};

/// Signed-in state
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    token: Option<String>,
    user: Option<User>,
}

impl AuthSession {
    pub fn new(token: Option<String>) -> Self {
        Self { token, user: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Store the token handed back by the OAuth callback
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forget both token and user, as after logout
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Dashboard routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Signup,
    Login,
    Home,
    Unknown,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/signup" => Route::Signup,
            "/login" => Route::Login,
            "/home" => Route::Home,
            _ => Route::Unknown,
        }
    }

    fn is_public(self) -> bool {
        matches!(self, Route::Landing | Route::Signup | Route::Login)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Public pages bounce signed-in users home; home bounces everyone else to login.
pub fn guard(session: &AuthSession, route: Route) -> Access {
    match (route, session.is_authenticated()) {
        (Route::Unknown, _) => Access::Redirect("/home"),
        (r, true) if r.is_public() => Access::Redirect("/home"),
        (Route::Home, false) => Access::Redirect("/login"),
        _ => Access::Allow,
    }
}

/// Celebration popup for newly awarded badges
#[derive(Debug, Clone, Default)]
pub struct BadgePopup {
    badges: Vec<BadgeDefinition>,
    index: usize,
}

impl BadgePopup {
    /// Record a badge check result. Only a non-empty list opens the popup.
    pub fn record(&mut self, newly_awarded: Vec<BadgeDefinition>) {
        if newly_awarded.is_empty() {
            return;
        }
        self.badges = newly_awarded;
        self.index = 0;
    }

    pub fn is_open(&self) -> bool {
        !self.badges.is_empty()
    }

    pub fn current(&self) -> Option<&BadgeDefinition> {
        self.badges.get(self.index)
    }

    pub fn has_more(&self) -> bool {
        self.index + 1 < self.badges.len()
    }

    /// Move to the next badge; returns false on the last one
    pub fn advance(&mut self) -> bool {
        if self.has_more() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.badges.clear();
        self.index = 0;
    }
}
