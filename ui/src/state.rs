use payloads::{APIClient, responses::AdminProfile};
use yewdux::prelude::*;

use crate::{auth, backend_address};

/// An authenticated staff session: the bearer token plus the profile it
/// belongs to. The token lives here (and in storage) rather than being read
/// ambiently on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: AdminProfile,
}

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(Session),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn profile(&self) -> Option<&AdminProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(session) => Some(&session.profile),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<String> {
        match &self.auth_state {
            AuthState::LoggedIn(session) => Some(session.token.clone()),
            _ => None,
        }
    }

    /// Construct an API client carrying the current session token.
    pub fn api_client(&self) -> APIClient {
        APIClient::new(backend_address(), self.token())
    }

    pub fn login(&mut self, session: Session) {
        auth::store_token(&session.token);
        self.auth_state = AuthState::LoggedIn(session);
    }

    pub fn logout(&mut self) {
        auth::clear_token();
        self.auth_state = AuthState::LoggedOut;
    }
}
