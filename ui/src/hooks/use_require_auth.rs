use payloads::responses::AdminProfile;
use yew::prelude::*;
use yewdux::use_store;

use crate::{AuthState, State};

/// Returns the signed-in staff profile, or None while the session is
/// unknown or logged out. Pages behind [`RequireAuth`] can rely on Some.
///
/// [`RequireAuth`]: crate::components::RequireAuth
#[hook]
pub fn use_require_auth() -> Option<AdminProfile> {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::LoggedIn(session) => Some(session.profile.clone()),
        AuthState::LoggedOut | AuthState::Unknown => None,
    }
}
