use payloads::{APIClient, ClientError};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, Session, State, auth, backend_address};

/// Hook to restore the session on startup.
///
/// Reads the stored token once and validates it against the profile
/// endpoint. A rejected token is removed so the next start goes straight to
/// the login page; transport and server failures leave it in place.
#[hook]
pub fn use_authentication() {
    let (_, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(async move {
                let Some(token) = auth::load_token() else {
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::LoggedOut;
                    });
                    return;
                };

                let client =
                    APIClient::new(backend_address(), Some(token.clone()));
                match client.me().await.map(|envelope| envelope.into_data()) {
                    Ok(Ok(profile)) => {
                        dispatch.reduce_mut(|state| {
                            state.auth_state =
                                AuthState::LoggedIn(Session { token, profile });
                        });
                    }
                    Ok(Err(message)) => {
                        tracing::warn!(error = %message, "session check rejected");
                        dispatch.reduce_mut(|state| state.logout());
                    }
                    Err(err) if token_is_invalid(&err) => {
                        tracing::debug!(%err, "stored token rejected");
                        dispatch.reduce_mut(|state| state.logout());
                    }
                    Err(err) => {
                        tracing::warn!(%err, "session check failed");
                        // The token may still be good; keep it stored so
                        // the next start can retry the check.
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedOut;
                        });
                    }
                }
            });
        }
    });
}

/// Whether a failed session check proves the stored token is no longer
/// valid. Only an explicit authorization rejection does; a connectivity
/// blip or a backend outage says nothing about the token.
fn token_is_invalid(err: &ClientError) -> bool {
    matches!(err, ClientError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use payloads::api_client::StatusCode;

    use super::*;

    #[test]
    fn only_authorization_failures_invalidate_the_stored_token() {
        assert!(token_is_invalid(&ClientError::Unauthorized));
        assert!(!token_is_invalid(&ClientError::Server(
            StatusCode::BAD_GATEWAY
        )));
        assert!(!token_is_invalid(&ClientError::NotFound));
        assert!(!token_is_invalid(&ClientError::Api(
            StatusCode::TOO_MANY_REQUESTS,
            "Slow down.".to_string(),
        )));
    }
}
