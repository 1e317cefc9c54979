use payloads::ClientError;
use yewdux::prelude::*;

use crate::State;

pub mod search_state;
pub mod use_admins;
pub mod use_authentication;
pub mod use_book;
pub mod use_books;
pub mod use_borrows;
pub mod use_dashboard_stats;
pub mod use_fetch;
pub mod use_genres;
pub mod use_locations;
pub mod use_logout;
pub mod use_push_route;
pub mod use_reports;
pub mod use_require_auth;
pub mod use_search;
pub mod use_user;
pub mod use_users;

pub use use_admins::use_admins;
pub use use_authentication::use_authentication;
pub use use_book::use_book;
pub use use_books::use_books;
pub use use_borrows::use_borrows;
pub use use_dashboard_stats::use_dashboard_stats;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_genres::use_genres;
pub use use_locations::use_locations;
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_reports::use_reports;
pub use use_require_auth::use_require_auth;
pub use use_search::{SearchConfig, SearchHookReturn, use_search};
pub use use_user::use_user;
pub use use_users::use_users;

/// Distinguishes "not fetched yet" from "fetched but empty".
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(data) => Some(data),
            Self::NotFetched => None,
        }
    }
}

/// Convert a client failure into its display message, clearing the session
/// first when the backend rejected the token. Authorization failures are
/// handled by redirecting to login, never shown inline.
pub fn handle_client_error(
    dispatch: &Dispatch<State>,
    err: ClientError,
) -> String {
    if matches!(err, ClientError::Unauthorized) {
        dispatch.reduce_mut(|state| state.logout());
    }
    err.to_string()
}
