use yew::prelude::*;
use yewdux::use_store;

use crate::hooks::use_push_route;
use crate::{AuthState, Route, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Html,
}

/// Gate for staff-only pages: a spinner while the session is being checked,
/// a redirect to login when there is none.
#[function_component]
pub fn RequireAuth(props: &Props) -> Html {
    let (state, _) = use_store::<State>();
    let push_route = use_push_route();

    {
        let logged_out =
            matches!(state.auth_state, AuthState::LoggedOut);
        use_effect_with(logged_out, move |logged_out| {
            if *logged_out {
                push_route.emit(Route::Login);
            }
        });
    }

    match &state.auth_state {
        AuthState::LoggedIn(_) => props.children.clone(),
        AuthState::Unknown => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 \
                            border-2 border-neutral-900 \
                            dark:border-neutral-100 border-t-transparent \
                            dark:border-t-transparent"></div>
            </div>
        },
        AuthState::LoggedOut => html! {},
    }
}
