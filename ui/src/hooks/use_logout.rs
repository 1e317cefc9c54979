use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, State};

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (state, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            // Best effort; the local session is cleared regardless.
            let client = state.api_client();
            let _ = client.logout().await;

            dispatch.reduce_mut(|state| state.logout());
            navigator.push(&Route::Login);
        });
    })
}
