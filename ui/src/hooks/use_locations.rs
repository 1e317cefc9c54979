use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, handle_client_error, use_fetch};
use crate::State;

/// Pickup locations are a short unfiltered list; no search layer needed.
#[hook]
pub fn use_locations() -> FetchHookReturn<Vec<responses::Location>> {
    let (state, dispatch) = use_store::<State>();

    use_fetch((), move || {
        let client = state.api_client();
        let dispatch = dispatch.clone();
        async move {
            match client.list_locations().await {
                Ok(envelope) => envelope.into_data(),
                Err(err) => Err(handle_client_error(&dispatch, err)),
            }
        }
    })
}
