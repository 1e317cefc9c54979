use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, handle_client_error, use_fetch};
use crate::State;

/// Genres populate the book filter options.
#[hook]
pub fn use_genres() -> FetchHookReturn<Vec<responses::Genre>> {
    let (state, dispatch) = use_store::<State>();

    use_fetch((), move || {
        let client = state.api_client();
        let dispatch = dispatch.clone();
        async move {
            match client.list_genres().await {
                Ok(envelope) => envelope.into_data(),
                Err(err) => Err(handle_client_error(&dispatch, err)),
            }
        }
    })
}
