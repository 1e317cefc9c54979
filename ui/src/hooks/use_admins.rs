use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, handle_client_error, use_fetch};
use crate::State;

#[hook]
pub fn use_admins() -> FetchHookReturn<Vec<responses::Admin>> {
    let (state, dispatch) = use_store::<State>();

    use_fetch((), move || {
        let client = state.api_client();
        let dispatch = dispatch.clone();
        async move {
            match client.list_admins().await {
                Ok(envelope) => envelope.into_data(),
                Err(err) => Err(handle_client_error(&dispatch, err)),
            }
        }
    })
}
