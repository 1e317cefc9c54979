use payloads::{UserId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, handle_client_error, use_fetch};
use crate::State;

#[hook]
pub fn use_user(user_id: UserId) -> FetchHookReturn<responses::User> {
    let (state, dispatch) = use_store::<State>();

    use_fetch(user_id, move || {
        let client = state.api_client();
        let dispatch = dispatch.clone();
        async move {
            match client.get_user(user_id).await {
                Ok(envelope) => envelope.into_data(),
                Err(err) => Err(handle_client_error(&dispatch, err)),
            }
        }
    })
}
