use payloads::{BookId, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, handle_client_error, use_fetch};
use crate::State;

#[hook]
pub fn use_book(book_id: BookId) -> FetchHookReturn<responses::Book> {
    let (state, dispatch) = use_store::<State>();

    use_fetch(book_id, move || {
        let client = state.api_client();
        let dispatch = dispatch.clone();
        async move {
            match client.get_book(book_id).await {
                Ok(envelope) => envelope.into_data(),
                Err(err) => Err(handle_client_error(&dispatch, err)),
            }
        }
    })
}
