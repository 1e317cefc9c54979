use std::rc::Rc;

use payloads::requests::FILTER_ALL;
use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{SearchConfig, SearchHookReturn, use_search};
use crate::State;

/// Searchable book list. Matches title and author; filterable by
/// availability, genre, and moderation status.
#[hook]
pub fn use_books() -> SearchHookReturn<responses::Book> {
    let (state, _) = use_store::<State>();
    let client = Rc::new(state.api_client());

    use_search(
        SearchConfig {
            search_fields: vec!["title", "author"],
            ..SearchConfig::default()
        },
        &[
            ("availability", FILTER_ALL),
            ("genre", FILTER_ALL),
            ("status", FILTER_ALL),
        ],
        move |query| {
            let client = client.clone();
            async move { client.list_books(&query).await }
        },
    )
}
