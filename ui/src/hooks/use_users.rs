use std::rc::Rc;

use payloads::requests::FILTER_ALL;
use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{SearchConfig, SearchHookReturn, use_search};
use crate::State;

/// Searchable, filterable user list. Matches name and email; filterable by
/// moderation status.
#[hook]
pub fn use_users() -> SearchHookReturn<responses::User> {
    let (state, _) = use_store::<State>();
    let client = Rc::new(state.api_client());

    use_search(
        SearchConfig {
            search_fields: vec!["name", "email"],
            ..SearchConfig::default()
        },
        &[("status", FILTER_ALL)],
        move |query| {
            let client = client.clone();
            async move { client.list_users(&query).await }
        },
    )
}
