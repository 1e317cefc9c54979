use std::rc::Rc;

use payloads::requests::FILTER_ALL;
use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{SearchConfig, SearchHookReturn, use_search};
use crate::State;

/// Dispute report list, searchable by reason text and filterable by
/// resolution status.
#[hook]
pub fn use_reports() -> SearchHookReturn<responses::Report> {
    let (state, _) = use_store::<State>();
    let client = Rc::new(state.api_client());

    use_search(
        SearchConfig {
            search_fields: vec!["reason"],
            ..SearchConfig::default()
        },
        &[("status", FILTER_ALL)],
        move |query| {
            let client = client.clone();
            async move { client.list_reports(&query).await }
        },
    )
}
