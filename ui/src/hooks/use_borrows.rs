use std::rc::Rc;

use payloads::requests::FILTER_ALL;
use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{SearchConfig, SearchHookReturn, use_search};
use crate::State;

/// Borrow activity list: no text search, but filterable by borrow status,
/// deposit status, and a from/to date range. Empty date bounds are omitted
/// from the request like the `"all"` sentinel.
#[hook]
pub fn use_borrows() -> SearchHookReturn<responses::BorrowActivity> {
    let (state, _) = use_store::<State>();
    let client = Rc::new(state.api_client());

    use_search(
        SearchConfig::default(),
        &[
            ("status", FILTER_ALL),
            ("deposit_status", FILTER_ALL),
            ("from", ""),
            ("to", ""),
        ],
        move |query| {
            let client = client.clone();
            async move { client.list_borrows(&query).await }
        },
    )
}
