use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Navigation callback that also resets the scroll position, so a detail
/// page opened from deep in a loaded-more list starts at the top.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator().expect("not inside a router");

    Callback::from(move |route: Route| {
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
