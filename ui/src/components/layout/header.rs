use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::use_store;

use crate::hooks::use_logout;
use crate::{Route, State};

const NAV_ITEMS: &[(&str, Route)] = &[
    ("Dashboard", Route::Dashboard),
    ("Users", Route::Users),
    ("Books", Route::Books),
    ("Borrows", Route::Borrows),
    ("Locations", Route::Locations),
    ("Reports", Route::Reports),
    ("Admins", Route::Admins),
];

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let on_logout = use_logout();
    let current = use_route::<Route>();

    let nav_link_class = |route: &Route| {
        if current.as_ref() == Some(route) {
            "px-3 py-2 rounded-md text-sm font-medium bg-neutral-900 \
             text-white dark:bg-neutral-100 dark:text-neutral-900"
        } else {
            "px-3 py-2 rounded-md text-sm font-medium text-neutral-600 \
             dark:text-neutral-300 hover:bg-neutral-100 \
             dark:hover:bg-neutral-800"
        }
    };

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex \
                        items-center justify-between h-16">
                <div class="flex items-center gap-6">
                    <Link<Route>
                        to={Route::Dashboard}
                        classes="text-lg font-semibold"
                    >
                        {"Shelfshare Admin"}
                    </Link<Route>>
                    if state.is_authenticated() {
                        <nav class="hidden md:flex items-center gap-1">
                            {NAV_ITEMS.iter().map(|(label, route)| html! {
                                <Link<Route>
                                    key={*label}
                                    to={route.clone()}
                                    classes={nav_link_class(route)}
                                >
                                    {*label}
                                </Link<Route>>
                            }).collect::<Html>()}
                        </nav>
                    }
                </div>
                if let Some(profile) = state.profile() {
                    <div class="flex items-center gap-3">
                        <span class="text-sm text-neutral-600 \
                                     dark:text-neutral-400">
                            {&profile.name}
                        </span>
                        <button
                            onclick={on_logout}
                            class="px-3 py-2 rounded-md text-sm font-medium \
                                   text-neutral-600 dark:text-neutral-300 \
                                   hover:bg-neutral-100 \
                                   dark:hover:bg-neutral-800"
                        >
                            {"Sign out"}
                        </button>
                    </div>
                }
            </div>
        </header>
    }
}
