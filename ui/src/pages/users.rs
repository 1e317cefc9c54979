use payloads::requests::{FILTER_ALL, UpdateUserStatus};
use payloads::{UserId, UserStatus, responses};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::filter_select::FilterOption;
use crate::components::{
    FilterSelect, LoadMoreButton, SearchInput, StatusBadge, StatusKind,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_push_route, use_users};
use crate::utils::format_date;
use crate::{Route, State};

#[function_component]
pub fn UsersPage() -> Html {
    let users = use_users();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let push_route = use_push_route();

    let status_value = users
        .filters
        .get("status")
        .cloned()
        .unwrap_or_else(|| FILTER_ALL.to_string());

    let status_options = vec![
        FilterOption::new(FILTER_ALL, "All statuses"),
        FilterOption::new("active", "Active")
            .with_count(users.filter_counts.get("active").copied()),
        FilterOption::new("suspended", "Suspended")
            .with_count(users.filter_counts.get("suspended").copied()),
    ];

    let on_status_change = {
        let set_filter = users.set_filter.clone();
        Callback::from(move |value: String| {
            set_filter.emit(("status".to_string(), value));
        })
    };

    let on_toggle_status = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = users.refetch.clone();

        Callback::from(move |(user_id, status): (UserId, UserStatus)| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client
                    .update_user_status(
                        user_id,
                        &UpdateUserStatus { status },
                    )
                    .await
                {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(handle_client_error(&dispatch, err)),
                };

                match result {
                    Ok(user) => {
                        toast.success(format!(
                            "{} is now {}.",
                            user.name,
                            user.status.as_str()
                        ));
                        refetch.emit(());
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    html! {
        <div>
            <h1 class="text-2xl font-semibold mb-6">{"Users"}</h1>

            <div class="flex flex-wrap items-center gap-4 mb-6">
                <SearchInput
                    value={users.search_term.clone()}
                    on_change={users.set_search_term.clone()}
                    placeholder="Search by name or email..."
                />
                <FilterSelect
                    label="Status"
                    value={status_value}
                    options={status_options}
                    on_change={on_status_change}
                />
            </div>

            if let Some(error) = &users.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }

            if users.items.is_empty() && users.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading users..."}
                    </p>
                </div>
            } else if users.items.is_empty() && users.error.is_none() {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"No users match the current search."}
                    </p>
                </div>
            } else {
                <div class="space-y-3">
                    {users.items.iter().map(|user| {
                        user_row(user, &push_route, &on_toggle_status)
                    }).collect::<Html>()}
                </div>
            }

            <LoadMoreButton
                shown={users.items.len()}
                total={users.total}
                has_more={users.has_more}
                is_loading={users.is_loading}
                on_load_more={users.load_more.clone()}
            />
        </div>
    }
}

fn user_row(
    user: &responses::User,
    push_route: &Callback<Route>,
    on_toggle_status: &Callback<(UserId, UserStatus)>,
) -> Html {
    let next_status = match user.status {
        UserStatus::Active => UserStatus::Suspended,
        UserStatus::Suspended => UserStatus::Active,
    };
    let action_label = match user.status {
        UserStatus::Active => "Suspend",
        UserStatus::Suspended => "Unsuspend",
    };

    let on_view = {
        let push_route = push_route.clone();
        let user_id = user.id;
        Callback::from(move |_: MouseEvent| {
            push_route.emit(Route::UserDetail { id: user_id.0 });
        })
    };

    let on_toggle = {
        let on_toggle_status = on_toggle_status.clone();
        let user_id = user.id;
        Callback::from(move |_: MouseEvent| {
            on_toggle_status.emit((user_id, next_status));
        })
    };

    html! {
        <div
            key={user.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700"
        >
            <div class="flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <div class="w-8 h-8 bg-neutral-200 dark:bg-neutral-600 \
                                rounded-full flex items-center \
                                justify-center">
                        <span class="text-sm font-medium text-neutral-600 \
                                     dark:text-neutral-300">
                            {user.name.chars().next().unwrap_or('?')
                                .to_uppercase().to_string()}
                        </span>
                    </div>
                    <div>
                        <p class="font-medium">{&user.name}</p>
                        <p class="text-sm text-neutral-500 \
                                  dark:text-neutral-400">
                            {&user.email}
                        </p>
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-neutral-500 \
                                 dark:text-neutral-400 hidden sm:inline">
                        {format!(
                            "{} books · {} borrows · joined {}",
                            user.books_listed,
                            user.borrows_count,
                            format_date(&user.created_at)
                        )}
                    </span>
                    <StatusBadge status={StatusKind::from(user.status)} />
                    <button
                        onclick={on_view}
                        class="text-sm font-medium underline"
                    >
                        {"View"}
                    </button>
                    <button
                        onclick={on_toggle}
                        class="text-sm font-medium underline \
                               text-red-700 dark:text-red-400"
                    >
                        {action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
