use payloads::requests::UpdateUserStatus;
use payloads::responses::User;
use payloads::{UserId, UserStatus};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{StatusBadge, StatusKind};
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_push_route, use_user};
use crate::utils::format_date;
use crate::{Route, State};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_id: UserId,
}

#[function_component]
pub fn UserDetailPage(props: &Props) -> Html {
    let user = use_user(props.user_id);
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let push_route = use_push_route();

    let on_back = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| push_route.emit(Route::Users))
    };

    let on_toggle_status = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = user.refetch.clone();
        let user_id = props.user_id;

        Callback::from(move |next_status: UserStatus| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                let result = match client
                    .update_user_status(
                        user_id,
                        &UpdateUserStatus {
                            status: next_status,
                        },
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
            <button
                onclick={on_back}
                class="text-sm font-medium underline mb-4"
            >
                {"← Back to users"}
            </button>

            {user.render("user", |user, _, _| {
                profile_card(user, &state, &on_toggle_status)
            })}
        </div>
    }
}

fn profile_card(
    user: &User,
    state: &State,
    on_toggle_status: &Callback<UserStatus>,
) -> Html {
    let next_status = match user.status {
        UserStatus::Active => UserStatus::Suspended,
        UserStatus::Suspended => UserStatus::Active,
    };
    let action_label = match user.status {
        UserStatus::Active => "Suspend account",
        UserStatus::Suspended => "Unsuspend account",
    };

    let on_toggle = {
        let on_toggle_status = on_toggle_status.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_status.emit(next_status);
        })
    };

    let avatar = match &user.avatar {
        Some(path) => {
            let src = state.api_client().storage_url(path);
            html! {
                <img
                    src={src}
                    alt={user.name.clone()}
                    class="w-16 h-16 rounded-full object-cover"
                />
            }
        }
        None => html! {
            <div class="w-16 h-16 rounded-full bg-neutral-200 \
                        dark:bg-neutral-700 flex items-center \
                        justify-center text-xl font-semibold">
                {user.name.chars().next().unwrap_or('?')}
            </div>
        },
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg border \
                    border-neutral-200 dark:border-neutral-700 max-w-2xl">
            <div class="flex items-center gap-4 mb-6">
                {avatar}
                <div>
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold">{&user.name}</h1>
                        <StatusBadge
                            status={StatusKind::from(user.status)}
                        />
                    </div>
                    <p class="text-sm text-neutral-500 \
                              dark:text-neutral-400">
                        {&user.email}
                    </p>
                </div>
            </div>

            <dl class="grid grid-cols-3 gap-4 text-sm mb-6">
                <div>
                    <dt class="text-neutral-500 dark:text-neutral-400">
                        {"Books listed"}
                    </dt>
                    <dd class="font-medium">{user.books_listed}</dd>
                </div>
                <div>
                    <dt class="text-neutral-500 dark:text-neutral-400">
                        {"Borrows"}
                    </dt>
                    <dd class="font-medium">{user.borrows_count}</dd>
                </div>
                <div>
                    <dt class="text-neutral-500 dark:text-neutral-400">
                        {"Joined"}
                    </dt>
                    <dd class="font-medium">
                        {format_date(&user.created_at)}
                    </dd>
                </div>
            </dl>

            <button
                onclick={on_toggle}
                class="px-4 py-2 border border-red-300 dark:border-red-700 \
                       text-red-700 dark:text-red-400 rounded-md text-sm \
                       font-medium"
            >
                {action_label}
            </button>
        </div>
    }
}
