use payloads::AdminId;
use payloads::requests::CreateAdmin;
use payloads::responses::Admin;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_admins};
use crate::utils::format_date;
use crate::State;

#[function_component]
pub fn AdminsPage() -> Html {
    let admins = use_admins();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let creating = use_state(|| false);

    let own_id = state.profile().map(|profile| profile.id);

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    let on_close = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };

    let on_saved = {
        let creating = creating.clone();
        let refetch = admins.refetch.clone();
        Callback::from(move |_: ()| {
            creating.set(false);
            refetch.emit(());
        })
    };

    let on_delete = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let refetch = admins.refetch.clone();

        Callback::from(move |admin_id: AdminId| {
            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                match client.delete_admin(admin_id).await {
                    Ok(_) => {
                        toast.success("Admin account removed.");
                        refetch.emit(());
                    }
                    Err(err) => {
                        toast.error(handle_client_error(&dispatch, err));
                    }
                }
            });
        })
    };

    html! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{"Admin accounts"}</h1>
                <button
                    onclick={on_new}
                    class="px-4 py-2 bg-neutral-900 dark:bg-neutral-100 \
                           text-white dark:text-neutral-900 rounded-md \
                           text-sm font-medium"
                >
                    {"Add admin"}
                </button>
            </div>

            {admins.render("admin accounts", |list, _, _| html! {
                <div class="space-y-3">
                    {list.iter().map(|admin| {
                        admin_row(admin, own_id, &on_delete)
                    }).collect::<Html>()}
                </div>
            })}

            if *creating {
                <Modal on_close={on_close.clone()}>
                    <CreateAdminForm
                        on_close={on_close.clone()}
                        on_saved={on_saved.clone()}
                    />
                </Modal>
            }
        </div>
    }
}

fn admin_row(
    admin: &Admin,
    own_id: Option<AdminId>,
    on_delete: &Callback<AdminId>,
) -> Html {
    let is_self = own_id == Some(admin.id);

    let onclick = {
        let on_delete = on_delete.clone();
        let admin_id = admin.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(admin_id))
    };

    html! {
        <div
            key={admin.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700 flex \
                   justify-between items-center"
        >
            <div>
                <p class="font-medium">{&admin.name}</p>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!(
                        "{} · added {}",
                        admin.email,
                        format_date(&admin.created_at)
                    )}
                </p>
            </div>
            if is_self {
                <span class="text-sm text-neutral-500 \
                             dark:text-neutral-400">
                    {"You"}
                </span>
            } else {
                <button
                    {onclick}
                    class="text-sm font-medium underline text-red-700 \
                           dark:text-red-400"
                >
                    {"Remove"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CreateAdminFormProps {
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component]
fn CreateAdminForm(props: &CreateAdminFormProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let text_input = |setter: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let client = state.api_client();
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            let body = CreateAdmin {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();

            submitting.set(true);
            yew::platform::spawn_local(async move {
                let result = match client.create_admin(&body).await {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(handle_client_error(&dispatch, err)),
                };

                submitting.set(false);
                match result {
                    Ok(admin) => {
                        toast.success(format!(
                            "Added admin {}.",
                            admin.name
                        ));
                        on_saved.emit(());
                    }
                    // Validation messages (duplicate email, weak password)
                    // come back verbatim from the server.
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let field_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800 text-sm";

    html! {
        <form {onsubmit}>
            <h2 class="text-lg font-semibold mb-4">{"Add admin"}</h2>
            <div class="space-y-4">
                <label class="block text-sm">
                    {"Name"}
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={text_input(name.clone())}
                        required=true
                        class={field_class}
                    />
                </label>
                <label class="block text-sm">
                    {"Email"}
                    <input
                        type="email"
                        value={(*email).clone()}
                        oninput={text_input(email.clone())}
                        required=true
                        class={field_class}
                    />
                </label>
                <label class="block text-sm">
                    {"Password"}
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={text_input(password.clone())}
                        required=true
                        class={field_class}
                    />
                </label>
            </div>
            <div class="flex justify-end gap-3 mt-6">
                <button
                    type="button"
                    onclick={on_cancel}
                    class="px-4 py-2 text-sm font-medium"
                >
                    {"Cancel"}
                </button>
                <button
                    type="submit"
                    disabled={*submitting}
                    class="px-4 py-2 bg-neutral-900 dark:bg-neutral-100 \
                           text-white dark:text-neutral-900 rounded-md \
                           text-sm font-medium disabled:opacity-50"
                >
                    {if *submitting { "Creating..." } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
