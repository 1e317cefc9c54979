use payloads::{APIClient, requests};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::{Route, Session, State, backend_address};

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    // Redirect to the dashboard if already signed in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Dashboard);
            }
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let credentials = requests::LoginCredentials {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error.set(None);

                // No session yet, so the client carries no token.
                let client = APIClient::new(backend_address(), None);
                let result = match client.login(&credentials).await {
                    Ok(envelope) => envelope.into_data(),
                    Err(err) => Err(err.to_string()),
                };

                match result {
                    Ok(data) => {
                        dispatch.reduce_mut(|state| {
                            state.login(Session {
                                token: data.token,
                                profile: data.admin,
                            });
                        });
                        navigator.push(&Route::Dashboard);
                    }
                    Err(message) => {
                        error.set(Some(message));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-white \
                    dark:bg-neutral-900 text-neutral-900 \
                    dark:text-neutral-100">
            <div class="max-w-md w-full space-y-4 p-6">
                <div class="text-center">
                    <h1 class="text-2xl font-semibold">
                        {"Shelfshare Admin"}
                    </h1>
                    <p class="text-sm text-neutral-600 \
                              dark:text-neutral-400 mt-1">
                        {"Sign in with your staff account"}
                    </p>
                </div>

                if let Some(message) = &*error {
                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 \
                                border border-red-200 dark:border-red-800 \
                                text-sm text-red-700 dark:text-red-400">
                        {message}
                    </div>
                }

                <form {onsubmit} class="space-y-3">
                    <input
                        type="email"
                        required=true
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email}
                        class="w-full px-3 py-2 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md bg-white \
                               dark:bg-neutral-800 text-sm"
                    />
                    <input
                        type="password"
                        required=true
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password}
                        class="w-full px-3 py-2 border border-neutral-300 \
                               dark:border-neutral-600 rounded-md bg-white \
                               dark:bg-neutral-800 text-sm"
                    />
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full px-4 py-2 rounded-md bg-neutral-900 \
                               text-white dark:bg-neutral-100 \
                               dark:text-neutral-900 text-sm font-medium \
                               disabled:opacity-50"
                    >
                        {if *is_submitting { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
