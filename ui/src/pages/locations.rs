use payloads::requests::{CreateLocation, UpdateLocation};
use payloads::responses::Location;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::use_toast;
use crate::hooks::{handle_client_error, use_locations};
use crate::State;

#[function_component]
pub fn LocationsPage() -> Html {
    let locations = use_locations();
    let editing = use_state(|| None::<Location>);
    let creating = use_state(|| false);

    let on_saved = {
        let refetch = locations.refetch.clone();
        let editing = editing.clone();
        let creating = creating.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            creating.set(false);
            refetch.emit(());
        })
    };

    let on_close = {
        let editing = editing.clone();
        let creating = creating.clone();
        Callback::from(move |_: ()| {
            editing.set(None);
            creating.set(false);
        })
    };

    let on_new = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    html! {
        <div>
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-semibold">{"Pickup locations"}</h1>
                <button
                    onclick={on_new}
                    class="px-4 py-2 bg-neutral-900 dark:bg-neutral-100 \
                           text-white dark:text-neutral-900 rounded-md \
                           text-sm font-medium"
                >
                    {"Add location"}
                </button>
            </div>

            {locations.render("locations", |list, _, _| {
                let editing = editing.clone();
                html! {
                    <div class="space-y-3">
                        {list.iter().map(|location| {
                            let on_edit = {
                                let editing = editing.clone();
                                let location = location.clone();
                                Callback::from(move |_: MouseEvent| {
                                    editing.set(Some(location.clone()));
                                })
                            };
                            location_row(location, on_edit)
                        }).collect::<Html>()}
                    </div>
                }
            })}

            if *creating {
                <Modal on_close={on_close.clone()}>
                    <LocationForm
                        existing={None::<Location>}
                        on_close={on_close.clone()}
                        on_saved={on_saved.clone()}
                    />
                </Modal>
            } else if let Some(location) = (*editing).clone() {
                <Modal on_close={on_close.clone()}>
                    <LocationForm
                        existing={Some(location)}
                        on_close={on_close.clone()}
                        on_saved={on_saved.clone()}
                    />
                </Modal>
            }
        </div>
    }
}

fn location_row(location: &Location, on_edit: Callback<MouseEvent>) -> Html {
    html! {
        <div
            key={location.id.0}
            class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                   border-neutral-200 dark:border-neutral-700 flex \
                   justify-between items-center"
        >
            <div>
                <p class="font-medium">{&location.name}</p>
                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                    {format!(
                        "{}, {} · {} books",
                        location.address, location.city,
                        location.books_count
                    )}
                </p>
            </div>
            <div class="flex items-center gap-4">
                if !location.is_active {
                    <span class="text-sm text-neutral-500 \
                                 dark:text-neutral-400">
                        {"Inactive"}
                    </span>
                }
                <button
                    onclick={on_edit}
                    class="text-sm font-medium underline"
                >
                    {"Edit"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationFormProps {
    existing: Option<Location>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

/// Shared create/edit form. Activation is only editable for existing
/// locations; new ones start active server-side.
#[function_component]
fn LocationForm(props: &LocationFormProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let name = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|l| l.name.clone())
            .unwrap_or_default()
    });
    let address = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|l| l.address.clone())
            .unwrap_or_default()
    });
    let city = use_state(|| {
        props
            .existing
            .as_ref()
            .map(|l| l.city.clone())
            .unwrap_or_default()
    });
    let is_active = use_state(|| {
        props.existing.as_ref().map(|l| l.is_active).unwrap_or(true)
    });
    let submitting = use_state(|| false);

    let text_input = |setter: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        })
    };

    let on_active_change = {
        let is_active = is_active.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            is_active.set(input.checked());
        })
    };

    let onsubmit = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let existing_id = props.existing.as_ref().map(|l| l.id);
        let name = name.clone();
        let address = address.clone();
        let city = city.clone();
        let is_active = is_active.clone();
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
            let name = (*name).clone();
            let address = (*address).clone();
            let city = (*city).clone();
            let is_active = *is_active;
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();

            submitting.set(true);
            yew::platform::spawn_local(async move {
                let result = match existing_id {
                    Some(location_id) => {
                        let body = UpdateLocation {
                            name,
                            address,
                            city,
                            is_active,
                        };
                        match client.update_location(location_id, &body).await
                        {
                            Ok(envelope) => envelope.into_data(),
                            Err(err) => {
                                Err(handle_client_error(&dispatch, err))
                            }
                        }
                    }
                    None => {
                        let body = CreateLocation { name, address, city };
                        match client.create_location(&body).await {
                            Ok(envelope) => envelope.into_data(),
                            Err(err) => {
                                Err(handle_client_error(&dispatch, err))
                            }
                        }
                    }
                };

                submitting.set(false);
                match result {
                    Ok(location) => {
                        toast.success(format!("Saved \"{}\".", location.name));
                        on_saved.emit(());
                    }
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
            <h2 class="text-lg font-semibold mb-4">
                {if props.existing.is_some() {
                    "Edit location"
                } else {
                    "Add location"
                }}
            </h2>
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
                    {"Address"}
                    <input
                        type="text"
                        value={(*address).clone()}
                        oninput={text_input(address.clone())}
                        required=true
                        class={field_class}
                    />
                </label>
                <label class="block text-sm">
                    {"City"}
                    <input
                        type="text"
                        value={(*city).clone()}
                        oninput={text_input(city.clone())}
                        required=true
                        class={field_class}
                    />
                </label>
                if props.existing.is_some() {
                    <label class="flex items-center gap-2 text-sm">
                        <input
                            type="checkbox"
                            checked={*is_active}
                            onchange={on_active_change}
                        />
                        {"Active"}
                    </label>
                }
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
                    {if *submitting { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
