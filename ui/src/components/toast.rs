use yew::prelude::*;

use crate::contexts::toast::{ToastContext, ToastType, use_toast};

/// Fixed-position stack rendering the active toasts.
#[function_component]
pub fn ToastContainer() -> Html {
    let context = use_context::<ToastContext>()
        .expect("ToastContainer must be used within a ToastProvider");
    let toast_handle = use_toast();

    if context.toasts.is_empty() {
        return html! {};
    }

    let mut toasts: Vec<_> = context.toasts.values().cloned().collect();
    // HashMap ordering is arbitrary; newest toasts belong at the bottom.
    toasts.sort_by_key(|toast| toast.seq);

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 \
                    max-w-sm">
            {toasts.into_iter().map(|toast| {
                let accent = match toast.toast_type {
                    ToastType::Error => "border-red-400 bg-red-50 \
                                         dark:bg-red-900/30 text-red-800 \
                                         dark:text-red-200",
                    ToastType::Success => "border-green-400 bg-green-50 \
                                           dark:bg-green-900/30 \
                                           text-green-800 \
                                           dark:text-green-200",
                    ToastType::Info => "border-blue-400 bg-blue-50 \
                                        dark:bg-blue-900/30 text-blue-800 \
                                        dark:text-blue-200",
                };
                let on_dismiss = {
                    let toast_handle = toast_handle.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| {
                        toast_handle.remove(id);
                    })
                };

                html! {
                    <div
                        key={toast.id.to_string()}
                        class={format!(
                            "flex items-start justify-between gap-3 p-3 \
                             rounded-md border shadow-md text-sm {}", accent
                        )}
                    >
                        <span>{&toast.message}</span>
                        <button
                            onclick={on_dismiss}
                            class="font-bold opacity-60 hover:opacity-100"
                        >
                            {"×"}
                        </button>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
