use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Number of items currently shown
    pub shown: usize,
    /// Server-reported total across all pages
    pub total: u64,
    pub has_more: bool,
    pub is_loading: bool,
    pub on_load_more: Callback<()>,
}

/// Incremental pagination footer: shows the loaded/total window and a
/// "Load more" action while the server reports further pages.
#[function_component]
pub fn LoadMoreButton(props: &Props) -> Html {
    if props.shown == 0 {
        return html! {};
    }

    let onclick = {
        let on_load_more = props.on_load_more.clone();
        Callback::from(move |_: MouseEvent| on_load_more.emit(()))
    };

    html! {
        <div class="flex flex-col items-center gap-2 mt-4 pt-4 border-t \
                    border-neutral-200 dark:border-neutral-700">
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Showing {} of {}", props.shown, props.total)}
            </span>
            if props.has_more {
                <button
                    {onclick}
                    disabled={props.is_loading}
                    class="px-4 py-2 border border-neutral-300 \
                           dark:border-neutral-600 rounded-md text-sm \
                           font-medium text-neutral-700 \
                           dark:text-neutral-300 bg-white \
                           dark:bg-neutral-700 hover:bg-neutral-50 \
                           dark:hover:bg-neutral-600 transition-colors \
                           duration-200 disabled:opacity-50 \
                           disabled:cursor-not-allowed"
                >
                    {if props.is_loading { "Loading..." } else { "Load more" }}
                </button>
            }
        </div>
    }
}
