use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: String,
    /// Fired on every keystroke; debouncing happens in the search hook.
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
}

#[function_component]
pub fn SearchInput(props: &Props) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type="text"
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            {oninput}
            class="w-full max-w-sm px-3 py-2 border border-neutral-300 \
                   dark:border-neutral-600 rounded-md bg-white \
                   dark:bg-neutral-800 text-sm text-neutral-900 \
                   dark:text-neutral-100 placeholder-neutral-400 \
                   focus:outline-none focus:ring-2 focus:ring-neutral-500"
        />
    }
}
