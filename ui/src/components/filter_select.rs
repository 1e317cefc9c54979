use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// One option in a filter dropdown: submitted value, label, and an optional
/// server-reported bucket count.
#[derive(Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: Option<u64>,
}

impl FilterOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: Option<u64>) -> Self {
        self.count = count;
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub value: String,
    pub options: Vec<FilterOption>,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn FilterSelect(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700 \
                      dark:text-neutral-300">
            {props.label.clone()}
            <select
                value={props.value.clone()}
                {onchange}
                class="px-2 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-800 text-sm"
            >
                {props.options.iter().map(|option| {
                    let text = match option.count {
                        Some(count) => {
                            format!("{} ({})", option.label, count)
                        }
                        None => option.label.clone(),
                    };
                    html! {
                        <option
                            key={option.value.clone()}
                            value={option.value.clone()}
                            selected={option.value == props.value}
                        >
                            {text}
                        </option>
                    }
                }).collect::<Html>()}
            </select>
        </label>
    }
}
