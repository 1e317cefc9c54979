use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub sublabel: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &Props) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-4 rounded-lg border \
                    border-neutral-200 dark:border-neutral-700">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {props.label.clone()}
            </p>
            <p class="text-2xl font-semibold text-neutral-900 \
                      dark:text-neutral-100">
                {props.value.clone()}
            </p>
            if let Some(sublabel) = &props.sublabel {
                <p class="text-xs text-neutral-500 dark:text-neutral-400 \
                          mt-1">
                    {sublabel.clone()}
                </p>
            }
        </div>
    }
}
