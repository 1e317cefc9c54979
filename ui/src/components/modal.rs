use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A reusable modal that closes on backdrop clicks.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    /// Called when the user clicks the backdrop or closes the modal
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            // Only close when the backdrop itself was clicked, not a child.
            let target = e.target();
            let backdrop = backdrop_ref.get();

            if let (Some(target), Some(backdrop)) = (target, backdrop)
                && let Ok(element) = target.dyn_into::<web_sys::Element>()
                && element.is_same_node(Some(&backdrop))
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 z-50 flex items-center justify-center \
                   bg-black/50 p-4"
        >
            <div class={format!(
                "w-full {} bg-white dark:bg-neutral-800 rounded-lg \
                 shadow-xl p-6",
                props.max_width
            )}>
                {props.children.clone()}
            </div>
        </div>
    }
}
