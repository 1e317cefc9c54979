use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-2xl font-semibold mb-2">{"Page not found"}</h1>
            <p class="text-neutral-600 dark:text-neutral-400 mb-6">
                {"The page you were looking for doesn't exist."}
            </p>
            <Link<Route> to={Route::Dashboard} classes="underline font-medium">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
