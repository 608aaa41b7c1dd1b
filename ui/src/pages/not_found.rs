use yew::prelude::*;

use crate::content::BRAND_NAME;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title(&format!("Not Found - {BRAND_NAME}"));

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-slate-900 dark:text-white">
                    {"404"}
                </h1>
                <p class="text-slate-600 dark:text-slate-300">
                    {"Page not found"}
                </p>
            </div>
        </main>
    }
}
