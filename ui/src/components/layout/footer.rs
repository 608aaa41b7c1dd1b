use yew::prelude::*;

use crate::content::{
    BRAND_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE,
};

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="bg-slate-900 text-slate-300 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10
                        grid grid-cols-1 sm:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-white font-semibold mb-2">{BRAND_NAME}</h3>
                    <p class="text-sm text-slate-400">
                        {"Real estate investment opportunities across Nepal."}
                    </p>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-2">{"Contact"}</h3>
                    <p class="text-sm">{CONTACT_PHONE}</p>
                    <p class="text-sm">{CONTACT_EMAIL}</p>
                    <p class="text-sm text-slate-400">{CONTACT_ADDRESS}</p>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-2">{"Office Hours"}</h3>
                    <p class="text-sm">{"Sunday - Friday, 9:00 - 18:00"}</p>
                </div>
            </div>
            <div class="border-t border-slate-800 py-4 text-center text-xs
                        text-slate-500">
                {format!("© 2025 {BRAND_NAME}. All rights reserved.")}
            </div>
        </footer>
    }
}
