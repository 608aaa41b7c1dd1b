use yew::prelude::*;

use crate::components::ContactForm;
use crate::content::{BRAND_NAME, CONTACT_EMAIL, CONTACT_PHONE};
use crate::hooks::use_title;

#[function_component]
pub fn ContactPage() -> Html {
    use_title(&format!("Contact - {BRAND_NAME}"));

    html! {
        <section class="py-16 px-4">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl font-bold text-slate-800 dark:text-white
                           text-center mb-4">
                    {"Start Your Investment Journey"}
                </h2>
                <p class="text-slate-600 dark:text-slate-300 text-center mb-4">
                    {"Tell us what you're looking for and an advisor will \
                      reach out within 24 hours."}
                </p>
                <p class="text-sm text-slate-500 text-center mb-10">
                    {format!("Prefer to talk? {CONTACT_PHONE} · {CONTACT_EMAIL}")}
                </p>
                <div class="bg-white dark:bg-slate-800 p-8 rounded-2xl
                            shadow-lg">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
