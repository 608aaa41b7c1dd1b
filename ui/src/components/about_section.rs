use yew::prelude::*;

use crate::content::BRAND_NAME;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Verified Listings",
        "Every property is vetted for clear title and legal standing \
         before it reaches our listings.",
    ),
    (
        "Local Expertise",
        "Our advisors live where you invest, with first-hand knowledge \
         of valuations and growth corridors.",
    ),
    (
        "Transparent Returns",
        "Published ROI figures come from actual rental and resale data, \
         not projections.",
    ),
];

#[function_component]
pub fn AboutSection() -> Html {
    html! {
        <section class="py-16 px-4 bg-white dark:bg-slate-900">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl font-bold text-slate-800 dark:text-white
                           text-center mb-4">
                    {format!("About {BRAND_NAME}")}
                </h2>
                <p class="text-slate-600 dark:text-slate-300 text-center
                          max-w-3xl mx-auto mb-12">
                    {"We connect investors with handpicked real estate \
                      opportunities in Nepal, from riverside land parcels to \
                      commercial floors in Kathmandu, and manage the \
                      acquisition end to end."}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {HIGHLIGHTS.iter().map(|(title, body)| html! {
                        <div class="p-6 rounded-2xl border border-slate-200
                                    dark:border-slate-700 shadow-sm">
                            <h3 class="font-semibold text-slate-800
                                       dark:text-white mb-2">
                                {*title}
                            </h3>
                            <p class="text-sm text-slate-600
                                      dark:text-slate-400">
                                {*body}
                            </p>
                        </div>
                    }).collect::<Html>()}
                </div>
            </div>
        </section>
    }
}
