use yew::prelude::*;

use crate::content::SERVICES;

#[function_component]
pub fn ServicesSection() -> Html {
    html! {
        <section class="py-16 px-4 bg-slate-50 dark:bg-slate-800">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-slate-800 dark:text-white
                           text-center mb-12">
                    {"Our Services"}
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3
                            gap-8">
                    {SERVICES.iter().map(|service| html! {
                        <div class="bg-white dark:bg-slate-900 rounded-2xl
                                    shadow-md hover:shadow-xl transition-all
                                    p-6 flex flex-col">
                            <div class="text-4xl mb-4">{service.icon}</div>
                            <h3 class="text-lg font-semibold text-slate-800
                                       dark:text-white mb-2">
                                {service.title}
                            </h3>
                            <p class="text-sm text-slate-600
                                      dark:text-slate-400 mb-4">
                                {service.description}
                            </p>
                            <ul class="text-sm text-slate-500
                                       dark:text-slate-400 space-y-1 mt-auto">
                                {service.features.iter().map(|feature| html! {
                                    <li>{format!("• {feature}")}</li>
                                }).collect::<Html>()}
                            </ul>
                        </div>
                    }).collect::<Html>()}
                </div>
            </div>
        </section>
    }
}
