use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::BRAND_NAME;

#[function_component]
pub fn Hero() -> Html {
    html! {
        <section class="bg-gradient-to-br from-slate-900 via-slate-800
                        to-slate-700 py-24 px-4">
            <div class="max-w-5xl mx-auto text-center">
                <p class="text-blue-400 text-sm font-semibold mb-4
                          tracking-widest uppercase">
                    {BRAND_NAME}
                </p>
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold
                           text-white mb-6 leading-tight">
                    {"Your Gateway to "}
                    <span class="text-blue-400">
                        {"Profitable Real Estate"}
                    </span>
                </h1>
                <p class="text-slate-300 text-lg sm:text-xl mb-12 max-w-3xl
                          mx-auto leading-relaxed">
                    {"Discover exclusive real estate investment opportunities \
                      across residential, commercial, and luxury property \
                      markets. We specialize in high-yield properties with \
                      proven track records and exceptional growth potential."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<Route>
                        to={Route::Properties}
                        classes="px-8 py-4 bg-gradient-to-r from-blue-500
                                 to-indigo-600 text-white font-semibold
                                 rounded-full shadow-lg hover:shadow-xl
                                 transition-all"
                    >
                        {"Explore Properties"}
                    </Link<Route>>
                    <Link<Route>
                        to={Route::Contact}
                        classes="px-8 py-4 border border-slate-400 text-white
                                 font-semibold rounded-full
                                 hover:bg-slate-700 transition-all"
                    >
                        {"Talk to an Advisor"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
