use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::BRAND_NAME;

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Properties", Route::Properties),
    ("Contact", Route::Contact),
];

#[function_component]
pub fn Header() -> Html {
    let route = use_route::<Route>();

    html! {
        <header class="bg-white dark:bg-slate-800 border-b border-slate-200
                       dark:border-slate-700 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home}>
                            <h1 class="text-xl font-semibold text-slate-900
                                       dark:text-white">
                                {BRAND_NAME}
                            </h1>
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-4">
                        {NAV_ITEMS.iter().map(|(name, target)| {
                            let is_active = route.as_ref() == Some(target);
                            let class = if is_active {
                                "px-3 py-2 text-sm font-medium text-blue-600
                                 dark:text-blue-400"
                            } else {
                                "px-3 py-2 text-sm font-medium text-slate-600
                                 dark:text-slate-300 hover:text-blue-600
                                 dark:hover:text-blue-400 transition-colors"
                            };
                            html! {
                                <Link<Route> to={target.clone()} classes={class}>
                                    {*name}
                                </Link<Route>>
                            }
                        }).collect::<Html>()}
                        <Link<Route>
                            to={Route::AdminDashboard}
                            classes="px-3 py-2 text-sm font-medium rounded-md
                                     text-white bg-slate-900 hover:bg-slate-700
                                     dark:bg-slate-100 dark:text-slate-900
                                     dark:hover:bg-slate-200 transition-colors"
                        >
                            {"Admin"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
