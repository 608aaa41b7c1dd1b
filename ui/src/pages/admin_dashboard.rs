use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::content::BRAND_NAME;
use crate::hooks::{use_stats, use_title};

const QUICK_ACTIONS: [(&str, &str, Route); 3] = [
    ("➕", "Add New Property", Route::AdminAddProperty),
    ("🏘️", "Manage Properties", Route::AdminProperties),
    ("🏷️", "Manage Categories", Route::AdminCategories),
];

#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title(&format!("Dashboard - {BRAND_NAME}"));

    let stats_hook = use_stats();

    html! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="mb-12">
                <h1 class="text-4xl font-bold text-slate-800 dark:text-white
                           mb-3">
                    {"Welcome Back, Admin"}
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-400">
                    {"Manage your properties, categories, and settings."}
                </p>
            </div>

            {stats_hook.render("stats", |stats, _is_loading, _error| html! {
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-12">
                    <div class="bg-white dark:bg-slate-800 rounded-2xl
                                shadow-lg p-8">
                        <div class="text-2xl mb-4">{"🏠"}</div>
                        <h2 class="text-5xl font-bold text-slate-800
                                   dark:text-white mb-2">
                            {stats.total_properties}
                        </h2>
                        <p class="text-slate-500 font-medium">
                            {"Properties Listed"}
                        </p>
                        <div class="mt-4 pt-4 border-t border-slate-100
                                    dark:border-slate-700">
                            <Link<Route>
                                to={Route::AdminProperties}
                                classes="text-sm text-blue-600 font-semibold
                                         hover:text-blue-700"
                            >
                                {"View all →"}
                            </Link<Route>>
                        </div>
                    </div>

                    <div class="bg-white dark:bg-slate-800 rounded-2xl
                                shadow-lg p-8">
                        <div class="text-2xl mb-4">{"📂"}</div>
                        <h2 class="text-5xl font-bold text-slate-800
                                   dark:text-white mb-2">
                            {stats.total_categories}
                        </h2>
                        <p class="text-slate-500 font-medium">
                            {"Categories Available"}
                        </p>
                        <div class="mt-4 pt-4 border-t border-slate-100
                                    dark:border-slate-700">
                            <Link<Route>
                                to={Route::AdminCategories}
                                classes="text-sm text-amber-600 font-semibold
                                         hover:text-amber-700"
                            >
                                {"View all →"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            })}

            <h2 class="text-2xl font-bold text-slate-800 dark:text-white mb-6">
                {"Quick Actions"}
            </h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {QUICK_ACTIONS.iter().map(|(icon, label, target)| html! {
                    <Link<Route>
                        to={target.clone()}
                        classes="rounded-xl shadow-lg p-6 flex items-center
                                 gap-4 bg-white dark:bg-slate-800
                                 hover:shadow-2xl transition-all"
                    >
                        <span class="text-3xl">{*icon}</span>
                        <span class="font-bold text-slate-800 dark:text-white">
                            {*label}
                        </span>
                    </Link<Route>>
                }).collect::<Html>()}
            </div>
        </div>
    }
}
