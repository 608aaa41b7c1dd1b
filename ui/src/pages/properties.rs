use payloads::catalog::{ALL_CATEGORIES, aggregate_categories, filter_by_category};
use yew::prelude::*;

use crate::components::{CategoryFilter, PropertyCard};
use crate::content::{BRAND_NAME, CONTACT_PHONE};
use crate::hooks::{use_properties, use_title};

/// Public listing: derived category filter bar over the canonical
/// property list.
#[function_component]
pub fn PropertiesPage() -> Html {
    use_title(&format!("Properties - {BRAND_NAME}"));

    let properties_hook = use_properties();
    let selected_category = use_state(|| ALL_CATEGORIES.to_string());

    let on_select = {
        let selected_category = selected_category.clone();
        Callback::from(move |token: String| selected_category.set(token))
    };

    let on_view_all = {
        let selected_category = selected_category.clone();
        Callback::from(move |_| {
            selected_category.set(ALL_CATEGORIES.to_string());
        })
    };

    let content = if properties_hook.is_initial_loading() {
        html! {
            <p class="text-center text-slate-400 py-12">
                {"Loading properties..."}
            </p>
        }
    } else if let Some(error) = &properties_hook.error {
        html! {
            <p class="text-center text-red-400 py-12">
                {format!("Error loading properties: {error}")}
            </p>
        }
    } else {
        let properties = properties_hook.properties.clone().unwrap_or_default();
        let categories = aggregate_categories(&properties);
        let filtered = filter_by_category(&properties, &selected_category);

        html! {
            <>
                <div class="mt-6">
                    <CategoryFilter
                        categories={categories}
                        selected={(*selected_category).clone()}
                        on_select={on_select}
                    />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3
                            gap-8 max-w-7xl mx-auto mt-12">
                    {filtered.into_iter().map(|property| html! {
                        <PropertyCard
                            key={property.id.to_string()}
                            property={property.clone()}
                        />
                    }).collect::<Html>()}
                </div>
            </>
        }
    };

    html! {
        <section class="bg-slate-800 py-16 px-4 min-h-screen">
            <div class="text-center max-w-3xl mx-auto">
                <h2 class="text-5xl font-extrabold text-white mb-4
                           leading-tight">
                    {"Discover Profitable "}
                    <span class="text-transparent bg-clip-text bg-gradient-to-r
                                 from-blue-400 to-blue-600">
                        {"Investment Properties"}
                    </span>
                    {" in Nepal"}
                </h2>
                <p class="text-slate-400 text-lg">
                    {"Handpicked real estate opportunities with high returns \
                      and growth potential — for both new and seasoned \
                      investors."}
                </p>
            </div>

            {content}

            <div class="mt-20 text-center">
                <h3 class="text-2xl font-bold text-white mb-2">
                    {"Ready to Invest?"}
                </h3>
                <p class="text-slate-400 max-w-xl mx-auto mb-6">
                    {"Schedule a call with our experts or view all available \
                      listings to get started."}
                </p>
                <div class="flex justify-center gap-4 flex-wrap">
                    <a
                        href={format!("tel:{CONTACT_PHONE}")}
                        class="bg-blue-600 text-white px-6 py-2 rounded-lg
                               hover:bg-blue-700 transition"
                    >
                        {"Make a Call"}
                    </a>
                    <button
                        onclick={on_view_all}
                        class="border border-slate-300 text-white px-6 py-2
                               rounded-lg hover:bg-slate-700 transition"
                    >
                        {"View All Properties"}
                    </button>
                </div>
            </div>
        </section>
    }
}
