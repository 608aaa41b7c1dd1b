use payloads::CategoryId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::BRAND_NAME;
use crate::hooks::{use_category, use_title};
use crate::{Route, utils::capitalize};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category_id: CategoryId,
}

/// Read-only listing of the properties in one category.
#[function_component]
pub fn AdminCategoryPropertiesPage(props: &Props) -> Html {
    use_title(&format!("Category - Admin - {BRAND_NAME}"));

    let navigator = use_navigator().unwrap();
    let category_hook = use_category(props.category_id);

    let content = category_hook.render(
        "category",
        move |category, _is_loading, _error| {
            let properties = category.properties.clone().unwrap_or_default();
            let navigator = navigator.clone();

            html! {
                <>
                    <h2 class="text-3xl font-bold text-slate-800
                               dark:text-white mb-6">
                        {format!("{} Properties", capitalize(&category.name))}
                    </h2>

                    if properties.is_empty() {
                        <p class="text-slate-500 py-8">
                            {"No properties in this category yet."}
                        </p>
                    } else {
                        <div class="overflow-x-auto bg-white
                                    dark:bg-slate-800 rounded-lg shadow">
                            <table class="min-w-full text-sm text-left">
                                <thead class="bg-slate-100 dark:bg-slate-700
                                              text-slate-700
                                              dark:text-slate-200">
                                    <tr>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Title"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Location"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Price"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"ROI"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Area"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Status"}
                                        </th>
                                        <th class="px-4 py-3 font-semibold">
                                            {"Actions"}
                                        </th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {properties.iter().map(|property| {
                                        let on_edit = {
                                            let navigator = navigator.clone();
                                            let id = property.id;
                                            Callback::from(move |_| {
                                                navigator.push(
                                                    &Route::AdminEditProperty {
                                                        id: id.0,
                                                    },
                                                );
                                            })
                                        };
                                        html! {
                                            <tr
                                                key={property.id.to_string()}
                                                class="border-t
                                                       border-slate-200
                                                       dark:border-slate-700"
                                            >
                                                <td class="px-4 py-3">
                                                    {&property.title}
                                                </td>
                                                <td class="px-4 py-3">
                                                    {&property.location}
                                                </td>
                                                <td class="px-4 py-3">
                                                    {format!(
                                                        "Nrs. {} per aana",
                                                        property.price
                                                    )}
                                                </td>
                                                <td class="px-4 py-3">
                                                    {format!(
                                                        "{}%",
                                                        property.roi
                                                    )}
                                                </td>
                                                <td class="px-4 py-3">
                                                    {format!(
                                                        "{} sq ft",
                                                        property.area
                                                    )}
                                                </td>
                                                <td class="px-4 py-3">
                                                    {property
                                                        .status
                                                        .to_string()}
                                                </td>
                                                <td class="px-4 py-3">
                                                    <button
                                                        onclick={on_edit}
                                                        class="text-blue-600
                                                               hover:text-blue-800"
                                                    >
                                                        {"Edit"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Html>()}
                                </tbody>
                            </table>
                        </div>
                    }
                </>
            }
        },
    );

    html! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <Link<Route>
                to={Route::AdminCategories}
                classes="text-sm text-blue-600 hover:text-blue-700"
            >
                {"← Back to categories"}
            </Link<Route>>
            <div class="mt-4">
                {content}
            </div>
        </div>
    }
}
