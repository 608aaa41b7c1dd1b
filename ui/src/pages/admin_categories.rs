use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ConfirmationModal;
use crate::content::BRAND_NAME;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_categories, use_title};
use crate::{Route, State, get_api_client};

#[function_component]
pub fn AdminCategoriesPage() -> Html {
    use_title(&format!("Categories - Admin - {BRAND_NAME}"));

    let navigator = use_navigator().unwrap();
    let categories_hook = use_categories();
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    let pending_delete = use_state(|| None::<responses::Category>);
    let is_deleting = use_state(|| false);

    let on_close_modal = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let on_confirm_delete = {
        let pending_delete = pending_delete.clone();
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |_| {
            let Some(category) = (*pending_delete).clone() else {
                return;
            };
            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);

                let api_client = get_api_client();
                match api_client.delete_category(&category.id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|state| {
                            state.remove_category(category.id);
                            // Embedded category names in the property list
                            // are stale now.
                            state.clear_properties();
                        });
                        toast.success("Category deleted successfully");
                        pending_delete.set(None);
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                    }
                }

                is_deleting.set(false);
            });
        })
    };

    let table = if categories_hook.is_initial_loading() {
        html! {
            <p class="text-center text-slate-500 py-12">
                {"Loading categories..."}
            </p>
        }
    } else if let Some(error) = &categories_hook.error {
        html! {
            <p class="text-center text-red-500 py-12">
                {format!("Error loading categories: {error}")}
            </p>
        }
    } else {
        let categories =
            categories_hook.categories.clone().unwrap_or_default();
        html! {
            <div class="overflow-x-auto bg-white dark:bg-slate-800 rounded-lg
                        shadow">
                <table class="min-w-full text-sm text-left">
                    <thead class="bg-slate-100 dark:bg-slate-700
                                  text-slate-700 dark:text-slate-200">
                        <tr>
                            <th class="px-4 py-3 font-semibold">{"ID"}</th>
                            <th class="px-4 py-3 font-semibold">{"Name"}</th>
                            <th class="px-4 py-3 font-semibold">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {categories.into_iter().map(|category| {
                            let on_view = {
                                let navigator = navigator.clone();
                                let id = category.id;
                                Callback::from(move |_| {
                                    navigator.push(
                                        &Route::AdminCategoryProperties {
                                            id: id.0,
                                        },
                                    );
                                })
                            };
                            let on_delete = {
                                let pending_delete = pending_delete.clone();
                                let category = category.clone();
                                Callback::from(move |_| {
                                    pending_delete.set(Some(category.clone()));
                                })
                            };
                            html! {
                                <tr
                                    key={category.id.to_string()}
                                    class="border-t border-slate-200
                                           dark:border-slate-700"
                                >
                                    <td class="px-4 py-3">
                                        {category.id.to_string()}
                                    </td>
                                    <td class="px-4 py-3">{&category.name}</td>
                                    <td class="px-4 py-3 space-x-2
                                               whitespace-nowrap">
                                        <button
                                            onclick={on_view}
                                            class="text-blue-600
                                                   hover:text-blue-800"
                                        >
                                            {"View Properties"}
                                        </button>
                                        <button
                                            onclick={on_delete}
                                            class="text-red-600
                                                   hover:text-red-800"
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect::<Html>()}
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h2 class="text-3xl font-bold text-slate-800 dark:text-white mb-6">
                {"Categories List"}
            </h2>

            {table}

            if let Some(category) = &*pending_delete {
                <ConfirmationModal
                    title="Delete Category"
                    message={format!(
                        "\"{}\" will be removed and its properties left \
                         uncategorized.",
                        category.name
                    )}
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_close_modal}
                    is_loading={*is_deleting}
                />
            }
        </div>
    }
}
