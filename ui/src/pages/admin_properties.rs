use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ConfirmationModal;
use crate::content::BRAND_NAME;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_properties, use_title};
use crate::{Route, State, get_api_client};

/// Cell formatting for the admin table rows.
fn formatted_row(property: &responses::Property) -> [String; 7] {
    [
        property.title.clone(),
        property
            .category_name()
            .map_or_else(|| "N/A".to_string(), str::to_string),
        property.location.clone(),
        format!("Nrs. {} per aana", property.price),
        format!("{}%", property.roi),
        format!("{} sq ft", property.area),
        format!("{} image(s)", property.images.len()),
    ]
}

const HEADERS: [&str; 9] = [
    "Title", "Category", "Location", "Price", "ROI", "Area", "Images",
    "Status", "Actions",
];

#[function_component]
pub fn AdminPropertiesPage() -> Html {
    use_title(&format!("Properties - Admin - {BRAND_NAME}"));

    let navigator = use_navigator().unwrap();
    let properties_hook = use_properties();
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    // Row pending delete confirmation
    let pending_delete = use_state(|| None::<responses::Property>);
    let is_deleting = use_state(|| false);

    let on_add = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::AdminAddProperty))
    };

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
            let Some(property) = (*pending_delete).clone() else {
                return;
            };
            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);

                let api_client = get_api_client();
                match api_client.delete_property(&property.id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|state| {
                            state.remove_property(property.id);
                        });
                        toast.success("Property deleted successfully");
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

    let table = if properties_hook.is_initial_loading() {
        html! {
            <p class="text-center text-slate-500 py-12">
                {"Loading properties..."}
            </p>
        }
    } else if let Some(error) = &properties_hook.error {
        html! {
            <p class="text-center text-red-500 py-12">
                {format!("Error loading properties: {error}")}
            </p>
        }
    } else {
        let properties =
            properties_hook.properties.clone().unwrap_or_default();
        html! {
            <div class="overflow-x-auto bg-white dark:bg-slate-800
                        rounded-lg shadow">
                <table class="min-w-full text-sm text-left">
                    <thead class="bg-slate-100 dark:bg-slate-700
                                  text-slate-700 dark:text-slate-200">
                        <tr>
                            {HEADERS.iter().map(|header| html! {
                                <th class="px-4 py-3 font-semibold">
                                    {*header}
                                </th>
                            }).collect::<Html>()}
                        </tr>
                    </thead>
                    <tbody>
                        {properties.iter().map(|property| {
                            let cells = formatted_row(property);
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
                            let on_delete = {
                                let pending_delete = pending_delete.clone();
                                let property = property.clone();
                                Callback::from(move |_| {
                                    pending_delete.set(Some(property.clone()));
                                })
                            };
                            html! {
                                <tr
                                    key={property.id.to_string()}
                                    class="border-t border-slate-200
                                           dark:border-slate-700"
                                >
                                    {cells.iter().map(|cell| html! {
                                        <td class="px-4 py-3">{cell}</td>
                                    }).collect::<Html>()}
                                    <td class="px-4 py-3">
                                        {property.status.to_string()}
                                    </td>
                                    <td class="px-4 py-3 space-x-2
                                               whitespace-nowrap">
                                        <button
                                            onclick={on_edit}
                                            class="text-blue-600
                                                   hover:text-blue-800"
                                        >
                                            {"Edit"}
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
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-3xl font-bold text-slate-800 dark:text-white">
                    {"Property List"}
                </h2>
                <button
                    onclick={on_add}
                    class="font-bold text-white bg-green-500 hover:bg-green-600
                           px-4 py-2 rounded transition"
                >
                    {"+ Add Property"}
                </button>
            </div>

            {table}

            if let Some(property) = &*pending_delete {
                <ConfirmationModal
                    title="Delete Property"
                    message={format!(
                        "\"{}\" will be removed from the listings.",
                        property.title
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
