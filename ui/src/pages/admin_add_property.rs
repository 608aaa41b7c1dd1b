use payloads::image_set::ImageSet;
use payloads::requests::PropertyDraft;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::PropertyForm;
use crate::content::BRAND_NAME;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_categories, use_title};
use crate::pending_image::collect_image_parts;
use crate::{PendingImage, Route, State, get_api_client};

#[function_component]
pub fn AdminAddPropertyPage() -> Html {
    use_title(&format!("Add Property - Admin - {BRAND_NAME}"));

    let navigator = use_navigator().unwrap();
    let categories_hook = use_categories();
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();
    let is_submitting = use_state(|| false);

    let on_submit = {
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(
            move |(draft, images): (PropertyDraft, ImageSet<PendingImage>)| {
                let navigator = navigator.clone();
                let dispatch = dispatch.clone();
                let toast = toast.clone();
                let is_submitting = is_submitting.clone();

                yew::platform::spawn_local(async move {
                    is_submitting.set(true);

                    match collect_image_parts(&images).await {
                        Err(message) => toast.error(message),
                        Ok(parts) => {
                            let api_client = get_api_client();
                            match api_client
                                .create_property(&draft, &parts)
                                .await
                            {
                                Ok(property) => {
                                    tracing::info!(
                                        "created property {}",
                                        property.id
                                    );
                                    // Drop the cached list so every screen
                                    // refetches with the new entry.
                                    dispatch
                                        .reduce_mut(State::clear_properties);
                                    toast.success(
                                        "Property created successfully",
                                    );
                                    navigator.push(&Route::AdminProperties);
                                }
                                Err(e) => toast.error(e.to_string()),
                            }
                        }
                    }

                    is_submitting.set(false);
                });
            },
        )
    };

    let form = if categories_hook.is_initial_loading() {
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
            <PropertyForm
                categories={categories}
                initial_draft={PropertyDraft::default()}
                initial_images={ImageSet::<PendingImage>::new()}
                submit_label="Create Property"
                submitting_label="Creating..."
                is_submitting={*is_submitting}
                on_submit={on_submit}
            />
        }
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <div class="bg-white dark:bg-slate-800 shadow-lg rounded-lg p-8">
                <h2 class="text-2xl font-semibold text-slate-800
                           dark:text-white mb-6">
                    {"Create New Property"}
                </h2>
                {form}
            </div>
        </div>
    }
}
