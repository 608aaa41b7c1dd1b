use payloads::image_set::ImageSet;
use payloads::requests::PropertyDraft;
use payloads::{PropertyId, responses};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::PropertyForm;
use crate::content::BRAND_NAME;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_categories, use_property, use_title};
use crate::pending_image::collect_image_parts;
use crate::{PendingImage, Route, State, get_api_client};

/// Seed the form from a fetched property.
fn draft_from(property: &responses::Property) -> PropertyDraft {
    PropertyDraft {
        title: property.title.clone(),
        category_id: property.category_id,
        location: property.location.clone(),
        price: property.price.clone(),
        roi: property.roi.clone(),
        status: property.status.to_string(),
        area: property.area.clone(),
        area_nepali: property.area_nepali.clone().unwrap_or_default(),
        distance_from_highway: property
            .distance_from_highway
            .map(|d| d.to_string())
            .unwrap_or_default(),
        description: property.description.clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property_id: PropertyId,
}

#[function_component]
pub fn AdminEditPropertyPage(props: &Props) -> Html {
    use_title(&format!("Edit Property - Admin - {BRAND_NAME}"));

    let navigator = use_navigator().unwrap();
    let property_hook = use_property(props.property_id);
    let categories_hook = use_categories();
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();
    let is_submitting = use_state(|| false);
    let property_id = props.property_id;

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
                            let existing = images.existing_urls();
                            let api_client = get_api_client();
                            match api_client
                                .update_property(
                                    &property_id,
                                    &draft,
                                    &existing,
                                    &parts,
                                )
                                .await
                            {
                                Ok(_property) => {
                                    dispatch
                                        .reduce_mut(State::clear_properties);
                                    toast.success(
                                        "Property updated successfully",
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

    let categories = categories_hook.categories.clone().unwrap_or_default();
    let loading_categories = categories_hook.is_initial_loading();

    let content = property_hook.render(
        "property",
        move |property, _is_loading, _error| {
            if loading_categories {
                return html! {
                    <p class="text-center text-slate-500 py-12">
                        {"Loading categories..."}
                    </p>
                };
            }
            html! {
                <PropertyForm
                    categories={categories.clone()}
                    initial_draft={draft_from(property)}
                    initial_images={ImageSet::<PendingImage>::from_existing(
                        property.images.iter().cloned()
                    )}
                    submit_label="Update Property"
                    submitting_label="Updating..."
                    is_submitting={*is_submitting}
                    on_submit={on_submit.clone()}
                />
            }
        },
    );

    html! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <div class="bg-white dark:bg-slate-800 shadow-lg rounded-lg p-8">
                <h2 class="text-2xl font-semibold text-slate-800
                           dark:text-white mb-6">
                    {"Edit Property"}
                </h2>
                {content}
            </div>
        </div>
    }
}
