use payloads::PropertyId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::BRAND_NAME;
use crate::hooks::{use_property, use_title};
use crate::utils::status_color;
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property_id: PropertyId,
}

#[function_component]
pub fn PropertyDetailPage(props: &Props) -> Html {
    use_title(&format!("Property - {BRAND_NAME}"));

    let property_hook = use_property(props.property_id);
    let api_client = get_api_client();

    property_hook.render("property", move |property, _is_loading, _error| {
        let images: Vec<String> = property
            .images
            .iter()
            .map(|url| api_client.image_url(url))
            .collect();

        html! {
            <section class="py-12 px-4 max-w-5xl mx-auto">
                <Link<Route>
                    to={Route::Properties}
                    classes="text-sm text-blue-600 hover:text-blue-700"
                >
                    {"← Back to properties"}
                </Link<Route>>

                <h1 class="text-3xl font-bold text-slate-900 dark:text-white
                           mt-4 mb-1">
                    {&property.title}
                </h1>
                <p class="text-slate-500 mb-6">{&property.location}</p>

                if !images.is_empty() {
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 mb-8">
                        {images.iter().map(|src| html! {
                            <img
                                key={src.clone()}
                                src={src.clone()}
                                alt={property.title.clone()}
                                class="w-full h-48 object-cover rounded-xl"
                            />
                        }).collect::<Html>()}
                    </div>
                }

                <div class="grid grid-cols-2 md:grid-cols-3 gap-6 text-sm
                            text-slate-700 dark:text-slate-300 mb-8">
                    <div>
                        <p class="font-medium">{&property.price}</p>
                        <p class="text-xs text-slate-500">{"Price per aana"}</p>
                    </div>
                    <div>
                        <p class="font-medium">{format!("{}%", property.roi)}</p>
                        <p class="text-xs text-slate-500">{"Expected ROI"}</p>
                    </div>
                    <div>
                        <p class="font-medium">
                            {format!("{} sq ft", property.area)}
                        </p>
                        <p class="text-xs text-slate-500">{"Area"}</p>
                    </div>
                    if let Some(area_nepali) = &property.area_nepali {
                        <div>
                            <p class="font-medium">{area_nepali}</p>
                            <p class="text-xs text-slate-500">
                                {"Area (R-A-P-D)"}
                            </p>
                        </div>
                    }
                    if let Some(distance) = property.distance_from_highway {
                        <div>
                            <p class="font-medium">
                                {format!("{distance} m")}
                            </p>
                            <p class="text-xs text-slate-500">
                                {"From Highway"}
                            </p>
                        </div>
                    }
                    <div>
                        <p class={classes!(
                            "font-medium",
                            status_color(&property.status)
                        )}>
                            {property.status.to_string()}
                        </p>
                        <p class="text-xs text-slate-500">{"Status"}</p>
                    </div>
                </div>

                <h2 class="text-lg font-semibold text-slate-900
                           dark:text-white mb-2">
                    {"About this property"}
                </h2>
                <p class="text-slate-600 dark:text-slate-400 whitespace-pre-line">
                    {&property.description}
                </p>
            </section>
        }
    })
}
