use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::status_color;
use crate::{Route, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property: responses::Property,
}

/// Listing card for the public properties grid.
#[function_component]
pub fn PropertyCard(props: &Props) -> Html {
    let navigator = use_navigator().unwrap();
    let property = &props.property;

    let on_click = {
        let navigator = navigator.clone();
        let id = property.id;
        Callback::from(move |_| {
            navigator.push(&Route::PropertyDetail { id: id.0 });
        })
    };

    let api_client = get_api_client();
    let cover = property.images.first().map(|url| api_client.image_url(url));

    html! {
        <div
            onclick={on_click}
            class="cursor-pointer bg-white rounded-2xl shadow-md
                   hover:shadow-xl transition-all p-6 flex flex-col"
        >
            if let Some(src) = cover {
                <img
                    src={src}
                    alt={property.title.clone()}
                    class="w-full h-52 object-cover rounded-xl mb-4"
                />
            }
            <h3 class="text-lg font-semibold text-slate-800 mb-1">
                {&property.title}
            </h3>
            <p class="text-sm text-slate-500 mb-2">{&property.location}</p>
            <p class="text-slate-600 text-sm mb-4 truncate">
                {&property.description}
            </p>
            <div class="grid grid-cols-2 gap-4 text-sm text-slate-700 mt-auto">
                <div>
                    <p class="font-medium">{&property.price}</p>
                    <p class="text-xs text-slate-500">{"Price"}</p>
                </div>
                <div>
                    <p class="font-medium">{&property.roi}</p>
                    <p class="text-xs text-slate-500">{"Expected ROI"}</p>
                </div>
                <div>
                    <p class="font-medium">{&property.area}</p>
                    <p class="text-xs text-slate-500">{"Area (sq ft)"}</p>
                </div>
                if let Some(area_nepali) = &property.area_nepali {
                    <div>
                        <p class="font-medium">{area_nepali}</p>
                        <p class="text-xs text-slate-500">{"Area (R-A-P-D)"}</p>
                    </div>
                }
                if let Some(distance) = property.distance_from_highway {
                    <div>
                        <p class="font-medium">{format!("{distance} m")}</p>
                        <p class="text-xs text-slate-500">{"From Highway"}</p>
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
        </div>
    }
}
