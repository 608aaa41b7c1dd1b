use yew::prelude::*;

use crate::components::ServicesSection;
use crate::content::BRAND_NAME;
use crate::hooks::use_title;

#[function_component]
pub fn ServicesPage() -> Html {
    use_title(&format!("Services - {BRAND_NAME}"));

    html! { <ServicesSection /> }
}
