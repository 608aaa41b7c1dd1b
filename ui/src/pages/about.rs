use yew::prelude::*;

use crate::components::AboutSection;
use crate::content::BRAND_NAME;
use crate::hooks::use_title;

#[function_component]
pub fn AboutPage() -> Html {
    use_title(&format!("About - {BRAND_NAME}"));

    html! { <AboutSection /> }
}
