use yew::prelude::*;

use crate::components::{AboutSection, Hero, ServicesSection};
use crate::content::BRAND_NAME;
use crate::hooks::use_title;

#[function_component]
pub fn HomePage() -> Html {
    use_title(BRAND_NAME);

    html! {
        <>
            <Hero />
            <AboutSection />
            <ServicesSection />
        </>
    }
}
