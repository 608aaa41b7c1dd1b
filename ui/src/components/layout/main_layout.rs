use yew::prelude::*;

use super::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-slate-900
                    text-slate-900 dark:text-slate-100 transition-colors">
            <Header />
            <main class="flex-1">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}
