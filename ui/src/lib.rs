use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod content;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod pending_image;
mod state;
mod utils;

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;
pub use pending_image::PendingImage;
pub use state::State;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/properties")]
    Properties,
    #[at("/properties/:id")]
    PropertyDetail { id: i64 },
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/properties")]
    AdminProperties,
    #[at("/admin/addProperty")]
    AdminAddProperty,
    #[at("/admin/editProperty/:id")]
    AdminEditProperty { id: i64 },
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/categories/:id")]
    AdminCategoryProperties { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::About => html! { <pages::AboutPage /> },
        Route::Services => html! { <pages::ServicesPage /> },
        Route::Properties => html! { <pages::PropertiesPage /> },
        Route::PropertyDetail { id } => html! {
            <pages::PropertyDetailPage property_id={payloads::PropertyId(id)} />
        },
        Route::Contact => html! { <pages::ContactPage /> },
        Route::AdminDashboard => html! { <pages::AdminDashboardPage /> },
        Route::AdminProperties => html! { <pages::AdminPropertiesPage /> },
        Route::AdminAddProperty => html! { <pages::AdminAddPropertyPage /> },
        Route::AdminEditProperty { id } => html! {
            <pages::AdminEditPropertyPage
                property_id={payloads::PropertyId(id)} />
        },
        Route::AdminCategories => html! { <pages::AdminCategoriesPage /> },
        Route::AdminCategoryProperties { id } => html! {
            <pages::AdminCategoryPropertiesPage
                category_id={payloads::CategoryId(id)} />
        },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
