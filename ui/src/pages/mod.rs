pub mod about;
pub mod admin_add_property;
pub mod admin_categories;
pub mod admin_category_properties;
pub mod admin_dashboard;
pub mod admin_edit_property;
pub mod admin_properties;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod properties;
pub mod property_detail;
pub mod services;

pub use about::AboutPage;
pub use admin_add_property::AdminAddPropertyPage;
pub use admin_categories::AdminCategoriesPage;
pub use admin_category_properties::AdminCategoryPropertiesPage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_edit_property::AdminEditPropertyPage;
pub use admin_properties::AdminPropertiesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use properties::PropertiesPage;
pub use property_detail::PropertyDetailPage;
pub use services::ServicesPage;
