pub mod about_section;
pub mod category_filter;
pub mod confirmation_modal;
pub mod contact_form;
pub mod hero;
pub mod layout;
pub mod property_card;
pub mod property_form;
pub mod property_image_editor;
pub mod services_section;
pub mod toast;

pub use about_section::AboutSection;
pub use category_filter::CategoryFilter;
pub use confirmation_modal::ConfirmationModal;
pub use contact_form::ContactForm;
pub use hero::Hero;
pub use property_card::PropertyCard;
pub use property_form::PropertyForm;
pub use property_image_editor::PropertyImageEditor;
pub use services_section::ServicesSection;
pub use toast::ToastContainer;
