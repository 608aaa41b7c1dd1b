pub mod use_categories;
pub mod use_category;
pub mod use_fetch;
pub mod use_properties;
pub mod use_property;
pub mod use_stats;
pub mod use_title;

pub use use_categories::use_categories;
pub use use_category::use_category;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_properties::use_properties;
pub use use_property::use_property;
pub use use_stats::use_stats;
pub use use_title::use_title;

/// Distinguishes "not fetched yet" from "fetched but empty".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
