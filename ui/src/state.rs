use payloads::{CategoryId, PropertyId, responses};
use yewdux::prelude::*;

use crate::hooks::FetchState;

/// Global store.
///
/// The property and category lists are canonical here so the public
/// listing, the admin tables, and the dashboard all read the same copy
/// instead of each screen fetching and filtering its own.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Properties (managed by use_properties) ===
    pub properties: FetchState<Vec<responses::Property>>,

    // === Categories (managed by use_categories) ===
    pub categories: FetchState<Vec<responses::Category>>,
}

impl State {
    pub fn has_properties_loaded(&self) -> bool {
        self.properties.is_fetched()
    }

    pub fn get_properties(&self) -> Option<&Vec<responses::Property>> {
        self.properties.as_ref()
    }

    pub fn get_property_by_id(
        &self,
        property_id: PropertyId,
    ) -> Option<&responses::Property> {
        self.properties
            .as_ref()?
            .iter()
            .find(|p| p.id == property_id)
    }

    pub fn set_properties(
        &mut self,
        properties: Vec<responses::Property>,
    ) {
        self.properties = FetchState::Fetched(properties);
    }

    /// Forget the cached list so the next screen refetches it.
    pub fn clear_properties(&mut self) {
        self.properties = FetchState::NotFetched;
    }

    pub fn remove_property(&mut self, property_id: PropertyId) {
        if let FetchState::Fetched(properties) = &mut self.properties {
            properties.retain(|p| p.id != property_id);
        }
    }

    pub fn has_categories_loaded(&self) -> bool {
        self.categories.is_fetched()
    }

    pub fn get_categories(&self) -> Option<&Vec<responses::Category>> {
        self.categories.as_ref()
    }

    pub fn set_categories(
        &mut self,
        categories: Vec<responses::Category>,
    ) {
        self.categories = FetchState::Fetched(categories);
    }

    pub fn clear_categories(&mut self) {
        self.categories = FetchState::NotFetched;
    }

    pub fn remove_category(&mut self, category_id: CategoryId) {
        if let FetchState::Fetched(categories) = &mut self.categories {
            categories.retain(|c| c.id != category_id);
        }
    }
}
