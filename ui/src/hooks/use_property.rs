use payloads::{PropertyId, responses};
use yew::prelude::*;

use crate::get_api_client;

use super::{FetchHookReturn, use_fetch};

/// Fetch a single property by id.
///
/// Detail pages can be reached directly by URL, so this always fetches
/// rather than relying on the cached list (which may not be loaded and may
/// omit relations).
#[hook]
pub fn use_property(
    property_id: PropertyId,
) -> FetchHookReturn<responses::Property> {
    use_fetch(property_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_property(&property_id)
            .await
            .map_err(|e| e.to_string())
    })
}
