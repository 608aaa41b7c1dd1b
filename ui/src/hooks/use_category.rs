use payloads::{CategoryId, responses};
use yew::prelude::*;

use crate::get_api_client;

use super::{FetchHookReturn, use_fetch};

/// Fetch a single category with its properties embedded.
#[hook]
pub fn use_category(
    category_id: CategoryId,
) -> FetchHookReturn<responses::Category> {
    use_fetch(category_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_category(&category_id)
            .await
            .map_err(|e| e.to_string())
    })
}
