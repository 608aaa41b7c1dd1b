use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;

use super::{FetchHookReturn, use_fetch};

/// Fetch the back-office dashboard counters.
#[hook]
pub fn use_stats() -> FetchHookReturn<responses::Stats> {
    use_fetch((), || async {
        let api_client = get_api_client();
        api_client.get_stats().await.map_err(|e| e.to_string())
    })
}
