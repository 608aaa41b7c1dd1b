use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Hook return type for the property list
pub struct PropertiesHookReturn {
    pub properties: Option<Vec<responses::Property>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl PropertiesHookReturn {
    /// Returns true if this is the initial load (no data, no error, loading)
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.properties.is_none() && self.error.is_none()
    }
}

/// Hook to manage the property list with lazy loading and global state
/// caching. Every screen that shows properties reads the same canonical
/// copy from the store.
#[hook]
pub fn use_properties() -> PropertiesHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let refetch = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let api_client = get_api_client();
                match api_client.get_properties().await {
                    Ok(properties) => {
                        dispatch.reduce_mut(|state| {
                            state.set_properties(properties);
                        });
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("failed to load properties: {e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-load the list if not already cached
    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            if !state.has_properties_loaded() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let properties = state.get_properties().cloned();
    let current_error = (*error).clone();
    let effective_is_loading =
        *is_loading || (properties.is_none() && current_error.is_none());

    PropertiesHookReturn {
        properties,
        is_loading: effective_is_loading,
        error: current_error,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
