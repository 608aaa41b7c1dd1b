use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, get_api_client};

/// Hook return type for the category list
pub struct CategoriesHookReturn {
    pub categories: Option<Vec<responses::Category>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl CategoriesHookReturn {
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.categories.is_none() && self.error.is_none()
    }
}

/// Hook to manage the category list with lazy loading and global state
/// caching.
#[hook]
pub fn use_categories() -> CategoriesHookReturn {
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
                match api_client.get_categories().await {
                    Ok(categories) => {
                        dispatch.reduce_mut(|state| {
                            state.set_categories(categories);
                        });
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::error!("failed to load categories: {e}");
                        error.set(Some(e.to_string()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let state = state.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            if !state.has_categories_loaded() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let categories = state.get_categories().cloned();
    let current_error = (*error).clone();
    let effective_is_loading =
        *is_loading || (categories.is_none() && current_error.is_none());

    CategoriesHookReturn {
        categories,
        is_loading: effective_is_loading,
        error: current_error,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
