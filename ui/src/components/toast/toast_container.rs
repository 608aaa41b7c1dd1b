use yew::prelude::*;

use crate::contexts::toast::ToastContext;

use super::toast_item::ToastItem;

/// Fixed overlay stacking active toasts in the bottom-right corner.
#[function_component]
pub fn ToastContainer() -> Html {
    let context = use_context::<ToastContext>()
        .expect("ToastContainer must be used within a ToastProvider");

    if context.toasts.is_empty() {
        return html! {};
    }

    let mut toasts: Vec<_> = context.toasts.values().cloned().collect();
    // HashMap order is arbitrary; keep the stack stable across renders.
    toasts.sort_by_key(|toast| toast.id);

    html! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            {toasts.into_iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            }).collect::<Html>()}
        </div>
    }
}
