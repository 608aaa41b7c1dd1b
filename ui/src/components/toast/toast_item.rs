use yew::prelude::*;

use crate::contexts::toast::{Toast, ToastKind, use_toast};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub toast: Toast,
}

#[function_component]
pub fn ToastItem(props: &Props) -> Html {
    let toast_handle = use_toast();

    let on_close = {
        let toast_handle = toast_handle.clone();
        let id = props.toast.id;
        Callback::from(move |_| toast_handle.remove(id))
    };

    let (container_class, text_class) = match props.toast.kind {
        ToastKind::Error => (
            "bg-red-50 dark:bg-red-900/40 border-red-200 dark:border-red-800",
            "text-red-700 dark:text-red-300",
        ),
        ToastKind::Success => (
            "bg-green-50 dark:bg-green-900/40 border-green-200
             dark:border-green-800",
            "text-green-700 dark:text-green-300",
        ),
    };

    html! {
        <div class={classes!(
            "flex", "items-start", "justify-between", "gap-2", "p-3",
            "rounded-md", "border", "shadow-lg", container_class
        )}>
            <p class={classes!("text-sm", text_class)}>
                {&props.toast.message}
            </p>
            <button
                onclick={on_close}
                class="text-sm text-slate-400 hover:text-slate-600
                       dark:hover:text-slate-200"
            >
                {"✕"}
            </button>
        </div>
    }
}
