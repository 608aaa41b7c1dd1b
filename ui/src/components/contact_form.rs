use payloads::requests::{ContactDraft, FormErrors};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{INVESTMENT_RANGES, PROPERTY_TYPES};
use crate::contexts::toast::use_toast;
use crate::get_api_client;

fn field_error(errors: &FormErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <p class="text-sm text-red-500 mt-1">{message}</p>
        },
        None => html! {},
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-slate-300
    dark:border-slate-600 rounded-md shadow-sm bg-white dark:bg-slate-700
    text-slate-900 dark:text-slate-100 focus:outline-none focus:ring-2
    focus:ring-blue-500 focus:border-blue-500";

/// Inquiry form posting to the contacts endpoint.
#[function_component]
pub fn ContactForm() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(FormErrors::default);
    let is_submitting = use_state(|| false);
    let toast = use_toast();

    fn on_input(
        draft: &UseStateHandle<ContactDraft>,
        apply: fn(&mut ContactDraft, String),
    ) -> Callback<Event> {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    }

    fn on_select(
        draft: &UseStateHandle<ContactDraft>,
        apply: fn(&mut ContactDraft, String),
    ) -> Callback<Event> {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, select.value());
            draft.set(next);
        })
    }

    let on_message_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.message = textarea.value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*draft).clone();
            let validation = current.validate();
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(FormErrors::default());

            let draft = draft.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);

                let api_client = get_api_client();
                match api_client.create_contact(&current).await {
                    Ok(()) => {
                        toast.success(
                            "Thank you for your inquiry! We'll get back to \
                             you within 24 hours.",
                        );
                        draft.set(ContactDraft::default());
                    }
                    Err(e) => {
                        toast.error(e.to_string());
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="space-y-5">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium mb-1">
                        {"Name *"}
                    </label>
                    <input
                        type="text"
                        value={draft.name.clone()}
                        onchange={on_input(&draft, |d, v| d.name = v)}
                        class={INPUT_CLASS}
                    />
                    {field_error(&errors, "name")}
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">
                        {"Email *"}
                    </label>
                    <input
                        type="email"
                        value={draft.email.clone()}
                        onchange={on_input(&draft, |d, v| d.email = v)}
                        class={INPUT_CLASS}
                    />
                    {field_error(&errors, "email")}
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm font-medium mb-1">
                        {"Phone"}
                    </label>
                    <input
                        type="tel"
                        value={draft.phone.clone()}
                        placeholder="98XXXXXXXX"
                        onchange={on_input(&draft, |d, v| d.phone = v)}
                        class={INPUT_CLASS}
                    />
                    {field_error(&errors, "phone")}
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">
                        {"Investment Range *"}
                    </label>
                    <select
                        onchange={on_select(&draft, |d, v| d.investment_range = v)}
                        class={INPUT_CLASS}
                    >
                        <option value="" selected={draft.investment_range.is_empty()}>
                            {"Select Range"}
                        </option>
                        {INVESTMENT_RANGES.iter().map(|range| html! {
                            <option
                                value={*range}
                                selected={draft.investment_range == *range}
                            >
                                {*range}
                            </option>
                        }).collect::<Html>()}
                    </select>
                    {field_error(&errors, "investmentRange")}
                </div>
                <div>
                    <label class="block text-sm font-medium mb-1">
                        {"Property Type *"}
                    </label>
                    <select
                        onchange={on_select(&draft, |d, v| d.property_type = v)}
                        class={INPUT_CLASS}
                    >
                        <option value="" selected={draft.property_type.is_empty()}>
                            {"Select Type"}
                        </option>
                        {PROPERTY_TYPES.iter().map(|kind| html! {
                            <option
                                value={*kind}
                                selected={draft.property_type == *kind}
                            >
                                {*kind}
                            </option>
                        }).collect::<Html>()}
                    </select>
                    {field_error(&errors, "propertyType")}
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium mb-1">
                    {"Message"}
                </label>
                <textarea
                    value={draft.message.clone()}
                    onchange={on_message_change}
                    rows="4"
                    class={INPUT_CLASS}
                />
            </div>

            <button
                type="submit"
                disabled={*is_submitting}
                class="w-full py-3 rounded-lg font-semibold text-white
                       bg-blue-600 hover:bg-blue-700 disabled:opacity-50
                       disabled:cursor-not-allowed transition"
            >
                {if *is_submitting { "Sending..." } else { "Send Inquiry" }}
            </button>
        </form>
    }
}
