use payloads::image_set::ImageSet;
use payloads::requests::{FormErrors, PropertyDraft};
use payloads::{CategoryId, STATUS_OPTIONS, responses};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::PendingImage;

use super::PropertyImageEditor;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub categories: Vec<responses::Category>,
    /// Initial field contents (defaults for create, loaded for edit).
    pub initial_draft: PropertyDraft,
    /// Initial image strip (empty for create, persisted URLs for edit).
    pub initial_images: ImageSet<PendingImage>,
    pub submit_label: AttrValue,
    pub submitting_label: AttrValue,
    pub is_submitting: bool,
    /// Emitted only after validation passes.
    pub on_submit: Callback<(PropertyDraft, ImageSet<PendingImage>)>,
}

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

const LABEL_CLASS: &str =
    "block font-medium text-slate-700 dark:text-slate-300 mb-1";

/// Shared create/edit property form.
///
/// Owns the draft, the validation errors, and the image strip; the parent
/// page performs the actual API call and reports progress through
/// `is_submitting`.
#[function_component]
pub fn PropertyForm(props: &Props) -> Html {
    let draft = use_state(|| props.initial_draft.clone());
    let images = use_state(|| props.initial_images.clone());
    let errors = use_state(FormErrors::default);

    fn on_input(
        draft: &UseStateHandle<PropertyDraft>,
        apply: fn(&mut PropertyDraft, String),
    ) -> Callback<Event> {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    }

    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.category_id =
                CategoryId(select.value().parse().unwrap_or(0));
            draft.set(next);
        })
    };

    let on_status_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.status = select.value();
            draft.set(next);
        })
    };

    let on_description_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = textarea.value();
            draft.set(next);
        })
    };

    let on_images_change = {
        let images = images.clone();
        Callback::from(move |next: ImageSet<PendingImage>| {
            images.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let images = images.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*draft).clone();
            let validation = current.validate();
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(FormErrors::default());
            on_submit.emit((current, (*images).clone()));
        })
    };

    html! {
        <form
            onsubmit={on_submit}
            class="grid grid-cols-1 md:grid-cols-2 gap-6"
        >
            // Title
            <div>
                <label class={LABEL_CLASS}>{"Title"}</label>
                <input
                    type="text"
                    value={draft.title.clone()}
                    onchange={on_input(&draft, |d, v| d.title = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "title")}
            </div>

            // Category
            <div>
                <label class={LABEL_CLASS}>{"Category"}</label>
                <select onchange={on_category_change} class={INPUT_CLASS}>
                    <option
                        value="0"
                        selected={draft.category_id == CategoryId(0)}
                    >
                        {"Select Category"}
                    </option>
                    {props.categories.iter().map(|category| html! {
                        <option
                            value={category.id.to_string()}
                            selected={draft.category_id == category.id}
                        >
                            {&category.name}
                        </option>
                    }).collect::<Html>()}
                </select>
                {field_error(&errors, "categoryId")}
            </div>

            // Location
            <div>
                <label class={LABEL_CLASS}>{"Location"}</label>
                <input
                    type="text"
                    value={draft.location.clone()}
                    onchange={on_input(&draft, |d, v| d.location = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "location")}
            </div>

            // Price
            <div>
                <label class={LABEL_CLASS}>{"Price per aana"}</label>
                <input
                    type="number"
                    step="100000"
                    value={draft.price.clone()}
                    onchange={on_input(&draft, |d, v| d.price = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "price")}
            </div>

            // ROI
            <div>
                <label class={LABEL_CLASS}>{"ROI (in %)"}</label>
                <input
                    type="number"
                    value={draft.roi.clone()}
                    onchange={on_input(&draft, |d, v| d.roi = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "roi")}
            </div>

            // Status
            <div>
                <label class={LABEL_CLASS}>{"Status"}</label>
                <select onchange={on_status_change} class={INPUT_CLASS}>
                    <option value="" selected={draft.status.is_empty()}>
                        {"Select Status"}
                    </option>
                    {STATUS_OPTIONS.iter().map(|status| html! {
                        <option
                            value={*status}
                            selected={draft.status == *status}
                        >
                            {*status}
                        </option>
                    }).collect::<Html>()}
                </select>
                {field_error(&errors, "status")}
            </div>

            // Area
            <div>
                <label class={LABEL_CLASS}>{"Area (sq.ft)"}</label>
                <input
                    type="number"
                    step="10"
                    value={draft.area.clone()}
                    onchange={on_input(&draft, |d, v| d.area = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "area")}
            </div>

            // Area Nepali
            <div>
                <label class={LABEL_CLASS}>{"Area (R-A-P-D)"}</label>
                <input
                    type="text"
                    value={draft.area_nepali.clone()}
                    placeholder="e.g. 0-0-0-0.0"
                    onchange={on_input(&draft, |d, v| d.area_nepali = v)}
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "areaNepali")}
            </div>

            // Distance From Highway
            <div>
                <label class={LABEL_CLASS}>
                    {"Distance From Highway (m)"}
                </label>
                <input
                    type="number"
                    step="100"
                    value={draft.distance_from_highway.clone()}
                    onchange={on_input(
                        &draft,
                        |d, v| d.distance_from_highway = v
                    )}
                    class={INPUT_CLASS}
                />
            </div>

            // Images
            <div class="md:col-span-2">
                <label class={LABEL_CLASS}>{"Images"}</label>
                <PropertyImageEditor
                    images={(*images).clone()}
                    on_change={on_images_change}
                    disabled={props.is_submitting}
                />
            </div>

            // Description
            <div class="md:col-span-2">
                <label class={LABEL_CLASS}>{"Description"}</label>
                <textarea
                    value={draft.description.clone()}
                    onchange={on_description_change}
                    rows="4"
                    class={INPUT_CLASS}
                />
                {field_error(&errors, "description")}
            </div>

            // Submit
            <div class="md:col-span-2 text-right">
                <button
                    type="submit"
                    disabled={props.is_submitting}
                    class="px-6 py-2 rounded font-medium text-white
                           bg-blue-600 hover:bg-blue-700 disabled:bg-slate-400
                           disabled:cursor-not-allowed transition"
                >
                    {if props.is_submitting {
                        props.submitting_label.clone()
                    } else {
                        props.submit_label.clone()
                    }}
                </button>
            </div>
        </form>
    }
}
