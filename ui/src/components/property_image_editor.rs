use payloads::MAX_PROPERTY_IMAGES;
use payloads::image_set::{ImageEntry, ImageSet};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{PendingImage, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Current image strip. The owning form holds the state so it can read
    /// retained URLs and pending files at submit time.
    pub images: ImageSet<PendingImage>,
    pub on_change: Callback<ImageSet<PendingImage>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Unified preview strip and uploader for a property's images.
///
/// Persisted and freshly picked images render in one grid; removal goes
/// through `ImageSet::remove_at`, so dropping a pending entry revokes its
/// object URL.
#[function_component]
pub fn PropertyImageEditor(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let toast = use_toast();

    let on_file_select = {
        let images = props.images.clone();
        let on_change = props.on_change.clone();
        let toast = toast.clone();
        let file_input_ref = file_input_ref.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };

            let mut handles = Vec::new();
            for index in 0..files.length() {
                let Some(file) = files.get(index) else {
                    continue;
                };
                match PendingImage::from_file(file) {
                    Ok(handle) => handles.push(handle),
                    Err(message) => {
                        toast.error(message);
                        return;
                    }
                }
            }

            let mut next = images.clone();
            match next.add_files(handles) {
                // The whole batch was rejected; handles created above are
                // dropped here, revoking their object URLs.
                Err(e) => toast.error(e.to_string()),
                Ok(()) => on_change.emit(next),
            }

            // Allow re-selecting the same file later
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        })
    };

    let on_remove = {
        let images = props.images.clone();
        let on_change = props.on_change.clone();
        let toast = toast.clone();

        Callback::from(move |index: usize| {
            let mut next = images.clone();
            match next.remove_at(index) {
                Ok(_removed) => on_change.emit(next),
                // Not reachable from the buttons we render, but surfaced
                // rather than ignored.
                Err(e) => toast.error(e.to_string()),
            }
        })
    };

    let on_select_files = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let api_client = get_api_client();
    let is_full = props.images.is_full();
    let disabled = props.disabled || is_full;

    html! {
        <div>
            // Hidden file input
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                multiple=true
                onchange={on_file_select}
                class="hidden"
                disabled={disabled}
            />

            if !props.images.is_empty() {
                <div class="mb-4 grid grid-cols-2 sm:grid-cols-3
                            md:grid-cols-5 gap-4">
                    {props.images.entries().iter().enumerate().map(|(index, entry)| {
                        let src = match entry {
                            ImageEntry::Existing(url) => {
                                api_client.image_url(url)
                            }
                            ImageEntry::New(pending) => {
                                pending.preview_url().to_string()
                            }
                        };
                        let on_click = {
                            let on_remove = on_remove.clone();
                            Callback::from(move |_| on_remove.emit(index))
                        };
                        html! {
                            <div
                                key={src.clone()}
                                class="relative group rounded-lg
                                       overflow-hidden border
                                       border-slate-200 shadow-sm
                                       hover:shadow-md transition"
                            >
                                <img
                                    src={src}
                                    alt=""
                                    class="w-full h-32 object-cover"
                                />
                                <button
                                    type="button"
                                    onclick={on_click}
                                    disabled={props.disabled}
                                    class="absolute top-1 right-1 bg-red-600
                                           text-white text-xs rounded-full
                                           px-1.5 py-0.5 opacity-0
                                           group-hover:opacity-100 transition"
                                >
                                    {"✕"}
                                </button>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }

            <button
                type="button"
                onclick={on_select_files}
                disabled={disabled}
                class={classes!(
                    "w-full", "px-4", "py-6", "border-2", "border-dashed",
                    "rounded-lg", "text-center", "transition-colors",
                    if is_full {
                        "border-slate-300 bg-slate-50 cursor-not-allowed"
                    } else {
                        "border-slate-400 hover:border-blue-500 bg-slate-50
                         hover:bg-blue-50 cursor-pointer"
                    }
                )}
            >
                <p class="text-sm text-slate-600">
                    {if is_full {
                        "Image limit reached".to_string()
                    } else {
                        "Upload images".to_string()
                    }}
                </p>
                <p class="text-xs text-slate-500 mt-1">
                    {format!(
                        "{} of {MAX_PROPERTY_IMAGES} images",
                        props.images.len()
                    )}
                </p>
            </button>
        </div>
    }
}
