use payloads::catalog::CategoryCount;
use yew::prelude::*;

use crate::utils::capitalize;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub categories: Vec<CategoryCount>,
    /// Currently selected filter token.
    pub selected: String,
    pub on_select: Callback<String>,
}

/// Row of pill buttons, one per derived category plus the "all" entry.
#[function_component]
pub fn CategoryFilter(props: &Props) -> Html {
    html! {
        <div class="flex justify-center flex-wrap gap-3">
            {props.categories.iter().map(|category| {
                let is_selected = props.selected == category.id;
                let class = if is_selected {
                    "px-5 py-2 rounded-full border font-medium transition
                     bg-blue-600 text-white border-blue-600"
                } else {
                    "px-5 py-2 rounded-full border font-medium transition
                     bg-white text-slate-700 border-slate-300
                     hover:bg-blue-50"
                };
                let on_click = {
                    let on_select = props.on_select.clone();
                    let id = category.id.clone();
                    Callback::from(move |_| on_select.emit(id.clone()))
                };
                html! {
                    <button key={category.id.clone()} onclick={on_click} class={class}>
                        {format!(
                            "{} ({})",
                            capitalize(&category.name),
                            category.count
                        )}
                    </button>
                }
            }).collect::<Html>()}
        </div>
    }
}
