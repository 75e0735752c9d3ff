use leptos::prelude::*;

use crate::content::Category;

/// One button per category; the selected one is highlighted.
///
/// Only ids from `categories` are reachable through this control, so the
/// selection needs no validation downstream.
#[component]
pub fn CategoryFilter(
    categories: Vec<Category>,
    active: ReadSignal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {categories
                .into_iter()
                .map(|cat| {
                    let id = cat.id.clone();
                    let highlight_id = cat.id.clone();
                    let class = move || {
                        if active.get() == highlight_id {
                            "category-filter__btn active"
                        } else {
                            "category-filter__btn"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| on_select.run(id.clone())>
                            <span class="category-filter__icon">{cat.icon}</span>
                            {cat.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
