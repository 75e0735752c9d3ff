use leptos::prelude::*;

/// Small labelled chip.
#[component]
pub fn Badge(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Label content
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "badge".to_string()
    } else {
        format!("badge {class}")
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}
