use leptos::prelude::*;

/// Clickable button.
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "btn".to_string()
    } else {
        format!("btn {class}")
    };

    view! {
        <button class=class>
            {children()}
        </button>
    }
}
