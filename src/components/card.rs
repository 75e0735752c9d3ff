use leptos::prelude::*;

/// Generic card container.
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! {
        <div class=class>
            {children()}
        </div>
    }
}

/// Padded body section of a card.
#[component]
pub fn CardContent(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Content
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card__content".to_string()
    } else {
        format!("card__content {class}")
    };

    view! {
        <div class=class>
            {children()}
        </div>
    }
}
