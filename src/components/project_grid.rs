use leptos::prelude::*;

use super::{CategoryFilter, FilterIcon, ProjectCard};
use crate::content::{visible_projects, ShowcaseContent, ALL_CATEGORY};

/// The filterable project grid.
///
/// Owns the two pieces of showcase state: the active category id and the
/// index of the hovered card within the visible list. The content itself is
/// an immutable value handed in by the page.
#[component]
pub fn ProjectShowcase(content: ShowcaseContent) -> impl IntoView {
    let ShowcaseContent {
        categories,
        projects,
    } = content;

    let (active, set_active) = signal(ALL_CATEGORY.to_string());
    let (hovered, set_hovered) = signal(None::<usize>);

    let visible = Memo::new(move |_| visible_projects(&projects, &active.get()));

    let on_select = move |id: String| set_active.set(id);
    let on_hover = move |index: Option<usize>| set_hovered.set(index);

    view! {
        <section id="projects" class="showcase">
            <div class="showcase__intro">
                <span class="showcase__eyebrow">
                    <FilterIcon/>
                    "Project Showcase"
                </span>
                <h2 class="showcase__heading">"Projects"</h2>
                <p class="showcase__tagline">"Engineering solutions at racing speed"</p>
            </div>

            <CategoryFilter categories=categories active=active on_select=on_select/>

            // An empty visible list leaves the grid element empty; there is
            // no "no results" message.
            <ul class="showcase__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard
                                    project=project
                                    index=index
                                    hovered=hovered
                                    on_hover=on_hover
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
