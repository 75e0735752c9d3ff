use leptos::prelude::*;

use super::{Badge, Button, Card, CardContent, ExternalLinkIcon, GithubIcon};
use crate::content::ProjectRecord;

/// A single showcase card.
///
/// `index` is the card's position in the currently visible list; hover
/// styling keys off `hovered == Some(index)`. The action overlay and the
/// "Still Working" ribbon stay in the DOM and are revealed by class toggle,
/// while the "Work in Progress" chip renders unconditionally when the
/// project's status calls for it.
#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    index: usize,
    hovered: ReadSignal<Option<usize>>,
    #[prop(into)] on_hover: Callback<Option<usize>>,
) -> impl IntoView {
    let demo = project.demo_url().map(ToOwned::to_owned);
    let source = project.source_url().map(ToOwned::to_owned);
    let still_working = project.still_working();
    let work_in_progress = project.work_in_progress();

    let ProjectRecord {
        title,
        description,
        image,
        tech,
        ..
    } = project;

    let is_hovered = move || hovered.get() == Some(index);
    let ribbon_class = move || {
        if is_hovered() {
            "showcase-card__ribbon visible"
        } else {
            "showcase-card__ribbon"
        }
    };
    let overlay_class = move || {
        if is_hovered() {
            "showcase-card__overlay visible"
        } else {
            "showcase-card__overlay"
        }
    };

    view! {
        <li
            class="showcase-card"
            on:mouseenter=move |_| on_hover.run(Some(index))
            on:mouseleave=move |_| on_hover.run(None)
        >
            <Card class="showcase-card__frame">
                <div class="showcase-card__media">
                    <img src=image alt=title.clone()/>
                    {still_working.then(|| view! {
                        <div class=ribbon_class>"🚧 Still Working"</div>
                    })}
                    <div class=overlay_class>
                        {demo.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                <Button class="showcase-card__action">
                                    <ExternalLinkIcon/>
                                    "Demo"
                                </Button>
                            </a>
                        })}
                        {source.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer">
                                <Button class="showcase-card__action">
                                    <GithubIcon/>
                                    "Code"
                                </Button>
                            </a>
                        })}
                    </div>
                </div>
                <CardContent>
                    <h3 class="showcase-card__title">{title}</h3>
                    {work_in_progress.then(|| view! {
                        <div class="showcase-card__status">
                            <Badge class="badge--wip">"🚧 Work in Progress"</Badge>
                        </div>
                    })}
                    <p class="showcase-card__description">{description}</p>
                    <div class="showcase-card__tech">
                        {tech
                            .into_iter()
                            .map(|t| view! { <Badge>{t}</Badge> })
                            .collect::<Vec<_>>()}
                    </div>
                </CardContent>
            </Card>
        </li>
    }
}
