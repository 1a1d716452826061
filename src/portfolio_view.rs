use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::lazy_image::LazyImage;
use crate::scroll_lock;
use crate::yew_app::use_nav;
use samcreative_core::{
    category_counts, CategoryFilter, GalleryAction, GalleryEffect, GalleryState, Page,
    ProjectEntry,
};

#[derive(Clone, PartialEq, Default)]
struct GalleryStore(GalleryState);

impl Reducible for GalleryStore {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match next.apply(action) {
            GalleryEffect::LockScroll => scroll_lock::lock(),
            GalleryEffect::UnlockScroll => scroll_lock::unlock(),
            GalleryEffect::None => {}
        }
        Rc::new(GalleryStore(next))
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PortfolioGalleryProps {
    /// Home page variant: adds the "Explore Full Portfolio" button.
    #[prop_or(false)]
    pub preview: bool,
}

#[function_component(PortfolioGallery)]
pub(crate) fn portfolio_gallery(props: &PortfolioGalleryProps) -> Html {
    let store = use_reducer(GalleryStore::default);
    let nav = use_nav();
    let is_open = store.0.is_open();

    // Teardown while open must not leave the page unscrollable.
    use_effect_with((), |_| scroll_lock::unlock);

    {
        let dispatcher = store.dispatcher();
        use_effect_with(is_open, move |is_open| {
            let listener = if *is_open {
                web_sys::window()
                    .and_then(|window| window.document())
                    .map(|document| {
                        EventListener::new_with_options(
                            &document,
                            "keydown",
                            EventListenerOptions::enable_prevent_default(),
                            move |event| {
                                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                    return;
                                };
                                if let Some(action) = GalleryAction::from_key(&event.key()) {
                                    event.prevent_default();
                                    dispatcher.dispatch(action);
                                }
                            },
                        )
                    })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let filters = category_counts().into_iter().map(|(filter, count)| {
        let active = store.0.filter() == filter;
        let onclick = {
            let dispatcher = store.dispatcher();
            Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(GalleryAction::SetFilter(filter))
            })
        };
        html! {
            <button
                key={filter.key()}
                class={classes!("filter-chip", active.then_some("is-active"))}
                {onclick}
            >
                { filter.label() }
                <span class="filter-chip__count">{ format!("({count})") }</span>
            </button>
        }
    });

    let cards = store.0.visible().into_iter().map(|project| {
        let onclick = {
            let dispatcher = store.dispatcher();
            let id = project.id;
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Open(id)))
        };
        html! { <ProjectCard key={project.id} project={*project} {onclick} /> }
    });

    let explore = props.preview.then(|| {
        let navigate = nav.navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| navigate.emit(Page::Portfolio));
        html! {
            <div class="portfolio__explore">
                <button class="btn btn--gold" {onclick}>{ "Explore Full Portfolio" }</button>
            </div>
        }
    });

    let modal = store
        .0
        .selected()
        .map(|project| render_viewer(project, &store.0, store.dispatcher()));

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Our " }<span class="accent">{ "Work" }</span></h2>
                    <p>{ "Discover our curated collection of projects showcasing innovation and creativity." }</p>
                </div>
                <div class="portfolio__filters">
                    <span class="portfolio__filters-label">{ "Filter by category" }</span>
                    <div class="portfolio__filter-row">{ for filters }</div>
                </div>
                <div class="portfolio__grid">{ for cards }</div>
                { for explore }
            </div>
            { for modal }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectEntry,
    onclick: Callback<MouseEvent>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let extra = project.image_count().saturating_sub(1);
    html! {
        <div class="project-card" onclick={props.onclick.clone()}>
            <div class="project-card__media">
                <LazyImage
                    image={project.card_image()}
                    alt={project.title}
                    class="project-card__image"
                />
                <div class="project-card__overlay">
                    <h3>{ project.title }</h3>
                    <p>{ project.description }</p>
                    <span class="badge badge--gold">{ project.year }</span>
                </div>
                <div class="project-card__category">{ project.category.slug() }</div>
                if project.is_slideshow() {
                    <div class="project-card__more">{ format!("+{extra} more") }</div>
                }
            </div>
        </div>
    }
}

fn render_viewer(
    project: &'static ProjectEntry,
    state: &GalleryState,
    dispatcher: UseReducerDispatcher<GalleryStore>,
) -> Html {
    let action = |action: GalleryAction| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let zoom_style = format!("transform: scale({});", state.zoom());
    let current = state.current_image().unwrap_or_else(|| project.cover());
    let index = state.image_index();

    let indicators = project.images.iter().enumerate().map(|(i, _)| {
        html! {
            <button
                key={i}
                class={classes!("viewer__dot", (i == index).then_some("is-active"))}
                aria-label={format!("Go to image {}", i + 1)}
                onclick={action(GalleryAction::GoTo(i))}
            />
        }
    });

    html! {
        <div class="viewer" role="dialog" aria-modal="true" aria-label={project.title}>
            <div class="viewer__frame">
                <button class="viewer__close" aria-label="Close modal" onclick={action(GalleryAction::Close)}>
                    { "\u{00d7}" }
                </button>
                <div class="viewer__zoom">
                    <button aria-label="Zoom in" onclick={action(GalleryAction::ZoomIn)}>{ "+" }</button>
                    <button aria-label="Zoom out" onclick={action(GalleryAction::ZoomOut)}>{ "\u{2212}" }</button>
                    <button onclick={action(GalleryAction::ResetZoom)}>{ "Reset" }</button>
                    <span class="viewer__zoom-level">{ format!("{:.0}%", state.zoom() * 100.0) }</span>
                </div>
                <div class="viewer__stage">
                    <LazyImage
                        key={current}
                        image={ProjectEntry::viewer_image(current)}
                        alt={project.title}
                        class="viewer__image"
                        img_style={zoom_style}
                    />
                    if project.is_slideshow() {
                        <button class="viewer__arrow viewer__arrow--prev" aria-label="Previous image" onclick={action(GalleryAction::Previous)}>
                            { "\u{2039}" }
                        </button>
                        <button class="viewer__arrow viewer__arrow--next" aria-label="Next image" onclick={action(GalleryAction::Next)}>
                            { "\u{203a}" }
                        </button>
                        <div class="viewer__dots">{ for indicators }</div>
                    }
                </div>
                <div class="viewer__caption">
                    <h2>{ project.title }</h2>
                    <p>{ project.year }</p>
                </div>
            </div>
        </div>
    }
}
