//! Home page section slots. Each slot keeps a sized placeholder until it
//! nears the viewport, fetches the section's critical assets, then mounts the
//! section. Slots load independently; document order is fixed by the parent.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::lazy_image::connection_hint;
use crate::visibility::use_visible_once;
use samcreative_core::{
    HomeSection, SectionLoad, SectionLoadError, SECTION_OBSERVER, SECTION_RETRY,
};

/// Starts fetching `src`; rejects with the source string on error.
fn preload_image(src: &str) -> Result<Promise, SectionLoadError> {
    let image = HtmlImageElement::new().map_err(|_| SectionLoadError::Asset(src.to_string()))?;
    let source = JsValue::from_str(src);
    let promise = Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(reject.bind1(&JsValue::NULL, &source).unchecked_ref()));
    });
    image.set_src(src);
    Ok(promise)
}

async fn load_assets(section: HomeSection) -> Result<(), SectionLoadError> {
    // Same URLs the section's images will request once mounted.
    let high_quality = connection_hint().allows_high_quality();
    let pending = Array::new();
    for asset in section.critical_assets() {
        pending.push(&preload_image(&asset.url(high_quality))?.into());
    }
    if pending.length() == 0 {
        return Ok(());
    }
    JsFuture::from(Promise::all(&pending))
        .await
        .map(|_| ())
        .map_err(|failed| {
            let src = failed.as_string().unwrap_or_else(|| section.key().to_string());
            SectionLoadError::Asset(src)
        })
}

#[derive(Properties, PartialEq)]
pub(crate) struct DeferredSectionProps {
    pub section: HomeSection,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DeferredSection)]
pub(crate) fn deferred_section(props: &DeferredSectionProps) -> Html {
    let section = props.section;
    let node_ref = use_node_ref();
    let visible = use_visible_once(node_ref.clone(), SECTION_OBSERVER, section.is_eager());
    let load = use_state(|| SectionLoad::Deferred);

    {
        let load = load.clone();
        use_effect_with(visible, move |visible| {
            let alive = Rc::new(Cell::new(true));
            let started = if *visible { load.start() } else { None };
            if let Some(mut current) = started {
                load.set(current.clone());
                let alive = alive.clone();
                spawn_local(async move {
                    while let SectionLoad::Pending { attempt } = current {
                        let delay = SECTION_RETRY.delay_before(attempt);
                        if delay > 0 {
                            TimeoutFuture::new(delay).await;
                        }
                        if !alive.get() {
                            return;
                        }
                        let result = load_assets(section).await;
                        if let Err(err) = &result {
                            gloo::console::warn!(
                                "section load failed",
                                section.key(),
                                attempt,
                                err.to_string()
                            );
                        }
                        current = current.settle(result, &SECTION_RETRY);
                        if !alive.get() {
                            return;
                        }
                        if current.is_degraded() {
                            gloo::console::warn!("section rendered without assets", section.key());
                        }
                        load.set(current.clone());
                    }
                });
            }
            move || alive.set(false)
        });
    }

    let key = section.key();
    if load.should_render() {
        let class = classes!(
            "home-section",
            load.is_degraded().then_some("home-section--degraded")
        );
        html! {
            <div class={class} data-section={key} ref={node_ref}>
                { for props.children.iter() }
            </div>
        }
    } else {
        html! {
            <div
                class={section.placeholder_class()}
                data-section={key}
                aria-busy="true"
                ref={node_ref}
            ></div>
        }
    }
}
