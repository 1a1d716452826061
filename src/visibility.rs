//! One-shot viewport watcher over `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use samcreative_core::{ObserverOptions, VisibilityTrigger};

/// Calls `on_visible` the first time the element intersects, then
/// disconnects. Dropping the watcher disconnects as well.
pub(crate) struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub(crate) fn observe<F>(
        element: &Element,
        options: ObserverOptions,
        on_visible: F,
    ) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut trigger = VisibilityTrigger::default();
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if !intersecting || !trigger.fire() {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            },
        );
        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` once the referenced element has come near the viewport. Starts
/// `true` when `eager`. If the watcher cannot be attached the content is shown
/// right away.
#[hook]
pub(crate) fn use_visible_once(node_ref: NodeRef, options: ObserverOptions, eager: bool) -> bool {
    let visible = use_state(|| eager);
    {
        let visible = visible.clone();
        use_effect_with(node_ref, move |node_ref| {
            let mut watcher = None;
            if !*visible {
                match node_ref.cast::<Element>() {
                    Some(element) => {
                        let setter = visible.clone();
                        match VisibilityWatcher::observe(&element, options, move || {
                            setter.set(true)
                        }) {
                            Ok(attached) => watcher = Some(attached),
                            Err(err) => {
                                gloo::console::warn!("visibility watcher unavailable", err);
                                visible.set(true);
                            }
                        }
                    }
                    None => visible.set(true),
                }
            }
            move || drop(watcher)
        });
    }
    *visible
}
