use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::{Date, Reflect};
use wasm_bindgen::JsValue;
use web_sys::VisibilityState;
use yew::prelude::*;

use samcreative_core::timing::{
    MemoryPressure, Throttle, MEMORY_CHECK_INTERVAL_MS, RESIZE_DEBOUNCE_MS, SCROLL_THROTTLE_MS,
};

#[hook]
pub(crate) fn use_throttled_scroll(callback: Callback<()>) {
    use_effect_with(callback, |callback| {
        let callback = callback.clone();
        let throttle = RefCell::new(Throttle::new(SCROLL_THROTTLE_MS));
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "scroll", move |_| {
                if throttle.borrow_mut().ready(Date::now()) {
                    #[cfg(feature = "perf-trace")]
                    gloo::console::log!("scroll tick");
                    callback.emit(());
                }
            })
        });
        move || drop(listener)
    });
}

#[hook]
pub(crate) fn use_debounced_resize(callback: Callback<()>) {
    use_effect_with(callback, |callback| {
        let callback = callback.clone();
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let listener = web_sys::window().map(|window| {
            let pending = pending.clone();
            EventListener::new(&window, "resize", move |_| {
                let callback = callback.clone();
                // Replacing the slot drops, and so cancels, the previous timer.
                *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    #[cfg(feature = "perf-trace")]
                    gloo::console::log!("resize settled");
                    callback.emit(());
                }));
            })
        });
        move || {
            drop(listener);
            pending.borrow_mut().take();
        }
    });
}

/// Emits `true` when the document becomes visible, `false` when hidden.
#[hook]
pub(crate) fn use_visibility_change(callback: Callback<bool>) {
    use_effect_with(callback, |callback| {
        let callback = callback.clone();
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                let target = document.clone();
                EventListener::new(&target, "visibilitychange", move |_| {
                    callback.emit(document.visibility_state() == VisibilityState::Visible);
                })
            });
        move || drop(listener)
    });
}

fn heap_sample() -> Option<(f64, f64)> {
    let performance = web_sys::window()?.performance()?;
    let memory = Reflect::get(&performance, &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() {
        return None;
    }
    let used = Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize"))
        .ok()?
        .as_f64()?;
    let limit = Reflect::get(&memory, &JsValue::from_str("jsHeapSizeLimit"))
        .ok()?
        .as_f64()?;
    Some((used, limit))
}

/// Periodic heap check; only Chromium exposes `performance.memory`.
#[hook]
pub(crate) fn use_performance_monitoring() {
    use_effect_with((), |_| {
        gloo::console::log!("performance monitoring initialized");
        let interval = Interval::new(MEMORY_CHECK_INTERVAL_MS, || {
            if let Some((used, limit)) = heap_sample() {
                if MemoryPressure::from_sample(used, limit) == MemoryPressure::High {
                    gloo::console::warn!("high memory usage detected", used, limit);
                }
            }
        });
        move || drop(interval)
    });
}
