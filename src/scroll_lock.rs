//! Body scroll lock owned by the portfolio viewer.

use std::cell::RefCell;

use web_sys::HtmlElement;

thread_local! {
    // Some(previous overflow) while locked.
    static SAVED_OVERFLOW: RefCell<Option<String>> = RefCell::new(None);
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub(crate) fn is_locked() -> bool {
    SAVED_OVERFLOW.with(|slot| slot.borrow().is_some())
}

pub(crate) fn lock() {
    if is_locked() {
        return;
    }
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    if let Err(err) = style.set_property("overflow", "hidden") {
        gloo::console::warn!("scroll lock failed", err);
        return;
    }
    SAVED_OVERFLOW.with(|slot| {
        *slot.borrow_mut() = Some(previous);
    });
}

/// Restores exactly the value seen by [`lock`]. No-op when not locked.
pub(crate) fn unlock() {
    let Some(previous) = SAVED_OVERFLOW.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    let result = if previous.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", &previous)
    };
    if let Err(err) = result {
        gloo::console::warn!("scroll unlock failed", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn overflow() -> String {
        body()
            .expect("body")
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn lock_then_unlock_restores_previous_value() {
        let style = body().expect("body").style();
        style.set_property("overflow", "scroll").expect("set");

        lock();
        assert!(is_locked());
        assert_eq!(overflow(), "hidden");

        lock();
        unlock();
        assert!(!is_locked());
        assert_eq!(overflow(), "scroll");

        style.remove_property("overflow").expect("remove");
    }

    #[wasm_bindgen_test]
    fn unlock_without_lock_leaves_body_alone() {
        let style = body().expect("body").style();
        style.set_property("overflow", "auto").expect("set");
        unlock();
        assert_eq!(overflow(), "auto");
        style.remove_property("overflow").expect("remove");
    }
}
