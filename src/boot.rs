//! Loading screen drawn by `index.html` before wasm starts. The page exposes
//! `window.__SC_BOOT` with `setPhase`, `fail` and `ready`.

use std::cell::Cell;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

const BOOT_GLOBAL: &str = "__SC_BOOT";

thread_local! {
    static DISMISSED: Cell<bool> = const { Cell::new(false) };
}

/// Absent when the host page has no loader (tests, embeds).
struct BootScreen(Object);

impl BootScreen {
    fn find() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)).ok()?;
        value.dyn_into::<Object>().ok().map(BootScreen)
    }

    fn invoke(&self, method: &str, args: &[&str]) -> Result<(), JsValue> {
        let func: Function = Reflect::get(&self.0, &JsValue::from_str(method))?.dyn_into()?;
        let args: Array = args.iter().map(|arg| JsValue::from_str(arg)).collect();
        func.apply(&self.0, &args).map(|_| ())
    }
}

fn notify(method: &str, args: &[&str]) {
    let Some(screen) = BootScreen::find() else {
        return;
    };
    if let Err(err) = screen.invoke(method, args) {
        gloo::console::warn!("boot loader call failed", method, err);
    }
}

pub(crate) fn set_phase(label: &str, detail: &str) {
    notify("setPhase", &[label, detail]);
}

pub(crate) fn fail(code: &str, message: &str, hint: &str) {
    notify("fail", &[code, message, hint]);
}

/// Hides the loading screen. Only the first call reaches the page.
pub(crate) fn ready() {
    if DISMISSED.with(|dismissed| dismissed.replace(true)) {
        return;
    }
    notify("ready", &[]);
}
