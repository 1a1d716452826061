use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, PopStateEvent};

use crate::head;
use samcreative_core::{HeadMeta, Page, SiteConfig};

/// Payload stored with each pushed history entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct HistoryEntry {
    pub(crate) page: String,
}

pub(crate) fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(crate) fn apply_page_meta(page: Page, config: &SiteConfig) {
    head::apply_head_meta(&HeadMeta::for_page(page, &config.origin));
}

/// Reads the URL, resolves it and rewrites head metadata. Used on startup
/// and on every popstate.
pub(crate) fn sync_from_location(config: &SiteConfig) -> Page {
    let path = current_path();
    let page = Page::from_path(&path);
    if page == Page::Home && path != "/" {
        gloo::console::log!("route miss, showing home", path);
    }
    apply_page_meta(page, config);
    page
}

/// Handles a popstate. The URL wins over whatever state the entry carries.
pub(crate) fn on_popstate(event: &Event, config: &SiteConfig) -> Page {
    let page = sync_from_location(config);
    if let Some(entry) = history_entry(event) {
        if entry.page != page.id() {
            gloo::console::warn!("history state disagrees with url", entry.page, page.id());
        }
    }
    page
}

fn history_entry(event: &Event) -> Option<HistoryEntry> {
    let event = event.dyn_ref::<PopStateEvent>()?;
    let raw = event.state().as_string()?;
    serde_json::from_str(&raw).ok()
}

/// Explicit in-app navigation: push a history entry without reloading and
/// rewrite head metadata. The caller sets navigation state directly.
pub(crate) fn push_page(page: Page, config: &SiteConfig) {
    let path = page.path();
    if current_path() != path {
        if let Err(err) = push_history(page, &path) {
            gloo::console::warn!("pushState failed", path.clone(), err);
        }
    }
    apply_page_meta(page, config);
    scroll_to_top();
    gloo::console::log!("navigate", page.id(), path);
}

fn push_history(page: Page, path: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let entry = HistoryEntry {
        page: page.id().to_string(),
    };
    let state = serde_json::to_string(&entry)
        .map(|raw| JsValue::from_str(&raw))
        .unwrap_or(JsValue::NULL);
    window.history()?.push_state_with_url(&state, "", Some(path))
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config() -> SiteConfig {
        SiteConfig::from_env()
    }

    #[wasm_bindgen_test]
    fn push_writes_blog_post_title() {
        let config = config();
        let page = Page::from_path("/blog/mobile-first-design");
        push_page(page, &config);
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        assert_eq!(
            document.title(),
            "Mobile-First Design: Why It's Critical for Modern Websites"
        );
        assert_eq!(current_path(), "/blog/mobile-first-design");
    }

    #[wasm_bindgen_test]
    fn history_entry_round_trips_through_json() {
        let entry = HistoryEntry {
            page: Page::Faq.id().to_string(),
        };
        let raw = serde_json::to_string(&entry).expect("json");
        assert_eq!(raw, r#"{"page":"faq"}"#);
        let parsed: HistoryEntry = serde_json::from_str(&raw).expect("parse");
        assert_eq!(parsed.page.parse::<Page>(), Ok(Page::Faq));
    }
}
