//! Writes into `<head>`: route metadata and the shell's mount-time links.
//!
//! Every DOM failure is logged and dropped; none of this may block rendering.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element};

use samcreative_core::{preload_kind, HeadMeta, SiteConfig};

const DESCRIPTION_SELECTOR: &str = "meta[name=\"description\"]";
const CANONICAL_SELECTOR: &str = "link[rel=\"canonical\"]";
const OG_URL_SELECTOR: &str = "meta[property=\"og:url\"]";
const VIEWPORT_SELECTOR: &str = "meta[name=\"viewport\"]";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn apply_head_meta(meta: &HeadMeta) {
    let Some(document) = document() else {
        return;
    };
    document.set_title(meta.title);
    set_meta_content(&document, DESCRIPTION_SELECTOR, meta.description);
    if let Err(err) = upsert_canonical(&document, &meta.canonical_href) {
        gloo::console::warn!("canonical link update failed", err);
    }
    set_meta_content(&document, OG_URL_SELECTOR, meta.og_url());
}

fn set_meta_content(document: &Document, selector: &str, content: &str) {
    if let Ok(Some(element)) = document.query_selector(selector) {
        let _ = element.set_attribute("content", content);
    }
}

fn upsert_canonical(document: &Document, href: &str) -> Result<(), JsValue> {
    let link = match document.query_selector(CANONICAL_SELECTOR)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("link")?;
            created.set_attribute("rel", "canonical")?;
            append_to_head(document, &created)?;
            created
        }
    };
    link.set_attribute("href", href)
}

fn append_to_head(document: &Document, element: &Element) -> Result<(), JsValue> {
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(element)?;
    Ok(())
}

fn append_link(rel: &str, href: &str, as_attr: Option<&str>) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let link = document.create_element("link")?;
    link.set_attribute("rel", rel)?;
    if let Some(as_attr) = as_attr {
        link.set_attribute("as", as_attr)?;
    }
    link.set_attribute("href", href)?;
    append_to_head(&document, &link)
}

pub(crate) fn preload_resources(resources: &[&str]) {
    for resource in resources {
        let kind = preload_kind(resource).map(|kind| kind.as_attr());
        if let Err(err) = append_link("preload", resource, kind) {
            gloo::console::warn!("preload link failed", *resource, err);
        }
    }
}

fn set_viewport(content: &str) {
    if let Some(document) = document() {
        set_meta_content(&document, VIEWPORT_SELECTOR, content);
    }
}

fn register_service_worker(path: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        gloo::console::log!("service worker unsupported, skipping");
        return;
    }
    let promise = navigator.service_worker().register(path);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => gloo::console::log!("service worker registered", path),
            Err(err) => gloo::console::warn!("service worker registration failed", err),
        }
    });
}

/// Fire-and-forget work the shell does once on mount.
pub(crate) fn run_mount_side_effects(config: &SiteConfig) {
    register_service_worker(config.service_worker);
    for origin in config.preconnect() {
        if let Err(err) = append_link("preconnect", &origin, None) {
            gloo::console::warn!("preconnect failed", origin, err);
        }
    }
    preload_resources(config.preload);
    set_viewport(config.viewport);
}

#[cfg(test)]
mod tests {
    use super::*;
    use samcreative_core::Page;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn attr(selector: &str, name: &str) -> Option<String> {
        document()?.query_selector(selector).ok()??.get_attribute(name)
    }

    #[wasm_bindgen_test]
    fn canonical_link_is_created_then_reused() {
        let document = document().expect("document");
        if let Ok(Some(existing)) = document.query_selector(CANONICAL_SELECTOR) {
            existing.remove();
        }

        let meta = HeadMeta::for_page(Page::Faq, "https://example.test");
        apply_head_meta(&meta);
        assert_eq!(document.title(), meta.title);
        assert_eq!(
            attr(CANONICAL_SELECTOR, "href").as_deref(),
            Some("https://example.test/faq")
        );

        apply_head_meta(&HeadMeta::for_page(Page::Blog, "https://example.test"));
        let links = document
            .query_selector_all(CANONICAL_SELECTOR)
            .expect("query");
        assert_eq!(links.length(), 1);
        assert_eq!(
            attr(CANONICAL_SELECTOR, "href").as_deref(),
            Some("https://example.test/blog")
        );
    }

    #[wasm_bindgen_test]
    fn description_and_og_url_follow_page() {
        let document = document().expect("document");
        for (selector, key, value) in [
            (DESCRIPTION_SELECTOR, "name", "description"),
            (OG_URL_SELECTOR, "property", "og:url"),
        ] {
            if document.query_selector(selector).ok().flatten().is_none() {
                let meta = document.create_element("meta").expect("meta");
                meta.set_attribute(key, value).expect("attr");
                append_to_head(&document, &meta).expect("append");
            }
        }

        let page = Page::from_path("/contact");
        let head = HeadMeta::for_page(page, "https://example.test");
        apply_head_meta(&head);
        assert_eq!(
            attr(DESCRIPTION_SELECTOR, "content").as_deref(),
            Some(page.meta().description)
        );
        assert_eq!(
            attr(OG_URL_SELECTOR, "content").as_deref(),
            Some("https://example.test/contact")
        );
    }
}
