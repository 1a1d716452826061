use gloo::events::EventListener;
use yew::prelude::*;

use crate::app_router;
use crate::boot;
use crate::deferred_section::DeferredSection;
use crate::head;
use crate::pages::{
    BlogPage, BlogPostPage, ContactPage, FaqPage, PortfolioPage, PrivacyPage, TermsPage,
};
use crate::perf_hooks::use_performance_monitoring;
use crate::portfolio_view::PortfolioGallery;
use crate::sections::{
    About, AiServices, Footer, Header, Hero, ScrollProgress, SeoSection, Services, Stats,
    Testimonials,
};
use samcreative_core::{HomeSection, Page, PageLayout, PageView, SiteConfig};

/// Navigation state shared with every link on the page.
#[derive(Clone, PartialEq)]
pub(crate) struct Nav {
    pub(crate) current: Page,
    pub(crate) navigate: Callback<Page>,
}

#[hook]
pub(crate) fn use_nav() -> Nav {
    use_context::<Nav>().unwrap_or_else(|| Nav {
        current: Page::Home,
        navigate: Callback::noop(),
    })
}

fn render_home_section(section: HomeSection) -> Html {
    match section {
        HomeSection::Hero => html! { <Hero /> },
        HomeSection::Services => html! { <Services /> },
        HomeSection::AiServices => html! { <AiServices /> },
        HomeSection::Seo => html! { <SeoSection /> },
        HomeSection::About => html! { <About /> },
        HomeSection::Stats => html! { <Stats /> },
        HomeSection::PortfolioPreview => html! { <PortfolioGallery preview=true /> },
        HomeSection::Testimonials => html! { <Testimonials /> },
    }
}

fn render_page_view(view: PageView) -> Html {
    match view {
        PageView::Portfolio => html! { <PortfolioPage /> },
        PageView::Blog => html! { <BlogPage /> },
        PageView::Contact => html! { <ContactPage /> },
        PageView::Privacy => html! { <PrivacyPage /> },
        PageView::Terms => html! { <TermsPage /> },
        PageView::Faq => html! { <FaqPage /> },
        PageView::Post(post) => html! { <BlogPostPage {post} /> },
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_env());
    let page = {
        let config = config.clone();
        use_state(move || app_router::sync_from_location(&config))
    };

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            head::run_mount_side_effects(&config);
            boot::ready();
            || ()
        });
    }
    use_performance_monitoring();

    {
        let page = page.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |event| {
                    page.set(app_router::on_popstate(event, &config));
                })
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let page = page.clone();
        let config = config.clone();
        use_callback((), move |next: Page, _| {
            app_router::push_page(next, &config);
            page.set(next);
        })
    };
    let nav = Nav {
        current: *page,
        navigate,
    };

    let content = match PageLayout::for_page(*page) {
        PageLayout::Home(sections) => html! {
            <main id="main" class="home">
                { for sections.iter().map(|section| html! {
                    <DeferredSection key={section.key()} section={*section}>
                        { render_home_section(*section) }
                    </DeferredSection>
                }) }
            </main>
        },
        PageLayout::Single(view) => html! {
            <main id="main" key={page.id()}>
                { render_page_view(view) }
            </main>
        },
    };

    html! {
        <ContextProvider<Nav> context={nav}>
            <div class="app">
                <ScrollProgress />
                <Header />
                { content }
                <Footer />
            </div>
        </ContextProvider<Nav>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let root = document.create_element("div").expect("root element");
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("attach root");
        root
    }

    fn replace_url(path: &str) {
        web_sys::window()
            .expect("window")
            .history()
            .expect("history")
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .expect("replaceState");
    }

    #[wasm_bindgen_test]
    async fn renders_page_for_initial_url() {
        set_panic_hook();
        replace_url("/faq");
        let root = mount_root();
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        assert!(root.query_selector(".page--faq").expect("selector").is_some());
        assert!(root.query_selector(".site-header").expect("selector").is_some());
        let title = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.title());
        assert_eq!(title.as_deref(), Some(Page::Faq.meta().title));

        handle.destroy();
        root.remove();
        replace_url("/");
    }

    #[wasm_bindgen_test]
    async fn home_renders_placeholders_in_section_order() {
        set_panic_hook();
        replace_url("/");
        let root = mount_root();
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let slots = root.query_selector_all("[data-section]").expect("selector");
        let keys: Vec<String> = (0..slots.length())
            .filter_map(|i| slots.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| element.get_attribute("data-section"))
            .collect();
        let expected: Vec<String> = HomeSection::ORDER
            .iter()
            .map(|section| section.key().to_string())
            .collect();
        assert_eq!(keys, expected);

        handle.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn back_button_restores_previous_page() {
        set_panic_hook();
        replace_url("/faq");
        let root = mount_root();
        let handle = yew::Renderer::<App>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        assert!(root.query_selector(".page--faq").expect("selector").is_some());

        let link: HtmlElement = root
            .query_selector("a[href=\"/portfolio\"]")
            .expect("selector")
            .expect("portfolio link")
            .dyn_into()
            .expect("html element");
        link.click();
        TimeoutFuture::new(50).await;
        assert!(root.query_selector(".page--portfolio").expect("selector").is_some());
        assert!(root.query_selector(".page--faq").expect("selector").is_none());

        let window = web_sys::window().expect("window");
        let mut listener = None;
        let popped = js_sys::Promise::new(&mut |resolve, _reject| {
            listener = Some(EventListener::once(&window, "popstate", move |_| {
                let _ = resolve.call0(&JsValue::NULL);
            }));
        });
        window.history().expect("history").back().expect("back");
        JsFuture::from(popped).await.expect("popstate");
        drop(listener);
        TimeoutFuture::new(50).await;

        assert!(root.query_selector(".page--faq").expect("selector").is_some());
        assert!(root.query_selector(".page--portfolio").expect("selector").is_none());
        let title = window.document().map(|document| document.title());
        assert_eq!(title.as_deref(), Some(Page::Faq.meta().title));

        handle.destroy();
        root.remove();
        replace_url("/");
    }
}
