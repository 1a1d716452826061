mod app_router;
mod boot;
mod deferred_section;
mod head;
mod lazy_image;
mod pages;
mod perf_hooks;
mod portfolio_view;
mod scroll_lock;
mod sections;
mod visibility;
mod yew_app;

const ROOT_ID: &str = "app";

fn main() {
    boot::set_phase("Starting", "Mounting the site");
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ID))
    else {
        gloo::console::warn!("mount root missing", ROOT_ID);
        boot::fail(
            "mount",
            "The page could not start.",
            "Reload the page. If the problem persists, clear the site cache.",
        );
        return;
    };
    yew::Renderer::<yew_app::App>::with_root(root).render();
}
