use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::visibility::use_visible_once;
use samcreative_core::{ConnectionHint, ImageLoadState, SizedImage, IMAGE_OBSERVER};

#[derive(Properties, PartialEq)]
pub(crate) struct LazyImageProps {
    pub image: SizedImage,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub img_style: Option<AttrValue>,
}

pub(crate) fn connection_hint() -> ConnectionHint {
    let Some(window) = web_sys::window() else {
        return ConnectionHint::default();
    };
    let navigator = window.navigator();
    let Ok(connection) = Reflect::get(&navigator, &JsValue::from_str("connection")) else {
        return ConnectionHint::default();
    };
    if connection.is_undefined() || connection.is_null() {
        return ConnectionHint::default();
    }
    let effective_type = Reflect::get(&connection, &JsValue::from_str("effectiveType"))
        .ok()
        .and_then(|value| value.as_string());
    let save_data = Reflect::get(&connection, &JsValue::from_str("saveData"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false);
    ConnectionHint {
        effective_type,
        save_data,
    }
}

/// Image whose real source is assigned once, the first time it nears the
/// viewport. Give each distinct image its own instance (e.g. via `key`).
#[function_component(LazyImage)]
pub(crate) fn lazy_image(props: &LazyImageProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_visible_once(node_ref.clone(), IMAGE_OBSERVER, false);
    let resolved = use_state(|| None::<AttrValue>);
    let load_state = use_state(ImageLoadState::default);

    {
        let resolved = resolved.clone();
        let image = props.image;
        use_effect_with(visible, move |visible| {
            if *visible && resolved.is_none() {
                let url = image.url(connection_hint().allows_high_quality());
                resolved.set(Some(AttrValue::from(url)));
            }
            || ()
        });
    }

    let onload = {
        let load_state = load_state.clone();
        let has_src = resolved.is_some();
        Callback::from(move |_: Event| {
            if has_src {
                load_state.set(load_state.on_load());
            }
        })
    };
    let onerror = {
        let load_state = load_state.clone();
        let has_src = resolved.is_some();
        let src = props.image.src;
        Callback::from(move |_: Event| {
            if has_src && !load_state.is_terminal() {
                gloo::console::warn!("image failed to load", src);
                load_state.set(load_state.on_error());
            }
        })
    };

    let img_class = classes!(
        "lazy-image__img",
        (*load_state == ImageLoadState::Loaded).then_some("is-loaded")
    );

    html! {
        <div class={classes!("lazy-image", props.class.clone())} ref={node_ref}>
            if *load_state == ImageLoadState::Placeholder {
                <div class="lazy-image__placeholder">
                    <div class="lazy-image__placeholder-block"></div>
                </div>
            }
            <img
                class={img_class}
                src={(*resolved).clone()}
                alt={props.alt.clone()}
                style={props.img_style.clone()}
                loading="lazy"
                decoding="async"
                {onload}
                {onerror}
            />
            if *load_state == ImageLoadState::Failed {
                <div class="lazy-image__error">
                    <div class="lazy-image__error-block"></div>
                    <span>{ "Failed to load" }</span>
                </div>
            }
        </div>
    }
}
