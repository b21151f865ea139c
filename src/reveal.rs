use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::{
    should_hide_on_exit, RevealPreset, REVEALED_OPACITY, REVEALED_TRANSFORM, REVEAL_PRESETS,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const INDEX_ATTR: &str = "data-reveal-index";

fn apply_hidden(el: &web::HtmlElement, preset: &RevealPreset, index: usize) {
    let (opacity, transform) = preset.hidden_state(index);
    dom::set_style(el, "opacity", opacity);
    dom::set_style(el, "transform", &transform);
}

fn apply_revealed(el: &web::HtmlElement) {
    dom::set_style(el, "opacity", REVEALED_OPACITY);
    dom::set_style(el, "transform", REVEALED_TRANSFORM);
}

fn observe_preset(document: &web::Document, preset: RevealPreset) -> anyhow::Result<usize> {
    let targets: Vec<web::HtmlElement> = dom::query_all(document, preset.selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    apply_revealed(&el);
                } else if should_hide_on_exit(entry.bounding_client_rect().top()) {
                    let index = el
                        .get_attribute(INDEX_ATTR)
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(0);
                    apply_hidden(&el, &preset, index);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    callback.forget();

    for (index, el) in targets.iter().enumerate() {
        _ = el.set_attribute(INDEX_ATTR, &index.to_string());
        apply_hidden(el, &preset, index);
        dom::set_style(el, "transition", &preset.transition(index));
        observer.observe(el);
    }
    Ok(targets.len())
}

/// Hide every reveal target and fade it in as it scrolls into view.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    if dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY) {
        log::info!("[reveal] reduced motion requested, leaving content static");
        return Ok(());
    }
    for preset in REVEAL_PRESETS {
        let count = observe_preset(document, preset)?;
        log::debug!("[reveal] {} x{}", preset.selector, count);
    }
    Ok(())
}
