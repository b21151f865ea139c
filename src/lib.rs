#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod bigbang;
mod chat;
mod constants;
mod core;
mod dom;
mod effects;
mod forms;
mod frame;
mod nav;
mod render;
mod reveal;

// Each component is independent; one failing must not stop the others.
// Effects follow the reveal so they can extend its transitions.
const COMPONENTS: [crate::core::Step<web::Document>; 7] = [
    ("reveal", reveal::install),
    ("effects", effects::install),
    ("nav", nav::install),
    ("bigbang", bigbang::install),
    ("background", background::install),
    ("chat", chat::install),
    ("forms", forms::install),
];

fn install_all(document: &web::Document) {
    let failed = crate::core::install_each(document, &COMPONENTS);
    let ready = COMPONENTS.len() - failed.len();
    log::info!("{} of {} components ready", ready, COMPONENTS.len());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hair-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let mut pending = Some(document.clone());
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            if let Some(d) = pending.take() {
                install_all(&d);
            }
        });
    } else {
        install_all(&document);
    }
    Ok(())
}
