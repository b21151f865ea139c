use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::{
    card_scale, join_transitions, letter_animation, planet_rotation_deg, portrait_tilt,
    section_offset, tilt_transform, title_words, CARD_HOVER_TRANSITION, CTA_PULSE_ANIMATION,
    CTA_SELECTOR, EFFECT_KEYFRAMES, HERO_TITLE_SELECTOR, PLANET_SETTLE_TRANSITION,
    PLANET_SPIN_MS, PLANET_SPIN_SCALE, PLANET_SPIN_TRANSITION, PORTRAIT_TILT_TRANSITION,
    SECTION_PARALLAX_TRANSITION,
};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn html_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    dom::query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

fn inline_transition(el: &web::HtmlElement) -> String {
    el.style()
        .get_property_value("transition")
        .unwrap_or_default()
}

fn inject_keyframes(document: &web::Document) -> anyhow::Result<()> {
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let style = document.create_element("style").map_err(dom::js_err)?;
    style.set_text_content(Some(EFFECT_KEYFRAMES));
    head.append_child(&style).map_err(dom::js_err)?;
    Ok(())
}

fn span(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = document
        .create_element("span")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("<span> is not an HtmlElement"))?;
    el.set_class_name(class);
    dom::set_style(&el, "display", "inline-block");
    Ok(el)
}

/// Rebuild the hero title as word spans of letter spans, each letter on a
/// staggered fade. Letters go in as text, never as markup.
fn split_hero_title(document: &web::Document) -> anyhow::Result<()> {
    let Ok(Some(title)) = document.query_selector(HERO_TITLE_SELECTOR) else {
        return Ok(());
    };
    let text = title.text_content().unwrap_or_default();
    title.set_text_content(None);

    let mut index = 0;
    for (i, word) in title_words(&text).into_iter().enumerate() {
        if i > 0 {
            title
                .append_child(&document.create_text_node(" "))
                .map_err(dom::js_err)?;
        }
        let word_el = span(document, "word")?;
        dom::set_style(&word_el, "white-space", "nowrap");
        for ch in word.chars() {
            let letter = span(document, "letter")?;
            letter.set_text_content(Some(&ch.to_string()));
            dom::set_style(&letter, "animation", &letter_animation(index));
            word_el.append_child(&letter).map_err(dom::js_err)?;
            index += 1;
        }
        title.append_child(&word_el).map_err(dom::js_err)?;
    }
    log::debug!("[effects] hero title split into {} letters", index);
    Ok(())
}

fn pulse_cta(document: &web::Document) {
    for button in html_elements(document, CTA_SELECTOR) {
        dom::set_style(&button, "animation", CTA_PULSE_ANIMATION);
    }
}

fn wire_card_hover(document: &web::Document) {
    for card in html_elements(document, ".service-card") {
        let transition = join_transitions(&inline_transition(&card), CARD_HOVER_TRANSITION);
        dom::set_style(&card, "transition", &transition);
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let el = card.clone();
            dom::listen(&card, event, move |_: web::Event| {
                dom::set_style(&el, "scale", &card_scale(hovered).to_string());
            });
        }
    }
}

fn wire_planet_spin(document: &web::Document) {
    for planet in html_elements(document, ".timeline-planet") {
        let base = Rc::new(inline_transition(&planet));
        let mut turns = 0u32;
        let el = planet.clone();
        dom::listen(&planet, "click", move |_: web::Event| {
            turns += 1;
            dom::set_style(&el, "transition", &join_transitions(&base, PLANET_SPIN_TRANSITION));
            dom::set_style(&el, "rotate", &format!("{}deg", planet_rotation_deg(turns)));
            dom::set_style(&el, "scale", &PLANET_SPIN_SCALE.to_string());

            let settle = el.clone();
            let base = base.clone();
            dom::set_timeout(PLANET_SPIN_MS, move || {
                let transition = join_transitions(&base, PLANET_SETTLE_TRANSITION);
                dom::set_style(&settle, "transition", &transition);
                dom::set_style(&settle, "scale", "1");
            });
        });
    }
}

fn wire_portrait_tilt(document: &web::Document) {
    let Ok(Some(wrapper)) = document.query_selector(".portrait-wrapper") else {
        return;
    };
    let Some(image) = dom::query::<web::HtmlElement>(&wrapper, ".portrait-image") else {
        return;
    };
    dom::set_style(&image, "transition", PORTRAIT_TILT_TRANSITION);

    let (area, img) = (wrapper.clone(), image.clone());
    dom::listen(&wrapper, "mousemove", move |ev: web::MouseEvent| {
        let rect = area.get_bounding_client_rect();
        let (rotate_y, rotate_x) = portrait_tilt(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            ev.client_x() as f64,
            ev.client_y() as f64,
        );
        dom::set_style(&img, "transform", &tilt_transform(rotate_y, rotate_x));
    });
    dom::listen(&wrapper, "mouseleave", move |_: web::Event| {
        dom::set_style(&image, "transform", &tilt_transform(0.0, 0.0));
    });
}

/// Document top of `el` from the offset chain. Offsets ignore transforms, so
/// the section's own drift does not feed back into its position.
fn layout_top(el: &web::HtmlElement) -> f64 {
    let mut top = 0.0;
    let mut current = Some(el.clone());
    while let Some(node) = current {
        top += node.offset_top() as f64;
        current = node
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    top
}

fn wire_section_parallax(window: &web::Window, document: &web::Document) {
    let sections = html_elements(document, "section");
    if sections.is_empty() {
        return;
    }
    for section in &sections {
        let transition = join_transitions(&inline_transition(section), SECTION_PARALLAX_TRANSITION);
        dom::set_style(section, "transition", &transition);
    }

    let win = window.clone();
    let update = move || {
        let scroll = win.scroll_y().unwrap_or(0.0);
        let (_, viewport_height) = dom::inner_size(&win);
        for section in &sections {
            let top = layout_top(section) - scroll;
            let height = section.offset_height() as f64;
            let offset = section_offset(top, height, viewport_height);
            dom::set_style(section, "translate", &format!("0 {offset:.1}px"));
        }
    };
    update();
    dom::listen(window, "scroll", move |_: web::Event| update());
}

/// Hero letters, CTA glow, card hover, planet spin, portrait tilt and
/// section parallax. Runs after the reveal so hover and spin transitions are
/// appended to the reveal ones. Skipped entirely under reduced motion.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    if dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY) {
        log::info!("[effects] reduced motion, skipping");
        return Ok(());
    }

    inject_keyframes(document)?;
    split_hero_title(document)?;
    pulse_cta(document);
    wire_card_hover(document);
    wire_planet_spin(document);
    wire_portrait_tilt(document);
    wire_section_parallax(&window, document);
    log::info!("[effects] ready");
    Ok(())
}
