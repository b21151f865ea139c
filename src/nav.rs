use crate::core::{header_scrolled, ripple_box, RIPPLE_LIFETIME_MS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_header_scroll(window: &web::Window, document: &web::Document) {
    let Ok(Some(header)) = document.query_selector("header") else {
        return;
    };
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let y = win.scroll_y().unwrap_or(0.0);
        let classes = header.class_list();
        _ = if header_scrolled(y) {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
    });
}

#[derive(Clone)]
struct MobileMenu {
    button: web::Element,
    menu: web::Element,
    body: Option<web::HtmlElement>,
}

impl MobileMenu {
    fn is_open(&self) -> bool {
        self.menu.class_list().contains("active")
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", if locked { "hidden" } else { "" });
        }
    }

    fn toggle(&self) {
        _ = self.menu.class_list().toggle("active");
        _ = self.button.class_list().toggle("active");
        self.lock_scroll(self.is_open());
    }

    fn close(&self) {
        _ = self.menu.class_list().remove_1("active");
        _ = self.button.class_list().remove_1("active");
        self.lock_scroll(false);
    }

    fn contains(&self, target: Option<web::EventTarget>) -> bool {
        let Some(node) = target.and_then(|t| t.dyn_into::<web::Node>().ok()) else {
            return false;
        };
        self.menu.contains(Some(&node)) || self.button.contains(Some(&node))
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let (Ok(Some(button)), Ok(Some(menu))) = (
        document.query_selector(".mobile-menu-btn"),
        document.query_selector(".nav-menu"),
    ) else {
        return;
    };
    let nav = MobileMenu {
        button,
        menu,
        body: document.body(),
    };

    let m = nav.clone();
    dom::listen(&nav.button, "click", move |ev: web::Event| {
        ev.stop_propagation();
        m.toggle();
    });

    if let Ok(Some(back)) = document.query_selector(".btn-back") {
        let m = nav.clone();
        dom::listen(&back, "click", move |ev: web::Event| {
            ev.stop_propagation();
            m.close();
        });
    }

    let m = nav.clone();
    dom::listen(document, "click", move |ev: web::Event| {
        if m.is_open() && !m.contains(ev.target()) {
            m.close();
        }
    });

    for link in dom::query_all(document, ".nav-menu a") {
        let m = nav.clone();
        dom::listen(&link, "click", move |_: web::Event| m.close());
    }
}

fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

fn wire_ripples(document: &web::Document) {
    for button in dom::query_all(document, ".btn") {
        let doc = document.clone();
        let host = button.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            let rect = host.get_bounding_client_rect();
            let (size, left, top) = ripple_box(
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                ev.client_x() as f64,
                ev.client_y() as f64,
            );
            let Ok(ripple) = doc
                .create_element("span")
                .and_then(|el| el.dyn_into::<web::HtmlElement>().map_err(Into::into))
            else {
                return;
            };
            dom::set_style(&ripple, "width", &format!("{size}px"));
            dom::set_style(&ripple, "height", &format!("{size}px"));
            dom::set_style(&ripple, "left", &format!("{left}px"));
            dom::set_style(&ripple, "top", &format!("{top}px"));
            _ = ripple.class_list().add_1("ripple");
            if host.append_child(&ripple).is_ok() {
                dom::set_timeout(RIPPLE_LIFETIME_MS, move || ripple.remove());
            }
        });
    }
}

/// Header state, mobile menu, in-page smooth scrolling and button ripples.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    wire_header_scroll(&window, document);
    wire_mobile_menu(document);
    wire_smooth_anchors(document);
    wire_ripples(document);
    log::debug!("[nav] page interactions wired");
    Ok(())
}
