use crate::constants::*;
use crate::core::{
    install_each, submit_contact, submit_newsletter, Step, Transport, TransportError,
};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `fetch` POST in `no-cors` mode. The response is opaque, so only a thrown
/// error counts as a failure.
pub struct FetchTransport;

fn network(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<(), TransportError> {
        let window = web::window().ok_or_else(|| TransportError::Network("no window".into()))?;
        let headers = web::Headers::new().map_err(network)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(network)?;

        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_mode(web::RequestMode::NoCors);
        init.set_cache(web::RequestCache::NoCache);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        let request = web::Request::new_with_str_and_init(url, &init).map_err(network)?;
        JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        Ok(())
    }
}

/// Value of an `<input>` or `<textarea>` by id, empty when absent.
fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn wire_contact(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(document, CONTACT_FORM_ID) else {
        log::debug!("[forms] no #{} on this page", CONTACT_FORM_ID);
        return Ok(());
    };
    let button: web::HtmlButtonElement = dom::query(&form, "button[type=\"submit\"]")
        .ok_or_else(|| anyhow::anyhow!("#{} has no submit button", CONTACT_FORM_ID))?;

    let doc = document.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let (name, email, message) = (
            field_value(&doc, "name"),
            field_value(&doc, "email"),
            field_value(&doc, "message"),
        );
        let idle_label = button.inner_text();
        let button = button.clone();
        let form = target.clone();
        spawn_local(async move {
            let busy = button.clone();
            let sending = move || {
                busy.set_disabled(true);
                busy.set_inner_text(SENDING_LABEL);
            };
            match submit_contact(&FetchTransport, &name, &email, &message, sending).await {
                Err(e) => {
                    log::warn!("[forms] contact rejected: {}", e);
                    dom::alert(e.notice());
                }
                Ok(outcome) => {
                    dom::alert(outcome.message());
                    if outcome.is_sent() {
                        log::info!("[forms] contact message sent");
                        form.reset();
                    }
                    button.set_disabled(false);
                    button.set_inner_text(&idle_label);
                }
            }
        });
    });
    Ok(())
}

fn wire_newsletter(document: &web::Document) -> anyhow::Result<()> {
    let button = document
        .query_selector(NEWSLETTER_BUTTON_SELECTOR)
        .map_err(dom::js_err)?
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());
    let input = dom::by_id::<web::HtmlInputElement>(document, NEWSLETTER_INPUT_ID);
    let (Some(button), Some(input)) = (button, input) else {
        log::debug!("[forms] no newsletter signup on this page");
        return Ok(());
    };

    let target = button.clone();
    dom::listen(&target, "click", move |_: web::Event| {
        let email = input.value();
        let button = button.clone();
        let input = input.clone();
        spawn_local(async move {
            let busy = button.clone();
            let sending = move || busy.set_disabled(true);
            match submit_newsletter(&FetchTransport, &email, sending).await {
                Err(e) => dom::alert(e.notice()),
                Ok(outcome) => {
                    dom::alert(outcome.message());
                    if outcome.is_sent() {
                        log::info!("[forms] newsletter signup sent");
                        input.set_value("");
                    }
                    button.set_disabled(false);
                }
            }
        });
    });
    Ok(())
}

const SIGNUPS: [Step<web::Document>; 2] = [
    ("forms:contact", wire_contact),
    ("forms:newsletter", wire_newsletter),
];

/// Wire the contact form and newsletter signup when present on the page. A
/// broken contact form does not keep the newsletter signup from working.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let failed = install_each(document, &SIGNUPS);
    if failed.len() == SIGNUPS.len() {
        anyhow::bail!("no signup could be wired");
    }
    Ok(())
}
